//! Planner configuration: every user-selectable parameter of a planner run.
//!
//! The value is produced by the caller (CLI flags, a JSON file, or both) and
//! is read-only to the rest of the crate. [`PlannerConfig::validate`] is the
//! rejection step for inconsistent input; the layout engine never calls it and
//! degrades to empty sequences instead.

use chrono::{Datelike, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PlannerError, Result};

/// Paper sizes supported by the planner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PaperSize {
    /// A4 paper size (210 x 297 mm)
    #[default]
    A4,
    /// A3 paper size (297 x 420 mm)
    A3,
}

impl PaperSize {
    /// Page dimensions in millimeters (width, height)
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A3 => (297.0, 420.0),
        }
    }

    /// Lower-case tag used in output file names
    pub fn file_tag(&self) -> &'static str {
        match self {
            PaperSize::A4 => "a4",
            PaperSize::A3 => "a3",
        }
    }
}

/// Languages with a translation bundle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum HourFormat {
    #[serde(rename = "12")]
    #[value(name = "12")]
    H12,
    #[default]
    #[serde(rename = "24")]
    #[value(name = "24")]
    H24,
}

/// Length of one time slot. Every variant divides an hour evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeInterval {
    #[value(name = "10")]
    Min10,
    #[value(name = "15")]
    Min15,
    #[default]
    #[value(name = "20")]
    Min20,
    #[value(name = "30")]
    Min30,
    #[value(name = "60")]
    Min60,
}

impl TimeInterval {
    pub fn minutes(&self) -> u32 {
        match self {
            TimeInterval::Min10 => 10,
            TimeInterval::Min15 => 15,
            TimeInterval::Min20 => 20,
            TimeInterval::Min30 => 30,
            TimeInterval::Min60 => 60,
        }
    }

    /// Number of slots that make up one hour
    pub fn slots_per_hour(&self) -> u32 {
        60 / self.minutes()
    }
}

impl TryFrom<u32> for TimeInterval {
    type Error = String;

    fn try_from(minutes: u32) -> std::result::Result<Self, Self::Error> {
        match minutes {
            10 => Ok(TimeInterval::Min10),
            15 => Ok(TimeInterval::Min15),
            20 => Ok(TimeInterval::Min20),
            30 => Ok(TimeInterval::Min30),
            60 => Ok(TimeInterval::Min60),
            other => Err(format!(
                "unsupported time interval {} (expected 10, 15, 20, 30 or 60)",
                other
            )),
        }
    }
}

impl From<TimeInterval> for u32 {
    fn from(interval: TimeInterval) -> Self {
        interval.minutes()
    }
}

/// Full planner configuration.
///
/// Week days are numbered 0=Sunday..6=Saturday. The day span may wrap, so
/// `week_start_day = 5, week_end_day = 1` covers Fri, Sat, Sun, Mon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    pub year: i32,
    pub start_month: u32,
    pub end_month: u32,
    pub paper_size: PaperSize,
    pub language: Language,
    pub week_start_day: u32,
    pub week_end_day: u32,
    pub start_hour: u32,
    pub end_hour: u32,
    pub hour_format: HourFormat,
    pub time_intervals: TimeInterval,
    pub show_header: bool,
    pub show_grid: bool,
}

/// Years a planner can be generated for
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            year: Local::now().year(),
            start_month: 1,
            end_month: 12,
            paper_size: PaperSize::A4,
            language: Language::En,
            week_start_day: 1,
            week_end_day: 5,
            start_hour: 6,
            end_hour: 23,
            hour_format: HourFormat::H24,
            time_intervals: TimeInterval::Min20,
            show_header: true,
            show_grid: true,
        }
    }
}

impl PlannerConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::ConfigFile(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| PlannerError::ConfigFile(format!("Invalid JSON: {}", e)))
    }

    /// Number of day columns per week, always in 1..=7.
    ///
    /// Week day numbers outside 0..=6 wrap modulo 7.
    pub fn day_count(&self) -> u32 {
        let start = self.week_start_day % 7;
        let end = self.week_end_day % 7;
        if end >= start {
            end - start + 1
        } else {
            7 - start + end + 1
        }
    }

    /// Reject configurations the layout engine would silently degrade on.
    pub fn validate(&self) -> Result<()> {
        if !YEAR_RANGE.contains(&self.year) {
            return Err(PlannerError::InvalidConfig(format!(
                "year must be between {} and {}, got {}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end(),
                self.year
            )));
        }
        for (field, month) in [("startMonth", self.start_month), ("endMonth", self.end_month)] {
            if !(1..=12).contains(&month) {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be between 1 and 12, got {}",
                    field, month
                )));
            }
        }
        if self.end_month < self.start_month {
            return Err(PlannerError::InvalidConfig(format!(
                "endMonth ({}) is before startMonth ({})",
                self.end_month, self.start_month
            )));
        }
        for (field, hour) in [("startHour", self.start_hour), ("endHour", self.end_hour)] {
            if hour > 23 {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be between 0 and 23, got {}",
                    field, hour
                )));
            }
        }
        if self.end_hour < self.start_hour {
            return Err(PlannerError::InvalidConfig(format!(
                "endHour ({}) is before startHour ({})",
                self.end_hour, self.start_hour
            )));
        }
        for (field, day) in [
            ("weekStartDay", self.week_start_day),
            ("weekEndDay", self.week_end_day),
        ] {
            if day > 6 {
                return Err(PlannerError::InvalidConfig(format!(
                    "{} must be between 0 (Sunday) and 6 (Saturday), got {}",
                    field, day
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlannerConfig {
        PlannerConfig {
            year: 2025,
            ..PlannerConfig::default()
        }
    }

    #[test]
    fn test_day_count_plain_span() {
        let c = PlannerConfig {
            week_start_day: 1,
            week_end_day: 5,
            ..config()
        };
        assert_eq!(c.day_count(), 5);
    }

    #[test]
    fn test_day_count_wraps_around_week_end() {
        let c = PlannerConfig {
            week_start_day: 5,
            week_end_day: 1,
            ..config()
        };
        assert_eq!(c.day_count(), 4);
    }

    #[test]
    fn test_day_count_single_day_and_full_week() {
        let single = PlannerConfig {
            week_start_day: 3,
            week_end_day: 3,
            ..config()
        };
        assert_eq!(single.day_count(), 1);

        let full = PlannerConfig {
            week_start_day: 1,
            week_end_day: 0,
            ..config()
        };
        assert_eq!(full.day_count(), 7);
    }

    #[test]
    fn test_paper_dimensions() {
        assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
        assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_reversed_months() {
        let c = PlannerConfig {
            start_month: 6,
            end_month: 2,
            ..config()
        };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("endMonth"));
    }

    #[test]
    fn test_validate_rejects_reversed_hours() {
        let c = PlannerConfig {
            start_hour: 20,
            end_hour: 8,
            ..config()
        };
        assert!(matches!(c.validate(), Err(PlannerError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let month = PlannerConfig {
            end_month: 13,
            ..config()
        };
        assert!(month.validate().is_err());

        let hour = PlannerConfig {
            end_hour: 24,
            ..config()
        };
        assert!(hour.validate().is_err());

        let day = PlannerConfig {
            week_end_day: 7,
            ..config()
        };
        assert!(day.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_years_at_date_range_edges() {
        for year in [chrono::NaiveDate::MIN.year(), chrono::NaiveDate::MAX.year(), 0, 10_000] {
            let c = PlannerConfig { year, ..config() };
            let err = c.validate().unwrap_err();
            assert!(err.to_string().contains("year"), "{}", err);
        }
        for year in [1, 9999] {
            assert!(PlannerConfig { year, ..config() }.validate().is_ok());
        }
    }

    #[test]
    fn test_json_uses_original_field_names() {
        let json = r#"{
            "year": 2025,
            "startMonth": 3,
            "endMonth": 4,
            "paperSize": "A3",
            "language": "de",
            "hourFormat": "12",
            "timeIntervals": 15,
            "showGrid": false
        }"#;
        let c: PlannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c.year, 2025);
        assert_eq!(c.start_month, 3);
        assert_eq!(c.end_month, 4);
        assert_eq!(c.paper_size, PaperSize::A3);
        assert_eq!(c.language, Language::De);
        assert_eq!(c.hour_format, HourFormat::H12);
        assert_eq!(c.time_intervals, TimeInterval::Min15);
        assert!(!c.show_grid);
        // Missing keys fall back to defaults
        assert!(c.show_header);
        assert_eq!(c.week_start_day, 1);
        assert_eq!(c.week_end_day, 5);
    }

    #[test]
    fn test_json_rejects_unsupported_interval() {
        let json = r#"{ "timeIntervals": 25 }"#;
        assert!(serde_json::from_str::<PlannerConfig>(json).is_err());
    }
}
