//! Time slots for one day of the weekly grid.

use crate::config::{HourFormat, TimeInterval};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub hour: u32,
    pub minute: u32,
    pub label: String,
    /// Slot sits on an hour boundary and is drawn with stronger weight.
    pub major: bool,
}

impl TimeSlot {
    /// Compact label drawn next to intra-hour slots.
    pub fn minute_label(&self, format: HourFormat) -> String {
        match format {
            HourFormat::H12 => format!(":{:02}", self.minute),
            HourFormat::H24 => format!("{:02}", self.minute),
        }
    }
}

/// Slots for every hour in `start_hour..=end_hour`, `interval` minutes apart.
pub fn generate_slots(
    start_hour: u32,
    end_hour: u32,
    interval: TimeInterval,
    format: HourFormat,
) -> Vec<TimeSlot> {
    let step = interval.minutes() as usize;
    (start_hour..=end_hour)
        .flat_map(|hour| (0u32..60).step_by(step).map(move |minute| (hour, minute)))
        .map(|(hour, minute)| TimeSlot {
            hour,
            minute,
            label: format_time(hour, minute, format),
            major: minute == 0,
        })
        .collect()
}

pub fn format_time(hour: u32, minute: u32, format: HourFormat) -> String {
    match format {
        HourFormat::H24 => format!("{:02}:{:02}", hour, minute),
        HourFormat::H12 => {
            let display_hour = match hour {
                0 => 12,
                h if h > 12 => h - 12,
                h => h,
            };
            let suffix = if hour < 12 { "AM" } else { "PM" };
            format!("{}:{:02} {}", display_hour, minute, suffix)
        }
    }
}
