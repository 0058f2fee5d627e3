//! Week enumeration and date labels.

use chrono::{Datelike, Days, NaiveDate};

use crate::i18n::Translations;

/// Ordered week-start dates covering `start_month..=end_month` of `year`.
///
/// The first entry is aligned backward to `week_start_day` (0=Sunday) and may
/// fall in the previous month. Reversed or out-of-range months produce an
/// empty sequence.
pub fn enumerate_weeks(
    year: i32,
    start_month: u32,
    end_month: u32,
    week_start_day: u32,
) -> Vec<NaiveDate> {
    let (Some(range_start), Some(range_end)) = (
        NaiveDate::from_ymd_opt(year, start_month, 1),
        last_day_of_month(year, end_month),
    ) else {
        return Vec::new();
    };

    let Some(mut current) = align_to_week_start(range_start, week_start_day) else {
        return Vec::new();
    };
    let mut weeks = Vec::new();
    while current <= range_end {
        weeks.push(current);
        match current.checked_add_days(Days::new(7)) {
            Some(next) => current = next,
            None => break,
        }
    }
    weeks
}

/// Most recent date on or before `date` whose weekday is `week_start_day`.
///
/// `None` when that date lies before the earliest representable date.
pub fn align_to_week_start(date: NaiveDate, week_start_day: u32) -> Option<NaiveDate> {
    let weekday = date.weekday().num_days_from_sunday();
    let days_back = (weekday + 7 - week_start_day % 7) % 7;
    date.checked_sub_days(Days::new(u64::from(days_back)))
}

/// Dates shown as the columns of one weekly grid.
///
/// Stops early if the span runs past the latest representable date.
pub fn week_days(week_start: NaiveDate, day_count: u32) -> Vec<NaiveDate> {
    (0..day_count)
        .map_while(|offset| week_start.checked_add_days(Days::new(u64::from(offset))))
        .collect()
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        return NaiveDate::from_ymd_opt(year, 12, 31);
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()
}

/// Week-of-year number printed in page headers.
///
/// Weeks run Sunday to Saturday and week 1 is the week containing 1 January,
/// so the last days of December can already belong to week 1 of the next year.
pub fn week_number(date: NaiveDate) -> u32 {
    let week_start = align_to_week_start(date, 0).unwrap_or(date);
    let first_week = |year: i32| {
        NaiveDate::from_yo_opt(year, 1).map(|d| align_to_week_start(d, 0).unwrap_or(d))
    };

    let base = match first_week(date.year() + 1) {
        Some(next_year) if week_start >= next_year => next_year,
        _ => first_week(date.year()).unwrap_or(week_start),
    };
    ((week_start - base).num_days() / 7) as u32 + 1
}

/// Localized "<Month> <year>" label.
pub fn month_year_label(date: NaiveDate, translations: &Translations) -> String {
    format!("{} {}", translations.month(date.month()), date.year())
}
