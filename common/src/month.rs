//! Month keys and the calendar-date rules shared by every component.
//!
//! [`MonthKey::day_of`] is the only place a date is reduced to a
//! day-of-month.  Dates are plain `NaiveDate`s parsed from `YYYY-MM-DD`
//! strings, so no time zone ever takes part in the conversion.

use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("month must be in 1..=12, got {0}")]
    MonthOutOfRange(u32),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("cannot parse month {0:?}, expected YYYY-MM")]
    Parse(String),
}

/// A (year, month) pair identifying one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    first: NaiveDate,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(MonthKeyError::YearOutOfRange(year))?;
        Ok(MonthKey { first })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        MonthKey {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// The current month in the local time zone.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1–12.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        num_days_in_month(self.year(), self.month())
    }

    /// Weekday of the 1st.
    pub fn first_weekday(&self) -> Weekday {
        self.first.weekday()
    }

    /// Day-of-month of `date`, or `None` when `date` lies in another month.
    pub fn day_of(&self, date: NaiveDate) -> Option<u32> {
        (date.year() == self.year() && date.month() == self.month()).then(|| date.day())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.day_of(date).is_some()
    }

    /// Date of day `day`, or `None` outside `1..=days_in_month`.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// Days `1..=days_in_month`.
    pub fn days(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.days_in_month()
    }

    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| MonthKey { first })
    }

    pub fn prev(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| MonthKey { first })
    }

    pub fn name(&self) -> &'static str {
        month_label(self.month())
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || MonthKeyError::Parse(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(parse_err)?;
        let year: i32 = year.parse().map_err(|_| parse_err())?;
        let month: u32 = month.parse().map_err(|_| parse_err())?;
        MonthKey::new(year, month)
    }
}

// ─── Week start ──────────────────────────────────────────────────────────────

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(format!("unknown week start {other:?}")),
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn month_label(m: u32) -> &'static str {
    match m {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "?",
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Gregorian days in `month` of `year`; 0 for an invalid month.
pub fn num_days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_month() {
        assert_eq!(MonthKey::new(2024, 0), Err(MonthKeyError::MonthOutOfRange(0)));
        assert_eq!(MonthKey::new(2024, 13), Err(MonthKeyError::MonthOutOfRange(13)));
        assert!(MonthKey::new(2024, 12).is_ok());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthKey::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(MonthKey::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_days_in_month_agrees_with_chrono() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let key = MonthKey::new(year, month).unwrap();
                let last = key.date_of(key.days_in_month()).unwrap();
                assert_eq!(last.succ_opt().unwrap().day(), 1, "{key}");
            }
        }
    }

    #[test]
    fn test_day_of_only_within_month() {
        let feb = MonthKey::new(2024, 2).unwrap();
        assert_eq!(feb.day_of(date(2024, 2, 1)), Some(1));
        assert_eq!(feb.day_of(date(2024, 2, 29)), Some(29));
        assert_eq!(feb.day_of(date(2024, 3, 1)), None);
        assert_eq!(feb.day_of(date(2023, 2, 14)), None);
        assert_eq!(feb.day_of(date(2024, 1, 31)), None);
    }

    #[test]
    fn test_next_prev_roll_year() {
        let dec = MonthKey::new(2023, 12).unwrap();
        assert_eq!(dec.next(), Some(MonthKey::new(2024, 1).unwrap()));
        assert_eq!(MonthKey::new(2024, 1).unwrap().prev(), Some(dec));
    }

    #[test]
    fn test_parse_and_display() {
        let key: MonthKey = "2024-03".parse().unwrap();
        assert_eq!(key, MonthKey::new(2024, 3).unwrap());
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(key.name(), "March");
        assert!("2024".parse::<MonthKey>().is_err());
        assert!(matches!(
            "2024-13".parse::<MonthKey>(),
            Err(MonthKeyError::MonthOutOfRange(13))
        ));
    }

    #[test]
    fn test_of_truncates_to_first() {
        let key = MonthKey::of(date(2024, 2, 17));
        assert_eq!(key.first_day(), date(2024, 2, 1));
        assert_eq!(key.first_weekday(), Weekday::Thu);
    }

    #[test]
    fn test_week_start_parse() {
        assert_eq!("Sunday".parse::<WeekStart>(), Ok(WeekStart::Sunday));
        assert_eq!("mon".parse::<WeekStart>(), Ok(WeekStart::Monday));
        assert!("friday".parse::<WeekStart>().is_err());
    }
}
