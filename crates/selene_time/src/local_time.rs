//! Wall-clock calendar date/time.
//!
//! `LocalDateTime` carries the caller's local calendar fields verbatim.
//! The lunar engine converts it straight to a Julian Date without any
//! timezone or daylight-saving adjustment.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::calendar::{day_of_year, days_in_month};
use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Local calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl LocalDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Current local wall-clock time.
    pub fn now() -> Self {
        chrono::Local::now().naive_local().into()
    }

    /// Same calendar date at `hour:minute:00`.
    pub fn with_time(&self, hour: u32, minute: u32) -> Self {
        Self::new(self.year, self.month, self.day, hour, minute, 0.0)
    }

    /// Same calendar date at midnight.
    pub fn start_of_day(&self) -> Self {
        self.with_time(0, 0)
    }

    /// Hours elapsed since midnight, including minutes and seconds.
    pub fn fractional_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Julian Date of this wall-clock instant.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(
            self.year,
            self.month,
            self.day as f64 + self.fractional_hours() / 24.0,
        )
    }

    /// Calendar fields of a Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// 1-based day index within the year (Jan 1 = 1).
    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Shift by whole calendar days, keeping the wall-clock time.
    ///
    /// Crosses month and year boundaries; `n` may be negative.
    pub fn add_days(&self, n: i64) -> Self {
        let jd_midnight = calendar_to_jd(self.year, self.month, self.day as f64);
        let (year, month, day_frac) = jd_to_calendar(jd_midnight + n as f64);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            ..*self
        }
    }

    /// The next whole minute, seconds zeroed.
    fn plus_one_minute(&self) -> Self {
        let next = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .and_then(|t| t.checked_add_signed(chrono::Duration::minutes(1)));
        match next {
            Some(t) => t.into(),
            None => Self {
                second: 59.999_999,
                ..*self
            },
        }
    }

    /// Check that the fields name a real calendar date and clock time.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate(format!("month {} out of range", self.month)));
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {} out of range for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "time {:02}:{:02} out of range",
                self.hour, self.minute
            )));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!("second {} out of range", self.second)));
        }
        Ok(())
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }
}

impl TryFrom<LocalDateTime> for NaiveDateTime {
    type Error = TimeError;

    fn try_from(t: LocalDateTime) -> Result<Self, Self::Error> {
        t.validate()?;
        let whole = t.second.floor();
        let nanos = ((t.second - whole) * 1e9) as u32;
        NaiveDate::from_ymd_opt(t.year, t.month, t.day)
            .and_then(|d| d.and_hms_nano_opt(t.hour, t.minute, whole as u32, nanos))
            .ok_or_else(|| TimeError::InvalidDate(t.to_string()))
    }
}

impl fmt::Display for LocalDateTime {
    /// Seconds are rounded to the microsecond. A value that rounds up to 60
    /// carries into the minute (and onward through the calendar).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let micros = (self.second.max(0.0) * 1e6).round() as u64;
        let (t, micros) = if micros >= 60_000_000 {
            (self.plus_one_minute(), micros - 60_000_000)
        } else {
            (*self, micros)
        };
        let (whole, frac) = (micros / 1_000_000, micros % 1_000_000);
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            t.year, t.month, t.day, t.hour, t.minute, whole
        )?;
        if frac != 0 {
            write!(f, ".{frac:06}")?;
        }
        Ok(())
    }
}

impl FromStr for LocalDateTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` and `YYYY-MM-DDThh:mm:ss[.fff]`.
    ///
    /// A trailing `Z` is tolerated and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let mut fields = date_part.splitn(3, '-');
        let year = parse_field::<i32>(fields.next(), "year", s)?;
        let month = parse_field::<u32>(fields.next(), "month", s)?;
        let day = parse_field::<u32>(fields.next(), "day", s)?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut fields = t.splitn(3, ':');
                let hour = parse_field::<u32>(fields.next(), "hour", s)?;
                let minute = parse_field::<u32>(fields.next(), "minute", s)?;
                let second = match fields.next() {
                    Some(sec) => parse_field::<f64>(Some(sec), "second", s)?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
        };

        let parsed = Self::new(year, month, day, hour, minute, second);
        parsed.validate()?;
        Ok(parsed)
    }
}

fn parse_field<T: FromStr>(field: Option<&str>, name: &str, input: &str) -> Result<T, TimeError> {
    field
        .filter(|f| !f.is_empty())
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| TimeError::Parse(format!("invalid {name} in '{input}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = LocalDateTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = LocalDateTime::date(2024, 1, 15);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = LocalDateTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:45.123"), "got: {s}");
    }

    #[test]
    fn display_carries_rounded_seconds() {
        let t = LocalDateTime::new(2024, 1, 25, 17, 53, 59.9999999);
        assert_eq!(t.to_string(), "2024-01-25T17:54:00");
        let t = LocalDateTime::new(2023, 12, 31, 23, 59, 59.9999996);
        assert_eq!(t.to_string(), "2024-01-01T00:00:00");
    }

    #[test]
    fn display_never_shows_sixty_seconds() {
        let event = LocalDateTime::from_jd(2_460_335.246_527_7);
        let s = event.to_string();
        let sec: f64 = s.rsplit(':').next().unwrap().parse().unwrap();
        assert!(sec < 60.0, "{s}");
    }

    #[test]
    fn jd_roundtrip_keeps_minutes() {
        let t = LocalDateTime::new(2024, 1, 25, 17, 54, 0.0);
        let back = LocalDateTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (2024, 1, 25));
        let minutes = back.hour * 60 + back.minute;
        // from_jd may land a hair before the minute boundary
        assert!((minutes as i32 - (17 * 60 + 54)).abs() <= 1);
    }

    #[test]
    fn add_days_crosses_year() {
        let t = LocalDateTime::new(2024, 1, 10, 9, 15, 0.0);
        let back = t.add_days(-30);
        assert_eq!((back.year, back.month, back.day), (2023, 12, 11));
        assert_eq!((back.hour, back.minute), (9, 15));
    }

    #[test]
    fn add_days_across_leap_day() {
        let t = LocalDateTime::date(2024, 2, 28);
        let next = t.add_days(2);
        assert_eq!((next.month, next.day), (3, 1));
    }

    #[test]
    fn parse_date_only() {
        let t: LocalDateTime = "2024-02-29".parse().unwrap();
        assert_eq!(t, LocalDateTime::date(2024, 2, 29));
    }

    #[test]
    fn parse_with_time_and_zulu() {
        let t: LocalDateTime = "2000-01-06T18:14:00Z".parse().unwrap();
        assert_eq!(t, LocalDateTime::new(2000, 1, 6, 18, 14, 0.0));
        let short: LocalDateTime = "2000-01-06 18:14".parse().unwrap();
        assert_eq!(short, t);
    }

    #[test]
    fn parse_rejects_impossible_date() {
        assert!(matches!(
            "2023-02-29".parse::<LocalDateTime>(),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            "2023-xx-01".parse::<LocalDateTime>(),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn naive_conversion_roundtrip() {
        let t = LocalDateTime::new(2024, 6, 1, 21, 5, 30.0);
        let naive = NaiveDateTime::try_from(t).unwrap();
        assert_eq!(LocalDateTime::from(naive), t);
    }

    #[test]
    fn day_of_year_method() {
        assert_eq!(LocalDateTime::date(2024, 12, 31).day_of_year(), 366);
    }
}
