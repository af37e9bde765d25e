//! Simplified moonrise/moonset and sunrise/sunset estimates.
//!
//! Both models are periodic placeholders. They ignore the observer's
//! location and the Moon's true position; moon times depend only on the
//! day of month and sun times only on the day of year.

use std::f64::consts::TAU;

use selene_time::LocalDateTime;

/// Mean sunrise hour around which the seasonal swing oscillates.
const BASE_SUNRISE_HOUR: f64 = 6.5;

/// Mean sunset hour around which the seasonal swing oscillates.
const BASE_SUNSET_HOUR: f64 = 18.5;

/// Peak seasonal offset in hours.
const SEASONAL_AMPLITUDE_HOURS: f64 = 1.5;

/// Days per seasonal period.
const SEASON_PERIOD_DAYS: f64 = 365.0;

/// Estimated moonrise and moonset on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonTimes {
    pub moonrise: LocalDateTime,
    pub moonset: LocalDateTime,
}

/// Estimated sunrise and sunset on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: LocalDateTime,
    pub sunset: LocalDateTime,
}

/// Split fractional hours into `(hour, minute)`, both floored.
///
/// The hour wraps modulo 24; the minute is the fractional part times 60.
pub fn hours_to_clock(hours: f64) -> (u32, u32) {
    let hour = (hours.floor() as i64).rem_euclid(24) as u32;
    let minute = ((hours % 1.0) * 60.0).floor() as u32;
    (hour, minute)
}

fn at_hours(date: &LocalDateTime, hours: f64) -> LocalDateTime {
    let (hour, minute) = hours_to_clock(hours);
    date.with_time(hour, minute)
}

/// Moonrise/moonset estimate for the calendar date of `date`.
///
/// `rise = 4 + (day mod 20) * 0.8` hours and
/// `set = rise + 12 + (day mod 5) * 0.5` hours. A set hour past midnight
/// wraps onto the same calendar date, so moonset can precede moonrise.
pub fn moon_times(date: &LocalDateTime) -> MoonTimes {
    let day = date.day;
    let rise_hours = 4.0 + (day % 20) as f64 * 0.8;
    let set_hours = rise_hours + 12.0 + (day % 5) as f64 * 0.5;
    MoonTimes {
        moonrise: at_hours(date, rise_hours),
        moonset: at_hours(date, set_hours),
    }
}

/// Seasonal offset in hours: `sin(2π · day_of_year / 365) * 1.5`.
pub fn seasonal_offset_hours(day_of_year: u32) -> f64 {
    (day_of_year as f64 / SEASON_PERIOD_DAYS * TAU).sin() * SEASONAL_AMPLITUDE_HOURS
}

/// Sunrise/sunset estimate for the calendar date of `date`.
///
/// Sunrise is `6.5 + offset` and sunset `18.5 - offset` hours, where the
/// offset comes from [`seasonal_offset_hours`].
pub fn sun_times(date: &LocalDateTime) -> SunTimes {
    let offset = seasonal_offset_hours(date.day_of_year());
    SunTimes {
        sunrise: at_hours(date, BASE_SUNRISE_HOUR + offset),
        sunset: at_hours(date, BASE_SUNSET_HOUR - offset),
    }
}
