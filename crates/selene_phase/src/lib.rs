//! Lunar phase engine over a mean synodic month.
//!
//! This crate provides:
//! - Phase classification into eight named phases, illumination and age
//! - Simplified moonrise/moonset and sunrise/sunset estimates
//! - Countdowns to the next new and full moon
//! - Month batches and the 31-day illumination trend
//!
//! Everything here is pure arithmetic over a `LocalDateTime`. Functions
//! whose name ends without `_at` read the local wall clock instead of
//! taking `now` explicitly.

pub mod calendar;
pub mod countdown;
pub mod error;
pub mod phase;
pub mod phase_name;
pub mod times;

pub use calendar::{
    DayMoonData, TREND_LOOKBACK_DAYS, TrendPoint, illumination_trend, illumination_trend_at,
    month_moon_data,
};
pub use countdown::{
    COUNTDOWN_CYCLE_DAYS, days_until_next_full_moon, days_until_next_full_moon_at,
    days_until_next_new_moon, days_until_next_new_moon_at, next_phase_event_at,
};
pub use error::PhaseError;
pub use phase::{
    MoonPhase, PHASE_BUCKET_BOUNDS, REFERENCE_NEW_MOON_JD, SYNODIC_MONTH_DAYS, calculate_phase,
    classify, cycle_position, illumination_fraction, phase_from_jd,
};
pub use phase_name::{ALL_PHASES, PhaseName};
pub use times::{MoonTimes, SunTimes, hours_to_clock, moon_times, seasonal_offset_hours, sun_times};

// Re-export so callers don't need to depend on selene_time directly.
pub use selene_time::LocalDateTime;
