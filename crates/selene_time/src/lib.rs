//! Wall-clock dates and Julian Date conversion.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Date conversion
//! - `LocalDateTime`, the wall-clock value every lunar computation starts from
//! - Calendar helpers (leap years, month lengths, day-of-year)
//!
//! No timezone normalization is performed anywhere: a `LocalDateTime` is
//! taken at face value, exactly as the caller's clock shows it.

pub mod calendar;
pub mod error;
pub mod julian;
pub mod local_time;

pub use calendar::{day_of_year, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{calendar_to_jd, jd_to_calendar};
pub use local_time::LocalDateTime;
