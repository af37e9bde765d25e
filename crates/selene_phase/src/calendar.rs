//! Batch queries: a month of daily phases and the 31-day illumination trend.

use selene_time::{LocalDateTime, days_in_month};
use tracing::debug;

use crate::error::PhaseError;
use crate::phase::calculate_phase;
use crate::phase_name::PhaseName;

/// Days before today included in the illumination trend.
pub const TREND_LOOKBACK_DAYS: i64 = 30;

/// Phase summary for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayMoonData {
    /// The day, at local midnight.
    pub date: LocalDateTime,
    pub phase: PhaseName,
    pub illumination_percent: u8,
}

impl DayMoonData {
    /// Moon emoji of the day's phase.
    pub fn symbol(&self) -> &'static str {
        self.phase.symbol()
    }
}

/// One point of the illumination trend series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// `"Nd"` for N days ago, `"Today"` for the final point.
    pub label: String,
    /// Illumination percentage on that day.
    pub value: u8,
}

/// Phase data for every day of a month, in ascending day order.
///
/// `month_index` is zero-based (0 = January .. 11 = December). Each day is
/// evaluated at local midnight.
pub fn month_moon_data(year: i32, month_index: u32) -> Result<Vec<DayMoonData>, PhaseError> {
    if month_index > 11 {
        return Err(PhaseError::InvalidMonth(month_index));
    }
    let month = month_index + 1;
    let days: Vec<DayMoonData> = (1..=days_in_month(year, month))
        .map(|day| {
            let date = LocalDateTime::date(year, month, day);
            let phase = calculate_phase(&date);
            DayMoonData {
                date,
                phase: phase.phase,
                illumination_percent: phase.illumination_percent,
            }
        })
        .collect();
    debug!(year, month, days = days.len(), "computed month moon data");
    Ok(days)
}

/// Illumination for `now` and each of the 30 preceding days, oldest first.
///
/// Every point keeps the wall-clock time of `now`.
pub fn illumination_trend_at(now: &LocalDateTime) -> Vec<TrendPoint> {
    (0..=TREND_LOOKBACK_DAYS)
        .rev()
        .map(|days_ago| {
            let date = now.add_days(-days_ago);
            let label = if days_ago == 0 {
                "Today".to_string()
            } else {
                format!("{days_ago}d")
            };
            TrendPoint {
                label,
                value: calculate_phase(&date).illumination_percent,
            }
        })
        .collect()
}

/// [`illumination_trend_at`] for the current local time.
pub fn illumination_trend() -> Vec<TrendPoint> {
    illumination_trend_at(&LocalDateTime::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(month_moon_data(2024, 1).unwrap().len(), 29);
    }

    #[test]
    fn common_february_has_28_days() {
        assert_eq!(month_moon_data(2023, 1).unwrap().len(), 28);
    }

    #[test]
    fn days_ascend_from_first_at_midnight() {
        let days = month_moon_data(2024, 0).unwrap();
        assert_eq!(days.len(), 31);
        for (i, d) in days.iter().enumerate() {
            assert_eq!(d.date.day as usize, i + 1);
            assert_eq!(d.date.month, 1);
            assert_eq!((d.date.hour, d.date.minute), (0, 0));
        }
    }

    #[test]
    fn each_day_matches_single_computation() {
        for d in month_moon_data(2024, 5).unwrap() {
            let p = calculate_phase(&d.date);
            assert_eq!(d.phase, p.phase);
            assert_eq!(d.illumination_percent, p.illumination_percent);
            assert_eq!(d.symbol(), p.symbol());
        }
    }

    #[test]
    fn month_index_out_of_range() {
        assert_eq!(month_moon_data(2024, 12), Err(PhaseError::InvalidMonth(12)));
    }

    #[test]
    fn trend_has_31_points_ending_today() {
        let trend = illumination_trend_at(&LocalDateTime::new(2024, 1, 10, 8, 0, 0.0));
        assert_eq!(trend.len(), 31);
        assert_eq!(trend[0].label, "30d");
        assert_eq!(trend[29].label, "1d");
        assert_eq!(trend[30].label, "Today");
    }

    #[test]
    fn trend_values_match_daily_phase() {
        let now = LocalDateTime::new(2024, 3, 1, 21, 30, 0.0);
        let trend = illumination_trend_at(&now);
        let yesterday = LocalDateTime::new(2024, 2, 29, 21, 30, 0.0);
        assert_eq!(trend[29].value, calculate_phase(&yesterday).illumination_percent);
        assert_eq!(trend[30].value, calculate_phase(&now).illumination_percent);
    }

    #[test]
    fn live_trend_shape() {
        let trend = illumination_trend();
        assert_eq!(trend.len(), 31);
        assert_eq!(trend.last().map(|p| p.label.as_str()), Some("Today"));
    }
}
