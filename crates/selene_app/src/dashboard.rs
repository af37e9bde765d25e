//! Display-ready snapshots assembled from the engine and locale tables.

use selene_locale::{Language, full_moon_name, phase_name};
use selene_phase::{
    DayMoonData, LocalDateTime, MoonPhase, MoonTimes, PhaseName, SunTimes, TrendPoint,
    calculate_phase, days_until_next_full_moon_at, days_until_next_new_moon_at, moon_times,
    sun_times,
};

/// Everything the home screen shows for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonDashboard {
    pub at: LocalDateTime,
    pub phase: MoonPhase,
    /// Phase name in the display language.
    pub phase_label: &'static str,
    pub moon_times: MoonTimes,
    pub sun_times: SunTimes,
    pub days_until_new_moon: i64,
    pub days_until_full_moon: i64,
}

impl MoonDashboard {
    /// Snapshot for `at`. Countdowns are measured from `at` as well.
    pub fn compute(at: &LocalDateTime, language: Language) -> Self {
        let phase = calculate_phase(at);
        Self {
            at: *at,
            phase,
            phase_label: phase_name(phase.phase, language),
            moon_times: moon_times(at),
            sun_times: sun_times(at),
            days_until_new_moon: days_until_next_new_moon_at(at),
            days_until_full_moon: days_until_next_full_moon_at(at),
        }
    }
}

/// Trend points shown without premium access.
pub const TREND_PREVIEW_POINTS: usize = 10;

/// Illumination trend as shown to the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendView {
    /// Oldest first. The full series when unlocked, otherwise its first
    /// [`TREND_PREVIEW_POINTS`] entries.
    pub points: Vec<TrendPoint>,
    pub locked: bool,
}

impl TrendView {
    pub fn new(mut points: Vec<TrendPoint>, has_access: bool) -> Self {
        if !has_access {
            points.truncate(TREND_PREVIEW_POINTS);
        }
        Self {
            points,
            locked: !has_access,
        }
    }
}

/// Detail card for a day picked in the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetails {
    pub day: DayMoonData,
    pub phase_label: &'static str,
    /// Folk name of the month's full moon, only on Full Moon days.
    pub full_moon_name: Option<&'static str>,
    /// Best viewing window, moonrise to moonset.
    pub viewing: MoonTimes,
}

impl DayDetails {
    pub fn for_day(day: &DayMoonData, language: Language) -> Self {
        let full_moon = match day.phase {
            PhaseName::FullMoon => full_moon_name(language, day.date.month - 1),
            _ => None,
        };
        Self {
            day: *day,
            phase_label: phase_name(day.phase, language),
            full_moon_name: full_moon,
            viewing: moon_times(&day.date),
        }
    }

    /// Heading text: the folk name on Full Moon days, otherwise the phase.
    pub fn title(&self) -> &'static str {
        self.full_moon_name.unwrap_or(self.phase_label)
    }
}
