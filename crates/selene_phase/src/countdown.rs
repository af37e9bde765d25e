//! Days until the next new or full moon.
//!
//! The countdowns use a rounded cycle length of 29.53 days, while phase
//! classification uses [`SYNODIC_MONTH_DAYS`]. The two differ by about
//! 50 seconds per cycle, which never moves a ceiling by more than one day.

use selene_time::LocalDateTime;

use crate::phase::{SYNODIC_MONTH_DAYS, calculate_phase, cycle_position};
use crate::phase_name::PhaseName;

/// Cycle length used by the day countdowns.
pub const COUNTDOWN_CYCLE_DAYS: f64 = 29.53;

/// Whole days (rounded up) from `now` until the next new moon.
///
/// `ceil(29.53 - age)`. Returns 0 in the last minutes of a cycle, when the
/// age already exceeds 29.53 days.
pub fn days_until_next_new_moon_at(now: &LocalDateTime) -> i64 {
    let age = calculate_phase(now).age_days;
    (COUNTDOWN_CYCLE_DAYS - age).ceil() as i64
}

/// Whole days (rounded up) from `now` until the next full moon.
pub fn days_until_next_full_moon_at(now: &LocalDateTime) -> i64 {
    let age = calculate_phase(now).age_days;
    let full_moon_age = COUNTDOWN_CYCLE_DAYS / 2.0;
    let days = if age < full_moon_age {
        full_moon_age - age
    } else {
        (COUNTDOWN_CYCLE_DAYS - age) + full_moon_age
    };
    days.ceil() as i64
}

/// [`days_until_next_new_moon_at`] for the current local time.
pub fn days_until_next_new_moon() -> i64 {
    days_until_next_new_moon_at(&LocalDateTime::now())
}

/// [`days_until_next_full_moon_at`] for the current local time.
pub fn days_until_next_full_moon() -> i64 {
    days_until_next_full_moon_at(&LocalDateTime::now())
}

/// Estimated instant, strictly after `now`, at which the mean cycle next
/// reaches the centre of `phase` (New Moon = 0, First Quarter = 1/4, ...).
pub fn next_phase_event_at(now: &LocalDateTime, phase: PhaseName) -> LocalDateTime {
    let jd = now.to_jd();
    let mut delta = (phase.center_position() - cycle_position(jd)).rem_euclid(1.0);
    if delta <= 0.0 || delta >= 1.0 {
        delta = 1.0;
    }
    LocalDateTime::from_jd(jd + delta * SYNODIC_MONTH_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::REFERENCE_NEW_MOON_JD;

    fn at_age(age_days: f64) -> LocalDateTime {
        LocalDateTime::from_jd(REFERENCE_NEW_MOON_JD + age_days)
    }

    #[test]
    fn new_moon_countdown_mid_cycle() {
        // age ≈ 10 -> ceil(19.53) = 20
        assert_eq!(days_until_next_new_moon_at(&at_age(10.0)), 20);
    }

    #[test]
    fn full_moon_countdown_before_full() {
        // age ≈ 10 -> ceil(14.765 - 10) = 5
        assert_eq!(days_until_next_full_moon_at(&at_age(10.0)), 5);
    }

    #[test]
    fn full_moon_countdown_after_full() {
        // age ≈ 20 -> ceil(9.53 + 14.765) = 25
        assert_eq!(days_until_next_full_moon_at(&at_age(20.0)), 25);
    }

    #[test]
    fn new_moon_countdown_just_after_new() {
        // age ≈ 0.5 -> ceil(29.03) = 30
        assert_eq!(days_until_next_new_moon_at(&at_age(0.5)), 30);
    }

    #[test]
    fn next_full_moon_event_is_at_half_cycle() {
        let now = at_age(3.0);
        let event = next_phase_event_at(&now, PhaseName::FullMoon);
        let elapsed = event.to_jd() - now.to_jd();
        assert!((elapsed - (SYNODIC_MONTH_DAYS / 2.0 - 3.0)).abs() < 1e-3);
        assert_eq!(calculate_phase(&event).phase, PhaseName::FullMoon);
    }

    #[test]
    fn next_new_moon_event_is_strictly_after_now() {
        let now = at_age(25.0);
        let event = next_phase_event_at(&now, PhaseName::NewMoon);
        let elapsed = event.to_jd() - now.to_jd();
        assert!(elapsed > 0.0);
        assert!((elapsed - (SYNODIC_MONTH_DAYS - 25.0)).abs() < 1e-3);
    }
}
