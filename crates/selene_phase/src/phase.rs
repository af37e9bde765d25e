//! Phase classification from a mean synodic month.
//!
//! The Moon's position in its cycle is measured from a known new moon
//! (2000-01-06 18:14 UTC) in units of the mean synodic month. No orbital
//! perturbations are modelled; expect errors of up to about half a day
//! against true new/full moon instants.

use std::f64::consts::TAU;

use selene_time::LocalDateTime;

use crate::phase_name::{ALL_PHASES, PhaseName};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588861;

/// Julian Date of the reference new moon, 2000-01-06 18:14 UTC.
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_550.26;

/// Exclusive upper bound of each phase bucket, in cycle order.
///
/// Buckets are 1/8 of a cycle wide and centred on multiples of 1/8, so New
/// Moon wraps around 0: it covers `[0.9375, 1)` as well as `[0, 0.0625)`.
/// A position exactly on a bound belongs to the later bucket.
pub const PHASE_BUCKET_BOUNDS: [f64; 8] = [
    0.0625, 0.1875, 0.3125, 0.4375, 0.5625, 0.6875, 0.8125, 0.9375,
];

/// Result of a phase computation for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    /// Named phase.
    pub phase: PhaseName,
    /// Illuminated fraction of the disk, rounded to a percentage (0-100).
    pub illumination_percent: u8,
    /// Days since the last mean new moon, in `[0, SYNODIC_MONTH_DAYS)`.
    pub age_days: f64,
    /// Normalized position in the cycle, in `[0, 1)`.
    pub cycle_position: f64,
}

impl MoonPhase {
    /// Canonical English tag of the phase.
    pub fn tag(&self) -> &'static str {
        self.phase.tag()
    }

    /// Moon emoji of the phase.
    pub fn symbol(&self) -> &'static str {
        self.phase.symbol()
    }
}

/// Position within the mean synodic cycle for a Julian Date, in `[0, 1)`.
pub fn cycle_position(jd: f64) -> f64 {
    let cycles = (jd - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH_DAYS;
    let mut position = cycles - cycles.floor();
    if position < 0.0 {
        position += 1.0;
    }
    // cycles a hair below an integer can round the difference up to 1.0
    if position >= 1.0 {
        position = 0.0;
    }
    position
}

/// Illuminated fraction for a cycle position: `0.5 * (1 - cos(2π·p))`.
pub fn illumination_fraction(cycle_position: f64) -> f64 {
    0.5 * (1.0 - (TAU * cycle_position).cos())
}

/// Named phase for a cycle position.
pub fn classify(cycle_position: f64) -> PhaseName {
    match PHASE_BUCKET_BOUNDS
        .iter()
        .position(|&upper| cycle_position < upper)
    {
        Some(i) => ALL_PHASES[i],
        None => PhaseName::NewMoon,
    }
}

/// Full phase result for a Julian Date.
pub fn phase_from_jd(jd: f64) -> MoonPhase {
    let position = cycle_position(jd);
    let illumination = illumination_fraction(position);
    MoonPhase {
        phase: classify(position),
        illumination_percent: (illumination * 100.0).round().clamp(0.0, 100.0) as u8,
        age_days: position * SYNODIC_MONTH_DAYS,
        cycle_position: position,
    }
}

/// Phase of the Moon at a local wall-clock instant.
///
/// The calendar fields are converted to a Julian Date as-is. Pure and total:
/// any date yields a result, and equal inputs yield equal outputs.
pub fn calculate_phase(date: &LocalDateTime) -> MoonPhase {
    phase_from_jd(date.to_jd())
}
