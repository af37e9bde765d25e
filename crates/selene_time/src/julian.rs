//! Gregorian calendar ↔ Julian Date.
//!
//! Meeus, *Astronomical Algorithms*, ch. 7. The Gregorian correction is
//! always applied (proleptic Gregorian), so the two directions agree for
//! every representable date.

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day of month plus the elapsed fraction of the day,
/// e.g. `6.75` for 18:00 on the 6th. January and February are counted as
/// months 13 and 14 of the previous year.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 12:00 = JD 2451545.0
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert_abs_diff_eq!(jd, 2_451_545.0, epsilon = 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957-10-04.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert_abs_diff_eq!(jd, 2_436_116.31, epsilon = 1e-6);
    }

    #[test]
    fn february_uses_previous_year() {
        // 2024-02-29 00:00 = JD 2460369.5
        let jd = calendar_to_jd(2024, 2, 29.0);
        assert_abs_diff_eq!(jd, 2_460_369.5, epsilon = 1e-9);
        // and the next day is 2024-03-01
        let next = calendar_to_jd(2024, 3, 1.0);
        assert_abs_diff_eq!(next - jd, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn reference_new_moon_instant() {
        // 2000-01-06 18:14 lands within half a minute of JD 2451550.26
        let jd = calendar_to_jd(2000, 1, 6.0 + (18.0 + 14.0 / 60.0) / 24.0);
        assert_abs_diff_eq!(jd, 2_451_550.26, epsilon = 0.0005);
    }

    #[test]
    fn inverse_of_forward() {
        for &(y, m, d) in &[(2000, 1, 1.5), (1999, 12, 31.25), (2024, 2, 29.0), (1600, 3, 1.0)] {
            let (y2, m2, d2) = jd_to_calendar(calendar_to_jd(y, m, d));
            assert_eq!((y2, m2), (y, m));
            assert!((d2 - d).abs() < 1e-6, "{y}-{m}: {d2} vs {d}");
        }
    }
}
