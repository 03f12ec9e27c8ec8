//! Julian Date helpers.
//!
//! Calendar conversion follows Meeus, _Astronomical Algorithms_, ch. 7
//! (Gregorian calendar throughout).

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MS_PER_DAY: f64 = 86_400_000.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Date for a Gregorian calendar date with fractional day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Gregorian `(year, month, day_frac)` for a Julian Date.
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

/// Julian Date (UTC) of a Unix millisecond timestamp.
pub fn unix_ms_to_jd(unix_ms: i64) -> f64 {
    unix_ms as f64 / MS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_calendar() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957 Oct 4.81 → JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn calendar_roundtrip() {
        let (y, m, d) = jd_to_calendar(calendar_to_jd(2024, 2, 29.25));
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.25).abs() < 1e-6);
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(unix_ms_to_jd(0), UNIX_EPOCH_JD);
        // 2000-01-01T12:00:00Z
        assert!((unix_ms_to_jd(946_728_000_000) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_epoch() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_JULIAN_CENTURY) - 1.0).abs() < 1e-15);
    }
}
