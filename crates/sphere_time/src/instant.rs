//! UTC instants with millisecond resolution.
//!
//! `Instant` is the single time value driving a frame: the sidereal angle,
//! the precession matrix and ephemeris lookups are all functions of it.
//! It is stored as integer Unix milliseconds so two instants compare and
//! hash by value, which keeps cache keys exact.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{J2000_JD, MS_PER_DAY, UNIX_EPOCH_JD, jd_to_centuries, unix_ms_to_jd};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
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
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM:SS[.fff][Z]` or a bare `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{date}'")));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                if time_parts.len() < 2 || time_parts.len() > 3 {
                    return Err(TimeError::Parse(format!("expected HH:MM[:SS], got '{t}'")));
                }
                let hour: u32 = parse_field(time_parts[0], "hour")?;
                let minute: u32 = parse_field(time_parts[1], "minute")?;
                let second: f64 = match time_parts.get(2) {
                    Some(sec) => parse_field(sec, "second")?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
        };

        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

fn parse_field<T: FromStr>(text: &str, name: &str) -> Result<T, TimeError> {
    text.parse()
        .map_err(|_| TimeError::Parse(format!("invalid {name} '{text}'")))
}

/// A UTC instant, in integer milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    unix_ms: i64,
}

impl Instant {
    /// 2000-01-01T12:00:00Z.
    pub const J2000: Self = Self {
        unix_ms: 946_728_000_000,
    };

    pub const fn from_unix_ms(unix_ms: i64) -> Self {
        Self { unix_ms }
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            unix_ms: dt.timestamp_millis(),
        }
    }

    /// Build from calendar fields, validating them.
    pub fn from_utc(utc: &UtcTime) -> Result<Self, TimeError> {
        if !utc.second.is_finite() || utc.second < 0.0 || utc.second >= 61.0 {
            return Err(TimeError::InvalidDate(format!("second {}", utc.second)));
        }
        let whole = utc.second.floor();
        let millis = ((utc.second - whole) * 1000.0).round() as u32;
        let naive = NaiveDate::from_ymd_opt(utc.year, utc.month, utc.day)
            .and_then(|d| d.and_hms_milli_opt(utc.hour, utc.minute, whole as u32, millis.min(999)))
            .ok_or_else(|| TimeError::InvalidDate(utc.to_string()))?;
        Ok(Self::from_datetime(&Utc.from_utc_datetime(&naive)))
    }

    /// Build from a UTC Julian Date. NaN and infinities are rejected.
    pub fn from_jd_utc(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFinite);
        }
        let ms = ((jd - UNIX_EPOCH_JD) * MS_PER_DAY).round();
        if ms.abs() > i64::MAX as f64 / 2.0 {
            return Err(TimeError::OutOfRange);
        }
        Ok(Self { unix_ms: ms as i64 })
    }

    /// Like [`Instant::from_jd_utc`] but substitutes `fallback` for an
    /// unusable value instead of failing.
    pub fn from_jd_utc_or(jd: f64, fallback: Self) -> Self {
        Self::from_jd_utc(jd).unwrap_or(fallback)
    }

    pub const fn unix_ms(self) -> i64 {
        self.unix_ms
    }

    /// Julian Date in UTC. UT1 − UTC is below a second and ignored.
    pub fn jd_utc(self) -> f64 {
        unix_ms_to_jd(self.unix_ms)
    }

    /// Days elapsed since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        self.jd_utc() - J2000_JD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn julian_centuries(self) -> f64 {
        jd_to_centuries(self.jd_utc())
    }

    /// Calendar form, or `OutOfRange` beyond chrono's supported years.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        Utc.timestamp_millis_opt(self.unix_ms)
            .single()
            .ok_or(TimeError::OutOfRange)
    }

    pub fn to_utc(self) -> Result<UtcTime, TimeError> {
        let dt = self.to_datetime()?;
        let second = dt.second() as f64 + dt.timestamp_subsec_millis() as f64 / 1000.0;
        Ok(UtcTime::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            second,
        ))
    }

    /// Shift by a signed number of milliseconds, saturating at the i64 range.
    pub fn offset_ms(self, delta_ms: i64) -> Self {
        Self {
            unix_ms: self.unix_ms.saturating_add(delta_ms),
        }
    }
}

impl Default for Instant {
    fn default() -> Self {
        Self::J2000
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Ok(utc) => Display::fmt(&utc, f),
            Err(_) => write!(f, "JD {:.6}", self.jd_utc()),
        }
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let utc: UtcTime = s.parse()?;
        Self::from_utc(&utc)
    }
}
