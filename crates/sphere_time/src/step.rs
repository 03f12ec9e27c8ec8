//! Stepping an instant through the calendar, and playback advance.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Months, TimeDelta};

use crate::error::TimeError;
use crate::instant::Instant;

/// Multiplier applied to a step in fast mode.
pub const FAST_STEP_MULTIPLIER: i32 = 5;

/// Calendar unit for a date step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepUnit {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl StepUnit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl Display for StepUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StepUnit {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minute" | "min" => Ok(Self::Minute),
            "hour" | "h" => Ok(Self::Hour),
            "day" | "d" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" | "y" => Ok(Self::Year),
            other => Err(TimeError::Parse(format!("unknown step unit '{other}'"))),
        }
    }
}

/// Step `instant` by `count` units. Month and year steps follow the
/// calendar and clamp the day to the end of a shorter month.
pub fn step(instant: Instant, unit: StepUnit, count: i32) -> Result<Instant, TimeError> {
    let dt = instant.to_datetime()?;
    let moved = match unit {
        StepUnit::Minute => dt.checked_add_signed(TimeDelta::minutes(count as i64)),
        StepUnit::Hour => dt.checked_add_signed(TimeDelta::hours(count as i64)),
        StepUnit::Day => dt.checked_add_signed(TimeDelta::days(count as i64)),
        StepUnit::Month => shift_months(dt, count as i64),
        StepUnit::Year => shift_months(dt, count as i64 * 12),
    };
    moved
        .map(|d| Instant::from_datetime(&d))
        .ok_or(TimeError::OutOfRange)
}

/// Step in fast mode (five units at a time).
pub fn step_fast(instant: Instant, unit: StepUnit, direction: i32) -> Result<Instant, TimeError> {
    step(instant, unit, direction.signum() * FAST_STEP_MULTIPLIER)
}

fn shift_months(dt: chrono::DateTime<chrono::Utc>, months: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        dt.checked_add_months(Months::new(magnitude))
    } else {
        dt.checked_sub_months(Months::new(magnitude))
    }
}

/// Continuous playback: each tick advances the instant by `speed` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    /// Simulated seconds per tick; negative runs backwards.
    pub speed: f64,
    pub playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            speed: 1.0,
            playing: false,
        }
    }
}

impl Playback {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            playing: true,
        }
    }

    /// Instant after one tick. A paused or non-finite playback leaves it unchanged.
    pub fn advance(&self, instant: Instant) -> Instant {
        if !self.playing || !self.speed.is_finite() {
            return instant;
        }
        instant.offset_ms((self.speed * 1000.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Instant {
        s.parse().unwrap()
    }

    #[test]
    fn minute_and_hour_steps() {
        let t = at("2024-03-20T12:00:00Z");
        assert_eq!(step(t, StepUnit::Minute, 1).unwrap(), at("2024-03-20T12:01:00Z"));
        assert_eq!(step(t, StepUnit::Hour, -3).unwrap(), at("2024-03-20T09:00:00Z"));
    }

    #[test]
    fn day_step_crosses_month() {
        let t = at("2024-02-28T06:00:00Z");
        assert_eq!(step(t, StepUnit::Day, 2).unwrap(), at("2024-03-01T06:00:00Z"));
    }

    #[test]
    fn month_step_clamps_day() {
        let t = at("2024-01-31T00:00:00Z");
        assert_eq!(step(t, StepUnit::Month, 1).unwrap(), at("2024-02-29T00:00:00Z"));
    }

    #[test]
    fn year_step_backwards() {
        let t = at("2024-02-29T00:00:00Z");
        assert_eq!(step(t, StepUnit::Year, -1).unwrap(), at("2023-02-28T00:00:00Z"));
    }

    #[test]
    fn fast_step_is_five_units() {
        let t = at("2024-03-20T00:00:00Z");
        assert_eq!(step_fast(t, StepUnit::Day, -1).unwrap(), at("2024-03-15T00:00:00Z"));
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("Month".parse::<StepUnit>().unwrap(), StepUnit::Month);
        assert!("fortnight".parse::<StepUnit>().is_err());
    }

    #[test]
    fn playback_advances_by_speed_seconds() {
        let t = at("2024-03-20T00:00:00Z");
        let p = Playback::new(60.0);
        assert_eq!(p.advance(t), at("2024-03-20T00:01:00Z"));
        let paused = Playback::default();
        assert_eq!(paused.advance(t), t);
    }
}
