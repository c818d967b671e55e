// src/lifetime.rs

//! Lifetime budget expressions and their resolution to concrete durations.
//!
//! A lifetime is either a literal number of seconds or a symbolic target
//! ("2h30m", "next midnight", "06:30"). [`Lifetime::remaining`] converts any
//! of these into the non-negative wall-clock budget left right now, so the
//! supervisor only ever deals in [`Duration`]s.

use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::{Days, Local, NaiveTime};
use regex::Regex;

use crate::errors::{AutomgrError, Result};

static SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").expect("span pattern is valid")
});

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").expect("clock pattern is valid")
});

/// A wall-clock budget for one supervised run.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifetime {
    /// Literal number of seconds.
    Seconds(f64),
    /// Fixed span built from h/m/s components, e.g. "2h30m".
    Span(Duration),
    /// Until the next local midnight.
    NextMidnight,
    /// Until the next occurrence of a local wall-clock time.
    ClockTarget(NaiveTime),
}

impl Lifetime {
    /// Resolve the budget remaining right now.
    ///
    /// Negative remainders clamp to zero: a budget that is already spent
    /// behaves like a zero-second budget, never like an error.
    pub fn remaining(&self) -> Result<Duration> {
        let seconds = match self {
            Lifetime::Seconds(s) => *s,
            Lifetime::Span(d) => d.as_secs_f64(),
            Lifetime::NextMidnight => {
                let now = Local::now().naive_local();
                let tomorrow = now
                    .date()
                    .checked_add_days(Days::new(1))
                    .ok_or_else(|| invalid("next midnight is out of calendar range"))?;
                let target = tomorrow.and_time(NaiveTime::MIN);
                delta_seconds(target, now)
            }
            Lifetime::ClockTarget(time) => {
                let now = Local::now().naive_local();
                let mut target = now.date().and_time(*time);
                if target <= now {
                    let tomorrow = now
                        .date()
                        .checked_add_days(Days::new(1))
                        .ok_or_else(|| invalid("clock target is out of calendar range"))?;
                    target = tomorrow.and_time(*time);
                }
                delta_seconds(target, now)
            }
        };
        Ok(Duration::from_secs_f64(seconds.max(0.0)))
    }
}

impl FromStr for Lifetime {
    type Err = AutomgrError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let expr = s.trim();
        if expr.is_empty() {
            return Err(invalid("empty expression"));
        }

        if matches!(expr.to_lowercase().as_str(), "midnight" | "next midnight") {
            return Ok(Lifetime::NextMidnight);
        }

        if let Ok(seconds) = expr.parse::<f64>() {
            if seconds.is_finite() {
                return Ok(Lifetime::Seconds(seconds));
            }
            return Err(invalid(expr));
        }

        if let Some(caps) = CLOCK_RE.captures(expr) {
            let hour: u32 = caps[1].parse().map_err(|_| invalid(expr))?;
            let minute: u32 = caps[2].parse().map_err(|_| invalid(expr))?;
            let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid(expr))?;
            return Ok(Lifetime::ClockTarget(time));
        }

        if let Some(caps) = SPAN_RE.captures(expr) {
            if caps.get(1).is_some() || caps.get(2).is_some() || caps.get(3).is_some() {
                let hours = component(&caps, 1, expr)?;
                let minutes = component(&caps, 2, expr)?;
                let seconds = component(&caps, 3, expr)?;
                let total = hours * 3600 + minutes * 60 + seconds;
                return Ok(Lifetime::Span(Duration::from_secs(total)));
            }
        }

        Err(invalid(expr))
    }
}

fn component(caps: &regex::Captures<'_>, idx: usize, expr: &str) -> Result<u64> {
    match caps.get(idx) {
        None => Ok(0),
        Some(m) => m.as_str().parse::<u64>().map_err(|_| invalid(expr)),
    }
}

fn delta_seconds(target: chrono::NaiveDateTime, now: chrono::NaiveDateTime) -> f64 {
    (target - now).num_milliseconds() as f64 / 1000.0
}

fn invalid(expr: &str) -> AutomgrError {
    AutomgrError::InvalidLifetime(expr.to_string())
}
