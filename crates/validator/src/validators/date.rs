//! Elapsed-time check for dates such as birthdays.
//!
//! Elapsed time is converted with fixed, non-calendar constants: a year is
//! 364 days, a month 12 days and a week 52 days. Rule thresholds are
//! expressed against these constants, not against calendar arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

// ============================================================================
// TIME UNIT
// ============================================================================

/// Unit an elapsed duration is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// 364 days.
    Years,
    /// 12 days.
    Months,
    /// 52 days.
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Every unit, longest first.
    pub const ALL: [Self; 7] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Length of one unit in seconds.
    #[must_use]
    pub const fn seconds(self) -> f64 {
        match self {
            Self::Years => SECONDS_PER_DAY * 364.0,
            Self::Months => SECONDS_PER_DAY * 12.0,
            Self::Weeks => SECONDS_PER_DAY * 52.0,
            Self::Days => SECONDS_PER_DAY,
            Self::Hours => 60.0 * 60.0,
            Self::Minutes => 60.0,
            Self::Seconds => 1.0,
        }
    }

    /// Converts a number of seconds into this unit.
    #[must_use]
    pub fn from_seconds(self, seconds: f64) -> f64 {
        seconds / self.seconds()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a [`TimeUnit`] from an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time unit `{0}`")]
pub struct UnknownTimeUnit(pub String);

impl FromStr for TimeUnit {
    type Err = UnknownTimeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| UnknownTimeUnit(s.to_owned()))
    }
}

// ============================================================================
// DATE PARSING
// ============================================================================

/// Parses the date forms accepted in form input.
///
/// Slash-separated dates are month-first. Date-only values are taken at
/// midnight UTC. A `MM/DD/YYYY` day past the end of its month rolls into
/// the next month, so `02/30/1990` is March 2nd.
pub fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .or_else(|| parse_overflowing_date(input))
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// `MM/DD/YYYY` with a day of 1-31 that need not exist in its month,
/// built as the first of the month plus `day - 1` days.
fn parse_overflowing_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.splitn(3, '/');
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;

    if !(1..=31).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

// ============================================================================
// DATE GREATER THAN
// ============================================================================

crate::check! {
    /// Fails unless more than `duration` `unit`s have elapsed since the date
    /// in the value.
    ///
    /// A value that does not parse as a date fails with the same message.
    /// `now` pins the reference time; `None` reads the system clock on every
    /// run.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use formcheck_validator::foundation::CheckExt;
    /// use formcheck_validator::validators::{TimeUnit, date_greater_than};
    ///
    /// let adult = date_greater_than(21.0, TimeUnit::Years)
    ///     .at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    ///
    /// assert!(adult.run("birthday", "08/09/1985").passes());
    ///
    /// let ctx = adult.run("birthday", "08/09/2018");
    /// assert_eq!(ctx.messages().next(), Some("birthday isn't greater than 21 years."));
    /// ```
    #[derive(Copy, PartialEq)]
    pub DateGreaterThan { duration: f64, unit: TimeUnit, now: Option<DateTime<Utc>> };
    rule(self, input) { self.elapsed(input).is_some_and(|elapsed| elapsed > self.duration) }
    error(self, ctx, input) { ValidationError::not_greater_than(ctx.field_type(), self.duration, self.unit) }
    new(duration: f64, unit: TimeUnit) { Self { duration, unit, now: None } }
    fn date_greater_than(duration: f64, unit: TimeUnit);
}

impl DateGreaterThan {
    /// Pins the reference time used to measure elapsed time.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Time elapsed since the date in `input`, in `self.unit`.
    ///
    /// `None` when the input is not a date.
    #[must_use]
    pub fn elapsed(&self, input: &str) -> Option<f64> {
        let Some(then) = parse_instant(input) else {
            tracing::debug!(unit = %self.unit, "value is not a recognizable date");
            return None;
        };
        let now = self.now.unwrap_or_else(Utc::now);
        let seconds = (now - then).num_seconds() as f64;
        Some(self.unit.from_seconds(seconds))
    }
}
