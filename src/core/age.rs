//! Age formatting: turn a birth instant into "3 days", "4 weeks",
//! "5 months" or "3 years" depending on how much time has elapsed.

use chrono::{Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

const DAYS_IN_WEEK: i64 = 7;
const DAYS_IN_YEAR: i64 = 365;
const MONTHS_PER_YEAR: i64 = 12;
const WEEKS_FOR_DISPLAY: i64 = 8;
const MONTHS_FOR_DISPLAY: i64 = 2;

const DAYS_FOR_DAYS_DISPLAY: i64 = DAYS_IN_WEEK;
const DAYS_FOR_WEEKS_DISPLAY: i64 = WEEKS_FOR_DISPLAY * DAYS_IN_WEEK;
/// Two years counted in days: past this point the age is shown in years.
const DAYS_FOR_MONTHS_DISPLAY: i64 = MONTHS_FOR_DISPLAY * DAYS_IN_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeBucket {
    Days,
    Weeks,
    Months,
    Years,
}

impl AgeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::Days => "days",
            AgeBucket::Weeks => "weeks",
            AgeBucket::Months => "months",
            AgeBucket::Years => "years",
        }
    }
}

/// Singular and plural words for each bucket.
///
/// Loaded from the `labels` section of the configuration file so the
/// output can be translated; defaults to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeLabels {
    pub day: String,
    pub days: String,
    pub week: String,
    pub weeks: String,
    pub month: String,
    pub months: String,
    pub year: String,
    pub years: String,
}

impl Default for AgeLabels {
    fn default() -> Self {
        Self {
            day: "day".into(),
            days: "days".into(),
            week: "week".into(),
            weeks: "weeks".into(),
            month: "month".into(),
            months: "months".into(),
            year: "year".into(),
            years: "years".into(),
        }
    }
}

impl AgeLabels {
    pub fn word(&self, bucket: AgeBucket, singular: bool) -> &str {
        match (bucket, singular) {
            (AgeBucket::Days, true) => &self.day,
            (AgeBucket::Days, false) => &self.days,
            (AgeBucket::Weeks, true) => &self.week,
            (AgeBucket::Weeks, false) => &self.weeks,
            (AgeBucket::Months, true) => &self.month,
            (AgeBucket::Months, false) => &self.months,
            (AgeBucket::Years, true) => &self.year,
            (AgeBucket::Years, false) => &self.years,
        }
    }
}

/// An age reduced to a single display granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub magnitude: i64,
    pub bucket: AgeBucket,
}

impl Age {
    fn days(days: i64) -> Self {
        Self {
            magnitude: days,
            bucket: AgeBucket::Days,
        }
    }

    fn weeks(days: i64) -> Self {
        Self {
            magnitude: days / DAYS_IN_WEEK,
            bucket: AgeBucket::Weeks,
        }
    }

    pub fn is_singular(&self) -> bool {
        self.magnitude == 1
    }

    /// Render as "<magnitude> <unit>" with the given words.
    pub fn render(&self, labels: &AgeLabels) -> String {
        format!(
            "{} {}",
            self.magnitude,
            labels.word(self.bucket, self.is_singular())
        )
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&AgeLabels::default()))
    }
}

/// Compute the age of someone born at `birth_ms` as seen at `now_ms`,
/// both in epoch milliseconds.
///
/// Month and day-of-month are read in `tz`. A birth after `now` is not
/// clamped: the elapsed day count is negative and lands in the days bucket.
pub fn compute_age<Tz: TimeZone>(birth_ms: i64, now_ms: i64, tz: &Tz) -> Age {
    let elapsed_days = now_ms.saturating_sub(birth_ms) / MILLIS_PER_DAY;

    if elapsed_days < DAYS_FOR_DAYS_DISPLAY {
        return Age::days(elapsed_days);
    }

    if elapsed_days < DAYS_FOR_WEEKS_DISPLAY {
        return Age::weeks(elapsed_days);
    }

    let years = elapsed_days / DAYS_IN_YEAR;

    if elapsed_days >= DAYS_FOR_MONTHS_DISPLAY {
        return Age {
            magnitude: years,
            bucket: AgeBucket::Years,
        };
    }

    match calendar_months(birth_ms, now_ms, years, tz) {
        // a few days past 8 weeks can still be "1 month": keep weeks instead
        Some(months) if months >= MONTHS_FOR_DISPLAY => Age {
            magnitude: months,
            bucket: AgeBucket::Months,
        },
        _ => Age::weeks(elapsed_days),
    }
}

/// Same as [`compute_age`] with the calendar read in UTC.
pub fn compute_age_utc(birth_ms: i64, now_ms: i64) -> Age {
    compute_age(birth_ms, now_ms, &Utc)
}

/// Full age string with default English words.
pub fn format_age(birth_ms: i64, now_ms: i64) -> String {
    compute_age_utc(birth_ms, now_ms).to_string()
}

/// Month count by calendar position instead of an average month length.
fn calendar_months<Tz: TimeZone>(birth_ms: i64, now_ms: i64, years: i64, tz: &Tz) -> Option<i64> {
    let birth = tz.timestamp_millis_opt(birth_ms).single()?;
    let now = tz.timestamp_millis_opt(now_ms).single()?;

    let birth_month = i64::from(birth.month0());
    let birth_day = birth.day();
    let now_month = i64::from(now.month0());
    let now_day = now.day();

    let mut months = years * MONTHS_PER_YEAR;
    let month_diff = now_month - birth_month;

    if month_diff < 0 {
        months += MONTHS_PER_YEAR + month_diff;
    } else if month_diff == 0 && now_day < birth_day {
        // same month, day not reached yet: close to a full year
        months += MONTHS_PER_YEAR;
    } else {
        months += month_diff;
    }

    if now_day < birth_day {
        months -= 1;
    }

    Some(months)
}
