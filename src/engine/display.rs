//! Display helpers for the presentation layer.
//!
//! Fixed tables mapping priority to colour and label, plus date formatting
//! and parsing for the two supported locales.

use super::error::{Result, TaskError};
use super::types::Priority;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

impl Locale {
    fn date_pattern(self) -> &'static str {
        match self {
            Self::PtBr => "%d/%m/%Y",
            Self::EnUs => "%m/%d/%Y",
        }
    }

    fn date_time_pattern(self) -> &'static str {
        match self {
            Self::PtBr => "%d/%m/%Y %H:%M",
            Self::EnUs => "%m/%d/%Y, %I:%M %p",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-br"),
            Self::EnUs => write!(f, "en-us"),
        }
    }
}

impl FromStr for Locale {
    type Err = TaskError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            _ => Err(TaskError::parse("locale", s)),
        }
    }
}

impl Priority {
    /// Hex colour used when rendering this priority.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Priority::High => "#ef4444",
            Priority::Medium => "#f59e0b",
            Priority::Low => "#10b981",
        }
    }

    /// The same colour as an RGB triple, for true-colour terminals.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Priority::High => (0xef, 0x44, 0x44),
            Priority::Medium => (0xf5, 0x9e, 0x0b),
            Priority::Low => (0x10, 0xb9, 0x81),
        }
    }

    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::PtBr, Priority::High) => "Alta",
            (Locale::PtBr, Priority::Medium) => "Média",
            (Locale::PtBr, Priority::Low) => "Baixa",
            (Locale::EnUs, Priority::High) => "High",
            (Locale::EnUs, Priority::Medium) => "Medium",
            (Locale::EnUs, Priority::Low) => "Low",
        }
    }
}

/// Formats the calendar day of `date`.
#[must_use]
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, locale: Locale) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format(locale.date_pattern()).to_string()
}

/// Formats day and time (to the minute) of `date`.
#[must_use]
pub fn format_date_time<Tz: TimeZone>(date: &DateTime<Tz>, locale: Locale) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format(locale.date_time_pattern()).to_string()
}

/// Parses a due date typed by a user, interpreted in `tz`.
///
/// Accepts ISO `YYYY-MM-DD` and the locale's own day pattern, each with an
/// optional `HH:MM`. A bare day means the end of that day.
///
/// # Errors
/// Returns `TaskError::Parse` if no pattern matches or the local time does
/// not exist in `tz`.
pub fn parse_date_input<Tz: TimeZone>(
    input: &str,
    locale: Locale,
    tz: &Tz,
) -> Result<DateTime<Utc>> {
    let input = input.trim().replace('T', " ");
    let naive = parse_naive(&input, locale).ok_or_else(|| TaskError::parse("due date", &input))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| TaskError::parse("due date", &input))
}

fn parse_naive(input: &str, locale: Locale) -> Option<NaiveDateTime> {
    let day_patterns = ["%Y-%m-%d", locale.date_pattern()];

    for pattern in day_patterns {
        let with_time = format!("{pattern} %H:%M");
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, &with_time) {
            return Some(dt);
        }
        if let Ok(day) = NaiveDate::parse_from_str(input, pattern) {
            let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)?;
            return Some(day.and_time(end_of_day));
        }
    }
    None
}
