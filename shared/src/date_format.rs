//! Date formats used at the UI and API boundaries.
//!
//! - storage key: `YYYY-MM-DD`
//! - holiday lookup key: `MM-DD`
//! - display: `DD/MM/YYYY`
//!
//! Months are 0-based here (0 = January) to match the calendar state.

use chrono::{Datelike, NaiveDate};

use crate::error::DateParseError;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Column headers of the month grid, Sunday first
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// Format a date as its storage key (YYYY-MM-DD)
pub fn storage_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Format a date as its holiday lookup key (MM-DD)
pub fn holiday_key(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

/// Parse a YYYY-MM-DD storage key into a date
pub fn parse_storage_key(key: &str) -> Result<NaiveDate, DateParseError> {
    let parts: Vec<&str> = key.split('-').collect();
    let [year, month, day]: [&str; 3] = parts
        .try_into()
        .map_err(|_| DateParseError::InvalidFormat(key.to_string()))?;

    let (Ok(year), Ok(month), Ok(day)) =
        (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>())
    else {
        return Err(DateParseError::InvalidFormat(key.to_string()));
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateParseError::OutOfRange(key.to_string()))
}

/// Reformat a storage key (YYYY-MM-DD) for display (DD/MM/YYYY).
/// Keys that don't have three parts are returned unchanged.
pub fn display_date(key: &str) -> String {
    match key.split('-').collect::<Vec<_>>().as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => key.to_string(),
    }
}

/// Compact agenda format, e.g. "15-mar-23"
pub fn agenda_date(date: NaiveDate) -> String {
    let year = date.year().rem_euclid(100);
    format!("{:02}-{}-{:02}", date.day(), MONTH_ABBREVIATIONS[date.month0() as usize], year)
}

/// Full pt-BR weekday name, e.g. "quarta-feira"
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// pt-BR month name for a 0-based month index
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("Mês inválido")
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a 0-based month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 => if is_leap_year(year) { 29 } else { 28 },
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of the 1st of a 0-based month (0 = Sunday .. 6 = Saturday)
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Check an `HH:MM` time-of-day string
pub fn is_valid_time(time: &str) -> bool {
    let Some((hours, minutes)) = time.split_once(':') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return false;
    }
    matches!(
        (hours.parse::<u32>(), minutes.parse::<u32>()),
        (Ok(h), Ok(m)) if h < 24 && m < 60
    )
}
