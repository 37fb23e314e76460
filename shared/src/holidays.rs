//! Brazilian national holidays shown on the calendar.
//!
//! The fixed table is keyed by `MM-DD`. Its Carnaval entry is stored under
//! `"21-02"`, which never matches a real `MM-DD` key; the movable feasts can be
//! computed per year with [`movable_feasts`] instead.

use chrono::{Datelike, Duration, NaiveDate};

use crate::date_format::holiday_key;

/// Fixed holiday table, `MM-DD` -> label
pub static HOLIDAYS: [(&str, &str); 11] = [
    ("01-01", "Ano Novo"),
    ("21-02", "Carnaval"),
    ("04-07", "Sexta-feira Santa"),
    ("04-21", "Tiradentes"),
    ("05-01", "Dia do Trabalho"),
    ("06-08", "Corpus Christi"),
    ("09-07", "Independência do Brasil"),
    ("10-12", "Nossa Senhora Aparecida"),
    ("11-02", "Finados"),
    ("11-15", "Proclamação da República"),
    ("12-25", "Natal"),
];

/// Look up a holiday label by its `MM-DD` key
pub fn lookup(key: &str) -> Option<&'static str> {
    HOLIDAYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

/// Holiday label for a date from the fixed table
pub fn holiday_for(date: NaiveDate) -> Option<&'static str> {
    lookup(&holiday_key(date))
}

/// Easter Sunday of a Gregorian year (anonymous Gregorian algorithm)
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Easter-relative holidays of a year: Carnaval, Sexta-feira Santa, Corpus Christi
pub fn movable_feasts(year: i32) -> Vec<(NaiveDate, &'static str)> {
    let Some(easter) = easter_sunday(year) else {
        return Vec::new();
    };

    [(-47, "Carnaval"), (-2, "Sexta-feira Santa"), (60, "Corpus Christi")]
        .into_iter()
        .filter_map(|(offset, label)| {
            easter
                .checked_add_signed(Duration::days(offset))
                .map(|date| (date, label))
        })
        .collect()
}

/// Holiday label combining fixed dates with the computed movable feasts.
///
/// Fixed entries that only hold for one particular year (Sexta-feira Santa,
/// Corpus Christi) are ignored in favour of the computed dates.
pub fn holiday_with_movable_feasts(date: NaiveDate) -> Option<&'static str> {
    if let Some((_, label)) = movable_feasts(date.year())
        .into_iter()
        .find(|(feast, _)| *feast == date)
    {
        return Some(label);
    }

    holiday_for(date)
        .filter(|label| !matches!(*label, "Carnaval" | "Sexta-feira Santa" | "Corpus Christi"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("12-25"), Some("Natal"));
        assert_eq!(lookup("01-01"), Some("Ano Novo"));
        assert_eq!(lookup("04-21"), Some("Tiradentes"));
        assert_eq!(lookup("03-15"), None);
    }

    #[test]
    fn test_table_has_eleven_entries() {
        assert_eq!(HOLIDAYS.len(), 11);
    }

    #[test]
    fn test_carnaval_key_kept_as_found() {
        assert_eq!(lookup("21-02"), Some("Carnaval"));
        assert_eq!(lookup("02-21"), None);
        assert_eq!(holiday_for(date(2023, 2, 21)), None);
    }

    #[test]
    fn test_holiday_for_date() {
        assert_eq!(holiday_for(date(2023, 12, 25)), Some("Natal"));
        assert_eq!(holiday_for(date(2024, 11, 2)), Some("Finados"));
        assert_eq!(holiday_for(date(2024, 11, 3)), None);
    }

    #[test]
    fn test_easter_sunday() {
        assert_eq!(easter_sunday(2023), Some(date(2023, 4, 9)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2000), Some(date(2000, 4, 23)));
    }

    #[test]
    fn test_movable_feasts_2023() {
        let feasts = movable_feasts(2023);
        assert_eq!(
            feasts,
            vec![
                (date(2023, 2, 21), "Carnaval"),
                (date(2023, 4, 7), "Sexta-feira Santa"),
                (date(2023, 6, 8), "Corpus Christi"),
            ]
        );
    }

    #[test]
    fn test_holiday_with_movable_feasts() {
        assert_eq!(holiday_with_movable_feasts(date(2024, 2, 13)), Some("Carnaval"));
        assert_eq!(holiday_with_movable_feasts(date(2024, 3, 29)), Some("Sexta-feira Santa"));
        // The fixed Good Friday entry belongs to 2023 only
        assert_eq!(holiday_with_movable_feasts(date(2024, 4, 7)), None);
        assert_eq!(holiday_with_movable_feasts(date(2024, 12, 25)), Some("Natal"));
    }
}
