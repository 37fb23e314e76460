//! Calendar date/time selection engine.
//!
//! Holds the displayed month, builds the month grid (with filler days from the
//! adjacent months, holiday and "today" marks) and keeps the mapping from
//! selected dates to lesson times. Every change to the selection is published
//! to an optional listener, which receives an immutable borrow of the whole
//! mapping. The engine has no UI dependencies; the Yew widget drives it.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::date_format::{
    days_in_month, display_date, first_weekday_of_month, month_name, storage_key,
};
use crate::holidays;
use crate::{CalendarDay, CalendarDayType, CalendarMonth};

/// Selected dates (YYYY-MM-DD) mapped to their lesson time (HH:MM).
/// Ordered by key, which for storage keys is chronological order.
pub type Selection = BTreeMap<String, String>;

/// Time given to a newly selected date while the default time is not in use
pub const FALLBACK_TIME: &str = "08:00";

/// Source of the real current date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Options supplied by the owning form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Time (HH:MM) applied to every selected date while `use_default_time` is set
    pub default_time: String,
    pub use_default_time: bool,
    /// Mark Easter-based holidays computed per year instead of the fixed table entries
    pub movable_feasts: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            default_time: FALLBACK_TIME.to_string(),
            use_default_time: false,
            movable_feasts: false,
        }
    }
}

/// One row of the "selected dates" list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDate {
    /// Storage key (YYYY-MM-DD)
    pub key: String,
    /// Display label (DD/MM/YYYY)
    pub label: String,
    /// Lesson time (HH:MM)
    pub time: String,
}

type Listener = Box<dyn Fn(&Selection)>;

/// Calendar state for one mounted form
pub struct CalendarSelector<C: Clock> {
    clock: C,
    /// 0 = January .. 11 = December
    displayed_month: u32,
    displayed_year: i32,
    selection: Selection,
    default_time: String,
    use_default_time: bool,
    movable_feasts: bool,
    listener: Option<Listener>,
}

impl<C: Clock> CalendarSelector<C> {
    /// Create a selector showing the clock's current month, with an empty selection
    pub fn with_clock(clock: C, config: CalendarConfig) -> Self {
        let today = clock.today();
        Self {
            clock,
            displayed_month: today.month0(),
            displayed_year: today.year(),
            selection: Selection::new(),
            default_time: config.default_time,
            use_default_time: config.use_default_time,
            movable_feasts: config.movable_feasts,
            listener: None,
        }
    }

    /// Register the consumer notified after every selection change
    pub fn set_listener(&mut self, listener: impl Fn(&Selection) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn displayed_month(&self) -> u32 {
        self.displayed_month
    }

    pub fn displayed_year(&self) -> i32 {
        self.displayed_year
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn default_time(&self) -> &str {
        &self.default_time
    }

    pub fn use_default_time(&self) -> bool {
        self.use_default_time
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.contains_key(&storage_key(date))
    }

    /// Header label, e.g. "Março 2023"
    pub fn month_label(&self) -> String {
        format!("{} {}", month_name(self.displayed_month), self.displayed_year)
    }

    pub fn holiday_label(&self, date: NaiveDate) -> Option<&'static str> {
        if self.movable_feasts {
            holidays::holiday_with_movable_feasts(date)
        } else {
            holidays::holiday_for(date)
        }
    }

    /// Build the grid for the displayed month: trailing days of the previous
    /// month, every day of this month, then leading days of the next month
    /// until the last week is complete.
    pub fn build_grid(&self) -> CalendarMonth {
        let year = self.displayed_year;
        let month = self.displayed_month;
        let first_day = first_weekday_of_month(year, month);
        let month_length = days_in_month(year, month);
        let (prev_month, prev_year) = previous_month(month, year);
        let prev_month_length = days_in_month(prev_year, prev_month);
        let today = self.clock.today();

        let mut days = Vec::with_capacity(42);

        for day in (prev_month_length + 1 - first_day)..=prev_month_length {
            days.push(filler_day(day, CalendarDayType::PaddingBefore));
        }

        for day in 1..=month_length {
            let cell = match NaiveDate::from_ymd_opt(year, month + 1, day) {
                Some(date) => CalendarDay {
                    day,
                    day_type: CalendarDayType::MonthDay,
                    date: Some(storage_key(date)),
                    is_selected: self.is_selected(date),
                    is_today: date == today,
                    holiday: self.holiday_label(date).map(str::to_string),
                },
                None => CalendarDay {
                    day,
                    day_type: CalendarDayType::MonthDay,
                    date: None,
                    is_selected: false,
                    is_today: false,
                    holiday: None,
                },
            };
            days.push(cell);
        }

        let remainder = days.len() % 7;
        if remainder != 0 {
            for day in 1..=(7 - remainder) as u32 {
                days.push(filler_day(day, CalendarDayType::PaddingAfter));
            }
        }

        CalendarMonth {
            month,
            year,
            days,
            first_day_of_week: first_day,
        }
    }

    /// Select a date, or unselect it when it is already selected.
    ///
    /// A new date gets the default time when it is in use, otherwise
    /// [`FALLBACK_TIME`].
    pub fn toggle(&mut self, date: NaiveDate) {
        let key = storage_key(date);
        if self.selection.remove(&key).is_some() {
            log::debug!("Calendar: unselected {}", key);
        } else {
            let time = if self.use_default_time {
                self.default_time.clone()
            } else {
                FALLBACK_TIME.to_string()
            };
            log::debug!("Calendar: selected {} at {}", key, time);
            self.selection.insert(key, time);
        }
        self.publish();
    }

    /// Toggle a day of the displayed month. Returns false for a day the month doesn't have.
    pub fn toggle_day(&mut self, day: u32) -> bool {
        match NaiveDate::from_ymd_opt(self.displayed_year, self.displayed_month + 1, day) {
            Some(date) => {
                self.toggle(date);
                true
            }
            None => false,
        }
    }

    /// Override the time of an already selected date.
    /// Returns false, changing nothing, when the date is not selected.
    pub fn set_time(&mut self, key: &str, time: impl Into<String>) -> bool {
        let Some(current) = self.selection.get_mut(key) else {
            return false;
        };
        *current = time.into();
        self.publish();
        true
    }

    /// Remove a date from the selection. Returns false when it was not selected.
    pub fn remove_date(&mut self, key: &str) -> bool {
        if self.selection.remove(key).is_none() {
            return false;
        }
        log::debug!("Calendar: removed {}", key);
        self.publish();
        true
    }

    pub fn set_default_time(&mut self, time: impl Into<String>) {
        self.default_time = time.into();
        self.apply_default_time();
    }

    pub fn set_use_default_time(&mut self, use_default_time: bool) {
        self.use_default_time = use_default_time;
        self.apply_default_time();
    }

    /// Update both default-time inputs at once, rewriting the selection at most once
    pub fn set_default_time_options(&mut self, time: impl Into<String>, use_default_time: bool) {
        self.default_time = time.into();
        self.use_default_time = use_default_time;
        self.apply_default_time();
    }

    /// Rewrite every selected time with the default time while it is in use
    fn apply_default_time(&mut self) {
        if !self.use_default_time || self.selection.is_empty() {
            return;
        }
        for time in self.selection.values_mut() {
            time.clone_from(&self.default_time);
        }
        log::debug!(
            "Calendar: applied default time {} to {} dates",
            self.default_time,
            self.selection.len()
        );
        self.publish();
    }

    /// Show the previous month. Stays put at the first month chrono can represent.
    pub fn prev_month(&mut self) {
        self.show(previous_month(self.displayed_month, self.displayed_year));
    }

    /// Show the next month. Stays put at the last month chrono can represent.
    pub fn next_month(&mut self) {
        self.show(next_month(self.displayed_month, self.displayed_year));
    }

    fn show(&mut self, (month, year): (u32, i32)) {
        if NaiveDate::from_ymd_opt(year, month + 1, 1).is_none() {
            log::warn!("Calendar: {}/{} is outside the supported date range", month + 1, year);
            return;
        }
        self.displayed_month = month;
        self.displayed_year = year;
    }

    /// Show the current month. The selection is left untouched.
    pub fn go_to_today(&mut self) {
        let today = self.clock.today();
        self.displayed_month = today.month0();
        self.displayed_year = today.year();
    }

    /// Selected dates in chronological order, formatted for the list view
    pub fn selected_dates(&self) -> Vec<SelectedDate> {
        self.selection
            .iter()
            .map(|(key, time)| SelectedDate {
                key: key.clone(),
                label: display_date(key),
                time: time.clone(),
            })
            .collect()
    }

    fn publish(&self) {
        if let Some(listener) = &self.listener {
            listener(&self.selection);
        }
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for CalendarSelector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarSelector")
            .field("clock", &self.clock)
            .field("displayed_month", &self.displayed_month)
            .field("displayed_year", &self.displayed_year)
            .field("selection", &self.selection)
            .field("default_time", &self.default_time)
            .field("use_default_time", &self.use_default_time)
            .field("movable_feasts", &self.movable_feasts)
            .finish_non_exhaustive()
    }
}

/// Month before a 0-based (month, year), rolling back the year from January
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 0 {
        (11, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Month after a 0-based (month, year), rolling over the year from December
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month == 11 {
        (0, year + 1)
    } else {
        (month + 1, year)
    }
}

fn filler_day(day: u32, day_type: CalendarDayType) -> CalendarDay {
    CalendarDay {
        day,
        day_type,
        date: None,
        is_selected: false,
        is_today: false,
        holiday: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn selector_at(y: i32, m: u32, d: u32) -> CalendarSelector<FixedClock> {
        CalendarSelector::with_clock(FixedClock(date(y, m, d)), CalendarConfig::default())
    }

    fn selection_of(entries: &[(&str, &str)]) -> Selection {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_starts_on_current_month_with_empty_selection() {
        let selector = selector_at(2023, 3, 10);
        assert_eq!(selector.displayed_month(), 2);
        assert_eq!(selector.displayed_year(), 2023);
        assert!(selector.selection().is_empty());
        assert_eq!(selector.default_time(), "08:00");
        assert!(!selector.use_default_time());
    }

    #[test]
    fn test_march_2023_grid() {
        let selector = selector_at(2023, 3, 10);
        let grid = selector.build_grid();

        assert_eq!(grid.first_day_of_week, 3);
        let leading: Vec<u32> = grid
            .days
            .iter()
            .take_while(|d| d.day_type == CalendarDayType::PaddingBefore)
            .map(|d| d.day)
            .collect();
        // February 2023 ended on the 28th
        assert_eq!(leading, vec![26, 27, 28]);

        let first_active = &grid.days[3];
        assert_eq!(first_active.day_type, CalendarDayType::MonthDay);
        assert_eq!(first_active.day, 1);
        assert_eq!(first_active.date.as_deref(), Some("2023-03-01"));

        // 3 + 31 = 34 -> padded to 35
        assert_eq!(grid.days.len(), 35);
        assert_eq!(grid.days[34].day_type, CalendarDayType::PaddingAfter);
        assert_eq!(grid.days[34].day, 1);
    }

    #[test]
    fn test_grid_without_padding_when_month_fills_weeks() {
        // February 2015 starts on a Sunday and has 28 days
        let selector = selector_at(2015, 2, 1);
        let grid = selector.build_grid();

        assert_eq!(grid.days.len(), 28);
        assert!(grid.days.iter().all(|d| d.is_active()));
    }

    #[test]
    fn test_grid_shape_for_all_months() {
        let mut selector = selector_at(1899, 1, 1);
        for _ in 0..(12 * 250) {
            let grid = selector.build_grid();
            let expected_days = days_in_month(grid.year, grid.month);

            assert_eq!(grid.days.len() % 7, 0, "{}-{}", grid.year, grid.month);
            assert!(grid.days.len() <= 42);

            let active: Vec<u32> = grid.month_days().map(|d| d.day).collect();
            assert_eq!(active, (1..=expected_days).collect::<Vec<_>>());

            // Active cells form one contiguous run
            let first = grid.days.iter().position(|d| d.is_active()).unwrap();
            assert_eq!(first as u32, grid.first_day_of_week);
            assert!(grid.days[first..first + active.len()].iter().all(|d| d.is_active()));

            // Leading filler ends at the previous month's last day
            if first > 0 {
                let (pm, py) = previous_month(grid.month, grid.year);
                assert_eq!(grid.days[first - 1].day, days_in_month(py, pm));
            }

            selector.next_month();
        }
    }

    #[test]
    fn test_leap_february() {
        let grid = selector_at(2024, 2, 1).build_grid();
        assert_eq!(grid.month_days().count(), 29);

        let grid = selector_at(2023, 2, 1).build_grid();
        assert_eq!(grid.month_days().count(), 28);

        let grid = selector_at(1900, 2, 1).build_grid();
        assert_eq!(grid.month_days().count(), 28);
    }

    #[test]
    fn test_grid_marks_today_selected_and_holidays() {
        let mut selector = selector_at(2023, 12, 20);
        selector.toggle(date(2023, 12, 5));
        let grid = selector.build_grid();

        let cell = |day: u32| grid.month_days().find(|d| d.day == day).unwrap();

        assert!(cell(20).is_today);
        assert_eq!(grid.month_days().filter(|d| d.is_today).count(), 1);
        assert!(cell(5).is_selected);
        assert!(!cell(6).is_selected);
        assert_eq!(cell(25).holiday.as_deref(), Some("Natal"));
        assert_eq!(cell(24).holiday, None);

        // Filler cells are never annotated
        assert!(grid
            .days
            .iter()
            .filter(|d| !d.is_active())
            .all(|d| !d.is_selected && !d.is_today && d.holiday.is_none() && d.date.is_none()));
    }

    #[test]
    fn test_today_not_marked_in_other_months() {
        let mut selector = selector_at(2023, 12, 20);
        selector.next_month();
        let grid = selector.build_grid();
        assert!(grid.days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_movable_feasts_option() {
        let config = CalendarConfig { movable_feasts: true, ..CalendarConfig::default() };
        let selector = CalendarSelector::with_clock(FixedClock(date(2024, 2, 1)), config);
        let grid = selector.build_grid();
        let carnaval = grid.month_days().find(|d| d.day == 13).unwrap();
        assert_eq!(carnaval.holiday.as_deref(), Some("Carnaval"));

        let plain = selector_at(2024, 2, 1).build_grid();
        assert!(plain.month_days().all(|d| d.holiday.is_none()));
    }

    #[test]
    fn test_toggle_set_time_and_untoggle() {
        let mut selector = selector_at(2023, 3, 1);

        selector.toggle(date(2023, 3, 15));
        assert_eq!(selector.selection(), &selection_of(&[("2023-03-15", "08:00")]));

        assert!(selector.set_time("2023-03-15", "14:30"));
        assert_eq!(selector.selection(), &selection_of(&[("2023-03-15", "14:30")]));

        selector.toggle(date(2023, 3, 15));
        assert!(selector.selection().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selector = selector_at(2023, 3, 1);
        selector.toggle(date(2023, 3, 1));
        selector.set_time("2023-03-01", "10:15");
        let before = selector.selection().clone();

        for day in [2, 15, 31] {
            selector.toggle(date(2023, 3, day));
            selector.toggle(date(2023, 3, day));
            assert_eq!(selector.selection(), &before);
        }
    }

    #[test]
    fn test_toggle_uses_default_time_when_enabled() {
        let mut selector = selector_at(2023, 4, 1);
        selector.set_use_default_time(true);
        selector.set_default_time("09:00");

        selector.toggle(date(2023, 4, 5));
        assert_eq!(selector.selection()["2023-04-05"], "09:00");
    }

    #[test]
    fn test_toggle_uses_fallback_when_default_disabled() {
        let config = CalendarConfig {
            default_time: "09:00".to_string(),
            ..CalendarConfig::default()
        };
        let mut selector = CalendarSelector::with_clock(FixedClock(date(2023, 4, 1)), config);

        selector.toggle(date(2023, 4, 5));
        assert_eq!(selector.selection()["2023-04-05"], FALLBACK_TIME);
    }

    #[test]
    fn test_toggle_day_of_displayed_month() {
        let mut selector = selector_at(2023, 2, 10);
        assert!(selector.toggle_day(28));
        assert!(!selector.toggle_day(29));
        assert_eq!(selector.selection(), &selection_of(&[("2023-02-28", "08:00")]));
    }

    #[test]
    fn test_set_default_time_options_publishes_once() {
        let count = Rc::new(RefCell::new(0));
        let mut selector = selector_at(2023, 3, 1);
        selector.toggle(date(2023, 3, 10));
        {
            let count = count.clone();
            selector.set_listener(move |_| *count.borrow_mut() += 1);
        }

        selector.set_default_time_options("09:30", true);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(selector.selection()["2023-03-10"], "09:30");

        selector.set_default_time_options("10:30", false);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(selector.selection()["2023-03-10"], "09:30");
    }

    #[test]
    fn test_set_time_on_unselected_date_is_noop() {
        let mut selector = selector_at(2023, 3, 1);
        selector.toggle(date(2023, 3, 10));
        let before = selector.selection().clone();

        for time in ["14:30", "", "99:99"] {
            assert!(!selector.set_time("2023-03-11", time));
            assert_eq!(selector.selection(), &before);
        }
    }

    #[test]
    fn test_remove_date() {
        let mut selector = selector_at(2023, 3, 1);
        selector.toggle(date(2023, 3, 10));
        selector.toggle(date(2023, 5, 2));

        assert!(selector.remove_date("2023-05-02"));
        assert!(!selector.remove_date("2023-05-02"));
        assert_eq!(selector.selection(), &selection_of(&[("2023-03-10", "08:00")]));
    }

    #[test]
    fn test_default_time_propagation() {
        let mut selector = selector_at(2023, 3, 1);
        selector.toggle(date(2023, 3, 10));
        selector.toggle(date(2023, 3, 17));
        selector.set_time("2023-03-17", "15:00");

        // Flag off: default time changes don't touch the selection
        selector.set_default_time("10:00");
        assert_eq!(selector.selection()["2023-03-10"], "08:00");
        assert_eq!(selector.selection()["2023-03-17"], "15:00");

        // Turning the flag on rewrites every time
        selector.set_use_default_time(true);
        assert!(selector.selection().values().all(|t| t == "10:00"));

        for time in ["11:00", "07:30", "19:45"] {
            selector.set_default_time(time);
            assert!(selector.selection().values().all(|t| t == time));
        }

        // Per-date edits stay possible, and turning the flag off keeps times
        selector.set_time("2023-03-10", "12:00");
        selector.set_use_default_time(false);
        assert_eq!(selector.selection()["2023-03-10"], "12:00");
        assert_eq!(selector.selection()["2023-03-17"], "19:45");
    }

    #[test]
    fn test_set_time_overrides_default_until_next_propagation() {
        let mut selector = selector_at(2023, 3, 1);
        selector.set_default_time_options("09:00", true);
        selector.toggle(date(2023, 3, 15));
        selector.toggle(date(2023, 3, 16));

        assert!(selector.set_time("2023-03-15", "14:00"));
        assert_eq!(selector.selection()["2023-03-15"], "14:00");
        assert_eq!(selector.selection()["2023-03-16"], "09:00");
        assert_eq!(selector.default_time(), "09:00");

        // The next default-time change realigns every date
        selector.set_default_time("09:30");
        assert!(selector.selection().values().all(|t| t == "09:30"));
    }

    #[test]
    fn test_navigation_rolls_year() {
        let mut selector = selector_at(2023, 1, 15);
        selector.prev_month();
        assert_eq!((selector.displayed_month(), selector.displayed_year()), (11, 2022));
        selector.next_month();
        assert_eq!((selector.displayed_month(), selector.displayed_year()), (0, 2023));

        let mut selector = selector_at(2023, 12, 15);
        selector.next_month();
        assert_eq!((selector.displayed_month(), selector.displayed_year()), (0, 2024));
        selector.prev_month();
        assert_eq!((selector.displayed_month(), selector.displayed_year()), (11, 2023));
    }

    #[test]
    fn test_prev_next_round_trip_for_every_month() {
        for month in 0..12u32 {
            for year in [1999, 2000, 2023] {
                let (m, y) = next_month(month, year);
                assert_eq!(previous_month(m, y), (month, year));

                let (m, y) = previous_month(month, year);
                assert_eq!(next_month(m, y), (month, year));
            }
        }
    }

    #[test]
    fn test_navigation_stops_at_supported_range() {
        let mut selector =
            CalendarSelector::with_clock(FixedClock(NaiveDate::MAX), CalendarConfig::default());
        let last = (selector.displayed_month(), selector.displayed_year());
        selector.next_month();
        assert_eq!((selector.displayed_month(), selector.displayed_year()), last);

        let grid = selector.build_grid();
        assert_eq!(grid.first_day_of_week, first_weekday_of_month(last.1, last.0));
        assert!(grid.month_days().all(|day| day.date.is_some()));
        assert!(selector.toggle_day(31));

        let mut selector =
            CalendarSelector::with_clock(FixedClock(NaiveDate::MIN), CalendarConfig::default());
        let first = (selector.displayed_month(), selector.displayed_year());
        selector.prev_month();
        assert_eq!((selector.displayed_month(), selector.displayed_year()), first);
        selector.next_month();
        assert_eq!(selector.displayed_month(), first.0 + 1);
    }

    #[test]
    fn test_go_to_today_keeps_selection() {
        let mut selector = selector_at(2023, 3, 15);
        selector.toggle(date(2023, 3, 15));
        for _ in 0..14 {
            selector.next_month();
        }
        assert_eq!((selector.displayed_month(), selector.displayed_year()), (4, 2024));

        selector.go_to_today();
        assert_eq!((selector.displayed_month(), selector.displayed_year()), (2, 2023));
        assert_eq!(selector.selection().len(), 1);
    }

    #[test]
    fn test_listener_receives_every_change() {
        let published: Rc<RefCell<Vec<Selection>>> = Rc::default();
        let mut selector = selector_at(2023, 3, 1);
        {
            let published = published.clone();
            selector.set_listener(move |selection| published.borrow_mut().push(selection.clone()));
        }

        selector.toggle(date(2023, 3, 15));
        selector.set_time("2023-03-15", "14:30");
        selector.set_time("2023-03-16", "14:30"); // not selected: nothing published
        selector.set_use_default_time(true);
        selector.remove_date("2023-03-15");
        selector.set_default_time("10:00"); // empty selection: nothing published

        let published = published.borrow();
        assert_eq!(
            *published,
            vec![
                selection_of(&[("2023-03-15", "08:00")]),
                selection_of(&[("2023-03-15", "14:30")]),
                selection_of(&[("2023-03-15", "08:00")]),
                Selection::new(),
            ]
        );
    }

    #[test]
    fn test_selected_dates_are_chronological() {
        let mut selector = selector_at(2023, 3, 1);
        selector.toggle(date(2023, 12, 1));
        selector.toggle(date(2023, 3, 15));
        selector.toggle(date(2024, 1, 2));

        let labels: Vec<String> = selector.selected_dates().into_iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["15/03/2023", "01/12/2023", "02/01/2024"]);
    }

    #[test]
    fn test_month_label() {
        let mut selector = selector_at(2023, 3, 1);
        assert_eq!(selector.month_label(), "Março 2023");
        selector.prev_month();
        selector.prev_month();
        selector.prev_month();
        assert_eq!(selector.month_label(), "Dezembro 2022");
    }
}
