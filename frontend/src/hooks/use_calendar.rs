use std::cell::RefCell;
use std::rc::Rc;

use shared::date_format::is_valid_time;
use shared::{CalendarConfig, CalendarMonth, CalendarSelector, Clock, SelectedDate, Selection};
use yew::prelude::*;

use crate::services::date_utils::BrowserClock;

#[derive(Clone, PartialEq)]
pub struct CalendarOptions {
    pub on_select_date: Callback<Selection>,
    pub default_time: String,
    pub use_default_time: bool,
    pub movable_feasts: bool,
}

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub grid: CalendarMonth,
    /// e.g. "Março 2023"
    pub month_label: String,
    pub selected_dates: Vec<SelectedDate>,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub toggle_day: Callback<u32>,
    /// (storage key, HH:MM)
    pub set_time: Callback<(String, String)>,
    pub remove_date: Callback<String>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub go_to_today: Callback<MouseEvent>,
}

/// Shared handles needed to mutate the selector from a callback.
///
/// The selector's listener only records the latest selection; it is emitted
/// to the consumer after the selector borrow is released, so a consumer that
/// re-renders synchronously never observes the selector mid-mutation.
struct Dispatcher<C: Clock = BrowserClock> {
    selector: Rc<RefCell<CalendarSelector<C>>>,
    pending: Rc<RefCell<Option<Selection>>>,
    on_select_date: Callback<Selection>,
    /// Re-renders the owning component
    on_changed: Callback<()>,
}

impl<C: Clock> Clone for Dispatcher<C> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            pending: self.pending.clone(),
            on_select_date: self.on_select_date.clone(),
            on_changed: self.on_changed.clone(),
        }
    }
}

impl<C: Clock + 'static> Dispatcher<C> {
    /// Wrap a selector whose listener records into the pending slot
    fn new(
        mut selector: CalendarSelector<C>,
        on_select_date: Callback<Selection>,
        on_changed: Callback<()>,
    ) -> Self {
        let pending = Rc::new(RefCell::new(None));
        {
            let pending = pending.clone();
            selector.set_listener(move |selection| {
                *pending.borrow_mut() = Some(selection.clone());
            });
        }
        Self {
            selector: Rc::new(RefCell::new(selector)),
            pending,
            on_select_date,
            on_changed,
        }
    }

    fn with_callbacks(
        &self,
        on_select_date: Callback<Selection>,
        on_changed: Callback<()>,
    ) -> Self {
        Self {
            on_select_date,
            on_changed,
            ..self.clone()
        }
    }

    fn run(&self, mutate: impl FnOnce(&mut CalendarSelector<C>)) {
        mutate(&mut *self.selector.borrow_mut());

        let published = self.pending.borrow_mut().take();
        if let Some(selection) = published {
            self.on_select_date.emit(selection);
        }
        self.on_changed.emit(());
    }

    /// Edit a date's time. Cleared or malformed input values are ignored.
    fn set_time(&self, key: &str, time: String) {
        if !is_valid_time(&time) {
            log::debug!("Calendar: ignoring time {:?} for {}", time, key);
            return;
        }
        self.run(|s| {
            s.set_time(key, time);
        });
    }
}

#[hook]
pub fn use_calendar(options: CalendarOptions) -> UseCalendarResult {
    let update = use_force_update();
    let on_changed = Callback::from(move |_: ()| update.force_update());

    // Created once; later renders only swap in the current callbacks
    let base = {
        let config = CalendarConfig {
            default_time: options.default_time.clone(),
            use_default_time: options.use_default_time,
            movable_feasts: options.movable_feasts,
        };
        let on_select_date = options.on_select_date.clone();
        let on_changed = on_changed.clone();
        use_memo((), move |_| {
            Dispatcher::new(
                CalendarSelector::with_clock(BrowserClock, config),
                on_select_date,
                on_changed,
            )
        })
    };
    let dispatcher = base.with_callbacks(options.on_select_date.clone(), on_changed);

    // Re-apply the default time whenever either input changes
    {
        let dispatcher = dispatcher.clone();
        use_effect_with(
            (options.default_time.clone(), options.use_default_time),
            move |(default_time, use_default_time)| {
                let default_time = default_time.clone();
                let use_default_time = *use_default_time;
                dispatcher.run(|s| s.set_default_time_options(default_time, use_default_time));
                || ()
            },
        );
    }

    let toggle_day = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |day: u32| {
            dispatcher.run(|s| {
                if !s.toggle_day(day) {
                    log::warn!("Calendar: day {} is not in the displayed month", day);
                }
            });
        })
    };

    let set_time = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |(key, time): (String, String)| dispatcher.set_time(&key, time))
    };

    let remove_date = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |key: String| {
            dispatcher.run(|s| {
                s.remove_date(&key);
            });
        })
    };

    let prev_month = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.run(CalendarSelector::prev_month))
    };

    let next_month = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.run(CalendarSelector::next_month))
    };

    let go_to_today = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.run(CalendarSelector::go_to_today))
    };

    let state = {
        let selector = dispatcher.selector.borrow();
        CalendarState {
            grid: selector.build_grid(),
            month_label: selector.month_label(),
            selected_dates: selector.selected_dates(),
        }
    };

    let actions = UseCalendarActions {
        toggle_day,
        set_time,
        remove_date,
        prev_month,
        next_month,
        go_to_today,
    };

    UseCalendarResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::FixedClock;

    struct Recorded {
        published: Rc<RefCell<Vec<Selection>>>,
        renders: Rc<RefCell<u32>>,
    }

    fn dispatcher(config: CalendarConfig) -> (Dispatcher<FixedClock>, Recorded) {
        let published = Rc::new(RefCell::new(Vec::new()));
        let renders = Rc::new(RefCell::new(0));
        let today = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();

        let on_select_date = {
            let published = published.clone();
            Callback::from(move |selection: Selection| published.borrow_mut().push(selection))
        };
        let on_changed = {
            let renders = renders.clone();
            Callback::from(move |_: ()| *renders.borrow_mut() += 1)
        };

        let dispatcher = Dispatcher::new(
            CalendarSelector::with_clock(FixedClock(today), config),
            on_select_date,
            on_changed,
        );
        (dispatcher, Recorded { published, renders })
    }

    #[test]
    fn test_selection_is_forwarded_after_the_borrow_ends() {
        let (dispatcher, recorded) = dispatcher(CalendarConfig::default());

        // A consumer that reads the selector while handling the selection
        let reader = dispatcher.selector.clone();
        let dispatcher = dispatcher.with_callbacks(
            {
                let published = recorded.published.clone();
                Callback::from(move |selection: Selection| {
                    assert_eq!(reader.borrow().selection(), &selection);
                    published.borrow_mut().push(selection);
                })
            },
            dispatcher.on_changed.clone(),
        );

        dispatcher.run(|s| {
            s.toggle_day(15);
        });
        dispatcher.run(|s| {
            s.toggle_day(15);
        });

        let published = recorded.published.borrow();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0]["2023-03-15"], "08:00");
        assert!(published[1].is_empty());
        assert_eq!(*recorded.renders.borrow(), 2);
    }

    #[test]
    fn test_navigation_rerenders_without_publishing() {
        let (dispatcher, recorded) = dispatcher(CalendarConfig::default());

        dispatcher.run(CalendarSelector::next_month);
        dispatcher.run(CalendarSelector::go_to_today);

        assert!(recorded.published.borrow().is_empty());
        assert_eq!(*recorded.renders.borrow(), 2);
        assert_eq!(dispatcher.selector.borrow().displayed_month(), 2);
    }

    #[test]
    fn test_set_time_ignores_cleared_input() {
        let (dispatcher, recorded) = dispatcher(CalendarConfig::default());
        dispatcher.run(|s| {
            s.toggle_day(15);
        });

        dispatcher.set_time("2023-03-15", String::new());
        dispatcher.set_time("2023-03-15", "9:5".to_string());
        assert_eq!(dispatcher.selector.borrow().selection()["2023-03-15"], "08:00");
        assert_eq!(recorded.published.borrow().len(), 1);

        dispatcher.set_time("2023-03-15", "14:30".to_string());
        assert_eq!(dispatcher.selector.borrow().selection()["2023-03-15"], "14:30");
        assert_eq!(recorded.published.borrow().len(), 2);
    }

    #[test]
    fn test_default_time_options_publish_once() {
        let (dispatcher, recorded) = dispatcher(CalendarConfig::default());
        dispatcher.run(|s| {
            s.toggle_day(6);
            s.toggle_day(7);
        });
        assert_eq!(recorded.published.borrow().len(), 1);

        dispatcher.run(|s| s.set_default_time_options("10:15", true));
        let published = recorded.published.borrow();
        assert_eq!(published.len(), 2);
        assert!(published[1].values().all(|time| time == "10:15"));
    }
}
