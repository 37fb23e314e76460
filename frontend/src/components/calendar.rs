use shared::date_format::WEEKDAY_ABBREVIATIONS;
use shared::{CalendarDay, CalendarDayType, Selection};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_calendar::{use_calendar, CalendarOptions};

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    /// Receives the full selection after every change
    pub on_select_date: Callback<Selection>,
    #[prop_or(AttrValue::Static("08:00"))]
    pub default_time: AttrValue,
    #[prop_or(false)]
    pub use_default_time: bool,
    #[prop_or_default]
    pub on_default_time_change: Option<Callback<String>>,
    #[prop_or_default]
    pub on_use_default_time_change: Option<Callback<bool>>,
    /// Compute Carnaval, Sexta-feira Santa and Corpus Christi from Easter
    #[prop_or(false)]
    pub movable_feasts: bool,
}

/// Multi-date lesson picker with a per-date time list
#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar = use_calendar(CalendarOptions {
        on_select_date: props.on_select_date.clone(),
        default_time: props.default_time.to_string(),
        use_default_time: props.use_default_time,
        movable_feasts: props.movable_feasts,
    });
    let state = calendar.state;
    let actions = calendar.actions;

    let render_day = |day: &CalendarDay| -> Html {
        if day.day_type != CalendarDayType::MonthDay {
            return html! {
                <div class="calendar-day inactive">{day.day}</div>
            };
        }

        let mut classes = classes!("calendar-day");
        if day.is_selected {
            classes.push("selected");
        }
        if day.is_today {
            classes.push("today");
        }
        if day.holiday.is_some() {
            classes.push("holiday");
        }

        let onclick = {
            let toggle_day = actions.toggle_day.clone();
            let number = day.day;
            Callback::from(move |_: MouseEvent| toggle_day.emit(number))
        };

        html! {
            <div class={classes} {onclick} title={day.holiday.clone()}>
                <span class="day-number">{day.day}</span>
                if let Some(holiday) = &day.holiday {
                    <span class="holiday-tooltip">{holiday}</span>
                }
            </div>
        }
    };

    let on_default_time_input = props.on_default_time_change.clone().map(|callback| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    });

    let on_use_default_time_toggle = props.on_use_default_time_change.clone().map(|callback| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.checked());
        })
    });

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="nav-button" onclick={actions.prev_month.clone()} title="Mês anterior">{"◀"}</button>
                <h3 class="month-label">{&state.month_label}</h3>
                <button class="nav-button" onclick={actions.go_to_today.clone()}>{"Hoje"}</button>
                <button class="nav-button" onclick={actions.next_month.clone()} title="Próximo mês">{"▶"}</button>
            </div>

            <div class="calendar-weekdays">
                { for WEEKDAY_ABBREVIATIONS.iter().map(|name| html! { <div class="weekday">{*name}</div> }) }
            </div>

            <div class="calendar-grid">
                { for state.grid.weeks().map(|week| html! {
                    <div class="calendar-week">
                        { for week.iter().map(&render_day) }
                    </div>
                }) }
            </div>

            <div class="default-time-controls">
                <label>
                    <input
                        type="checkbox"
                        checked={props.use_default_time}
                        disabled={on_use_default_time_toggle.is_none()}
                        onchange={on_use_default_time_toggle}
                    />
                    {" Usar horário padrão"}
                </label>
                <input
                    type="time"
                    value={props.default_time.clone()}
                    disabled={on_default_time_input.is_none()}
                    oninput={on_default_time_input}
                />
            </div>

            <div class="selected-dates">
                <h4>{"Datas selecionadas"}</h4>
                if state.selected_dates.is_empty() {
                    <p class="empty-state">{"Nenhuma data selecionada"}</p>
                } else {
                    <ul>
                        { for state.selected_dates.iter().map(|selected| {
                            let key = selected.key.clone();
                            let set_time = actions.set_time.clone();
                            let on_time = Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                set_time.emit((key.clone(), input.value()));
                            });

                            let key = selected.key.clone();
                            let remove_date = actions.remove_date.clone();
                            let on_remove = Callback::from(move |_: MouseEvent| remove_date.emit(key.clone()));

                            html! {
                                <li key={selected.key.clone()} class="selected-date">
                                    <span class="selected-date-label">{&selected.label}</span>
                                    <input type="time" value={selected.time.clone()} oninput={on_time} />
                                    <button class="remove-button" onclick={on_remove} title="Remover">{"✕"}</button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </div>
        </div>
    }
}
