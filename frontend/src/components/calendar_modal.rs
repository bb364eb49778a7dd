use chrono::NaiveDate;
use yew::prelude::*;

use shared::calendar::{events_on, month_name, MonthCell, MonthGrid};
use shared::models::{wire_time, EventRecord};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct CalendarModalProps {
    /// The full event list; the calendar shows past events too.
    pub events: Vec<EventRecord>,
    pub on_close: Callback<()>,
}

fn format_selected_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

#[function_component(CalendarModal)]
pub fn calendar_modal(props: &CalendarModalProps) -> Html {
    let today = chrono::Local::now().date_naive();
    let grid = use_state(|| MonthGrid::containing(today));
    // Selection lives per month; navigating clears it.
    let selected = use_state(|| Option::<NaiveDate>::None);

    let go_prev = {
        let grid = grid.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            grid.set(grid.prev());
            selected.set(None);
        })
    };
    let go_next = {
        let grid = grid.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            grid.set(grid.next());
            selected.set(None);
        })
    };
    let go_today = {
        let grid = grid.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            grid.set(MonthGrid::containing(chrono::Local::now().date_naive()));
            selected.set(None);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let cells = grid.build_cells(&props.events, today, *selected);

    let rendered_cells = cells.iter().map(|cell| match cell {
        MonthCell::Padding => html! { <div class="calendar-day empty"></div> },
        MonthCell::Day(day) => {
            let has_events = !day.events.is_empty();
            let classes = classes!(
                "calendar-day",
                has_events.then_some("has-events"),
                day.is_today.then_some("today"),
                day.is_selected.then_some("selected"),
            );
            let onclick = {
                let selected = selected.clone();
                let date = day.date;
                Callback::from(move |_| selected.set(Some(date)))
            };
            html! {
                <div key={day.day} class={classes} {onclick}>
                    <span class="day-number">{ day.day }</span>
                    if has_events {
                        <span class="event-dot">{ day.events.len() }</span>
                    }
                </div>
            }
        }
    });

    let selected_panel = match *selected {
        Some(date) => {
            let on_day = events_on(date, &props.events);
            html! {
                <>
                    <h3>{ format_selected_date(date) }</h3>
                    if on_day.is_empty() {
                        <p class="no-events-message">{ "No events scheduled for this day." }</p>
                    } else {
                        <div class="events-list">
                            { for on_day.iter().map(|event| html! {
                                <div key={event.id.clone()} class="event-item">
                                    <div class="event-time">
                                        { match (event.start_time, event.end_time) {
                                            (Some(start), Some(end)) => format!(
                                                "{} - {}",
                                                start.format(wire_time::FORMAT),
                                                end.format(wire_time::FORMAT)
                                            ),
                                            (Some(start), None) =>
                                                start.format(wire_time::FORMAT).to_string(),
                                            _ => "All day".to_string(),
                                        }}
                                    </div>
                                    <div class="event-info">
                                        <div class="event-name">{ &event.title }</div>
                                        <div class="event-location">{ format!("📍 {}", event.location) }</div>
                                        if !event.required_items.is_empty() {
                                            <div class="event-items">{ format!("🎒 {}", event.required_items) }</div>
                                        }
                                    </div>
                                </div>
                            })}
                        </div>
                    }
                </>
            }
        }
        None => html! {
            <p class="select-date-message">{ "Select a date to view events" }</p>
        },
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="calendar-modal-content" onclick={keep_open}>
                <div class="modal-header">
                    <h2>{ "📅 Calendar" }</h2>
                    <button class="close-btn" onclick={close}>{ "×" }</button>
                </div>

                <div class="calendar-container">
                    <div class="calendar-nav">
                        <button class="nav-btn" onclick={go_prev}>{ "‹" }</button>
                        <div class="current-month">
                            <span>{ format!("{} {}", month_name(grid.month()), grid.year()) }</span>
                            <button class="today-btn" onclick={go_today}>{ "Today" }</button>
                        </div>
                        <button class="nav-btn" onclick={go_next}>{ "›" }</button>
                    </div>

                    <div class="calendar-grid day-headers">
                        { for DAY_NAMES.iter().map(|name| html! {
                            <div key={*name} class="day-header">{ name }</div>
                        })}
                    </div>

                    <div class="calendar-grid">
                        { for rendered_cells }
                    </div>
                </div>

                <div class="selected-date-events">
                    { selected_panel }
                </div>
            </div>
        </div>
    }
}
