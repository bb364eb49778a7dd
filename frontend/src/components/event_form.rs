use chrono::{NaiveDate, NaiveTime};
use validator::Validate;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use shared::api::EventPayload;
use shared::models::{wire_time, EventRecord};

use crate::services::api::ApiService;
use crate::services::session::Session;

#[derive(Properties, PartialEq)]
pub struct EventFormProps {
    pub session: Session,
    /// `Some` puts the form in edit mode (full replace of that event).
    pub event: Option<EventRecord>,
    pub on_saved: Callback<()>,
    pub on_close: Callback<()>,
}

fn initial_time(value: Option<NaiveTime>) -> String {
    value.map_or_else(String::new, |t| t.format(wire_time::FORMAT).to_string())
}

/// Add/edit modal. The parent mounts it fresh per open, so the field state
/// initializes from the props exactly once.
#[function_component(EventForm)]
pub fn event_form(props: &EventFormProps) -> Html {
    let editing = props.event.clone();
    let is_edit = editing.is_some();

    let title = use_state(|| editing.as_ref().map_or_else(String::new, |e| e.title.clone()));
    let date = use_state(|| {
        editing
            .as_ref()
            .map_or_else(String::new, |e| e.date.format("%Y-%m-%d").to_string())
    });
    let start_time = use_state(|| initial_time(editing.as_ref().and_then(|e| e.start_time)));
    let end_time = use_state(|| initial_time(editing.as_ref().and_then(|e| e.end_time)));
    let location = use_state(|| {
        editing
            .as_ref()
            .map_or_else(String::new, |e| e.location.clone())
    });
    let required_items = use_state(|| {
        editing
            .as_ref()
            .map_or_else(String::new, |e| e.required_items.clone())
    });
    let message = use_state(|| Option::<String>::None);
    let is_error = use_state(|| false);

    let oninput_text = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_title = oninput_text(&title);
    let on_date = oninput_text(&date);
    let on_start = oninput_text(&start_time);
    let on_end = oninput_text(&end_time);
    let on_location = oninput_text(&location);
    let on_items = {
        let required_items = required_items.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            required_items.set(area.value());
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let onsubmit = {
        let title = title.clone();
        let date = date.clone();
        let start_time = start_time.clone();
        let end_time = end_time.clone();
        let location = location.clone();
        let required_items = required_items.clone();
        let message = message.clone();
        let is_error = is_error.clone();
        let session = props.session.clone();
        let event_id = editing.as_ref().map(|e| e.id.clone());
        let on_saved = props.on_saved.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);
            is_error.set(false);

            let Ok(parsed_date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
                is_error.set(true);
                message.set(Some("Enter a date as YYYY-MM-DD.".to_string()));
                return;
            };
            let parse_time = |raw: &str| {
                if raw.is_empty() {
                    Ok(None)
                } else {
                    NaiveTime::parse_from_str(raw, wire_time::FORMAT).map(Some)
                }
            };
            let (Ok(parsed_start), Ok(parsed_end)) =
                (parse_time(&start_time), parse_time(&end_time))
            else {
                is_error.set(true);
                message.set(Some("Enter times as HH:MM.".to_string()));
                return;
            };

            let payload = EventPayload {
                title: (*title).clone(),
                date: parsed_date,
                start_time: parsed_start,
                end_time: parsed_end,
                location: (*location).clone(),
                required_items: (*required_items).clone(),
                username: session.username.clone(),
                userrole: session.role.clone(),
                userfamily: session.family_id.clone(),
            };
            if payload.validate().is_err() {
                is_error.set(true);
                message.set(Some("Event name and location are required.".to_string()));
                return;
            }

            let title = title.clone();
            let date = date.clone();
            let start_time = start_time.clone();
            let end_time = end_time.clone();
            let location = location.clone();
            let required_items = required_items.clone();
            let message = message.clone();
            let is_error = is_error.clone();
            let event_id = event_id.clone();
            let on_saved = on_saved.clone();
            let on_close = on_close.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match event_id.as_deref() {
                    Some(id) => ApiService::update_event(id, &payload).await,
                    None => ApiService::create_event(&payload).await,
                };

                match result {
                    Ok(()) => {
                        message.set(Some(if event_id.is_some() {
                            "Event updated successfully!".to_string()
                        } else {
                            "Event created successfully!".to_string()
                        }));

                        if event_id.is_none() {
                            title.set(String::new());
                            date.set(String::new());
                            start_time.set(String::new());
                            end_time.set(String::new());
                            location.set(String::new());
                            required_items.set(String::new());
                        }

                        // Let the confirmation show briefly, then refresh.
                        gloo::timers::callback::Timeout::new(1_000, move || {
                            on_saved.emit(());
                            on_close.emit(());
                        })
                        .forget();
                    }
                    Err(error) => {
                        tracing::error!("Error saving event: {error}");
                        is_error.set(true);
                        message.set(Some("Failed to save event. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content" onclick={keep_open}>
                <div class="modal-header">
                    <h2>{ if is_edit { "Edit Event" } else { "Add New Event" } }</h2>
                    <button class="close-btn" onclick={close}>{ "×" }</button>
                </div>

                <form {onsubmit}>
                    <div class="form-group">
                        <label for="event">{ "Event Name" }</label>
                        <input
                            type="text"
                            id="event"
                            value={(*title).clone()}
                            oninput={on_title}
                            placeholder="e.g. Swimming Lesson"
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="date">{ "Date" }</label>
                        <input
                            type="date"
                            id="date"
                            value={(*date).clone()}
                            oninput={on_date}
                            required=true
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="startTime">{ "Start Time" }</label>
                            <input
                                type="time"
                                id="startTime"
                                value={(*start_time).clone()}
                                oninput={on_start}
                            />
                        </div>

                        <div class="form-group">
                            <label for="endTime">{ "End Time" }</label>
                            <input
                                type="time"
                                id="endTime"
                                value={(*end_time).clone()}
                                oninput={on_end}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="location">{ "Location" }</label>
                        <input
                            type="text"
                            id="location"
                            value={(*location).clone()}
                            oninput={on_location}
                            placeholder="e.g. Sports Centre"
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="requiredItems">{ "Required Items" }</label>
                        <textarea
                            id="requiredItems"
                            value={(*required_items).clone()}
                            oninput={on_items}
                            placeholder="e.g. Swimming costume, towel, goggles"
                            rows="3"
                        />
                    </div>

                    <button type="submit" class="submit-btn">
                        { if is_edit { "Save Changes" } else { "Create Event" } }
                    </button>
                </form>

                if let Some(text) = message.as_ref() {
                    <p class={classes!("message", is_error.then_some("error"))}>{ text }</p>
                }
            </div>
        </div>
    }
}
