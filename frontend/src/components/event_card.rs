use yew::prelude::*;

use shared::models::{wire_time, EventRecord};

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: EventRecord,
    pub current_username: String,
    pub on_delete: Callback<String>,
    pub on_edit: Callback<EventRecord>,
    pub on_show_map: Callback<EventRecord>,
}

fn format_time_range(event: &EventRecord) -> String {
    match (event.start_time, event.end_time) {
        (Some(start), Some(end)) => format!(
            "{} - {}",
            start.format(wire_time::FORMAT),
            end.format(wire_time::FORMAT)
        ),
        (Some(start), None) => start.format(wire_time::FORMAT).to_string(),
        (None, Some(end)) => format!("until {}", end.format(wire_time::FORMAT)),
        (None, None) => "All day".to_string(),
    }
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    let is_organiser = event.organiser == props.current_username;

    let show_map = {
        let on_show_map = props.on_show_map.clone();
        let event = event.clone();
        Callback::from(move |_| on_show_map.emit(event.clone()))
    };
    let edit = {
        let on_edit = props.on_edit.clone();
        let event = event.clone();
        Callback::from(move |_| on_edit.emit(event.clone()))
    };
    let delete = {
        let on_delete = props.on_delete.clone();
        let id = event.id.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };

    html! {
        <div class="event-card">
            <h3>{ &event.title }</h3>
            <div class="event-detail">
                <span class="icon">{ "📅" }</span>
                <span>{ event.date.format("%Y-%m-%d").to_string() }</span>
            </div>
            <div class="event-detail">
                <span class="icon">{ "🕐" }</span>
                <span>{ format_time_range(event) }</span>
            </div>
            <div class="event-detail">
                <span class="icon">{ "📍" }</span>
                <button class="location-link" onclick={show_map}>{ &event.location }</button>
            </div>
            if !event.required_items.is_empty() {
                <div class="event-detail">
                    <span class="icon">{ "🎒" }</span>
                    <span>{ &event.required_items }</span>
                </div>
            }
            if is_organiser {
                <div class="event-actions">
                    <button class="edit-btn" onclick={edit}>{ "Edit" }</button>
                    <button class="delete-btn" onclick={delete}>{ "Delete" }</button>
                </div>
            }
        </div>
    }
}
