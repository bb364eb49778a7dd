use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::api::DeleteEventRequest;
use shared::models::EventRecord;
use shared::schedule::{filter_upcoming, sort_by_date_then_time};

use crate::components::calendar_modal::CalendarModal;
use crate::components::event_card::EventCard;
use crate::components::event_form::EventForm;
use crate::components::map_modal::MapModal;
use crate::router::Route;
use crate::services::api::ApiService;
use crate::services::session::SessionStore;

/// Case-insensitive substring match against title, location and items.
fn matches_search(event: &EventRecord, term: &str) -> bool {
    event.title.to_lowercase().contains(term)
        || event.location.to_lowercase().contains(term)
        || event.required_items.to_lowercase().contains(term)
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    // Full list as fetched (the calendar shows everything) and the pruned,
    // ordered view the cards render from.
    let events = use_state(Vec::<EventRecord>::new);
    let upcoming = use_state(Vec::<EventRecord>::new);
    let search_term = use_state(String::new);
    let loading = use_state(|| true);
    let show_add = use_state(|| false);
    let edit_target = use_state(|| Option::<EventRecord>::None);
    let map_target = use_state(|| Option::<EventRecord>::None);
    let show_calendar = use_state(|| false);
    let navigator = use_navigator();

    let session = SessionStore::load();

    let fetch_events = {
        let events = events.clone();
        let upcoming = upcoming.clone();
        let loading = loading.clone();
        let family_id = session.as_ref().map(|s| s.family_id.clone());

        Callback::from(move |_: ()| {
            let Some(family_id) = family_id.clone() else {
                return;
            };
            let events = events.clone();
            let upcoming = upcoming.clone();
            let loading = loading.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::family_events(&family_id).await {
                    Ok(fetched) => {
                        let now = chrono::Local::now().naive_local();
                        let pruned = sort_by_date_then_time(&filter_upcoming(&fetched, now));
                        events.set(fetched);
                        upcoming.set(pruned);
                        loading.set(false);
                    }
                    Err(error) => {
                        tracing::error!("Error fetching events: {error}");
                        loading.set(false);
                    }
                }
            });
        })
    };

    {
        let fetch_events = fetch_events.clone();
        use_effect_with((), move |_| {
            fetch_events.emit(());
            || ()
        });
    }

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value().to_lowercase());
        })
    };

    let on_delete = {
        let events = events.clone();
        let upcoming = upcoming.clone();
        let fetch_events = fetch_events.clone();
        let session = session.clone();

        Callback::from(move |event_id: String| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this event?") {
                return;
            }
            let Some(session) = session.clone() else {
                return;
            };

            let events = events.clone();
            let upcoming = upcoming.clone();
            let fetch_events = fetch_events.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let request = DeleteEventRequest {
                    username: session.username,
                    userfamily: session.family_id,
                };
                match ApiService::delete_event(&event_id, &request).await {
                    Ok(()) => {
                        // Drop it locally right away, then resynchronize.
                        events.set(
                            events
                                .iter()
                                .filter(|e| e.id != event_id)
                                .cloned()
                                .collect(),
                        );
                        upcoming.set(
                            upcoming
                                .iter()
                                .filter(|e| e.id != event_id)
                                .cloned()
                                .collect(),
                        );
                        fetch_events.emit(());
                    }
                    Err(error) => {
                        tracing::error!("Error deleting event: {error}");
                        gloo::dialogs::alert(
                            "Failed to delete event. You can only delete events you created.",
                        );
                    }
                }
            });
        })
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            SessionStore::clear();
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_saved = {
        let fetch_events = fetch_events.clone();
        Callback::from(move |_: ()| fetch_events.emit(()))
    };

    let Some(session) = session else {
        // The route guard redirects before this renders without a session.
        return html! {};
    };

    let visible: Vec<EventRecord> = if search_term.is_empty() {
        (*upcoming).clone()
    } else {
        upcoming
            .iter()
            .filter(|event| matches_search(event, &search_term))
            .cloned()
            .collect()
    };

    let username = session.username.clone();

    html! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <h2>{ "Family Events" }</h2>
                <div class="user-info">
                    <span>{ format!("Welcome, {username}!") }</span>
                    <span class="family-id">{ session.family_id.clone() }</span>
                    <button class="logout-btn" onclick={on_logout}>{ "Logout" }</button>
                </div>
            </div>

            <div class="actions-bar">
                <button
                    class="add-event-btn"
                    onclick={
                        let show_add = show_add.clone();
                        Callback::from(move |_| show_add.set(true))
                    }
                >
                    { "+ Add New Event" }
                </button>
                <button
                    class="calendar-btn"
                    onclick={
                        let show_calendar = show_calendar.clone();
                        Callback::from(move |_| show_calendar.set(true))
                    }
                >
                    { "📅 Calendar" }
                </button>
                <div class="search-filter">
                    <input
                        type="text"
                        placeholder="Search events..."
                        oninput={on_search}
                    />
                </div>
            </div>

            if *loading {
                <div class="loading">{ "Loading events..." }</div>
            } else if visible.is_empty() {
                <div class="no-events">
                    <div class="icon">{ "📅" }</div>
                    <p>{ "No events found. Create your first family event!" }</p>
                </div>
            } else {
                <div class="events-grid">
                    { for visible.iter().map(|event| {
                        let on_edit = {
                            let edit_target = edit_target.clone();
                            Callback::from(move |event: EventRecord| {
                                edit_target.set(Some(event));
                            })
                        };
                        let on_show_map = {
                            let map_target = map_target.clone();
                            Callback::from(move |event: EventRecord| {
                                map_target.set(Some(event));
                            })
                        };
                        html! {
                            <EventCard
                                key={event.id.clone()}
                                event={event.clone()}
                                current_username={username.clone()}
                                on_delete={on_delete.clone()}
                                {on_edit}
                                {on_show_map}
                            />
                        }
                    })}
                </div>
            }

            if *show_add {
                <EventForm
                    session={session.clone()}
                    event={None::<EventRecord>}
                    on_saved={on_saved.clone()}
                    on_close={
                        let show_add = show_add.clone();
                        Callback::from(move |_| show_add.set(false))
                    }
                />
            }

            if let Some(target) = edit_target.as_ref() {
                <EventForm
                    session={session.clone()}
                    event={Some(target.clone())}
                    on_saved={on_saved.clone()}
                    on_close={
                        let edit_target = edit_target.clone();
                        Callback::from(move |_| edit_target.set(None))
                    }
                />
            }

            if *show_calendar {
                <CalendarModal
                    events={(*events).clone()}
                    on_close={
                        let show_calendar = show_calendar.clone();
                        Callback::from(move |_| show_calendar.set(false))
                    }
                />
            }

            if let Some(target) = map_target.as_ref() {
                <MapModal
                    event={target.clone()}
                    on_close={
                        let map_target = map_target.clone();
                        Callback::from(move |_| map_target.set(None))
                    }
                />
            }
        </div>
    }
}
