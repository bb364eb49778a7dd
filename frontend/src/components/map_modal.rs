use web_sys::AbortController;
use yew::prelude::*;

use shared::models::EventRecord;

use crate::services::geocode::{self, GeocodeError, ResolvedLocation};

#[derive(Properties, PartialEq)]
pub struct MapModalProps {
    pub event: EventRecord,
    pub on_close: Callback<()>,
}

#[derive(Debug, Clone, PartialEq)]
enum ResolveState {
    Loading,
    Resolved(ResolvedLocation),
    NotFound,
    Failed,
}

fn format_time_12h(time: chrono::NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(error) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!("failed to open external maps link: {error:?}");
    }
}

#[function_component(MapModal)]
pub fn map_modal(props: &MapModalProps) -> Html {
    let state = use_state(|| ResolveState::Loading);

    {
        let state = state.clone();
        let location = props.event.location.clone();
        use_effect_with(props.event.id.clone(), move |_| {
            // The controller is aborted on unmount, so a result for a
            // closed modal is dropped instead of applied.
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());

            wasm_bindgen_futures::spawn_local(async move {
                let aborted = || signal.as_ref().is_some_and(|s| s.aborted());
                match geocode::resolve(&location, signal.as_ref()).await {
                    Ok(resolved) => state.set(ResolveState::Resolved(resolved)),
                    Err(GeocodeError::NoMatch) => state.set(ResolveState::NotFound),
                    Err(error) => {
                        if aborted() {
                            return;
                        }
                        tracing::error!("Geocoding error: {error}");
                        state.set(ResolveState::Failed);
                    }
                }
            });

            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    let event = &props.event;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let open_google = {
        let location = event.location.clone();
        Callback::from(move |_| {
            let query = js_sys::encode_uri_component(&location);
            open_external(&format!(
                "https://www.google.com/maps/search/?api=1&query={query}"
            ));
        })
    };
    let open_apple = {
        let location = event.location.clone();
        Callback::from(move |_| {
            let query = js_sys::encode_uri_component(&location);
            open_external(&format!("https://maps.apple.com/?q={query}"));
        })
    };

    let time_line = event.start_time.map(|start| {
        let mut line = format!(" • 🕐 {}", format_time_12h(start));
        if let Some(end) = event.end_time {
            line.push_str(&format!(" - {}", format_time_12h(end)));
        }
        line
    });

    html! {
        <div class="map-modal-overlay" onclick={close.clone()}>
            <div class="map-modal-content" onclick={keep_open}>
                <button class="map-modal-close" onclick={close}>{ "×" }</button>

                <div class="map-modal-header">
                    <h2>{ &event.title }</h2>
                    <p class="map-modal-date">
                        { format!("📅 {}", event.date.format("%A, %-d %B %Y")) }
                        if let Some(line) = time_line {
                            <span class="map-modal-time">{ line }</span>
                        }
                    </p>
                </div>

                <div class="map-modal-location">
                    <div class="location-icon">{ "📍" }</div>
                    <div class="location-details">
                        <span class="location-label">{ "Location" }</span>
                        <span class="location-address">{ &event.location }</span>
                        if let ResolveState::Resolved(resolved) = &*state {
                            <span class="location-full">{ &resolved.display_name }</span>
                        }
                    </div>
                </div>

                <div class="map-container">
                    { match &*state {
                        ResolveState::Loading => html! {
                            <div class="map-loading">
                                <div class="map-spinner"></div>
                                <p>{ "Loading map..." }</p>
                            </div>
                        },
                        ResolveState::NotFound => html! {
                            <div class="map-error">
                                <span class="error-icon">{ "⚠️" }</span>
                                <p>{ "Location not found. Try a more specific address." }</p>
                                <p class="error-hint">
                                    { "You can still open this location in your preferred maps app below." }
                                </p>
                            </div>
                        },
                        ResolveState::Failed => html! {
                            <div class="map-error">
                                <span class="error-icon">{ "⚠️" }</span>
                                <p>{ "Failed to load map. Please try again." }</p>
                                <p class="error-hint">
                                    { "You can still open this location in your preferred maps app below." }
                                </p>
                            </div>
                        },
                        ResolveState::Resolved(resolved) => html! {
                            <iframe
                                class="event-map"
                                title="Event location map"
                                src={geocode::osm_embed_url(resolved.latitude, resolved.longitude)}
                            />
                        },
                    }}
                </div>

                <div class="map-modal-actions">
                    <button class="map-action-btn google" onclick={open_google}>
                        <span class="btn-icon">{ "🗺️" }</span>
                        { "Open in Google Maps" }
                    </button>
                    <button class="map-action-btn apple" onclick={open_apple}>
                        <span class="btn-icon">{ "🍎" }</span>
                        { "Open in Apple Maps" }
                    </button>
                </div>

                if !event.required_items.is_empty() {
                    <div class="map-modal-items">
                        <span class="items-label">{ "🎒 Don't forget:" }</span>
                        <span class="items-list">{ &event.required_items }</span>
                    </div>
                }
            </div>
        </div>
    }
}
