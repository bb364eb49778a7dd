use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::api::RegisterRequest;
use shared::validate::{
    password_strength, strength_label, validate_family_id, validate_password, validate_username,
};

use crate::router::Route;
use crate::services::api::ApiService;

const FAMILY_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn generate_family_id() -> String {
    let mut suffix = String::with_capacity(8);
    for _ in 0..8 {
        let index = (js_sys::Math::random() * FAMILY_ID_ALPHABET.len() as f64) as usize
            % FAMILY_ID_ALPHABET.len();
        suffix.push(FAMILY_ID_ALPHABET[index] as char);
    }
    format!("family_{suffix}")
}

#[function_component(Register)]
pub fn register() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let family_id = use_state(generate_family_id);
    let is_new_family = use_state(|| true);
    let field_errors = use_state(Vec::<String>::new);
    let message = use_state(|| Option::<String>::None);
    let navigator = use_navigator();

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };
    let on_family_id = {
        let family_id = family_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            family_id.set(input.value());
        })
    };

    let on_family_toggle = {
        let is_new_family = is_new_family.clone();
        let family_id = family_id.clone();
        Callback::from(move |create_new: bool| {
            is_new_family.set(create_new);
            if create_new {
                family_id.set(generate_family_id());
            } else {
                family_id.set(String::new());
            }
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let family_id = family_id.clone();
        let is_new_family = is_new_family.clone();
        let field_errors = field_errors.clone();
        let message = message.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);

            // Inline checks block submission before any network call.
            let mut errors = validate_username(&username);
            errors.extend(validate_password(&password));
            errors.extend(validate_family_id(&family_id));
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(Vec::new());

            let request = RegisterRequest {
                username: (*username).clone(),
                password: (*password).clone(),
                family_id: (*family_id).clone(),
            };

            let shared_id = (*family_id).clone();
            let announce_id = *is_new_family;
            let message = message.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::register(&request).await {
                    Ok(()) => {
                        let family_msg = if announce_id {
                            format!(
                                "Your Family ID is: {shared_id} - Share this with family members! "
                            )
                        } else {
                            String::new()
                        };
                        message.set(Some(format!(
                            "Registration successful! {family_msg}Redirecting to login..."
                        )));

                        let navigator = navigator.clone();
                        gloo::timers::callback::Timeout::new(4_000, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Login);
                            }
                        })
                        .forget();
                    }
                    Err(error) => {
                        tracing::error!("Registration failed: {error}");
                        message.set(Some("Registration failed. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let strength = password_strength(&password);
    let strength_info = strength_label(strength);

    html! {
        <div class="register-container">
            <h2>{ "Register" }</h2>

            <form {onsubmit}>
                <div>
                    <label for="username">{ "Username" }</label>
                    <input
                        type="text"
                        id="username"
                        value={(*username).clone()}
                        oninput={on_username}
                        required=true
                    />
                </div>

                <div>
                    <label for="password">{ "Password" }</label>
                    <input
                        type="password"
                        id="password"
                        value={(*password).clone()}
                        oninput={on_password}
                        required=true
                    />
                    if !password.is_empty() {
                        <div class="strength-meter">
                            <div
                                class="strength-bar"
                                style={format!("width: {strength}%; background-color: {}", strength_info.color)}
                            />
                            <span style={format!("color: {}", strength_info.color)}>
                                { strength_info.label }
                            </span>
                        </div>
                    }
                </div>

                <div class="family-toggle">
                    <label>{ "Family Options" }</label>
                    <div>
                        <button
                            type="button"
                            class={classes!(is_new_family.then_some("active"))}
                            onclick={
                                let on_family_toggle = on_family_toggle.clone();
                                Callback::from(move |_| on_family_toggle.emit(true))
                            }
                        >
                            { "Create New Family" }
                        </button>
                        <button
                            type="button"
                            class={classes!((!*is_new_family).then_some("active"))}
                            onclick={
                                let on_family_toggle = on_family_toggle.clone();
                                Callback::from(move |_| on_family_toggle.emit(false))
                            }
                        >
                            { "Join Existing Family" }
                        </button>
                    </div>
                </div>

                <div class="family-id-section">
                    <label for="familyId">{ "Family ID" }</label>
                    <input
                        type="text"
                        id="familyId"
                        value={(*family_id).clone()}
                        oninput={on_family_id}
                        placeholder={
                            if *is_new_family { "Auto-generated" } else { "Enter family ID from a member" }
                        }
                        readonly={*is_new_family}
                        required=true
                    />
                    if *is_new_family {
                        <small>{ "Save this ID to share with your family members!" }</small>
                    }
                </div>

                <button type="submit">{ "Register" }</button>
            </form>

            if !field_errors.is_empty() {
                <ul class="field-errors">
                    { for field_errors.iter().map(|error| html! { <li>{ error }</li> }) }
                </ul>
            }

            if let Some(text) = message.as_ref() {
                <p class="message">{ text }</p>
            }

            <p>
                { "Already have an account? " }
                <Link<Route> to={Route::Login}>{ "Login here" }</Link<Route>>
            </p>
        </div>
    }
}
