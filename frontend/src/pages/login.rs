use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::api::LoginRequest;
use shared::auth::LoginThrottle;

use crate::router::Route;
use crate::services::api::ApiService;
use crate::services::session::{Session, SessionStore};

#[function_component(Login)]
pub fn login() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let family_id = use_state(String::new);
    let message = use_state(|| Option::<String>::None);
    let is_error = use_state(|| false);
    // Lives for the page's lifetime: failures within this visit count
    // toward the cooldown, a reload starts fresh.
    let throttle = use_mut_ref(LoginThrottle::new);
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

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let family_id = family_id.clone();
        let message = message.clone();
        let is_error = is_error.clone();
        let throttle = throttle.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);
            is_error.set(false);

            // Local lockout gate, checked before any network call.
            if let Err(wait) = throttle.borrow_mut().check(chrono::Utc::now()) {
                is_error.set(true);
                message.set(Some(format!(
                    "Too many failed attempts. Try again in {wait} seconds."
                )));
                return;
            }

            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
                family_id: (*family_id).clone(),
            };

            let message = message.clone();
            let is_error = is_error.clone();
            let throttle = throttle.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::login(&request).await {
                    Ok(response) => {
                        throttle.borrow_mut().record_success();
                        SessionStore::store(&Session {
                            token: response.token,
                            username: response.username,
                            role: response.userrole,
                            family_id: response.userfamily,
                        });
                        message.set(Some("Login successful! Redirecting...".to_string()));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(error) => {
                        tracing::error!("Login failed: {error}");
                        throttle.borrow_mut().record_failure(chrono::Utc::now());
                        is_error.set(true);
                        message.set(Some("Login failed. Check your credentials.".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-container">
            <h2>{ "Login" }</h2>

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
                </div>

                <div>
                    <label for="familyId">{ "Family ID" }</label>
                    <input
                        type="text"
                        id="familyId"
                        value={(*family_id).clone()}
                        oninput={on_family_id}
                        placeholder="Enter your family ID"
                        required=true
                    />
                </div>

                <button type="submit">{ "Login" }</button>
            </form>

            if let Some(text) = message.as_ref() {
                <p class={classes!("message", is_error.then_some("error"))}>{ text }</p>
            }

            <p>
                { "Don't have an account? " }
                <Link<Route> to={Route::Register}>{ "Register here" }</Link<Route>>
            </p>
        </div>
    }
}
