use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::session::SessionStore;

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub children: Children,
}

/// Route guard: renders its children only with a live session. A missing,
/// malformed or expired token clears the stored session and redirects.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    match SessionStore::authenticated() {
        Some(_) => html! { <>{ props.children.clone() }</> },
        None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
