use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::protected::Protected;
use crate::pages::{
    dashboard::Dashboard, home::Home, login::Login, not_found::NotFound, register::Register,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Dashboard => html! { <Protected><Dashboard /></Protected> },
        Route::NotFound => html! { <NotFound /> },
    }
}
