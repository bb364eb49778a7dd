use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-container">
            <h1>{ "Family Organiser" }</h1>
            <p class="tagline">{ "Keep your family's schedule organised in one place" }</p>

            <div class="features">
                <div class="feature-card">
                    <div class="icon">{ "📅" }</div>
                    <h3>{ "Manage Events" }</h3>
                    <p>{ "Create and track family events like appointments, activities, and special occasions." }</p>
                </div>

                <div class="feature-card">
                    <div class="icon">{ "👨‍👩‍👧‍👦" }</div>
                    <h3>{ "Family Sharing" }</h3>
                    <p>{ "Share schedules with your family members so everyone stays in the loop." }</p>
                </div>

                <div class="feature-card">
                    <div class="icon">{ "📍" }</div>
                    <h3>{ "Location & Items" }</h3>
                    <p>{ "Track where events are and what items you need to bring." }</p>
                </div>

                <div class="feature-card">
                    <div class="icon">{ "🔍" }</div>
                    <h3>{ "Search & Filter" }</h3>
                    <p>{ "Quickly find events by searching or filtering through your schedule." }</p>
                </div>
            </div>

            <div class="cta-buttons">
                <Link<Route> to={Route::Register} classes="primary-btn">{ "Get Started" }</Link<Route>>
                <Link<Route> to={Route::Login} classes="secondary-btn">{ "Login" }</Link<Route>>
            </div>
        </div>
    }
}
