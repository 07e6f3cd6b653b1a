use yew::prelude::*;

use crate::components::{ChatbotCard, GuidesCard, MarketCard, Navbar, WeatherCard};

/// Navbar over a fixed grid of independent cards.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app-container">
            <Navbar />

            <main class="app-main card-grid">
                <WeatherCard />
                <MarketCard />
                <GuidesCard />
                <ChatbotCard />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
