use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::status::{EmptyState, ErrorNotice, Spinner};
use crate::hooks::use_fetch::{CardOptions, FetchState, use_fetch_card};
use crate::models::weather::{WeatherReading, humidity_label, temperature_color};
use crate::services::api::fetch_weather;
use crate::utils::format::format_celsius;
use crate::utils::input::{InputPolicy, has_text};

const WEATHER_OPTIONS: CardOptions = CardOptions {
    policy: InputPolicy::RequireText,
    failure_message: "Failed to fetch weather data. Please check the city name and try again.",
    label: "weather",
};

#[function_component(WeatherCard)]
pub fn weather_card() -> Html {
    let city = use_state(String::new);
    let weather = use_fetch_card(fetch_weather, WEATHER_OPTIONS);

    let status = weather.status().clone();
    let updated = weather
        .state
        .resolved_at()
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_default();
    let loading = status.is_loading();
    let can_submit = has_text(&city) && !loading;

    let oninput = {
        let city = city.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            city.set(input.value());
        })
    };

    let onclick = {
        let city = city.clone();
        let submit = weather.submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit((*city).clone()))
    };

    let onkeypress = {
        let city = city.clone();
        let submit = weather.submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !loading {
                submit.emit((*city).clone());
            }
        })
    };

    html! {
        <div class="app-card weather-card">
            <div class="card-heading">
                <span class="card-heading-icon">{"🌤️"}</span>
                <h2>{"Weather Forecast"}</h2>
            </div>

            <div class="search-row">
                <input
                    class="text-input"
                    type="text"
                    value={(*city).clone()}
                    {oninput}
                    {onkeypress}
                    placeholder="Enter city name (e.g., Mumbai, Delhi, Bangalore)"
                    aria-label="City name"
                />
                <button class="btn" {onclick} disabled={!can_submit}>
                    if loading {
                        <><Spinner />{"Checking..."}</>
                    } else {
                        {"🌡️ Get Weather"}
                    }
                </button>
            </div>

            {
                match status {
                    FetchState::Idle => html! {
                        <EmptyState message="Enter a city to see current conditions" />
                    },
                    FetchState::Loading => html! {
                        <EmptyState icon="⏳" message="Fetching the latest conditions..." />
                    },
                    FetchState::Error(message) => html! { <ErrorNotice {message} /> },
                    FetchState::Loaded(reading) => html! { <WeatherReport {reading} {updated} /> },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WeatherReportProps {
    pub reading: Rc<WeatherReading>,
    /// Time the reading arrived
    pub updated: String,
}

#[function_component(WeatherReport)]
pub fn weather_report(props: &WeatherReportProps) -> Html {
    let reading = &props.reading;
    let updated = &props.updated;

    let temp_style = reading
        .temp_c
        .map(|t| format!("color: {}", temperature_color(t)))
        .unwrap_or_default();

    html! {
        <div class="weather-report">
            <div class="weather-location">
                <div>
                    <h3>{format!("📍 {}", reading.location())}</h3>
                    <p class="muted">{"Current conditions"}</p>
                </div>
                <div class="weather-icon">{reading.icon()}</div>
            </div>

            <div class="stat-grid">
                <div class="stat-tile">
                    <span class="stat-label">{"🌡️ Temperature"}</span>
                    <div class="stat-value" style={temp_style}>{format_celsius(reading.temp_c)}</div>
                    <div class="stat-note">{format!("Feels like {}", format_celsius(reading.feels_like_c))}</div>
                </div>

                <div class="stat-tile">
                    <span class="stat-label">{"💧 Humidity"}</span>
                    {
                        match reading.humidity {
                            Some(humidity) => html! {
                                <>
                                    <div class="stat-value humidity">{format!("{humidity}%")}</div>
                                    <div class="stat-note">{humidity_label(humidity)}</div>
                                </>
                            },
                            None => html! { <div class="stat-value">{"—"}</div> },
                        }
                    }
                </div>

                <div class="stat-tile wide">
                    <span class="stat-label">{"🌤️ Conditions"}</span>
                    <div class="stat-value condition">
                        {reading.condition.clone().unwrap_or_else(|| "Unavailable".to_string())}
                    </div>
                </div>
            </div>

            <div class="card-footer">{format!("🕐 Last updated: {updated}")}</div>
        </div>
    }
}
