use yew::prelude::*;

use crate::components::crop_selector::CropSelector;
use crate::components::status::{EmptyState, ErrorNotice, Spinner};
use crate::config::Config;
use crate::hooks::use_fetch::FetchState;
use crate::hooks::use_market::use_market;
use crate::models::market::{PriceQuote, Prediction, Trend};
use crate::utils::format::{format_inr, format_quote_date};

#[function_component(MarketCard)]
pub fn market_card() -> Html {
    let market = use_market();

    let price = market.price.status().clone();
    let prediction = market.prediction.status().clone();
    let updated = market
        .price
        .resolved_at()
        .max(market.prediction.resolved_at())
        .map(|at| at.format("%H:%M").to_string());

    let on_price = {
        let fetch = market.fetch_price.clone();
        Callback::from(move |_: MouseEvent| fetch.emit(()))
    };
    let on_predict = {
        let fetch = market.fetch_prediction.clone();
        Callback::from(move |_: MouseEvent| fetch.emit(()))
    };

    let price_loading = price.is_loading();
    let prediction_loading = prediction.is_loading();
    let horizon = Config::PREDICTION_DAYS;

    html! {
        <div class="app-card market-card">
            <div class="card-heading spread">
                <h2>{"Market Prices & Prediction"}</h2>
                <CropSelector crop={market.crop} on_change={market.select_crop.clone()} />
            </div>

            <div class="market-tiles">
                <div class="market-tile">
                    <div class="tile-header">
                        <span class="card-heading-icon">{"💰"}</span>
                        <h3>{"Current Price"}</h3>
                    </div>
                    {
                        match price {
                            FetchState::Error(message) => html! { <ErrorNotice {message} /> },
                            FetchState::Loaded(quote) => render_quote(&quote),
                            FetchState::Loading => html! { <EmptyState message="Fetching latest price..." /> },
                            FetchState::Idle => html! {
                                <EmptyState message="Click \"Get Latest Price\" to fetch current market rates" />
                            },
                        }
                    }
                </div>

                <div class="market-tile prediction">
                    <div class="tile-header">
                        <span class="card-heading-icon">{"🔮"}</span>
                        <h3>{format!("{horizon}-Day Prediction")}</h3>
                    </div>
                    {
                        match prediction {
                            FetchState::Error(message) => html! { <ErrorNotice {message} /> },
                            FetchState::Loaded(forecast) => render_prediction(&forecast),
                            FetchState::Loading => html! { <EmptyState message="Forecasting..." /> },
                            FetchState::Idle => html! {
                                <EmptyState message={format!("Click \"Predict ({horizon} days)\" to get price forecast")} />
                            },
                        }
                    }
                </div>
            </div>

            <div class="action-row">
                <button class="btn" onclick={on_price} disabled={price_loading}>
                    if price_loading {
                        <><Spinner />{"Loading..."}</>
                    } else {
                        {"Get Latest Price"}
                    }
                </button>
                <button class="btn btn-secondary" onclick={on_predict} disabled={prediction_loading}>
                    if prediction_loading {
                        <><Spinner />{"Predicting..."}</>
                    } else {
                        {format!("Predict ({horizon} days)")}
                    }
                </button>
            </div>

            if let Some(updated) = updated {
                <div class="card-footer">{format!("🕐 Last updated: {updated}")}</div>
            }
        </div>
    }
}

fn render_quote(quote: &PriceQuote) -> Html {
    let details: Vec<String> = [
        quote.market.clone(),
        quote.date.as_deref().map(format_quote_date),
    ]
    .into_iter()
    .flatten()
    .collect();

    html! {
        <>
            <div class="tile-value">
                {quote.price_rupee_per_quintal.map(format_inr).unwrap_or_default()}
            </div>
            <p class="tile-subtitle">{"per quintal"}</p>
            if !details.is_empty() {
                <p class="tile-subtitle">{details.join(" • ")}</p>
            }
        </>
    }
}

fn render_prediction(prediction: &Prediction) -> Html {
    let trend = prediction.trend.unwrap_or(Trend::Flat);

    html! {
        <>
            <div class="tile-value">
                {prediction.predicted_price.map(format_inr).unwrap_or_default()}
            </div>
            <p class="tile-subtitle">{"per quintal"}</p>
            if prediction.trend.is_some() {
                <div class="trend" style={format!("color: {}", trend.color())}>
                    <span>{trend.icon()}</span>
                    <span>{trend.label()}</span>
                </div>
            }
            if let Some(percent) = prediction.confidence_percent() {
                <span class="confidence-badge">{format!("{percent}% Confidence")}</span>
            }
        </>
    }
}
