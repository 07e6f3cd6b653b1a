use yew::prelude::*;

use crate::hooks::use_fetch::{CardOptions, CardState, use_fetch_card};
use crate::models::market::{Crop, PriceQuote, Prediction};
use crate::services::api::{fetch_market_prices, predict_market};
use crate::utils::input::InputPolicy;

const PRICE_OPTIONS: CardOptions = CardOptions {
    policy: InputPolicy::RequireText,
    failure_message: "Failed to fetch market price. Please try again.",
    label: "market price",
};

const PREDICTION_OPTIONS: CardOptions = CardOptions {
    policy: InputPolicy::RequireText,
    failure_message: "Failed to fetch prediction. Please try again.",
    label: "market prediction",
};

/// Handle returned by `use_market` hook
pub struct MarketHandle {
    pub crop: Crop,
    pub price: UseReducerHandle<CardState<PriceQuote>>,
    pub prediction: UseReducerHandle<CardState<Prediction>>,
    pub select_crop: Callback<Crop>,
    pub fetch_price: Callback<()>,
    pub fetch_prediction: Callback<()>,
}

/// Crop selection plus independent price and prediction slots.
///
/// Selecting a crop clears both slots at once, so nothing fetched for the
/// previous crop stays on screen, including responses still in flight.
#[hook]
pub fn use_market() -> MarketHandle {
    let crop = use_state(Crop::default);
    let price = use_fetch_card(fetch_market_prices, PRICE_OPTIONS);
    let prediction = use_fetch_card(predict_market, PREDICTION_OPTIONS);

    let select_crop = {
        let crop = crop.clone();
        let reset_price = price.reset.clone();
        let reset_prediction = prediction.reset.clone();
        Callback::from(move |next: Crop| {
            reset_price.emit(());
            reset_prediction.emit(());
            crop.set(next);
        })
    };

    let fetch_price = {
        let submit = price.submit.clone();
        let crop = *crop;
        Callback::from(move |()| submit.emit(crop.value().to_string()))
    };

    let fetch_prediction = {
        let submit = prediction.submit.clone();
        let crop = *crop;
        Callback::from(move |()| submit.emit(crop.value().to_string()))
    };

    MarketHandle {
        crop: *crop,
        price: price.state,
        prediction: prediction.state,
        select_crop,
        fetch_price,
        fetch_prediction,
    }
}
