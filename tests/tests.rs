#[cfg(test)]
mod tests {
    use agrismart_dashboard::hooks::use_fetch::{CardAction, CardState, FetchState};
    use agrismart_dashboard::models::{
        error::AppError,
        guides::{catalog, filter_guides},
        market::{Crop, PriceQuote, Prediction, Trend},
    };
    use agrismart_dashboard::services::guides::search_catalog;
    use agrismart_dashboard::utils::input::InputPolicy;
    use std::rc::Rc;
    use yew::functional::Reducible;

    const PRICE_FAILURE: &str = "Failed to fetch market price. Please try again.";

    // Helper function to create a quote for a crop
    fn quote(crop: &str, price: f64) -> PriceQuote {
        PriceQuote {
            crop: Some(crop.to_string()),
            price_rupee_per_quintal: Some(price),
            date: Some("2025-09-01".to_string()),
            market: Some("APMC Delhi".to_string()),
        }
    }

    fn apply<T: 'static>(state: Rc<CardState<T>>, actions: Vec<CardAction<T>>) -> Rc<CardState<T>> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    fn titles(guides: &[agrismart_dashboard::models::guides::Guide]) -> Vec<&str> {
        guides.iter().map(|g| g.title.as_str()).collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_backend_display() {
        let error = AppError::BackendError("city required".to_string());
        assert_eq!(error.to_string(), "Backend error: city required");
    }

    // ===== Input Policy Tests =====

    #[test]
    fn test_blank_input_is_never_submitted() {
        for raw in ["", " ", "\t", "\n  \n"] {
            assert_eq!(InputPolicy::RequireText.accept(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn test_submitted_city_is_trimmed() {
        assert_eq!(
            InputPolicy::RequireText.accept("  Nagpur\n"),
            Some("Nagpur".to_string())
        );
    }

    // ===== Card State Tests =====

    #[test]
    fn test_success_clears_previous_error() {
        let state = apply(
            Rc::new(CardState::<PriceQuote>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Failed(1, PRICE_FAILURE.to_string()),
            ],
        );
        assert_eq!(state.status().error(), Some(PRICE_FAILURE));

        let state = apply(
            state,
            vec![
                CardAction::Started(2),
                CardAction::Succeeded(2, quote("wheat", 2150.0)),
            ],
        );
        assert_eq!(state.status().error(), None);
        assert_eq!(
            state.status().data().map(|q| q.price_rupee_per_quintal),
            Some(Some(2150.0))
        );
    }

    #[test]
    fn test_new_request_clears_error_before_resolving() {
        let state = apply(
            Rc::new(CardState::<PriceQuote>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Failed(1, PRICE_FAILURE.to_string()),
                CardAction::Started(2),
            ],
        );

        assert!(state.status().is_loading());
        assert_eq!(state.status().error(), None);
    }

    #[test]
    fn test_failure_leaves_no_stale_result() {
        let state = apply(
            Rc::new(CardState::<PriceQuote>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Succeeded(1, quote("rice", 3200.0)),
                CardAction::Started(2),
                CardAction::Failed(2, PRICE_FAILURE.to_string()),
            ],
        );

        assert!(state.status().data().is_none());
        assert_eq!(
            state.status(),
            &FetchState::Error(PRICE_FAILURE.to_string())
        );
    }

    #[test]
    fn test_out_of_order_response_is_dropped() {
        // Request 1 resolves after request 2
        let state = apply(
            Rc::new(CardState::<PriceQuote>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Started(2),
                CardAction::Succeeded(2, quote("onion", 1800.0)),
                CardAction::Succeeded(1, quote("onion", 1.0)),
            ],
        );

        assert_eq!(state.latest_ticket(), Some(2));
        assert_eq!(
            state.status().data().and_then(|q| q.price_rupee_per_quintal),
            Some(1800.0)
        );
    }

    #[test]
    fn test_stale_failure_does_not_replace_result() {
        let state = apply(
            Rc::new(CardState::<PriceQuote>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Started(2),
                CardAction::Succeeded(2, quote("tomato", 2500.0)),
                CardAction::Failed(1, PRICE_FAILURE.to_string()),
            ],
        );

        assert!(state.status().data().is_some());
    }

    // ===== Crop Change Tests =====

    #[test]
    fn test_crop_change_clears_displayed_results() {
        let price = apply(
            Rc::new(CardState::<PriceQuote>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Succeeded(1, quote("wheat", 2150.0)),
                CardAction::Reset,
            ],
        );
        let prediction = apply(
            Rc::new(CardState::<Prediction>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Failed(1, "Failed to fetch prediction. Please try again.".to_string()),
                CardAction::Reset,
            ],
        );

        assert_eq!(price.status(), &FetchState::Idle);
        assert_eq!(prediction.status(), &FetchState::Idle);
        assert_eq!(price.resolved_at(), None);
    }

    #[test]
    fn test_crop_change_drops_in_flight_response() {
        // Price for wheat requested, crop switched before it lands
        let state = apply(
            Rc::new(CardState::<PriceQuote>::default()),
            vec![
                CardAction::Started(1),
                CardAction::Reset,
                CardAction::Succeeded(1, quote("wheat", 2150.0)),
            ],
        );

        assert_eq!(state.status(), &FetchState::Idle);

        let state = apply(
            state,
            vec![
                CardAction::Started(2),
                CardAction::Succeeded(2, quote("rice", 3200.0)),
            ],
        );
        assert_eq!(
            state.status().data().and_then(|q| q.crop.clone()),
            Some("rice".to_string())
        );
    }

    #[test]
    fn test_crop_selector_values() {
        let values: Vec<&str> = Crop::all().iter().map(Crop::value).collect();
        assert_eq!(values, vec!["wheat", "rice", "onion", "tomato"]);
        assert_eq!(Crop::Rice.to_string(), "🍚 Rice");
    }

    // ===== FetchState Tests =====

    #[test]
    fn test_fetch_state_data_extraction() {
        let data = Rc::new(quote("wheat", 2150.0));
        let loaded = FetchState::Loaded(data.clone());

        assert_eq!(loaded.data(), Some(&data));
        assert!(FetchState::<PriceQuote>::Loading.data().is_none());
        assert!(FetchState::<PriceQuote>::Idle.data().is_none());
        assert!(
            FetchState::<PriceQuote>::Error("Test error".to_string())
                .data()
                .is_none()
        );
    }

    #[test]
    fn test_fetch_state_equality() {
        assert_eq!(FetchState::<u8>::Loading, FetchState::Loading);
        assert_eq!(
            FetchState::<u8>::Error("e".to_string()),
            FetchState::Error("e".to_string())
        );
        assert_eq!(
            FetchState::Loaded(Rc::new(quote("rice", 3200.0))),
            FetchState::Loaded(Rc::new(quote("rice", 3200.0)))
        );
    }

    // ===== Guide Filter Tests =====

    #[test]
    fn test_rice_matches_exactly_one_guide() {
        let guides = filter_guides(&catalog(), "rice");
        assert_eq!(
            titles(&guides),
            vec!["Disease Prevention in Rice Cultivation"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let lower = filter_guides(&catalog(), "rice");
        let upper = filter_guides(&catalog(), "RiCe");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_matches_tags_and_content() {
        // "IPM" only appears as a tag
        let guides = filter_guides(&catalog(), "ipm");
        assert_eq!(titles(&guides), vec!["Integrated Pest Management for Wheat"]);

        let guides = filter_guides(&catalog(), "organic");
        assert_eq!(
            titles(&guides),
            vec![
                "Soil Health Management Practices",
                "Organic Fertilizer Application Guide",
            ]
        );
    }

    #[test]
    fn test_filter_is_exactly_the_matching_subset() {
        let all = catalog();
        for topic in ["soil", "water", "grain", "management", "tion", "zzz"] {
            let needle = topic.to_lowercase();
            let expected: Vec<_> = all
                .iter()
                .filter(|g| {
                    g.title.to_lowercase().contains(&needle)
                        || g.content.to_lowercase().contains(&needle)
                        || g.category.to_lowercase().contains(&needle)
                        || g.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect();
            assert_eq!(filter_guides(&all, topic), expected, "{topic}");
        }
    }

    #[test]
    fn test_blank_topic_returns_full_catalog() {
        assert_eq!(filter_guides(&catalog(), "").len(), 6);
        assert_eq!(filter_guides(&catalog(), "   ").len(), 6);
        assert_eq!(search_catalog("").summary(), "Found 6 guides");
    }

    // ===== Market Payload Tests =====

    #[test]
    fn test_mock_prediction_payload() {
        let json = r#"{
            "predicted_price": 2280,
            "confidence": 0.85,
            "trend": "up"
        }"#;

        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.predicted_price, Some(2280.0));
        assert_eq!(prediction.trend, Some(Trend::Up));
        assert_eq!(prediction.confidence_percent(), Some(85));
    }

    #[test]
    fn test_quote_payload() {
        let json = r#"{
            "crop": "tomato",
            "price_rupee_per_quintal": 2500,
            "date": "2025-09-01",
            "market": "APMC Delhi"
        }"#;

        let parsed: PriceQuote = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, quote("tomato", 2500.0));
    }
}
