use yew::prelude::*;

use crate::hooks::use_fetch::{CardOptions, CardState, use_fetch_card};
use crate::models::guides::GuideResults;
use crate::services::guides::load_guides;
use crate::utils::input::InputPolicy;

const GUIDE_OPTIONS: CardOptions = CardOptions {
    policy: InputPolicy::AllowBlank,
    failure_message: "Failed to load guides. Please try again.",
    label: "guides",
};

/// Handle returned by `use_guides` hook
pub struct GuidesHandle {
    pub state: UseReducerHandle<CardState<GuideResults>>,
    pub search: Callback<String>,
}

/// Guide search that lists the whole catalog on mount.
#[hook]
pub fn use_guides() -> GuidesHandle {
    let guides = use_fetch_card(load_guides, GUIDE_OPTIONS);

    {
        let search = guides.submit.clone();
        use_effect_with((), move |_| {
            search.emit(String::new());
            || ()
        });
    }

    GuidesHandle {
        state: guides.state,
        search: guides.submit,
    }
}
