use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::status::{EmptyState, ErrorNotice, Spinner};
use crate::hooks::use_fetch::FetchState;
use crate::hooks::use_guides::use_guides;
use crate::models::guides::{Guide, POPULAR_TOPICS};

#[function_component(GuidesCard)]
pub fn guides_card() -> Html {
    let topic = use_state(String::new);
    let guides = use_guides();

    let status = guides.state.status().clone();
    let loading = status.is_loading();

    let oninput = {
        let topic = topic.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            topic.set(input.value());
        })
    };

    let onclick = {
        let topic = topic.clone();
        let search = guides.search.clone();
        Callback::from(move |_: MouseEvent| search.emit((*topic).clone()))
    };

    let onkeypress = {
        let topic = topic.clone();
        let search = guides.search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                search.emit((*topic).clone());
            }
        })
    };

    let chips = POPULAR_TOPICS
        .iter()
        .map(|chip| {
            let onclick = {
                let topic = topic.clone();
                let search = guides.search.clone();
                let value = chip.value.to_string();
                Callback::from(move |_: MouseEvent| {
                    topic.set(value.clone());
                    search.emit(value.clone());
                })
            };
            let class = classes!("topic-chip", (*topic == chip.value).then_some("active"));

            html! {
                <button key={chip.value} {class} {onclick}>
                    <span>{chip.icon}</span>
                    <span>{chip.label}</span>
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="app-card guides-card">
            <div class="card-heading">
                <span class="card-heading-icon">{"📚"}</span>
                <h2>{"Guides"}</h2>
            </div>

            <div class="search-row">
                <input
                    class="text-input"
                    type="text"
                    value={(*topic).clone()}
                    {oninput}
                    {onkeypress}
                    placeholder="Filter by topic (e.g., pest control)"
                    aria-label="Guide topic"
                />
                <button class="btn" {onclick} disabled={loading}>
                    if loading {
                        <><Spinner />{"Searching..."}</>
                    } else {
                        {"Search Guides"}
                    }
                </button>
            </div>

            <div class="topic-chips">{chips}</div>

            {
                match status {
                    FetchState::Idle => Html::default(),
                    FetchState::Loading => html! {
                        <EmptyState
                            icon="⏳"
                            title="Loading guides..."
                            message="Please wait while we fetch the latest guides for you."
                        />
                    },
                    FetchState::Error(message) => html! { <ErrorNotice {message} /> },
                    FetchState::Loaded(results) if results.guides.is_empty() => {
                        let message = if results.topic.trim().is_empty() {
                            "No guides are currently available. Please check back later."
                        } else {
                            "Try searching for different keywords or browse our popular topics above."
                        };
                        html! { <EmptyState icon="📚" title="No guides found" {message} /> }
                    }
                    FetchState::Loaded(results) => html! {
                        <>
                            <div class="results-count">{results.summary()}</div>
                            <div class="guides-grid">
                                { for results.guides.iter().map(render_guide) }
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}

fn render_guide(guide: &Guide) -> Html {
    let difficulty = guide.difficulty;
    // 8-digit hex: badge background is the level colour at low alpha
    let badge_style = format!(
        "background-color: {}20; color: {}",
        difficulty.color(),
        difficulty.color()
    );

    html! {
        <div key={guide.id} class="guide-item">
            <div class="guide-header">
                <h3 class="guide-title">{&guide.title}</h3>
                <div class="guide-category">
                    <span>{guide.category_icon()}</span>
                    <span>{&guide.category}</span>
                </div>
            </div>

            <p class="guide-content">{&guide.content}</p>

            <div class="guide-meta">
                if let Some(read_time) = &guide.read_time {
                    <span class="read-time">{format!("📖 {read_time}")}</span>
                }
                <span class="difficulty-badge" style={badge_style}>{difficulty.label()}</span>
            </div>

            if !guide.tags.is_empty() {
                <div class="guide-tags">
                    { for guide.tags.iter().map(|tag| html! { <span class="tag">{format!("#{tag}")}</span> }) }
                </div>
            }
        </div>
    }
}
