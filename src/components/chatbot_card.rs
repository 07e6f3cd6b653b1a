use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::status::Spinner;
use crate::hooks::use_fetch::{CardOptions, FetchState, use_fetch_card};
use crate::services::api::ask_assistant;
use crate::utils::input::{InputPolicy, has_text};

const CHAT_OPTIONS: CardOptions = CardOptions {
    policy: InputPolicy::RequireText,
    failure_message: "Sorry, I'm having trouble connecting. Please try again.",
    label: "chat",
};

#[function_component(ChatbotCard)]
pub fn chatbot_card() -> Html {
    let query = use_state(String::new);
    let chat = use_fetch_card(ask_assistant, CHAT_OPTIONS);

    let status = chat.status().clone();
    let loading = status.is_loading();
    let can_submit = has_text(&query) && !loading;

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onclick = {
        let query = query.clone();
        let submit = chat.submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit((*query).clone()))
    };

    // Enter sends, Shift+Enter inserts a newline
    let onkeypress = {
        let query = query.clone();
        let submit = chat.submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                submit.emit((*query).clone());
            }
        })
    };

    let response = match status {
        FetchState::Loaded(answer) => Some((answer.text.clone(), None)),
        FetchState::Error(message) => Some((message, Some("failed"))),
        FetchState::Idle | FetchState::Loading => None,
    };

    html! {
        <div class="app-card chatbot-card">
            <div class="card-heading stacked">
                <h2>{"AI Assistant"}</h2>
                <p class="muted">{"Get expert advice on farming, crops, and agriculture"}</p>
            </div>

            <textarea
                class="text-input chat-input"
                rows="2"
                value={(*query).clone()}
                {oninput}
                {onkeypress}
                disabled={loading}
                placeholder="Ask about soil health, pest control, crop management, market prices, loans, or any farming question..."
                aria-label="Question for the assistant"
            />

            <div class="chat-actions">
                <span class="online-indicator">{"● AI Assistant Online"}</span>
                <button class="btn" {onclick} disabled={!can_submit}>
                    if loading {
                        <><Spinner />{"Thinking..."}</>
                    } else {
                        {"➤ Ask AI"}
                    }
                </button>
            </div>

            if let Some((text, class)) = response {
                <div class={classes!("chat-response", class)}>
                    <h4>{"Response:"}</h4>
                    <p>{text}</p>
                </div>
            }

            <div class="card-footer">{"Press Enter to send • Powered by AgriSmartAI"}</div>
        </div>
    }
}
