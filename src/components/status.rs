use yew::prelude::*;

/// Inline spinner for busy buttons
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! { <span class="spinner" aria-hidden="true"></span> }
}

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: String,
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class="status error" role="alert">
            <span>{"❌"}</span>
            <p>{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub icon: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
}

/// Placeholder shown before a card has anything to display
#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            if !props.icon.is_empty() {
                <div class="empty-icon">{props.icon.clone()}</div>
            }
            if !props.title.is_empty() {
                <div class="empty-title">{props.title.clone()}</div>
            }
            <p class="empty-description">{props.message.clone()}</p>
        </div>
    }
}
