use web_sys::HtmlInputElement;
use yew::prelude::*;

const NAV_LINKS: [&str; 7] = [
    "Dashboard",
    "Weather",
    "Market Prices",
    "Guides",
    "AI Assistant",
    "Blog",
    "Contact",
];

/// Fixed top bar. The search box only keeps its own text.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let search = use_state(String::new);

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="brand">
                    <img class="brand-logo" src="/logoagri.png" alt="AgriSmartAI Logo" />
                    <div>
                        <h1 class="brand-title">{"AgriSmartAI"}</h1>
                        <p class="brand-subtitle">{"AI assistant for farmers"}</p>
                    </div>
                </div>

                <div class="nav-search">
                    <input
                        type="text"
                        placeholder="Search city or crop..."
                        value={(*search).clone()}
                        {oninput}
                        aria-label="Search city or crop"
                    />
                    <span class="nav-search-icon">{"🔍"}</span>
                </div>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|label| html! { <a href="#" class="nav-link">{*label}</a> }) }
                </div>

                <div class="nav-actions">
                    <button class="icon-button" title="Notifications">{"🔔"}</button>
                    <button class="icon-button" title="Language">{"🌐"}</button>
                    <a href="#" class="login-button">{"👤 Login"}</a>
                </div>
            </div>
        </nav>
    }
}
