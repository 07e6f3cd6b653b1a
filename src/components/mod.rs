pub mod chatbot_card;
pub mod crop_selector;
pub mod guides_card;
pub mod market_card;
pub mod navbar;
pub mod status;
pub mod weather_card;

pub use chatbot_card::ChatbotCard;
pub use guides_card::GuidesCard;
pub use market_card::MarketCard;
pub use navbar::Navbar;
pub use weather_card::WeatherCard;
