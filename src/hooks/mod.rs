pub mod use_fetch;
pub mod use_guides;
pub mod use_market;
