pub mod chat;
pub mod error;
pub mod guides;
pub mod market;
pub mod weather;
