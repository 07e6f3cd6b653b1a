pub mod api;
pub mod guides;
