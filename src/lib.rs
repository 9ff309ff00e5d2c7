pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod page;
pub mod render;
pub mod requests;
pub mod responses;
pub mod state;
pub mod tokens;
pub mod ui;

pub use app::router;
pub use client::BackendClient;
pub use config::Settings;
pub use controller::{Outcome, PageController};
pub use state::AppState;
