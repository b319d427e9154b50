pub mod analysis;
pub mod app;
pub mod charts;
pub mod config;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod history;
pub mod models;
pub mod score;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
