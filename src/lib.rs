pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod session;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::ServerConfig;
pub use session::Session;
pub use state::AppState;
