pub mod api;
pub mod config;
pub mod db;
pub mod logging;
pub mod server;

pub use api::{ApiError, Response};
pub use config::Config;
pub use db::SqliteStore;
