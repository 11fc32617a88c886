pub mod api;
pub mod cli;
pub mod config;
pub mod cooldown;
pub mod errors;
pub mod http;
pub mod logs;
pub mod version;

pub use api::InternalApiClient;
pub use config::Configuration;
pub use internal_api::models;
