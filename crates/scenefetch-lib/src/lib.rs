pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod scenes;
pub mod tiles;

pub use config::Config;
pub use error::SceneFetchError;
