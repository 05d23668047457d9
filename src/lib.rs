pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod logger;

pub use config::GameConfig;
pub use error::{GameError, Result};
