//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:12:41 Saturday
//! brief: crate-wide error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("catalog needs at least 2 entries to build options, got {len}")]
    InsufficientCatalog { len: usize },

    #[error("catalog description is not unique: {description:?}")]
    DuplicateDescription { description: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
