// SPDX-License-Identifier: MPL-2.0
//! Errors that stop the gallery from starting or reading its settings.
//!
//! Search failures are not here: they are [`SearchError`] values that the
//! gallery shows in its banner instead of propagating.
//!
//! [`SearchError`]: crate::application::port::SearchError

use thiserror::Error;

/// Startup and settings errors. Sources are kept as text so the error can be
/// cloned into UI state.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Reading `settings.toml` failed.
    #[error("I/O Error: {0}")]
    Io(String),
    /// `settings.toml` is not valid TOML or has a bad value.
    #[error("Config Error: {0}")]
    Config(String),
    /// The HTTP client could not be built.
    #[error("HTTP Error: {0}")]
    Http(String),
    /// The window or event loop failed.
    #[error("GUI Error: {0}")]
    Gui(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
