//! Error handling for the stickies-tester crate.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for stickies-tester operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running the tester.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Configuration parsing or validation errors.
    #[error("Configuration error: {}", .0.pretty())]
    Config(#[from] config::Error),
    /// Position history could not be written.
    #[error("Layout error: {0}")]
    Layout(#[from] stickies_layout::Error),
}
