//! Layout configuration shared by the stickies engine and its tools.
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

use std::{env, path::PathBuf};

mod error;
mod layout;
mod loader;

#[cfg(test)]
mod test_parse;

pub use error::Error;
pub use layout::{HistoryFlush, LayoutConfig};
pub use loader::{load_from_path, load_from_str};

/// Determine the preferred user config path (`~/.stickies/layout.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".stickies");
    p.push("layout.ron");
    p
}

/// Determine the preferred position history path (`~/.stickies/window_positions.json`).
pub fn default_history_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".stickies");
    p.push("window_positions.json");
    p
}
