//! Parse and load user configuration.

use std::{ffi::OsStr, fs, path::Path};

use ron::{Options, extensions::Extensions};
use tracing::debug;

use crate::{Error, LayoutConfig, error::excerpt_at};

/// Load a validated `LayoutConfig` from a RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<LayoutConfig, Error> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported config format (expected a .ron file)".to_string(),
        });
    }
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    let cfg = load_from_str(&source, Some(path))?;
    debug!(path = %path.display(), "loaded layout config");
    Ok(cfg)
}

/// Parse and validate a `LayoutConfig` from RON text.
///
/// `path` is only used to annotate errors.
pub fn load_from_str(source: &str, path: Option<&Path>) -> Result<LayoutConfig, Error> {
    let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    let parsed: Result<LayoutConfig, Error> = options.from_str(source).map_err(|e| {
        let line = e.span.start.line.max(1);
        let col = e.span.start.col.max(1);
        Error::Parse {
            path: None,
            line,
            col,
            message: e.code.to_string(),
            excerpt: excerpt_at(source, line, col),
        }
    });
    let cfg = parsed.and_then(|cfg| cfg.validate().map(|()| cfg));
    match path {
        Some(p) => cfg.map_err(|e| e.with_path(p)),
        None => cfg,
    }
}
