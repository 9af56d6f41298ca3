//! Tunables for window placement, arrangement, snapping and interactive resize.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How position history mutations reach durable storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryFlush {
    /// Write the file synchronously on the calling thread after every change.
    #[default]
    Inline,
    /// Hand immutable snapshots to a dedicated writer thread.
    Background,
}

/// Layout engine configuration.
///
/// Every field has a default, so an empty `()` document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Gap between grid cells and between the work area edge and the first cell.
    pub margin: i32,
    /// Width used when a caller does not request a size.
    pub default_width: i32,
    /// Height used when a caller does not request a size.
    pub default_height: i32,
    /// Diagonal stagger applied per occupied window when the grid is exhausted.
    pub fallback_step: i32,
    /// Diagonal offset between successive windows in a cascade.
    pub cascade_step: i32,
    /// Width of the border band that starts a resize instead of a drag.
    pub resize_margin: i32,
    /// Smallest width an interactive resize may produce.
    pub min_width: i32,
    /// Smallest height an interactive resize may produce.
    pub min_height: i32,
    /// Distance at which a dragged window snaps to a work area edge.
    pub snap_threshold: i32,
    /// Apply edge snapping while dragging.
    pub snap_on_drag: bool,
    /// Location of the position history file; `None` keeps history in memory.
    pub history_path: Option<PathBuf>,
    /// Flush strategy for the position history.
    pub history_flush: HistoryFlush,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 20,
            default_width: 300,
            default_height: 200,
            fallback_step: 30,
            cascade_step: 30,
            resize_margin: 10,
            min_width: 150,
            min_height: 150,
            snap_threshold: 20,
            snap_on_drag: false,
            history_path: None,
            history_flush: HistoryFlush::Inline,
        }
    }
}

impl LayoutConfig {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), Error> {
        let checks: [(&'static str, i32, i32); 9] = [
            ("margin", self.margin, 0),
            ("default_width", self.default_width, 1),
            ("default_height", self.default_height, 1),
            ("fallback_step", self.fallback_step, 1),
            ("cascade_step", self.cascade_step, 1),
            ("resize_margin", self.resize_margin, 0),
            ("min_width", self.min_width, 1),
            ("min_height", self.min_height, 1),
            ("snap_threshold", self.snap_threshold, 0),
        ];
        for (field, value, floor) in checks {
            if value < floor {
                return Err(Error::Validation {
                    path: None,
                    field,
                    message: format!("must be at least {floor}, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        LayoutConfig::default().validate().unwrap();
    }

    #[test]
    fn negative_margin_is_rejected() {
        let cfg = LayoutConfig {
            margin: -1,
            ..LayoutConfig::default()
        };
        match cfg.validate() {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "margin"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn zero_fallback_step_is_rejected() {
        let cfg = LayoutConfig {
            fallback_step: 0,
            ..LayoutConfig::default()
        };
        match cfg.validate() {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "fallback_step"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn zero_cascade_step_is_rejected() {
        let cfg = LayoutConfig {
            cascade_step: 0,
            ..LayoutConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
