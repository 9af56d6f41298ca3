//! Choosing where a new or reopened note window appears.
//!
//! Precedence:
//! 1. the note's remembered frame, if it still fits inside the work area;
//! 2. the first free cell of a column-major grid over the work area;
//! 3. a staggered center position when the grid is exhausted.
//!
//! Planning never fails and never mutates state: the caller registers the
//! chosen rectangle with the ledger (and history) afterwards.

use config::LayoutConfig;
use stickies_ids::NoteId;
use tracing::debug;

use crate::{
    geom::{Rect, Size},
    history::PositionHistoryStore,
    ledger::OccupancyLedger,
};

mod fallback;
mod grid;

#[cfg(test)]
mod deterministic_tests;
#[cfg(test)]
mod property_tests;

pub use grid::PlacementGrid;

/// Which rule produced a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementSource {
    /// The note's remembered frame.
    History,
    /// A free grid cell.
    Grid {
        /// Column index (0-based).
        col: u32,
        /// Row index (0-based).
        row: u32,
    },
    /// Staggered center after the grid was exhausted.
    Fallback,
}

/// Planner output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Frame to show the window at.
    pub rect: Rect,
    /// Rule that chose `rect`.
    pub source: PlacementSource,
}

/// Stateless placement policy parameterised by spacing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPlanner {
    /// Gap between grid cells and the work area edge.
    margin: i32,
    /// Per-occupied-window stagger for the fallback.
    fallback_step: i32,
}

impl PlacementPlanner {
    /// Planner with explicit spacing.
    pub fn new(margin: i32, fallback_step: i32) -> Self {
        Self {
            margin,
            fallback_step,
        }
    }

    /// Planner using the spacing from `cfg`.
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        Self::new(cfg.margin, cfg.fallback_step)
    }

    /// Grid margin in pixels.
    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Choose a frame for a window of `size`, optionally identified by `id`.
    pub fn plan(
        &self,
        id: Option<NoteId>,
        size: Size,
        area: Rect,
        ledger: &OccupancyLedger,
        history: &PositionHistoryStore,
    ) -> Placement {
        if let Some(id) = id
            && let Some(remembered) = history.get(id)
        {
            if area.contains(&remembered) {
                debug!(%id, rect = %remembered, "placement from history");
                return Placement {
                    rect: remembered,
                    source: PlacementSource::History,
                };
            }
            debug!(%id, rect = %remembered, %area, "remembered frame no longer fits; searching");
        }

        let size = Size::new(size.w.max(1), size.h.max(1));
        if let Some(found) = self.grid_search(size, area, ledger) {
            return found;
        }

        let rect = fallback::staggered_center(area, size, ledger.len(), self.fallback_step);
        debug!(?id, %rect, occupied = ledger.len(), "grid exhausted; fallback placement");
        Placement {
            rect,
            source: PlacementSource::Fallback,
        }
    }

    /// First grid cell that lies inside `area` and overlaps nothing in `ledger`.
    pub fn grid_search(
        &self,
        size: Size,
        area: Rect,
        ledger: &OccupancyLedger,
    ) -> Option<Placement> {
        let grid = PlacementGrid::for_window(area, size, self.margin);
        grid.candidates()
            .map(|(col, row, origin)| (col, row, Rect::from_parts(origin, size)))
            .find(|(_, _, rect)| area.contains(rect) && !ledger.overlaps(rect))
            .map(|(col, row, rect)| {
                debug!(%rect, col, row, cells = grid.len(), "placement from grid");
                Placement {
                    rect,
                    source: PlacementSource::Grid { col, row },
                }
            })
    }
}

impl Default for PlacementPlanner {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}
