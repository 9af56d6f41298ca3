//! Stickies Layout
//!
//! Window layout engine for floating sticky-note windows:
//! - places new and reopened windows without overlapping live ones
//! - remembers each note's last frame across sessions
//! - drives drag and eight-way resize of borderless windows
//! - arranges all notes in a grid or cascade and snaps frames to screen edges
//!
//! [`LayoutEngine`] is the object hosts construct and drive. The building
//! blocks it composes are public for hosts that need finer control.
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod arrange;
mod engine;
mod error;
mod geom;
mod history;
mod interact;
mod ledger;
mod place;
mod screen;
mod snap;

pub use arrange::{ArrangeTarget, Arrangement};
pub use engine::LayoutEngine;
pub use error::{Error, Result};
pub use geom::{Point, Rect, Size, overlap_1d};
pub use history::{HistoryRecord, PositionHistoryStore};
pub use interact::{
    Action, CursorShape, DragSession, GeometryController, GestureState, PointerEvent,
    PointerKind, ResizeDirection, ResizeLimits, ResizeSession, cursor_for, hit_test, step,
};
pub use ledger::{OccupancyEntry, OccupancyLedger};
pub use place::{Placement, PlacementGrid, PlacementPlanner, PlacementSource};
pub use screen::{DisplayInfo, ScreenTopology, StaticScreen};
pub use snap::{clamp_into, is_visible, snap};
pub use stickies_ids::NoteId;
