use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::geom::{Point, Size};

/// Edge or corner being dragged during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    /// Top edge.
    N,
    /// Bottom edge.
    S,
    /// Right edge.
    E,
    /// Left edge.
    W,
    /// Top-right corner.
    NE,
    /// Top-left corner.
    NW,
    /// Bottom-right corner.
    SE,
    /// Bottom-left corner.
    SW,
}

impl ResizeDirection {
    /// Moves the left edge.
    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// Moves the right edge.
    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// Moves the top edge.
    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    /// Moves the bottom edge.
    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }
}

impl Display for ResizeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        };
        f.write_str(s)
    }
}

/// Pointer shape shown over a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    /// Default pointer.
    #[default]
    Arrow,
    /// Left/right edges.
    SizeHorizontal,
    /// Top/bottom edges.
    SizeVertical,
    /// Top-left and bottom-right corners (`\`).
    SizeFDiag,
    /// Top-right and bottom-left corners (`/`).
    SizeBDiag,
}

/// Resize zone under a window-local point, or `None` for the drag area.
///
/// Zones are strict bands `margin` pixels wide along each edge; corners win
/// over edges.
pub fn hit_test(local: Point, size: Size, margin: i32) -> Option<ResizeDirection> {
    let left = local.x < margin;
    let right = local.x > size.w - margin;
    let top = local.y < margin;
    let bottom = local.y > size.h - margin;
    match (left, right, top, bottom) {
        (true, _, true, _) => Some(ResizeDirection::NW),
        (_, true, true, _) => Some(ResizeDirection::NE),
        (true, _, _, true) => Some(ResizeDirection::SW),
        (_, true, _, true) => Some(ResizeDirection::SE),
        (true, ..) => Some(ResizeDirection::W),
        (_, true, ..) => Some(ResizeDirection::E),
        (_, _, true, _) => Some(ResizeDirection::N),
        (.., true) => Some(ResizeDirection::S),
        _ => None,
    }
}

/// Cursor affordance for a zone.
pub fn cursor_for(zone: Option<ResizeDirection>) -> CursorShape {
    match zone {
        None => CursorShape::Arrow,
        Some(ResizeDirection::W | ResizeDirection::E) => CursorShape::SizeHorizontal,
        Some(ResizeDirection::N | ResizeDirection::S) => CursorShape::SizeVertical,
        Some(ResizeDirection::NW | ResizeDirection::SE) => CursorShape::SizeFDiag,
        Some(ResizeDirection::NE | ResizeDirection::SW) => CursorShape::SizeBDiag,
    }
}
