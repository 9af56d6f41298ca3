//! Screen helpers for note placement.
//!
//! The engine only ever reasons about one rectangle: the usable area of the
//! primary display. Hosts provide it through [`ScreenTopology`]; it is
//! queried on every placement decision and never cached, because resolution
//! and taskbar changes can move it at any time.

use tracing::debug;

use crate::geom::Rect;

/// Snapshot of the primary display as seen by the host windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayInfo {
    /// Full monitor rectangle.
    pub frame: Rect,
    /// Usable rectangle (monitor minus reserved system chrome).
    pub work_area: Rect,
    /// Logical DPI scale factor (1.0 at 96 dpi).
    pub scale: f64,
}

/// Trait abstraction over the host's display query to improve testability.
pub trait ScreenTopology {
    /// Usable rectangle of the primary display.
    fn work_area(&self) -> Rect;

    /// Full description of the primary display.
    fn display_info(&self) -> DisplayInfo {
        let work_area = self.work_area();
        DisplayInfo {
            frame: work_area,
            work_area,
            scale: 1.0,
        }
    }
}

/// Display geometry supplied by the host and updated when it changes.
#[derive(Debug, Clone)]
pub struct StaticScreen {
    /// Full monitor rectangle.
    frame: Rect,
    /// Usable rectangle inside `frame`.
    work_area: Rect,
    /// Logical DPI scale factor.
    scale: f64,
}

impl StaticScreen {
    /// Screen whose work area covers the whole monitor.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            work_area: frame,
            scale: 1.0,
        }
    }

    /// Screen with a work area smaller than its frame (taskbar, dock, menu bar).
    pub fn with_work_area(frame: Rect, work_area: Rect) -> Self {
        Self {
            frame,
            work_area,
            scale: 1.0,
        }
    }

    /// Set the logical DPI scale.
    #[must_use]
    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Record a change in reserved chrome (e.g. the taskbar moved).
    pub fn set_work_area(&mut self, work_area: Rect) {
        debug!(from = %self.work_area, to = %work_area, "work area changed");
        self.work_area = work_area;
    }

    /// Record a resolution change; the work area follows the new frame.
    pub fn set_frame(&mut self, frame: Rect) {
        debug!(from = %self.frame, to = %frame, "display frame changed");
        self.frame = frame;
        self.work_area = frame;
    }
}

impl ScreenTopology for StaticScreen {
    fn work_area(&self) -> Rect {
        self.work_area
    }

    fn display_info(&self) -> DisplayInfo {
        DisplayInfo {
            frame: self.frame,
            work_area: self.work_area,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taskbar_reduces_work_area_only() {
        let frame = Rect::new(0, 0, 1920, 1080);
        let mut screen = StaticScreen::new(frame).scaled(1.25);
        screen.set_work_area(Rect::new(0, 0, 1920, 1040));
        let info = screen.display_info();
        assert_eq!(info.frame, frame);
        assert_eq!(info.work_area, Rect::new(0, 0, 1920, 1040));
        assert_eq!(info.scale, 1.25);
    }

    #[test]
    fn resolution_change_resets_work_area() {
        let mut screen =
            StaticScreen::with_work_area(Rect::new(0, 0, 1920, 1080), Rect::new(0, 40, 1920, 1040));
        screen.set_frame(Rect::new(0, 0, 1280, 720));
        assert_eq!(screen.work_area(), Rect::new(0, 0, 1280, 720));
    }
}
