//! Drag and eight-way resize for borderless note windows.
//!
//! [`step`] is a pure transition function over [`GestureState`]; the host
//! feeds it one [`PointerEvent`] at a time and applies the returned
//! [`Action`]. [`GeometryController`] bundles the state with its limits and
//! the window's last known frame for hosts that want one object per window.

use config::LayoutConfig;
use tracing::debug;

use crate::geom::{Point, Rect, Size};

mod zones;


pub use zones::{CursorShape, ResizeDirection, cursor_for, hit_test};

/// Resize band width and minimum window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeLimits {
    /// Width of the resize band along each edge, in window-local pixels.
    pub margin: i32,
    /// Smallest size a resize may produce, per axis.
    pub min: Size,
}

impl ResizeLimits {
    /// Limits from `cfg`.
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        Self {
            margin: cfg.resize_margin,
            min: Size::new(cfg.min_width, cfg.min_height),
        }
    }
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

/// Pointer event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed.
    Press,
    /// Pointer moved (button state irrelevant).
    Move,
    /// Primary button released.
    Release,
}

/// One pointer event delivered to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Event phase.
    pub kind: PointerKind,
    /// Pointer position in global screen coordinates.
    pub pointer: Point,
    /// Pointer position relative to the window's top-left corner.
    pub local: Point,
}

impl PointerEvent {
    /// Press at `pointer`, `local` inside the window.
    pub fn press(pointer: Point, local: Point) -> Self {
        Self {
            kind: PointerKind::Press,
            pointer,
            local,
        }
    }

    /// Move to `pointer`.
    pub fn moved(pointer: Point, local: Point) -> Self {
        Self {
            kind: PointerKind::Move,
            pointer,
            local,
        }
    }

    /// Release at `pointer`.
    pub fn release(pointer: Point, local: Point) -> Self {
        Self {
            kind: PointerKind::Release,
            pointer,
            local,
        }
    }
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Frame at press time.
    pub initial: Rect,
    /// Frame after the latest move.
    pub current: Rect,
    /// Global pointer position at press time.
    pub anchor: Point,
}

/// An in-progress resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    /// Frame at press time.
    pub initial: Rect,
    /// Frame after the latest accepted move.
    pub current: Rect,
    /// Global pointer position at press time.
    pub anchor: Point,
    /// Edge or corner being dragged.
    pub direction: ResizeDirection,
}

/// Per-window gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No button held.
    #[default]
    Idle,
    /// Moving the whole window.
    Dragging(DragSession),
    /// Moving one edge or corner.
    Resizing(ResizeSession),
}

impl GestureState {
    /// True while a drag or resize is active.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// What the host should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing.
    None,
    /// Move the window to this frame (size unchanged).
    MoveTo(Rect),
    /// Apply this frame (origin and/or size changed).
    ResizeTo(Rect),
    /// Gesture finished: persist `current` and update occupancy from `previous`.
    CommitGeometry {
        /// Frame when the gesture began.
        previous: Rect,
        /// Frame when the gesture ended.
        current: Rect,
    },
    /// Show this pointer shape.
    SetCursor(CursorShape),
}

/// Advance `state` by one event.
///
/// `frame` is the window's current frame; it seeds a new session on press
/// and sizes the hit-test zones while idle.
pub fn step(
    state: GestureState,
    event: PointerEvent,
    frame: Rect,
    limits: &ResizeLimits,
) -> (GestureState, Action) {
    match (state, event.kind) {
        (GestureState::Idle, PointerKind::Press) => begin(event, frame, limits),
        (active, PointerKind::Press) => {
            debug!(state = ?active, "press during an active gesture; restarting");
            begin(event, frame, limits)
        }
        (GestureState::Idle, PointerKind::Move) => {
            let zone = hit_test(event.local, frame.size(), limits.margin);
            (GestureState::Idle, Action::SetCursor(cursor_for(zone)))
        }
        (GestureState::Idle, PointerKind::Release) => {
            debug!(pointer = %event.pointer, "release without press ignored");
            (GestureState::Idle, Action::None)
        }
        (GestureState::Dragging(mut s), PointerKind::Move) => {
            let delta = event.pointer - s.anchor;
            s.current = s.initial.with_origin(s.initial.origin() + delta);
            (GestureState::Dragging(s), Action::MoveTo(s.current))
        }
        (GestureState::Resizing(mut s), PointerKind::Move) => {
            s.current = resized(&s, event.pointer, limits.min);
            (GestureState::Resizing(s), Action::ResizeTo(s.current))
        }
        (GestureState::Dragging(DragSession { initial, current, .. }), PointerKind::Release)
        | (
            GestureState::Resizing(ResizeSession {
                initial, current, ..
            }),
            PointerKind::Release,
        ) => (
            GestureState::Idle,
            Action::CommitGeometry {
                previous: initial,
                current,
            },
        ),
    }
}

/// Start a drag or resize depending on where the press landed.
fn begin(event: PointerEvent, frame: Rect, limits: &ResizeLimits) -> (GestureState, Action) {
    match hit_test(event.local, frame.size(), limits.margin) {
        Some(direction) => {
            debug!(%direction, %frame, "resize started");
            let session = ResizeSession {
                initial: frame,
                current: frame,
                anchor: event.pointer,
                direction,
            };
            (
                GestureState::Resizing(session),
                Action::SetCursor(cursor_for(Some(direction))),
            )
        }
        None => {
            debug!(%frame, "drag started");
            let session = DragSession {
                initial: frame,
                current: frame,
                anchor: event.pointer,
            };
            (GestureState::Dragging(session), Action::None)
        }
    }
}

/// Frame implied by dragging `s.direction` to `pointer`.
///
/// Each axis is computed from the initial frame. An axis whose new extent
/// would fall below `min` keeps its value from the current frame; the other
/// axis still applies.
fn resized(s: &ResizeSession, pointer: Point, min: Size) -> Rect {
    let d = pointer - s.anchor;
    let init = s.initial;
    let mut next = s.current;

    let horizontal = if s.direction.west() {
        Some((init.x + d.x, init.w - d.x))
    } else if s.direction.east() {
        Some((init.x, init.w + d.x))
    } else {
        None
    };
    if let Some((x, w)) = horizontal
        && w >= min.w
    {
        next.x = x;
        next.w = w;
    }

    let vertical = if s.direction.north() {
        Some((init.y + d.y, init.h - d.y))
    } else if s.direction.south() {
        Some((init.y, init.h + d.y))
    } else {
        None
    };
    if let Some((y, h)) = vertical
        && h >= min.h
    {
        next.y = y;
        next.h = h;
    }

    next
}

/// Gesture state for one window plus the frame the host last applied.
#[derive(Debug, Clone)]
pub struct GeometryController {
    /// Current gesture.
    state: GestureState,
    /// Band width and minimum size.
    limits: ResizeLimits,
    /// Window frame as last applied by the host.
    frame: Rect,
}

impl GeometryController {
    /// Idle controller for a window showing at `frame`.
    pub fn new(frame: Rect, limits: ResizeLimits) -> Self {
        Self {
            state: GestureState::Idle,
            limits,
            frame,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Last known frame.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Active limits.
    pub fn limits(&self) -> &ResizeLimits {
        &self.limits
    }

    /// Feed one event, tracking the frame implied by move/resize actions.
    pub fn handle(&mut self, event: PointerEvent) -> Action {
        let (state, action) = step(self.state, event, self.frame, &self.limits);
        self.state = state;
        match action {
            Action::MoveTo(r) | Action::ResizeTo(r) => self.frame = r,
            Action::CommitGeometry { current, .. } => self.frame = current,
            Action::None | Action::SetCursor(_) => {}
        }
        action
    }

    /// Record the frame the host actually applied, which may differ from
    /// the one requested (for example after edge snapping).
    pub fn applied(&mut self, rect: Rect) {
        self.frame = rect;
        match &mut self.state {
            GestureState::Dragging(s) => s.current = rect,
            GestureState::Resizing(s) => s.current = rect,
            GestureState::Idle => {}
        }
    }

    /// Drop any active gesture without committing.
    pub fn cancel(&mut self) {
        if self.state.is_active() {
            debug!(frame = %self.frame, "gesture cancelled");
        }
        self.state = GestureState::Idle;
    }
}
