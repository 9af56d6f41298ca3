//! The layout engine: one object per application owning screen, occupancy,
//! history, and configuration.
//!
//! Every public operation is infallible. Degraded paths (grid exhausted,
//! history unwritable, stray pointer events) are logged and resolved to a
//! usable answer.

use config::LayoutConfig;
use stickies_ids::NoteId;
use tracing::{debug, info, warn};

use crate::{
    arrange::{ArrangeTarget, Arrangement},
    geom::{Point, Rect, Size},
    history::PositionHistoryStore,
    interact::{Action, GeometryController, PointerEvent, ResizeLimits},
    ledger::OccupancyLedger,
    place::{Placement, PlacementPlanner},
    screen::{DisplayInfo, ScreenTopology},
    snap,
};

/// Window layout engine for a set of floating note windows.
#[derive(Debug)]
pub struct LayoutEngine<S> {
    /// Display geometry source, queried on every call.
    screen: S,
    /// Tunables.
    config: LayoutConfig,
    /// Placement policy derived from `config`.
    planner: PlacementPlanner,
    /// Bulk arrangement spacing derived from `config`.
    arrangement: Arrangement,
    /// Live window rectangles.
    ledger: OccupancyLedger,
    /// Remembered frames per note.
    history: PositionHistoryStore,
}

impl<S: ScreenTopology> LayoutEngine<S> {
    /// Engine with history opened from `config.history_path`, or kept in
    /// memory when no path is configured.
    pub fn new(screen: S, config: LayoutConfig) -> Self {
        let history = match &config.history_path {
            Some(path) => PositionHistoryStore::open(path.clone(), config.history_flush),
            None => PositionHistoryStore::in_memory(),
        };
        Self::with_history(screen, config, history)
    }

    /// Engine using an already constructed history store.
    pub fn with_history(screen: S, config: LayoutConfig, history: PositionHistoryStore) -> Self {
        info!(
            work_area = %screen.work_area(),
            remembered = history.len(),
            "layout engine ready"
        );
        Self {
            planner: PlacementPlanner::from_config(&config),
            arrangement: Arrangement::from_config(&config),
            screen,
            config,
            ledger: OccupancyLedger::new(),
            history,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Size used when a caller does not specify one.
    pub fn default_size(&self) -> Size {
        Size::new(self.config.default_width, self.config.default_height)
    }

    /// Current usable screen rectangle.
    pub fn work_area(&self) -> Rect {
        self.screen.work_area()
    }

    /// Current display description.
    pub fn screen_info(&self) -> DisplayInfo {
        self.screen.display_info()
    }

    /// Display geometry source.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Mutable display geometry source, for hosts that push display changes.
    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Live occupancy.
    pub fn ledger(&self) -> &OccupancyLedger {
        &self.ledger
    }

    /// Remembered frames.
    pub fn history(&self) -> &PositionHistoryStore {
        &self.history
    }

    /// Plan a placement without registering it.
    pub fn plan(&self, id: Option<NoteId>, size: Option<Size>) -> Placement {
        let size = size.unwrap_or_else(|| self.default_size());
        self.planner
            .plan(id, size, self.work_area(), &self.ledger, &self.history)
    }

    /// Frame for a window of `size` (default size if `None`).
    ///
    /// The returned frame is claimed in the ledger, so successive calls do
    /// not overlap until the grid is full. With an identity, history is
    /// updated too.
    pub fn get_placement(&mut self, id: Option<NoteId>, size: Option<Size>) -> Rect {
        let placement = self.plan(id, size);
        self.register_geometry(id, placement.rect);
        placement.rect
    }

    /// Claim a frame for an anonymous window and return its origin.
    pub fn next_available_position(&mut self, size: Option<Size>) -> Point {
        self.get_placement(None, size).origin()
    }

    /// Record a shown window. With an identity, its history is updated too.
    pub fn register_geometry(&mut self, id: Option<NoteId>, rect: Rect) {
        self.ledger.register(rect, id);
        if let Some(id) = id {
            self.history.put(id, rect);
        }
    }

    /// Forget a window's occupancy. History is kept so the note can reopen
    /// where it was. Returns whether an entry was removed.
    pub fn unregister_geometry(&mut self, id: Option<NoteId>, rect: Rect) -> bool {
        let removed = self.ledger.unregister(rect, id);
        if !removed {
            debug!(?id, %rect, "unregister: no matching occupancy entry");
        }
        removed
    }

    /// A window moved or resized from `old` to `new`.
    pub fn update_geometry(&mut self, id: Option<NoteId>, old: Rect, new: Rect) {
        self.unregister_geometry(id, old);
        self.register_geometry(id, new);
    }

    /// Arrange `windows` in a grid; `true` if every window was moved.
    pub fn arrange_grid<W: ArrangeTarget>(&mut self, windows: &mut [W], columns: Option<u32>) -> bool {
        let frames: Vec<Rect> = windows.iter().map(ArrangeTarget::frame).collect();
        let plan = self.arrangement.grid(self.work_area(), &frames, columns);
        self.apply_plan(windows, &plan)
    }

    /// Arrange `windows` in a diagonal cascade; `true` if every window was moved.
    pub fn arrange_cascade<W: ArrangeTarget>(&mut self, windows: &mut [W]) -> bool {
        let frames: Vec<Rect> = windows.iter().map(ArrangeTarget::frame).collect();
        let plan = self.arrangement.cascade(self.work_area(), &frames);
        self.apply_plan(windows, &plan)
    }

    /// Move each window to its planned frame and keep occupancy and history
    /// in step.
    fn apply_plan<W: ArrangeTarget>(&mut self, windows: &mut [W], plan: &[Option<Rect>]) -> bool {
        let mut skipped = 0usize;
        for (window, target) in windows.iter_mut().zip(plan) {
            let Some(target) = *target else {
                skipped += 1;
                continue;
            };
            let current = window.frame();
            if current != target {
                self.update_geometry(window.note_id(), current, target);
                window.set_frame(target);
            }
        }
        if skipped > 0 {
            info!(skipped, total = windows.len(), "arrangement left some windows in place");
        }
        skipped == 0
    }

    /// `rect` pulled against nearby work area edges. `threshold` defaults to
    /// the configured snap distance.
    pub fn snap_edges(&self, rect: Rect, threshold: Option<i32>) -> Rect {
        let threshold = threshold.unwrap_or(self.config.snap_threshold);
        snap::snap(rect, self.work_area(), threshold)
    }

    /// Any part of `rect` is on screen.
    pub fn is_visible(&self, rect: Rect) -> bool {
        snap::is_visible(rect, self.work_area())
    }

    /// `rect` moved back inside the work area.
    pub fn move_into_view(&self, rect: Rect) -> Rect {
        snap::clamp_into(rect, self.work_area())
    }

    /// A new note window: plan and register its frame.
    pub fn on_create(&mut self, id: NoteId, size: Option<Size>) -> Rect {
        let placement = self.plan(Some(id), size);
        debug!(%id, rect = %placement.rect, source = ?placement.source, "note created");
        self.register_geometry(Some(id), placement.rect);
        placement.rect
    }

    /// A note reopened with the frame from its own record, if any.
    ///
    /// A saved frame fully on screen is used as is; one partially on screen
    /// is pulled into view; otherwise the note is placed like a new one with
    /// the saved size.
    pub fn on_restore(&mut self, id: NoteId, saved: Option<Rect>) -> Rect {
        let saved = match saved {
            Some(r) if !r.is_valid() => {
                warn!(%id, rect = %r, "ignoring saved frame with non-positive size");
                None
            }
            other => other,
        };
        let area = self.work_area();
        let rect = match saved {
            Some(r) if area.contains(&r) => r,
            Some(r) if snap::is_visible(r, area) => {
                let moved = snap::clamp_into(r, area);
                debug!(%id, from = %r, to = %moved, "saved frame pulled into view");
                moved
            }
            Some(r) => self.plan(Some(id), Some(r.size())).rect,
            None => self.plan(Some(id), None).rect,
        };
        self.register_geometry(Some(id), rect);
        rect
    }

    /// A note window closed at `rect`.
    pub fn on_close(&mut self, id: NoteId, rect: Rect) -> bool {
        self.unregister_geometry(Some(id), rect)
    }

    /// Controller for a window showing at `frame`, using configured limits.
    pub fn controller(&self, frame: Rect) -> GeometryController {
        GeometryController::new(frame, ResizeLimits::from_config(&self.config))
    }

    /// Feed a pointer event to a window's controller and apply the layout
    /// side of the result.
    ///
    /// With `snap_on_drag`, drag targets are snapped before being returned.
    /// A committed gesture updates occupancy and history.
    pub fn handle_pointer(
        &mut self,
        controller: &mut GeometryController,
        id: Option<NoteId>,
        event: PointerEvent,
    ) -> Action {
        match controller.handle(event) {
            Action::MoveTo(r) if self.config.snap_on_drag => {
                let snapped = self.snap_edges(r, None);
                if snapped != r {
                    controller.applied(snapped);
                }
                Action::MoveTo(snapped)
            }
            Action::CommitGeometry { previous, current } => {
                if previous != current {
                    self.update_geometry(id, previous, current);
                }
                Action::CommitGeometry { previous, current }
            }
            other => other,
        }
    }

    /// Clear remembered frames (memory and file) and the live ledger.
    pub fn forget_positions(&mut self) {
        self.history.clear();
        self.ledger.clear();
    }
}
