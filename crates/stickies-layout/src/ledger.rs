//! In-memory occupancy index of live window frames.
//!
//! Entries form a multiset: two windows may legitimately share a rectangle
//! after the user drags one onto the other, so duplicates are kept and
//! [`OccupancyLedger::unregister`] removes a single matching entry.

use stickies_ids::NoteId;
use tracing::trace;

use crate::geom::Rect;

/// A placed rectangle, optionally tagged with the window that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyEntry {
    /// Frame claimed by the window.
    pub rect: Rect,
    /// Owning window, when known.
    pub id: Option<NoteId>,
}

/// Rectangles currently claimed by live windows.
#[derive(Debug, Clone, Default)]
pub struct OccupancyLedger {
    /// Entries in registration order.
    entries: Vec<OccupancyEntry>,
}

impl OccupancyLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `rect` for `id`.
    pub fn register(&mut self, rect: Rect, id: Option<NoteId>) {
        trace!(%rect, ?id, "ledger register");
        self.entries.push(OccupancyEntry { rect, id });
    }

    /// Release one entry equal to `(rect, id)`.
    ///
    /// Returns `false` without touching the ledger when nothing matches; this
    /// happens when a window's geometry changed before it was unregistered.
    pub fn unregister(&mut self, rect: Rect, id: Option<NoteId>) -> bool {
        let Some(idx) = self
            .entries
            .iter()
            .position(|e| e.rect == rect && e.id == id)
        else {
            trace!(%rect, ?id, "ledger unregister: no match");
            return false;
        };
        self.entries.remove(idx);
        true
    }

    /// True when `candidate` intersects any claimed rectangle.
    pub fn overlaps(&self, candidate: &Rect) -> bool {
        self.entries.iter().any(|e| candidate.intersects(&e.rect))
    }

    /// Most recently registered frame owned by `id`.
    pub fn rect_of(&self, id: NoteId) -> Option<Rect> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.id == Some(id))
            .map(|e| e.rect)
    }

    /// Number of claimed rectangles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is claimed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[OccupancyEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_kept_and_removed_one_at_a_time() {
        let mut ledger = OccupancyLedger::new();
        let r = Rect::new(20, 20, 300, 200);
        ledger.register(r, None);
        ledger.register(r, None);
        assert_eq!(ledger.len(), 2);
        assert!(ledger.unregister(r, None));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.overlaps(&Rect::new(100, 100, 10, 10)));
    }

    #[test]
    fn unregister_twice_is_a_noop() {
        let mut ledger = OccupancyLedger::new();
        let id = Some(NoteId::new(7));
        let r = Rect::new(0, 0, 100, 100);
        ledger.register(r, id);
        assert!(ledger.unregister(r, id));
        assert!(!ledger.unregister(r, id));
        assert!(ledger.is_empty());
    }

    #[test]
    fn unregister_requires_matching_identity() {
        let mut ledger = OccupancyLedger::new();
        let r = Rect::new(0, 0, 100, 100);
        ledger.register(r, Some(NoteId::new(1)));
        assert!(!ledger.unregister(r, Some(NoteId::new(2))));
        assert!(!ledger.unregister(r, None));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn overlap_ignores_touching_neighbours() {
        let mut ledger = OccupancyLedger::new();
        ledger.register(Rect::new(20, 20, 300, 200), None);
        assert!(!ledger.overlaps(&Rect::new(320, 20, 300, 200)));
        assert!(!ledger.overlaps(&Rect::new(20, 240, 300, 200)));
        assert!(ledger.overlaps(&Rect::new(300, 200, 300, 200)));
    }

    #[test]
    fn rect_of_prefers_latest_entry() {
        let mut ledger = OccupancyLedger::new();
        let id = NoteId::new(3);
        ledger.register(Rect::new(0, 0, 10, 10), Some(id));
        ledger.register(Rect::new(50, 50, 10, 10), Some(id));
        assert_eq!(ledger.rect_of(id), Some(Rect::new(50, 50, 10, 10)));
        assert_eq!(ledger.rect_of(NoteId::new(4)), None);
    }
}
