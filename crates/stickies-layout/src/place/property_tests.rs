use proptest::prelude::*;

use super::{PlacementGrid, PlacementPlanner, PlacementSource};
use crate::{
    geom::{Rect, Size},
    history::PositionHistoryStore,
    ledger::OccupancyLedger,
};

fn area_strategy() -> impl Strategy<Value = Rect> {
    (-2000i32..2000, -2000i32..2000, 200i32..3000, 200i32..2000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (40i32..800, 40i32..600).prop_map(|(w, h)| Size::new(w, h))
}

proptest! {
    #[test]
    fn fresh_placements_never_overlap_until_fallback(
        area in area_strategy(),
        size in size_strategy(),
        margin in 0i32..40,
    ) {
        let planner = PlacementPlanner::new(margin, 30);
        let history = PositionHistoryStore::in_memory();
        let mut ledger = OccupancyLedger::new();
        let mut placed: Vec<Rect> = Vec::new();
        let cells = PlacementGrid::for_window(area, size, margin).len();
        for _ in 0..=cells {
            let p = planner.plan(None, size, area, &ledger, &history);
            if p.source == PlacementSource::Fallback {
                break;
            }
            prop_assert!(area.contains(&p.rect));
            for prev in &placed {
                prop_assert!(!prev.intersects(&p.rect), "{} overlaps {}", prev, p.rect);
            }
            ledger.register(p.rect, None);
            placed.push(p.rect);
        }
        prop_assert!(placed.len() <= cells);
    }

    #[test]
    fn grid_candidates_are_column_major_and_complete(
        area in area_strategy(),
        size in size_strategy(),
        margin in 0i32..40,
    ) {
        let grid = PlacementGrid::for_window(area, size, margin);
        let cells: Vec<(u32, u32)> = grid.candidates().map(|(c, r, _)| (c, r)).collect();
        prop_assert_eq!(cells.len(), grid.len());
        prop_assert!(grid.cols >= 1 && grid.rows >= 1);
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.0 < b.0 || (a.0 == b.0 && a.1 + 1 == b.1));
        }
    }

    #[test]
    fn planner_is_deterministic(
        area in area_strategy(),
        size in size_strategy(),
        blockers in prop::collection::vec((0i32..1500, 0i32..1500, 10i32..400, 10i32..400), 0..6),
    ) {
        let planner = PlacementPlanner::default();
        let history = PositionHistoryStore::in_memory();
        let mut ledger = OccupancyLedger::new();
        for (x, y, w, h) in blockers {
            ledger.register(Rect::new(area.x + x, area.y + y, w, h), None);
        }
        let a = planner.plan(None, size, area, &ledger, &history);
        let b = planner.plan(None, size, area, &ledger, &history);
        prop_assert_eq!(a, b);
        if let PlacementSource::Grid { .. } = a.source {
            prop_assert!(!ledger.overlaps(&a.rect));
        }
    }
}
