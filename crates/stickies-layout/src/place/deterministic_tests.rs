use stickies_ids::NoteId;

use super::{PlacementPlanner, PlacementSource};
use crate::{
    geom::{Point, Rect, Size},
    history::PositionHistoryStore,
    ledger::OccupancyLedger,
};

fn area() -> Rect {
    Rect::new(0, 0, 1000, 800)
}

fn note_size() -> Size {
    Size::new(300, 200)
}

/// Plan and register like the engine does, returning the chosen origin.
fn place_next(
    planner: &PlacementPlanner,
    ledger: &mut OccupancyLedger,
    history: &PositionHistoryStore,
) -> Rect {
    let p = planner.plan(None, note_size(), area(), ledger, history);
    ledger.register(p.rect, None);
    p.rect
}

#[test]
fn first_three_placements_fill_column_zero() {
    let planner = PlacementPlanner::new(20, 30);
    let mut ledger = OccupancyLedger::new();
    let history = PositionHistoryStore::in_memory();

    let origins: Vec<Point> = (0..3)
        .map(|_| place_next(&planner, &mut ledger, &history).origin())
        .collect();
    assert_eq!(
        origins,
        vec![Point::new(20, 20), Point::new(20, 240), Point::new(20, 460)]
    );
}

#[test]
fn fourth_placement_moves_to_next_column() {
    let planner = PlacementPlanner::new(20, 30);
    let mut ledger = OccupancyLedger::new();
    let history = PositionHistoryStore::in_memory();
    for _ in 0..3 {
        place_next(&planner, &mut ledger, &history);
    }
    let p = planner.plan(None, note_size(), area(), &ledger, &history);
    assert_eq!(p.rect.origin(), Point::new(340, 20));
    assert_eq!(p.source, PlacementSource::Grid { col: 1, row: 0 });
}

#[test]
fn exhausted_grid_falls_back_to_staggered_center() {
    let planner = PlacementPlanner::new(20, 30);
    let mut ledger = OccupancyLedger::new();
    let history = PositionHistoryStore::in_memory();
    for _ in 0..9 {
        place_next(&planner, &mut ledger, &history);
    }
    let p = planner.plan(None, note_size(), area(), &ledger, &history);
    assert_eq!(p.source, PlacementSource::Fallback);
    assert_eq!(p.rect, Rect::new(350 + 9 * 30, 300 + 9 * 30, 300, 200));
}

#[test]
fn history_wins_over_occupancy() {
    let planner = PlacementPlanner::default();
    let mut ledger = OccupancyLedger::new();
    let mut history = PositionHistoryStore::in_memory();
    let id = NoteId::new(11);
    let remembered = Rect::new(20, 20, 420, 260);
    history.put(id, remembered);
    ledger.register(Rect::new(0, 0, 1000, 800), None);

    let p = planner.plan(Some(id), note_size(), area(), &ledger, &history);
    assert_eq!(p.rect, remembered);
    assert_eq!(p.source, PlacementSource::History);
}

#[test]
fn history_outside_work_area_is_ignored() {
    let planner = PlacementPlanner::default();
    let ledger = OccupancyLedger::new();
    let mut history = PositionHistoryStore::in_memory();
    let id = NoteId::new(12);
    history.put(id, Rect::new(900, 700, 300, 200));

    let p = planner.plan(Some(id), note_size(), area(), &ledger, &history);
    assert_eq!(p.source, PlacementSource::Grid { col: 0, row: 0 });
    assert_eq!(p.rect, Rect::new(20, 20, 300, 200));
}

#[test]
fn manually_placed_window_blocks_cells_it_overlaps() {
    let planner = PlacementPlanner::default();
    let mut ledger = OccupancyLedger::new();
    let history = PositionHistoryStore::in_memory();
    // Straddles cells (0,0) and (0,1).
    ledger.register(Rect::new(100, 200, 50, 50), None);

    let p = planner.plan(None, note_size(), area(), &ledger, &history);
    assert_eq!(p.rect.origin(), Point::new(20, 460));
}

#[test]
fn work_area_offset_is_respected() {
    let planner = PlacementPlanner::default();
    let ledger = OccupancyLedger::new();
    let history = PositionHistoryStore::in_memory();
    let shifted = Rect::new(0, 40, 1000, 760);
    let p = planner.plan(None, note_size(), shifted, &ledger, &history);
    assert_eq!(p.rect.origin(), Point::new(20, 60));
}
