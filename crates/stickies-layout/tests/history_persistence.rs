//! Position history survives an engine restart.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicUsize, Ordering},
};

use config::{HistoryFlush, LayoutConfig};
use stickies_layout::{
    LayoutEngine, NoteId, PlacementSource, PositionHistoryStore, Rect, StaticScreen,
};

fn temp_history(label: &str) -> PathBuf {
    static SEQ: AtomicUsize = AtomicUsize::new(0);
    let n = SEQ.fetch_add(1, Ordering::Relaxed);
    env::temp_dir()
        .join(format!("stickies-it-{}-{n}", process::id()))
        .join(format!("{label}.json"))
}

fn config_with(path: &Path, flush: HistoryFlush) -> LayoutConfig {
    LayoutConfig {
        history_path: Some(path.to_path_buf()),
        history_flush: flush,
        ..LayoutConfig::default()
    }
}

fn screen() -> StaticScreen {
    StaticScreen::new(Rect::new(0, 0, 1000, 800))
}

fn cleanup(path: &Path) {
    if let Some(dir) = path.parent() {
        fs::remove_dir_all(dir).ok();
    }
}

#[test]
fn put_then_fresh_load_round_trips() {
    let path = temp_history("roundtrip");
    {
        let mut store = PositionHistoryStore::open(&path, HistoryFlush::Inline);
        store.put(NoteId::new(3), Rect::new(123, 45, 310, 220));
    }
    let loaded = PositionHistoryStore::load(&path);
    assert_eq!(loaded.get(&NoteId::new(3)), Some(&Rect::new(123, 45, 310, 220)));
    cleanup(&path);
}

#[test]
fn restarted_engine_restores_remembered_frames() {
    let path = temp_history("restart");
    let id = NoteId::new(21);
    {
        let mut e = LayoutEngine::new(screen(), config_with(&path, HistoryFlush::Inline));
        let first = e.on_create(id, None);
        e.update_geometry(Some(id), first, Rect::new(600, 500, 300, 200));
    }

    let e = LayoutEngine::new(screen(), config_with(&path, HistoryFlush::Inline));
    let p = e.plan(Some(id), None);
    assert_eq!(p.source, PlacementSource::History);
    assert_eq!(p.rect, Rect::new(600, 500, 300, 200));
    cleanup(&path);
}

#[test]
fn background_writer_flushes_latest_snapshot_on_drop() {
    let path = temp_history("background");
    {
        let mut store = PositionHistoryStore::open(&path, HistoryFlush::Background);
        for n in 0..50 {
            store.put(NoteId::new(1), Rect::new(n, n, 300, 200));
        }
        store.put(NoteId::new(2), Rect::new(400, 400, 300, 200));
    }
    let loaded = PositionHistoryStore::read_file(&path).expect("history file written");
    assert_eq!(loaded.get(&NoteId::new(1)), Some(&Rect::new(49, 49, 300, 200)));
    assert_eq!(loaded.get(&NoteId::new(2)), Some(&Rect::new(400, 400, 300, 200)));
    cleanup(&path);
}

#[test]
fn forget_removes_the_file() {
    let path = temp_history("forget");
    let mut e = LayoutEngine::new(screen(), config_with(&path, HistoryFlush::Inline));
    e.on_create(NoteId::new(1), None);
    assert!(path.exists());
    e.forget_positions();
    assert!(!path.exists());
    assert!(PositionHistoryStore::load(&path).is_empty());
    cleanup(&path);
}

#[test]
fn file_is_a_flat_object_of_integer_records() {
    let path = temp_history("format");
    {
        let mut store = PositionHistoryStore::open(&path, HistoryFlush::Inline);
        store.put(NoteId::new(5), Rect::new(1, 2, 300, 200));
    }
    let text = fs::read_to_string(&path).expect("history file");
    let v: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(v["5"]["x"], 1);
    assert_eq!(v["5"]["width"], 300);
    assert_eq!(v.as_object().map(|o| o.len()), Some(1));
    cleanup(&path);
}

#[test]
fn corrupt_history_starts_empty() {
    let path = temp_history("corrupt");
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, "[1, 2, 3]").expect("write");
    let e = LayoutEngine::new(screen(), config_with(&path, HistoryFlush::Inline));
    assert!(e.history().is_empty());
    cleanup(&path);
}
