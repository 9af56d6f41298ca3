//! Subcommand implementations.
//!
//! Each command drives a freshly built engine and writes a plain-text report
//! to the supplied writer.

use std::io::Write;

use config::LayoutConfig;
use stickies_ids::NoteId;
use stickies_layout::{
    Action, ArrangeTarget, LayoutEngine, PointerEvent, Rect, StaticScreen,
};
use tracing::{debug, info};

use crate::{
    cli::{ArrangeArgs, DragArgs, PlaceArgs, SetupArgs, SnapArgs, Strategy},
    error::Result,
};

/// Engine type used by the tester.
pub type Engine = LayoutEngine<StaticScreen>;

/// Load configuration and construct the engine described by `setup`.
pub fn build_engine(setup: &SetupArgs) -> Result<Engine> {
    let mut cfg = match &setup.config {
        Some(path) => config::load_from_path(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(history) = &setup.history {
        cfg.history_path = Some(history.clone());
    }
    debug!(?cfg, "tester configuration");
    Ok(LayoutEngine::new(StaticScreen::new(setup.work_area), cfg))
}

/// A simulated note window for arrangement.
#[derive(Debug, Clone)]
struct SimNote {
    /// Note identity.
    id: NoteId,
    /// Current frame.
    frame: Rect,
}

impl ArrangeTarget for SimNote {
    fn note_id(&self) -> Option<NoteId> {
        Some(self.id)
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, rect: Rect) {
        self.frame = rect;
    }
}

/// `place`: create `count` notes and report where each landed.
pub fn place(engine: &mut Engine, args: &PlaceArgs, out: &mut impl Write) -> Result<()> {
    for n in 0..args.count {
        let id = NoteId::new(args.id + n);
        let placement = engine.plan(Some(id), args.size);
        engine.register_geometry(Some(id), placement.rect);
        writeln!(out, "note {id}: {} [{:?}]", placement.rect, placement.source)?;
    }
    engine.history().try_flush()?;
    Ok(())
}

/// `arrange`: open `count` notes, arrange them, and report final frames.
pub fn arrange(engine: &mut Engine, args: &ArrangeArgs, out: &mut impl Write) -> Result<()> {
    let mut notes: Vec<SimNote> = (1..=args.count)
        .map(|n| {
            let id = NoteId::new(n);
            SimNote {
                id,
                frame: engine.on_create(id, None),
            }
        })
        .collect();
    let complete = match args.strategy {
        Strategy::Grid => engine.arrange_grid(&mut notes, args.columns),
        Strategy::Cascade => engine.arrange_cascade(&mut notes),
    };
    info!(strategy = ?args.strategy, count = notes.len(), complete, "arranged");
    for note in &notes {
        writeln!(out, "note {}: {}", note.id, note.frame)?;
    }
    if !complete {
        writeln!(out, "some notes did not fit and were left in place")?;
    }
    engine.history().try_flush()?;
    Ok(())
}

/// `snap`: print the snapped rectangle.
pub fn snap(engine: &Engine, args: &SnapArgs, out: &mut impl Write) -> Result<()> {
    let snapped = engine.snap_edges(args.rect, args.threshold);
    writeln!(out, "{} -> {}", args.rect, snapped)?;
    Ok(())
}

/// `drag`: replay press at `from`, move to `to`, release at `to`.
pub fn drag(engine: &mut Engine, args: &DragArgs, out: &mut impl Write) -> Result<()> {
    let id = NoteId::new(args.id);
    engine.register_geometry(Some(id), args.rect);
    let mut controller = engine.controller(args.rect);
    let origin = args.rect.origin();

    let events = [
        PointerEvent::press(args.from, args.from - origin),
        PointerEvent::moved(args.to, args.to - origin),
        PointerEvent::release(args.to, args.to - origin),
    ];
    for event in events {
        let action = engine.handle_pointer(&mut controller, Some(id), event);
        writeln!(out, "{:?} {} -> {}", event.kind, event.pointer, describe(&action))?;
    }
    writeln!(out, "final: {}", controller.frame())?;
    engine.history().try_flush()?;
    Ok(())
}

/// One-line rendering of a controller action.
fn describe(action: &Action) -> String {
    match action {
        Action::None => "none".to_string(),
        Action::MoveTo(r) => format!("move {r}"),
        Action::ResizeTo(r) => format!("resize {r}"),
        Action::CommitGeometry { previous, current } => format!("commit {previous} => {current}"),
        Action::SetCursor(c) => format!("cursor {c:?}"),
    }
}

/// `forget`: clear remembered positions.
pub fn forget(engine: &mut Engine, out: &mut impl Write) -> Result<()> {
    let path = engine.history().path().map(|p| p.display().to_string());
    engine.forget_positions();
    match path {
        Some(p) => writeln!(out, "cleared position history at {p}")?,
        None => writeln!(out, "no history file configured; nothing to clear")?,
    }
    Ok(())
}

/// `screen`: print display information.
pub fn screen(engine: &Engine, out: &mut impl Write) -> Result<()> {
    let info = engine.screen_info();
    writeln!(out, "frame:     {}", info.frame)?;
    writeln!(out, "work area: {}", info.work_area)?;
    writeln!(out, "scale:     {}", info.scale)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use stickies_layout::Point;

    use super::*;

    fn setup() -> SetupArgs {
        SetupArgs {
            config: None,
            history: None,
            work_area: Rect::new(0, 0, 1000, 800),
        }
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn place_reports_grid_cells() {
        let mut engine = build_engine(&setup()).unwrap();
        let args = PlaceArgs {
            id: 1,
            size: None,
            count: 2,
        };
        let text = output(|out| place(&mut engine, &args, out));
        assert_eq!(
            text,
            "note 1: (20,20) 300x200 [Grid { col: 0, row: 0 }]\n\
             note 2: (20,240) 300x200 [Grid { col: 0, row: 1 }]\n"
        );
    }

    #[test]
    fn drag_reports_commit() {
        let mut engine = build_engine(&setup()).unwrap();
        let args = DragArgs {
            id: 1,
            rect: Rect::new(100, 100, 300, 200),
            from: Point::new(250, 200),
            to: Point::new(300, 260),
        };
        let text = output(|out| drag(&mut engine, &args, out));
        assert!(text.contains("commit (100,100) 300x200 => (150,160) 300x200"));
        assert!(text.ends_with("final: (150,160) 300x200\n"));
    }

    #[test]
    fn arrange_cascade_lists_frames() {
        let mut engine = build_engine(&setup()).unwrap();
        let args = ArrangeArgs {
            strategy: Strategy::Cascade,
            count: 2,
            columns: None,
        };
        let text = output(|out| arrange(&mut engine, &args, out));
        assert_eq!(text, "note 1: (20,20) 300x200\nnote 2: (50,50) 300x200\n");
    }

    #[test]
    fn forget_without_file() {
        let mut engine = build_engine(&setup()).unwrap();
        let text = output(|out| forget(&mut engine, out));
        assert!(text.starts_with("no history file configured"));
    }
}
