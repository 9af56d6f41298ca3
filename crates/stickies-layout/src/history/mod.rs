//! Persistent "where was this note last shown" records.
//!
//! The file is a single JSON object mapping string-encoded note ids to
//! `{x, y, width, height}` integers. A missing file means no history; a
//! corrupt file or a malformed record is logged and skipped. History loss is
//! recoverable, so nothing in here fails the caller.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use config::HistoryFlush;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stickies_ids::NoteId;
use tracing::{debug, info, warn};

use crate::{Error, Result, geom::Rect};

mod writer;

use writer::{HistoryWriter, WriteOp};

/// Immutable copy of the full history handed to the writer.
pub(crate) type Snapshot = Arc<BTreeMap<NoteId, Rect>>;

/// On-disk shape of a single history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Frame width.
    pub width: i32,
    /// Frame height.
    pub height: i32,
}

impl From<Rect> for HistoryRecord {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl From<HistoryRecord> for Rect {
    fn from(r: HistoryRecord) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

/// Last known geometry per note, mirrored to a JSON file.
#[derive(Debug)]
pub struct PositionHistoryStore {
    /// Authoritative in-memory map.
    entries: BTreeMap<NoteId, Rect>,
    /// Durable sink; `None` keeps history for this session only.
    writer: Option<HistoryWriter>,
}

impl Default for PositionHistoryStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl PositionHistoryStore {
    /// History that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            entries: BTreeMap::new(),
            writer: None,
        }
    }

    /// Load history from `path` and keep it in sync with subsequent changes.
    pub fn open(path: impl Into<PathBuf>, flush: HistoryFlush) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        info!(path = %path.display(), entries = entries.len(), ?flush, "position history opened");
        let writer = match flush {
            HistoryFlush::Inline => HistoryWriter::inline(path),
            HistoryFlush::Background => HistoryWriter::background(path),
        };
        Self {
            entries,
            writer: Some(writer),
        }
    }

    /// Read the history file at `path`, degrading to an empty map on any problem.
    pub fn load(path: &Path) -> BTreeMap<NoteId, Rect> {
        match Self::read_file(path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable position history");
                BTreeMap::new()
            }
        }
    }

    /// Read the history file at `path`.
    ///
    /// A missing file is an empty history. Records that fail validation are
    /// skipped individually; only an unreadable or non-object file is an error.
    pub fn read_file(path: &Path) -> Result<BTreeMap<NoteId, Rect>> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no position history yet");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(Error::io(path, e)),
        };
        let raw: BTreeMap<String, Value> = serde_json::from_str(&text)?;
        let mut out = BTreeMap::new();
        for (key, value) in raw {
            match decode_record(&key, value) {
                Ok((id, rect)) => {
                    out.insert(id, rect);
                }
                Err(err) => warn!(error = %err, "skipping history record"),
            }
        }
        Ok(out)
    }

    /// Last recorded frame for `id`.
    pub fn get(&self, id: NoteId) -> Option<Rect> {
        self.entries.get(&id).copied()
    }

    /// Record `rect` for `id` and flush.
    ///
    /// A failed flush is logged; the in-memory record still wins for the rest
    /// of the session.
    pub fn put(&mut self, id: NoteId, rect: Rect) {
        if self.entries.get(&id) == Some(&rect) {
            return;
        }
        self.entries.insert(id, rect);
        debug!(%id, %rect, "history updated");
        self.submit(WriteOp::Store(self.snapshot()));
    }

    /// Forget a single note.
    pub fn remove(&mut self, id: NoteId) {
        if self.entries.remove(&id).is_some() {
            debug!(%id, "history entry removed");
            self.submit(WriteOp::Store(self.snapshot()));
        }
    }

    /// Forget everything, in memory and on disk.
    pub fn clear(&mut self) {
        self.entries.clear();
        info!("position history cleared");
        self.submit(WriteOp::Remove);
    }

    /// Write the current state synchronously (inline) or enqueue it (background).
    pub fn try_flush(&self) -> Result<()> {
        match &self.writer {
            Some(w) => w.submit(WriteOp::Store(self.snapshot())),
            None => Ok(()),
        }
    }

    /// Number of remembered notes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no note has a remembered frame.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remembered frames in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NoteId, Rect)> + '_ {
        self.entries.iter().map(|(id, r)| (*id, *r))
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.writer.as_ref().map(HistoryWriter::path)
    }

    /// Immutable copy of the current state.
    fn snapshot(&self) -> Snapshot {
        Arc::new(self.entries.clone())
    }

    /// Hand `op` to the writer, logging failures.
    fn submit(&self, op: WriteOp) {
        if let Some(w) = &self.writer
            && let Err(err) = w.submit(op)
        {
            warn!(path = %w.path().display(), error = %err, "position history not saved");
        }
    }
}

/// Serialize a snapshot to the on-disk JSON shape.
pub(crate) fn encode(entries: &BTreeMap<NoteId, Rect>) -> Result<String> {
    let doc: BTreeMap<String, HistoryRecord> = entries
        .iter()
        .map(|(id, r)| (id.to_string(), HistoryRecord::from(*r)))
        .collect();
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Validate one `key -> value` pair from the history file.
fn decode_record(key: &str, value: Value) -> Result<(NoteId, Rect)> {
    let id: NoteId = key.parse().map_err(|e| Error::InvalidRecord {
        key: key.to_string(),
        reason: format!("key is not a note id: {e}"),
    })?;
    let record: HistoryRecord = serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    let rect = Rect::from(record);
    if !rect.is_valid() {
        return Err(Error::InvalidRecord {
            key: key.to_string(),
            reason: format!("non-positive size {}", rect.size()),
        });
    }
    Ok((id, rect))
}
