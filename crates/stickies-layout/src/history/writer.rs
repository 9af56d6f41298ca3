//! Durable writes of position history snapshots.
//!
//! Every mutation of the history hands a complete, immutable snapshot to the
//! writer. Inline writers persist it immediately on the calling thread; the
//! background writer forwards it to a dedicated thread which keeps only the
//! newest queued snapshot. Neither reads the file back, so there is no
//! read-modify-write window.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    thread::{self, JoinHandle},
};

use crossbeam_channel::{Sender, unbounded};
use tracing::{debug, warn};

use super::{Snapshot, encode};
use crate::{Error, Result};

/// Work item for the writer.
#[derive(Debug, Clone)]
pub(crate) enum WriteOp {
    /// Replace the file contents with this snapshot.
    Store(Snapshot),
    /// Delete the file.
    Remove,
}

/// Strategy for moving snapshots to disk.
#[derive(Debug)]
pub(crate) enum HistoryWriter {
    /// Synchronous writes on the caller's thread.
    Inline {
        /// History file.
        path: PathBuf,
    },
    /// Fire-and-forget writes on a dedicated thread.
    Background {
        /// History file.
        path: PathBuf,
        /// Queue feeding the writer thread; `None` once shut down.
        tx: Option<Sender<WriteOp>>,
        /// Writer thread handle, joined on drop.
        handle: Option<JoinHandle<()>>,
    },
}

impl HistoryWriter {
    /// Writer that persists on the calling thread.
    pub(crate) fn inline(path: PathBuf) -> Self {
        Self::Inline { path }
    }

    /// Writer backed by a dedicated thread.
    ///
    /// Falls back to inline writes if the thread cannot be spawned.
    pub(crate) fn background(path: PathBuf) -> Self {
        let (tx, rx) = unbounded::<WriteOp>();
        let thread_path = path.clone();
        let spawned = thread::Builder::new()
            .name("stickies-history".into())
            .spawn(move || {
                while let Ok(first) = rx.recv() {
                    // Only the newest queued state matters.
                    let latest = rx.try_iter().last().unwrap_or(first);
                    if let Err(err) = apply(&thread_path, &latest) {
                        warn!(error = %err, "history write failed");
                    }
                }
                debug!(path = %thread_path.display(), "history writer stopped");
            });
        match spawned {
            Ok(handle) => Self::Background {
                path,
                tx: Some(tx),
                handle: Some(handle),
            },
            Err(err) => {
                warn!(error = %err, "could not spawn history writer; writing inline");
                Self::Inline { path }
            }
        }
    }

    /// Path of the history file.
    pub(crate) fn path(&self) -> &Path {
        match self {
            Self::Inline { path } | Self::Background { path, .. } => path,
        }
    }

    /// Persist `op`; background writers only report a closed queue.
    pub(crate) fn submit(&self, op: WriteOp) -> Result<()> {
        match self {
            Self::Inline { path } => apply(path, &op),
            Self::Background { tx, .. } => tx
                .as_ref()
                .ok_or(Error::WriterClosed)?
                .send(op)
                .map_err(|_| Error::WriterClosed),
        }
    }
}

impl Drop for HistoryWriter {
    fn drop(&mut self) {
        if let Self::Background { tx, handle, .. } = self {
            // Closing the queue lets the thread drain and exit.
            drop(tx.take());
            if let Some(h) = handle.take()
                && h.join().is_err()
            {
                warn!("history writer thread panicked");
            }
        }
    }
}

/// Carry out a single write operation against `path`.
fn apply(path: &Path, op: &WriteOp) -> Result<()> {
    match op {
        WriteOp::Store(snapshot) => write_atomic(path, &encode(snapshot)?),
        WriteOp::Remove => match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(path, e)),
        },
    }
}

/// Write `contents` next to `path` and rename it into place.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).map_err(|e| Error::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "history flushed");
    Ok(())
}
