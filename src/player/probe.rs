//! One-shot track duration probe.
//!
//! Reading metadata can touch slow storage, so the probe runs on its own
//! thread and delivers the result over an mpsc channel; the controller
//! polls for it from `tick`.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use lofty::file::AudioFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not read audio metadata from {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },
}

pub struct DurationProbe {
    rx: Receiver<Result<Duration, ProbeError>>,
}

impl DurationProbe {
    /// Start probing `path` on a worker thread.
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = lofty::read_from_path(&path)
                .map(|tagged| tagged.properties().duration())
                .map_err(|source| ProbeError::Unreadable { path, source });
            let _ = tx.send(result);
        });
        Self { rx }
    }

    /// The probe outcome, once available.
    pub fn try_result(&self) -> Option<Result<Duration, ProbeError>> {
        self.rx.try_recv().ok()
    }
}
