// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict log implementation.

use crate::verdict::{CheckMode, VerdictEntry, VerdictOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// JSONL destination. Keeps the first write failure and stops writing after it.
struct JsonlSink {
    writer: BufWriter<File>,
    error: Option<io::Error>,
}

impl JsonlSink {
    fn write(&mut self, entry: &VerdictEntry) {
        if self.error.is_none() {
            self.error = self.append(entry).err();
        }
    }

    fn append(&mut self, entry: &VerdictEntry) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, entry)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Shared log of per-report verdicts
///
/// Entries are append-only, so `seq` always equals the entry's position and
/// matches the line it was written to in the JSONL file.
pub struct VerdictLog {
    start: Instant,
    entries: Arc<Mutex<Vec<VerdictEntry>>>,
    sink: Option<Arc<Mutex<JsonlSink>>>,
}

impl VerdictLog {
    /// Create a new in-memory verdict log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            entries: Arc::new(Mutex::new(Vec::new())),
            sink: None,
        }
    }

    /// Create a verdict log that also writes each entry to `path` as JSONL
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            sink: Some(Arc::new(Mutex::new(JsonlSink {
                writer: BufWriter::new(file),
                error: None,
            }))),
            ..Self::new()
        })
    }

    /// Record the verdict for one report.
    ///
    /// File write failures are held until [`VerdictLog::finish`].
    pub fn record(
        &self,
        mode: CheckMode,
        line: usize,
        levels: &[i64],
        outcome: VerdictOutcome,
    ) {
        let mut entries = self.entries.lock();
        let entry = VerdictEntry {
            seq: entries.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            mode,
            line,
            levels: levels.to_vec(),
            outcome,
        };

        if let Some(ref sink) = self.sink {
            sink.lock().write(&entry);
        }

        entries.push(entry);
    }

    /// Flush the JSONL file and report the first write failure, if any.
    ///
    /// Always `Ok` for an in-memory log. The error is handed out once.
    pub fn finish(&self) -> io::Result<()> {
        let Some(ref sink) = self.sink else {
            return Ok(());
        };
        let mut sink = sink.lock();
        if let Some(e) = sink.error.take() {
            return Err(e);
        }
        sink.writer.flush()
    }

    /// All recorded entries, in recording order
    pub fn entries(&self) -> Vec<VerdictEntry> {
        self.entries.lock().clone()
    }

    /// Entries produced by one mode
    pub fn for_mode(&self, mode: CheckMode) -> Vec<VerdictEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.mode == mode)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for VerdictLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for VerdictLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            entries: Arc::clone(&self.entries),
            sink: self.sink.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
