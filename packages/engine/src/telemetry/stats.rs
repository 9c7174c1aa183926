//! Per-scan statistics

use std::time::{Duration, Instant};

/// Counters collected during one scan
#[derive(Debug, Clone)]
pub struct ScanStats {
    /// Tokens pulled from the tokenizer
    pub events: u64,
    /// Element-open tokens seen
    pub elements_opened: u64,
    /// Deepest nesting reached
    pub max_depth: usize,
    /// Patterns that received a value
    pub matches: u64,
    /// Subtrees captured (one capture may satisfy several patterns)
    pub captures: u64,
    /// Whether the scan stopped before the end of the document
    pub stopped_early: bool,
    /// Input bytes consumed
    pub bytes_read: u64,
    started: Instant,
    elapsed: Option<Duration>,
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: 0,
            elements_opened: 0,
            max_depth: 0,
            matches: 0,
            captures: 0,
            stopped_early: false,
            bytes_read: 0,
            started: Instant::now(),
            elapsed: None,
        }
    }

    #[inline]
    pub(crate) fn record_event(&mut self) {
        self.events += 1;
    }

    #[inline]
    pub(crate) fn record_open(&mut self, depth: usize) {
        self.elements_opened += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub(crate) fn record_capture(&mut self, patterns: usize) {
        self.captures += 1;
        self.matches += patterns as u64;
    }

    #[inline]
    pub(crate) fn record_attribute(&mut self) {
        self.matches += 1;
    }

    pub(crate) fn finish(&mut self, bytes_read: u64, stopped_early: bool) {
        self.bytes_read = bytes_read;
        self.stopped_early = stopped_early;
        self.elapsed = Some(self.started.elapsed());
    }

    /// Wall time of the scan, or time since it started if still running
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }
}
