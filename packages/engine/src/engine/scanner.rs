//! The single-pass scan loop

use std::io::BufRead;

use super::patterns::PatternSet;
use super::results::Extraction;
use crate::config::ExtractorConfig;
use crate::error::SiftResult;
use crate::expression::{PathExpression, QualifiedName};
use crate::serializer::{Capture, ExtractedValue, Representation};
use crate::telemetry::ScanStats;
use crate::tokenizer::{ElementStart, XmlEvent, XmlTokenizer};
use crate::tree::TreeBuilder;

/// An open capture and the patterns waiting on it
struct ActiveCapture {
    patterns: Vec<PathExpression>,
    capture: Capture,
}

/// State of one scan; created per input and consumed by [`Scanner::run`]
pub(crate) struct Scanner<'a, R> {
    tokenizer: XmlTokenizer<R>,
    config: &'a ExtractorConfig,
    representation: Representation,
    tree_builder: &'a dyn TreeBuilder,
    stack: Vec<QualifiedName>,
    pending: Vec<PathExpression>,
    active: Vec<ActiveCapture>,
    results: Extraction,
    stats: ScanStats,
}

impl<'a, R: BufRead> Scanner<'a, R> {
    pub(crate) fn new(
        reader: R,
        patterns: &PatternSet,
        representation: Representation,
        config: &'a ExtractorConfig,
        tree_builder: &'a dyn TreeBuilder,
    ) -> Self {
        Self {
            tokenizer: XmlTokenizer::with_config(reader, config),
            config,
            representation,
            tree_builder,
            stack: Vec::new(),
            pending: patterns.iter().cloned().collect(),
            active: Vec::new(),
            results: Extraction::new(),
            stats: ScanStats::new(),
        }
    }

    /// Drive the tokenizer until every pattern is answered or the document ends
    ///
    /// # Errors
    /// Any stream error aborts the scan and discards partial results.
    pub(crate) fn run(mut self) -> SiftResult<(Extraction, ScanStats)> {
        tracing::debug!(
            target: "xmlsift::engine",
            patterns = self.pending.len(),
            representation = %self.representation,
            "scan started"
        );

        let stopped_early = loop {
            let event = self.tokenizer.next_event()?;
            self.stats.record_event();

            if !self.active.is_empty() {
                self.feed_captures(&event)?;
            }

            match &event {
                XmlEvent::StartElement(start) => {
                    self.stack.push(start.name.clone());
                    self.stats.record_open(self.stack.len());
                    if !self.pending.is_empty() {
                        self.match_pending(start)?;
                    }
                }
                XmlEvent::EndElement(_) => {
                    self.stack.pop();
                }
                XmlEvent::EndDocument => break false,
                XmlEvent::StartDocument | XmlEvent::Characters(_) | XmlEvent::CData(_) => {}
            }

            if self.config.stop_when_satisfied && self.pending.is_empty() && self.active.is_empty()
            {
                tracing::debug!(
                    target: "xmlsift::engine",
                    depth = self.stack.len(),
                    "all patterns satisfied, stopping early"
                );
                break true;
            }
        };

        let bytes_read = self.tokenizer.position();
        self.stats.finish(bytes_read, stopped_early);
        tracing::debug!(
            target: "xmlsift::engine",
            events = self.stats.events,
            matches = self.stats.matches,
            captures = self.stats.captures,
            max_depth = self.stats.max_depth,
            bytes_read = self.stats.bytes_read,
            stopped_early = self.stats.stopped_early,
            "scan finished"
        );
        Ok((self.results, self.stats))
    }

    /// Test every unanswered pattern against the ancestor stack
    fn match_pending(&mut self, start: &ElementStart) -> SiftResult<()> {
        let stack = &self.stack;
        let results = &mut self.results;
        let stats = &mut self.stats;
        let mut captured = Vec::new();

        self.pending.retain(|pattern| {
            let hit = if pattern.is_root() {
                stack.len() == 1
            } else {
                pattern.matches_path(stack)
            };
            if !hit {
                return true;
            }

            match pattern.attribute() {
                // Attribute patterns are answered on the element-open token
                Some(attribute) => match start.attribute(attribute) {
                    Some(value) => {
                        tracing::debug!(
                            target: "xmlsift::engine",
                            pattern = %pattern,
                            "attribute matched"
                        );
                        results.record(pattern.clone(), ExtractedValue::Text(value.to_string()));
                        stats.record_attribute();
                        false
                    }
                    None => true,
                },
                None => {
                    captured.push(pattern.clone());
                    false
                }
            }
        });

        if captured.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            target: "xmlsift::engine",
            element = %start.name,
            depth = self.stack.len(),
            patterns = captured.len(),
            "capture opened"
        );
        self.stats.record_capture(captured.len());
        let capture = Capture::begin(start, self.representation, self.config.skip_whitespace_text)?;
        self.active.push(ActiveCapture {
            patterns: captured,
            capture,
        });
        Ok(())
    }

    /// Forward one token to every open capture and finish the ones it closes
    fn feed_captures(&mut self, event: &XmlEvent) -> SiftResult<()> {
        let mut index = 0;
        while index < self.active.len() {
            if !self.active[index].capture.feed(event)? {
                index += 1;
                continue;
            }

            let ActiveCapture { patterns, capture } = self.active.remove(index);
            let value = capture.finish(self.tree_builder, self.config)?;
            for pattern in patterns {
                tracing::debug!(
                    target: "xmlsift::engine",
                    pattern = %pattern,
                    "pattern satisfied"
                );
                self.results.record(pattern, value.clone());
            }
        }
        Ok(())
    }
}
