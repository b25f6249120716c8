//! Finding sinks
//!
//! Best-effort external reporting of findings. The engine signals a header
//! before the first finding and a footer after the last; a failing
//! `on_finding` is logged and skipped by the engine, and never removes the
//! finding from the authoritative in-memory result.

use std::io::Write;

use crate::error::SinkError;
use crate::validator::Finding;

/// External consumer of findings, decoupled from the returned result list.
pub trait FindingSink {
    /// Called once before the first finding of a run.
    fn on_header(&mut self) {}

    /// Deliver one finding. May fail; the engine treats failure as non-fatal.
    fn on_finding(&mut self, finding: &Finding) -> Result<(), SinkError>;

    /// Called once after the last finding of a run.
    fn on_footer(&mut self) {}
}

/// Sink that swallows everything, for headless or embedded use and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl FindingSink for NullSink {
    fn on_finding(&mut self, _finding: &Finding) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Writes one `file:line: Validator: message` row per finding.
#[derive(Debug)]
pub struct PlainTextSink<W: Write> {
    out: W,
}

impl<W: Write> PlainTextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FindingSink for PlainTextSink<W> {
    fn on_finding(&mut self, finding: &Finding) -> Result<(), SinkError> {
        writeln!(self.out, "{finding}")?;
        Ok(())
    }

    fn on_footer(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("failed to flush plain text sink: {e}");
        }
    }
}

/// Writes one JSON object per line per finding.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FindingSink for JsonSink<W> {
    fn on_finding(&mut self, finding: &Finding) -> Result<(), SinkError> {
        let json = serde_json::to_string(finding).map_err(|e| SinkError::Other(e.to_string()))?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    fn on_footer(&mut self) {
        if let Err(e) = self.out.flush() {
            log::warn!("failed to flush JSON sink: {e}");
        }
    }
}
