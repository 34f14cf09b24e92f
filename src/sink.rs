//! Output sink abstractions and implementations.
//!
//! This module defines the [`ExportSink`] trait and provides implementations:
//! - [`FileSink`]: writes the document to a file, one row per line
//! - [`MemorySink`]: captures rows in memory for assertions
//!
//! A sink persists the whole document or fails; no partial cleanup is
//! attempted on failure.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};
use crate::export::ExportDocument;

/// Destination for a finished export document.
pub trait ExportSink {
    /// Persist the document, one row per line.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Sink`] if the document cannot be persisted.
    fn write_document(&mut self, document: &ExportDocument) -> Result<()>;
}

/// Sink that writes the document to a file.
///
/// The file is created (or truncated) when the document is written and
/// flushed before returning.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink targeting the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for FileSink {
    fn write_document(&mut self, document: &ExportDocument) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|e| {
            ExportError::sink(
                format!("Failed to create export file: {}", self.path.display()),
                Some(e),
            )
        })?;
        for row in document.rows() {
            writeln!(file, "{row}").map_err(|e| {
                ExportError::sink(
                    format!("Failed to write export file: {}", self.path.display()),
                    Some(e),
                )
            })?;
        }
        file.flush().map_err(|e| {
            ExportError::sink(
                format!("Failed to flush export file: {}", self.path.display()),
                Some(e),
            )
        })
    }
}

/// In-memory sink for testing.
///
/// Collects the written rows so tests can assert on the exact output.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    rows: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rows written so far, in order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Drop all captured rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl ExportSink for MemorySink {
    fn write_document(&mut self, document: &ExportDocument) -> Result<()> {
        self.rows.extend(document.rows().iter().cloned());
        Ok(())
    }
}
