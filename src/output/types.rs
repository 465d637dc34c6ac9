// src/output/types.rs
//! Type definitions describing what an export batch did.

use crate::types::{ExportFormat, MediaField};
use std::path::PathBuf;

/// What one destination did with the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// File written in full
    File {
        path: PathBuf,
        format: ExportFormat,
        bytes_written: usize,
    },
    /// Record slot replaced in place
    Object { field: MediaField, entries: usize },
    /// Callback invoked and completed
    Callback { entries: usize },
    /// Unrecognised type; nothing written
    Skipped { path: PathBuf, kind: String },
}

/// Result of a successful export batch, in destination order.
///
/// There is no failed list: a batch either succeeds as a whole or yields
/// the first error.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub deliveries: Vec<Delivery>,
    pub stats: ExportStats,
}

impl ExportReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a completed delivery to the report.
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        match &delivery {
            Delivery::File { bytes_written, .. } => {
                self.stats.files_written += 1;
                self.stats.bytes_written += bytes_written;
            }
            Delivery::Object { .. } => self.stats.objects_updated += 1,
            Delivery::Callback { .. } => self.stats.callbacks_invoked += 1,
            Delivery::Skipped { .. } => self.stats.skipped += 1,
        }
        self.deliveries.push(delivery);
        self
    }

    /// Paths of every file written.
    pub fn written_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.deliveries.iter().filter_map(|delivery| match delivery {
            Delivery::File { path, .. } => Some(path),
            _ => None,
        })
    }
}

/// Execution statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub files_written: usize,
    pub objects_updated: usize,
    pub callbacks_invoked: usize,
    pub skipped: usize,
    pub bytes_written: usize,
    pub total_duration_ms: u64,
}
