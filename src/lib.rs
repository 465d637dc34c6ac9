// src/lib.rs
//! custom-media-export library — writes named `@custom-media` definitions to
//! CSS, JSON, CommonJS and ES module files, callbacks, or in-memory records.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `ExportError`, `BoxError`
//! - **Configuration** — `ExportConfig`, `CommandLineInput`, mapping loaders
//! - **Domain types** — `CustomMediaMap`, `CustomMediaJson`, `Transform`, `ExportFormat`
//! - **Destinations** — `Destination`, `DestinationRecord`, `ExportCallback`, `normalize`
//! - **Output** — per-format renderers, `escape_for_js`, `ExportReport`
//! - **Export** — `export_custom_media`

mod config;
mod constants;
mod destination;
mod error;
mod exporter;
mod output;
mod types;

// --- Error Handling ---
pub use crate::error::{BoxError, ExportError, Result};

// --- Configuration ---
pub use crate::config::{load_custom_media, parse_custom_media, CommandLineInput, ExportConfig};

// --- Domain Types ---
pub use crate::types::{
    default_transform, stringify_value, CustomMediaJson, CustomMediaMap, ExportFormat, MediaField,
    Transform,
};

// --- Destinations ---
pub use crate::destination::{
    normalize, Destination, DestinationRecord, ExportCallback, NormalizedDestination, SharedRecord,
};

// --- Output ---
pub use crate::output::{
    deliver_file, escape_for_js, render, render_commonjs, render_css, render_esmodule,
    render_json, write_file, Delivery, ExportReport, ExportStats,
};

// --- Export ---
pub use crate::exporter::export_custom_media;
