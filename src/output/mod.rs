// src/output/mod.rs
//! Output handling with rendering kept apart from writing.
//!
//! Renderers are pure functions from the transformed mapping to file
//! contents; the writer is the only part that performs I/O.

mod escape;
mod formats;
mod types;
mod writer;

pub use escape::escape_for_js;
pub use formats::{render, render_commonjs, render_css, render_esmodule, render_json};
pub use types::{Delivery, ExportReport, ExportStats};
pub use writer::{deliver_file, write_file};
