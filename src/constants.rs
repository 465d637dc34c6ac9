// src/constants.rs
//! Names and layout constants shared by the serializers and the normalizer.
//!
//! Reading these tells you what the generated files look like: which keys
//! wrap the data, how deep the module output is indented, and which file
//! extensions are recognised at all.

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Key wrapping the mapping in JSON output, and the kebab-case object slot.
pub const CUSTOM_MEDIA_KEBAB: &str = "custom-media";

/// Exported identifier in module output, and the camel-case object slot.
pub const CUSTOM_MEDIA_CAMEL: &str = "customMedia";

// ---------------------------------------------------------------------------
// Output layout
// ---------------------------------------------------------------------------

/// CSS at-rule prefix for every exported definition.
pub const CUSTOM_MEDIA_AT_RULE: &str = "@custom-media";

/// Indentation used by the JSON serializer.
pub const JSON_INDENT: &[u8] = b"  ";

/// One indentation step in generated module source.
pub const MODULE_INDENT: &str = "\t";

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// Every destination type the dispatcher writes. Anything else is skipped.
pub const RECOGNISED_TYPES: &[&str] = &["css", "js", "json", "mjs"];

/// Estimated bytes per exported definition, used to pre-size output buffers.
///
/// A performance hint only.
pub const BYTES_PER_ENTRY_ESTIMATE: usize = 48;
