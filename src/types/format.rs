// src/types/format.rs
//! Output formats and in-memory target slots.

use crate::constants::{CUSTOM_MEDIA_CAMEL, CUSTOM_MEDIA_KEBAB};
use std::fmt;

/// A file format the dispatcher knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `@custom-media` at-rules
    Css,
    /// `module.exports = { customMedia: { ... } }`
    CommonJs,
    /// `{ "custom-media": { ... } }`
    Json,
    /// `export const customMedia = { ... }`
    EsModule,
}

impl ExportFormat {
    /// Resolves a destination type, case-insensitively.
    ///
    /// Returns `None` for anything unrecognised, including the empty type of
    /// a path with no extension.
    pub fn from_type(kind: &str) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "css" => Some(Self::Css),
            "js" => Some(Self::CommonJs),
            "json" => Some(Self::Json),
            "mjs" => Some(Self::EsModule),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::CommonJs => "js",
            Self::Json => "json",
            Self::EsModule => "mjs",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which slot of an in-memory record receives the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaField {
    /// `customMedia`
    Camel,
    /// `custom-media`
    Kebab,
}

impl MediaField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camel => CUSTOM_MEDIA_CAMEL,
            Self::Kebab => CUSTOM_MEDIA_KEBAB,
        }
    }
}

impl fmt::Display for MediaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
