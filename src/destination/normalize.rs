// src/destination/normalize.rs
//! Classifies raw destinations into callback, object, or file targets.
//!
//! Normalization never fails. Anything odd about a destination shows up
//! later as a write failure or as a skipped, unrecognised format.

use super::{Destination, DestinationRecord, ExportCallback, SharedRecord};
use crate::types::{CustomMediaJson, CustomMediaMap, ExportFormat, MediaField, Transform};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A destination after classification.
#[derive(Clone)]
pub enum NormalizedDestination {
    /// Invoked with the default-transformed mapping.
    Callback {
        callback: Arc<dyn ExportCallback>,
        transform: Transform,
    },
    /// Written in place into one slot of a shared record.
    Object {
        record: SharedRecord,
        field: MediaField,
        transform: Transform,
    },
    /// Serialized to a file according to `kind`.
    File {
        path: PathBuf,
        kind: String,
        transform: Transform,
    },
}

impl NormalizedDestination {
    pub fn transform(&self) -> &Transform {
        match self {
            Self::Callback { transform, .. }
            | Self::Object { transform, .. }
            | Self::File { transform, .. } => transform,
        }
    }

    /// The transformed mapping this destination receives.
    pub fn render(&self, custom_media: &CustomMediaMap) -> CustomMediaJson {
        self.transform().apply(custom_media)
    }

    /// The recognised file format, if this is a file target with one.
    pub fn format(&self) -> Option<ExportFormat> {
        match self {
            Self::File { kind, .. } => ExportFormat::from_type(kind),
            _ => None,
        }
    }
}

impl std::fmt::Debug for NormalizedDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callback { .. } => f.write_str("Callback"),
            Self::Object { field, .. } => f.debug_struct("Object").field("field", field).finish(),
            Self::File { path, kind, .. } => f
                .debug_struct("File")
                .field("path", path)
                .field("kind", kind)
                .finish(),
        }
    }
}

/// Classifies one raw destination.
///
/// Records are checked for a `customMedia` slot first, then `custom-media`;
/// anything else is a file whose type comes from `kind` or, failing that,
/// from the path's extension.
pub fn normalize(destination: Destination) -> NormalizedDestination {
    match destination {
        Destination::Callback(callback) => NormalizedDestination::Callback {
            callback,
            transform: Transform::default(),
        },
        Destination::Path(to) => classify_file(&DestinationRecord::at(to)),
        Destination::Record(record) => classify_record(record),
    }
}

fn classify_record(shared: SharedRecord) -> NormalizedDestination {
    let field = {
        let record = shared.lock();
        if record.custom_media.is_some() {
            Some(MediaField::Camel)
        } else if record.custom_media_kebab.is_some() {
            Some(MediaField::Kebab)
        } else {
            None
        }
    };

    match field {
        Some(field) => {
            let transform = resolve_transform(&shared.lock());
            NormalizedDestination::Object {
                record: shared,
                field,
                transform,
            }
        }
        None => classify_file(&shared.lock()),
    }
}

fn classify_file(record: &DestinationRecord) -> NormalizedDestination {
    let path = record.to.clone().unwrap_or_default();
    let kind = match record.kind.as_deref() {
        Some(kind) if !kind.is_empty() => kind.to_lowercase(),
        _ => extension_of(&path),
    };

    NormalizedDestination::File {
        path,
        kind,
        transform: resolve_transform(record),
    }
}

fn resolve_transform(record: &DestinationRecord) -> Transform {
    record.to_json.clone().unwrap_or_default()
}

/// Lowercased characters after the last `.` of the file name, or empty.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
