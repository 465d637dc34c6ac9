// src/destination/mod.rs
//! Where exported custom media goes.
//!
//! A [`Destination`] is whatever the caller handed in: a callback, a bare
//! path, or a record of options. [`normalize`] classifies it once into a
//! [`NormalizedDestination`] so the exporter never re-inspects raw input.

mod normalize;

pub use normalize::{normalize, NormalizedDestination};

use crate::error::BoxError;
use crate::types::{CustomMediaJson, MediaField, Transform};
use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Receives the transformed mapping when a destination is a callback.
#[async_trait::async_trait]
pub trait ExportCallback: Send + Sync {
    async fn receive(&self, custom_media: CustomMediaJson) -> Result<(), BoxError>;
}

/// Adapts an async closure into an [`ExportCallback`].
struct FnCallback<F>(F);

#[async_trait::async_trait]
impl<F, Fut, E> ExportCallback for FnCallback<F>
where
    F: Fn(CustomMediaJson) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Into<BoxError> + 'static,
{
    async fn receive(&self, custom_media: CustomMediaJson) -> Result<(), BoxError> {
        (self.0)(custom_media).await.map_err(Into::into)
    }
}

/// A record the caller keeps a handle to. Object targets are written in
/// place through it.
pub type SharedRecord = Arc<Mutex<DestinationRecord>>;

/// Options for a single destination.
///
/// A slot set to `Some` means the record carries that field, which makes it
/// an object target; the exporter replaces the slot's contents.
#[derive(Debug, Clone, Default)]
pub struct DestinationRecord {
    /// Output path (`to`)
    pub to: Option<PathBuf>,
    /// Explicit format override (`type`)
    pub kind: Option<String>,
    /// Custom transform (`toJSON`)
    pub to_json: Option<Transform>,
    /// `customMedia` slot
    pub custom_media: Option<CustomMediaJson>,
    /// `custom-media` slot
    pub custom_media_kebab: Option<CustomMediaJson>,
}

impl DestinationRecord {
    /// A file destination. The path is coerced to a string.
    pub fn file(to: impl fmt::Display) -> Self {
        Self::at(to.to_string())
    }

    /// A file destination at `path`, kept byte for byte.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            to: Some(path.into()),
            ..Self::default()
        }
    }

    /// An in-memory destination with an empty slot ready to receive data.
    pub fn object(field: MediaField) -> Self {
        let mut record = Self::default();
        *record.slot_mut(field) = Some(CustomMediaJson::new());
        record
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_to_json(mut self, transform: Transform) -> Self {
        self.to_json = Some(transform);
        self
    }

    pub fn slot(&self, field: MediaField) -> Option<&CustomMediaJson> {
        match field {
            MediaField::Camel => self.custom_media.as_ref(),
            MediaField::Kebab => self.custom_media_kebab.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, field: MediaField) -> &mut Option<CustomMediaJson> {
        match field {
            MediaField::Camel => &mut self.custom_media,
            MediaField::Kebab => &mut self.custom_media_kebab,
        }
    }

    /// Wraps the record so the caller can keep a handle to it.
    pub fn into_shared(self) -> SharedRecord {
        Arc::new(Mutex::new(self))
    }
}

/// One raw destination entry as supplied by the caller.
#[derive(Clone)]
pub enum Destination {
    Callback(Arc<dyn ExportCallback>),
    Path(PathBuf),
    Record(SharedRecord),
}

impl Destination {
    /// A callback destination from an async closure.
    pub fn callback<F, Fut, E>(f: F) -> Self
    where
        F: Fn(CustomMediaJson) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        Self::Callback(Arc::new(FnCallback(f)))
    }

    /// A bare path, coerced to a string.
    pub fn path(to: impl fmt::Display) -> Self {
        Self::Path(PathBuf::from(to.to_string()))
    }

    /// A destination backed by a record the caller also holds.
    pub fn shared(record: &SharedRecord) -> Self {
        Self::Record(Arc::clone(record))
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&*record.lock()).finish(),
        }
    }
}

impl From<&str> for Destination {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<String> for Destination {
    fn from(path: String) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Destination {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Destination {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<DestinationRecord> for Destination {
    fn from(record: DestinationRecord) -> Self {
        Self::Record(record.into_shared())
    }
}

impl From<SharedRecord> for Destination {
    fn from(record: SharedRecord) -> Self {
        Self::Record(record)
    }
}
