// src/output/writer.rs
//! Writes rendered custom media to files.
//!
//! This is the only place file I/O happens.

use super::formats::render;
use super::types::Delivery;
use crate::constants::RECOGNISED_TYPES;
use crate::error::ExportError;
use crate::types::{CustomMediaJson, ExportFormat};
use std::path::Path;

/// Routes a file destination to its serializer by type.
///
/// Unrecognised types, including the empty type, are skipped without error.
pub async fn deliver_file(
    path: &Path,
    kind: &str,
    custom_media: &CustomMediaJson,
) -> Result<Delivery, ExportError> {
    let Some(format) = ExportFormat::from_type(kind) else {
        log::debug!(
            "Skipping {}: type '{}' is not one of {}",
            path.display(),
            kind,
            RECOGNISED_TYPES.join(", ")
        );
        return Ok(Delivery::Skipped {
            path: path.to_path_buf(),
            kind: kind.to_string(),
        });
    };

    let contents = render(format, custom_media)?;
    let bytes_written = write_file(path, &contents).await?;

    Ok(Delivery::File {
        path: path.to_path_buf(),
        format,
        bytes_written,
    })
}

/// Overwrites `path` with `contents`. Missing parent directories are an
/// error, not created.
pub async fn write_file(path: &Path, contents: &str) -> Result<usize, ExportError> {
    log::debug!("Writing {} bytes to {}", contents.len(), path.display());

    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Wrote file: {}", path.display());
    Ok(contents.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CustomMediaJson {
        let mut map = CustomMediaJson::new();
        map.insert("--mq".into(), json!("(hover)"));
        map
    }

    #[tokio::test]
    async fn writes_recognised_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.txt");

        let delivery = deliver_file(&path, "css", &sample()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "@custom-media --mq (hover);\n"
        );
        assert!(matches!(
            delivery,
            Delivery::File { format: ExportFormat::Css, bytes_written: 28, .. }
        ));
    }

    #[tokio::test]
    async fn overwrites_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.css");
        std::fs::write(&path, "stale content that is much longer than the export\n").unwrap();

        deliver_file(&path, "css", &sample()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "@custom-media --mq (hover);\n"
        );
    }

    #[tokio::test]
    async fn unknown_types_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.scss");

        let delivery = deliver_file(&path, "scss", &sample()).await.unwrap();

        assert!(matches!(delivery, Delivery::Skipped { .. }));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn missing_directory_is_a_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("media.json");

        let err = deliver_file(&path, "json", &sample()).await.unwrap_err();

        assert!(matches!(err, ExportError::Write { .. }));
    }
}
