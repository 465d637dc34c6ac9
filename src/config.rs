// src/config.rs
use crate::destination::{Destination, DestinationRecord};
use crate::error::ExportError;
use crate::types::CustomMediaMap;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// JSON file with custom media definitions, flat or under "custom-media"
    pub input: PathBuf,

    /// Destination file; repeat for several (format comes from the extension)
    #[arg(short = 'o', long = "to", required = true)]
    pub to: Vec<String>,

    /// Format override applied to every destination (css, js, json, mjs)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Log each destination as it is classified and written
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved export configuration.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub destinations: Vec<String>,
    pub kind: Option<String>,
    pub verbose: bool,
}

impl ExportConfig {
    /// Resolves a configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, ExportError> {
        let destinations: Vec<String> = cli
            .to
            .into_iter()
            .filter(|to| !to.trim().is_empty())
            .collect();

        if destinations.is_empty() {
            return Err(ExportError::MissingConfiguration(
                "at least one non-empty --to destination is required".to_string(),
            ));
        }

        Ok(ExportConfig {
            input: cli.input,
            destinations,
            kind: cli.kind.filter(|kind| !kind.is_empty()),
            verbose: cli.verbose,
        })
    }

    /// Destinations to hand to the exporter.
    pub fn destinations(&self) -> Vec<Destination> {
        self.destinations
            .iter()
            .map(|to| match &self.kind {
                Some(kind) => DestinationRecord::file(to).with_type(kind.clone()).into(),
                None => Destination::path(to),
            })
            .collect()
    }

    /// Reads the mapping named by `input`.
    pub async fn load_custom_media(&self) -> Result<CustomMediaMap, ExportError> {
        load_custom_media(&self.input).await
    }
}

/// Reads a custom media mapping from a JSON file.
pub async fn load_custom_media(path: &Path) -> Result<CustomMediaMap, ExportError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ExportError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

    parse_custom_media(&text).map_err(|source| ExportError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}

/// A mapping file: either flat `{ name: query }` or wrapped under
/// `custom-media` / `customMedia`, the shape the JSON export writes.
#[derive(Deserialize)]
#[serde(untagged)]
enum CustomMediaDocument {
    Wrapped(WrappedDocument),
    Flat(CustomMediaMap),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WrappedDocument {
    #[serde(rename = "custom-media", alias = "customMedia")]
    custom_media: CustomMediaMap,
}

/// Parses a mapping file's contents, keeping definition order.
pub fn parse_custom_media(text: &str) -> Result<CustomMediaMap, serde_json::Error> {
    let document: CustomMediaDocument = serde_json::from_str(text)?;
    Ok(match document {
        CustomMediaDocument::Wrapped(wrapped) => wrapped.custom_media,
        CustomMediaDocument::Flat(flat) => flat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(to: &[&str], kind: Option<&str>) -> CommandLineInput {
        CommandLineInput {
            input: PathBuf::from("media.json"),
            to: to.iter().map(|s| s.to_string()).collect(),
            kind: kind.map(str::to_string),
            verbose: false,
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        CommandLineInput::command().debug_assert();
    }

    #[test]
    fn parses_repeated_destinations() {
        let parsed = CommandLineInput::try_parse_from([
            "custom-media-export",
            "media.json",
            "--to",
            "dist/media.css",
            "-o",
            "dist/media.mjs",
            "--type",
            "css",
        ])
        .unwrap();

        assert_eq!(parsed.input, PathBuf::from("media.json"));
        assert_eq!(parsed.to, ["dist/media.css", "dist/media.mjs"]);
        assert_eq!(parsed.kind.as_deref(), Some("css"));
        assert!(!parsed.verbose);
    }

    #[test]
    fn verbose_help_describes_destination_logging() {
        use clap::CommandFactory;
        let command = CommandLineInput::command();
        let verbose = command
            .get_arguments()
            .find(|arg| arg.get_id() == "verbose")
            .unwrap();
        assert_eq!(
            verbose.get_help().map(|help| help.to_string()).as_deref(),
            Some("Log each destination as it is classified and written")
        );
    }

    #[test]
    fn missing_destination_is_rejected_by_the_parser() {
        assert!(CommandLineInput::try_parse_from(["custom-media-export", "media.json"]).is_err());
    }

    #[test]
    fn resolve_requires_a_destination() {
        let err = ExportConfig::resolve(cli(&["  "], None)).unwrap_err();
        assert!(matches!(err, ExportError::MissingConfiguration(_)));
    }

    #[test]
    fn type_override_becomes_a_record() {
        let config = ExportConfig::resolve(cli(&["out.txt"], Some("css"))).unwrap();
        let destinations = config.destinations();

        match &destinations[0] {
            Destination::Record(record) => {
                assert_eq!(record.lock().kind.as_deref(), Some("css"))
            }
            other => panic!("expected a record, got {:?}", other),
        }
    }

    #[test]
    fn plain_destinations_stay_paths() {
        let config = ExportConfig::resolve(cli(&["a.css", "b.json"], None)).unwrap();
        assert!(config
            .destinations()
            .iter()
            .all(|d| matches!(d, Destination::Path(_))));
    }

    #[test]
    fn parses_flat_mapping_in_order() {
        let map = parse_custom_media(r#"{"--z": "print", "--a": "(hover)"}"#).unwrap();
        assert_eq!(map.names().collect::<Vec<_>>(), ["--z", "--a"]);
    }

    #[test]
    fn parses_wrapped_mapping_in_order() {
        let text = r#"{"custom-media": {"--z": "print", "--a": "(hover)"}}"#;
        let map = parse_custom_media(text).unwrap();
        assert_eq!(map.names().collect::<Vec<_>>(), ["--z", "--a"]);

        let camel = parse_custom_media(r#"{"customMedia": {"--m": "screen"}}"#).unwrap();
        assert_eq!(camel.get("--m"), Some("screen"));
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(parse_custom_media("[1, 2]").is_err());
    }
}
