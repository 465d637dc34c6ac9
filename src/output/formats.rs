// src/output/formats.rs
//! Pure renderers, one per export format.
//!
//! Every renderer produces the complete file contents, ending in exactly one
//! newline. Nothing here touches the filesystem.

use super::escape::escape_for_js;
use crate::constants::{
    BYTES_PER_ENTRY_ESTIMATE, CUSTOM_MEDIA_AT_RULE, CUSTOM_MEDIA_CAMEL, JSON_INDENT, MODULE_INDENT,
};
use crate::error::ExportError;
use crate::types::{integral_numbers, stringify_value, CustomMediaJson, ExportFormat};
use serde::Serialize;

/// Renders the mapping in the given format.
pub fn render(format: ExportFormat, custom_media: &CustomMediaJson) -> Result<String, ExportError> {
    match format {
        ExportFormat::Css => Ok(render_css(custom_media)),
        ExportFormat::CommonJs => Ok(render_commonjs(custom_media)),
        ExportFormat::Json => render_json(custom_media),
        ExportFormat::EsModule => Ok(render_esmodule(custom_media)),
    }
}

/// One `@custom-media <name> <value>;` line per entry. Nothing is escaped.
pub fn render_css(custom_media: &CustomMediaJson) -> String {
    let lines: Vec<String> = custom_media
        .iter()
        .map(|(name, value)| {
            format!(
                "{} {} {};",
                CUSTOM_MEDIA_AT_RULE,
                name,
                stringify_value(value)
            )
        })
        .collect();

    format!("{}\n", lines.join("\n"))
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(rename = "custom-media")]
    custom_media: &'a CustomMediaJson,
}

/// `{ "custom-media": { ... } }` with two-space indentation.
pub fn render_json(custom_media: &CustomMediaJson) -> Result<String, ExportError> {
    let mut buffer = Vec::with_capacity(custom_media.len() * BYTES_PER_ENTRY_ESTIMATE);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    let custom_media: CustomMediaJson = custom_media
        .iter()
        .map(|(name, value)| (name.clone(), integral_numbers(value)))
        .collect();

    JsonDocument {
        custom_media: &custom_media,
    }
    .serialize(&mut serializer)?;
    buffer.push(b'\n');

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// `module.exports = { customMedia: { ... } };`
pub fn render_commonjs(custom_media: &CustomMediaJson) -> String {
    let properties = module_properties(custom_media, 2);
    format!(
        "module.exports = {{\n{indent}{name}: {{\n{properties}\n{indent}}}\n}};\n",
        indent = MODULE_INDENT,
        name = CUSTOM_MEDIA_CAMEL,
        properties = properties,
    )
}

/// `export const customMedia = { ... };`
pub fn render_esmodule(custom_media: &CustomMediaJson) -> String {
    let properties = module_properties(custom_media, 1);
    format!(
        "export const {name} = {{\n{properties}\n}};\n",
        name = CUSTOM_MEDIA_CAMEL,
        properties = properties,
    )
}

/// Escaped `'<name>': '<value>'` lines at the given depth, comma separated.
fn module_properties(custom_media: &CustomMediaJson, depth: usize) -> String {
    let indent = MODULE_INDENT.repeat(depth);
    custom_media
        .iter()
        .map(|(name, value)| {
            format!(
                "{}'{}': '{}'",
                indent,
                escape_for_js(name),
                escape_for_js(&stringify_value(value))
            )
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
