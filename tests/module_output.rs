//! Generated CommonJS and ES module files read back into the same mapping.

use custom_media_export::{export_custom_media, CustomMediaMap};
use pretty_assertions::assert_eq;

/// Undoes single-quoted literal escaping for the sequences the exporter emits.
fn unescape(literal: &str) -> String {
    let mut out = String::new();
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Splits a `'<name>': '<value>'` property line into its decoded parts.
fn parse_property(line: &str) -> (String, String) {
    let line = line.trim_start_matches('\t').trim_end_matches(',');
    let body = line
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .expect("property is quoted");

    // The separator is the first `': '` not preceded by a backslash.
    let bytes = body.as_bytes();
    let split = (0..bytes.len())
        .find(|&i| body[i..].starts_with("': '") && (i == 0 || bytes[i - 1] != b'\\'))
        .expect("property has a separator");

    (unescape(&body[..split]), unescape(&body[split + 4..]))
}

fn property_lines<'a>(source: &'a str, header: &str, footer: &str) -> Vec<&'a str> {
    source
        .strip_prefix(header)
        .and_then(|rest| rest.strip_suffix(footer))
        .expect("module frame matches")
        .lines()
        .collect()
}

fn tricky() -> CustomMediaMap {
    CustomMediaMap::new()
        .with("--it's", "(min-width: 400px)")
        .with("--multi", "screen and\n(hover)")
        .with("--crlf", "print,\r\nscreen")
        .with("--quotes", "''")
}

#[tokio::test]
async fn esmodule_reads_back_to_the_exported_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("media.mjs");

    export_custom_media(&tricky(), [path.clone()]).await.unwrap();

    let source = std::fs::read_to_string(&path).unwrap();
    let parsed: CustomMediaMap = property_lines(&source, "export const customMedia = {\n", "\n};\n")
        .into_iter()
        .map(parse_property)
        .collect();

    assert_eq!(parsed, tricky());
    assert_eq!(
        parsed.names().collect::<Vec<_>>(),
        ["--it's", "--multi", "--crlf", "--quotes"]
    );
}

#[tokio::test]
async fn commonjs_reads_back_to_the_exported_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("media.js");

    export_custom_media(&tricky(), [path.clone()]).await.unwrap();

    let source = std::fs::read_to_string(&path).unwrap();
    let lines = property_lines(
        &source,
        "module.exports = {\n\tcustomMedia: {\n",
        "\n\t}\n};\n",
    );
    assert!(lines.iter().all(|line| line.starts_with("\t\t'")));

    let parsed: CustomMediaMap = lines.into_iter().map(parse_property).collect();
    assert_eq!(parsed, tricky());
}

#[tokio::test]
async fn module_properties_stay_on_one_line_each() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("media.mjs");

    export_custom_media(&tricky(), [path.clone()]).await.unwrap();

    let source = std::fs::read_to_string(&path).unwrap();
    assert_eq!(source.lines().count(), tricky().len() + 2);
    assert!(!source.contains('\r'));
}
