// src/main.rs

use clap::Parser;
use custom_media_export::{export_custom_media, CommandLineInput, ExportConfig, ExportError};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::path::Path;

/// Per-run log written next to other temporary files.
const LOG_FILE_NAME: &str = "custom_media_export.log";

/// Destination-level detail is only shown on the console with `--verbose`.
const VERBOSE_PATTERN: &str = "{d(%H:%M:%S)} [{l}] {t} - {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}";

/// Console (stderr, so stdout stays the list of written files) plus a log
/// file that records every destination at debug level. The file is
/// truncated on each run.
fn log_config(verbose: bool, log_file_path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let (console_level, console_pattern) = if verbose {
        (LevelFilter::Debug, VERBOSE_PATTERN)
    } else {
        (LevelFilter::Warn, "{m}{n}")
    };

    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(console_pattern)))
        .build();

    let export_log = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("console", Box::new(console)),
        )
        .appender(Appender::builder().build("export_log", Box::new(export_log)))
        .build(
            Root::builder()
                .appender("console")
                .appender("export_log")
                .build(LevelFilter::Debug),
        )?;

    Ok(config)
}

fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    log4rs::init_config(log_config(verbose, &log_file_path)?)?;
    log::debug!("Export log: {}", log_file_path.display());
    Ok(())
}

/// Loads the mapping, exports it, and confirms each written file.
async fn run(config: &ExportConfig) -> Result<(), ExportError> {
    let custom_media = config.load_custom_media().await?;
    log::info!(
        "Loaded {} custom media definitions from {}",
        custom_media.len(),
        config.input.display()
    );

    let report = export_custom_media(&custom_media, config.destinations()).await?;

    for path in report.written_files() {
        println!("✓ Custom media written to {}", path.display());
    }
    if report.stats.skipped > 0 {
        log::warn!(
            "{} destination(s) skipped: type not one of css, js, json, mjs",
            report.stats.skipped
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ExportConfig::resolve(cli)?;

    run(&config).await?;

    Ok(())
}
