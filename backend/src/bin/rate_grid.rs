//! Rate Grid snapshot renderer
//!
//! Renders one frame of the comparative rate grid from a comparison payload
//! and prints it as JSON. Useful for checking layouts against real payloads
//! without a browser.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rate-grid -- payload.json --width 1600 --pages 1 --expand h-1
//! ```
//!
//! # Exit codes
//!
//! - `0`: rendered
//! - `1`: setup failure (unreadable file, bad configuration)
//! - `2`: the payload or its date range was rejected
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//! - `RATE_GRID_CONFIG`: Configuration file used when `--config` is absent

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use rate_grid::config::GridConfig;
use rate_grid::models::PropertyId;
use rate_grid::parsing::parse_comparison_json;
use rate_grid::services::{resolve_date_window, RateGrid};
use rate_grid::GridError;

#[derive(Debug, Parser)]
#[command(name = "rate-grid")]
#[command(about = "Render one page of the comparative rate grid as JSON")]
struct Options {
    /// Comparison payload (JSON)
    payload: PathBuf,

    /// Grid configuration (default: RATE_GRID_CONFIG or rate_grid.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Number of pages to advance before rendering
    #[arg(long, default_value_t = 0)]
    pages: usize,

    /// Expand a property's range-bar row (repeatable)
    #[arg(long)]
    expand: Vec<String>,

    /// Only show the given property (repeatable)
    #[arg(long)]
    select: Vec<String>,
}

/// Whether the failure was caused by the payload rather than the environment.
fn is_input_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<GridError>())
        .any(GridError::is_input_error)
}

fn run(options: Options) -> Result<()> {
    let config = match &options.config {
        Some(path) => GridConfig::from_file(path)?,
        None => GridConfig::load_default()?,
    };

    let payload = parse_comparison_json(&options.payload)?;
    info!(
        "Loaded {} properties from {}",
        payload.comparison.len(),
        options.payload.display()
    );

    let today = chrono::Local::now().date_naive();
    let window = resolve_date_window(
        payload.start,
        payload.end,
        today,
        config.window.default_days,
    )?;

    let mut grid = RateGrid::new(config, window, options.width);
    for _ in 0..options.pages {
        if !grid.next_page() {
            info!("Reached the last page at offset {}", grid.offset());
            break;
        }
    }
    for id in &options.expand {
        grid.toggle_expanded(&PropertyId::from(id.as_str()));
    }

    let selected = if options.select.is_empty() {
        payload.selected_properties
    } else {
        options.select
    };

    let view = grid.render(&payload.comparison, &selected);
    info!(
        "Rendered {} rows, page size {}, offset {}",
        view.rows.len(),
        view.page_size,
        view.paging.offset
    );

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn main() -> ExitCode {
    let options = Options::parse();

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_input_failure(&err) => {
            error!("Payload rejected: {:#}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_all_options() {
        let options = Options::try_parse_from([
            "rate-grid",
            "payload.json",
            "--width",
            "1600",
            "--pages",
            "2",
            "--expand",
            "h-1",
            "--expand",
            "h-2",
            "--select",
            "h-1",
            "--config",
            "grid.toml",
        ])
        .unwrap();

        assert_eq!(options.payload.to_str(), Some("payload.json"));
        assert_eq!(options.width, 1600);
        assert_eq!(options.pages, 2);
        assert_eq!(options.expand, vec!["h-1", "h-2"]);
        assert_eq!(options.select, vec!["h-1"]);
        assert_eq!(options.config.unwrap().to_str(), Some("grid.toml"));
    }

    #[test]
    fn test_defaults() {
        let options = Options::try_parse_from(["rate-grid", "payload.json"]).unwrap();
        assert_eq!(options.width, 1920);
        assert_eq!(options.pages, 0);
        assert!(options.expand.is_empty());
        assert!(options.select.is_empty());
        assert!(options.config.is_none());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Options::try_parse_from(["rate-grid", "payload.json", "--verbose"]).is_err());
        assert!(Options::try_parse_from(["rate-grid", "payload.json", "--width"]).is_err());
        assert!(Options::try_parse_from(["rate-grid", "payload.json", "--width", "wide"]).is_err());
        assert!(Options::try_parse_from(["rate-grid", "a.json", "b.json"]).is_err());
        assert!(Options::try_parse_from(["rate-grid"]).is_err());
    }

    #[test]
    fn test_input_failures_are_told_apart() {
        let range = anyhow::Error::from(GridError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        })
        .context("Failed to resolve date window");
        assert!(is_input_failure(&range));

        let config = anyhow::Error::from(GridError::configuration("bad breakpoints"));
        assert!(!is_input_failure(&config));

        let io = anyhow::anyhow!("Failed to read comparison payload");
        assert!(!is_input_failure(&io));
    }
}
