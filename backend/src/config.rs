//! Grid configuration file support.
//!
//! Layout breakpoints, range-bar geometry, cell labels and window defaults can
//! be overridden from a TOML file. Every section is optional and falls back to
//! the built-in defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GridError, GridResult};
use crate::services::axis_scale::RangeBarConfig;
use crate::services::rate_cell::CellLabels;
use crate::services::viewport::{PageLayout, FIXED_METRIC_COLUMNS};

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "RATE_GRID_CONFIG";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "rate_grid.toml";

/// Complete grid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub range_bar: RangeBarConfig,
    #[serde(default)]
    pub labels: CellLabels,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub tooltip: TooltipSettings,
}

/// Date window fallback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Length of the window used when the caller supplies no range.
    #[serde(default = "default_window_days")]
    pub default_days: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            default_days: default_window_days(),
        }
    }
}

/// Tooltip placement settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipSettings {
    /// Rows with a smaller index open their tooltip below the anchor.
    #[serde(default = "default_below_row_threshold")]
    pub below_row_threshold: usize,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            below_row_threshold: default_below_row_threshold(),
        }
    }
}

fn default_window_days() -> u32 {
    30
}

fn default_below_row_threshold() -> usize {
    4
}

impl GridConfig {
    /// Load and validate a configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(GridConfig)` if the file was read, parsed and validated
    /// * `Err(GridError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GridError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> GridResult<Self> {
        let config: GridConfig = toml::from_str(content).map_err(|e| {
            GridError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from the default locations.
    ///
    /// Searches, in order:
    /// 1. The file named by `RATE_GRID_CONFIG` (must exist when set)
    /// 2. `rate_grid.toml` in the current directory
    /// 3. `backend/rate_grid.toml`
    ///
    /// Falls back to [`GridConfig::default`] when nothing is found.
    pub fn load_default() -> GridResult<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
            if !explicit.is_empty() {
                log::debug!("Loading grid config from {}={}", CONFIG_ENV_VAR, explicit);
                return Self::from_file(explicit);
            }
        }

        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading grid config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No {} found; using built-in defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> GridResult<()> {
        let breakpoints = self.layout.breakpoints();
        if breakpoints.is_empty() {
            return Err(GridError::configuration(
                "layout.breakpoints must not be empty",
            ));
        }

        let last = breakpoints.len() - 1;
        let mut previous: Option<u32> = None;
        for (i, bp) in breakpoints.iter().enumerate() {
            if bp.page_size <= FIXED_METRIC_COLUMNS {
                return Err(GridError::configuration(format!(
                    "layout.breakpoints[{}].page_size must exceed {} fixed metric columns (got {})",
                    i, FIXED_METRIC_COLUMNS, bp.page_size
                )));
            }
            match (bp.max_width, i == last) {
                (None, false) => {
                    return Err(GridError::configuration(format!(
                        "layout.breakpoints[{}] has no max_width but is not the last breakpoint",
                        i
                    )))
                }
                (Some(width), _) => {
                    if previous.is_some_and(|p| width <= p) {
                        return Err(GridError::configuration(format!(
                            "layout.breakpoints[{}].max_width must be ascending",
                            i
                        )));
                    }
                    previous = Some(width);
                }
                (None, true) => {}
            }
        }

        let bar = &self.range_bar;
        let finite = [bar.track_px, bar.max_bar_px, bar.min_offset_px, bar.max_offset_px]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !finite {
            return Err(GridError::configuration(
                "range_bar values must be finite and non-negative",
            ));
        }
        if bar.min_offset_px > bar.max_offset_px {
            return Err(GridError::configuration(format!(
                "range_bar.min_offset_px ({}) exceeds max_offset_px ({})",
                bar.min_offset_px, bar.max_offset_px
            )));
        }

        if self.window.default_days == 0 {
            return Err(GridError::configuration(
                "window.default_days must be at least 1",
            ));
        }

        Ok(())
    }
}
