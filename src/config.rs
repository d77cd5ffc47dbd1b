use crate::consts::{DEFAULT_WINDOW_MAX, DEFAULT_WINDOW_MIN, MAX_KEY};
use crate::error::VpResult;
use crate::search::SearchWindow;
use crate::transposer::{KeyRange, OobPolicy};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Defaults for the command line, optionally loaded from a JSON file.
/// Flags given on the command line win over these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub policy: OobPolicy,
    pub min_key: i64,
    pub max_key: i64,
    pub window_min: i32,
    pub window_max: i32,
    pub header: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: OobPolicy::default(),
            min_key: 0,
            max_key: MAX_KEY as i64,
            window_min: DEFAULT_WINDOW_MIN,
            window_max: DEFAULT_WINDOW_MAX,
            header: true,
        }
    }
}

impl Settings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> VpResult<Self> {
        let content = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        debug!("Loaded settings from {:?}: {:?}", path.as_ref(), settings);
        // Fail early rather than on first use.
        settings.key_range()?;
        settings.window()?;
        Ok(settings)
    }

    pub fn key_range(&self) -> VpResult<KeyRange> {
        KeyRange::new(self.min_key, self.max_key)
    }

    pub fn window(&self) -> VpResult<SearchWindow> {
        SearchWindow::new(self.window_min, self.window_max)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RangeParams {
    /// Lowest playable keyboard position (0-60)
    #[arg(long)]
    pub min_key: Option<i64>,
    /// Highest playable keyboard position (0-60)
    #[arg(long)]
    pub max_key: Option<i64>,
    /// Out-of-range note handling
    #[arg(short, long, value_enum)]
    pub policy: Option<OobPolicy>,
}

impl RangeParams {
    pub fn key_range(&self, settings: &Settings) -> VpResult<KeyRange> {
        KeyRange::new(
            self.min_key.unwrap_or(settings.min_key),
            self.max_key.unwrap_or(settings.max_key),
        )
    }

    pub fn policy(&self, settings: &Settings) -> OobPolicy {
        self.policy.unwrap_or(settings.policy)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct WindowParams {
    #[arg(long, allow_hyphen_values = true)]
    pub window_min: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub window_max: Option<i32>,
}

impl WindowParams {
    pub fn window(&self, settings: &Settings) -> VpResult<SearchWindow> {
        SearchWindow::new(
            self.window_min.unwrap_or(settings.window_min),
            self.window_max.unwrap_or(settings.window_max),
        )
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputParams {
    /// Write the sheet here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
    /// Leave out the "Transpose N" header
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
}

impl OutputParams {
    pub fn with_header(&self, settings: &Settings) -> bool {
        settings.header && !self.no_header
    }
}
