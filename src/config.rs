//! Configuration loading.
//!
//! An optional `cascada.toml` tunes the picker defaults and the terminal
//! layout. Unknown keys are collected as non-fatal warnings with a nearest
//! known key suggestion; `CASCADA_*` environment variables override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::SelectionMode;
use crate::error::{CascadaError, CascadaResult};
use crate::picker::{PanelLayout, PickerOptions, DEFAULT_VISIBLE_ITEMS};

/// Picker behavior defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_visible_items")]
    pub initial_visible_items: usize,

    /// Omit to use the mode default (single closes, multiple stays open).
    #[serde(default)]
    pub close_on_leaf_select: Option<bool>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_visible_items: default_visible_items(),
            close_on_leaf_select: None,
        }
    }
}

fn default_visible_items() -> usize {
    DEFAULT_VISIBLE_ITEMS
}

/// Terminal layout cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_column_width")]
    pub column_width: i32,

    #[serde(default = "default_row_height")]
    pub row_height: i32,

    #[serde(default = "default_viewport_margin")]
    pub viewport_margin: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
            row_height: default_row_height(),
            viewport_margin: default_viewport_margin(),
        }
    }
}

fn default_column_width() -> i32 {
    PanelLayout::default().column_width
}

fn default_row_height() -> i32 {
    PanelLayout::default().row_height
}

fn default_viewport_margin() -> i32 {
    PanelLayout::default().viewport_margin
}

/// Output tuning.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Force unicode glyphs on/off; omit to auto-detect from the terminal.
    #[serde(default)]
    pub unicode: Option<bool>,
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load a config file, discarding warnings.
    pub fn load(path: &Path) -> CascadaResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> CascadaResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| CascadaError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from an explicit path, from `cascada.toml` in the working
    /// directory, or fall back to defaults. Environment overrides apply in
    /// every case.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        let candidate = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("cascada.toml"));

        let (config, warnings) = if candidate.exists() {
            Self::load_with_warnings(&candidate).unwrap_or_default()
        } else {
            (Self::default(), Vec::new())
        };
        (with_env_overrides(config), warnings)
    }

    /// The layout cells for the panel geometry.
    pub fn panel_layout(&self) -> PanelLayout {
        PanelLayout {
            column_width: self.layout.column_width,
            row_height: self.layout.row_height,
            viewport_margin: self.layout.viewport_margin,
        }
    }

    /// Picker options for one instance of the given mode.
    pub fn picker_options(&self, mode: SelectionMode) -> PickerOptions {
        let mut options =
            PickerOptions::new(mode).with_visible_items(self.picker.initial_visible_items);
        if let Some(close) = self.picker.close_on_leaf_select {
            options = options.with_close_on_leaf_select(close);
        }
        options
    }
}

/// Apply environment variable overrides (CASCADA_* prefix).
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(value) = std::env::var("CASCADA_VISIBLE_ITEMS") {
        if let Ok(count) = value.parse::<usize>() {
            config.picker.initial_visible_items = count;
        }
    }

    if let Ok(value) = std::env::var("CASCADA_COLUMN_WIDTH") {
        if let Ok(width) = value.parse::<i32>() {
            config.layout.column_width = width;
        }
    }

    if let Ok(value) = std::env::var("CASCADA_UNICODE") {
        config.output.unicode = Some(value.to_lowercase() != "false" && value != "0");
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "picker",
        "initial_visible_items",
        "close_on_leaf_select",
        "layout",
        "column_width",
        "row_height",
        "viewport_margin",
        "output",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
