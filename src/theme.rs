//! Theme metrics for mask placement
//!
//! The delete-mask anchoring logic recognizes which table border a button
//! sits on from fixed pixel offsets — values that encode the host table
//! theme's border and margin widths. They are contract constants between
//! this crate and that theme, so they live in a [`ThemeMetrics`] value the
//! host injects, not in code.
//!
//! Metrics load from YAML with an embedded default for the stock table
//! theme. Hosts with custom table styling ship their own metrics file.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Metrics for the stock table theme, embedded at compile time
pub const DEFAULT_THEME_YAML: &str = include_str!("../themes/default.yaml");

/// Pixel constants tying mask placement to the host table theme.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ThemeMetrics {
    /// Offset of a border button's parent from the table edge when the
    /// button sits on the FIRST border (top border for horizontal
    /// toolbars, left border for vertical ones).
    #[serde(default = "default_first_border_inset")]
    pub first_border_inset: f64,
    /// Trailing-edge offset (right/bottom) of a button's parent when the
    /// button sits on the LAST border (bottom border / last column).
    #[serde(default = "default_last_border_offset")]
    pub last_border_offset: f64,
    /// How far the delete mask is pulled back so it covers the row or
    /// column before the last border rather than empty space past it.
    #[serde(default = "default_mask_pullback")]
    pub mask_pullback: f64,
    /// Settling window for plus/minus hover and pointer-out bursts.
    #[serde(default = "default_hover_debounce_ms")]
    pub hover_debounce_ms: u64,
}

fn default_first_border_inset() -> f64 {
    -12.0
}

fn default_last_border_offset() -> f64 {
    10.0
}

fn default_mask_pullback() -> f64 {
    -16.0
}

fn default_hover_debounce_ms() -> u64 {
    300
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        Self {
            first_border_inset: default_first_border_inset(),
            last_border_offset: default_last_border_offset(),
            mask_pullback: default_mask_pullback(),
            hover_debounce_ms: default_hover_debounce_ms(),
        }
    }
}

impl ThemeMetrics {
    /// Parse metrics from YAML content
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).context("failed to parse theme metrics YAML")
    }

    /// Load metrics from a YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme metrics file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("in theme metrics file {}", path.display()))
    }

    /// Load metrics with fallback: the host's file if given and readable,
    /// otherwise the embedded stock-theme defaults.
    ///
    /// A broken user file degrades to defaults with a warning — wrong
    /// metrics misplace a visual affordance, never fail the host.
    pub fn load(user_file: Option<&Path>) -> Self {
        if let Some(path) = user_file {
            match Self::from_file(path) {
                Ok(metrics) => {
                    tracing::info!("Loaded theme metrics from {}", path.display());
                    return metrics;
                }
                Err(e) => {
                    tracing::warn!("Falling back to default theme metrics: {:#}", e);
                }
            }
        }
        Self::default()
    }

    /// The hover settling window as a [`std::time::Duration`]
    pub fn hover_window(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.hover_debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_matches_default_impl() {
        let parsed = ThemeMetrics::from_yaml(DEFAULT_THEME_YAML).unwrap();
        assert_eq!(parsed, ThemeMetrics::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let metrics = ThemeMetrics::from_yaml("mask_pullback: -20\n").unwrap();
        assert_eq!(metrics.mask_pullback, -20.0);
        assert_eq!(metrics.first_border_inset, -12.0);
        assert_eq!(metrics.hover_debounce_ms, 300);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(ThemeMetrics::from_yaml("mask_pullback: [nope").is_err());
    }
}
