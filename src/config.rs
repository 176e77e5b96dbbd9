//! Window settings and the TOML chart file.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::chart::ChartConfig;
use crate::color::Color;
use crate::entry::Entry;
use crate::error::{GaugeError, Result};
use crate::radial_gauge::RadialGaugeChart;

/// Configuration for application window
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub max_framerate: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Radial Gauge".to_string(),
            width: 400,
            height: 400,
            max_framerate: 60.0,
        }
    }
}

/// The `[chart]` table. Unset keys keep the chart defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    pub margin: Option<f32>,
    pub line_size: Option<f32>,
    pub line_area_alpha: Option<u8>,
    pub start_angle: Option<f32>,
    pub force_legend_right: Option<bool>,
    pub label_text_size: Option<f32>,
    pub min_value: Option<f32>,
    pub max_value: Option<f32>,
    pub internal_min_value: Option<f32>,
    pub internal_max_value: Option<f32>,
    pub background: Option<Color>,
    pub animated: Option<bool>,
    pub animation_ms: Option<u64>,
}

impl ChartSection {
    pub fn to_chart(&self) -> RadialGaugeChart {
        let defaults = RadialGaugeChart::default();
        let base_defaults = ChartConfig::default();

        let base = ChartConfig::builder()
            .margin(self.margin.unwrap_or(base_defaults.margin))
            .label_text_size(self.label_text_size.unwrap_or(base_defaults.label_text_size))
            .maybe_min_value(self.min_value)
            .maybe_max_value(self.max_value)
            .maybe_internal_min_value(self.internal_min_value)
            .maybe_internal_max_value(self.internal_max_value)
            .background_color(self.background.unwrap_or(base_defaults.background_color))
            .is_animated(self.animated.unwrap_or(base_defaults.is_animated))
            .animation_duration(
                self.animation_ms
                    .map_or(base_defaults.animation_duration, Duration::from_millis),
            )
            .build();

        RadialGaugeChart::builder()
            .base(base)
            .maybe_line_size(self.line_size)
            .line_area_alpha(self.line_area_alpha.unwrap_or(defaults.line_area_alpha))
            .start_angle(self.start_angle.unwrap_or(defaults.start_angle))
            .force_legend_right(self.force_legend_right.unwrap_or(defaults.force_legend_right))
            .build()
    }
}

/// A chart description loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartFile {
    pub window: WindowConfig,
    pub chart: ChartSection,
    pub entries: Vec<Entry>,
}

impl ChartFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GaugeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn to_chart(&self) -> RadialGaugeChart {
        self.chart.to_chart()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
