//! Chart-wide settings shared by chart types and value range resolution.

use std::time::Duration;

use bon::Builder;

use crate::color::Color;
use crate::entry::{present_values, Entry};

/// Base configuration every chart type reads.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ChartConfig {
    #[builder(default = 20.0)]
    pub margin: f32,
    /// Sweep multiplier in `0..=1`.
    #[builder(default = 1.0)]
    pub animation_progress: f32,

    /// Replaces the computed minimum when set.
    pub min_value: Option<f32>,
    /// Replaces the computed maximum when set.
    pub max_value: Option<f32>,
    /// Widens the computed minimum.
    pub internal_min_value: Option<f32>,
    /// Widens the computed maximum.
    pub internal_max_value: Option<f32>,

    #[builder(default = 16.0)]
    pub label_text_size: f32,
    #[builder(default = Color::WHITE)]
    pub background_color: Color,

    #[builder(default = true)]
    pub is_animated: bool,
    #[builder(default = Duration::from_millis(1500))]
    pub animation_duration: Duration,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Resolves the value bounds a chart scales its marks against.
pub trait ValueRangeProvider {
    fn min_value(&self, entries: &[Entry]) -> f32;

    fn max_value(&self, entries: &[Entry]) -> f32;

    fn value_range(&self, entries: &[Entry]) -> f32 {
        self.max_value(entries) - self.min_value(entries)
    }
}

/// Signed bounds: data values plus the internal overrides, unless an explicit
/// bound is set. Zero when there is nothing to look at.
impl ValueRangeProvider for ChartConfig {
    fn min_value(&self, entries: &[Entry]) -> f32 {
        if let Some(min) = self.min_value {
            return min;
        }
        present_values(entries)
            .chain(self.internal_min_value)
            .reduce(f32::min)
            .unwrap_or(0.0)
    }

    fn max_value(&self, entries: &[Entry]) -> f32 {
        if let Some(max) = self.max_value {
            return max;
        }
        present_values(entries)
            .chain(self.internal_max_value)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
