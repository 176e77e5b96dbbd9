//! The data point rendered as one ring of the gauge.

use bon::Builder;
use serde::Deserialize;

use crate::color::Color;

/// One data point: an optional value plus presentation attributes.
///
/// The value is fixed at construction. Everything else is plain data the
/// caller may change between renders; renderers only read it.
#[derive(Debug, Clone, PartialEq, Builder, Deserialize)]
pub struct Entry {
    #[serde(default)]
    value: Option<f32>,

    #[builder(into)]
    #[serde(default)]
    pub label: Option<String>,
    #[builder(into)]
    #[serde(default)]
    pub value_label: Option<String>,

    #[builder(default = Color::BLACK)]
    #[serde(default = "default_color")]
    pub color: Color,
    /// Reserved for a "remainder" segment; not drawn.
    #[builder(default = Color::EMPTY)]
    #[serde(default = "empty_color")]
    pub other_color: Color,
    #[builder(default = Color::GRAY)]
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    /// `Color::EMPTY` falls back to `color` when captions are painted.
    #[builder(default = Color::EMPTY)]
    #[serde(default = "empty_color")]
    pub value_label_color: Color,

    /// Per-entry scale for one full lap. `None` or negative means unset.
    #[serde(default)]
    pub max_value: Option<f32>,
}

fn default_color() -> Color {
    Color::BLACK
}

fn default_text_color() -> Color {
    Color::GRAY
}

fn empty_color() -> Color {
    Color::EMPTY
}

impl Entry {
    pub fn new(value: Option<f32>) -> Self {
        Self::builder().maybe_value(value).build()
    }

    pub fn value(&self) -> Option<f32> {
        self.value
    }

    /// Copy of this entry carrying a different value.
    #[must_use]
    pub fn with_value(&self, value: Option<f32>) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    /// The per-entry maximum, if it is set to a usable (non-negative) number.
    pub fn resolved_max_value(&self) -> Option<f32> {
        self.max_value.filter(|max| *max >= 0.0)
    }
}

/// Values of the entries that have one, in order.
pub fn present_values(entries: &[Entry]) -> impl Iterator<Item = f32> + '_ {
    entries.iter().filter_map(Entry::value)
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
