//! Radial gauge chart: one concentric ring per entry.
//!
//! Values larger than the ring's maximum wrap around as extra laps, each drawn
//! over the previous one in a darker shade of the entry color.

use bon::Builder;
use tracing::{debug, trace};

use crate::caption::{partition_captions, CaptionPainter, LegendCaptions};
use crate::chart::{ChartConfig, ValueRangeProvider};
use crate::color::{change_brightness, Color};
use crate::entry::{present_values, Entry};
use crate::surface::{DrawingSurface, Point, Rect, Scene, StrokeCap};

/// Upper bound on laps drawn per ring.
pub const MAX_LAPS: usize = 4;
/// Brightness lost per extra lap.
pub const LAP_DARKEN_STEP: f32 = 0.2;

// ============================================================================
// CHART
// ============================================================================

#[derive(Debug, Clone, PartialEq, Builder)]
pub struct RadialGaugeChart {
    #[builder(default)]
    pub base: ChartConfig,
    /// Ring stroke width; `None` or negative sizes rings to fit.
    pub line_size: Option<f32>,
    /// Opacity of the track behind each ring.
    #[builder(default = 52)]
    pub line_area_alpha: u8,
    /// Degrees, clockwise from 3 o'clock.
    #[builder(default = -90.0)]
    pub start_angle: f32,
    #[builder(default = false)]
    pub force_legend_right: bool,
}

impl Default for RadialGaugeChart {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RadialGaugeChart {
    /// Absolute values of the data and of the base bounds, which always
    /// include the internal minimum (zero when unset).
    fn absolute_candidates<'a>(&'a self, entries: &'a [Entry]) -> impl Iterator<Item = f32> + 'a {
        let base_max = self.base.max_value(entries);
        let base_min = self.base.min_value(entries);
        let internal_min = self.base.internal_min_value.unwrap_or(0.0);

        present_values(entries)
            .chain([base_max, base_min, internal_min])
            .map(f32::abs)
    }

    pub fn absolute_minimum(&self, entries: &[Entry]) -> f32 {
        self.absolute_candidates(entries)
            .reduce(f32::min)
            .unwrap_or(0.0)
    }

    pub fn absolute_maximum(&self, entries: &[Entry]) -> f32 {
        self.absolute_candidates(entries)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }

    pub fn layout(&self, entry_count: usize, width: f32, height: f32) -> RingLayout {
        RingLayout::compute(self, entry_count, width, height)
    }

    /// Records the chart into a fresh scene.
    pub fn render(&self, entries: &[Entry], width: f32, height: f32) -> Scene {
        let mut scene = Scene::new();
        self.draw(entries, &mut scene, width, height);
        scene
    }

    /// Draws rings and the bundled legend onto `surface`.
    pub fn draw<S: DrawingSurface>(&self, entries: &[Entry], surface: &mut S, width: f32, height: f32) {
        let painter = LegendCaptions::new(&self.base);
        self.draw_with_captions(entries, surface, &painter, width, height);
    }

    pub fn draw_with_captions<S, P>(
        &self,
        entries: &[Entry],
        surface: &mut S,
        painter: &P,
        width: f32,
        height: f32,
    ) where
        S: DrawingSurface,
        P: CaptionPainter,
    {
        if entries.is_empty() {
            return;
        }

        let layout = self.layout(entries.len(), width, height);
        let value_range = self.value_range(entries);
        debug!(
            entries = entries.len(),
            radius = layout.radius,
            line_width = layout.line_width,
            value_range,
            "drawing radial gauge"
        );

        for (index, entry) in entries.iter().enumerate() {
            if entry.value().is_none() {
                continue;
            }
            let radius = layout.ring_radius(index);
            self.draw_gauge_area(surface, entry, &layout, radius);
            self.draw_gauge(surface, entry, &layout, radius, value_range);
        }

        self.draw_captions(surface, painter, entries, width, height);
    }

    fn draw_gauge_area<S: DrawingSurface>(
        &self,
        surface: &mut S,
        entry: &Entry,
        layout: &RingLayout,
        radius: f32,
    ) {
        surface.stroke_circle(
            layout.center,
            radius,
            layout.line_width,
            entry.color.with_alpha(self.line_area_alpha),
        );
    }

    fn draw_gauge<S: DrawingSurface>(
        &self,
        surface: &mut S,
        entry: &Entry,
        layout: &RingLayout,
        radius: f32,
        value_range: f32,
    ) {
        let oval = Rect::around(layout.center, radius);
        for lap in laps(entry, value_range, self.base.animation_progress) {
            trace!(lap = lap.index, sweep = lap.sweep_angle, "lap");
            surface.stroke_arc(
                oval,
                self.start_angle,
                lap.sweep_angle,
                layout.line_width,
                StrokeCap::Butt,
                lap.color,
            );
        }
    }

    fn draw_captions<S, P>(&self, surface: &mut S, painter: &P, entries: &[Entry], width: f32, height: f32)
    where
        S: DrawingSurface,
        P: CaptionPainter,
    {
        let columns = partition_captions(entries, self.force_legend_right);
        if self.force_legend_right {
            painter.draw_captions(surface, width, height, &columns.right, false, false, true);
        } else {
            painter.draw_captions(surface, width, height, &columns.right, false, false, false);
            painter.draw_captions(surface, width, height, &columns.left, true, false, false);
        }
    }
}

/// The gauge scales against absolute values, so a ring's length does not
/// depend on the sign of its value.
impl ValueRangeProvider for RadialGaugeChart {
    fn min_value(&self, entries: &[Entry]) -> f32 {
        self.absolute_minimum(entries)
    }

    fn max_value(&self, entries: &[Entry]) -> f32 {
        self.absolute_maximum(entries)
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: Point,
    /// Space available to the outermost ring.
    pub radius: f32,
    pub line_width: f32,
    /// Radial distance between consecutive rings.
    pub radius_space: f32,
}

impl RingLayout {
    pub fn compute(chart: &RadialGaugeChart, entry_count: usize, width: f32, height: f32) -> Self {
        let margin = chart.base.margin;
        let radius = (width.min(height) - 2.0 * margin) / 2.0;
        let line_width = match chart.line_size {
            Some(size) if size >= 0.0 => size,
            _ => radius / ((entry_count + 1) as f32 * 2.0),
        };
        let cx = if chart.force_legend_right {
            margin + radius
        } else {
            width / 2.0
        };

        Self {
            center: Point::new(cx, height / 2.0),
            radius,
            line_width,
            radius_space: line_width * 2.0,
        }
    }

    pub fn ring_radius(&self, index: usize) -> f32 {
        (index + 1) as f32 * self.radius_space
    }
}

// ============================================================================
// LAPS
// ============================================================================

/// One arc of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lap {
    pub index: usize,
    pub color: Color,
    pub sweep_angle: f32,
}

/// Arcs that represent one entry's value, at most [`MAX_LAPS`].
#[derive(Debug, Clone)]
pub struct Laps {
    base_color: Color,
    remaining: f32,
    max_value: f32,
    progress: f32,
    index: usize,
}

/// Laps for `entry`, scaled against its own maximum or else `value_range`.
/// A non-positive scale falls back to the value itself (one full lap).
pub fn laps(entry: &Entry, value_range: f32, progress: f32) -> Laps {
    let magnitude = entry.value().map_or(0.0, f32::abs);
    let mut max_value = entry.resolved_max_value().unwrap_or(value_range);
    if max_value <= 0.0 || max_value.is_nan() {
        max_value = magnitude;
    }

    Laps {
        base_color: entry.color,
        remaining: magnitude,
        max_value,
        progress,
        index: 0,
    }
}

impl Iterator for Laps {
    type Item = Lap;

    fn next(&mut self) -> Option<Lap> {
        if self.index >= MAX_LAPS || self.remaining.is_nan() || self.remaining <= 0.0 {
            return None;
        }

        let lap = Lap {
            index: self.index,
            color: change_brightness(self.base_color, self.index as f32 * -LAP_DARKEN_STEP),
            sweep_angle: self.progress * 360.0 * self.remaining / self.max_value,
        };
        self.remaining -= self.max_value;
        self.index += 1;
        Some(lap)
    }
}

#[cfg(test)]
#[path = "radial_gauge_tests.rs"]
mod tests;
