//! Legend captions: which entry goes in which column, and how a column is painted.

use crate::chart::ChartConfig;
use crate::color::Color;
use crate::entry::Entry;
use crate::surface::{DrawingSurface, Point, Rect, TextAnchor};

/// Entries split into caption columns, each already in paint order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaptionColumns<'a> {
    pub left: Vec<&'a Entry>,
    pub right: Vec<&'a Entry>,
}

/// Assigns entries to caption columns.
///
/// With `force_right` every entry lands in the right column, reversed. Otherwise
/// the right column takes the first `len / 2` entries in order and the left one
/// the rest, reversed, so odd counts put the extra entry on the left.
pub fn partition_captions(entries: &[Entry], force_right: bool) -> CaptionColumns<'_> {
    if force_right {
        return CaptionColumns {
            left: Vec::new(),
            right: entries.iter().rev().collect(),
        };
    }

    let (right, left) = entries.split_at(entries.len() / 2);
    CaptionColumns {
        left: left.iter().rev().collect(),
        right: right.iter().collect(),
    }
}

/// Paints one caption column.
pub trait CaptionPainter {
    /// `is_graph_centered` is reserved and currently ignored by the bundled
    /// painter. `single_column_right` is set when every caption shares the
    /// right column.
    #[allow(clippy::too_many_arguments)]
    fn draw_captions<S: DrawingSurface>(
        &self,
        surface: &mut S,
        width: f32,
        height: f32,
        entries: &[&Entry],
        is_left: bool,
        is_graph_centered: bool,
        single_column_right: bool,
    );
}

/// Swatch plus label/value label rows spread over the canvas height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendCaptions {
    pub margin: f32,
    pub text_size: f32,
    pub animation_progress: f32,
}

impl LegendCaptions {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            margin: config.margin,
            text_size: config.label_text_size,
            animation_progress: config.animation_progress,
        }
    }

    fn fade(&self, color: Color) -> Color {
        let alpha = (f32::from(color.a) * self.animation_progress)
            .round()
            .clamp(0.0, 255.0) as u8;
        color.with_alpha(alpha)
    }

    /// Top edge of each row.
    pub fn row_tops(&self, height: f32, rows: usize) -> Vec<f32> {
        let total_margin = 2.0 * self.margin;
        let available = height - 2.0 * total_margin;
        let spread = available - self.text_size;
        let y_space = spread / rows.saturating_sub(1).max(1) as f32;

        (0..rows)
            .map(|i| {
                let y = total_margin + i as f32 * y_space;
                if rows == 1 {
                    y + spread / 2.0
                } else {
                    y
                }
            })
            .collect()
    }
}

impl CaptionPainter for LegendCaptions {
    fn draw_captions<S: DrawingSurface>(
        &self,
        surface: &mut S,
        width: f32,
        height: f32,
        entries: &[&Entry],
        is_left: bool,
        _is_graph_centered: bool,
        single_column_right: bool,
    ) {
        let size = self.text_size;
        let caption_margin = size * 0.6;

        for (entry, y) in entries.iter().zip(self.row_tops(height, entries.len())) {
            let label = entry.label.as_deref().filter(|s| !s.is_empty());
            let value_label = entry.value_label.as_deref().filter(|s| !s.is_empty());
            if label.is_none() && value_label.is_none() {
                continue;
            }

            let (swatch_x, text_x, anchor) = if is_left {
                (self.margin, self.margin + size + caption_margin, TextAnchor::Start)
            } else if single_column_right {
                let x = width.min(height);
                (x, x + size + caption_margin, TextAnchor::Start)
            } else {
                let x = width - self.margin - size;
                (x, x - caption_margin, TextAnchor::End)
            };

            surface.fill_rect(
                Rect::from_xywh(swatch_x, y, size, size),
                self.fade(entry.color),
            );

            let center_y = y + size / 2.0;
            let value_color = if entry.value_label_color.is_empty() {
                entry.color
            } else {
                entry.value_label_color
            };
            let offset = if label.is_some() && value_label.is_some() {
                size * 0.55
            } else {
                0.0
            };

            if let Some(label) = label {
                surface.draw_text(
                    Point::new(text_x, center_y - offset),
                    label,
                    size,
                    self.fade(entry.text_color),
                    anchor,
                );
            }
            if let Some(value_label) = value_label {
                surface.draw_text(
                    Point::new(text_x, center_y + offset),
                    value_label,
                    size,
                    self.fade(value_color),
                    anchor,
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "caption_tests.rs"]
mod tests;
