//! SVG backend: serializes draw commands into a standalone document.

use std::fmt::Write;
use std::path::Path;

use crate::color::Color;
use crate::entry::Entry;
use crate::error::{GaugeError, Result};
use crate::radial_gauge::RadialGaugeChart;
use crate::surface::{DrawCommand, DrawingSurface, Point, Rect, StrokeCap, TextAnchor};

/// Collects draw commands as SVG elements.
#[derive(Debug, Default)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    title: String,
    elements: Vec<String>,
}

impl SvgSurface {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn finish(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            num(self.width),
            num(self.height)
        );

        if !self.title.is_empty() {
            let escaped = xml_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        for element in self.elements {
            let _ = writeln!(output, "    {element}");
        }

        output.push_str("</svg>");
        output
    }
}

/// Renders a chart on its background into a complete SVG document.
pub fn render_document(
    chart: &RadialGaugeChart,
    entries: &[Entry],
    width: f32,
    height: f32,
    title: &str,
) -> String {
    let mut svg = SvgSurface::new(width, height).with_title(title);
    svg.submit(DrawCommand::Clear(chart.base.background_color));
    chart.draw(entries, &mut svg, width, height);
    svg.finish()
}

pub fn write_document(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document).map_err(|source| GaugeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

impl DrawingSurface for SvgSurface {
    fn submit(&mut self, command: DrawCommand) {
        if let Some(element) = render_command(&command) {
            self.elements.push(element);
        }
    }
}

fn render_command(command: &DrawCommand) -> Option<String> {
    match command {
        DrawCommand::Clear(color) => Some(format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            color.to_hex_rgb()
        )),
        DrawCommand::Circle {
            center,
            radius,
            stroke_width,
            color,
        } => stroked_circle(*center, *radius, *stroke_width, *color),
        DrawCommand::Arc {
            oval,
            start_angle,
            sweep_angle,
            stroke_width,
            cap,
            color,
        } => arc(*oval, *start_angle, *sweep_angle, *stroke_width, *cap, *color),
        DrawCommand::Dot {
            center,
            radius,
            color,
        } => (*radius > 0.0).then(|| {
            format!(
                r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
                num(center.x),
                num(center.y),
                num(*radius),
                fill(*color)
            )
        }),
        DrawCommand::Rect { rect, color } => (rect.width() > 0.0 && rect.height() > 0.0).then(|| {
            format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                num(rect.left),
                num(rect.top),
                num(rect.width()),
                num(rect.height()),
                fill(*color)
            )
        }),
        DrawCommand::Line {
            from,
            to,
            stroke_width,
            color,
        } => Some(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            stroke(*color, *stroke_width)
        )),
        DrawCommand::Text {
            position,
            text,
            size,
            color,
            anchor,
        } => Some(format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" dominant-baseline="central" {}>{}</text>"#,
            num(position.x),
            num(position.y),
            num(*size),
            anchor_name(*anchor),
            fill(*color),
            xml_escape(text)
        )),
    }
}

fn stroked_circle(center: Point, radius: f32, stroke_width: f32, color: Color) -> Option<String> {
    if radius <= 0.0 || stroke_width <= 0.0 {
        return None;
    }
    Some(format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="none" {}/>"#,
        num(center.x),
        num(center.y),
        num(radius),
        stroke(color, stroke_width)
    ))
}

fn arc(
    oval: Rect,
    start_angle: f32,
    sweep_angle: f32,
    stroke_width: f32,
    cap: StrokeCap,
    color: Color,
) -> Option<String> {
    if sweep_angle == 0.0 || !sweep_angle.is_finite() {
        return None;
    }
    let center = oval.center();
    let (rx, ry) = (oval.width() / 2.0, oval.height() / 2.0);
    if sweep_angle.abs() >= 360.0 {
        // an SVG arc cannot close on itself
        return stroked_circle(center, (rx + ry) / 2.0, stroke_width, color);
    }
    if rx <= 0.0 || ry <= 0.0 || stroke_width <= 0.0 {
        return None;
    }

    let start = start_angle.to_radians();
    let end = (start_angle + sweep_angle).to_radians();
    let (x0, y0) = (center.x + rx * start.cos(), center.y + ry * start.sin());
    let (x1, y1) = (center.x + rx * end.cos(), center.y + ry * end.sin());
    let large_arc = u8::from(sweep_angle.abs() > 180.0);
    let clockwise = u8::from(sweep_angle > 0.0);
    let linecap = match cap {
        StrokeCap::Butt => "butt",
        StrokeCap::Round => "round",
    };

    Some(format!(
        r#"<path d="M{},{} A{},{} 0 {large_arc} {clockwise} {},{}" fill="none" {} stroke-linecap="{linecap}"/>"#,
        num(x0),
        num(y0),
        num(rx),
        num(ry),
        num(x1),
        num(y1),
        stroke(color, stroke_width)
    ))
}

fn stroke(color: Color, width: f32) -> String {
    format!(
        r#"stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
        color.to_hex_rgb(),
        num(color.opacity()),
        num(width)
    )
}

fn fill(color: Color) -> String {
    format!(
        r#"fill="{}" fill-opacity="{}""#,
        color.to_hex_rgb(),
        num(color.opacity())
    )
}

const fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Two decimals, no trailing zeros.
fn num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "svg_tests.rs"]
mod tests;
