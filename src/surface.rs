//! Drawing primitives charts emit and the surfaces that consume them.
//!
//! Angles are in degrees, measured clockwise from 3 o'clock (screen space,
//! y grows downward). A sweep whose magnitude reaches 360 is a full circle.

use crate::color::Color;

// ============================================================================
// GEOMETRY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Bounding box of a circle.
    pub fn around(center: Point, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// Stroked full circle.
    Circle {
        center: Point,
        radius: f32,
        stroke_width: f32,
        color: Color,
    },
    /// Stroked arc along the ellipse inscribed in `oval`.
    Arc {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        cap: StrokeCap,
        color: Color,
    },
    /// Filled circle.
    Dot {
        center: Point,
        radius: f32,
        color: Color,
    },
    /// Filled rectangle.
    Rect { rect: Rect, color: Color },
    Line {
        from: Point,
        to: Point,
        stroke_width: f32,
        color: Color,
    },
    /// Single line of text, vertically centered on `position.y`.
    Text {
        position: Point,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
}

/// Anything that accepts draw commands.
pub trait DrawingSurface {
    fn submit(&mut self, command: DrawCommand);

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke_width: f32, color: Color) {
        self.submit(DrawCommand::Circle {
            center,
            radius,
            stroke_width,
            color,
        });
    }

    fn stroke_arc(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        cap: StrokeCap,
        color: Color,
    ) {
        self.submit(DrawCommand::Arc {
            oval,
            start_angle,
            sweep_angle,
            stroke_width,
            cap,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.submit(DrawCommand::Rect { rect, color });
    }

    fn draw_text(
        &mut self,
        position: Point,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    ) where
        Self: Sized,
    {
        self.submit(DrawCommand::Text {
            position,
            text: text.into(),
            size,
            color,
            anchor,
        });
    }
}

// ============================================================================
// RETAINED MODE
// ============================================================================

/// Recorded draw commands, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Plays every recorded command onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            surface.submit(command.clone());
        }
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawingSurface for Scene {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
