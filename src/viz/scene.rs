//! Backend-neutral draw commands produced by the geometry engines.

use super::text::estimate_text_width_px;
use super::types::{Point, Rect};
use super::util::Rgba;

/// Fill or outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Rgba),
    Stroke { color: Rgba, width: f64 },
}

impl Paint {
    pub const OUTLINE: Paint = Paint::Stroke {
        color: Rgba::BLACK,
        width: 2.5,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    Rect {
        rect: Rect,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    /// Pie wedge; degrees run clockwise on screen starting at +x.
    Sector {
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: Rgba,
    },
    /// Filled outline; must be star-shaped around the mean of its points.
    Polygon {
        points: Vec<Point>,
        color: Rgba,
    },
    /// `at` is the left end of the text baseline.
    Text {
        text: String,
        at: Point,
        size_px: f64,
        color: Rgba,
    },
}

/// Everything one frame of a chart draws, in painting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
    /// Text size used for the tooltip layer.
    pub tooltip_px: f64,
}

impl Scene {
    pub fn new(width: f64, height: f64, tooltip_px: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            tooltip_px,
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.push(Shape::Line {
            from,
            to,
            color,
            width,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, at: Point, size_px: f64, color: Rgba) {
        self.push(Shape::Text {
            text: text.into(),
            at,
            size_px,
            color,
        });
    }

    /// Draw `text` at the cursor on a white box so it stays legible over the chart.
    pub fn push_tooltip(&mut self, cursor: Point, text: &str) {
        let size = self.tooltip_px;
        let w = estimate_text_width_px(text, size) + 8.0;
        let h = size + 6.0;
        let rect = Rect::new(cursor.x, cursor.y - h, cursor.x + w, cursor.y);
        self.push(Shape::Rect {
            rect,
            paint: Paint::Fill(Rgba::WHITE),
        });
        self.push(Shape::Rect {
            rect,
            paint: Paint::Stroke {
                color: Rgba::BLACK,
                width: 1.0,
            },
        });
        self.text(text, cursor.offset(4.0, -4.0), size, Rgba::BLACK);
    }

    /// All text drawn in this scene, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Points along a sector outline: the center followed by the arc, at most
/// `max_step_deg` apart. Shared by both render backends.
pub fn sector_points(
    center: Point,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    max_step_deg: f64,
) -> Vec<Point> {
    let steps = (sweep_deg.abs() / max_step_deg.max(0.1)).ceil().max(1.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push(center);
    for i in 0..=steps {
        let a = start_deg + sweep_deg * i as f64 / steps as f64;
        pts.push(center.polar(a, radius));
    }
    pts
}
