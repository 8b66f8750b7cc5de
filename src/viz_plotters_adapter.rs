//! Replays a [`Scene`] onto any plotters drawing area (bitmap or SVG).
//!
//! Coordinates are already in pixels, so shapes are drawn straight onto the root
//! area without a chart context.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{ChartError, Result};
use crate::viz::fonts::ensure_fonts_registered;
use crate::viz::scene::{Paint, Scene, Shape, sector_points};
use crate::viz::types::Point;
use crate::viz::util::Rgba;

/// Arc resolution for sectors; fine enough to look round at 800×600.
const ARC_STEP_DEG: f64 = 2.0;

pub fn rgba_color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha_f64())
}

fn px(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn stroke_px(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

/// Plotters style for a [`Paint`].
pub fn shape_style(paint: Paint) -> ShapeStyle {
    match paint {
        Paint::Fill(c) => rgba_color(c).filled(),
        Paint::Stroke { color, width } => rgba_color(color).stroke_width(stroke_px(width)),
    }
}

fn render_err<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Render(format!("{e:?}"))
}

/// Draw every shape of `scene` in order. Text is skipped when no font could be registered.
pub fn draw_scene<DB>(root: &DrawingArea<DB, Shift>, scene: &Scene) -> Result<()>
where
    DB: DrawingBackend,
{
    let with_text = ensure_fonts_registered();
    for shape in &scene.shapes {
        match shape {
            Shape::Line {
                from,
                to,
                color,
                width,
            } => root
                .draw(&PathElement::new(
                    vec![px(*from), px(*to)],
                    rgba_color(*color).stroke_width(stroke_px(*width)),
                ))
                .map_err(render_err)?,
            Shape::Rect { rect, paint } => root
                .draw(&Rectangle::new(
                    [
                        px(Point::new(rect.left, rect.top)),
                        px(Point::new(rect.right, rect.bottom)),
                    ],
                    shape_style(*paint),
                ))
                .map_err(render_err)?,
            Shape::Circle {
                center,
                radius,
                paint,
            } => root
                .draw(&Circle::new(
                    px(*center),
                    radius.round() as i32,
                    shape_style(*paint),
                ))
                .map_err(render_err)?,
            Shape::Sector {
                center,
                radius,
                start_deg,
                sweep_deg,
                color,
            } => {
                let pts = sector_points(*center, *radius, *start_deg, *sweep_deg, ARC_STEP_DEG);
                root.draw(&Polygon::new(
                    pts.into_iter().map(px).collect::<Vec<_>>(),
                    rgba_color(*color).filled(),
                ))
                .map_err(render_err)?
            }
            Shape::Polygon { points, color } => root
                .draw(&Polygon::new(
                    points.iter().copied().map(px).collect::<Vec<_>>(),
                    rgba_color(*color).filled(),
                ))
                .map_err(render_err)?,
            Shape::Text {
                text,
                at,
                size_px,
                color,
            } => {
                if !with_text || text.is_empty() {
                    continue;
                }
                let fill = rgba_color(*color);
                let style = FontDesc::new(FontFamily::SansSerif, *size_px, FontStyle::Normal)
                    .color(&fill)
                    .pos(Pos::new(HPos::Left, VPos::Bottom));
                root.draw(&Text::new(text.as_str(), px(*at), style))
                    .map_err(render_err)?
            }
        }
    }
    Ok(())
}
