//! Scatter plot of two independently scaled columns.

use super::histogram::{GRID, MARGIN};
use super::legend::LegendPanel;
use super::scale::{TICKS, ensure_axis, tick_values};
use super::scene::{Paint, Scene, Shape};
use super::types::{Canvas, Hit, Point, Rect};
use super::util::{Rgba, color_of, distance, format_number};
use super::{ChartGeometry, ChartLayout};
use crate::error::Result;
use crate::models::{Vector, ensure_same_len};

/// Radius of a plotted point, also the hit-test threshold.
pub const POINT_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    objects: Vector<String>,
    first: Vector<f64>,
    second: Vector<f64>,
    bounds: (f64, f64),
}

impl ScatterPlot {
    pub fn new(objects: Vector<String>, first: Vector<f64>, second: Vector<f64>) -> Result<Self> {
        ensure_same_len(&objects, &[&first, &second])?;
        let bounds = (ensure_axis(&first)?, ensure_axis(&second)?);
        Ok(Self {
            objects,
            first,
            second,
            bounds,
        })
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Screen position of row `row` inside `frame`.
    pub fn point_at(&self, frame: Rect, row: usize) -> Point {
        let (b1, b2) = self.bounds;
        Point::new(
            frame.left + self.first.data()[row] / b1 * frame.width(),
            frame.bottom - self.second.data()[row] / b2 * frame.height(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub frame: Rect,
    pub points: Vec<Point>,
    pub legend: LegendPanel,
    pub scene: Scene,
}

impl ChartLayout for ScatterLayout {
    fn into_scene(self) -> Scene {
        self.scene
    }
}

impl ChartGeometry for ScatterPlot {
    type Layout = ScatterLayout;

    fn layout(&self, canvas: Canvas) -> ScatterLayout {
        let frame = canvas.plot_frame(MARGIN);
        let rows = self.objects.len();
        let legend = LegendPanel::new(canvas, rows, 3);
        let mut scene = Scene::new(canvas.width, canvas.height, legend.font_px);
        let caption = canvas.caption_px();
        let (b1, b2) = self.bounds;

        for i in 0..=TICKS {
            let f = i as f64 / TICKS as f64;
            let x = frame.left + frame.width() * f;
            let y = frame.bottom - frame.height() * f;
            scene.line(Point::new(x, frame.top), Point::new(x, frame.bottom), GRID, 1.0);
            scene.line(Point::new(frame.left, y), Point::new(frame.right, y), GRID, 1.0);
        }
        scene.push(Shape::Rect {
            rect: frame,
            paint: Paint::Stroke {
                color: Rgba::BLACK,
                width: 1.5,
            },
        });

        let points: Vec<Point> = (0..rows).map(|row| self.point_at(frame, row)).collect();
        for (i, &center) in points.iter().enumerate() {
            scene.push(Shape::Circle {
                center,
                radius: POINT_RADIUS,
                paint: Paint::Fill(color_of(i)),
            });
        }

        for (i, (tx, ty)) in tick_values(b1).iter().zip(tick_values(b2)).enumerate() {
            let f = i as f64 / TICKS as f64;
            let x = frame.left + frame.width() * f;
            let y = frame.bottom - frame.height() * f;
            scene.text(
                format_number(*tx),
                Point::new(x - caption / 3.0, frame.bottom + caption + 2.0),
                caption,
                Rgba::BLACK,
            );
            if i > 0 {
                scene.text(
                    format_number(ty),
                    Point::new(frame.left + 2.0, y - 2.0),
                    caption,
                    Rgba::BLACK,
                );
            }
        }

        legend.draw(&mut scene, rows, |row| {
            vec![
                self.objects.data()[row].clone(),
                format_number(self.first.data()[row]),
                format_number(self.second.data()[row]),
            ]
        });

        ScatterLayout {
            frame,
            points,
            legend,
            scene,
        }
    }

    fn hit_test(&self, layout: &ScatterLayout, cursor: Point) -> Option<Hit> {
        layout
            .points
            .iter()
            .position(|&p| distance(p, cursor) <= POINT_RADIUS)
            .map(|row| Hit {
                row,
                text: self.objects.data()[row].clone(),
            })
    }
}
