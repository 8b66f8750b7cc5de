//! Radial (spider) chart: one ray per column, one closed polyline per row.

use super::histogram::MARGIN;
use super::legend::LegendPanel;
use super::scale::{TICKS, ensure_axis};
use super::scene::{Paint, Scene, Shape};
use super::scatter::POINT_RADIUS;
use super::types::{Canvas, Hit, Point};
use super::util::{Rgba, color_of, distance, format_number};
use super::{ChartGeometry, ChartLayout};
use crate::error::{ChartError, Result};
use crate::models::{Vector, ensure_same_len};

const TICK_RADIUS: f64 = 4.0;
const EDGE_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RadialChart {
    objects: Vector<String>,
    axes: Vec<Vector<f64>>,
    bounds: Vec<f64>,
}

impl RadialChart {
    pub fn new(objects: Vector<String>, axes: Vec<Vector<f64>>) -> Result<Self> {
        if axes.is_empty() {
            return Err(ChartError::EmptyRequest);
        }
        let refs: Vec<&Vector<f64>> = axes.iter().collect();
        ensure_same_len(&objects, &refs)?;
        let bounds = axes.iter().map(ensure_axis).collect::<Result<Vec<_>>>()?;
        Ok(Self {
            objects,
            axes,
            bounds,
        })
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Direction of axis `axis` in degrees.
    pub fn axis_angle(&self, axis: usize) -> f64 {
        axis as f64 * 360.0 / self.axes.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialLayout {
    pub center: Point,
    pub radius: f64,
    /// `points[axis][row]`
    pub points: Vec<Vec<Point>>,
    pub legend: LegendPanel,
    pub scene: Scene,
}

impl ChartLayout for RadialLayout {
    fn into_scene(self) -> Scene {
        self.scene
    }
}

impl ChartGeometry for RadialChart {
    type Layout = RadialLayout;

    fn layout(&self, canvas: Canvas) -> RadialLayout {
        let center = canvas.plot_center();
        let radius = canvas.plot_radius(MARGIN);
        let rows = self.objects.len();
        let n = self.axes.len();
        let legend = LegendPanel::new(canvas, rows, 1);
        let mut scene = Scene::new(canvas.width, canvas.height, legend.font_px);
        let caption = canvas.caption_px();

        for (j, bound) in self.bounds.iter().enumerate() {
            let angle = self.axis_angle(j);
            let tip = center.polar(angle, radius);
            scene.line(center, tip, Rgba::BLACK, 1.0);
            for k in 1..=TICKS {
                scene.push(Shape::Circle {
                    center: center.polar(angle, radius * k as f64 / TICKS as f64),
                    radius: TICK_RADIUS,
                    paint: Paint::Stroke {
                        color: Rgba::BLACK,
                        width: 1.0,
                    },
                });
            }
            scene.text(format_number(*bound), tip, caption, Rgba::BLACK);
        }

        let points: Vec<Vec<Point>> = self
            .axes
            .iter()
            .enumerate()
            .map(|(j, axis)| {
                let angle = self.axis_angle(j);
                axis.data()
                    .iter()
                    .map(|v| center.polar(angle, v / self.bounds[j] * radius))
                    .collect()
            })
            .collect();

        for row in 0..rows {
            let color = color_of(row);
            if n > 1 {
                for j in 0..n {
                    scene.line(points[j][row], points[(j + 1) % n][row], color, EDGE_WIDTH);
                }
            }
            for axis in &points {
                scene.push(Shape::Circle {
                    center: axis[row],
                    radius: POINT_RADIUS,
                    paint: Paint::Fill(color),
                });
            }
        }

        legend.draw(&mut scene, rows, |row| vec![self.objects.data()[row].clone()]);

        RadialLayout {
            center,
            radius,
            points,
            legend,
            scene,
        }
    }

    /// Axis-major scan; the first point within reach wins when rows overlap.
    fn hit_test(&self, layout: &RadialLayout, cursor: Point) -> Option<Hit> {
        layout.points.iter().enumerate().find_map(|(j, axis)| {
            axis.iter()
                .position(|&p| distance(p, cursor) <= POINT_RADIUS)
                .map(|row| Hit {
                    row,
                    text: format!(
                        "{}: {}",
                        self.objects.data()[row],
                        format_number(self.axes[j].data()[row])
                    ),
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> RadialChart {
        let objects = Vector::new("all", vec!["a".to_string(), "b".to_string()]);
        RadialChart::new(
            objects,
            vec![
                Vector::new("n1", vec![1.0, 2.0]),
                Vector::new("n2", vec![9.0, 7.0]),
                Vector::new("n3", vec![7.0, 3.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn axes_split_the_circle_evenly() {
        let c = chart();
        assert_eq!(c.axis_angle(0), 0.0);
        assert_eq!(c.axis_angle(1), 120.0);
        assert_eq!(c.axis_angle(2), 240.0);
        assert_eq!(c.bounds(), &[3.0, 10.0, 8.0]);
    }

    #[test]
    fn points_sit_on_their_ray() {
        let c = chart();
        let layout = c.layout(Canvas::SNAPSHOT);
        let p = layout.points[0][1];
        let want = layout.center.polar(0.0, 2.0 / 3.0 * layout.radius);
        assert!(distance(p, want) < 1e-9);
    }

    #[test]
    fn tooltip_reports_value_on_axis() {
        let c = chart();
        let layout = c.layout(Canvas::SNAPSHOT);
        let hit = c.hit_test(&layout, layout.points[1][0]).unwrap();
        assert_eq!(hit.text, "a: 9");
        assert_eq!(c.hit_test(&layout, layout.center.offset(-200.0, 200.0)), None);
    }

    #[test]
    fn no_axes_is_an_empty_request() {
        let objects = Vector::new("all", vec!["a".to_string()]);
        assert!(matches!(
            RadialChart::new(objects, Vec::new()),
            Err(ChartError::EmptyRequest)
        ));
    }
}
