//! Decorative heart. Draws the same picture whatever the table holds.

use super::scene::{Scene, Shape};
use super::types::{Canvas, Hit, Point};
use super::util::Rgba;
use super::{ChartGeometry, ChartLayout};

const SEGMENTS: usize = 180;
/// Half the height of the unit curve below, for scaling to the canvas.
const CURVE_EXTENT: f64 = 17.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeartChart;

/// Outline of the classic heart curve around `center`, top lobes up.
pub fn heart_outline(center: Point, size: f64) -> Vec<Point> {
    let scale = size / CURVE_EXTENT;
    (0..SEGMENTS)
        .map(|i| {
            let t = i as f64 / SEGMENTS as f64 * std::f64::consts::TAU;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            Point::new(center.x + x * scale, center.y - y * scale)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeartLayout {
    pub scene: Scene,
}

impl ChartLayout for HeartLayout {
    fn into_scene(self) -> Scene {
        self.scene
    }
}

impl ChartGeometry for HeartChart {
    type Layout = HeartLayout;

    fn layout(&self, canvas: Canvas) -> HeartLayout {
        let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
        let size = canvas.width.min(canvas.height) / 2.0 - 10.0;
        let mut scene = Scene::new(canvas.width, canvas.height, canvas.caption_px());
        scene.push(Shape::Polygon {
            points: heart_outline(center, size.max(1.0)),
            color: Rgba::HEART_RED,
        });
        HeartLayout { scene }
    }

    fn hit_test(&self, _layout: &HeartLayout, _cursor: Point) -> Option<Hit> {
        None
    }
}
