//! Pie chart: sector `i` spans `value[i] / sum * 360°`, laid out clockwise from 0° in data order.

use super::legend::LegendPanel;
use super::scene::{Paint, Scene, Shape};
use super::types::{Canvas, Hit, Point};
use super::util::{Rgba, color_of, distance};
use super::{ChartGeometry, ChartLayout};
use crate::error::{ChartError, Result};
use crate::models::{Vector, ensure_same_len};

const MARGIN: f64 = 5.0;
const PERCENT_EPS: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    objects: Vector<String>,
    values: Vector<f64>,
}

impl PieChart {
    pub fn new(objects: Vector<String>, values: Vector<f64>) -> Result<Self> {
        ensure_same_len(&objects, &[&values])?;
        if !(values.sum() > 0.0) {
            return Err(ChartError::ZeroSum(values.heading().to_string()));
        }
        Ok(Self { objects, values })
    }

    pub fn values(&self) -> &Vector<f64> {
        &self.values
    }

    /// Integer percentage shown in the legend (truncated, like the sector share).
    pub fn percent(&self, row: usize) -> i64 {
        let v = self.values.data()[row];
        // 0.57 * 100.0 is 56.99999999999999
        (v * 100.0 / self.values.sum() + PERCENT_EPS).floor() as i64
    }
}

/// `(start, sweep)` in degrees per value; sweeps add up to 360.
pub fn sector_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let sum: f64 = values.iter().sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = v / sum * 360.0;
            let s = (start, sweep);
            start += sweep;
            s
        })
        .collect()
}

/// Cumulative end angle of each sector, the last pinned to exactly 360°.
fn sector_ends(sectors: &[(f64, f64)]) -> Vec<f64> {
    let mut ends: Vec<f64> = sectors.iter().map(|(s, w)| s + w).collect();
    if let Some(last) = ends.last_mut() {
        *last = 360.0;
    }
    ends
}

/// Sector under `cursor`, if the cursor is inside the circle.
///
/// The cursor angle is measured in its quadrant (quadrants end at 90°, 180°, 270°,
/// 360°); the first sector whose cumulative end lies past the quadrant start and
/// either reaches the quadrant end or exceeds the cursor angle wins. Within one
/// quadrant this is the same ordering a tangent comparison gives.
pub fn sector_at(center: Point, radius: f64, ends: &[f64], cursor: Point) -> Option<usize> {
    if distance(center, cursor) >= radius {
        return None;
    }
    let angle = (cursor.y - center.y)
        .atan2(cursor.x - center.x)
        .to_degrees()
        .rem_euclid(360.0);
    let quadrant = ((angle / 90.0).floor() as usize).min(3);
    let lo = quadrant as f64 * 90.0;
    let hi = lo + 90.0;
    ends.iter()
        .position(|&end| end > lo && (end >= hi || angle < end))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub center: Point,
    pub radius: f64,
    pub sectors: Vec<(f64, f64)>,
    pub legend: LegendPanel,
    pub scene: Scene,
}

impl ChartLayout for PieLayout {
    fn into_scene(self) -> Scene {
        self.scene
    }
}

impl ChartGeometry for PieChart {
    type Layout = PieLayout;

    fn layout(&self, canvas: Canvas) -> PieLayout {
        let center = canvas.plot_center();
        let radius = canvas.plot_radius(MARGIN);
        let sectors = sector_angles(self.values.data());
        let rows = self.objects.len();
        let legend = LegendPanel::new(canvas, rows, 2);
        let mut scene = Scene::new(canvas.width, canvas.height, legend.font_px);

        for (i, &(start_deg, sweep_deg)) in sectors.iter().enumerate() {
            scene.push(Shape::Sector {
                center,
                radius,
                start_deg,
                sweep_deg,
                color: color_of(i),
            });
        }
        for &(start, _) in &sectors {
            scene.line(center, center.polar(start, radius), Rgba::BLACK, 2.5);
        }
        scene.push(Shape::Circle {
            center,
            radius,
            paint: Paint::OUTLINE,
        });

        legend.draw(&mut scene, rows, |row| {
            vec![
                self.objects.data()[row].clone(),
                format!("{}%", self.percent(row)),
            ]
        });

        PieLayout {
            center,
            radius,
            sectors,
            legend,
            scene,
        }
    }

    fn hit_test(&self, layout: &PieLayout, cursor: Point) -> Option<Hit> {
        let ends = sector_ends(&layout.sectors);
        sector_at(layout.center, layout.radius, &ends, cursor).map(|row| Hit {
            row,
            text: self.objects.data()[row].clone(),
        })
    }
}
