//! Vertical bars, left to right in data order, bottom-aligned on a shared axis.

use super::legend::LegendPanel;
use super::scale::{TICKS, ensure_axis, tick_values};
use super::scene::{Paint, Scene, Shape};
use super::types::{Canvas, Hit, Point, Rect};
use super::util::{Rgba, color_of, format_number};
use super::{ChartGeometry, ChartLayout};
use crate::error::Result;
use crate::models::{Mark, Vector, ensure_same_len, marks};

pub(crate) const MARGIN: f64 = 25.0;
pub(crate) const GRID: Rgba = Rgba::opaque(190, 190, 190);
/// Bars sit this far above their nominal position so the frame line stays visible.
const LIFT: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    objects: Vector<String>,
    values: Vector<f64>,
    bound: f64,
}

impl Histogram {
    pub fn new(objects: Vector<String>, values: Vector<f64>) -> Result<Self> {
        ensure_same_len(&objects, &[&values])?;
        let bound = ensure_axis(&values)?;
        Ok(Self {
            objects,
            values,
            bound,
        })
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramLayout {
    pub frame: Rect,
    pub bars: Vec<Rect>,
    pub bound: f64,
    pub legend: LegendPanel,
    pub scene: Scene,
}

impl ChartLayout for HistogramLayout {
    fn into_scene(self) -> Scene {
        self.scene
    }
}

/// Bar `i` of `count`: width `frame.width / count` minus a leading gap of a tenth of it.
fn bar_rect(frame: Rect, i: usize, count: usize, value: f64, bound: f64) -> Rect {
    let w = frame.width() / count as f64;
    let top = frame.top + frame.height() * (1.0 - value / bound) - LIFT;
    Rect::new(
        frame.left + w / 10.0 + w * i as f64,
        top,
        frame.left + w * (i + 1) as f64,
        frame.bottom - LIFT,
    )
}

impl ChartGeometry for Histogram {
    type Layout = HistogramLayout;

    fn layout(&self, canvas: Canvas) -> HistogramLayout {
        let frame = canvas.plot_frame(MARGIN);
        let rows = self.objects.len();
        let legend = LegendPanel::new(canvas, rows, 2);
        let mut scene = Scene::new(canvas.width, canvas.height, legend.font_px);
        let caption = canvas.caption_px();

        // gridline i is at bound * (10 - i) / 10, counted from the top
        let ticks = tick_values(self.bound);
        for i in 0..=TICKS {
            let y = frame.top + frame.height() * i as f64 / TICKS as f64;
            scene.line(Point::new(frame.left, y), Point::new(frame.right, y), GRID, 1.0);
        }

        let bars: Vec<Rect> = self
            .values
            .data()
            .iter()
            .enumerate()
            .map(|(i, &v)| bar_rect(frame, i, rows, v, self.bound))
            .collect();
        for (i, bar) in bars.iter().enumerate() {
            scene.push(Shape::Rect {
                rect: *bar,
                paint: Paint::Fill(color_of(i)),
            });
        }

        scene.line(
            Point::new(frame.left, frame.top),
            Point::new(frame.left, frame.bottom),
            Rgba::BLACK,
            1.5,
        );
        scene.line(
            Point::new(frame.left, frame.bottom),
            Point::new(frame.right, frame.bottom),
            Rgba::BLACK,
            1.5,
        );
        for i in 0..=TICKS {
            let y = frame.top + frame.height() * i as f64 / TICKS as f64;
            scene.text(
                format_number(ticks[TICKS - i]),
                Point::new(frame.left + 2.0, y - 2.0),
                caption,
                Rgba::BLACK,
            );
        }

        let entries: Vec<Mark> = marks(&self.objects, &self.values).collect();
        legend.draw(&mut scene, rows, |row| {
            vec![entries[row].label.to_string(), format_number(entries[row].value)]
        });

        HistogramLayout {
            frame,
            bars,
            bound: self.bound,
            legend,
            scene,
        }
    }

    fn hit_test(&self, layout: &HistogramLayout, cursor: Point) -> Option<Hit> {
        layout
            .bars
            .iter()
            .position(|bar| bar.contains(cursor))
            .map(|row| Hit {
                row,
                text: self.objects.data()[row].clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(values: Vec<f64>) -> Histogram {
        let objects = (0..values.len()).map(|i| format!("r{i}")).collect();
        Histogram::new(Vector::new("all", objects), Vector::new("n", values)).unwrap()
    }

    #[test]
    fn bars_tile_the_frame_left_to_right() {
        let layout = chart(vec![1.0, 2.0, 3.0, 4.0, 5.0]).layout(Canvas::SNAPSHOT);
        let frame = layout.frame;
        assert_eq!(layout.bound, 6.0);
        let w = frame.width() / 5.0;
        for (i, bar) in layout.bars.iter().enumerate() {
            assert!((bar.right - (frame.left + w * (i + 1) as f64)).abs() < 1e-9);
            assert!((bar.width() - w * 0.9).abs() < 1e-9);
            assert_eq!(bar.bottom, frame.bottom - LIFT);
        }
    }

    #[test]
    fn taller_value_gives_taller_bar() {
        let layout = chart(vec![3.0, 1.0, 7.0]).layout(Canvas::SNAPSHOT);
        let h: Vec<f64> = layout.bars.iter().map(Rect::height).collect();
        assert!(h[1] < h[0] && h[0] < h[2]);
    }

    #[test]
    fn hit_inside_bar_only() {
        let c = chart(vec![3.0, 1.0, 7.0]);
        let layout = c.layout(Canvas::SNAPSHOT);
        let inside = layout.bars[2].center();
        assert_eq!(c.hit_test(&layout, inside).map(|h| h.row), Some(2));
        // short bar 1 next to tall bar 2
        let above = Point::new(layout.bars[1].center().x, layout.bars[1].top - 1.0);
        assert_eq!(c.hit_test(&layout, above), None);
    }
}
