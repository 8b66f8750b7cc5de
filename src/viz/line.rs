//! The "line chart": one horizontal bar per row, stacked top to bottom.

use super::histogram::{GRID, MARGIN};
use super::legend::LegendPanel;
use super::scale::{TICKS, ensure_axis, tick_values};
use super::scene::{Paint, Scene, Shape};
use super::types::{Canvas, Hit, Point, Rect};
use super::util::{Rgba, color_of, format_number};
use super::{ChartGeometry, ChartLayout};
use crate::error::Result;
use crate::models::{Mark, Vector, ensure_same_len, marks};

/// Bars start this far right of the axis and sit up to this far above their band.
const INSET: f64 = 3.0;
const RAISE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    objects: Vector<String>,
    values: Vector<f64>,
    bound: f64,
}

impl LineChart {
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
pub struct LineLayout {
    pub frame: Rect,
    pub bars: Vec<Rect>,
    pub bound: f64,
    pub legend: LegendPanel,
    pub scene: Scene,
}

impl ChartLayout for LineLayout {
    fn into_scene(self) -> Scene {
        self.scene
    }
}

fn bar_rect(frame: Rect, i: usize, count: usize, value: f64, bound: f64) -> Rect {
    let h = frame.height() / count as f64;
    let left = frame.left + INSET;
    // never more than the band gap, so the first bar stays inside the frame
    let raise = RAISE.min(h / 10.0);
    Rect::new(
        left,
        frame.top + h * i as f64 + (h / 10.0 - raise),
        left + frame.width() * value / bound,
        frame.top + h * (i + 1) as f64 - raise,
    )
}

impl ChartGeometry for LineChart {
    type Layout = LineLayout;

    fn layout(&self, canvas: Canvas) -> LineLayout {
        let frame = canvas.plot_frame(MARGIN);
        let rows = self.objects.len();
        let legend = LegendPanel::new(canvas, rows, 2);
        let mut scene = Scene::new(canvas.width, canvas.height, legend.font_px);
        let caption = canvas.caption_px();

        let ticks = tick_values(self.bound);
        for i in 0..=TICKS {
            let x = frame.left + frame.width() * i as f64 / TICKS as f64;
            scene.line(Point::new(x, frame.top), Point::new(x, frame.bottom), GRID, 1.0);
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
        // captions under the frame, left to right
        for (i, tick) in ticks.iter().enumerate() {
            let x = frame.left + frame.width() * i as f64 / TICKS as f64;
            scene.text(
                format_number(*tick),
                Point::new(x - caption / 3.0, frame.bottom + caption + 2.0),
                caption,
                Rgba::BLACK,
            );
        }

        let entries: Vec<Mark> = marks(&self.objects, &self.values).collect();
        legend.draw(&mut scene, rows, |row| {
            vec![entries[row].label.to_string(), format_number(entries[row].value)]
        });

        LineLayout {
            frame,
            bars,
            bound: self.bound,
            legend,
            scene,
        }
    }

    fn hit_test(&self, layout: &LineLayout, cursor: Point) -> Option<Hit> {
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

    fn chart(values: Vec<f64>) -> LineChart {
        let objects = (0..values.len()).map(|i| format!("r{i}")).collect();
        LineChart::new(Vector::new("all", objects), Vector::new("n", values)).unwrap()
    }

    #[test]
    fn bars_grow_to_the_right() {
        let layout = chart(vec![2.0, 8.0]).layout(Canvas::SNAPSHOT);
        let frame = layout.frame;
        assert_eq!(layout.bound, 9.0);
        for bar in &layout.bars {
            assert_eq!(bar.left, frame.left + INSET);
        }
        let w0 = layout.bars[0].width();
        let w1 = layout.bars[1].width();
        assert!((w0 - frame.width() * 2.0 / 9.0).abs() < 1e-9);
        assert!((w1 - frame.width() * 8.0 / 9.0).abs() < 1e-9);
        assert!(layout.bars[0].bottom <= layout.bars[1].top);
    }

    #[test]
    fn hit_test_uses_band_and_extent() {
        let c = chart(vec![2.0, 8.0]);
        let layout = c.layout(Canvas::SNAPSHOT);
        let b0 = layout.bars[0];
        assert_eq!(c.hit_test(&layout, b0.center()).map(|h| h.text), Some("r0".to_string()));
        // right of the short bar, still in its band
        let past = Point::new(b0.right + 5.0, b0.center().y);
        assert_eq!(c.hit_test(&layout, past), None);
    }

    #[test]
    fn many_rows_stay_inside_the_frame() {
        let layout = chart(vec![1.0; 80]).layout(Canvas::SNAPSHOT);
        let frame = layout.frame;
        for bar in &layout.bars {
            assert!(bar.top >= frame.top);
            assert!(bar.bottom <= frame.bottom);
            assert!(bar.height() > 0.0);
        }
        for pair in layout.bars.windows(2) {
            assert!(pair[0].bottom <= pair[1].top);
        }
    }
}
