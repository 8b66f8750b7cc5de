//! Legend panel: the outlined right quarter of the canvas listing every mark.
//!
//! Each row owns `lines_per_row` text lines of the row's color; line `k` of row `i`
//! sits on the baseline `top + (lines_per_row * i + k + 1) * font_px`.

use super::scene::{Paint, Scene, Shape};
use super::text::truncate_to_width;
use super::types::{Canvas, Point, Rect};
use super::util::color_of;

const MIN_FONT_PX: f64 = 6.0;
const MAX_FONT_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendPanel {
    pub rect: Rect,
    pub font_px: f64,
    pub lines_per_row: usize,
}

impl LegendPanel {
    /// Panel for `rows` entries of `lines_per_row` lines each.
    pub fn new(canvas: Canvas, rows: usize, lines_per_row: usize) -> Self {
        let rect = Rect::new(canvas.width * 3.0 / 4.0, 1.0, canvas.width, canvas.height);
        let slots = (rows.max(1) * lines_per_row.max(1)) as f64;
        let font_px = (canvas.height / slots - 1.0).clamp(MIN_FONT_PX, MAX_FONT_PX);
        Self {
            rect,
            font_px,
            lines_per_row: lines_per_row.max(1),
        }
    }

    /// Baseline of line `line` of entry `row`.
    pub fn baseline(&self, row: usize, line: usize) -> Point {
        let slot = (self.lines_per_row * row + line + 1) as f64;
        Point::new(self.rect.left, self.rect.top + slot * self.font_px)
    }

    /// Outline plus one entry per row; `lines(row)` yields that row's text lines.
    pub fn draw<F>(&self, scene: &mut Scene, rows: usize, mut lines: F)
    where
        F: FnMut(usize) -> Vec<String>,
    {
        scene.push(Shape::Rect {
            rect: self.rect,
            paint: Paint::OUTLINE,
        });
        let max_px = self.rect.width() - 4.0;
        for row in 0..rows {
            let color = color_of(row);
            for (k, line) in lines(row).into_iter().take(self.lines_per_row).enumerate() {
                let text = truncate_to_width(&line, self.font_px, max_px);
                scene.text(text, self.baseline(row, k).offset(2.0, 0.0), self.font_px, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_follows_row_count() {
        let p = LegendPanel::new(Canvas::SNAPSHOT, 10, 2);
        assert_eq!(p.font_px, 29.0);
        assert_eq!(p.rect.left, 600.0);
        // few rows: clamped
        assert_eq!(LegendPanel::new(Canvas::SNAPSHOT, 1, 1).font_px, MAX_FONT_PX);
    }

    #[test]
    fn baselines_step_by_font() {
        let p = LegendPanel::new(Canvas::SNAPSHOT, 10, 2);
        assert_eq!(p.baseline(0, 0).y, 1.0 + 29.0);
        assert_eq!(p.baseline(1, 1).y, 1.0 + 4.0 * 29.0);
    }
}
