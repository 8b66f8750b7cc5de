//! Chart geometry: turns table columns into backend-neutral [`Scene`]s.
//!
//! - One engine per [`ChartKind`] (pie, histogram, line, scatter, radial, heart)
//! - Shared "nice" axis bounds ([`scale`]) and per-row colors ([`util::color_of`])
//! - Hit-testing that maps a cursor to the row under it, for tooltips
//!
//! Both the live window and the image export call [`Chart::render`]; only the
//! optional cursor differs between them.

pub mod fonts;
pub mod heart;
pub mod histogram;
pub mod legend;
pub mod line;
pub mod pie;
pub mod radial;
pub mod scale;
pub mod scatter;
pub mod scene;
pub mod text;
pub mod types;
pub mod util;

pub use heart::HeartChart;
pub use histogram::Histogram;
pub use line::LineChart;
pub use pie::PieChart;
pub use radial::RadialChart;
pub use scatter::ScatterPlot;
pub use scene::{Paint, Scene, Shape};
pub use types::{Canvas, ChartKind, Hit, Point, Rect, SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
pub use util::{Rgba, color_of};

/// Geometry computed for one canvas size: whatever the hit-test needs, plus the drawing.
pub trait ChartLayout {
    fn into_scene(self) -> Scene;
}

/// One chart engine.
pub trait ChartGeometry {
    type Layout: ChartLayout;

    fn layout(&self, canvas: Canvas) -> Self::Layout;

    /// Row under `cursor`, if any.
    fn hit_test(&self, layout: &Self::Layout, cursor: Point) -> Option<Hit>;
}

/// A validated chart of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Pie(PieChart),
    Histogram(Histogram),
    Line(LineChart),
    Scatter(ScatterPlot),
    Radial(RadialChart),
    Heart(HeartChart),
}

/// Lay out, then draw the tooltip for whatever sits under the cursor on top.
fn compose<G: ChartGeometry>(geometry: &G, canvas: Canvas, cursor: Option<Point>) -> Scene {
    let layout = geometry.layout(canvas);
    let hit = cursor.and_then(|c| geometry.hit_test(&layout, c).map(|h| (c, h)));
    let mut scene = layout.into_scene();
    if let Some((at, hit)) = hit {
        scene.push_tooltip(at, &hit.text);
    }
    scene
}

fn probe<G: ChartGeometry>(geometry: &G, canvas: Canvas, cursor: Point) -> Option<Hit> {
    geometry.hit_test(&geometry.layout(canvas), cursor)
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Pie(_) => ChartKind::PieChart,
            Chart::Histogram(_) => ChartKind::Histogram,
            Chart::Line(_) => ChartKind::LineChart,
            Chart::Scatter(_) => ChartKind::ScatterPlot,
            Chart::Radial(_) => ChartKind::RadialChart,
            Chart::Heart(_) => ChartKind::HeartChart,
        }
    }

    /// Full frame for `canvas`; with a cursor over a mark, its tooltip is drawn last.
    pub fn render(&self, canvas: Canvas, cursor: Option<Point>) -> Scene {
        match self {
            Chart::Pie(g) => compose(g, canvas, cursor),
            Chart::Histogram(g) => compose(g, canvas, cursor),
            Chart::Line(g) => compose(g, canvas, cursor),
            Chart::Scatter(g) => compose(g, canvas, cursor),
            Chart::Radial(g) => compose(g, canvas, cursor),
            Chart::Heart(g) => compose(g, canvas, cursor),
        }
    }

    pub fn hit_test(&self, canvas: Canvas, cursor: Point) -> Option<Hit> {
        match self {
            Chart::Pie(g) => probe(g, canvas, cursor),
            Chart::Histogram(g) => probe(g, canvas, cursor),
            Chart::Line(g) => probe(g, canvas, cursor),
            Chart::Scatter(g) => probe(g, canvas, cursor),
            Chart::Radial(g) => probe(g, canvas, cursor),
            Chart::Heart(g) => probe(g, canvas, cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vector;

    fn pie() -> Chart {
        let objects = Vector::new("all", vec!["a".to_string(), "b".to_string()]);
        Chart::Pie(PieChart::new(objects, Vector::new("n", vec![1.0, 9.0])).unwrap())
    }

    #[test]
    fn cursor_only_adds_tooltip_layer() {
        let chart = pie();
        let plain = chart.render(Canvas::SNAPSHOT, None);
        let center = Canvas::SNAPSHOT.plot_center();
        // 180° lies in the second sector
        let hovered = chart.render(Canvas::SNAPSHOT, Some(center.polar(180.0, 50.0)));
        assert_eq!(hovered.shapes[..plain.shapes.len()], plain.shapes[..]);
        assert_eq!(hovered.texts().last(), Some("b"));
    }

    #[test]
    fn cursor_off_chart_draws_nothing_extra() {
        let chart = pie();
        let plain = chart.render(Canvas::SNAPSHOT, None);
        let off = chart.render(Canvas::SNAPSHOT, Some(Point::new(1.0, 1.0)));
        assert_eq!(plain, off);
        assert_eq!(chart.hit_test(Canvas::SNAPSHOT, Point::new(1.0, 1.0)), None);
    }
}
