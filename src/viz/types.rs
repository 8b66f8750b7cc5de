//! Public types and constants for the visualization module.

use clap::ValueEnum;

/// Chart kinds selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Pie chart over one column (one chart per column).
    #[value(alias = "PIE_CHART")]
    PieChart,
    /// Vertical bars over one column (one chart per column).
    #[value(alias = "HISTOGRAM")]
    Histogram,
    /// Horizontal bars over one column (one chart per column).
    #[value(alias = "LINE_CHART")]
    LineChart,
    /// Two columns plotted against each other.
    #[value(alias = "SCATTER_PLOT")]
    ScatterPlot,
    /// Spider chart, one axis per column.
    #[value(alias = "RADIAL_CHART")]
    RadialChart,
    /// Static decorative heart; ignores the data.
    #[value(alias = "HEART_CHART")]
    HeartChart,
}

impl ChartKind {
    pub fn needs_columns(self) -> bool {
        !matches!(self, ChartKind::HeartChart)
    }
}

/// Fixed resolution of every exported still image.
pub const SNAPSHOT_WIDTH: u32 = 800;
pub const SNAPSHOT_HEIGHT: u32 = 600;

/// Pixel position on a canvas, origin top-left, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Point at `distance` from `self` along `degrees` (clockwise on screen, 0° = +x).
    pub fn polar(self, degrees: f64, distance: f64) -> Self {
        let rad = degrees.to_radians();
        Self::new(self.x + distance * rad.cos(), self.y + distance * rad.sin())
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Inclusive bounds check on both axes.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Size of the surface a chart is laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const SNAPSHOT: Canvas = Canvas {
        width: SNAPSHOT_WIDTH as f64,
        height: SNAPSHOT_HEIGHT as f64,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Center of the plot area; the right quarter is reserved for the legend.
    pub fn plot_center(&self) -> Point {
        Point::new(self.width * 3.0 / 8.0, self.height / 2.0)
    }

    /// Radius of the plot area around [`Canvas::plot_center`], never negative.
    pub fn plot_radius(&self, margin: f64) -> f64 {
        let c = self.plot_center();
        (c.x.min(c.y) - margin).max(1.0)
    }

    /// Square plot frame of side `2 * plot_radius(margin)`.
    pub fn plot_frame(&self, margin: f64) -> Rect {
        let c = self.plot_center();
        let r = self.plot_radius(margin);
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    /// Size for axis tick captions.
    pub fn caption_px(&self) -> f64 {
        (self.height / 40.0).clamp(9.0, 16.0)
    }
}

/// Result of a successful hit-test: the row under the cursor and its tooltip text.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub row: usize,
    pub text: String,
}
