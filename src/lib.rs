//! tabplot
//!
//! Render a delimited table as a chart, live in a window or as a fixed-size
//! PNG/SVG snapshot. Pairs with the `tabplot` CLI.
//!
//! ### Features
//! - Pie, histogram, horizontal-bar "line" chart, scatter plot, radial (spider) chart
//! - "Nice" axis bounds and stable per-row colors shared by window and snapshot
//! - Tooltips: the row under the cursor is reported in the window
//!
//! ### Example
//! ```no_run
//! use tabplot::{request, snapshot, storage, viz::ChartKind};
//!
//! let table = storage::load_table("data.csv", ";")?;
//! for req in request::build_requests(&table, ChartKind::PieChart, &[0], None) {
//!     snapshot::save(&req?.chart, "pie.png")?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod error;
pub mod models;
pub mod request;
pub mod snapshot;
pub mod storage;
pub mod viz;
pub mod viz_plotters_adapter;
pub mod window;

pub use error::{ChartError, ErrorClass};
pub use models::{Table, Vector};
pub use viz::{Chart, ChartKind};
