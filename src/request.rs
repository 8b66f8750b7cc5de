//! Turning "chart kind + column list" into independent, validated chart requests.

use std::path::{Path, PathBuf};

use crate::error::{ChartError, Result};
use crate::models::Table;
use crate::snapshot::ImageFormat;
use crate::viz::{
    Chart, ChartKind, HeartChart, Histogram, LineChart, PieChart, RadialChart, ScatterPlot,
};

/// One chart to show and, optionally, save.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    /// Window title / side panel label.
    pub title: String,
    pub chart: Chart,
    pub output: Option<PathBuf>,
}

/// `base` without its extension, plus `suffix`, plus the format's extension:
/// `out.png` + `_2_3` → `out_2_3.png`.
pub fn output_path(base: &Path, suffix: &str, format: ImageFormat) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{stem}{suffix}.{}", format.extension());
    match base.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

fn suffix_of(columns: &[usize]) -> String {
    columns.iter().map(|c| format!("_{c}")).collect()
}

fn check_columns(table: &Table, columns: &[usize]) -> Result<()> {
    match columns.iter().find(|&&c| c >= table.columns()) {
        Some(&column) => Err(ChartError::ColumnOutOfRange {
            column,
            columns: table.columns(),
        }),
        None => Ok(()),
    }
}

fn single_column(table: &Table, kind: ChartKind, column: usize) -> Result<(String, Chart)> {
    let values = table.vector(column)?;
    let title = values.heading().to_string();
    let objects = table.objects();
    let chart = match kind {
        ChartKind::PieChart => Chart::Pie(PieChart::new(objects, values)?),
        ChartKind::Histogram => Chart::Histogram(Histogram::new(objects, values)?),
        _ => Chart::Line(LineChart::new(objects, values)?),
    };
    Ok((title, chart))
}

fn multi_column(table: &Table, kind: ChartKind, columns: &[usize]) -> Result<Chart> {
    let objects = table.objects();
    match kind {
        ChartKind::ScatterPlot => {
            let [a, b] = columns else {
                return Err(ChartError::ScatterColumns(columns.len()));
            };
            Ok(Chart::Scatter(ScatterPlot::new(
                objects,
                table.vector(*a)?,
                table.vector(*b)?,
            )?))
        }
        _ => {
            let axes = columns
                .iter()
                .map(|&c| table.vector(c))
                .collect::<Result<Vec<_>>>()?;
            Ok(Chart::Radial(RadialChart::new(objects, axes)?))
        }
    }
}

/// Build every request one CLI invocation asks for. Each entry fails or succeeds on its own.
///
/// Pie, histogram and line charts get one request per column; scatter and radial
/// charts one request over all columns; the heart ignores the columns.
pub fn build_requests(
    table: &Table,
    kind: ChartKind,
    columns: &[usize],
    output: Option<&Path>,
) -> Vec<Result<ChartRequest>> {
    let format = output.map(ImageFormat::from_path).unwrap_or(ImageFormat::Png);
    let target = |suffix: &str| output.map(|base| output_path(base, suffix, format));

    if !kind.needs_columns() {
        return vec![Ok(ChartRequest {
            title: "heart".to_string(),
            chart: Chart::Heart(HeartChart),
            output: target(""),
        })];
    }
    if columns.is_empty() {
        return vec![Err(ChartError::EmptyRequest)];
    }

    match kind {
        // an out-of-range column only fails its own request
        ChartKind::PieChart | ChartKind::Histogram | ChartKind::LineChart => columns
            .iter()
            .map(|&column| {
                let (title, chart) = single_column(table, kind, column)?;
                Ok(ChartRequest {
                    title,
                    chart,
                    output: target(&suffix_of(&[column])),
                })
            })
            .collect(),
        _ => vec![
            check_columns(table, columns)
                .and_then(|()| multi_column(table, kind, columns))
                .map(|chart| ChartRequest {
                    title: table.objects().heading().to_string(),
                    chart,
                    output: target(&suffix_of(columns)),
                }),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::parse_table;

    fn table() -> Table {
        parse_table("all;n1;n2;n3\na;1;9;0\nb;2;7;0\n".as_bytes(), ";").unwrap()
    }

    #[test]
    fn output_names_append_columns() {
        let base = Path::new("out/chart.png");
        assert_eq!(output_path(base, "_0", ImageFormat::Png), PathBuf::from("out/chart_0.png"));
        assert_eq!(
            output_path(Path::new("chart"), "_2_3", ImageFormat::Png),
            PathBuf::from("chart_2_3.png")
        );
        assert_eq!(
            output_path(Path::new("c.svg"), "_1", ImageFormat::Svg),
            PathBuf::from("c_1.svg")
        );
    }

    #[test]
    fn one_request_per_column_and_failures_stay_local() {
        let reqs = build_requests(
            &table(),
            ChartKind::Histogram,
            &[0, 2, 1],
            Some(Path::new("o.png")),
        );
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs[0].as_ref().unwrap().output, Some(PathBuf::from("o_0.png")));
        assert_eq!(reqs[0].as_ref().unwrap().title, "n1");
        // all-zero column
        assert!(matches!(reqs[1], Err(ChartError::DegenerateAxis(_))));
        assert!(reqs[2].is_ok());
    }

    #[test]
    fn request_level_errors() {
        let t = table();
        let empty = build_requests(&t, ChartKind::PieChart, &[], None);
        assert!(matches!(empty[0], Err(ChartError::EmptyRequest)));
        let out = build_requests(&t, ChartKind::PieChart, &[0, 3], None);
        assert!(out[0].is_ok());
        assert!(matches!(out[1], Err(ChartError::ColumnOutOfRange { column: 3, columns: 3 })));
        let radial = build_requests(&t, ChartKind::RadialChart, &[0, 5], None);
        assert!(matches!(radial[0], Err(ChartError::ColumnOutOfRange { column: 5, .. })));
        let scatter = build_requests(&t, ChartKind::ScatterPlot, &[0, 1, 2], None);
        assert!(matches!(scatter[0], Err(ChartError::ScatterColumns(3))));
    }

    #[test]
    fn scatter_and_heart_are_single_requests() {
        let t = table();
        let s = build_requests(&t, ChartKind::ScatterPlot, &[0, 1], Some(Path::new("s.png")));
        let s = s[0].as_ref().unwrap();
        assert_eq!(s.title, "all");
        assert_eq!(s.output, Some(PathBuf::from("s_0_1.png")));
        let h = build_requests(&t, ChartKind::HeartChart, &[], Some(Path::new("h.png")));
        assert_eq!(h[0].as_ref().unwrap().output, Some(PathBuf::from("h.png")));
    }
}
