//! One program run: load the table, build the requests, save and/or show them.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use crate::request::{ChartRequest, build_requests};
use crate::viz::ChartKind;
use crate::{snapshot, storage, window};

/// Everything a run needs, already parsed from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub delimiter: String,
    /// Base name for snapshots; `None` writes no files.
    pub output: Option<PathBuf>,
    pub mode: ChartKind,
    pub columns: Vec<usize>,
    pub window: bool,
}

/// How the requests of one run ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: Vec<PathBuf>,
    pub skipped: usize,
    /// Charts that made it to the window (or would have, with `window: false`).
    pub shown: usize,
}

/// Save every valid request, then hand them to the window if asked.
///
/// A failing request is logged and skipped. The run itself fails when the input
/// can't be loaded or when no request succeeded.
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let table = storage::load_table(&opts.input, &opts.delimiter)
        .with_context(|| format!("failed to load {}", opts.input.display()))?;

    let mut summary = RunSummary::default();
    let mut charts: Vec<ChartRequest> = Vec::new();
    for request in build_requests(&table, opts.mode, &opts.columns, opts.output.as_deref()) {
        let request = match request {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping {:?} request ({:?} error): {e}", opts.mode, e.class());
                summary.skipped += 1;
                continue;
            }
        };
        if let Some(path) = &request.output {
            match snapshot::save(&request.chart, path) {
                Ok(()) => summary.saved.push(path.clone()),
                Err(e) => {
                    warn!("skipping {} ({:?} error): {e}", path.display(), e.class());
                    summary.skipped += 1;
                    continue;
                }
            }
        }
        charts.push(request);
    }
    summary.shown = charts.len();

    if charts.is_empty() {
        bail!("no chart could be produced ({} request(s) failed)", summary.skipped);
    }
    if opts.window {
        info!("opening window with {} chart(s)", charts.len());
        window::show(charts)?;
    }
    Ok(summary)
}
