use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tabplot::app::{self, RunOptions};
use tabplot::viz::{ChartKind, fonts};

#[derive(Parser, Debug)]
#[command(
    name = "tabplot",
    version,
    about = "Render a delimited table as a pie, bar, scatter or radial chart"
)]
struct Cli {
    /// Input table (.csv); first row holds the headings, first column the row labels.
    #[arg(short, long)]
    input: PathBuf,
    /// Single-character cell delimiter.
    #[arg(short, long, default_value = ";")]
    delimiter: String,
    /// Save snapshots using this base name (`out.png` → `out_0.png`, ...; `.svg` for SVG).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Chart kind.
    #[arg(short, long, value_enum, default_value_t = ChartKind::PieChart)]
    mode: ChartKind,
    /// Data columns to plot, 0-based (the label column is not counted).
    columns: Vec<usize>,
    /// Only write snapshots, don't open a window.
    #[arg(long, default_value_t = false)]
    no_window: bool,
    /// TTF font for snapshot text.
    #[arg(long, env = "TABPLOT_FONT")]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.no_window && cli.output.is_none() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "--no-window needs --output, otherwise nothing is produced",
            )
            .exit();
    }
    if let Some(font) = &cli.font {
        fonts::set_font_path(font);
    }

    log::info!("tabplot started");
    let summary = app::run(&RunOptions {
        input: cli.input,
        delimiter: cli.delimiter,
        output: cli.output,
        mode: cli.mode,
        columns: cli.columns,
        window: !cli.no_window,
    })?;
    log::info!(
        "tabplot completed: {} saved, {} skipped",
        summary.saved.len(),
        summary.skipped
    );
    Ok(())
}
