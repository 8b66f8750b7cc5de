//! Snapshot mode: one fixed-size offscreen render, encoded and written in one go.

use std::path::Path;

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use crate::error::{ChartError, Result};
use crate::storage::write_atomic;
use crate::viz::types::{Canvas, Point, SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
use crate::viz::{Chart, Scene};
use crate::viz_plotters_adapter::draw_scene;

/// Encoded output format, picked from the destination extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

fn snapshot_scene(chart: &Chart, cursor: Option<Point>) -> Scene {
    chart.render(Canvas::SNAPSHOT, cursor)
}

/// Raw RGB8 pixels of the 800×600 snapshot.
pub fn render_rgb(chart: &Chart, cursor: Option<Point>) -> Result<Vec<u8>> {
    let scene = snapshot_scene(chart, cursor);
    let mut buf = vec![0u8; (SNAPSHOT_WIDTH * SNAPSHOT_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(format!("{e:?}")))?;
        draw_scene(&root, &scene)?;
        root.present()
            .map_err(|e| ChartError::Render(format!("{e:?}")))?;
    }
    Ok(buf)
}

/// PNG bytes of the snapshot. `cursor` is `None` for exports; tests may pass one.
pub fn render_png(chart: &Chart, cursor: Option<Point>) -> Result<Vec<u8>> {
    let rgb = render_rgb(chart, cursor)?;
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            &rgb,
            SNAPSHOT_WIDTH,
            SNAPSHOT_HEIGHT,
            image::ColorType::Rgb8,
        )
        .map_err(|e| ChartError::Encode(e.to_string()))?;
    Ok(png)
}

/// SVG document of the snapshot.
pub fn render_svg(chart: &Chart, cursor: Option<Point>) -> Result<String> {
    let scene = snapshot_scene(chart, cursor);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(format!("{e:?}")))?;
        draw_scene(&root, &scene)?;
        root.present()
            .map_err(|e| ChartError::Render(format!("{e:?}")))?;
    }
    Ok(svg)
}

/// Encode `chart` fully, then hand the bytes to the file writer once.
pub fn save<P: AsRef<Path>>(chart: &Chart, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = match ImageFormat::from_path(path) {
        ImageFormat::Png => render_png(chart, None)?,
        ImageFormat::Svg => render_svg(chart, None)?.into_bytes(),
    };
    write_atomic(path, &bytes)?;
    log::info!("saved {}", path.display());
    Ok(())
}
