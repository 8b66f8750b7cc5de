//! Interactive mode: an `eframe` window that redraws the active chart every frame.
//!
//! The hover position is read once per frame and passed to [`Chart::render`] as
//! explicit context; there is no cursor state outside the frame. A position that is
//! one frame stale is harmless here.

use anyhow::{Result, anyhow};
use egui::{Align2, Color32, FontId, Pos2, Stroke};

use crate::request::ChartRequest;
use crate::snapshot;
use crate::viz::scene::{Paint, Scene, Shape, sector_points};
use crate::viz::types::{Canvas, Point};
use crate::viz::util::Rgba;
use crate::viz::{Chart, SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};

/// Arc resolution for sectors drawn as triangle fans.
const ARC_STEP_DEG: f64 = 3.0;

fn color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn pos(origin: Pos2, p: Point) -> Pos2 {
    Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// Filled triangle fan around `hub`; covers sectors and star-shaped outlines.
fn fan(painter: &egui::Painter, hub: Pos2, ring: &[Pos2], closed: bool, color: Color32) {
    if ring.len() < 2 {
        return;
    }
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(hub, color);
    for p in ring {
        mesh.colored_vertex(*p, color);
    }
    let n = ring.len() as u32;
    for i in 1..n {
        mesh.add_triangle(0, i, i + 1);
    }
    if closed {
        mesh.add_triangle(0, n, 1);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Replay `scene` with `origin` as the canvas' top-left corner.
pub fn paint_scene(painter: &egui::Painter, origin: Pos2, scene: &Scene) {
    for shape in &scene.shapes {
        match shape {
            Shape::Line {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [pos(origin, *from), pos(origin, *to)],
                    Stroke::new(*width as f32, color32(*color)),
                );
            }
            Shape::Rect { rect, paint } => {
                let r = egui::Rect::from_min_max(
                    pos(origin, Point::new(rect.left, rect.top)),
                    pos(origin, Point::new(rect.right, rect.bottom)),
                );
                match paint {
                    Paint::Fill(c) => painter.rect_filled(r, 0.0, color32(*c)),
                    Paint::Stroke { color, width } => {
                        painter.rect_stroke(r, 0.0, Stroke::new(*width as f32, color32(*color)))
                    }
                };
            }
            Shape::Circle {
                center,
                radius,
                paint,
            } => {
                let c = pos(origin, *center);
                match paint {
                    Paint::Fill(color) => painter.circle_filled(c, *radius as f32, color32(*color)),
                    Paint::Stroke { color, width } => painter.circle_stroke(
                        c,
                        *radius as f32,
                        Stroke::new(*width as f32, color32(*color)),
                    ),
                };
            }
            Shape::Sector {
                center,
                radius,
                start_deg,
                sweep_deg,
                color,
            } => {
                let pts: Vec<Pos2> =
                    sector_points(*center, *radius, *start_deg, *sweep_deg, ARC_STEP_DEG)
                        .into_iter()
                        .map(|p| pos(origin, p))
                        .collect();
                fan(painter, pts[0], &pts[1..], false, color32(*color));
            }
            Shape::Polygon { points, color } => {
                if points.is_empty() {
                    continue;
                }
                let n = points.len() as f64;
                let hub = Point::new(
                    points.iter().map(|p| p.x).sum::<f64>() / n,
                    points.iter().map(|p| p.y).sum::<f64>() / n,
                );
                let ring: Vec<Pos2> = points.iter().map(|p| pos(origin, *p)).collect();
                fan(painter, pos(origin, hub), &ring, true, color32(*color));
            }
            Shape::Text {
                text,
                at,
                size_px,
                color,
            } => {
                painter.text(
                    pos(origin, *at),
                    Align2::LEFT_BOTTOM,
                    text,
                    FontId::proportional(*size_px as f32),
                    color32(*color),
                );
            }
        }
    }
}

struct ChartApp {
    requests: Vec<ChartRequest>,
    active: usize,
    shown_title: Option<String>,
    status_message: String,
    error_message: String,
}

impl ChartApp {
    fn new(requests: Vec<ChartRequest>) -> Self {
        Self {
            requests,
            active: 0,
            shown_title: None,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    fn export_active(&mut self) {
        let Some(request) = self.requests.get(self.active) else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .add_filter("SVG image", &["svg"])
            .set_file_name(format!("{}.png", request.title))
            .save_file()
        else {
            return;
        };
        match snapshot::save(&request.chart, &path) {
            Ok(()) => {
                self.status_message = format!("Saved {}", path.display());
                self.error_message.clear();
            }
            Err(e) => {
                log::error!("export failed: {e}");
                self.error_message = format!("Export failed: {e}");
                self.status_message.clear();
            }
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let Some(title) = self.requests.get(self.active).map(|r| r.title.clone()) else {
            return;
        };
        if self.shown_title.as_deref() != Some(title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = Some(title);
        }
    }
}

fn draw_chart(ui: &mut egui::Ui, chart: &Chart) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let rect = response.rect;
    let cursor = response
        .hover_pos()
        .map(|p| Point::new((p.x - rect.min.x) as f64, (p.y - rect.min.y) as f64));
    let canvas = Canvas::new(rect.width() as f64, rect.height() as f64);
    paint_scene(&painter, rect.min, &chart.render(canvas, cursor));
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_title(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Export PNG…").clicked() {
                    self.export_active();
                }
                if !self.status_message.is_empty() {
                    ui.label(&self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(Color32::RED, &self.error_message);
                }
            });
        });

        if self.requests.len() > 1 {
            egui::SidePanel::left("charts").show(ctx, |ui| {
                for (i, request) in self.requests.iter().enumerate() {
                    ui.selectable_value(&mut self.active, i, &request.title);
                }
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                if let Some(request) = self.requests.get(self.active) {
                    draw_chart(ui, &request.chart);
                }
            });
    }
}

/// Open the window and block until it is closed.
pub fn show(requests: Vec<ChartRequest>) -> Result<()> {
    if requests.is_empty() {
        return Ok(());
    }
    let title = requests[0].title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SNAPSHOT_WIDTH as f32, SNAPSHOT_HEIGHT as f32])
            .with_min_inner_size([100.0, 100.0])
            .with_title(title),
        ..Default::default()
    };
    eframe::run_native(
        "tabplot",
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp::new(requests)))),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}
