//! falling-shapes - a falling geometric shapes toy
//!
//! Shapes spawn above the canvas (or wherever you click), fall under an
//! adjustable gravity, drift and spin, and disappear when clicked or when
//! they drop out of view. The top bar shows the live count and combined
//! surface area.
//!
//! ## Controls
//! - Click/tap empty canvas: spawn a shape there
//! - Click/tap a shape: remove it
//! - Rate -/+: automatic spawns per second (0-10)
//! - Gravity -/+: gravity constant (0-10)

use std::time::Instant;

use eframe::egui;

mod render;
mod settings;
mod shapes;
mod sim;

use render::ShapeCanvas;
use settings::AppSettings;
use sim::{frame_delta, Adjustment, FrameStats, Simulation};

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting falling-shapes");

    let settings = AppSettings::load();
    let canvas_size = settings.canvas_settings().size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_size.x + 32.0, canvas_size.y + 80.0])
            .with_title("falling-shapes"),
        ..Default::default()
    };

    eframe::run_native(
        "falling-shapes",
        options,
        Box::new(move |cc| Ok(Box::new(ShapesApp::new(cc, settings)))),
    )
}

/// Main application state
struct ShapesApp {
    sim: Simulation,
    canvas: ShapeCanvas,
    stats: FrameStats,
}

impl ShapesApp {
    fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let canvas = ShapeCanvas::with_settings(settings.canvas_settings());
        let sim = Simulation::new(settings.simulation);

        Self {
            sim,
            canvas,
            stats: FrameStats::default(),
        }
    }

    /// Route a click or tap at a canvas position
    ///
    /// The shape under the pointer sees the gesture first, then the canvas.
    /// Dismissal arms the debounce, so the canvas half is then dropped.
    fn handle_pointer(&mut self, x: f32, y: f32, now: Instant) {
        if let Some(handle) = self.canvas.hit_test(x, y) {
            self.sim.dismiss(handle, now, &mut self.canvas);
        }
        self.sim.click_canvas(x, y, now, &mut self.canvas);
    }

    /// A "-  value  +" control pair
    fn stepper(&mut self, ui: &mut egui::Ui, label: &str, value: u8, down: Adjustment, up: Adjustment) {
        ui.label(label);
        if ui.button("-").clicked() {
            self.sim.adjust(down);
        }
        ui.label(value.to_string());
        if ui.button("+").clicked() {
            self.sim.adjust(up);
        }
    }
}

impl eframe::App for ShapesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        let now = Instant::now();
        let delta = frame_delta(ctx.input(|i| i.stable_dt));

        // Top panel: controls and statistics
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("falling-shapes");
                ui.separator();

                let params = *self.sim.params();
                self.stepper(
                    ui,
                    "Rate",
                    params.generation_rate.value(),
                    Adjustment::DecreaseRate,
                    Adjustment::IncreaseRate,
                );
                ui.separator();
                self.stepper(
                    ui,
                    "Gravity",
                    params.gravity.value(),
                    Adjustment::DecreaseGravity,
                    Adjustment::IncreaseGravity,
                );

                ui.separator();
                ui.label(format!("Shapes: {}", self.stats.shape_count));
                ui.separator();
                ui.label(format!("Area: {}", self.stats.total_area_rounded()));
            });
        });

        // Canvas
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = self.canvas.show(ui);

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = ShapeCanvas::canvas_pos(response.rect, pos);
                    self.handle_pointer(x, y, now);
                }
            }
        });

        self.stats = self.sim.tick(now, delta, &mut self.canvas);
        debug_assert_eq!(self.canvas.len(), self.sim.shapes().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawSurface;
    use crate::sim::SimConfig;

    fn app() -> ShapesApp {
        let config = SimConfig {
            initial_generation_rate: 0,
            ..SimConfig::default()
        };
        ShapesApp {
            sim: Simulation::seeded(config, 5),
            canvas: ShapeCanvas::new(),
            stats: FrameStats::default(),
        }
    }

    #[test]
    fn test_click_empty_canvas_spawns() {
        let mut app = app();
        app.handle_pointer(200.0, 200.0, Instant::now());
        assert_eq!(app.sim.shapes().len(), 1);
        assert!(app.canvas.hit_test(200.0, 200.0).is_some());
    }

    #[test]
    fn test_tick_keeps_canvas_in_step() {
        let mut app = app();
        let start = Instant::now();
        for i in 0..5 {
            app.handle_pointer(100.0 + i as f32 * 60.0, 100.0, start);
        }
        for frame in 0..200u64 {
            let now = start + std::time::Duration::from_millis(frame * 16);
            app.stats = app.sim.tick(now, 1.0, &mut app.canvas);
            assert_eq!(app.canvas.len(), app.sim.shapes().len());
        }
        assert_eq!(app.stats.shape_count, app.sim.shapes().len());
    }

    #[test]
    fn test_click_shape_dismisses_without_spawning() {
        let mut app = app();
        let now = Instant::now();
        app.handle_pointer(200.0, 200.0, now);
        let handle = app.canvas.hit_test(200.0, 200.0).expect("shape under pointer");

        app.handle_pointer(200.0, 200.0, now);
        assert!(app.sim.shapes().is_empty());
        assert!(app.canvas.is_empty());

        // The handle is gone from the surface too
        app.canvas.set_transform(handle, 0.0, 0.0, 0.0);
        assert!(!app.canvas.contains(handle));
    }
}
