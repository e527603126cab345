// ui.rs - egui front end for the simulation

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use conway_life::config::{MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use conway_life::patterns;
use crate::GameOfLife;

const MARGIN: f32 = 1.0;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Reseed").clicked() {
                    self.is_running = false;
                    self.reseed();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let slowest = 1000.0 / MAX_INTERVAL_MS as f32;
                let fastest = 1000.0 / MIN_INTERVAL_MS as f32;
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, slowest..=fastest).suffix(" gen/sec")).changed() {
                    let millis = ((1000.0 / speed) as u64).clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
                    self.update_interval = Duration::from_millis(millis);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. Use Start/Pause to run the simulation.");

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            let total = self.grid.rows() * self.grid.cols();
            let live_cells = self.grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());

        // Leave room for the statistics line below the grid.
        let available = ui.available_size() - Vec2::new(0.0, 30.0);
        let by_height = (available.y - rows as f32 * MARGIN) / rows as f32;
        let by_width = (available.x - cols as f32 * MARGIN) / cols as f32;
        let block_size = by_height.min(by_width).floor().max(1.0);
        let pitch = block_size + MARGIN;

        let total_size = Vec2::new(pitch * cols as f32, pitch * rows as f32);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::from_gray(60));

        for (row, col, state) in self.grid.cells() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                Vec2::splat(block_size),
            );
            let color = if state.is_alive() { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 0.0, color);
        }

        painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(60)));

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                let row = (offset.y / pitch) as usize;
                let col = (offset.x / pitch) as usize;
                self.toggle_cell(row, col);
            }
        }
    }
}
