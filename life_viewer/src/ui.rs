// ui.rs - egui front end for LifeViewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use life::Cell;
use life::patterns::PATTERNS;

use crate::LifeViewer;

impl LifeViewer {
    fn cell_color(&self, cell: Cell) -> Color32 {
        match cell {
            Cell::Alive    => self.live_color,
            Cell::Dead     => self.dead_color,
            Cell::Wall     => self.wall_color,
            Cell::Other(_) => self.other_color,
        }
    }
}

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
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

                if ui.button("⏮ Restart").clicked() {
                    self.is_running = false;
                    self.restart();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
                ui.label("Wall:");
                ui.color_edit_button_srgba(&mut self.wall_color);
            });

            ui.separator();
            ui.label("Click cells to toggle them alive/dead while paused.");
            ui.separator();

            // Whole board, wall included
            let size = self.board().size();
            let spacing = 0.5;
            let box_size = (780.0 / size as f32 - spacing).clamp(2.0, 15.0);

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * size as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let mut clicked = None;
            for (row, cells) in self.board().rows().enumerate() {
                for (col, &cell) in cells.iter().enumerate() {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    painter.rect_filled(rect, 1.0, self.cell_color(cell));
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    if !self.is_running && response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                clicked = Some((row, col));
                            }
                        }
                    }
                }
            }
            if let Some((row, col)) = clicked {
                self.toggle_cell(row, col);
            }

            ui.separator();

            let interior = (size - 2) * (size - 2);
            let live_cells = self.board().population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", interior - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / interior as f32) * 100.0));
            });
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
