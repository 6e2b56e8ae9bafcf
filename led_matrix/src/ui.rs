// ui.rs - Window layout, canvas drawing and input for the LED matrix editor

use eframe::egui;
use egui::{Color32, Key, Rect, Stroke, Vec2};
use pixel_grid::{Direction, patterns};
use crate::{LedMatrixApp, MatrixEditor};

const ARROW_KEYS: [(Key, Direction); 4] = [
    (Key::ArrowUp, Direction::Up),
    (Key::ArrowDown, Direction::Down),
    (Key::ArrowLeft, Direction::Left),
    (Key::ArrowRight, Direction::Right),
];

// Menu entries without behavior yet (no file format, no frames).
const FILE_PLACEHOLDERS: [&str; 3] = ["Open File", "Save", "Save As..."];
const FRAME_PLACEHOLDERS: [&str; 4] = ["Previous Frame", "Next Frame", "First Frame", "Last Frame"];
const FRAME_INSERT_PLACEHOLDERS: [&str; 3] = [
    "Append New Frame",
    "Insert New Frame (After)",
    "Insert New Frame (Before)",
];

impl eframe::App for LedMatrixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ctx, ui);
        });

        egui::SidePanel::right("controls")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                self.controls(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas(ui);

            ui.separator();

            let total = self.grid.size() * self.grid.size();
            let lit = self.grid.lit_count();
            ui.horizontal(|ui| {
                ui.label(format!("Lit cells: {}", lit));
                ui.label(format!("Dark cells: {}", total - lit));
                ui.label(format!("Fill: {:.1}%", (lit as f32 / total as f32) * 100.0));
            });
        });
    }
}

impl LedMatrixApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Arrow keys belong to the export text box while it has focus.
        if ctx.wants_keyboard_input() {
            return;
        }
        let pressed: Vec<Direction> = ctx.input(|input| {
            ARROW_KEYS
                .iter()
                .filter(|(key, _)| input.key_pressed(*key))
                .map(|&(_, direction)| direction)
                .collect()
        });
        for direction in pressed {
            self.scroll(direction);
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                for label in FILE_PLACEHOLDERS {
                    ui.add_enabled(false, egui::Button::new(label));
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    log::info!("Exit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Clear").clicked() {
                    self.clear_grid();
                    ui.close_menu();
                }
                if ui.button("Invert").clicked() {
                    self.invert_grid();
                    ui.close_menu();
                }
                ui.separator();
                for direction in Direction::ALL {
                    if ui.button(direction.label()).clicked() {
                        self.scroll(direction);
                        ui.close_menu();
                    }
                }
                ui.separator();
                for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                    if ui.button(pattern.name).clicked() {
                        self.selected_pattern = i;
                        self.apply_selected_pattern();
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Frame", |ui| {
                for label in FRAME_PLACEHOLDERS {
                    ui.add_enabled(false, egui::Button::new(label));
                }
                ui.separator();
                for label in FRAME_INSERT_PLACEHOLDERS {
                    ui.add_enabled(false, egui::Button::new(label));
                }
            });
        });
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("clear screen").clicked() {
            self.clear_grid();
        }
        if ui.button("save to bits").clicked() {
            self.save_to_bits();
        }

        ui.separator();

        // Scroll pad
        egui::Grid::new("scroll_pad")
            .min_col_width(30.0)
            .min_row_height(30.0)
            .show(ui, |ui| {
                ui.label("");
                if ui.button("▲").clicked() {
                    self.scroll(Direction::Up);
                }
                ui.end_row();

                if ui.button("◄").clicked() {
                    self.scroll(Direction::Left);
                }
                ui.label("");
                if ui.button("►").clicked() {
                    self.scroll(Direction::Right);
                }
                ui.end_row();

                ui.label("");
                if ui.button("▼").clicked() {
                    self.scroll(Direction::Down);
                }
                ui.end_row();
            });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply").clicked() {
                self.apply_selected_pattern();
            }
        });

        ui.horizontal(|ui| {
            ui.label("On:");
            ui.color_edit_button_srgba(&mut self.settings.on_color);
            ui.label("Off:");
            ui.color_edit_button_srgba(&mut self.settings.off_color);
        });

        ui.separator();

        if let Some(text) = &self.last_export {
            ui.horizontal(|ui| {
                ui.label("Last export");
                if ui.button("Copy").clicked() {
                    ui.output_mut(|output| output.copied_text = text.clone());
                }
            });
            egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut text.as_str())
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
        } else {
            ui.label("Press \"save to bits\" to export the grid.");
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let side = self.settings.side_length();
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.settings.background);

        for (row, cells) in self.grid.rows().enumerate() {
            for (col, &on) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(self.settings.cell_offset(col), self.settings.cell_offset(row)),
                    Vec2::splat(self.settings.cell_size),
                );
                let color = if on { self.settings.on_color } else { self.settings.off_color };
                painter.rect_filled(rect, 0.0, color);
                painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::DARK_GRAY));
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                if let Some((row, col)) = self.settings.cell_at(local.x, local.y) {
                    self.toggle_cell(row, col);
                }
            }
        }
    }
}
