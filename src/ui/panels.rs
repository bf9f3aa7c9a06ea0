use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, TextStyle, Ui};

use crate::state::AppState;
use crate::survey::model::{ArrayType, Mode};
use crate::theme;
use crate::ui::{export, upload};

// ---------------------------------------------------------------------------
// Left side panel – mode, options, data entry
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("GeoViz");
    ui.separator();

    // ---- Mode selector ----
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .selectable_label(state.mode == Mode::Vlf, "VLF")
            .clicked()
        {
            state.set_mode(Mode::Vlf);
        }
        if ui
            .selectable_label(state.mode == Mode::Resistivity, "Resistivity")
            .clicked()
        {
            state.set_mode(Mode::Resistivity);
        }
    });

    let hint = match state.mode {
        Mode::Vlf => "Station, InPhase, Quad",
        Mode::Resistivity => "P1, P2, P3, P4, K, R, ρa",
    };
    ui.label(RichText::new(format!("Format: {hint}")).weak());
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            mode_options(ui, state);
            ui.separator();

            // ---- Chart title ----
            ui.strong("Chart title");
            ui.add(
                TextEdit::singleline(&mut state.custom_title)
                    .hint_text("(mode default)")
                    .desired_width(f32::INFINITY),
            );
            ui.separator();

            // ---- Data input ----
            ui.strong("Survey data");
            ui.add(
                TextEdit::multiline(&mut state.input_text)
                    .font(TextStyle::Monospace)
                    .desired_rows(14)
                    .desired_width(f32::INFINITY),
            );

            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Plot").clicked() {
                    state.replot();
                }
                if ui.button("Load sample").clicked() {
                    state.load_sample();
                }
                if ui.button("Clear").clicked() {
                    state.clear();
                }
            });
        });
}

/// Options specific to the active mode.
fn mode_options(ui: &mut Ui, state: &mut AppState) {
    match state.mode {
        Mode::Vlf => {
            theme_combo(ui, "vlf_theme", Mode::Vlf, &mut state.vlf_theme);
            ui.checkbox(&mut state.show_kh_filter, "KH filter (derivative)");
        }
        Mode::Resistivity => {
            theme_combo(ui, "res_theme", Mode::Resistivity, &mut state.res_theme);

            ui.strong("Array type");
            egui::ComboBox::from_id_salt("array_type")
                .selected_text(match state.array_type {
                    ArrayType::Wenner => "Wenner",
                    ArrayType::Other => "Other / general",
                })
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut state.array_type, ArrayType::Wenner, "Wenner");
                    ui.selectable_value(&mut state.array_type, ArrayType::Other, "Other / general");
                });
        }
    }
}

fn theme_combo(ui: &mut Ui, id: &str, mode: Mode, index: &mut usize) {
    ui.strong("Theme");
    let table = theme::themes(mode);
    let current = table.get(*index).map(|t| t.name).unwrap_or(table[0].name);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for (i, t) in table.iter().enumerate() {
                ui.selectable_value(index, i, t.name);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            let has_chart = state.last_render.is_some();
            if ui
                .add_enabled(has_chart, egui::Button::new("Export chart PNG…"))
                .clicked()
            {
                state.screenshot_pending = true;
                ui.close_menu();
            }
            if ui
                .add_enabled(has_chart, egui::Button::new("Export series JSON…"))
                .clicked()
            {
                export::export_series_json(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let dark_label = if state.dark_mode { "☀ Light" } else { "🌙 Dark" };
        if ui.button(dark_label).clicked() {
            state.dark_mode = !state.dark_mode;
            // Palette colours depend on the visuals, so redraw from scratch.
            state.replot();
        }

        ui.separator();

        if let Some(req) = &state.last_render {
            let total: usize = req.series.iter().map(|s| s.len()).sum();
            ui.label(format!("{} series, {total} points", req.series.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open survey data")
        .add_filter("Delimited text", &["csv", "tsv", "txt", "dat"])
        .pick_file();

    if let Some(path) = file {
        match upload::decode_file(&path) {
            Ok(text) => {
                log::info!("Loaded {} bytes from {}", text.len(), path.display());
                state.input_text = text;
                state.replot();
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
