use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui::{self, ColorImage};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart export: viewport screenshot → PNG, assembled series → JSON
// ---------------------------------------------------------------------------

/// Ask the viewport for a screenshot; the frame arrives later as an event.
pub fn request_screenshot(ctx: &egui::Context) {
    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
}

/// Pick up a screenshot event, if one arrived this frame, and save it.
pub fn handle_screenshot(ctx: &egui::Context, state: &mut AppState) {
    let image: Option<Arc<ColorImage>> = ctx.input(|i| {
        i.raw.events.iter().find_map(|e| match e {
            egui::Event::Screenshot { image, .. } => Some(image.clone()),
            _ => None,
        })
    });

    let Some(image) = image else {
        return;
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title("Export chart PNG")
        .set_file_name("geoviz_chart.png")
        .add_filter("PNG image", &["png"])
        .save_file()
    else {
        return;
    };

    match write_png(&image, &path) {
        Ok(()) => {
            log::info!("Chart exported to {}", path.display());
            state.status_message = Some(format!("Chart saved to {}", path.display()));
        }
        Err(e) => {
            log::error!("PNG export failed: {e:#}");
            state.status_message = Some(format!("Export error: {e:#}"));
        }
    }
}

fn write_png(image: &ColorImage, path: &Path) -> Result<()> {
    let [w, h] = image.size;
    let mut bytes = Vec::with_capacity(w * h * 4);
    for px in &image.pixels {
        bytes.extend_from_slice(&px.to_array());
    }
    let buffer = image::RgbaImage::from_raw(w as u32, h as u32, bytes)
        .context("screenshot buffer size mismatch")?;
    buffer.save(path).context("writing PNG")
}

/// Write the last render request (series, metrics, axis hints) as JSON.
pub fn export_series_json(state: &mut AppState) {
    let Some(request) = &state.last_render else {
        return;
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title("Export series JSON")
        .set_file_name("geoviz_series.json")
        .add_filter("JSON", &["json"])
        .save_file()
    else {
        return;
    };

    let result = serde_json::to_string_pretty(request)
        .context("serialising series")
        .and_then(|json| std::fs::write(&path, json).context("writing JSON"));

    match result {
        Ok(()) => {
            log::info!("Series exported to {}", path.display());
            state.status_message = Some(format!("Series saved to {}", path.display()));
        }
        Err(e) => {
            log::error!("JSON export failed: {e:#}");
            state.status_message = Some(format!("Export error: {e:#}"));
        }
    }
}
