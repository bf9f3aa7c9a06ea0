use eframe::egui::Ui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};

use crate::survey::model::{RenderRequest, ScaleHint};
use crate::theme;

// ---------------------------------------------------------------------------
// Survey plot (central panel)
// ---------------------------------------------------------------------------

/// Render the last [`RenderRequest`] in the central panel.
pub fn survey_plot(ui: &mut Ui, render: Option<&RenderRequest>) {
    let request = match render {
        Some(r) => r,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Paste survey data in the panel and press Plot");
            });
            return;
        }
    };

    stats_strip(ui, request);
    ui.add_space(4.0);
    ui.heading(&request.title);

    let log_y = request.y_scale == ScaleHint::Log10;

    let mut plot = Plot::new("survey_plot")
        .legend(Legend::default())
        .x_axis_label(&request.x_label)
        .y_axis_label(&request.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if log_y {
        // The engine only flags log intent; here we realise it by plotting
        // log10(y) and labelling ticks with the original magnitudes.
        plot = plot.y_axis_formatter(|mark, _range| format!("{:.0}", 10f64.powf(mark.value)));
    }

    plot.show(ui, |plot_ui| {
        for series in &request.series {
            let color = series
                .style
                .color
                .map(theme::to_color32)
                .unwrap_or_else(|| theme::to_color32(theme::OVERLAY));

            let coords: Vec<[f64; 2]> = series
                .points
                .iter()
                .map(|&[x, y]| if log_y { [x, log10_clamped(y)] } else { [x, y] })
                .collect();

            let points: PlotPoints = coords.iter().copied().collect();
            let mut line = Line::new(points).name(&series.label).color(color).width(2.0);
            if series.style.dashed {
                line = line.style(LineStyle::dashed_loose()).width(1.5);
            }
            plot_ui.line(line);

            if series.style.markers {
                let markers: PlotPoints = coords.iter().copied().collect();
                plot_ui.points(
                    Points::new(markers)
                        .name(&series.label)
                        .color(color)
                        .radius(3.0),
                );
            }
        }
    });
}

/// Summary metrics above the chart, one label/value pair per metric.
fn stats_strip(ui: &mut Ui, request: &RenderRequest) {
    ui.horizontal(|ui: &mut Ui| {
        for (name, value) in request.metrics.iter() {
            ui.group(|ui: &mut Ui| {
                ui.label(name);
                ui.strong(value);
            });
        }
    });
}

/// Non-positive resistivities cannot appear on a log axis; clamp instead of
/// producing -inf/NaN plot coordinates.
fn log10_clamped(y: f64) -> f64 {
    y.max(f64::MIN_POSITIVE).log10()
}
