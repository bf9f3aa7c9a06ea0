use super::model::{Mode, RenderRequest, Rgb, ScaleHint, Series, SummaryMetrics};
use crate::theme;

// ---------------------------------------------------------------------------
// Series assembler: transform output → RenderRequest
// ---------------------------------------------------------------------------

/// Package transform output for the rendering collaborator.
///
/// Pure packaging: colours are cycled over the provided palette by series
/// position (dashed overlays take a fixed slate instead of a palette slot),
/// axis labels and scale intent follow the mode, and a user-supplied title
/// overrides the mode default. Nothing is rendered here.
pub fn assemble(
    mode: Mode,
    mut series: Vec<Series>,
    metrics: SummaryMetrics,
    palette: &[Rgb],
    custom_title: Option<&str>,
) -> RenderRequest {
    let mut color_idx = 0usize;
    for s in &mut series {
        if s.style.dashed {
            s.style.color = Some(theme::OVERLAY);
        } else {
            s.style.color = palette
                .get(color_idx % palette.len().max(1))
                .copied()
                .or(Some(theme::OVERLAY));
            color_idx += 1;
        }
    }

    let (default_title, x_label, y_label, y_scale) = match mode {
        Mode::Vlf => (
            "VLF In-Phase vs Quadrature",
            "Station (m)",
            "Amplitude (%)",
            ScaleHint::Linear,
        ),
        Mode::Resistivity => (
            "Resistivity Pseudosection Profile",
            "Profile Midpoint (m)",
            // Log intent only; realising the log axis is the renderer's job.
            "Apparent Resistivity (Ωm)",
            ScaleHint::Log10,
        ),
    };

    let title = custom_title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(default_title)
        .to_string();

    RenderRequest {
        title,
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        y_scale,
        series,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> Vec<Series> {
        (0..n)
            .map(|i| Series::new(format!("s{i}"), vec![[0.0, 1.0]]))
            .collect()
    }

    #[test]
    fn palette_cycles_by_position_modulo_length() {
        let palette = [Rgb(1, 1, 1), Rgb(2, 2, 2)];
        let req = assemble(
            Mode::Resistivity,
            series(5),
            SummaryMetrics::default(),
            &palette,
            None,
        );
        let colors: Vec<Rgb> = req.series.iter().filter_map(|s| s.style.color).collect();
        assert_eq!(
            colors,
            vec![
                Rgb(1, 1, 1),
                Rgb(2, 2, 2),
                Rgb(1, 1, 1),
                Rgb(2, 2, 2),
                Rgb(1, 1, 1)
            ]
        );
    }

    #[test]
    fn dashed_overlay_does_not_consume_a_palette_slot() {
        let palette = [Rgb(1, 1, 1), Rgb(2, 2, 2)];
        let mut list = series(3);
        list[1].style.dashed = true;
        let req = assemble(Mode::Vlf, list, SummaryMetrics::default(), &palette, None);
        assert_eq!(req.series[0].style.color, Some(Rgb(1, 1, 1)));
        assert_eq!(req.series[1].style.color, Some(theme::OVERLAY));
        assert_eq!(req.series[2].style.color, Some(Rgb(2, 2, 2)));
    }

    #[test]
    fn mode_defaults_and_scale_intent() {
        let req = assemble(
            Mode::Resistivity,
            series(1),
            SummaryMetrics::default(),
            &[Rgb(0, 0, 0)],
            None,
        );
        assert_eq!(req.title, "Resistivity Pseudosection Profile");
        assert_eq!(req.y_scale, ScaleHint::Log10);

        let req = assemble(
            Mode::Vlf,
            series(1),
            SummaryMetrics::default(),
            &[Rgb(0, 0, 0)],
            None,
        );
        assert_eq!(req.x_label, "Station (m)");
        assert_eq!(req.y_scale, ScaleHint::Linear);
    }

    #[test]
    fn custom_title_overrides_default_unless_blank() {
        let palette = [Rgb(0, 0, 0)];
        let req = assemble(
            Mode::Vlf,
            series(1),
            SummaryMetrics::default(),
            &palette,
            Some("Line 7, Grid North"),
        );
        assert_eq!(req.title, "Line 7, Grid North");

        let req = assemble(
            Mode::Vlf,
            series(1),
            SummaryMetrics::default(),
            &palette,
            Some("   "),
        );
        assert_eq!(req.title, "VLF In-Phase vs Quadrature");
    }
}
