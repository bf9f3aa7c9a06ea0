use crate::survey::{
    self,
    error::TransformError,
    model::{
        ArrayType, Mode, RenderCaps, RenderRequest, ResistivityConfig, TransformConfig, VlfConfig,
    },
};
use crate::theme;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI session state. The engine itself is stateless; everything
/// mutable lives here and is owned by the orchestrating UI.
pub struct AppState {
    /// Current survey mode.
    pub mode: Mode,

    /// Raw delimited text, pasted or filled from an upload / sample.
    pub input_text: String,

    /// Per-mode theme selection.
    pub vlf_theme: usize,
    pub res_theme: usize,

    /// VLF: draw the KH (derivative) filter overlay.
    pub show_kh_filter: bool,

    /// Resistivity: electrode array geometry.
    pub array_type: ArrayType,

    /// Optional chart title; blank falls back to the mode default.
    pub custom_title: String,

    /// Dark visuals active (affects the plotted palette, so toggling
    /// re-runs the whole pipeline).
    pub dark_mode: bool,

    /// Renderer capabilities, fixed at startup.
    pub caps: RenderCaps,

    /// Output of the last successful plot cycle.
    pub last_render: Option<RenderRequest>,

    /// Status / warning / error message shown in the UI.
    pub status_message: Option<String>,

    /// A chart screenshot has been requested and awaits the event.
    pub screenshot_pending: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: Mode::Vlf,
            input_text: String::new(),
            vlf_theme: 0,
            res_theme: 0,
            show_kh_filter: false,
            array_type: ArrayType::Wenner,
            custom_title: String::new(),
            dark_mode: false,
            // This renderer draws dashed overlays, so the derivative
            // capability is always available here.
            caps: RenderCaps { annotations: true },
            last_render: None,
            status_message: None,
            screenshot_pending: false,
        }
    }
}

impl AppState {
    pub fn theme_index(&self) -> usize {
        match self.mode {
            Mode::Vlf => self.vlf_theme,
            Mode::Resistivity => self.res_theme,
        }
    }

    fn transform_config(&self) -> TransformConfig {
        match self.mode {
            Mode::Vlf => TransformConfig::Vlf(VlfConfig {
                show_kh_filter: self.show_kh_filter,
            }),
            Mode::Resistivity => TransformConfig::Resistivity(ResistivityConfig {
                array_type: self.array_type,
            }),
        }
    }

    /// Run one full plot cycle from the current input text. All derived
    /// state is discarded and recomputed; nothing incremental.
    pub fn replot(&mut self) {
        if self.input_text.trim().is_empty() {
            return;
        }

        let config = self.transform_config();
        let palette = theme::active_palette(self.mode, self.theme_index(), self.dark_mode);
        let title = (!self.custom_title.trim().is_empty()).then_some(self.custom_title.as_str());

        match survey::run(&self.input_text, &config, self.caps, &palette, title) {
            Ok(out) => {
                log::info!(
                    "Plotted {} series ({} warnings)",
                    out.render.series.len(),
                    out.warnings.len()
                );
                for w in &out.warnings {
                    log::warn!("{w}");
                }
                self.status_message = (!out.warnings.is_empty()).then(|| {
                    out.warnings
                        .iter()
                        .map(|w| w.to_string())
                        .collect::<Vec<_>>()
                        .join("; ")
                });
                self.last_render = Some(out.render);
            }
            Err(e @ TransformError::EmptyDataset) => {
                log::error!("Plot failed: {e}");
                self.last_render = None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Switch mode: the chart resets, the pasted text and options stay.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.last_render = None;
            self.status_message = None;
        }
    }

    /// Fill the input with generated survey data for the current mode.
    pub fn load_sample(&mut self) {
        self.input_text = survey::sample::generate(self.mode, 42);
        self.replot();
    }

    pub fn clear(&mut self) {
        self.input_text.clear();
        self.last_render = None;
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replot_produces_render_request() {
        let mut state = AppState::default();
        state.input_text = "0\t45\t-10\n10\t55\t-12".to_string();
        state.replot();
        assert!(state.last_render.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn garbage_input_reports_empty_dataset_without_chart() {
        let mut state = AppState::default();
        state.input_text = "not numbers at all".to_string();
        state.replot();
        assert!(state.last_render.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn mode_switch_resets_chart_but_keeps_input() {
        let mut state = AppState::default();
        state.load_sample();
        assert!(state.last_render.is_some());
        state.set_mode(Mode::Resistivity);
        assert!(state.last_render.is_none());
        assert!(!state.input_text.is_empty());
    }
}
