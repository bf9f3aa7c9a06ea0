//! Survey engine: raw delimited text → plottable series + summary metrics.
//!
//! Pipeline (pure, recomputed from scratch on every plot request):
//! ```text
//!  pasted / uploaded text
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  parse    │  lines → Vec<RawRow>, malformed lines dropped
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────────────┐
//!   │ vlf / resistivity    │  mode-specific transform → Series + metrics
//!   └─────────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ assemble  │  colours, labels, scale intent → RenderRequest
//!   └──────────┘
//! ```

pub mod assemble;
pub mod error;
pub mod model;
pub mod parse;
pub mod resistivity;
pub mod sample;
pub mod vlf;

use error::{TransformError, TransformWarning};
use model::{RenderCaps, RenderRequest, Rgb, TransformConfig};

#[derive(Debug)]
pub struct PipelineOutput {
    pub render: RenderRequest,
    pub warnings: Vec<TransformWarning>,
}

/// Run one full plot cycle: parse, transform per the tagged config,
/// assemble. Either fully succeeds (possibly with warnings about elided
/// rows) or reports [`TransformError::EmptyDataset`]; nothing in between.
pub fn run(
    text: &str,
    config: &TransformConfig,
    caps: RenderCaps,
    palette: &[Rgb],
    custom_title: Option<&str>,
) -> Result<PipelineOutput, TransformError> {
    let rows = parse::parse(text);
    if rows.is_empty() {
        return Err(TransformError::EmptyDataset);
    }

    let (series, metrics, warnings) = match config {
        TransformConfig::Vlf(cfg) => {
            let out = vlf::transform(&rows, cfg, caps)?;
            (out.series, out.metrics, out.warnings)
        }
        TransformConfig::Resistivity(cfg) => {
            let out = resistivity::transform(&rows, cfg)?;
            (out.series, out.metrics, out.warnings)
        }
    };

    let render = assemble::assemble(config.mode(), series, metrics, palette, custom_title);
    Ok(PipelineOutput { render, warnings })
}
