use thiserror::Error;

// ---------------------------------------------------------------------------
// Engine errors and warnings
// ---------------------------------------------------------------------------

/// Fatal outcome of one transform invocation. A run either fully succeeds
/// (possibly with elided rows, reported as warnings) or fails with one of
/// these; there is no partial transform state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// No valid rows survived parsing. No chart is produced.
    #[error("no valid data rows — check the input format")]
    EmptyDataset,
}

/// Non-fatal conditions surfaced to the caller alongside a successful result.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformWarning {
    /// A row had too few columns for the active mode and was skipped.
    MalformedRecord { row_index: usize, fields: usize },
    /// Neither an explicit geometric factor nor Wenner geometry was
    /// available; apparent resistivity fell back to `1 * r`, which is an
    /// approximation and not a physically general formula.
    MissingGeometry { count: usize },
}

impl std::fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformWarning::MalformedRecord { row_index, fields } => write!(
                f,
                "row {row_index} skipped ({fields} fields, too few for this mode)"
            ),
            TransformWarning::MissingGeometry { count } => write!(
                f,
                "{count} reading(s) had no geometric factor; assumed K = 1 (approximation)"
            ),
        }
    }
}
