use serde::Serialize;

// ---------------------------------------------------------------------------
// RawRow – one parsed input line
// ---------------------------------------------------------------------------

/// A single input line converted to numbers. The parser guarantees
/// `len() > 1` and no NaN fields; anything else never reaches this type.
pub type RawRow = Vec<f64>;

// ---------------------------------------------------------------------------
// Mode and per-mode configuration
// ---------------------------------------------------------------------------

/// Survey mode. Dispatches to the matching transform; the two share the
/// [`Series`] / [`SummaryMetrics`] output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    Vlf,
    Resistivity,
}

/// Electrode array geometry for the resistivity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrayType {
    Wenner,
    Other,
}

#[derive(Debug, Clone)]
pub struct VlfConfig {
    /// Whether the user asked for the KH (derivative) filter series.
    pub show_kh_filter: bool,
}

#[derive(Debug, Clone)]
pub struct ResistivityConfig {
    pub array_type: ArrayType,
}

/// Mode-specific transform options, tagged rather than runtime-inspected.
#[derive(Debug, Clone)]
pub enum TransformConfig {
    Vlf(VlfConfig),
    Resistivity(ResistivityConfig),
}

impl TransformConfig {
    pub fn mode(&self) -> Mode {
        match self {
            TransformConfig::Vlf(_) => Mode::Vlf,
            TransformConfig::Resistivity(_) => Mode::Resistivity,
        }
    }
}

/// Renderer capabilities, supplied by the environment. The KH filter is
/// only computed when the renderer can draw annotation overlays.
#[derive(Debug, Clone, Copy)]
pub struct RenderCaps {
    pub annotations: bool,
}

// ---------------------------------------------------------------------------
// Typed samples
// ---------------------------------------------------------------------------

/// One VLF reading: columns 0..2 of a [`RawRow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VlfSample {
    pub station: f64,
    pub in_phase: f64,
    pub quadrature: f64,
}

/// One four-electrode resistivity reading: columns 0..6 of a [`RawRow`].
/// `rho_raw` is the optional trailing column; absent means "not provided",
/// never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistivitySample {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub k: f64,
    pub r: f64,
    pub rho_raw: Option<f64>,
}

/// A resistivity reading reduced to its plottable quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedResistivityPoint {
    pub midpoint: f64,
    pub apparent_resistivity: f64,
    pub spacing: f64,
}

// ---------------------------------------------------------------------------
// Series and style hints
// ---------------------------------------------------------------------------

/// Plain RGB triple so the engine never touches the renderer's color types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Rendering intent attached by the assembler; the renderer interprets it.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StyleHint {
    /// Assigned by palette cycling; None until assembly.
    pub color: Option<Rgb>,
    /// Draw dashed (the KH filter overlay).
    pub dashed: bool,
    /// Draw markers at each point in addition to the line.
    pub markers: bool,
}

/// One named, ordered series of (x, y) points. Point order is significant:
/// ascending x within a series, per the transform that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub style: StyleHint,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Series {
            label: label.into(),
            points,
            style: StyleHint::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Displayable summary values, recomputed every plot cycle. Insertion order
/// is the display order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryMetrics {
    entries: Vec<(String, String)>,
}

impl SummaryMetrics {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

// ---------------------------------------------------------------------------
// RenderRequest – the assembler's output, consumed by the renderer
// ---------------------------------------------------------------------------

/// Scale intent for an axis. The engine only annotates; whether and how the
/// renderer realises a log axis is its own business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScaleHint {
    Linear,
    Log10,
}

/// Everything the rendering collaborator needs for one plot cycle.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: ScaleHint,
    pub series: Vec<Series>,
    pub metrics: SummaryMetrics,
}
