use std::collections::BTreeMap;
use std::f64::consts::PI;

use super::error::{TransformError, TransformWarning};
use super::model::{
    ArrayType, DerivedResistivityPoint, RawRow, ResistivityConfig, ResistivitySample, Series,
    SummaryMetrics,
};

// ---------------------------------------------------------------------------
// Resistivity transform: rows → per-spacing apparent-resistivity series
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ResistivityOutput {
    pub series: Vec<Series>,
    pub metrics: SummaryMetrics,
    pub warnings: Vec<TransformWarning>,
}

/// Transform parsed rows (`p1 p2 p3 p4 k r [rho]`) into one series per
/// electrode spacing, ascending by spacing, points within each series
/// ascending by profile midpoint.
pub fn transform(
    rows: &[RawRow],
    config: &ResistivityConfig,
) -> Result<ResistivityOutput, TransformError> {
    let mut warnings = Vec::new();
    let mut missing_geometry = 0usize;
    let mut total_points = 0usize;

    // Key = spacing rounded to one decimal, scaled to an integer so the
    // BTreeMap iterates in true numeric order and nearly-equal spacings from
    // repeated measurements collapse into one group.
    let mut groups: BTreeMap<i64, Vec<[f64; 2]>> = BTreeMap::new();

    for (i, row) in rows.iter().enumerate() {
        let sample = match to_sample(row) {
            Some(s) => s,
            None => {
                warnings.push(TransformWarning::MalformedRecord {
                    row_index: i,
                    fields: row.len(),
                });
                continue;
            }
        };

        let point = derive(&sample, config.array_type, &mut missing_geometry);
        let key = (point.spacing * 10.0).round() as i64;
        groups
            .entry(key)
            .or_default()
            .push([point.midpoint, point.apparent_resistivity]);
        total_points += 1;
    }

    if groups.is_empty() {
        return Err(TransformError::EmptyDataset);
    }
    if missing_geometry > 0 {
        warnings.push(TransformWarning::MissingGeometry {
            count: missing_geometry,
        });
    }

    let n_groups = groups.len();
    let series = groups
        .into_iter()
        .map(|(key, mut points)| {
            points.sort_by(|a, b| a[0].total_cmp(&b[0]));
            let mut s = Series::new(format!("a = {:.1} m", key as f64 / 10.0), points);
            s.style.markers = true;
            s
        })
        .collect();

    let mut metrics = SummaryMetrics::default();
    metrics.push("Levels", n_groups.to_string());
    metrics.push("Total Pts", total_points.to_string());

    Ok(ResistivityOutput {
        series,
        metrics,
        warnings,
    })
}

fn to_sample(row: &RawRow) -> Option<ResistivitySample> {
    if row.len() < 6 {
        return None;
    }
    Some(ResistivitySample {
        p1: row[0],
        p2: row[1],
        p3: row[2],
        p4: row[3],
        k: row[4],
        r: row[5],
        rho_raw: row.get(6).copied(),
    })
}

/// Reduce one reading to its plottable quantities.
///
/// Apparent resistivity comes from the explicit trailing column when given,
/// otherwise from `K * R` with `K` taken from the data, or the analytic
/// Wenner factor `2πa`, or the fallback `K = 1`. That last fallback is an
/// approximation with no physical basis, counted so the caller can surface
/// a [`TransformWarning::MissingGeometry`].
fn derive(
    sample: &ResistivitySample,
    array_type: ArrayType,
    missing_geometry: &mut usize,
) -> DerivedResistivityPoint {
    let spacing = (sample.p2 - sample.p1).abs();

    let apparent_resistivity = match sample.rho_raw {
        Some(rho) => rho,
        None => {
            let k_effective = if sample.k != 0.0 {
                sample.k
            } else if array_type == ArrayType::Wenner {
                2.0 * PI * spacing
            } else {
                *missing_geometry += 1;
                1.0
            };
            k_effective * sample.r
        }
    };

    DerivedResistivityPoint {
        midpoint: (sample.p1 + sample.p4) / 2.0,
        apparent_resistivity,
        spacing,
    }
}
