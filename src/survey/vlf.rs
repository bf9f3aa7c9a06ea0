use super::error::{TransformError, TransformWarning};
use super::model::{RawRow, RenderCaps, Series, SummaryMetrics, VlfConfig, VlfSample};

// ---------------------------------------------------------------------------
// VLF transform: rows → in-phase / quadrature series + KH filter
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct VlfOutput {
    pub series: Vec<Series>,
    pub metrics: SummaryMetrics,
    pub warnings: Vec<TransformWarning>,
}

/// Transform parsed rows into VLF plot series.
///
/// Rows with fewer than three columns are skipped individually (reported as
/// warnings) rather than aborting the batch, so partial data stays usable.
/// Samples are stable-sorted ascending by station; stations need not be
/// unique, ties keep input order.
pub fn transform(
    rows: &[RawRow],
    config: &VlfConfig,
    caps: RenderCaps,
) -> Result<VlfOutput, TransformError> {
    let mut warnings = Vec::new();
    let mut samples: Vec<VlfSample> = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        if row.len() < 3 {
            warnings.push(TransformWarning::MalformedRecord {
                row_index: i,
                fields: row.len(),
            });
            continue;
        }
        // Extra columns beyond the first three are ignored.
        samples.push(VlfSample {
            station: row[0],
            in_phase: row[1],
            quadrature: row[2],
        });
    }

    if samples.is_empty() {
        return Err(TransformError::EmptyDataset);
    }

    samples.sort_by(|a, b| a.station.total_cmp(&b.station));

    let in_phase = Series::new(
        "In-Phase (%)",
        samples.iter().map(|s| [s.station, s.in_phase]).collect(),
    );
    let quadrature = Series::new(
        "Quadrature (%)",
        samples.iter().map(|s| [s.station, s.quadrature]).collect(),
    );
    let mut series = vec![in_phase, quadrature];

    // The derivative overlay needs annotation support in the renderer; the
    // capability is decided by the environment, not here.
    if config.show_kh_filter && caps.annotations {
        series.push(kh_filter(&samples));
    }

    let max_amp = samples
        .iter()
        .map(|s| s.in_phase)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut metrics = SummaryMetrics::default();
    metrics.push("Points", samples.len().to_string());
    metrics.push("Max Amp", format!("{max_amp:.1} %"));

    Ok(VlfOutput {
        series,
        metrics,
        warnings,
    })
}

/// Discrete derivative of the in-phase response with respect to station,
/// evaluated at interval midpoints. Highlights anomaly crossovers.
///
/// Zero-width intervals (repeated stations) are skipped, so the output has
/// `n - 1 - (zero-width intervals)` points for `n` sorted samples.
fn kh_filter(sorted: &[VlfSample]) -> Series {
    let points = sorted
        .windows(2)
        .filter_map(|pair| {
            let dx = pair[1].station - pair[0].station;
            if dx == 0.0 {
                return None;
            }
            let x_mid = (pair[0].station + pair[1].station) / 2.0;
            let slope = (pair[1].in_phase - pair[0].in_phase) / dx;
            Some([x_mid, slope])
        })
        .collect();

    let mut s = Series::new("KH Filter", points);
    s.style.dashed = true;
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::parse::parse;

    fn caps() -> RenderCaps {
        RenderCaps { annotations: true }
    }

    fn kh_on() -> VlfConfig {
        VlfConfig {
            show_kh_filter: true,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn worked_example_series_and_derivative() {
        let rows = parse("0,45,-10\n10,55,-12\n20,40,-15");
        let out = transform(&rows, &kh_on(), caps()).unwrap();

        assert_eq!(out.series[0].label, "In-Phase (%)");
        assert_eq!(
            out.series[0].points,
            vec![[0.0, 45.0], [10.0, 55.0], [20.0, 40.0]]
        );
        assert_eq!(
            out.series[1].points,
            vec![[0.0, -10.0], [10.0, -12.0], [20.0, -15.0]]
        );

        let kh = &out.series[2];
        assert_eq!(kh.label, "KH Filter");
        assert_eq!(kh.len(), 2);
        assert!(approx(kh.points[0][0], 5.0) && approx(kh.points[0][1], 1.0));
        assert!(approx(kh.points[1][0], 15.0) && approx(kh.points[1][1], -1.5));
        assert!(kh.style.dashed);
    }

    #[test]
    fn sorts_by_station_and_series_lengths_match() {
        let rows = parse("20,40,-15\n0,45,-10\n10,55,-12");
        let out = transform(&rows, &kh_on(), caps()).unwrap();

        assert_eq!(out.series[0].len(), out.series[1].len());
        for s in &out.series[..2] {
            let xs: Vec<f64> = s.points.iter().map(|p| p[0]).collect();
            assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn duplicate_stations_skip_zero_width_intervals() {
        let rows = parse("0,45,-10\n10,55,-12\n10,50,-11\n20,40,-15");
        let out = transform(&rows, &kh_on(), caps()).unwrap();
        // 4 samples → 3 intervals, one of them zero-width
        assert_eq!(out.series[2].len(), 2);
    }

    #[test]
    fn kh_gated_off_by_capability_flag() {
        let rows = parse("0,45,-10\n10,55,-12");
        let out = transform(&rows, &kh_on(), RenderCaps { annotations: false }).unwrap();
        assert_eq!(out.series.len(), 2);

        let out = transform(
            &rows,
            &VlfConfig {
                show_kh_filter: false,
            },
            caps(),
        )
        .unwrap();
        assert_eq!(out.series.len(), 2);
    }

    #[test]
    fn short_rows_skipped_with_warning_not_abort() {
        let rows = parse("0,45\n10,55,-12\n20,40,-15");
        let out = transform(&rows, &kh_on(), caps()).unwrap();
        assert_eq!(out.series[0].len(), 2);
        assert_eq!(
            out.warnings,
            vec![TransformWarning::MalformedRecord {
                row_index: 0,
                fields: 2
            }]
        );
    }

    #[test]
    fn all_rows_malformed_is_empty_dataset() {
        let rows = parse("0,45\n10,55");
        assert_eq!(
            transform(&rows, &kh_on(), caps()).unwrap_err(),
            TransformError::EmptyDataset
        );
    }

    #[test]
    fn metrics_count_and_max_amplitude() {
        let rows = parse("0,45,-10\n10,55,-12\n20,40,-15");
        let out = transform(&rows, &kh_on(), caps()).unwrap();
        assert_eq!(out.metrics.get("Points"), Some("3"));
        assert_eq!(out.metrics.get("Max Amp"), Some("55.0 %"));
    }
}
