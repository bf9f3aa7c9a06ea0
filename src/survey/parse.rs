use super::model::RawRow;

// ---------------------------------------------------------------------------
// Record parser: raw delimited text → numeric rows
// ---------------------------------------------------------------------------

/// Parse pasted or uploaded survey text into numeric rows.
///
/// Each line is split on any run of tabs, commas, or spaces and every token
/// is parsed as `f64`. A line is silently excluded (not an error) when it is
/// blank, yields fewer than two fields, or contains a non-numeric token.
/// Line order is preserved; no sorting happens here.
pub fn parse(text: &str) -> Vec<RawRow> {
    text.lines()
        .filter_map(|line| {
            let fields: Option<RawRow> = line
                .split(|c: char| c == '\t' || c == ',' || c == ' ')
                .filter(|tok| !tok.is_empty())
                .map(|tok| tok.parse::<f64>().ok().filter(|v| !v.is_nan()))
                .collect();
            fields.filter(|row| row.len() > 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_delimiters() {
        let rows = parse("0,45,-10\n10\t55\t-12\n20 40 -15");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![0.0, 45.0, -10.0]);
        assert_eq!(rows[1], vec![10.0, 55.0, -12.0]);
        assert_eq!(rows[2], vec![20.0, 40.0, -15.0]);
    }

    #[test]
    fn collapses_delimiter_runs() {
        let rows = parse("1,  2,\t3");
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn drops_blank_and_short_lines() {
        let rows = parse("\n   \n42\n1,2\n");
        // "42" has a single field; blank lines have none
        assert_eq!(rows, vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn drops_non_numeric_lines_without_error() {
        let rows = parse("abc,1,2\n3,4,5");
        assert_eq!(rows, vec![vec![3.0, 4.0, 5.0]]);
    }

    #[test]
    fn explicit_nan_token_drops_the_line() {
        let rows = parse("NaN,1,2\n1,2,3");
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn preserves_input_order() {
        let rows = parse("30,1\n10,2\n20,3");
        let first: Vec<f64> = rows.iter().map(|r| r[0]).collect();
        assert_eq!(first, vec![30.0, 10.0, 20.0]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse("").is_empty());
    }
}
