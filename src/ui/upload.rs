use std::path::Path;

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Upload decoder: file → raw delimited text for the input panel
// ---------------------------------------------------------------------------

/// Decode an uploaded file into the tab-delimited text the engine consumes.
/// Dispatch by extension.
///
/// * `.csv` – parsed with the CSV reader (headerless, ragged rows allowed)
///   and re-joined with tabs, so quoted fields survive.
/// * anything else – read verbatim; the record parser handles tab, comma,
///   and space delimiters itself.
pub fn decode_file(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => decode_csv(path),
        _ => std::fs::read_to_string(path).context("reading text file"),
    }
}

fn decode_csv(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let mut lines = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        lines.push(record.iter().collect::<Vec<_>>().join("\t"));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("geoviz_test_{name}"));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_rows_are_rejoined_with_tabs() {
        let path = temp_file("upload.csv", "0,45,-10\n10,55,-12\n");
        let text = decode_file(&path).unwrap();
        assert_eq!(text, "0\t45\t-10\n10\t55\t-12");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn plain_text_read_verbatim() {
        let path = temp_file("upload.txt", "0 45 -10\n");
        let text = decode_file(&path).unwrap();
        assert_eq!(text, "0 45 -10\n");
        std::fs::remove_file(path).ok();
    }
}
