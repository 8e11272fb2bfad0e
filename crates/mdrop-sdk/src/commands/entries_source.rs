//! CSV input of raw entries.

use std::io::Read;
use std::path::Path;

use eyre::Context as _;
use mdrop_core::base::RawEntry;
use tracing::{info, instrument};

/// Read raw entries from a CSV file with a header row containing `address` and `amount`.
///
/// The whole file is read up front and the handle released before parsing.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid CSV with the required columns.
#[instrument(skip_all, fields(csv = %path.display()))]
pub async fn read_entries(path: &Path) -> eyre::Result<Vec<RawEntry>> {
    let contents = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read CSV file {}", path.display()))?;
    let entries = parse_entries(contents.as_slice())
        .with_context(|| format!("Failed to parse CSV file {}", path.display()))?;
    info!(count = entries.len(), "Loaded entries");
    Ok(entries)
}

/// Parse raw entries from CSV.
///
/// Values are trimmed, empty lines are skipped and unknown columns are ignored. No validation
/// of the address or amount happens here.
///
/// # Errors
/// Returns an error if the CSV is malformed or a required column is missing.
pub fn parse_entries(reader: impl Read) -> eyre::Result<Vec<RawEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    reader
        .deserialize::<RawEntry>()
        .enumerate()
        .map(|(index, row)| {
            row.map(|raw| RawEntry::new(&raw.address, &raw.amount))
                .with_context(|| format!("Invalid CSV row at index {index}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing, reason = "Test code")]

    use tempfile::tempdir;

    use super::*;

    const ADDR_1: &str = "0x0000000000000000000000000000000000000001";
    const ADDR_2: &str = "0x0000000000000000000000000000000000000002";

    #[test]
    fn parses_rows_in_order() {
        let csv = format!("address,amount\n{ADDR_1},100\n{ADDR_2},200\n");
        let entries = parse_entries(csv.as_bytes()).expect("csv should parse");

        assert_eq!(
            entries,
            vec![RawEntry::new(ADDR_1, "100"), RawEntry::new(ADDR_2, "200")]
        );
    }

    #[test]
    fn trims_and_skips_empty_lines() {
        let csv = format!("address , amount\n\n  {ADDR_1} ,  100 \n\n{ADDR_2},200\n\n");
        let entries = parse_entries(csv.as_bytes()).expect("csv should parse");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].address, ADDR_1);
        assert_eq!(entries[0].amount, "100");
    }

    #[test]
    fn ignores_extra_columns_and_order() {
        let csv = format!("note,amount,address\nfirst,100,{ADDR_1}\n");
        let entries = parse_entries(csv.as_bytes()).expect("csv should parse");

        assert_eq!(entries, vec![RawEntry::new(ADDR_1, "100")]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = format!("address\n{ADDR_1}\n");
        assert!(parse_entries(csv.as_bytes()).is_err());
    }

    #[test]
    fn header_only_is_empty() {
        let entries = parse_entries("address,amount\n".as_bytes()).expect("csv should parse");
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn reads_from_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("entries.csv");
        std::fs::write(&path, format!("address,amount\n{ADDR_1},7\n")).expect("write csv");

        let entries = read_entries(&path).await.expect("file should load");
        assert_eq!(entries, vec![RawEntry::new(ADDR_1, "7")]);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let err = read_entries(&dir.path().join("absent.csv"))
            .await
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("Failed to read CSV file"), "{err:?}");
    }
}
