//! CSV parser for the survey dataset.
//!
//! Produces a loosely-typed table: header names in file order plus raw
//! string cells. Schema reconciliation happens later, in [`crate::reconcile`].

use anyhow::{Context, Result};
use tracing::warn;

/// A parsed tabular dataset before any schema reconciliation.
///
/// `headers` preserves file order; downstream column resolution scans it
/// in that order. Rows may be shorter than the header row (missing cells
/// read as absent).
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parses delimited text into a [`ParsedTable`].
///
/// Row-level syntax errors are logged and skipped; processing continues
/// with whatever rows parsed cleanly. Only an unreadable header row fails
/// the whole parse.
///
/// # Errors
///
/// Returns an error if the input has no readable header row.
pub fn parse_table(bytes: &[u8]) -> Result<ParsedTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    let mut bad_rows = 0usize;

    for result in rdr.records() {
        match result {
            Ok(record) => rows.push(record.iter().map(|c| c.to_string()).collect()),
            Err(e) => {
                bad_rows += 1;
                warn!(error = %e, "Skipping malformed row");
            }
        }
    }

    if bad_rows > 0 {
        warn!(bad_rows, kept = rows.len(), "Some rows failed to parse");
    }

    Ok(ParsedTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let input = b"diet_group,sex,mean_ghgs\nvegan,female,2.5\nmeat100,male,10.1\n";
        let table = parse_table(input).unwrap();

        assert_eq!(table.headers, vec!["diet_group", "sex", "mean_ghgs"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["vegan", "female", "2.5"]);
    }

    #[test]
    fn test_parse_preserves_header_order() {
        let input = b"mean_ghgs,diet_group,sex\n1.0,vegan,female\n";
        let table = parse_table(input).unwrap();

        assert_eq!(table.headers, vec!["mean_ghgs", "diet_group", "sex"]);
    }

    #[test]
    fn test_parse_ragged_rows_kept() {
        // Flexible mode: short rows survive, missing cells are simply absent.
        let input = b"diet_group,sex,mean_ghgs\nvegan\nmeat,male,3.2\n";
        let table = parse_table(input).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["vegan"]);
    }

    #[test]
    fn test_parse_empty_input_has_no_rows() {
        let table = parse_table(b"").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let input = b"diet_group , sex\n vegan , female \n";
        let table = parse_table(input).unwrap();

        assert_eq!(table.headers, vec!["diet_group", "sex"]);
        assert_eq!(table.rows[0], vec!["vegan", "female"]);
    }
}
