//! CSV table input and output.
//!
//! Three tables pass through here:
//!
//! - the input list, which must have `URL_ID` and `URL` columns
//! - the output schema, of which only the header row is used
//! - the final report, whose columns are exactly the schema's, in order
//!
//! Rows are matched to the schema before anything is written, so a row that
//! lacks a schema column aborts the write instead of producing a partial or
//! misaligned table.

use crate::models::{COL_URL, COL_URL_ID, Cell, InputRow};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: required column `{column}` not found")]
    MissingInputColumn { path: PathBuf, column: &'static str },
    #[error("{0}: output schema has no columns")]
    EmptySchema(PathBuf),
    #[error("row {row} (URL_ID {url_id}) has no value for schema column `{column}`")]
    MissingColumn {
        row: usize,
        url_id: String,
        column: String,
    },
}

/// Read every `(URL_ID, URL)` pair from the input table, in file order.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_input_rows(path: &Path) -> Result<Vec<InputRow>, TableError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for column in [COL_URL_ID, COL_URL] {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(TableError::MissingInputColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    reader.set_headers(headers.iter().map(str::trim).collect());

    let rows = reader
        .deserialize::<InputRow>()
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = rows.len(), "Read input rows");
    Ok(rows)
}

/// Read the column names, in order, from the output schema's header row.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_schema_columns(path: &Path) -> Result<Vec<String>, TableError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect();
    if columns.is_empty() {
        return Err(TableError::EmptySchema(path.to_path_buf()));
    }
    info!(count = columns.len(), "Read output schema");
    Ok(columns)
}

/// Arrange each field map into a row following `columns`.
///
/// Fields not named by the schema are dropped. A schema column missing from
/// any row is an error.
pub fn order_rows(
    columns: &[String],
    rows: &[HashMap<&'static str, Cell>],
) -> Result<Vec<Vec<Cell>>, TableError> {
    rows.iter()
        .enumerate()
        .map(|(i, fields)| {
            columns
                .iter()
                .map(|column| {
                    fields
                        .get(column.as_str())
                        .cloned()
                        .ok_or_else(|| TableError::MissingColumn {
                            row: i,
                            url_id: fields
                                .get(COL_URL_ID)
                                .map(Cell::to_string)
                                .unwrap_or_default(),
                            column: column.clone(),
                        })
                })
                .collect::<Result<Vec<Cell>, TableError>>()
        })
        .collect()
}

/// Write a header of `columns` followed by `rows`.
pub fn write_table<W: Write>(
    writer: W,
    columns: &[String],
    rows: &[Vec<Cell>],
) -> Result<(), TableError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(columns)?;
    for row in rows {
        wtr.write_record(row.iter().map(Cell::to_string))?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_table`] into a newly created file at `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display(), rows = rows.len()))]
pub fn write_table_file(
    path: &Path,
    columns: &[String],
    rows: &[Vec<Cell>],
) -> Result<(), TableError> {
    write_table(File::create(path)?, columns, rows)?;
    info!("Wrote output table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_input_rows_in_order() {
        let file = write_temp("URL_ID,URL\n2,https://b.example\n1,https://a.example\n");
        let rows = read_input_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].url_id, "2");
        assert_eq!(rows[1].url, "https://a.example");
    }

    #[test]
    fn test_read_input_rows_trims_header_names() {
        let file = write_temp(" URL_ID , URL \nx,https://x.example\n");
        let rows = read_input_rows(file.path()).unwrap();
        assert_eq!(rows[0].url_id, "x");
    }

    #[test]
    fn test_read_input_rows_missing_column() {
        let file = write_temp("ID,URL\n1,https://a.example\n");
        let err = read_input_rows(file.path()).unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingInputColumn { column: "URL_ID", .. }
        ));
    }

    #[test]
    fn test_read_schema_header_only() {
        let file = write_temp("URL_ID,URL,WORD COUNT\n");
        assert_eq!(
            read_schema_columns(file.path()).unwrap(),
            cols(&["URL_ID", "URL", "WORD COUNT"])
        );
    }

    #[test]
    fn test_read_schema_empty_is_error() {
        let file = write_temp("\n");
        assert!(read_schema_columns(file.path()).is_err());
    }

    #[test]
    fn test_order_rows_follows_schema() {
        let row = HashMap::from([
            ("WORD COUNT", Cell::Count(10)),
            ("URL", Cell::Text("https://a.example".to_string())),
            ("URL_ID", Cell::Text("1".to_string())),
            ("EXTRA", Cell::Ratio(0.5)),
        ]);
        let columns = cols(&["URL_ID", "URL", "WORD COUNT"]);
        let ordered = order_rows(&columns, &[row]).unwrap();
        assert_eq!(
            ordered,
            vec![vec![
                Cell::Text("1".to_string()),
                Cell::Text("https://a.example".to_string()),
                Cell::Count(10),
            ]]
        );
    }

    #[test]
    fn test_order_rows_missing_column_fails() {
        let row = HashMap::from([("URL_ID", Cell::Text("9".to_string()))]);
        let columns = cols(&["URL_ID", "FOG INDEX"]);
        let err = order_rows(&columns, &[row]).unwrap_err();
        match err {
            TableError::MissingColumn {
                row,
                url_id,
                column,
            } => {
                assert_eq!(row, 0);
                assert_eq!(url_id, "9");
                assert_eq!(column, "FOG INDEX");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_table_layout() {
        let columns = cols(&["URL_ID", "POLARITY SCORE", "WORD COUNT"]);
        let rows = vec![vec![
            Cell::Text("a,b".to_string()),
            Cell::Ratio(-0.5),
            Cell::Count(3),
        ]];
        let mut out = Vec::new();
        write_table(&mut out, &columns, &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "URL_ID,POLARITY SCORE,WORD COUNT\n\"a,b\",-0.5,3\n"
        );
    }

    #[test]
    fn test_write_table_file_roundtrip_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let columns = cols(&["URL_ID", "URL"]);
        write_table_file(&path, &columns, &[]).unwrap();
        assert_eq!(read_schema_columns(&path).unwrap(), columns);
    }
}
