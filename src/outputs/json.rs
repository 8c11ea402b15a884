//! JSON sidecar output.
//!
//! Writes the same ordered rows as the CSV report as a JSON array of
//! objects. Keys follow the schema column order.

use crate::models::Cell;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

struct OrderedRow<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl Serialize for OrderedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Render `rows` as a pretty-printed JSON array keyed by `columns`.
pub fn rows_to_json(columns: &[String], rows: &[Vec<Cell>]) -> serde_json::Result<String> {
    let ordered: Vec<OrderedRow<'_>> = rows
        .iter()
        .map(|cells| OrderedRow { columns, cells })
        .collect();
    serde_json::to_string_pretty(&ordered)
}

/// Write `rows` to `path` as JSON, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_rows(
    path: &Path,
    columns: &[String],
    rows: &[Vec<Cell>],
) -> Result<(), Box<dyn Error>> {
    let json = rows_to_json(columns, rows)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(rows = rows.len(), "Wrote JSON rows");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_to_json_keeps_column_order() {
        let columns = vec!["URL_ID".to_string(), "WORD COUNT".to_string(), "FOG INDEX".to_string()];
        let rows = vec![vec![
            Cell::Text("z1".to_string()),
            Cell::Count(12),
            Cell::Ratio(2.5),
        ]];
        let json = rows_to_json(&columns, &rows).unwrap();
        let url_id = json.find("URL_ID").unwrap();
        let words = json.find("WORD COUNT").unwrap();
        let fog = json.find("FOG INDEX").unwrap();
        assert!(url_id < words && words < fog);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["WORD COUNT"], 12);
        assert_eq!(value[0]["FOG INDEX"], 2.5);
    }

    #[tokio::test]
    async fn test_write_rows_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rows.json");
        write_rows(&path, &["URL_ID".to_string()], &[vec![Cell::Text("a".to_string())]])
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value[0]["URL_ID"], "a");
    }
}
