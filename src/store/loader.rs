//! Bulk loading of JSON row data.
//!
//! Input is an array of flat objects. The first record's keys, in order,
//! become the header row (row 0); record `i` lands on row `i + 1`.

use serde::Serialize;
use serde_json::Value;

use super::CellStore;
use crate::error::{GridError, Result};

/// What a bulk load wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    /// Rows written, header row included.
    pub rows: u32,
    pub columns: u32,
    /// Non-empty cells written.
    pub cells: usize,
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

impl CellStore {
    /// Replace the store's content with a JSON array of records.
    ///
    /// Rows and columns beyond `total_rows` / `total_cols` are dropped.
    /// On error the store is left untouched.
    pub fn load_json_rows(
        &mut self,
        json: &str,
        total_rows: u32,
        total_cols: u32,
    ) -> Result<LoadSummary> {
        let parsed: Value = serde_json::from_str(json)?;
        let Value::Array(records) = parsed else {
            return Err(GridError::InvalidData(
                "expected a JSON array of objects".into(),
            ));
        };

        let Some(first) = records.first() else {
            log::info!("loaded empty record list");
            self.clear();
            return Ok(LoadSummary::default());
        };
        let Value::Object(first) = first else {
            return Err(GridError::InvalidData(
                "first record must be a JSON object".into(),
            ));
        };

        let mut headers: Vec<&String> = first.keys().collect();
        if headers.len() > total_cols as usize {
            log::warn!(
                "dropping {} columns beyond the grid width of {total_cols}",
                headers.len() - total_cols as usize
            );
            headers.truncate(total_cols as usize);
        }

        let mut loaded = CellStore::new();
        let mut summary = LoadSummary {
            rows: 1,
            columns: u32::try_from(headers.len()).unwrap_or(total_cols),
            cells: 0,
        };
        for (col, key) in (0u32..).zip(headers.iter()) {
            if !key.is_empty() {
                loaded.set(0, col, key);
                summary.cells += 1;
            }
        }

        let capacity = total_rows.saturating_sub(1) as usize;
        if records.len() > capacity {
            log::warn!(
                "dropping {} records beyond the grid height of {total_rows}",
                records.len() - capacity
            );
        }
        for (row, record) in (1u32..).zip(records.iter().take(capacity)) {
            let Value::Object(fields) = record else {
                log::warn!("skipping non-object record for row {row}");
                continue;
            };
            for (col, key) in (0u32..).zip(headers.iter()) {
                let Some(text) = fields.get(key.as_str()).and_then(cell_text) else {
                    continue;
                };
                if !text.is_empty() {
                    loaded.set(row, col, &text);
                    summary.cells += 1;
                }
            }
            summary.rows = row + 1;
        }

        log::info!(
            "loaded {} rows x {} columns ({} cells)",
            summary.rows,
            summary.columns,
            summary.cells
        );
        *self = loaded;
        Ok(summary)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PEOPLE: &str = r#"[
        {"name": "Ada", "age": 36, "active": true},
        {"name": "Linus", "age": 54, "active": null},
        {"age": 41, "name": "Grace", "extra": "ignored"}
    ]"#;

    #[test]
    fn headers_then_records() {
        let mut store = CellStore::new();
        let summary = store.load_json_rows(PEOPLE, 100, 10).unwrap();
        assert_eq!(summary, LoadSummary { rows: 4, columns: 3, cells: 10 });
        assert_eq!(store.value(0, 0), "name");
        assert_eq!(store.value(0, 1), "age");
        assert_eq!(store.value(0, 2), "active");
        assert_eq!(store.value(1, 0), "Ada");
        assert_eq!(store.value(1, 2), "true");
        assert!(!store.has_content(2, 2));
        assert_eq!(store.value(3, 0), "Grace");
        assert_eq!(store.value(3, 1), "41");
    }

    #[test]
    fn load_replaces_previous_content() {
        let mut store = CellStore::new();
        store.set(50, 5, "old");
        store.load_json_rows(PEOPLE, 100, 10).unwrap();
        assert!(!store.has_content(50, 5));
    }

    #[test]
    fn bounded_by_grid_size() {
        let mut store = CellStore::new();
        let summary = store.load_json_rows(PEOPLE, 3, 2).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.columns, 2);
        assert!(!store.has_content(0, 2));
        assert!(!store.has_content(3, 0));
    }

    #[test]
    fn rejects_wrong_shapes() {
        let mut store = CellStore::new();
        assert!(matches!(
            store.load_json_rows(r#"{"a": 1}"#, 10, 10),
            Err(GridError::InvalidData(_))
        ));
        assert!(matches!(
            store.load_json_rows("[1, 2]", 10, 10),
            Err(GridError::InvalidData(_))
        ));
        assert!(matches!(store.load_json_rows("[", 10, 10), Err(GridError::Json(_))));
        assert_eq!(store.load_json_rows("[]", 10, 10).unwrap(), LoadSummary::default());
    }

    #[test]
    fn failed_load_keeps_existing_cells() {
        let mut store = CellStore::new();
        store.set(0, 0, "X");
        store.set(7, 3, "kept");
        assert!(store.load_json_rows("[1, 2]", 10, 10).is_err());
        assert!(store.load_json_rows(r#"{"a": 1}"#, 10, 10).is_err());
        assert_eq!(store.value(0, 0), "X");
        assert_eq!(store.value(7, 3), "kept");
        assert_eq!(store.len(), 2);
    }
}
