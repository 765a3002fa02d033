//! Accessors for CouchDB view results.
//!
//! A view response is a JSON object shaped like
//! `{"total_rows": N, "offset": M, "rows": [{"id": .., "key": .., "value": ..}, ..]}`.
//! The functions here read the well-known fields out of an already-decoded
//! `serde_json::Value` without assuming the rest of the document is well
//! formed. For callers who want typed decoding instead, [`ViewResult`] and
//! [`ViewRow`] deserialize the same shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Value of `total_rows`, or -1 if the field is absent or not an integer.
pub fn total_rows(doc: &Value) -> i64 {
    match doc.get("total_rows").and_then(Value::as_i64) {
        Some(n) => n,
        None => {
            debug!("'total_rows' missing or not an integer");
            -1
        }
    }
}

/// Value of `offset`, or -1 if the field is absent or not an integer.
pub fn offset(doc: &Value) -> i64 {
    match doc.get("offset").and_then(Value::as_i64) {
        Some(n) => n,
        None => {
            debug!("'offset' missing or not an integer");
            -1
        }
    }
}

/// The `rows` array, or `None` if the field is absent or not an array.
pub fn rows(doc: &Value) -> Option<&[Value]> {
    match doc.get("rows").and_then(Value::as_array) {
        Some(rows) => Some(rows.as_slice()),
        None => {
            debug!("'rows' missing or not an array");
            None
        }
    }
}

/// The `key` string of `rows[index]`, or `None` if the index is out of
/// range or the field is missing/mistyped.
pub fn row_key(rows: &[Value], index: usize) -> Option<&str> {
    row_field(rows, index, "key").and_then(Value::as_str)
}

/// The `id` string of `rows[index]`, or `None` on the same conditions.
pub fn row_id(rows: &[Value], index: usize) -> Option<&str> {
    row_field(rows, index, "id").and_then(Value::as_str)
}

/// The `value` object of `rows[index]`, or `None` on the same conditions.
pub fn row_value(rows: &[Value], index: usize) -> Option<&Map<String, Value>> {
    row_field(rows, index, "value").and_then(Value::as_object)
}

fn row_field<'a>(rows: &'a [Value], index: usize, field: &str) -> Option<&'a Value> {
    match rows.get(index).and_then(|row| row.get(field)) {
        Some(value) => Some(value),
        None => {
            debug!("'{field}' not found at row {index}");
            None
        }
    }
}

/// Typed form of a view response.
///
/// Reduced views omit `total_rows` and `offset`, so both are optional; a
/// missing `rows` decodes as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default)]
    pub rows: Vec<ViewRow>,
}

/// One entry of a view's `rows` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewRow {
    pub id: String,
    pub key: String,
    pub value: Value,
}
