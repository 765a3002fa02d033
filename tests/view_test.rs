//! couchlite - view accessor and typed decode tests

use couchlite::view::{offset, row_id, row_key, row_value, rows, total_rows};
use couchlite::{ViewResult, ViewRow};
use serde_json::json;

fn sample_doc() -> serde_json::Value {
    json!({
        "total_rows": 3,
        "offset": 1,
        "rows": [
            {"id": "a", "key": "ka", "value": {"x": 1}},
            {"id": "b", "key": "kb", "value": {"x": 2}},
            {"id": "c", "key": "kc", "value": {"x": 3}}
        ]
    })
}

#[test]
fn test_total_rows_present() {
    assert_eq!(total_rows(&sample_doc()), 3);
}

#[test]
fn test_total_rows_absent_is_sentinel() {
    assert_eq!(total_rows(&json!({"offset": 0})), -1);
}

#[test]
fn test_total_rows_wrong_type_is_sentinel() {
    assert_eq!(total_rows(&json!({"total_rows": "three"})), -1);
    assert_eq!(total_rows(&json!({"total_rows": 1.5})), -1);
}

#[test]
fn test_offset_present() {
    assert_eq!(offset(&sample_doc()), 1);
}

#[test]
fn test_offset_absent_is_sentinel() {
    assert_eq!(offset(&json!({"total_rows": 3})), -1);
}

#[test]
fn test_rows_present() {
    let doc = sample_doc();
    let rows = rows(&doc).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_rows_absent_or_wrong_type() {
    assert!(rows(&json!({})).is_none());
    assert!(rows(&json!({"rows": "not an array"})).is_none());
}

#[test]
fn test_row_accessors_by_index() {
    let doc = sample_doc();
    let rows = rows(&doc).unwrap();

    assert_eq!(row_id(rows, 0), Some("a"));
    assert_eq!(row_key(rows, 1), Some("kb"));

    let value = row_value(rows, 2).unwrap();
    assert_eq!(value["x"], 3);
}

#[test]
fn test_row_accessors_out_of_bounds() {
    let doc = sample_doc();
    let rows = rows(&doc).unwrap();

    assert!(row_id(rows, 3).is_none());
    assert!(row_key(rows, 99).is_none());
    assert!(row_value(rows, 3).is_none());
}

#[test]
fn test_row_accessors_missing_fields() {
    let doc = json!({"rows": [{"value": {"x": 1}}]});
    let rows = rows(&doc).unwrap();

    assert!(row_id(rows, 0).is_none());
    assert!(row_key(rows, 0).is_none());
    assert!(row_value(rows, 0).is_some());
}

#[test]
fn test_row_accessors_mistyped_fields() {
    let doc = json!({"rows": [{"id": 7, "key": ["k"], "value": "flat"}]});
    let rows = rows(&doc).unwrap();

    assert!(row_id(rows, 0).is_none());
    assert!(row_key(rows, 0).is_none());
    assert!(row_value(rows, 0).is_none());
}

#[test]
fn test_view_result_from_json() {
    let result: ViewResult = serde_json::from_value(sample_doc()).unwrap();
    assert_eq!(result.total_rows, Some(3));
    assert_eq!(result.offset, Some(1));
    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.rows[0].id, "a");
    assert_eq!(result.rows[0].key, "ka");
    assert_eq!(result.rows[0].value["x"], 1);
}

#[test]
fn test_view_result_reduced_shape() {
    // Reduced views omit total_rows and offset
    let result: ViewResult =
        serde_json::from_value(json!({"rows": [{"id": "a", "key": "k", "value": 10}]})).unwrap();
    assert!(result.total_rows.is_none());
    assert!(result.offset.is_none());
    assert_eq!(result.rows.len(), 1);
}

#[test]
fn test_view_row_to_json() {
    let row = ViewRow {
        id: "a".to_string(),
        key: "ka".to_string(),
        value: json!({"x": 1}),
    };

    let encoded = serde_json::to_value(&row).unwrap();
    assert_eq!(encoded, json!({"id": "a", "key": "ka", "value": {"x": 1}}));
}
