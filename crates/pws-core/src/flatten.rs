//! Flattening of nested records
//!
//! Nested objects are collapsed into a single-level mapping keyed by the
//! terminal field name. The path to a leaf is discarded, so two leaves with
//! the same name collide: the key keeps the position where it was first
//! seen and takes the value seen last, walking fields in document order
//! (depth first).

use crate::error::{PwsError, Result};
use crate::record::{FlatRecord, Node, Record};
use tracing::debug;

/// Flatten a batch of records, one output per input, same order
pub fn flatten(records: &[Record]) -> Result<Vec<FlatRecord>> {
    if records.is_empty() {
        return Err(PwsError::EmptyInput);
    }

    let flat: Vec<FlatRecord> = records.iter().map(flatten_record).collect();
    debug!("Flattened {} records", flat.len());
    Ok(flat)
}

/// Flatten a single record
///
/// A record whose root is not an object has no named leaves and yields an
/// empty mapping.
pub fn flatten_record(record: &Record) -> FlatRecord {
    let mut acc = FlatRecord::new();
    if let Node::Branch(fields) = record.root() {
        collect_leaves(fields, &mut acc);
    }
    acc
}

fn collect_leaves(fields: &[(String, Node)], acc: &mut FlatRecord) {
    for (name, node) in fields {
        match node {
            Node::Branch(children) => collect_leaves(children, acc),
            Node::Leaf(leaf) => {
                acc.insert(name.as_str(), leaf.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Leaf;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn records(values: Vec<Value>) -> Vec<Record> {
        values.into_iter().map(Record::from).collect()
    }

    fn flat(value: Value) -> FlatRecord {
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        map.into_iter()
            .map(|(k, v)| match Node::from(v) {
                Node::Leaf(leaf) => (k, leaf),
                Node::Branch(_) => panic!("expected flat object"),
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(flatten(&[]), Err(PwsError::EmptyInput)));
    }

    #[test]
    fn test_preserves_record_count() {
        for n in [1, 2, 7] {
            let input: Vec<Record> = (0..n)
                .map(|i| Record::from(json!({"epoch": i, "metric": {"temp": i * 2}})))
                .collect();
            assert_eq!(flatten(&input).unwrap().len(), n);
        }
    }

    #[test]
    fn test_idempotent_on_flat_record() {
        let value = json!({"stationID": "KMAHANOV10", "epoch": 1700000000, "qcStatus": 1, "realtimeFrequency": null});
        let out = flatten(&records(vec![value.clone()])).unwrap();
        assert_eq!(out, vec![flat(value)]);
    }

    #[test]
    fn test_nesting_discarded() {
        let out = flatten(&records(vec![json!({"a": {"b": 1, "c": 2}, "d": 3})])).unwrap();
        assert_eq!(out[0], flat(json!({"b": 1, "c": 2, "d": 3})));
    }

    #[test]
    fn test_collision_last_value_first_position() {
        let out = flatten(&records(vec![json!({"a": {"x": 1}, "b": {"x": 2}})])).unwrap();
        assert_eq!(out[0].keys().collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(out[0].get("x"), Some(&Leaf::Number(2.into())));
    }

    #[test]
    fn test_collision_between_levels() {
        let out = flatten(&records(vec![json!({"temp": 10, "metric": {"temp": 12, "dewpt": 5}, "tz": "UTC"})]))
            .unwrap();
        assert_eq!(out[0].keys().collect::<Vec<_>>(), vec!["temp", "dewpt", "tz"]);
        assert_eq!(out[0].get("temp"), Some(&Leaf::Number(12.into())));
    }

    #[test]
    fn test_deep_nesting_depth_first() {
        let out = flatten(&records(vec![json!({
            "a": {"b": {"c": {"d": "deep"}}, "e": 1},
            "f": false
        })]))
        .unwrap();
        assert_eq!(out[0], flat(json!({"d": "deep", "e": 1, "f": false})));
    }

    #[test]
    fn test_null_is_leaf_and_empty_object_vanishes() {
        let out = flatten(&records(vec![json!({"gust": null, "extra": {}, "uv": 0.3})])).unwrap();
        assert_eq!(out[0].keys().collect::<Vec<_>>(), vec!["gust", "uv"]);
        assert_eq!(out[0].get("gust"), Some(&Leaf::Null));
    }

    #[test]
    fn test_arrays_not_recursed() {
        let out = flatten(&records(vec![json!({"tags": [{"x": 1}], "id": 1})])).unwrap();
        assert_eq!(out[0].get("tags"), Some(&Leaf::Opaque(json!([{"x": 1}]))));
        assert!(!out[0].contains_key("x"));
    }

    #[test]
    fn test_non_object_record_yields_empty() {
        let out = flatten(&records(vec![json!(5), json!({"a": 1})])).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].is_empty());
        assert_eq!(out[1].len(), 1);
    }

    #[test]
    fn test_observation_shape() {
        let obs = json!({
            "stationID": "KMAHANOV10",
            "obsTimeUtc": "2024-05-01T12:00:00Z",
            "humidity": 63,
            "metric": {"temp": 14.2, "windGust": 3.1, "precipTotal": 0.0}
        });
        let out = flatten(&records(vec![obs])).unwrap();
        assert_eq!(
            out[0].keys().collect::<Vec<_>>(),
            vec!["stationID", "obsTimeUtc", "humidity", "temp", "windGust", "precipTotal"]
        );
    }
}
