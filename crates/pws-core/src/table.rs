//! Rectangular tables built from flattened records

use crate::error::{PwsError, Result};
use crate::record::{FlatRecord, Leaf};
use std::collections::HashSet;
use tracing::debug;

/// Header list plus rows aligned to it
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Leaf>>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Leaf>] {
        &self.rows
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows, excluding the header row
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows rendered as text, header row first
    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.headers.clone())
            .chain(
                self.rows
                    .iter()
                    .map(|row| row.iter().map(Leaf::to_text).collect()),
            )
            .collect()
    }
}

/// Build a table whose header set comes from the first record
///
/// Every row is aligned by header key. A record missing a header key gets
/// a null cell in that column; keys that the first record lacks are
/// dropped. A first record without fields is `NoHeaders`.
pub fn build_table(records: &[FlatRecord]) -> Result<Table> {
    let first = records.first().ok_or(PwsError::EmptyInput)?;
    if first.is_empty() {
        return Err(PwsError::NoHeaders);
    }
    let headers: Vec<String> = first.keys().map(str::to_string).collect();
    let header_set: HashSet<&str> = headers.iter().map(String::as_str).collect();

    let mut dropped = 0usize;
    let rows: Vec<Vec<Leaf>> = records
        .iter()
        .map(|record| {
            dropped += record.keys().filter(|k| !header_set.contains(k)).count();
            headers
                .iter()
                .map(|h| record.get(h).cloned().unwrap_or(Leaf::Null))
                .collect::<Vec<Leaf>>()
        })
        .collect();

    if dropped > 0 {
        debug!("Dropped {} values with keys outside the header set", dropped);
    }

    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(n: i64) -> Leaf {
        Leaf::Number(n.into())
    }

    fn record(fields: &[(&str, Leaf)]) -> FlatRecord {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(build_table(&[]), Err(PwsError::EmptyInput)));
    }

    #[test]
    fn test_first_record_without_fields_is_error() {
        let result = build_table(&[record(&[]), record(&[("a", num(1))])]);
        assert!(matches!(result, Err(PwsError::NoHeaders)));
    }

    #[test]
    fn test_basic_table() {
        let table = build_table(&[
            record(&[("h1", num(1)), ("h2", num(2))]),
            record(&[("h1", num(3)), ("h2", num(4))]),
        ])
        .unwrap();

        assert_eq!(table.headers(), &["h1".to_string(), "h2".to_string()]);
        assert_eq!(table.rows(), &[vec![num(1), num(2)], vec![num(3), num(4)]]);
        assert_eq!(table.width(), 2);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_missing_key_becomes_blank_in_place() {
        let table = build_table(&[
            record(&[("a", num(1)), ("b", num(2)), ("c", num(3))]),
            record(&[("a", num(4)), ("c", num(6))]),
        ])
        .unwrap();

        assert_eq!(table.rows()[1], vec![num(4), Leaf::Null, num(6)]);
    }

    #[test]
    fn test_rows_follow_header_order_not_record_order() {
        let table = build_table(&[
            record(&[("a", num(1)), ("b", num(2))]),
            record(&[("b", num(20)), ("a", num(10))]),
        ])
        .unwrap();

        assert_eq!(table.rows()[1], vec![num(10), num(20)]);
    }

    #[test]
    fn test_extra_keys_dropped() {
        let table = build_table(&[
            record(&[("a", num(1))]),
            record(&[("a", num(2)), ("z", num(99))]),
        ])
        .unwrap();

        assert_eq!(table.headers(), &["a".to_string()]);
        assert_eq!(table.rows()[1], vec![num(2)]);
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let table = build_table(&[
            record(&[("a", num(1)), ("b", num(2))]),
            record(&[]),
            record(&[("q", num(1))]),
        ])
        .unwrap();

        assert!(table.rows().iter().all(|row| row.len() == table.width()));
    }

    #[test]
    fn test_to_text_rows() {
        let table = build_table(&[record(&[
            ("id", Leaf::Text("KMAHANOV10".into())),
            ("gust", Leaf::Null),
            ("ok", Leaf::Bool(true)),
        ])])
        .unwrap();

        assert_eq!(
            table.to_text_rows(),
            vec![
                vec!["id".to_string(), "gust".to_string(), "ok".to_string()],
                vec!["KMAHANOV10".to_string(), String::new(), "true".to_string()],
            ]
        );
    }
}
