//! Record model: tagged JSON trees and their flattened form

use serde_json::{Number, Value};
use std::collections::HashMap;

/// A terminal value in a record tree
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// JSON null, exported as a blank cell
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(Number),
    /// String value
    Text(String),
    /// Array kept as-is; arrays are never recursed into
    Opaque(Value),
}

impl Leaf {
    /// Render the leaf for text formats
    ///
    /// Nulls become an empty string, numbers and opaque arrays use their
    /// compact JSON representation.
    pub fn to_text(&self) -> String {
        match self {
            Leaf::Null => String::new(),
            Leaf::Bool(b) => b.to_string(),
            Leaf::Number(n) => n.to_string(),
            Leaf::Text(s) => s.clone(),
            Leaf::Opaque(v) => v.to_string(),
        }
    }
}

/// A node of a record tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal value
    Leaf(Leaf),
    /// Nested object, fields in document order
    Branch(Vec<(String, Node)>),
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Leaf(Leaf::Null),
            Value::Bool(b) => Node::Leaf(Leaf::Bool(b)),
            Value::Number(n) => Node::Leaf(Leaf::Number(n)),
            Value::String(s) => Node::Leaf(Leaf::Text(s)),
            Value::Array(_) => Node::Leaf(Leaf::Opaque(value)),
            Value::Object(map) => {
                Node::Branch(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

/// One element of a response's record list
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    root: Node,
}

impl Record {
    /// Create a record from its root node
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Root node of the tree
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self::new(Node::from(value))
    }
}

/// Single-level mapping from leaf attribute name to value
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces the value in place.
#[derive(Debug, Clone, Default)]
pub struct FlatRecord {
    entries: Vec<(String, Leaf)>,
    index: HashMap<String, usize>,
}

impl FlatRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: Leaf) -> Option<Leaf> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Leaf> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in key order
    pub fn values(&self) -> impl Iterator<Item = &Leaf> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Leaf)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for FlatRecord {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(String, Leaf)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (String, Leaf)>>(iter: I) -> Self {
        let mut record = FlatRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
