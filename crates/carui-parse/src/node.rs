#![forbid(unsafe_code)]

//! Borrowing accessor over one render-tree node.
//!
//! A render-tree node is a JSON object with a `type` discriminator. [`Node`]
//! wraps one such object together with its field path from the root, and
//! turns every field access into an explicit present/absent result:
//!
//! - *optional* lookups (`string`, `boolean`, `integer`, `child`, `strings`)
//!   return `None` when the key is absent **or** holds the wrong JSON type —
//!   the caller applies its documented default;
//! - *required* lookups (`require_*`) return a [`ParseError`] carrying the
//!   full field path when the key is absent or wrong-typed.
//!
//! Nothing here recurses on its own; the parser drives traversal and decides
//! which fields matter for which discriminator.

use serde_json::{Map, Value};

use crate::error::{ParseError, Result};

/// A borrowed render-tree node plus its path from the root.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Node<'a> {
    /// Wrap the root of a render tree. Returns `None` when the root is not
    /// a JSON object.
    #[must_use]
    pub fn from_root(value: &'a Value) -> Option<Self> {
        value.as_object().map(|map| Self {
            map,
            path: String::new(),
        })
    }

    /// The node's path from the root; empty for the root itself.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The node's `type` discriminator, if present and a string.
    #[must_use]
    pub fn node_type(&self) -> Option<&'a str> {
        self.map.get("type").and_then(Value::as_str)
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    /// Optional string field.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).and_then(Value::as_str)
    }

    /// Required string field.
    pub fn require_string(&self, key: &str) -> Result<&'a str> {
        match self.map.get(key) {
            None => Err(ParseError::missing(self.field_path(key))),
            Some(value) => value
                .as_str()
                .ok_or_else(|| ParseError::invalid(self.field_path(key), "string")),
        }
    }

    /// Optional boolean field.
    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.map.get(key).and_then(Value::as_bool)
    }

    /// Optional integer field.
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.map.get(key).and_then(Value::as_i64)
    }

    /// Required numeric field.
    pub fn require_f64(&self, key: &str) -> Result<f64> {
        match self.map.get(key) {
            None => Err(ParseError::missing(self.field_path(key))),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| ParseError::invalid(self.field_path(key), "number")),
        }
    }

    /// Optional object-valued field, wrapped as a child node.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<Node<'a>> {
        self.map.get(key).and_then(Value::as_object).map(|map| Node {
            map,
            path: self.field_path(key),
        })
    }

    /// Required array of nodes.
    ///
    /// Array entries that are not objects are skipped silently; each kept
    /// entry's path records its original index in the sequence.
    pub fn require_nodes(&self, key: &str) -> Result<Vec<Node<'a>>> {
        let entries = match self.map.get(key) {
            None => return Err(ParseError::missing(self.field_path(key))),
            Some(value) => value
                .as_array()
                .ok_or_else(|| ParseError::invalid(self.field_path(key), "array"))?,
        };

        let base = self.field_path(key);
        Ok(entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                entry.as_object().map(|map| Node {
                    map,
                    path: format!("{base}[{index}]"),
                })
            })
            .collect())
    }

    /// Optional array of strings; defaults to empty, non-string entries are
    /// skipped.
    #[must_use]
    pub fn strings(&self, key: &str) -> Vec<&'a str> {
        self.map
            .get(key)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
