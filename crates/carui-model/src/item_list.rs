#![forbid(unsafe_code)]

//! Item lists and sectioned item lists.

use serde::{Deserialize, Serialize};

use crate::row::Row;

/// An ordered list of rows plus an optional empty-state message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    rows: Vec<Row>,
    no_items_message: Option<String>,
}

impl ItemList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    #[must_use]
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Set the message shown when the list has no rows.
    #[must_use]
    pub fn no_items_message(mut self, message: impl Into<String>) -> Self {
        self.no_items_message = Some(message.into());
        self
    }

    /// The rows in original order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The empty-state message, if one was set.
    #[must_use]
    pub fn empty_message(&self) -> Option<&str> {
        self.no_items_message.as_deref()
    }
}

/// An item list paired with a section header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionedItemList {
    header: String,
    list: ItemList,
}

impl SectionedItemList {
    /// Create a section from a header and its list.
    #[must_use]
    pub fn new(header: impl Into<String>, list: ItemList) -> Self {
        Self {
            header: header.into(),
            list,
        }
    }

    /// The section header.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The section's list.
    #[must_use]
    pub fn list(&self) -> &ItemList {
        &self.list
    }
}
