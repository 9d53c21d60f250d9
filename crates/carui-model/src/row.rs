#![forbid(unsafe_code)]

//! List and pane rows.

use serde::{Deserialize, Serialize};

use crate::handle::InteractionHandle;
use crate::metadata::Metadata;

/// A single row in a list or pane.
///
/// A row is browsable exactly when it carries an interaction handle; the two
/// are set together by [`Row::on_press`], so they cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    title: String,
    texts: Vec<String>,
    metadata: Option<Metadata>,
    on_press: Option<InteractionHandle>,
}

impl Row {
    /// Create a new row with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            texts: Vec::new(),
            metadata: None,
            on_press: None,
        }
    }

    /// Append one subtitle line.
    #[must_use]
    pub fn text(mut self, line: impl Into<String>) -> Self {
        self.texts.push(line.into());
        self
    }

    /// Attach metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach the interaction handle fired when the row is pressed.
    ///
    /// This also makes the row browsable.
    #[must_use]
    pub fn on_press(mut self, handle: InteractionHandle) -> Self {
        self.on_press = Some(handle);
        self
    }

    /// The row title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Subtitle lines in original order.
    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// The row's metadata, if any.
    #[must_use]
    pub fn row_metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// The interaction handle, if the row is interactive.
    #[must_use]
    pub fn press_handle(&self) -> Option<InteractionHandle> {
        self.on_press
    }

    /// Whether the host should render the row as browsable.
    #[must_use]
    pub fn is_browsable(&self) -> bool {
        self.on_press.is_some()
    }
}
