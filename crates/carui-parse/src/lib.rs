#![forbid(unsafe_code)]

//! Render-tree parsing and template translation.
//!
//! An application runtime describes one screen as a JSON object tree in
//! which every node carries a `type` discriminator. [`TemplateParser`]
//! validates that tree, applies the documented defaults for optional
//! fields, and builds the immutable template vocabulary from `carui-model`.
//!
//! Parsing is a pure function of one input tree: it holds no state between
//! calls, performs no I/O, and cannot block. Unrecognized top-level
//! discriminators fall back to a safe loading pane; missing required fields
//! abort the whole parse with a [`ParseError`] naming the offending field
//! path.

pub mod error;
pub mod node;
pub mod parser;

pub use error::{ParseError, Result};
pub use node::Node;
pub use parser::TemplateParser;
