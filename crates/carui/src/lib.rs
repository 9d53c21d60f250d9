#![forbid(unsafe_code)]

//! carui public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the template vocabulary, the render-tree parser, and the
//! interaction runtime from the internal crates, and offers a lightweight
//! prelude for day-to-day usage.
//!
//! # Overview
//!
//! An application runtime emits a declarative render tree (a JSON object
//! tree with `type` discriminators). [`TemplateParser`] translates it into
//! an immutable [`Template`] the display host renders; [`Screen`] holds the
//! latest template for the host to pull; [`RenderContext`] carries pressed
//! elements' integer handles back to the owner as `{id, screen}` events
//! through one [`EventSink`].
//!
//! ```
//! use carui::prelude::*;
//! use serde_json::json;
//!
//! let parser = TemplateParser::new("Local Delivery");
//! let screen = Screen::new("Local Delivery");
//! let context = RenderContext::new("root", |event: InteractionEvent| {
//!     println!("pressed handle {} on {}", event.id, event.screen);
//! });
//!
//! let tree = json!({
//!     "type": "pane-template",
//!     "title": "Orders",
//!     "isLoading": false,
//!     "children": [{"type": "row", "title": "Order #1", "onPress": 7}],
//! });
//! let template = parser.parse_template(&tree)?;
//! screen.set_template(template);
//!
//! let pulled = screen.current_template();
//! if let Some(handle) = pulled.as_pane().unwrap().pane().rows()[0].press_handle() {
//!     context.register(handle).invoke();
//! }
//! # Ok::<(), carui::ParseError>(())
//! ```

// --- Model re-exports ------------------------------------------------------

pub use carui_model::{
    Action, ActionStrip, CarColor, CarLocation, HeaderAction, InteractionHandle, ItemList,
    ListContent, ListTemplate, Metadata, Pane, PaneTemplate, Place, PlaceListMapTemplate, Row,
    SectionedItemList, Template,
};

// --- Parse re-exports ------------------------------------------------------

pub use carui_parse::{Node, ParseError, Result, TemplateParser};

// --- Runtime re-exports ----------------------------------------------------

pub use carui_runtime::{EventSink, InteractionEvent, PressCallback, RenderContext, Screen};

// --- Module access ---------------------------------------------------------

pub use carui_model as model;
pub use carui_parse as parse;
pub use carui_runtime as runtime;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Action, ActionStrip, CarColor, EventSink, HeaderAction, InteractionEvent,
        InteractionHandle, ItemList, ListTemplate, Metadata, Pane, PaneTemplate, ParseError,
        PlaceListMapTemplate, PressCallback, RenderContext, Result, Row, Screen,
        SectionedItemList, Template, TemplateParser,
    };
}
