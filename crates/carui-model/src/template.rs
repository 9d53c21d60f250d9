#![forbid(unsafe_code)]

//! The templates a display host can render.
//!
//! A [`Template`] is one of three fixed layouts: a [`PaneTemplate`] (rows of
//! detail text plus pane-level actions), a [`PlaceListMapTemplate`] (an item
//! list backed by a map surface), or a [`ListTemplate`] (a single list or a
//! sequence of headed sections). Hosts hold a template by value and replace
//! it wholesale when a new one is produced.

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionStrip, HeaderAction};
use crate::item_list::{ItemList, SectionedItemList};
use crate::row::Row;

/// The content body of a pane template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    rows: Vec<Row>,
    actions: Vec<Action>,
    loading: bool,
}

impl Pane {
    /// Create an empty, not-loading pane.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pane's loading-display attribute.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Append a row.
    #[must_use]
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Append a pane-level action.
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// The rows in original order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The pane-level actions in original order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Whether the host should render a loading indicator.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// A pane of rows with optional pane-level actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneTemplate {
    title: String,
    pane: Pane,
    header_action: Option<HeaderAction>,
    action_strip: Option<ActionStrip>,
}

impl PaneTemplate {
    /// Create a pane template from a title and its content pane.
    #[must_use]
    pub fn new(title: impl Into<String>, pane: Pane) -> Self {
        Self {
            title: title.into(),
            pane,
            header_action: None,
            action_strip: None,
        }
    }

    /// A titled pane in the loading state, with no content.
    ///
    /// This is the universal safe default shown while nothing better is
    /// available.
    #[must_use]
    pub fn loading(title: impl Into<String>) -> Self {
        Self::new(title, Pane::new().loading(true))
    }

    /// Set the header action.
    #[must_use]
    pub fn header_action(mut self, header_action: HeaderAction) -> Self {
        self.header_action = Some(header_action);
        self
    }

    /// Set the action strip.
    #[must_use]
    pub fn action_strip(mut self, strip: ActionStrip) -> Self {
        self.action_strip = Some(strip);
        self
    }

    /// The template title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The content pane.
    #[must_use]
    pub fn pane(&self) -> &Pane {
        &self.pane
    }

    /// The header action, if one was set.
    #[must_use]
    pub fn header(&self) -> Option<HeaderAction> {
        self.header_action
    }

    /// The action strip, if one was set.
    #[must_use]
    pub fn strip(&self) -> Option<&ActionStrip> {
        self.action_strip.as_ref()
    }
}

/// An item list rendered over the host's map surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceListMapTemplate {
    title: String,
    loading: bool,
    item_list: Option<ItemList>,
    header_action: Option<HeaderAction>,
    action_strip: Option<ActionStrip>,
}

impl PlaceListMapTemplate {
    /// Create a map-backed list template with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            loading: false,
            item_list: None,
            header_action: None,
            action_strip: None,
        }
    }

    /// Set the loading-display attribute.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Attach the item list.
    #[must_use]
    pub fn item_list(mut self, list: ItemList) -> Self {
        self.item_list = Some(list);
        self
    }

    /// Set the header action.
    #[must_use]
    pub fn header_action(mut self, header_action: HeaderAction) -> Self {
        self.header_action = Some(header_action);
        self
    }

    /// Set the action strip.
    #[must_use]
    pub fn action_strip(mut self, strip: ActionStrip) -> Self {
        self.action_strip = Some(strip);
        self
    }

    /// The template title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the host should render a loading indicator.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The item list, absent while loading.
    #[must_use]
    pub fn list(&self) -> Option<&ItemList> {
        self.item_list.as_ref()
    }

    /// The header action, if one was set.
    #[must_use]
    pub fn header(&self) -> Option<HeaderAction> {
        self.header_action
    }

    /// The action strip, if one was set.
    #[must_use]
    pub fn strip(&self) -> Option<&ActionStrip> {
        self.action_strip.as_ref()
    }
}

/// The content of a list template: exactly one of the two modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListContent {
    /// One unsectioned list.
    SingleList(ItemList),
    /// An ordered sequence of headed sections.
    Sections(Vec<SectionedItemList>),
}

/// A list screen: a single list or a sequence of headed sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTemplate {
    title: String,
    loading: bool,
    content: Option<ListContent>,
    header_action: Option<HeaderAction>,
    action_strip: Option<ActionStrip>,
}

impl ListTemplate {
    /// Create a list template with the given title and no content.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            loading: false,
            content: None,
            header_action: None,
            action_strip: None,
        }
    }

    /// Set the loading-display attribute.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Use a single unsectioned list as the content.
    ///
    /// Any previously appended sections are discarded; the template holds
    /// one content mode at a time and the last assignment wins.
    #[must_use]
    pub fn single_list(mut self, list: ItemList) -> Self {
        self.content = Some(ListContent::SingleList(list));
        self
    }

    /// Append a headed section.
    ///
    /// A previously set single list is discarded; the template holds one
    /// content mode at a time and the last assignment wins.
    #[must_use]
    pub fn sectioned_list(mut self, section: SectionedItemList) -> Self {
        match self.content {
            Some(ListContent::Sections(ref mut sections)) => sections.push(section),
            _ => self.content = Some(ListContent::Sections(vec![section])),
        }
        self
    }

    /// Set the header action.
    #[must_use]
    pub fn header_action(mut self, header_action: HeaderAction) -> Self {
        self.header_action = Some(header_action);
        self
    }

    /// Set the action strip.
    #[must_use]
    pub fn action_strip(mut self, strip: ActionStrip) -> Self {
        self.action_strip = Some(strip);
        self
    }

    /// The template title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the host should render a loading indicator.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The content, absent while loading or before any list was attached.
    #[must_use]
    pub fn content(&self) -> Option<&ListContent> {
        self.content.as_ref()
    }

    /// The single list, if the template is in single-list mode.
    #[must_use]
    pub fn single(&self) -> Option<&ItemList> {
        match self.content {
            Some(ListContent::SingleList(ref list)) => Some(list),
            _ => None,
        }
    }

    /// The sections, empty unless the template is in sectioned mode.
    #[must_use]
    pub fn sections(&self) -> &[SectionedItemList] {
        match self.content {
            Some(ListContent::Sections(ref sections)) => sections,
            _ => &[],
        }
    }

    /// The header action, if one was set.
    #[must_use]
    pub fn header(&self) -> Option<HeaderAction> {
        self.header_action
    }

    /// The action strip, if one was set.
    #[must_use]
    pub fn strip(&self) -> Option<&ActionStrip> {
        self.action_strip.as_ref()
    }
}

/// A complete screen the display host can render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Template {
    Pane(PaneTemplate),
    PlaceListMap(PlaceListMapTemplate),
    List(ListTemplate),
}

impl Template {
    /// The template title, regardless of variant.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Pane(template) => template.title(),
            Self::PlaceListMap(template) => template.title(),
            Self::List(template) => template.title(),
        }
    }

    /// The pane template, if this is one.
    #[must_use]
    pub fn as_pane(&self) -> Option<&PaneTemplate> {
        match self {
            Self::Pane(template) => Some(template),
            _ => None,
        }
    }

    /// The map-backed list template, if this is one.
    #[must_use]
    pub fn as_place_list_map(&self) -> Option<&PlaceListMapTemplate> {
        match self {
            Self::PlaceListMap(template) => Some(template),
            _ => None,
        }
    }

    /// The list template, if this is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&ListTemplate> {
        match self {
            Self::List(template) => Some(template),
            _ => None,
        }
    }
}

impl From<PaneTemplate> for Template {
    fn from(template: PaneTemplate) -> Self {
        Self::Pane(template)
    }
}

impl From<PlaceListMapTemplate> for Template {
    fn from(template: PlaceListMapTemplate) -> Self {
        Self::PlaceListMap(template)
    }
}

impl From<ListTemplate> for Template {
    fn from(template: ListTemplate) -> Self {
        Self::List(template)
    }
}
