#![forbid(unsafe_code)]

//! Template translation: one render tree in, one immutable template out.
//!
//! [`TemplateParser`] dispatches on the root node's `type` discriminator and
//! builds the matching template bottom-up from pure `node -> value`
//! functions. Three discriminators are recognized; everything else — an
//! unknown string, a missing discriminator, a non-object root — produces the
//! configured fallback: a loading pane with the parser's fallback title.
//! The fallback path cannot fail. A recognized discriminator can still fail
//! fatally inside its builder when a required field is absent or wrong-typed.

use serde_json::Value;
use tracing::{debug, trace};

use carui_model::{
    Action, ActionStrip, CarColor, CarLocation, HeaderAction, InteractionHandle, ItemList,
    ListTemplate, Metadata, Pane, PaneTemplate, PlaceListMapTemplate, Row, SectionedItemList,
    Template,
};

use crate::error::Result;
use crate::node::Node;

/// Translates render trees into display-host templates.
///
/// The parser is stateless apart from its configuration: the title shown on
/// the fallback template. Every call to [`TemplateParser::parse_template`]
/// builds a fresh, disjoint object graph.
#[derive(Debug, Clone)]
pub struct TemplateParser {
    fallback_title: String,
}

impl TemplateParser {
    /// Create a parser with the given fallback template title.
    #[must_use]
    pub fn new(fallback_title: impl Into<String>) -> Self {
        Self {
            fallback_title: fallback_title.into(),
        }
    }

    /// Translate one render tree into a template.
    pub fn parse_template(&self, tree: &Value) -> Result<Template> {
        let Some(node) = Node::from_root(tree) else {
            debug!("render tree root is not an object; using fallback template");
            return Ok(self.fallback_template().into());
        };

        match node.node_type() {
            Some("list-template") => {
                debug!("parsing list template");
                Ok(self.parse_list_template(&node)?.into())
            }
            Some("place-list-map-template") => {
                debug!("parsing place-list-map template");
                Ok(self.parse_place_list_map_template(&node)?.into())
            }
            Some("pane-template") => {
                debug!("parsing pane template");
                Ok(self.parse_pane_template(&node)?.into())
            }
            other => {
                debug!(template_type = ?other, "unrecognized template type; using fallback template");
                Ok(self.fallback_template().into())
            }
        }
    }

    /// The safe default: a loading pane titled with the configured fallback
    /// title. Shown for unrecognized discriminators and usable by hosts
    /// before the first successful parse.
    #[must_use]
    pub fn fallback_template(&self) -> PaneTemplate {
        PaneTemplate::loading(self.fallback_title.clone())
    }

    fn parse_pane_template(&self, node: &Node<'_>) -> Result<PaneTemplate> {
        let title = node.require_string("title")?;
        let children = node.require_nodes("children")?;
        let loading = node
            .boolean("isLoading")
            .unwrap_or_else(|| children.is_empty());

        // The emitted pane always reports not-loading; the computed flag
        // only gates content population. Kept bug-for-bug with the host
        // bindings this replaces (see DESIGN.md).
        let mut pane = Pane::new().loading(false);

        if !loading {
            let mut actions = Vec::new();
            for child in &children {
                match child.node_type() {
                    Some("row") => pane = pane.row(parse_row(child)?),
                    Some("action") => actions.push(parse_action(child)?),
                    other => {
                        trace!(child_type = ?other, path = child.path(), "skipping pane child");
                    }
                }
            }
            for action in actions {
                pane = pane.action(action);
            }
        }

        let mut template = PaneTemplate::new(title, pane);
        if let Some(header) = node.string("headerAction").and_then(HeaderAction::from_token) {
            template = template.header_action(header);
        }
        if let Some(strip) = node.child("actionStrip") {
            template = template.action_strip(parse_action_strip(&strip)?);
        }
        Ok(template)
    }

    fn parse_place_list_map_template(&self, node: &Node<'_>) -> Result<PlaceListMapTemplate> {
        let title = node.require_string("title")?;
        let children = node.require_nodes("children")?;
        let loading = node
            .boolean("isLoading")
            .unwrap_or_else(|| children.is_empty());

        let mut template = PlaceListMapTemplate::new(title).loading(loading);

        if !loading {
            let mut list = ItemList::new();
            for child in &children {
                match child.node_type() {
                    Some("row") => list = list.row(parse_row(child)?),
                    other => {
                        trace!(child_type = ?other, path = child.path(), "skipping list child");
                    }
                }
            }
            template = template.item_list(list);
        }

        if let Some(header) = node.string("headerAction").and_then(HeaderAction::from_token) {
            template = template.header_action(header);
        }
        if let Some(strip) = node.child("actionStrip") {
            template = template.action_strip(parse_action_strip(&strip)?);
        }
        Ok(template)
    }

    fn parse_list_template(&self, node: &Node<'_>) -> Result<ListTemplate> {
        let title = node.require_string("title")?;
        let children = node.require_nodes("children")?;
        let loading = node
            .boolean("isLoading")
            .unwrap_or_else(|| children.is_empty());

        let mut template = ListTemplate::new(title).loading(loading);

        if !loading {
            for child in &children {
                match child.node_type() {
                    // Whichever kind comes last wins; the template setters
                    // clear the other mode on each switch.
                    Some("item-list") => {
                        template = template.single_list(parse_item_list(child)?);
                    }
                    Some("section-list") => {
                        let header = child.require_string("header")?;
                        let section = SectionedItemList::new(header, parse_item_list(child)?);
                        template = template.sectioned_list(section);
                    }
                    other => {
                        trace!(child_type = ?other, path = child.path(), "skipping list child");
                    }
                }
            }
        }

        if let Some(header) = node.string("headerAction").and_then(HeaderAction::from_token) {
            template = template.header_action(header);
        }
        if let Some(strip) = node.child("actionStrip") {
            template = template.action_strip(parse_action_strip(&strip)?);
        }
        Ok(template)
    }
}

fn parse_item_list(node: &Node<'_>) -> Result<ItemList> {
    let mut list = ItemList::new();
    for child in node.require_nodes("children")? {
        match child.node_type() {
            Some("row") => list = list.row(parse_row(&child)?),
            other => {
                trace!(child_type = ?other, path = child.path(), "skipping list child");
            }
        }
    }
    if let Some(message) = node.string("noItemsMessage") {
        list = list.no_items_message(message);
    }
    Ok(list)
}

fn parse_row(node: &Node<'_>) -> Result<Row> {
    let mut row = Row::new(node.require_string("title")?);
    for line in node.strings("texts") {
        row = row.text(line);
    }
    if let Some(handle) = node.integer("onPress") {
        row = row.on_press(InteractionHandle(handle));
    }
    if let Some(metadata) = node.child("metadata")
        && let Some(metadata) = parse_metadata(&metadata)?
    {
        row = row.metadata(metadata);
    }
    Ok(row)
}

fn parse_metadata(node: &Node<'_>) -> Result<Option<Metadata>> {
    match node.node_type() {
        Some("place") => {
            let latitude = node.require_f64("latitude")?;
            let longitude = node.require_f64("longitude")?;
            Ok(Some(Metadata::place(CarLocation::new(latitude, longitude))))
        }
        other => {
            trace!(metadata_type = ?other, path = node.path(), "unsupported metadata");
            Ok(None)
        }
    }
}

fn parse_action(node: &Node<'_>) -> Result<Action> {
    let mut action = Action::new(node.require_string("title")?);
    if let Some(token) = node.string("backgroundColor") {
        action = action.background_color(CarColor::from_token(token));
    }
    if let Some(handle) = node.integer("onPress") {
        action = action.on_press(InteractionHandle(handle));
    }
    Ok(action)
}

fn parse_action_strip(node: &Node<'_>) -> Result<ActionStrip> {
    // `actions` is deliberately unguarded: a strip node without it is a
    // fatal error, there is no fallback strip.
    let mut actions = Vec::new();
    for child in node.require_nodes("actions")? {
        actions.push(parse_action(&child)?);
    }
    Ok(ActionStrip::new(actions))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use crate::error::ParseError;

    use super::*;

    fn parser() -> TemplateParser {
        TemplateParser::new("Fallback Title")
    }

    fn expect_fallback(template: &Template) {
        let pane = template.as_pane().expect("fallback is a pane");
        assert_eq!(pane.title(), "Fallback Title");
        assert!(pane.pane().is_loading());
        assert!(pane.pane().rows().is_empty());
        assert!(pane.pane().actions().is_empty());
    }

    // ── Dispatch ────────────────────────────────────────────────────

    #[test]
    fn unknown_type_falls_back() {
        let template = parser()
            .parse_template(&json!({"type": "grid-template"}))
            .unwrap();
        expect_fallback(&template);
    }

    #[test]
    fn missing_type_falls_back() {
        let template = parser().parse_template(&json!({})).unwrap();
        expect_fallback(&template);
    }

    #[test]
    fn empty_string_type_falls_back() {
        let template = parser().parse_template(&json!({"type": ""})).unwrap();
        expect_fallback(&template);
    }

    #[test]
    fn null_type_falls_back() {
        let template = parser().parse_template(&json!({"type": null})).unwrap();
        expect_fallback(&template);
    }

    #[test]
    fn non_object_root_falls_back() {
        let template = parser().parse_template(&json!("pane-template")).unwrap();
        expect_fallback(&template);
    }

    // ── Pane template ───────────────────────────────────────────────

    #[test]
    fn pane_with_rows_and_interleaved_actions() {
        let tree = json!({
            "type": "pane-template",
            "title": "Orders",
            "isLoading": false,
            "children": [
                {"type": "action", "title": "Refresh"},
                {"type": "row", "title": "Order #1", "onPress": 7},
                {"type": "row", "title": "Order #2"},
            ],
        });
        let template = parser().parse_template(&tree).unwrap();
        let pane = template.as_pane().unwrap();
        assert_eq!(pane.title(), "Orders");
        assert!(!pane.pane().is_loading());
        assert_eq!(pane.pane().rows().len(), 2);
        assert_eq!(pane.pane().rows()[0].title(), "Order #1");
        assert!(pane.pane().rows()[0].is_browsable());
        assert_eq!(
            pane.pane().rows()[0].press_handle(),
            Some(InteractionHandle(7))
        );
        // Actions come after all rows regardless of child order.
        assert_eq!(pane.pane().actions().len(), 1);
        assert_eq!(pane.pane().actions()[0].title(), "Refresh");
    }

    #[test]
    fn pane_missing_title_is_fatal() {
        let tree = json!({"type": "pane-template", "children": []});
        assert_eq!(
            parser().parse_template(&tree).unwrap_err(),
            ParseError::missing("title")
        );
    }

    #[test]
    fn pane_missing_children_is_fatal() {
        let tree = json!({"type": "pane-template", "title": "Orders"});
        assert_eq!(
            parser().parse_template(&tree).unwrap_err(),
            ParseError::missing("children")
        );
    }

    #[test]
    fn pane_empty_children_reports_not_loading_with_no_content() {
        // Inferred loading suppresses content but the pane still reports
        // not-loading; this mirrors the host bindings this replaces.
        let tree = json!({"type": "pane-template", "title": "Orders", "children": []});
        let template = parser().parse_template(&tree).unwrap();
        let pane = template.as_pane().unwrap();
        assert!(!pane.pane().is_loading());
        assert!(pane.pane().rows().is_empty());
        assert!(pane.pane().actions().is_empty());
    }

    #[test]
    fn pane_explicit_loading_suppresses_content() {
        let tree = json!({
            "type": "pane-template",
            "title": "Orders",
            "isLoading": true,
            "children": [{"type": "row", "title": "hidden"}],
        });
        let template = parser().parse_template(&tree).unwrap();
        let pane = template.as_pane().unwrap();
        assert!(!pane.pane().is_loading());
        assert!(pane.pane().rows().is_empty());
    }

    #[test]
    fn pane_explicit_not_loading_populates_even_with_empty_children() {
        let tree = json!({
            "type": "pane-template",
            "title": "Orders",
            "isLoading": false,
            "children": [],
        });
        let template = parser().parse_template(&tree).unwrap();
        assert!(!template.as_pane().unwrap().pane().is_loading());
    }

    #[test]
    fn pane_skips_unknown_children() {
        let tree = json!({
            "type": "pane-template",
            "title": "Orders",
            "isLoading": false,
            "children": [
                {"type": "divider"},
                {"type": "row", "title": "kept"},
            ],
        });
        let template = parser().parse_template(&tree).unwrap();
        assert_eq!(template.as_pane().unwrap().pane().rows().len(), 1);
    }

    #[test]
    fn pane_header_action_and_strip_are_optional() {
        let tree = json!({
            "type": "pane-template",
            "title": "Orders",
            "children": [],
        });
        let template = parser().parse_template(&tree).unwrap();
        let pane = template.as_pane().unwrap();
        assert_eq!(pane.header(), None);
        assert!(pane.strip().is_none());
    }

    #[test]
    fn pane_resolves_header_action_token() {
        let tree = json!({
            "type": "pane-template",
            "title": "Orders",
            "children": [],
            "headerAction": "back",
        });
        let template = parser().parse_template(&tree).unwrap();
        assert_eq!(
            template.as_pane().unwrap().header(),
            Some(HeaderAction::Back)
        );
    }

    #[test]
    fn pane_drops_unknown_header_action_token() {
        let tree = json!({
            "type": "pane-template",
            "title": "Orders",
            "children": [],
            "headerAction": "close",
        });
        let template = parser().parse_template(&tree).unwrap();
        assert_eq!(template.as_pane().unwrap().header(), None);
    }

    // ── Place-list-map template ─────────────────────────────────────

    #[test]
    fn place_list_map_empty_children_reports_loading() {
        let tree = json!({
            "type": "place-list-map-template",
            "title": "Nearby",
            "children": [],
        });
        let template = parser().parse_template(&tree).unwrap();
        let map = template.as_place_list_map().unwrap();
        assert!(map.is_loading());
        assert!(map.list().is_none());
    }

    #[test]
    fn place_list_map_builds_item_list_from_rows() {
        let tree = json!({
            "type": "place-list-map-template",
            "title": "Nearby",
            "isLoading": false,
            "children": [
                {"type": "row", "title": "Depot", "metadata": {
                    "type": "place", "latitude": 52.52, "longitude": 13.405,
                }},
                {"type": "action", "title": "ignored"},
            ],
        });
        let template = parser().parse_template(&tree).unwrap();
        let map = template.as_place_list_map().unwrap();
        assert!(!map.is_loading());
        let list = map.list().unwrap();
        assert_eq!(list.rows().len(), 1);
        let place = list.rows()[0].row_metadata().unwrap().as_place().unwrap();
        assert_eq!(place.location().latitude(), 52.52);
    }

    #[test]
    fn place_list_map_explicit_loading_attaches_no_list() {
        let tree = json!({
            "type": "place-list-map-template",
            "title": "Nearby",
            "isLoading": true,
            "children": [{"type": "row", "title": "hidden"}],
        });
        let template = parser().parse_template(&tree).unwrap();
        let map = template.as_place_list_map().unwrap();
        assert!(map.is_loading());
        assert!(map.list().is_none());
    }

    // ── List template ───────────────────────────────────────────────

    #[test]
    fn list_single_mode_from_item_list_child() {
        let tree = json!({
            "type": "list-template",
            "title": "Items",
            "children": [{
                "type": "item-list",
                "children": [{"type": "row", "title": "A"}],
                "noItemsMessage": "Empty",
            }],
        });
        let template = parser().parse_template(&tree).unwrap();
        let list = template.as_list().unwrap();
        assert!(!list.is_loading());
        let single = list.single().unwrap();
        assert_eq!(single.rows().len(), 1);
        assert_eq!(single.empty_message(), Some("Empty"));
        assert!(list.sections().is_empty());
    }

    #[test]
    fn list_sectioned_mode_from_section_children() {
        let tree = json!({
            "type": "list-template",
            "title": "Items",
            "children": [
                {"type": "section-list", "header": "Today",
                 "children": [{"type": "row", "title": "A"}]},
                {"type": "section-list", "header": "Tomorrow",
                 "children": []},
            ],
        });
        let template = parser().parse_template(&tree).unwrap();
        let list = template.as_list().unwrap();
        assert!(list.single().is_none());
        assert_eq!(list.sections().len(), 2);
        assert_eq!(list.sections()[0].header(), "Today");
        assert_eq!(list.sections()[0].list().rows()[0].title(), "A");
        assert_eq!(list.sections()[1].header(), "Tomorrow");
    }

    #[test]
    fn list_mixed_children_last_kind_wins() {
        let tree = json!({
            "type": "list-template",
            "title": "Items",
            "children": [
                {"type": "section-list", "header": "early", "children": []},
                {"type": "item-list", "children": []},
                {"type": "section-list", "header": "late", "children": []},
            ],
        });
        let template = parser().parse_template(&tree).unwrap();
        let list = template.as_list().unwrap();
        assert!(list.single().is_none());
        assert_eq!(list.sections().len(), 1);
        assert_eq!(list.sections()[0].header(), "late");
    }

    #[test]
    fn list_section_missing_header_is_fatal() {
        let tree = json!({
            "type": "list-template",
            "title": "Items",
            "children": [{"type": "section-list", "children": []}],
        });
        assert_eq!(
            parser().parse_template(&tree).unwrap_err(),
            ParseError::missing("children[0].header")
        );
    }

    #[test]
    fn list_empty_children_reports_loading() {
        let tree = json!({"type": "list-template", "title": "Items", "children": []});
        let template = parser().parse_template(&tree).unwrap();
        let list = template.as_list().unwrap();
        assert!(list.is_loading());
        assert!(list.content().is_none());
    }

    // ── Rows ────────────────────────────────────────────────────────

    #[test]
    fn row_texts_default_to_empty() {
        let tree = json!({
            "type": "pane-template",
            "title": "t",
            "isLoading": false,
            "children": [{"type": "row", "title": "r"}],
        });
        let template = parser().parse_template(&tree).unwrap();
        let row = &template.as_pane().unwrap().pane().rows()[0];
        assert!(row.texts().is_empty());
        assert!(!row.is_browsable());
    }

    #[test]
    fn row_texts_keep_order() {
        let tree = json!({
            "type": "pane-template",
            "title": "t",
            "isLoading": false,
            "children": [{"type": "row", "title": "r", "texts": ["one", "two"]}],
        });
        let template = parser().parse_template(&tree).unwrap();
        let row = &template.as_pane().unwrap().pane().rows()[0];
        assert_eq!(row.texts(), ["one", "two"]);
    }

    #[test]
    fn row_missing_title_is_fatal_with_indexed_path() {
        let tree = json!({
            "type": "pane-template",
            "title": "t",
            "isLoading": false,
            "children": [{"type": "row"}],
        });
        assert_eq!(
            parser().parse_template(&tree).unwrap_err(),
            ParseError::missing("children[0].title")
        );
    }

    #[test]
    fn row_unsupported_metadata_is_dropped() {
        let tree = json!({
            "type": "pane-template",
            "title": "t",
            "isLoading": false,
            "children": [{"type": "row", "title": "r", "metadata": {"type": "contact"}}],
        });
        let template = parser().parse_template(&tree).unwrap();
        let row = &template.as_pane().unwrap().pane().rows()[0];
        assert!(row.row_metadata().is_none());
    }

    #[test]
    fn row_place_metadata_missing_coordinates_is_fatal() {
        let tree = json!({
            "type": "pane-template",
            "title": "t",
            "isLoading": false,
            "children": [{"type": "row", "title": "r",
                          "metadata": {"type": "place", "latitude": 1.0}}],
        });
        assert_eq!(
            parser().parse_template(&tree).unwrap_err(),
            ParseError::missing("children[0].metadata.longitude")
        );
    }

    // ── Actions and strips ──────────────────────────────────────────

    #[test]
    fn action_color_unset_is_distinct_from_resolved_default() {
        let tree = json!({
            "type": "pane-template",
            "title": "t",
            "isLoading": false,
            "children": [
                {"type": "action", "title": "plain"},
                {"type": "action", "title": "odd", "backgroundColor": "chartreuse"},
                {"type": "action", "title": "blue", "backgroundColor": "blue"},
            ],
        });
        let template = parser().parse_template(&tree).unwrap();
        let actions = template.as_pane().unwrap().pane().actions();
        assert_eq!(actions[0].background(), None);
        assert_eq!(actions[1].background(), Some(CarColor::Default));
        assert_eq!(actions[2].background(), Some(CarColor::Blue));
    }

    #[test]
    fn action_strip_is_parsed_in_order() {
        let tree = json!({
            "type": "list-template",
            "title": "t",
            "children": [],
            "actionStrip": {"actions": [
                {"type": "action", "title": "first", "onPress": 1},
                {"type": "action", "title": "second"},
            ]},
        });
        let template = parser().parse_template(&tree).unwrap();
        let strip = template.as_list().unwrap().strip().unwrap();
        assert_eq!(strip.actions().len(), 2);
        assert_eq!(strip.actions()[0].title(), "first");
        assert_eq!(
            strip.actions()[0].press_handle(),
            Some(InteractionHandle(1))
        );
        assert_eq!(strip.actions()[1].press_handle(), None);
    }

    #[test]
    fn action_strip_missing_actions_is_fatal() {
        let tree = json!({
            "type": "pane-template",
            "title": "t",
            "children": [],
            "actionStrip": {},
        });
        assert_eq!(
            parser().parse_template(&tree).unwrap_err(),
            ParseError::missing("actionStrip.actions")
        );
    }

    // ── Whole-parse properties ──────────────────────────────────────

    #[test]
    fn parsing_twice_yields_structurally_equal_templates() {
        let tree = json!({
            "type": "list-template",
            "title": "Items",
            "children": [{"type": "item-list",
                          "children": [{"type": "row", "title": "A", "onPress": 3}]}],
        });
        let parser = parser();
        let first = parser.parse_template(&tree).unwrap();
        let second = parser.parse_template(&tree).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fatal_error_produces_no_template() {
        let tree = json!({"type": "pane-template", "children": []});
        assert!(parser().parse_template(&tree).is_err());
    }

    proptest! {
        #[test]
        fn arbitrary_unknown_discriminators_fall_back(template_type in "[a-zA-Z-]{0,24}") {
            prop_assume!(!matches!(
                template_type.as_str(),
                "pane-template" | "place-list-map-template" | "list-template"
            ));
            let template = parser()
                .parse_template(&json!({"type": template_type}))
                .unwrap();
            expect_fallback(&template);
        }

        #[test]
        fn arbitrary_color_tokens_never_fail(token in ".*") {
            let tree = json!({
                "type": "pane-template",
                "title": "t",
                "isLoading": false,
                "children": [{"type": "action", "title": "a", "backgroundColor": token}],
            });
            let template = parser().parse_template(&tree).unwrap();
            prop_assert!(template.as_pane().unwrap().pane().actions()[0].background().is_some());
        }
    }
}
