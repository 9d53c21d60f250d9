#![forbid(unsafe_code)]

//! Actions, action strips, and header actions.

use serde::{Deserialize, Serialize};

use crate::color::CarColor;
use crate::handle::InteractionHandle;

/// A standard header action the host renders in a template's header slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderAction {
    /// Navigate back.
    Back,
    /// Show the application icon.
    AppIcon,
}

impl HeaderAction {
    /// Resolve a header-action token string.
    ///
    /// Unrecognized tokens resolve to `None`, meaning the header action is
    /// dropped rather than rejected.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "back" => Some(Self::Back),
            "app_icon" => Some(Self::AppIcon),
            _ => None,
        }
    }
}

/// A titled, optionally colored, optionally interactive button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    title: String,
    background_color: Option<CarColor>,
    on_press: Option<InteractionHandle>,
}

impl Action {
    /// Create a new action with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            background_color: None,
            on_press: None,
        }
    }

    /// Set the background color.
    #[must_use]
    pub fn background_color(mut self, color: CarColor) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Attach the interaction handle fired when the action is pressed.
    #[must_use]
    pub fn on_press(mut self, handle: InteractionHandle) -> Self {
        self.on_press = Some(handle);
        self
    }

    /// The action title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The background color, if one was set.
    ///
    /// `None` is distinct from an explicitly resolved [`CarColor::Default`].
    #[must_use]
    pub fn background(&self) -> Option<CarColor> {
        self.background_color
    }

    /// The interaction handle, if the action is interactive.
    #[must_use]
    pub fn press_handle(&self) -> Option<InteractionHandle> {
        self.on_press
    }
}

/// An ordered strip of actions rendered alongside a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStrip {
    actions: Vec<Action>,
}

impl ActionStrip {
    /// Create a strip from an ordered sequence of actions.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// The actions in original order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}
