#![forbid(unsafe_code)]

//! The screen's template slot.

use std::sync::Mutex;

use carui_model::{PaneTemplate, Template};

/// Holds the template a display host renders for one screen.
///
/// The host pulls with [`Screen::current_template`] on every (re)compose and
/// must get an answer without delay; until the first template is set, the
/// pull returns a loading pane carrying the configured fallback title.
/// Setting a new template replaces the old one wholesale.
#[derive(Debug)]
pub struct Screen {
    current: Mutex<Option<Template>>,
    fallback_title: String,
}

impl Screen {
    /// Create a screen with no template yet.
    #[must_use]
    pub fn new(fallback_title: impl Into<String>) -> Self {
        Self {
            current: Mutex::new(None),
            fallback_title: fallback_title.into(),
        }
    }

    /// Replace the screen's template.
    pub fn set_template(&self, template: Template) {
        let mut guard = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(template);
    }

    /// The template the host should render right now.
    #[must_use]
    pub fn current_template(&self) -> Template {
        let guard = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match &*guard {
            Some(template) => template.clone(),
            None => PaneTemplate::loading(self.fallback_title.clone()).into(),
        }
    }
}
