#![forbid(unsafe_code)]

//! Interaction event delivery and the screen template slot.
//!
//! Built templates carry opaque integer handles instead of closures, so the
//! display host never holds application behavior. This crate supplies the
//! other half of that contract: a [`RenderContext`] owning the single
//! owner-supplied [`EventSink`], [`PressCallback`] values the host can store
//! per interactive element, and the [`Screen`] slot a host pulls the current
//! [`carui_model::Template`] from.

pub mod bridge;
pub mod screen;

pub use bridge::{EventSink, InteractionEvent, PressCallback, RenderContext};
pub use screen::Screen;
