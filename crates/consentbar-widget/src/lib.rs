#![forbid(unsafe_code)]

//! Host-independent state for the consentbar cookie-consent widget.
//!
//! # Role in consentbar
//! `consentbar-widget` ties theming and localization together. It owns the
//! registered themes, the style container for the active theme, the banner
//! and preferences visibility, and the consent chosen per cookie category.
//!
//! # This crate provides
//! - [`ConsentWidget`], the lifecycle and consent state machine.
//! - [`WidgetOptions`] and [`CookieCategory`] for construction from JSON.
//! - [`StyleSheetHandle`], the single style container per widget.
//!
//! # How it fits in the system
//! A host (browser binding, server-side renderer, or the CLI) builds a
//! widget from options, forwards user actions to it, and renders the visible
//! surfaces plus [`StyleSheetHandle::content`] itself.

pub mod category;
pub mod error;
pub mod options;
pub mod style_handle;
pub mod widget;

pub use category::{ConsentMap, CookieCategory};
pub use error::{Result, WidgetError};
pub use options::{DEFAULT_CULTURE, WidgetOptions};
pub use style_handle::{STYLE_ELEMENT_ID, StyleSheetHandle};
pub use widget::ConsentWidget;
