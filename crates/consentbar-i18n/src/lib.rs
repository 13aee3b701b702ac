#![forbid(unsafe_code)]

//! Localization support for the consentbar widget.
//!
//! # Role in consentbar
//! `consentbar-i18n` decides the layout direction for a culture code and
//! holds the user-visible strings of the banner and preferences dialog,
//! merged over English defaults.
//!
//! # How it fits in the system
//! `consentbar-widget` resolves a [`TextDirection`] and a complete
//! [`TextResources`] once at construction. Neither type depends on theming
//! or rendering.

pub mod direction;
pub mod resources;

pub use direction::{RTL_LANGUAGES, TextDirection, direction_for_culture, primary_language};
pub use resources::{PartialTextResources, TextResources};
