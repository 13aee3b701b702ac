#![forbid(unsafe_code)]

//! Theme resolution for the consentbar cookie-consent widget.
//!
//! # Role in consentbar
//! `consentbar-theme` owns everything color related: the closed theme
//! schema, the color grammar used for alpha derivation, the rule table that
//! fills unspecified properties from anchors, the built-in presets, and the
//! style rules generated from a resolved theme.
//!
//! # This crate provides
//! - [`ThemeProperty`], [`PartialTheme`], and [`Theme`] for the fixed schema.
//! - [`resolve`] and [`DERIVATION_RULES`] for filling derivable properties.
//! - [`derive_alpha_variant`] and [`ColorValue`] for the color grammar.
//! - [`Preset`] and [`ThemeSet`] for named themes.
//! - [`StyleSheet`] and [`build_declarations`] for style output.
//!
//! # How it fits in the system
//! `consentbar-widget` holds a [`ThemeSet`] and writes the [`StyleSheet`] of
//! the active theme into the style container it owns. The CLI exposes the
//! same resolution for offline inspection.

/// Color grammar and alpha derivation.
pub mod color;
/// Error types.
pub mod error;
/// Built-in light, dark, and high-contrast themes.
pub mod preset;
/// Named theme registry.
pub mod registry;
/// Derivation rules and the resolver.
pub mod resolve;
/// Theme schema types.
pub mod schema;
/// Style declaration builder.
pub mod stylesheet;

pub use color::{ColorValue, Rgb, derive_alpha_variant, format_alpha};
pub use error::{Result, ThemeError};
pub use preset::Preset;
pub use registry::{ExtraKeys, ThemeSet};
pub use resolve::{DERIVATION_RULES, Derivation, DerivationRule, dependents_of, resolve, rule_for};
pub use schema::{PartialTheme, Theme, ThemeProperty};
pub use stylesheet::{StyleRule, StyleSheet, build_declarations, render_css};
