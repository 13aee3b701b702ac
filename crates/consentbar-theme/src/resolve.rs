// SPDX-License-Identifier: Apache-2.0
//! Theme derivation engine.
//!
//! [`resolve`] turns a [`PartialTheme`] into a complete [`Theme`] by filling
//! each absent derivable property from one anchor, following
//! [`DERIVATION_RULES`].
//!
//! # Invariants
//!
//! 1. **Provided values win**: a derivable property the caller supplied is
//!    never overwritten, and anchors are passed through unchanged.
//! 2. **Order independence**: every rule reads from the caller's input, never
//!    from another rule's output, so rules may run in any order.
//! 3. **Totality**: once all anchors are present, every derivable property
//!    ends up non-empty, unless an alpha blend meets a color it cannot parse.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing anchor | Anchor absent or empty | `ThemeError::MissingAnchors`, checked before any rule runs |
//! | Unsupported color | Blend source is a keyword or other grammar | `ThemeError::UnsupportedColor` |
//!
//! Single-token borders (`"none"`) feed the focus-border rule literally: the
//! token itself becomes the focus border color.

use tracing::trace;

use self::Derivation::{AlphaBlend, LastToken, SolidBorder, Verbatim};
use crate::color::derive_alpha_variant;
use crate::error::{Result, ThemeError};
use crate::schema::ThemeProperty as P;
use crate::schema::{PartialTheme, Theme, ThemeProperty};

/// Border prefix used by the solid-border rules.
pub const SOLID_BORDER_PREFIX: &str = "1px solid ";

/// How a derivable property is computed from its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derivation {
    /// Use the source value verbatim.
    Verbatim,
    /// Translucent variant of the source color.
    AlphaBlend(f64),
    /// `"1px solid "` followed by the source value.
    SolidBorder,
    /// Last whitespace-delimited token of the source value.
    LastToken,
}

/// One entry of the derivation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationRule {
    pub target: ThemeProperty,
    pub source: ThemeProperty,
    pub derivation: Derivation,
}

impl DerivationRule {
    const fn new(target: ThemeProperty, source: ThemeProperty, derivation: Derivation) -> Self {
        Self {
            target,
            source,
            derivation,
        }
    }

    /// Compute the target value from a source value.
    pub fn apply(&self, source_value: &str) -> Result<String> {
        match self.derivation {
            Derivation::Verbatim => Ok(source_value.to_string()),
            Derivation::AlphaBlend(factor) => derive_alpha_variant(source_value, factor)
                .ok_or_else(|| ThemeError::UnsupportedColor {
                    target: self.target,
                    source_property: self.source,
                    value: source_value.to_string(),
                }),
            Derivation::SolidBorder => Ok(format!("{SOLID_BORDER_PREFIX}{source_value}")),
            Derivation::LastToken => Ok(last_token(source_value).to_string()),
        }
    }
}

/// The full derivation table: one rule per derivable property.
pub const DERIVATION_RULES: [DerivationRule; 21] = [
    DerivationRule::new(P::BackgroundColorBetweenPageAndDialog, P::DialogBackgroundColor, AlphaBlend(0.6)),
    DerivationRule::new(P::PrimaryButtonTextColor, P::DialogBackgroundColor, Verbatim),
    DerivationRule::new(P::PrimaryButtonDisabledTextColor, P::DialogBackgroundColor, Verbatim),
    DerivationRule::new(P::DialogBorderColor, P::PrimaryButtonColor, Verbatim),
    DerivationRule::new(P::HyperlinkFontColor, P::PrimaryButtonColor, Verbatim),
    DerivationRule::new(P::PrimaryButtonHoverColor, P::PrimaryButtonColor, Verbatim),
    DerivationRule::new(P::PrimaryButtonDisabledColor, P::PrimaryButtonColor, Verbatim),
    DerivationRule::new(P::PrimaryButtonBorder, P::PrimaryButtonColor, SolidBorder),
    DerivationRule::new(P::PrimaryButtonFocusBorderColor, P::PrimaryButtonColor, Verbatim),
    DerivationRule::new(P::RadioButtonHoverBorderColor, P::PrimaryButtonColor, Verbatim),
    DerivationRule::new(P::SecondaryButtonTextColor, P::TextColor, Verbatim),
    DerivationRule::new(P::SecondaryButtonDisabledTextColor, P::TextColor, Verbatim),
    DerivationRule::new(P::RadioButtonBorderColor, P::TextColor, Verbatim),
    DerivationRule::new(P::RadioButtonCheckedBackgroundColor, P::TextColor, Verbatim),
    DerivationRule::new(P::RadioButtonHoverBackgroundColor, P::TextColor, AlphaBlend(0.8)),
    DerivationRule::new(P::RadioButtonDisabledColor, P::TextColor, AlphaBlend(0.2)),
    DerivationRule::new(P::RadioButtonDisabledBorderColor, P::TextColor, AlphaBlend(0.2)),
    DerivationRule::new(P::SecondaryButtonHoverColor, P::SecondaryButtonColor, Verbatim),
    DerivationRule::new(P::SecondaryButtonDisabledBorder, P::SecondaryButtonDisabledColor, SolidBorder),
    DerivationRule::new(P::SecondaryButtonHoverBorder, P::SecondaryButtonBorder, Verbatim),
    DerivationRule::new(P::SecondaryButtonFocusBorderColor, P::SecondaryButtonBorder, LastToken),
];

/// The rule that fills `target`, if it is derivable.
#[must_use]
pub fn rule_for(target: ThemeProperty) -> Option<&'static DerivationRule> {
    DERIVATION_RULES.iter().find(|rule| rule.target == target)
}

/// Derivable properties computed from `source`.
pub fn dependents_of(source: ThemeProperty) -> impl Iterator<Item = ThemeProperty> {
    DERIVATION_RULES
        .iter()
        .filter(move |rule| rule.source == source)
        .map(|rule| rule.target)
}

/// Resolve a partial theme into a complete one.
///
/// The input is not modified. Anchors are validated up front; derivation
/// starts only when all of them are present.
pub fn resolve(src: &PartialTheme) -> Result<Theme> {
    let missing = src.missing_anchors();
    if !missing.is_empty() {
        return Err(ThemeError::MissingAnchors { missing });
    }

    let mut out = src.clone();
    for rule in &DERIVATION_RULES {
        if src.is_provided(rule.target) {
            continue;
        }
        let source_value = src.value(rule.source).ok_or_else(|| ThemeError::MissingAnchors {
            missing: vec![rule.source],
        })?;
        let value = rule.apply(source_value)?;
        trace!(target_property = %rule.target, source = %rule.source, %value, "derived theme property");
        out.set(rule.target, value);
    }

    Theme::try_from(out)
}

fn last_token(value: &str) -> &str {
    value.split_whitespace().next_back().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    fn light_anchors() -> PartialTheme {
        let light = Preset::Light.theme();
        let mut partial = PartialTheme::new();
        for &property in ThemeProperty::ANCHORS {
            partial.set(property, light.get(property));
        }
        partial
    }

    #[test]
    fn table_covers_every_derivable_once() {
        for &property in ThemeProperty::DERIVABLE {
            let count = DERIVATION_RULES
                .iter()
                .filter(|rule| rule.target == property)
                .count();
            assert_eq!(count, 1, "{property}");
        }
    }

    #[test]
    fn rules_only_read_anchors() {
        assert!(DERIVATION_RULES.iter().all(|rule| rule.source.is_anchor()));
    }

    #[test]
    fn light_anchors_resolve_to_documented_values() {
        let theme = resolve(&light_anchors()).unwrap();
        assert_eq!(theme.background_color_between_page_and_dialog, "rgba(255, 255, 255, 0.6)");
        assert_eq!(theme.dialog_border_color, "#0067B8");
        assert_eq!(theme.radio_button_disabled_color, "rgba(0, 0, 0, 0.2)");
        assert_eq!(theme.radio_button_hover_background_color, "rgba(0, 0, 0, 0.8)");
        assert_eq!(theme.primary_button_text_color, "#FFFFFF");
        assert_eq!(theme.primary_button_border, "1px solid #0067B8");
        assert_eq!(theme.secondary_button_disabled_border, "1px solid rgba(0,0,0,0.2)");
    }

    #[test]
    fn single_token_border_is_taken_literally() {
        let theme = resolve(&light_anchors()).unwrap();
        assert_eq!(theme.secondary_button_border, "none");
        assert_eq!(theme.secondary_button_focus_border_color, "none");
        assert_eq!(theme.secondary_button_hover_border, "none");
    }

    #[test]
    fn focus_border_takes_last_border_token() {
        let partial = light_anchors().with(P::SecondaryButtonBorder, "1px dashed black");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.secondary_button_focus_border_color, "black");
        assert_eq!(theme.secondary_button_hover_border, "1px dashed black");
    }

    #[test]
    fn primary_border_is_synthesized() {
        let partial = light_anchors().with(P::PrimaryButtonColor, "#008B8B");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.primary_button_border, "1px solid #008B8B");
        assert_eq!(theme.hyperlink_font_color, "#008B8B");
        assert_eq!(theme.radio_button_hover_border_color, "#008B8B");
    }

    #[test]
    fn provided_derivables_are_kept() {
        let partial = light_anchors()
            .with(P::DialogBorderColor, "red")
            .with(P::RadioButtonDisabledColor, "gray");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.dialog_border_color, "red");
        assert_eq!(theme.radio_button_disabled_color, "gray");
    }

    #[test]
    fn empty_derivable_is_derived() {
        let partial = light_anchors().with(P::DialogBorderColor, "");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.dialog_border_color, "#0067B8");
    }

    #[test]
    fn whitespace_derivable_is_kept() {
        let partial = Preset::Light
            .theme()
            .to_partial()
            .with(P::DialogBorderColor, " ");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.dialog_border_color, " ");
        assert_eq!(theme.to_partial(), partial);
    }

    #[test]
    fn whitespace_anchor_passes_through() {
        let partial = light_anchors().with(P::SecondaryButtonBorder, "  ");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.secondary_button_border, "  ");
        assert_eq!(theme.secondary_button_focus_border_color, "  ");
        assert_eq!(theme.secondary_button_hover_border, "  ");
    }

    #[test]
    fn rgba_text_color_compounds() {
        let partial = light_anchors().with(P::TextColor, "rgba(16, 16, 16, 0.5)");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.radio_button_disabled_color, "rgba(16, 16, 16, 0.10)");
        assert_eq!(theme.radio_button_hover_background_color, "rgba(16, 16, 16, 0.40)");
        assert_eq!(theme.secondary_button_text_color, "rgba(16, 16, 16, 0.5)");
    }

    #[test]
    fn missing_anchors_are_all_reported() {
        let mut partial = light_anchors();
        partial.remove(P::TextColor);
        partial.remove(P::CloseButtonColor);
        let err = resolve(&partial).unwrap_err();
        assert_eq!(
            err,
            ThemeError::MissingAnchors {
                missing: vec![P::CloseButtonColor, P::TextColor],
            }
        );
    }

    #[test]
    fn keyword_blend_source_is_rejected() {
        let partial = light_anchors().with(P::TextColor, "black");
        let err = resolve(&partial).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::UnsupportedColor {
                target: P::RadioButtonHoverBackgroundColor,
                source_property: P::TextColor,
                ..
            }
        ));
    }

    #[test]
    fn keyword_blend_source_is_fine_when_blends_are_provided() {
        let partial = light_anchors()
            .with(P::TextColor, "black")
            .with(P::RadioButtonHoverBackgroundColor, "yellow")
            .with(P::RadioButtonDisabledColor, "black")
            .with(P::RadioButtonDisabledBorderColor, "white");
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.radio_button_border_color, "black");
    }

    #[test]
    fn input_is_not_modified() {
        let partial = light_anchors();
        let before = partial.clone();
        let _ = resolve(&partial).unwrap();
        assert_eq!(partial, before);
    }

    #[test]
    fn extras_pass_through() {
        let mut partial = light_anchors();
        partial
            .extras
            .insert("font-family".into(), "Segoe UI".into());
        let theme = resolve(&partial).unwrap();
        assert_eq!(theme.extras.get("font-family").map(String::as_str), Some("Segoe UI"));
    }

    #[test]
    fn dependents_follow_table() {
        let deps: Vec<_> = dependents_of(P::SecondaryButtonBorder).collect();
        assert_eq!(
            deps,
            vec![P::SecondaryButtonHoverBorder, P::SecondaryButtonFocusBorderColor]
        );
        assert_eq!(dependents_of(P::CloseButtonColor).count(), 0);
        assert_eq!(rule_for(P::TextColor), None);
    }
}
