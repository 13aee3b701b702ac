// SPDX-License-Identifier: Apache-2.0
//! Style declarations generated from a resolved theme.
//!
//! [`build_declarations`] emits an ordered list of `(selector, property,
//! value)` rules, one block per UI element state. It performs no logic beyond
//! substituting theme values. [`StyleSheet`] groups consecutive rules that
//! share a selector and renders them as CSS text.

use std::fmt::{self, Write as _};

use crate::schema::Theme;

/// Class names shared with the markup layer.
pub mod class {
    pub const BANNER: &str = "cbar-banner";
    pub const TEXT_COLOR: &str = "cbar-text-color";
    pub const HYPERLINK_COLOR: &str = "cbar-hyperlink-color";
    pub const BACKDROP: &str = "cbar-backdrop";
    pub const DIALOG: &str = "cbar-dialog";
    pub const CLOSE_BUTTON: &str = "cbar-close-button";
    pub const PRIMARY_BUTTON: &str = "cbar-primary-button";
    pub const SECONDARY_BUTTON: &str = "cbar-secondary-button";
    pub const RADIO_BUTTON: &str = "cbar-radio-button";
}

/// A single declaration scoped to a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub property: &'static str,
    pub value: String,
}

struct RuleWriter {
    rules: Vec<StyleRule>,
}

impl RuleWriter {
    fn block(&mut self, selector: impl Into<String>) -> Block<'_> {
        Block {
            rules: &mut self.rules,
            selector: selector.into(),
        }
    }
}

struct Block<'a> {
    rules: &'a mut Vec<StyleRule>,
    selector: String,
}

impl Block<'_> {
    fn decl(self, property: &'static str, value: impl Into<String>) -> Self {
        self.rules.push(StyleRule {
            selector: self.selector.clone(),
            property,
            value: value.into(),
        });
        self
    }
}

fn button_selectors(class: &str) -> [String; 4] {
    [
        format!(".{class}"),
        format!(".{class}:enabled:hover"),
        format!(".{class}:enabled:focus"),
        format!(".{class}:disabled"),
    ]
}

fn radio_selector(state: &str, pseudo: &str) -> String {
    format!(
        ".{} input[type=\"radio\"]{state} + label::{pseudo}",
        class::RADIO_BUTTON
    )
}

/// Build the ordered declaration list for `theme`.
#[must_use]
pub fn build_declarations(theme: &Theme) -> Vec<StyleRule> {
    let mut w = RuleWriter { rules: Vec::new() };

    w.block(format!(".{}", class::BANNER))
        .decl("background-color", &theme.banner_background_color);
    w.block(format!(".{}", class::TEXT_COLOR))
        .decl("color", &theme.text_color);
    w.block(format!(".{}", class::HYPERLINK_COLOR))
        .decl("color", &theme.hyperlink_font_color);

    w.block(format!(".{}", class::BACKDROP))
        .decl("background-color", &theme.background_color_between_page_and_dialog);
    w.block(format!(".{}", class::DIALOG))
        .decl("background-color", &theme.dialog_background_color)
        .decl("border", format!("1px solid {}", theme.dialog_border_color));

    w.block(format!(".{}", class::CLOSE_BUTTON))
        .decl("color", &theme.close_button_color)
        .decl("background-color", &theme.dialog_background_color);

    let [base, hover, focus, disabled] = button_selectors(class::PRIMARY_BUTTON);
    w.block(base)
        .decl("color", &theme.primary_button_text_color)
        .decl("background-color", &theme.primary_button_color)
        .decl("border", &theme.primary_button_border);
    w.block(hover)
        .decl("color", &theme.primary_button_text_color)
        .decl("background-color", &theme.primary_button_hover_color)
        .decl("box-shadow", &theme.primary_button_hover_shadow)
        .decl("border", &theme.primary_button_hover_border);
    w.block(focus)
        .decl("background-color", &theme.primary_button_hover_color)
        .decl("box-shadow", &theme.primary_button_hover_shadow)
        .decl(
            "border",
            format!("2px solid {}", theme.primary_button_focus_border_color),
        );
    w.block(disabled)
        .decl("opacity", &theme.primary_button_disabled_opacity)
        .decl("color", &theme.primary_button_disabled_text_color)
        .decl("background-color", &theme.primary_button_disabled_color)
        .decl("border", &theme.primary_button_disabled_border);

    let [base, hover, focus, disabled] = button_selectors(class::SECONDARY_BUTTON);
    w.block(base)
        .decl("color", &theme.secondary_button_text_color)
        .decl("background-color", &theme.secondary_button_color)
        .decl("border", &theme.secondary_button_border);
    w.block(hover)
        .decl("color", &theme.secondary_button_text_color)
        .decl("background-color", &theme.secondary_button_hover_color)
        .decl("box-shadow", &theme.secondary_button_hover_shadow)
        .decl("border", &theme.secondary_button_hover_border);
    w.block(focus)
        .decl("background-color", &theme.secondary_button_hover_color)
        .decl("box-shadow", &theme.secondary_button_hover_shadow)
        .decl(
            "border",
            format!("2px solid {}", theme.secondary_button_focus_border_color),
        );
    w.block(disabled)
        .decl("opacity", &theme.secondary_button_disabled_opacity)
        .decl("color", &theme.secondary_button_disabled_text_color)
        .decl("background-color", &theme.secondary_button_disabled_color)
        .decl("border", &theme.secondary_button_disabled_border);

    w.block(radio_selector("", "before"))
        .decl("border", format!("1px solid {}", theme.radio_button_border_color))
        .decl("background-color", &theme.dialog_background_color);
    w.block(radio_selector(":checked", "after"))
        .decl("background-color", &theme.radio_button_checked_background_color);
    w.block(radio_selector(":hover", "before"))
        .decl("border", format!("1px solid {}", theme.radio_button_hover_border_color));
    w.block(radio_selector(":hover", "after"))
        .decl("background-color", &theme.radio_button_hover_background_color);
    w.block(radio_selector(":focus", "before"))
        .decl("border", format!("1px solid {}", theme.radio_button_hover_border_color))
        .decl(
            "box-shadow",
            format!("0 0 0 2px {}", theme.radio_button_hover_background_color),
        );
    w.block(radio_selector(":disabled", "before"))
        .decl("border", format!("1px solid {}", theme.radio_button_disabled_border_color))
        .decl("background-color", &theme.radio_button_disabled_color);
    w.block(radio_selector(":disabled:checked", "after"))
        .decl("background-color", &theme.radio_button_disabled_color);

    w.rules
}

/// Rendered style sheet for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            rules: build_declarations(theme),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Declarations for one selector, in order.
    pub fn declarations_for<'a>(
        &'a self,
        selector: &'a str,
    ) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.selector == selector)
            .map(|rule| (rule.property, rule.value.as_str()))
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        render_css(&self.rules)
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Render rules as CSS, merging consecutive rules with the same selector.
#[must_use]
pub fn render_css(rules: &[StyleRule]) -> String {
    let mut out = String::new();
    let mut open: Option<&str> = None;
    for rule in rules {
        if open != Some(rule.selector.as_str()) {
            if open.is_some() {
                out.push_str("}\n");
            }
            let _ = writeln!(out, "{} {{", rule.selector);
            open = Some(&rule.selector);
        }
        let _ = writeln!(out, "  {}: {};", rule.property, rule.value);
    }
    if open.is_some() {
        out.push_str("}\n");
    }
    out
}
