// SPDX-License-Identifier: Apache-2.0
//! Built-in themes for the well-known names `light`, `dark`, and `high-contrast`.
//!
//! Every preset specifies all schema properties explicitly, so presets never
//! go through derivation. The high-contrast preset uses color keywords that
//! the alpha blender does not parse; that is only safe because nothing is
//! derived from it.

use std::collections::BTreeMap;
use std::fmt;

use crate::schema::{PartialTheme, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Light,
    Dark,
    HighContrast,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Light, Preset::Dark, Preset::HighContrast];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => light(),
            Self::Dark => dark(),
            Self::HighContrast => high_contrast(),
        }
    }

    /// Overlay a caller theme on this preset.
    ///
    /// Caller values win. Missing anchors come from the preset. A preset
    /// derivable is inherited only when the caller left its source anchor
    /// alone; otherwise it is left absent so the resolver re-derives it from
    /// the caller's anchor.
    #[must_use]
    pub fn merge(self, overrides: &PartialTheme) -> PartialTheme {
        let base = self.theme();
        let mut merged = overrides.clone();
        merged.merge_anchors_from(&base);

        for rule in &crate::resolve::DERIVATION_RULES {
            if merged.is_provided(rule.target) || overrides.is_provided(rule.source) {
                continue;
            }
            merged.set(rule.target, base.get(rule.target));
        }

        for (key, value) in &base.extras {
            merged
                .extras
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }

        merged
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn light() -> Theme {
    Theme {
        close_button_color: "#666666".into(),
        secondary_button_disabled_opacity: "1".into(),
        secondary_button_hover_shadow: "none".into(),
        primary_button_disabled_opacity: "0.5".into(),
        primary_button_hover_border: "none".into(),
        primary_button_disabled_border: "none".into(),
        primary_button_hover_shadow: "0px 4px 10px rgba(0, 0, 0, 0.25)".into(),
        banner_background_color: "#F2F2F2".into(),
        dialog_background_color: "#FFFFFF".into(),
        primary_button_color: "#0067B8".into(),
        text_color: "#000000".into(),
        secondary_button_color: "#EBEBEB".into(),
        secondary_button_disabled_color: "rgba(0,0,0,0.2)".into(),
        secondary_button_border: "none".into(),

        background_color_between_page_and_dialog: "rgba(255, 255, 255, 0.6)".into(),
        dialog_border_color: "#0067B8".into(),
        hyperlink_font_color: "#0067B8".into(),
        secondary_button_hover_color: "#DBDBDB".into(),
        secondary_button_hover_border: "none".into(),
        secondary_button_disabled_border: "none".into(),
        secondary_button_focus_border_color: "#000000".into(),
        secondary_button_text_color: "#000000".into(),
        secondary_button_disabled_text_color: "rgba(0, 0, 0, 0.2)".into(),
        primary_button_hover_color: "#0067B8".into(),
        primary_button_disabled_color: "rgba(0, 120, 215, 0.2)".into(),
        primary_button_border: "none".into(),
        primary_button_focus_border_color: "#000000".into(),
        primary_button_text_color: "#FFFFFF".into(),
        primary_button_disabled_text_color: "rgba(0, 0, 0, 0.2)".into(),
        radio_button_border_color: "#000000".into(),
        radio_button_checked_background_color: "#000000".into(),
        radio_button_hover_border_color: "#0067B8".into(),
        radio_button_hover_background_color: "rgba(0, 0, 0, 0.8)".into(),
        radio_button_disabled_color: "rgba(0, 0, 0, 0.2)".into(),
        radio_button_disabled_border_color: "rgba(0, 0, 0, 0.2)".into(),
        extras: BTreeMap::new(),
    }
}

fn dark() -> Theme {
    Theme {
        close_button_color: "#E3E3E3".into(),
        secondary_button_disabled_opacity: "0.5".into(),
        secondary_button_hover_shadow: "none".into(),
        primary_button_disabled_opacity: "0.5".into(),
        primary_button_hover_border: "none".into(),
        primary_button_disabled_border: "none".into(),
        primary_button_hover_shadow: "0px 4px 10px rgba(0, 0, 0, 0.25)".into(),
        banner_background_color: "#242424".into(),
        dialog_background_color: "#171717".into(),
        primary_button_color: "#4DB2FF".into(),
        text_color: "#E3E3E3".into(),
        secondary_button_color: "#171717".into(),
        secondary_button_disabled_color: "#2E2E2E".into(),
        secondary_button_border: "1px solid #E3E3E3".into(),

        background_color_between_page_and_dialog: "rgba(23, 23, 23, 0.6)".into(),
        dialog_border_color: "#4DB2FF".into(),
        hyperlink_font_color: "#4DB2FF".into(),
        secondary_button_hover_color: "#2E2E2E".into(),
        secondary_button_hover_border: "1px solid #E3E3E3".into(),
        secondary_button_disabled_border: "1px solid #2E2E2E".into(),
        secondary_button_focus_border_color: "#E3E3E3".into(),
        secondary_button_text_color: "#E3E3E3".into(),
        secondary_button_disabled_text_color: "rgba(227, 227, 227, 0.2)".into(),
        primary_button_hover_color: "#4DB2FF".into(),
        primary_button_disabled_color: "rgba(77, 178, 255, 0.2)".into(),
        primary_button_border: "1px solid #4DB2FF".into(),
        primary_button_focus_border_color: "#E3E3E3".into(),
        primary_button_text_color: "#171717".into(),
        primary_button_disabled_text_color: "rgba(23, 23, 23, 0.2)".into(),
        radio_button_border_color: "#E3E3E3".into(),
        radio_button_checked_background_color: "#E3E3E3".into(),
        radio_button_hover_border_color: "#4DB2FF".into(),
        radio_button_hover_background_color: "rgba(227, 227, 227, 0.8)".into(),
        radio_button_disabled_color: "rgba(227, 227, 227, 0.2)".into(),
        radio_button_disabled_border_color: "rgba(227, 227, 227, 0.2)".into(),
        extras: BTreeMap::new(),
    }
}

fn high_contrast() -> Theme {
    Theme {
        close_button_color: "yellow".into(),
        secondary_button_disabled_opacity: "1".into(),
        secondary_button_hover_shadow: "none".into(),
        primary_button_disabled_opacity: "1".into(),
        primary_button_hover_border: "1px solid yellow".into(),
        primary_button_disabled_border: "1px solid white".into(),
        primary_button_hover_shadow: "none".into(),
        banner_background_color: "black".into(),
        dialog_background_color: "black".into(),
        primary_button_color: "yellow".into(),
        text_color: "white".into(),
        secondary_button_color: "black".into(),
        secondary_button_disabled_color: "black".into(),
        secondary_button_border: "1px solid white".into(),

        background_color_between_page_and_dialog: "rgba(0, 0, 0, 0.6)".into(),
        dialog_border_color: "white".into(),
        hyperlink_font_color: "yellow".into(),
        secondary_button_hover_color: "black".into(),
        secondary_button_hover_border: "1px solid yellow".into(),
        secondary_button_disabled_border: "1px solid white".into(),
        secondary_button_focus_border_color: "white".into(),
        secondary_button_text_color: "white".into(),
        secondary_button_disabled_text_color: "white".into(),
        primary_button_hover_color: "black".into(),
        primary_button_disabled_color: "black".into(),
        primary_button_border: "1px solid yellow".into(),
        primary_button_focus_border_color: "white".into(),
        primary_button_text_color: "black".into(),
        primary_button_disabled_text_color: "white".into(),
        radio_button_border_color: "white".into(),
        radio_button_checked_background_color: "white".into(),
        radio_button_hover_border_color: "yellow".into(),
        radio_button_hover_background_color: "yellow".into(),
        radio_button_disabled_color: "black".into(),
        radio_button_disabled_border_color: "white".into(),
        extras: BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;
    use crate::schema::ThemeProperty;

    #[test]
    fn names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name("solarized"), None);
        assert_eq!(Preset::from_name("Light"), None);
    }

    #[test]
    fn presets_are_fixed_points_of_resolution() {
        for preset in Preset::ALL {
            let theme = preset.theme();
            assert_eq!(resolve(&theme.to_partial()).unwrap(), theme, "{preset}");
        }
    }

    #[test]
    fn presets_have_no_blank_values() {
        for preset in Preset::ALL {
            let theme = preset.theme();
            for (property, value) in theme.iter() {
                assert!(!value.trim().is_empty(), "{preset}: {property}");
            }
        }
    }

    #[test]
    fn high_contrast_anchors_alone_cannot_derive_blends() {
        let theme = Preset::HighContrast.theme();
        let mut anchors = PartialTheme::new();
        for &property in ThemeProperty::ANCHORS {
            anchors.set(property, theme.get(property));
        }
        assert!(resolve(&anchors).is_err());
    }

    #[test]
    fn empty_override_merges_to_preset() {
        for preset in Preset::ALL {
            let merged = preset.merge(&PartialTheme::new());
            assert_eq!(resolve(&merged).unwrap(), preset.theme());
        }
    }

    #[test]
    fn overriding_an_anchor_rederives_its_dependents() {
        let overrides = PartialTheme::new().with(ThemeProperty::PrimaryButtonColor, "#008B8B");
        let theme = resolve(&Preset::Light.merge(&overrides)).unwrap();
        assert_eq!(theme.primary_button_color, "#008B8B");
        assert_eq!(theme.dialog_border_color, "#008B8B");
        assert_eq!(theme.primary_button_border, "1px solid #008B8B");
        // Untouched anchors keep their tuned preset derivables.
        assert_eq!(theme.secondary_button_hover_color, "#DBDBDB");
        assert_eq!(theme.radio_button_border_color, "#000000");
    }

    #[test]
    fn high_contrast_merge_keeps_keyword_safe_blends() {
        let overrides = PartialTheme::new().with(ThemeProperty::PrimaryButtonColor, "lime");
        let theme = resolve(&Preset::HighContrast.merge(&overrides)).unwrap();
        assert_eq!(theme.hyperlink_font_color, "lime");
        assert_eq!(theme.background_color_between_page_and_dialog, "rgba(0, 0, 0, 0.6)");
    }
}
