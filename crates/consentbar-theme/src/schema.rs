// SPDX-License-Identifier: Apache-2.0
//! Fixed theme schema: the closed property set, partial themes, and resolved themes.
//!
//! Every property lives in exactly one of two groups:
//!
//! - **Anchors** must be supplied by the caller (or inherited from a preset).
//! - **Derivable** properties may be omitted; the resolver fills them in from
//!   anchors.
//!
//! Keys that are not part of the schema are kept in an `extras` map and passed
//! through untouched. Nothing in this crate reads them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

macro_rules! theme_schema {
    (
        anchors {
            $( $afield:ident => $avariant:ident = $akey:literal, )+
        }
        derivable {
            $( $dfield:ident => $dvariant:ident = $dkey:literal, )+
        }
    ) => {
        /// A named property of the closed theme schema.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum ThemeProperty {
            $( #[serde(rename = $akey)] $avariant, )+
            $( #[serde(rename = $dkey)] $dvariant, )+
        }

        impl ThemeProperty {
            /// Properties the caller must always provide.
            pub const ANCHORS: &'static [ThemeProperty] = &[$(Self::$avariant,)+];

            /// Properties the resolver fills in when absent.
            pub const DERIVABLE: &'static [ThemeProperty] = &[$(Self::$dvariant,)+];

            /// Every property, anchors first, in declaration order.
            pub const ALL: &'static [ThemeProperty] =
                &[$(Self::$avariant,)+ $(Self::$dvariant,)+];

            /// The kebab-case key used in configuration and style output.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $( Self::$avariant => $akey, )+
                    $( Self::$dvariant => $dkey, )+
                }
            }

            /// Look up a property by its kebab-case key.
            #[must_use]
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( $akey => Some(Self::$avariant), )+
                    $( $dkey => Some(Self::$dvariant), )+
                    _ => None,
                }
            }

            #[must_use]
            pub const fn is_anchor(self) -> bool {
                matches!(self, $( Self::$avariant )|+)
            }
        }

        /// A caller-supplied theme in which any property may be missing.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct PartialTheme {
            $(
                #[serde(rename = $akey, default, skip_serializing_if = "Option::is_none")]
                pub $afield: Option<String>,
            )+
            $(
                #[serde(rename = $dkey, default, skip_serializing_if = "Option::is_none")]
                pub $dfield: Option<String>,
            )+
            /// Keys outside the schema, preserved verbatim.
            #[serde(flatten)]
            pub extras: BTreeMap<String, String>,
        }

        impl PartialTheme {
            /// Raw stored value, including empty strings.
            #[must_use]
            pub fn get(&self, property: ThemeProperty) -> Option<&str> {
                match property {
                    $( ThemeProperty::$avariant => self.$afield.as_deref(), )+
                    $( ThemeProperty::$dvariant => self.$dfield.as_deref(), )+
                }
            }

            pub fn set(&mut self, property: ThemeProperty, value: impl Into<String>) {
                let value = Some(value.into());
                match property {
                    $( ThemeProperty::$avariant => self.$afield = value, )+
                    $( ThemeProperty::$dvariant => self.$dfield = value, )+
                }
            }

            pub fn remove(&mut self, property: ThemeProperty) -> Option<String> {
                match property {
                    $( ThemeProperty::$avariant => self.$afield.take(), )+
                    $( ThemeProperty::$dvariant => self.$dfield.take(), )+
                }
            }
        }

        /// A fully resolved theme: every schema property carries a value.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct Theme {
            $( #[serde(rename = $akey)] pub $afield: String, )+
            $( #[serde(rename = $dkey)] pub $dfield: String, )+
            /// Keys outside the schema, preserved verbatim.
            #[serde(flatten)]
            pub extras: BTreeMap<String, String>,
        }

        impl Theme {
            #[must_use]
            pub fn get(&self, property: ThemeProperty) -> &str {
                match property {
                    $( ThemeProperty::$avariant => &self.$afield, )+
                    $( ThemeProperty::$dvariant => &self.$dfield, )+
                }
            }

            /// Convert back into a partial theme with every property set.
            #[must_use]
            pub fn to_partial(&self) -> PartialTheme {
                PartialTheme {
                    $( $afield: Some(self.$afield.clone()), )+
                    $( $dfield: Some(self.$dfield.clone()), )+
                    extras: self.extras.clone(),
                }
            }
        }

        impl TryFrom<PartialTheme> for Theme {
            type Error = ThemeError;

            fn try_from(partial: PartialTheme) -> Result<Self, Self::Error> {
                let missing = partial.missing_properties();
                if !missing.is_empty() {
                    return Err(ThemeError::Incomplete { missing });
                }
                Ok(Self {
                    $( $afield: partial.$afield.unwrap_or_default(), )+
                    $( $dfield: partial.$dfield.unwrap_or_default(), )+
                    extras: partial.extras,
                })
            }
        }
    };
}

theme_schema! {
    anchors {
        close_button_color => CloseButtonColor = "close-button-color",
        secondary_button_disabled_opacity => SecondaryButtonDisabledOpacity = "secondary-button-disabled-opacity",
        secondary_button_hover_shadow => SecondaryButtonHoverShadow = "secondary-button-hover-shadow",
        primary_button_disabled_opacity => PrimaryButtonDisabledOpacity = "primary-button-disabled-opacity",
        primary_button_hover_border => PrimaryButtonHoverBorder = "primary-button-hover-border",
        primary_button_disabled_border => PrimaryButtonDisabledBorder = "primary-button-disabled-border",
        primary_button_hover_shadow => PrimaryButtonHoverShadow = "primary-button-hover-shadow",
        banner_background_color => BannerBackgroundColor = "banner-background-color",
        dialog_background_color => DialogBackgroundColor = "dialog-background-color",
        primary_button_color => PrimaryButtonColor = "primary-button-color",
        text_color => TextColor = "text-color",
        secondary_button_color => SecondaryButtonColor = "secondary-button-color",
        secondary_button_disabled_color => SecondaryButtonDisabledColor = "secondary-button-disabled-color",
        secondary_button_border => SecondaryButtonBorder = "secondary-button-border",
    }
    derivable {
        background_color_between_page_and_dialog => BackgroundColorBetweenPageAndDialog = "background-color-between-page-and-dialog",
        dialog_border_color => DialogBorderColor = "dialog-border-color",
        hyperlink_font_color => HyperlinkFontColor = "hyperlink-font-color",
        secondary_button_hover_color => SecondaryButtonHoverColor = "secondary-button-hover-color",
        secondary_button_hover_border => SecondaryButtonHoverBorder = "secondary-button-hover-border",
        secondary_button_disabled_border => SecondaryButtonDisabledBorder = "secondary-button-disabled-border",
        secondary_button_focus_border_color => SecondaryButtonFocusBorderColor = "secondary-button-focus-border-color",
        secondary_button_text_color => SecondaryButtonTextColor = "secondary-button-text-color",
        secondary_button_disabled_text_color => SecondaryButtonDisabledTextColor = "secondary-button-disabled-text-color",
        primary_button_hover_color => PrimaryButtonHoverColor = "primary-button-hover-color",
        primary_button_disabled_color => PrimaryButtonDisabledColor = "primary-button-disabled-color",
        primary_button_border => PrimaryButtonBorder = "primary-button-border",
        primary_button_focus_border_color => PrimaryButtonFocusBorderColor = "primary-button-focus-border-color",
        primary_button_text_color => PrimaryButtonTextColor = "primary-button-text-color",
        primary_button_disabled_text_color => PrimaryButtonDisabledTextColor = "primary-button-disabled-text-color",
        radio_button_border_color => RadioButtonBorderColor = "radio-button-border-color",
        radio_button_checked_background_color => RadioButtonCheckedBackgroundColor = "radio-button-checked-background-color",
        radio_button_hover_border_color => RadioButtonHoverBorderColor = "radio-button-hover-border-color",
        radio_button_hover_background_color => RadioButtonHoverBackgroundColor = "radio-button-hover-background-color",
        radio_button_disabled_color => RadioButtonDisabledColor = "radio-button-disabled-color",
        radio_button_disabled_border_color => RadioButtonDisabledBorderColor = "radio-button-disabled-border-color",
    }
}

/// Whether a stored value counts as "provided". Only `None` and `""` do not.
#[must_use]
pub(crate) fn is_provided(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl ThemeProperty {
    #[must_use]
    pub const fn is_derivable(self) -> bool {
        !self.is_anchor()
    }
}

impl fmt::Display for ThemeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeProperty {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ThemeError::UnknownProperty { key: s.to_string() })
    }
}

impl PartialTheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, property: ThemeProperty, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Provided value: present and not empty. Whitespace is kept as given.
    #[must_use]
    pub fn value(&self, property: ThemeProperty) -> Option<&str> {
        self.get(property).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn is_provided(&self, property: ThemeProperty) -> bool {
        is_provided(self.get(property))
    }

    /// Anchors that are absent or empty, in schema order.
    #[must_use]
    pub fn missing_anchors(&self) -> Vec<ThemeProperty> {
        ThemeProperty::ANCHORS
            .iter()
            .copied()
            .filter(|&p| !self.is_provided(p))
            .collect()
    }

    /// Every property that is absent or empty, in schema order.
    #[must_use]
    pub fn missing_properties(&self) -> Vec<ThemeProperty> {
        ThemeProperty::ALL
            .iter()
            .copied()
            .filter(|&p| !self.is_provided(p))
            .collect()
    }

    /// Number of schema properties carrying a provided value.
    #[must_use]
    pub fn provided_count(&self) -> usize {
        ThemeProperty::ALL
            .iter()
            .filter(|&&p| self.is_provided(p))
            .count()
    }

    /// Fill every anchor this theme does not provide from `base`.
    pub fn merge_anchors_from(&mut self, base: &Theme) {
        for &property in ThemeProperty::ANCHORS {
            if !self.is_provided(property) {
                self.set(property, base.get(property));
            }
        }
    }

    /// Build a partial theme from string keys, sorting unknown keys into `extras`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut theme = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            match ThemeProperty::from_key(key) {
                Some(property) => theme.set(property, value),
                None => {
                    theme.extras.insert(key.to_string(), value.into());
                }
            }
        }
        theme
    }
}

impl From<Theme> for PartialTheme {
    fn from(theme: Theme) -> Self {
        theme.to_partial()
    }
}

impl Theme {
    /// Iterate over every schema property and its value, anchors first.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeProperty, &str)> + '_ {
        ThemeProperty::ALL.iter().map(move |&p| (p, self.get(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_sizes() {
        assert_eq!(ThemeProperty::ANCHORS.len(), 14);
        assert_eq!(ThemeProperty::DERIVABLE.len(), 21);
        assert_eq!(ThemeProperty::ALL.len(), 35);
    }

    #[test]
    fn keys_round_trip() {
        for &property in ThemeProperty::ALL {
            assert_eq!(ThemeProperty::from_key(property.key()), Some(property));
            assert_eq!(property.to_string(), property.key());
        }
    }

    #[test]
    fn anchor_partition() {
        assert!(ThemeProperty::ANCHORS.iter().all(|p| p.is_anchor()));
        assert!(ThemeProperty::DERIVABLE.iter().all(|p| p.is_derivable()));
    }

    #[test]
    fn unknown_key_is_rejected_by_from_str() {
        let err = "banner-colour".parse::<ThemeProperty>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownProperty { key } if key == "banner-colour"));
    }

    #[test]
    fn empty_values_are_not_provided() {
        let theme = PartialTheme::new()
            .with(ThemeProperty::TextColor, "")
            .with(ThemeProperty::PrimaryButtonColor, "#0067B8");
        assert!(!theme.is_provided(ThemeProperty::TextColor));
        assert_eq!(theme.get(ThemeProperty::TextColor), Some(""));
        assert_eq!(theme.value(ThemeProperty::TextColor), None);
        assert_eq!(theme.provided_count(), 1);
        assert!(theme.missing_anchors().contains(&ThemeProperty::TextColor));
    }

    #[test]
    fn whitespace_values_are_provided() {
        let theme = PartialTheme::new().with(ThemeProperty::TextColor, "  ");
        assert!(theme.is_provided(ThemeProperty::TextColor));
        assert_eq!(theme.value(ThemeProperty::TextColor), Some("  "));
        assert!(!theme.missing_anchors().contains(&ThemeProperty::TextColor));
    }

    #[test]
    fn from_pairs_routes_unknown_keys_to_extras() {
        let theme = PartialTheme::from_pairs([
            ("text-color", "#000000"),
            ("font-family", "Segoe UI"),
        ]);
        assert_eq!(theme.text_color.as_deref(), Some("#000000"));
        assert_eq!(theme.extras.get("font-family").map(String::as_str), Some("Segoe UI"));
    }

    #[test]
    fn incomplete_partial_does_not_convert() {
        let partial = PartialTheme::new().with(ThemeProperty::TextColor, "#000000");
        let err = Theme::try_from(partial).unwrap_err();
        let ThemeError::Incomplete { missing } = err else {
            panic!("expected Incomplete");
        };
        assert_eq!(missing.len(), 34);
        assert!(!missing.contains(&ThemeProperty::TextColor));
    }

    #[test]
    fn json_keys_are_kebab_case_and_extras_flatten() {
        let json = r##"{"text-color":"#111111","dialog-border-color":"red","x-custom":"1"}"##;
        let theme: PartialTheme = serde_json::from_str(json).unwrap();
        assert_eq!(theme.text_color.as_deref(), Some("#111111"));
        assert_eq!(theme.dialog_border_color.as_deref(), Some("red"));
        assert_eq!(theme.extras.get("x-custom").map(String::as_str), Some("1"));

        let back = serde_json::to_value(&theme).unwrap();
        assert_eq!(back["text-color"], "#111111");
        assert_eq!(back["x-custom"], "1");
        assert!(back.get("banner-background-color").is_none());
    }

    #[test]
    fn merge_anchors_keeps_caller_values() {
        let base = PartialTheme::from_pairs(
            ThemeProperty::ALL.iter().map(|p| (p.key(), "base")),
        );
        let base = Theme::try_from(base).unwrap();
        let mut theme = PartialTheme::new()
            .with(ThemeProperty::TextColor, "#123456")
            .with(ThemeProperty::BannerBackgroundColor, "");
        theme.merge_anchors_from(&base);
        assert!(theme.missing_anchors().is_empty());
        assert_eq!(theme.value(ThemeProperty::TextColor), Some("#123456"));
        assert_eq!(theme.value(ThemeProperty::BannerBackgroundColor), Some("base"));
        assert_eq!(theme.get(ThemeProperty::DialogBorderColor), None);
    }

    #[test]
    fn remove_clears_value() {
        let mut theme = PartialTheme::new().with(ThemeProperty::TextColor, "#000000");
        assert_eq!(theme.remove(ThemeProperty::TextColor).as_deref(), Some("#000000"));
        assert_eq!(theme.get(ThemeProperty::TextColor), None);
    }
}
