// SPDX-License-Identifier: Apache-2.0
//! Widget construction options, usually read from JSON supplied by the host.
//!
//! ```json
//! {
//!   "culture": "he-IL",
//!   "categories": [{ "id": "essential", "name": "Essential", "isUnswitchable": true }],
//!   "text": { "acceptAllLabel": "Accept all" },
//!   "themes": { "brand": { "primary-button-color": "#008B8B" } },
//!   "initialTheme": "light"
//! }
//! ```

use std::collections::BTreeMap;

use consentbar_i18n::PartialTextResources;
use consentbar_theme::{ExtraKeys, PartialTheme, Preset};
use serde::{Deserialize, Serialize};

use crate::category::{ConsentMap, CookieCategory};
use crate::error::Result;

pub const DEFAULT_CULTURE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetOptions {
    /// Culture code that selects the layout direction.
    pub culture: String,
    pub categories: Vec<CookieCategory>,
    /// Previously stored choices, keyed by category id.
    pub preferences: ConsentMap,
    pub text: PartialTextResources,
    /// Caller themes, merged over presets of the same name.
    pub themes: BTreeMap<String, PartialTheme>,
    pub initial_theme: String,
    /// Reject theme keys outside the schema instead of passing them through.
    pub strict_theme_keys: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            culture: DEFAULT_CULTURE.to_string(),
            categories: Vec::new(),
            preferences: ConsentMap::new(),
            text: PartialTextResources::default(),
            themes: BTreeMap::new(),
            initial_theme: Preset::Light.name().to_string(),
            strict_theme_keys: false,
        }
    }
}

impl WidgetOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn extra_keys(&self) -> ExtraKeys {
        if self.strict_theme_keys {
            ExtraKeys::Reject
        } else {
            ExtraKeys::PassThrough
        }
    }

    #[must_use]
    pub fn culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: CookieCategory) -> Self {
        self.categories.push(category);
        self
    }

    #[must_use]
    pub fn theme(mut self, name: impl Into<String>, theme: PartialTheme) -> Self {
        self.themes.insert(name.into(), theme);
        self
    }

    #[must_use]
    pub fn initial_theme(mut self, name: impl Into<String>) -> Self {
        self.initial_theme = name.into();
        self
    }
}
