// SPDX-License-Identifier: Apache-2.0
//! Cookie categories and the consent map reported to the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Consent per category id. `true` means the user allows the category.
pub type ConsentMap = BTreeMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieCategory {
    pub id: String,
    pub name: String,
    /// May contain inline HTML.
    #[serde(default)]
    pub description_html: String,
    /// Essential categories are always consented and render without radios.
    #[serde(default)]
    pub is_unswitchable: bool,
}

impl CookieCategory {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description_html: String::new(),
            is_unswitchable: false,
        }
    }

    #[must_use]
    pub fn description(mut self, html: impl Into<String>) -> Self {
        self.description_html = html.into();
        self
    }

    #[must_use]
    pub fn unswitchable(mut self) -> Self {
        self.is_unswitchable = true;
        self
    }
}
