// SPDX-License-Identifier: Apache-2.0
//! Layout direction lookup by culture code.
//!
//! Only the primary language subtag matters: `"ar-SA"`, `"AR"`, and
//! `"ar_EG"` are all right-to-left. Unknown or empty codes fall back to
//! left-to-right.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary language subtags written right-to-left.
pub const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "ha", "he", "khw", "ks", "ku", "ps", "sd", "syr", "ug", "ur",
    "yi",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for an HTML `dir` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// The primary language subtag of a culture code, lowercased.
#[must_use]
pub fn primary_language(culture: &str) -> String {
    culture
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[must_use]
pub fn direction_for_culture(culture: &str) -> TextDirection {
    let language = primary_language(culture);
    if RTL_LANGUAGES.contains(&language.as_str()) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}
