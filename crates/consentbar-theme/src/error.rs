// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

use crate::schema::ThemeProperty;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error("missing required anchor properties: {}", property_list(.missing))]
    MissingAnchors { missing: Vec<ThemeProperty> },

    #[error("theme is incomplete, missing: {}", property_list(.missing))]
    Incomplete { missing: Vec<ThemeProperty> },

    #[error("cannot derive {target} from {source_property} value '{value}': unsupported color format")]
    UnsupportedColor {
        target: ThemeProperty,
        source_property: ThemeProperty,
        value: String,
    },

    #[error("unknown theme property: {key}")]
    UnknownProperty { key: String },

    #[error("unknown theme: {name}")]
    UnknownTheme { name: String },

    #[error("invalid theme '{name}': {reason}")]
    InvalidTheme {
        name: String,
        reason: Box<ThemeError>,
    },
}

impl ThemeError {
    #[must_use]
    pub fn in_theme(self, name: impl Into<String>) -> Self {
        Self::InvalidTheme {
            name: name.into(),
            reason: Box::new(self),
        }
    }

    /// The innermost error, with any theme-name wrapping removed.
    #[must_use]
    pub fn root(&self) -> &ThemeError {
        match self {
            Self::InvalidTheme { reason, .. } => reason.root(),
            other => other,
        }
    }
}

fn property_list(properties: &[ThemeProperty]) -> String {
    properties
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(", ")
}
