// SPDX-License-Identifier: Apache-2.0
use consentbar_theme::ThemeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("options JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown cookie category: {id}")]
    UnknownCategory { id: String },

    #[error("cookie category '{id}' is declared more than once")]
    DuplicateCategory { id: String },

    #[error("cookie category '{id}' cannot be switched off")]
    LockedCategory { id: String },
}

impl WidgetError {
    /// The theme error behind this failure, if any.
    #[must_use]
    pub fn theme_error(&self) -> Option<&ThemeError> {
        match self {
            Self::Theme(err) => Some(err.root()),
            _ => None,
        }
    }
}
