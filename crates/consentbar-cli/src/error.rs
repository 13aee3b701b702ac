// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use consentbar_theme::ThemeError;
use consentbar_widget::WidgetError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("cannot install log subscriber: {0}")]
    Logging(String),
}

impl CliError {
    /// Process exit code: 2 for bad configuration, 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Json(_) | Self::Theme(_) | Self::Widget(_) => 2,
            Self::Io(_) | Self::Read { .. } | Self::Logging(_) => 1,
        }
    }
}
