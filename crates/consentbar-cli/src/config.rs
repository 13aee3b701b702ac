// SPDX-License-Identifier: Apache-2.0
//! Loading themes from widget option files and standalone theme files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use consentbar_theme::{ExtraKeys, PartialTheme, ThemeSet};
use consentbar_widget::WidgetOptions;
use tracing::debug;

use crate::error::{CliError, Result};

/// Where themes come from.
#[derive(Debug, Clone, Default, Args)]
pub struct ThemeSource {
    /// Widget options JSON; its `themes` are registered over the presets.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// A single theme JSON object, registered under `--name`.
    #[arg(long, value_name = "FILE")]
    pub theme_file: Option<PathBuf>,

    /// Reject theme keys outside the schema.
    #[arg(long)]
    pub strict: bool,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

impl ThemeSource {
    /// Build the theme set. `name` is used for `--theme-file`.
    pub fn load(&self, name: &str) -> Result<ThemeSet> {
        let mut set = match &self.config {
            Some(path) => {
                let options = WidgetOptions::from_json_str(&read(path)?)?;
                let extra_keys = if self.strict {
                    ExtraKeys::Reject
                } else {
                    options.extra_keys()
                };
                debug!(path = %path.display(), themes = options.themes.len(), "loaded options");
                ThemeSet::from_partials(options.themes, extra_keys)?
            }
            None => ThemeSet::with_presets().extra_keys(self.extra_keys()),
        };

        if let Some(path) = &self.theme_file {
            let partial: PartialTheme = serde_json::from_str(&read(path)?)?;
            set.register(name, &partial)?;
        }
        Ok(set)
    }

    fn extra_keys(&self) -> ExtraKeys {
        if self.strict {
            ExtraKeys::Reject
        } else {
            ExtraKeys::PassThrough
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use consentbar_theme::Preset;

    fn temp_json(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_sources_yields_presets() {
        let set = ThemeSource::default().load("light").unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("dark"), Some(&Preset::Dark.theme()));
    }

    #[test]
    fn theme_file_is_registered_under_name() {
        let file = temp_json(r##"{"primary-button-color": "#008B8B"}"##);
        let source = ThemeSource {
            theme_file: Some(file.path().to_path_buf()),
            ..ThemeSource::default()
        };
        let set = source.load("light").unwrap();
        assert_eq!(set.require("light").unwrap().dialog_border_color, "#008B8B");
    }

    #[test]
    fn strict_flag_overrides_options() {
        let file = temp_json(r##"{"themes": {"dark": {"glow": "none"}}}"##);
        let source = ThemeSource {
            config: Some(file.path().to_path_buf()),
            strict: true,
            ..ThemeSource::default()
        };
        assert!(matches!(source.load("dark"), Err(CliError::Theme(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = ThemeSource {
            config: Some(PathBuf::from("/nonexistent/consentbar.json")),
            ..ThemeSource::default()
        };
        assert!(matches!(source.load("light"), Err(CliError::Read { .. })));
    }
}
