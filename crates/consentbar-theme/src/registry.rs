// SPDX-License-Identifier: Apache-2.0
//! Named theme registry.
//!
//! A [`ThemeSet`] maps theme names to resolved themes. It always starts with
//! the three presets; caller themes are merged over a preset of the same name
//! or, for any other name, must carry every anchor themselves.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{Result, ThemeError};
use crate::preset::Preset;
use crate::resolve::resolve;
use crate::schema::{PartialTheme, Theme};

/// How caller keys outside the schema are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtraKeys {
    /// Keep them verbatim in `Theme::extras`.
    #[default]
    PassThrough,
    /// Reject the theme with `ThemeError::UnknownProperty`.
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSet {
    themes: BTreeMap<String, Theme>,
    extra_keys: ExtraKeys,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::with_presets()
    }
}

impl ThemeSet {
    /// A set holding only the built-in presets.
    #[must_use]
    pub fn with_presets() -> Self {
        let themes = Preset::ALL
            .into_iter()
            .map(|preset| (preset.name().to_string(), preset.theme()))
            .collect();
        Self {
            themes,
            extra_keys: ExtraKeys::default(),
        }
    }

    #[must_use]
    pub fn extra_keys(mut self, policy: ExtraKeys) -> Self {
        self.extra_keys = policy;
        self
    }

    /// Build a set from presets plus caller themes; the first invalid theme aborts.
    pub fn from_partials<I, K>(partials: I, extra_keys: ExtraKeys) -> Result<Self>
    where
        I: IntoIterator<Item = (K, PartialTheme)>,
        K: Into<String>,
    {
        let mut set = Self::with_presets().extra_keys(extra_keys);
        for (name, partial) in partials {
            set.register(name, &partial)?;
        }
        Ok(set)
    }

    /// Resolve `partial` and store it under `name`, replacing any previous theme.
    ///
    /// Errors are wrapped with the theme name; the set is unchanged on error.
    pub fn register(&mut self, name: impl Into<String>, partial: &PartialTheme) -> Result<&Theme> {
        let name = name.into();
        let theme = self.prepare(&name, partial).map_err(|err| {
            warn!(theme = %name, error = %err, "theme rejected");
            err.in_theme(name.clone())
        })?;
        debug!(theme = %name, extras = theme.extras.len(), "theme registered");
        self.themes.insert(name.clone(), theme);
        self.require(&name)
    }

    fn prepare(&self, name: &str, partial: &PartialTheme) -> Result<Theme> {
        if self.extra_keys == ExtraKeys::Reject {
            if let Some(key) = partial.extras.keys().next() {
                return Err(ThemeError::UnknownProperty { key: key.clone() });
            }
        }
        match Preset::from_name(name) {
            Some(preset) => resolve(&preset.merge(partial)),
            None => resolve(partial),
        }
    }

    /// Look up a theme, failing with `ThemeError::UnknownTheme`.
    pub fn require(&self, name: &str) -> Result<&Theme> {
        self.themes.get(name).ok_or_else(|| ThemeError::UnknownTheme {
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Theme names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Theme)> {
        self.themes.iter().map(|(name, theme)| (name.as_str(), theme))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
