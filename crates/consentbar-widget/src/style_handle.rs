// SPDX-License-Identifier: Apache-2.0
//! The style container that carries the active theme's rules.
//!
//! One [`StyleSheetHandle`] belongs to one widget. The widget acquires it when
//! any of its surfaces becomes visible and releases it when all are hidden.
//! Applying a theme always replaces the whole content; rules are never patched
//! in place.

use consentbar_theme::{StyleSheet, ThemeSet};
use tracing::debug;

use crate::error::Result;

/// Element id the host gives the style container.
pub const STYLE_ELEMENT_ID: &str = "cbar-theme-style";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheetHandle {
    css: String,
    theme: Option<String>,
    attached: bool,
    generation: u64,
}

impl StyleSheetHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `name` from `themes` and replace the content.
    ///
    /// On error the previous content stays in place.
    pub fn apply(&mut self, themes: &ThemeSet, name: &str) -> Result<()> {
        let theme = themes.require(name)?;
        self.css = StyleSheet::from_theme(theme).to_css();
        self.theme = Some(name.to_string());
        self.generation += 1;
        debug!(theme = name, generation = self.generation, "style sheet replaced");
        Ok(())
    }

    /// Attach the container to the host document.
    pub fn acquire(&mut self) {
        if !self.attached {
            self.attached = true;
            debug!(id = STYLE_ELEMENT_ID, "style container attached");
        }
    }

    /// Detach the container; the rendered content is kept for the next acquire.
    pub fn release(&mut self) {
        if self.attached {
            self.attached = false;
            debug!(id = STYLE_ELEMENT_ID, "style container detached");
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The text the host should place in the container, while attached.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.attached.then_some(self.css.as_str())
    }

    /// Rendered content regardless of attachment.
    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }

    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Incremented on every successful apply.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consentbar_theme::Preset;

    #[test]
    fn apply_replaces_content() {
        let themes = ThemeSet::with_presets();
        let mut handle = StyleSheetHandle::new();
        handle.apply(&themes, "light").unwrap();
        let light = handle.css().to_string();
        handle.apply(&themes, "dark").unwrap();
        assert_ne!(handle.css(), light);
        assert_eq!(handle.css(), StyleSheet::from_theme(&Preset::Dark.theme()).to_css());
        assert_eq!(handle.generation(), 2);
        assert_eq!(handle.theme(), Some("dark"));
    }

    #[test]
    fn unknown_theme_keeps_previous_content() {
        let themes = ThemeSet::with_presets();
        let mut handle = StyleSheetHandle::new();
        handle.apply(&themes, "light").unwrap();
        assert!(handle.apply(&themes, "sepia").is_err());
        assert_eq!(handle.theme(), Some("light"));
        assert_eq!(handle.generation(), 1);
    }

    #[test]
    fn content_only_while_attached() {
        let themes = ThemeSet::with_presets();
        let mut handle = StyleSheetHandle::new();
        handle.apply(&themes, "light").unwrap();
        assert_eq!(handle.content(), None);
        handle.acquire();
        handle.acquire();
        assert!(handle.content().is_some_and(|css| css.contains(".cbar-banner")));
        handle.release();
        assert_eq!(handle.content(), None);
        assert!(!handle.css().is_empty());
    }
}
