// SPDX-License-Identifier: Apache-2.0
//! Widget lifecycle and consent collection.
//!
//! [`ConsentWidget`] tracks which surfaces are visible, which theme is
//! active, and the consent chosen for each category. It never touches a
//! document: the host reads the state and the style-sheet text and renders
//! them itself.
//!
//! # Invariants
//!
//! 1. Unswitchable categories are always consented.
//! 2. The style container is attached exactly while the banner or the
//!    preferences dialog is visible.
//! 3. A failed `register_theme` or `apply_theme` leaves the active theme and
//!    its style text untouched.

use std::fmt;

use consentbar_i18n::{TextDirection, TextResources, direction_for_culture};
use consentbar_theme::{PartialTheme, Theme, ThemeSet};
use tracing::{debug, info, warn};

use crate::category::{ConsentMap, CookieCategory};
use crate::error::{Result, WidgetError};
use crate::options::WidgetOptions;
use crate::style_handle::StyleSheetHandle;

type ConsentCallback = Box<dyn FnMut(&ConsentMap)>;

pub struct ConsentWidget {
    culture: String,
    direction: TextDirection,
    text: TextResources,
    categories: Vec<CookieCategory>,
    initial: ConsentMap,
    consent: ConsentMap,
    themes: ThemeSet,
    active_theme: String,
    style: StyleSheetHandle,
    banner_visible: bool,
    preferences_visible: bool,
    on_consent: Option<ConsentCallback>,
}

impl fmt::Debug for ConsentWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsentWidget")
            .field("culture", &self.culture)
            .field("direction", &self.direction)
            .field("consent", &self.consent)
            .field("active_theme", &self.active_theme)
            .field("banner_visible", &self.banner_visible)
            .field("preferences_visible", &self.preferences_visible)
            .finish_non_exhaustive()
    }
}

impl ConsentWidget {
    /// Build a widget; every theme and category is validated here.
    pub fn new(options: WidgetOptions) -> Result<Self> {
        let extra_keys = options.extra_keys();
        let WidgetOptions {
            culture,
            categories,
            preferences,
            text,
            themes,
            initial_theme,
            ..
        } = options;

        let mut consent = ConsentMap::new();
        for category in &categories {
            let value = category.is_unswitchable
                || preferences.get(&category.id).copied().unwrap_or(false);
            if consent.insert(category.id.clone(), value).is_some() {
                return Err(WidgetError::DuplicateCategory {
                    id: category.id.clone(),
                });
            }
        }
        if let Some(id) = preferences.keys().find(|id| !consent.contains_key(*id)) {
            return Err(WidgetError::UnknownCategory { id: id.clone() });
        }

        let themes = ThemeSet::from_partials(themes, extra_keys)?;
        let mut style = StyleSheetHandle::new();
        style.apply(&themes, &initial_theme)?;

        let direction = direction_for_culture(&culture);
        info!(
            culture = %culture,
            direction = %direction,
            categories = categories.len(),
            theme = %initial_theme,
            "consent widget created"
        );

        Ok(Self {
            culture,
            direction,
            text: text.merge_with_defaults(),
            categories,
            initial: consent.clone(),
            consent,
            themes,
            active_theme: initial_theme,
            style,
            banner_visible: false,
            preferences_visible: false,
            on_consent: None,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(WidgetOptions::from_json_str(json)?)
    }

    /// Install the callback that receives saved consent.
    pub fn on_consent_changed(&mut self, callback: impl FnMut(&ConsentMap) + 'static) {
        self.on_consent = Some(Box::new(callback));
    }

    // ── Themes ──────────────────────────────────────────────────────────

    /// Add or replace a named theme. Re-renders styles if it is the active one.
    pub fn register_theme(&mut self, name: &str, partial: &PartialTheme) -> Result<()> {
        self.themes.register(name, partial)?;
        if name == self.active_theme {
            self.style.apply(&self.themes, name)?;
        }
        Ok(())
    }

    /// Make `name` the active theme and regenerate the style text.
    ///
    /// Unknown names fail with `ThemeError::UnknownTheme`.
    pub fn apply_theme(&mut self, name: &str) -> Result<()> {
        if let Err(err) = self.style.apply(&self.themes, name) {
            warn!(theme = name, active = %self.active_theme, "cannot apply theme");
            return Err(err);
        }
        self.active_theme = name.to_string();
        Ok(())
    }

    #[must_use]
    pub fn active_theme(&self) -> &str {
        &self.active_theme
    }

    /// The resolved theme currently applied.
    pub fn theme(&self) -> Result<&Theme> {
        Ok(self.themes.require(&self.active_theme)?)
    }

    #[must_use]
    pub fn themes(&self) -> &ThemeSet {
        &self.themes
    }

    #[must_use]
    pub fn style_sheet(&self) -> &StyleSheetHandle {
        &self.style
    }

    // ── Visibility ──────────────────────────────────────────────────────

    pub fn show_banner(&mut self) {
        self.banner_visible = true;
        self.style.acquire();
        debug!("banner shown");
    }

    pub fn hide_banner(&mut self) {
        self.banner_visible = false;
        self.release_if_hidden();
        debug!("banner hidden");
    }

    pub fn show_preferences(&mut self) {
        self.preferences_visible = true;
        self.style.acquire();
        debug!("preferences shown");
    }

    pub fn hide_preferences(&mut self) {
        self.preferences_visible = false;
        self.release_if_hidden();
        debug!("preferences hidden");
    }

    fn release_if_hidden(&mut self) {
        if !self.banner_visible && !self.preferences_visible {
            self.style.release();
        }
    }

    #[must_use]
    pub fn is_banner_visible(&self) -> bool {
        self.banner_visible
    }

    #[must_use]
    pub fn is_preferences_visible(&self) -> bool {
        self.preferences_visible
    }

    // ── Consent ─────────────────────────────────────────────────────────

    fn category(&self, id: &str) -> Result<&CookieCategory> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| WidgetError::UnknownCategory { id: id.to_string() })
    }

    /// Record a choice from the preferences dialog. Not reported until saved.
    pub fn set_consent(&mut self, id: &str, allowed: bool) -> Result<()> {
        let category = self.category(id)?;
        if category.is_unswitchable && !allowed {
            return Err(WidgetError::LockedCategory { id: id.to_string() });
        }
        self.consent.insert(id.to_string(), allowed);
        Ok(())
    }

    /// Banner "accept": consent to everything, report, and close.
    pub fn accept_all(&mut self) {
        for value in self.consent.values_mut() {
            *value = true;
        }
        self.commit();
    }

    /// Banner "reject": decline every switchable category, report, and close.
    pub fn reject_all(&mut self) {
        for category in &self.categories {
            self.consent
                .insert(category.id.clone(), category.is_unswitchable);
        }
        self.commit();
    }

    /// Restore the choices the widget was constructed with.
    pub fn reset(&mut self) {
        self.consent = self.initial.clone();
    }

    /// Dialog "save": report the current choices and close.
    pub fn save(&mut self) {
        self.commit();
    }

    fn commit(&mut self) {
        debug!(consent = ?self.consent, "consent committed");
        if let Some(callback) = self.on_consent.as_mut() {
            callback(&self.consent);
        }
        self.hide_preferences();
        self.hide_banner();
    }

    #[must_use]
    pub fn consent(&self) -> &ConsentMap {
        &self.consent
    }

    #[must_use]
    pub fn categories(&self) -> &[CookieCategory] {
        &self.categories
    }

    // ── Localization ────────────────────────────────────────────────────

    #[must_use]
    pub fn culture(&self) -> &str {
        &self.culture
    }

    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    #[must_use]
    pub fn text(&self) -> &TextResources {
        &self.text
    }
}
