//! The theme selector: owns the active theme and keeps the document, the
//! stored preference and the picker UI in agreement.

use crate::config::SiteConfig;
use crate::indicator::{IndicatorUpdate, announcement_text};
use crate::theme::{Theme, resolve_active};
use crate::trigger::Trigger;
use crate::{PreferenceStore, ThemeDocument};

/// Outcome of a request to change the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Applied(Theme),
    Ignored,
}

impl Selection {
    #[must_use]
    pub const fn applied(self) -> Option<Theme> {
        match self {
            Self::Applied(theme) => Some(theme),
            Self::Ignored => None,
        }
    }
}

pub struct ThemeSelector<S, D>
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    store: S,
    document: D,
    config: SiteConfig,
    active: Theme,
    system_dark: Option<bool>,
}

impl<S, D> ThemeSelector<S, D>
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    /// Create a selector; nothing touches the page until [`Self::initialize`].
    pub const fn new(store: S, document: D, config: SiteConfig) -> Self {
        Self {
            store,
            document,
            config,
            active: Theme::Light,
            system_dark: None,
        }
    }

    /// Derive the starting theme and paint it.
    ///
    /// `system_dark` is the OS color-scheme signal, `None` when the browser
    /// cannot report one.
    pub fn initialize(&mut self, system_dark: Option<bool>) -> Theme {
        self.system_dark = system_dark;
        let stored = self.read_raw();
        if let Some(raw) = stored.as_deref()
            && Theme::parse(raw).is_none()
        {
            log::info!("ignoring unrecognized stored theme `{raw}`");
        }
        let theme = resolve_active(stored.as_deref(), system_dark);
        self.active = theme;
        self.paint(theme);
        theme
    }

    /// Apply the theme named by `id`; unknown ids change nothing.
    pub fn select(&mut self, id: &str) -> Selection {
        match id.parse::<Theme>() {
            Ok(theme) => self.select_theme(theme),
            Err(err) => {
                log::debug!("select ignored: {err}");
                Selection::Ignored
            }
        }
    }

    /// Apply `theme` as the user's explicit choice.
    pub fn select_theme(&mut self, theme: Theme) -> Selection {
        self.apply(theme, true);
        Selection::Applied(theme)
    }

    /// Advance to the next theme in the fixed order.
    pub fn cycle(&mut self) -> Selection {
        self.select_theme(self.active.next())
    }

    /// React to an OS color-scheme change.
    ///
    /// Only takes effect while no explicit preference is stored. The derived
    /// theme is persisted only when `persist_system_changes` is set.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> Selection {
        self.system_dark = Some(prefers_dark);
        if let Some(theme) = self.stored_preference() {
            log::debug!("system scheme change ignored, `{theme}` chosen explicitly");
            return Selection::Ignored;
        }
        let theme = Theme::from_system(prefers_dark);
        self.apply(theme, self.config.persist_system_changes);
        Selection::Applied(theme)
    }

    /// Forget the explicit choice and follow the system signal again.
    pub fn clear_preference(&mut self) -> Theme {
        if let Err(err) = self.store.remove(&self.config.storage_key) {
            log::warn!("failed to clear stored theme: {err}");
        }
        let theme = Theme::from_system(self.system_dark.unwrap_or(false));
        self.active = theme;
        self.paint(theme);
        theme
    }

    pub fn dispatch(&mut self, trigger: &Trigger) -> Selection {
        match trigger {
            Trigger::Select(id) => self.select(id),
            Trigger::Cycle => self.cycle(),
        }
    }

    #[must_use]
    pub const fn active(&self) -> Theme {
        self.active
    }

    /// The valid explicit preference, if one is stored.
    #[must_use]
    pub fn stored_preference(&self) -> Option<Theme> {
        self.read_raw().as_deref().and_then(Theme::parse)
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn document(&self) -> &D {
        &self.document
    }

    fn read_raw(&self) -> Option<String> {
        match self.store.read(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme preference unreadable, treating as absent: {err}");
                None
            }
        }
    }

    fn apply(&mut self, theme: Theme, persist: bool) {
        self.active = theme;
        self.paint(theme);
        if persist && let Err(err) = self.store.write(&self.config.storage_key, theme.as_str()) {
            log::warn!("failed to persist theme `{theme}`: {err}");
        }
        if self.config.announce
            && let Err(err) = self.document.announce(&announcement_text(theme))
        {
            log::warn!("theme announcement failed: {err}");
        }
        log::debug!("active theme is now `{theme}`");
    }

    fn paint(&self, theme: Theme) {
        if let Err(err) = self.document.begin_transition() {
            log::debug!("theme transition skipped: {err}");
        }
        if let Err(err) = self.document.set_theme(theme) {
            log::warn!("failed to set theme attribute: {err}");
        }
        if let Err(err) = self
            .document
            .update_indicator(&IndicatorUpdate::for_theme(theme))
        {
            log::debug!("theme indicator not updated: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStore, RecordingDocument};

    fn selector_with(stored: Option<&str>) -> ThemeSelector<MemoryStore, RecordingDocument> {
        let store = MemoryStore::default();
        if let Some(value) = stored {
            store.insert("preferred-theme", value);
        }
        ThemeSelector::new(store, RecordingDocument::default(), SiteConfig::default())
    }

    #[test]
    fn initialize_uses_valid_stored_value() {
        for theme in Theme::ALL {
            let mut selector = selector_with(Some(theme.as_str()));
            assert_eq!(selector.initialize(Some(true)), theme);
            assert_eq!(selector.document().attribute(), Some(theme));
        }
    }

    #[test]
    fn initialize_fresh_session_follows_dark_system() {
        let mut selector = selector_with(None);
        assert_eq!(selector.initialize(Some(true)), Theme::Dark);
        let doc = selector.document();
        assert_eq!(doc.attribute(), Some(Theme::Dark));
        assert_eq!(doc.label().as_deref(), Some("Dark"));
        assert_eq!(doc.icon().as_deref(), Some("bi-moon"));
        assert!(doc.announcements().is_empty());
        assert_eq!(selector.store().get("preferred-theme"), None);
    }

    #[test]
    fn initialize_ignores_invalid_stored_value() {
        let mut selector = selector_with(Some("sepia"));
        assert_eq!(selector.initialize(Some(true)), Theme::Dark);
        let mut selector = selector_with(Some("sepia"));
        assert_eq!(selector.initialize(None), Theme::Light);
        assert_eq!(selector.stored_preference(), None);
    }

    #[test]
    fn select_dark_persists_and_paints() {
        let mut selector = selector_with(None);
        selector.initialize(Some(false));
        assert_eq!(selector.select("dark"), Selection::Applied(Theme::Dark));
        assert_eq!(selector.store().get("preferred-theme").as_deref(), Some("dark"));
        assert_eq!(selector.document().attribute(), Some(Theme::Dark));
        assert_eq!(selector.document().active_options(), vec!["dark"]);
        assert_eq!(
            selector.document().announcements(),
            vec!["Theme changed to Dark".to_string()]
        );
    }

    #[test]
    fn select_unknown_id_changes_nothing() {
        let mut selector = selector_with(Some("high-contrast"));
        selector.initialize(None);
        let writes = selector.document().writes();
        assert_eq!(selector.select("sepia"), Selection::Ignored);
        assert_eq!(selector.select(""), Selection::Ignored);
        assert_eq!(selector.active(), Theme::HighContrast);
        assert_eq!(selector.document().attribute(), Some(Theme::HighContrast));
        assert_eq!(selector.document().writes(), writes);
        assert_eq!(
            selector.store().get("preferred-theme").as_deref(),
            Some("high-contrast")
        );
    }

    #[test]
    fn cycle_three_times_returns_to_light() {
        let mut selector = selector_with(None);
        selector.initialize(None);
        let seen: Vec<_> = (0..3).filter_map(|_| selector.cycle().applied()).collect();
        assert_eq!(seen, vec![Theme::Dark, Theme::HighContrast, Theme::Light]);
        assert_eq!(selector.active(), Theme::Light);
    }

    #[test]
    fn system_change_applies_only_without_preference() {
        let mut selector = selector_with(None);
        selector.initialize(Some(false));
        assert_eq!(
            selector.system_preference_changed(true),
            Selection::Applied(Theme::Dark)
        );
        assert_eq!(selector.active(), Theme::Dark);
        assert_eq!(selector.store().get("preferred-theme"), None);

        selector.select("high-contrast");
        assert_eq!(selector.system_preference_changed(false), Selection::Ignored);
        assert_eq!(selector.active(), Theme::HighContrast);
    }

    #[test]
    fn system_change_can_persist_when_configured() {
        let config = SiteConfig {
            persist_system_changes: true,
            ..SiteConfig::default()
        };
        let mut selector =
            ThemeSelector::new(MemoryStore::default(), RecordingDocument::default(), config);
        selector.initialize(Some(false));
        selector.system_preference_changed(true);
        assert_eq!(selector.store().get("preferred-theme").as_deref(), Some("dark"));
        assert_eq!(selector.system_preference_changed(false), Selection::Ignored);
    }

    #[test]
    fn clear_preference_returns_to_system_theme() {
        let mut selector = selector_with(Some("high-contrast"));
        selector.initialize(Some(true));
        assert_eq!(selector.clear_preference(), Theme::Dark);
        assert_eq!(selector.stored_preference(), None);
        assert_eq!(selector.document().attribute(), Some(Theme::Dark));
    }

    #[test]
    fn failing_collaborators_never_break_selection() {
        let store = MemoryStore::failing();
        let doc = RecordingDocument::detached();
        let mut selector = ThemeSelector::new(store, doc, SiteConfig::default());
        assert_eq!(selector.initialize(Some(true)), Theme::Dark);
        assert_eq!(selector.select("light"), Selection::Applied(Theme::Light));
        assert_eq!(selector.active(), Theme::Light);
        assert_eq!(selector.document().label(), None);
    }

    #[test]
    fn dispatch_routes_triggers() {
        let mut selector = selector_with(None);
        selector.initialize(None);
        assert_eq!(selector.dispatch(&Trigger::Cycle), Selection::Applied(Theme::Dark));
        assert_eq!(
            selector.dispatch(&Trigger::Select("light".to_string())),
            Selection::Applied(Theme::Light)
        );
        assert_eq!(
            selector.dispatch(&Trigger::Select("blue".to_string())),
            Selection::Ignored
        );
    }

    #[test]
    fn announcements_can_be_disabled() {
        let config = SiteConfig {
            announce: false,
            ..SiteConfig::default()
        };
        let mut selector =
            ThemeSelector::new(MemoryStore::default(), RecordingDocument::default(), config);
        selector.initialize(None);
        selector.cycle();
        assert!(selector.document().announcements().is_empty());
    }
}
