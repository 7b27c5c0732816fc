//! Behavioural scenarios for the theme selector.
//!
//! Each scenario builds a fresh selector over in-memory collaborators and
//! checks one observable behaviour end to end.

use anyhow::{Result, ensure};
use vitrine_core::testing::{MemoryStore, RecordingDocument};
use vitrine_core::{KeyChord, Selection, SiteConfig, Theme, ThemeSelector, Trigger};

pub type Selector = ThemeSelector<MemoryStore, RecordingDocument>;

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub run: fn() -> Result<()>,
}

fn selector(stored: Option<&str>) -> Selector {
    let store = MemoryStore::default();
    if let Some(value) = stored {
        store.insert(&SiteConfig::default().storage_key, value);
    }
    ThemeSelector::new(store, RecordingDocument::default(), SiteConfig::default())
}

fn stored(sel: &Selector) -> Option<String> {
    sel.store().get(&sel.config().storage_key)
}

fn stored_preference_wins() -> Result<()> {
    for theme in Theme::ALL {
        let mut sel = selector(Some(theme.as_str()));
        let active = sel.initialize(Some(true));
        ensure!(active == theme, "stored `{theme}` produced `{active}`");
        ensure!(
            sel.document().attribute() == Some(theme),
            "attribute not set to `{theme}`"
        );
    }
    Ok(())
}

fn fresh_session_follows_system() -> Result<()> {
    let mut sel = selector(None);
    sel.initialize(Some(true));
    ensure!(sel.active() == Theme::Dark, "expected dark, got {}", sel.active());
    ensure!(
        sel.document().label().as_deref() == Some("Dark"),
        "indicator label is {:?}",
        sel.document().label()
    );
    ensure!(stored(&sel).is_none(), "initialize must not persist");

    let mut sel = selector(None);
    sel.initialize(None);
    ensure!(sel.active() == Theme::Light, "missing signal must default to light");
    Ok(())
}

fn invalid_stored_value_ignored() -> Result<()> {
    let mut sel = selector(Some("sepia"));
    sel.initialize(Some(true));
    ensure!(sel.active() == Theme::Dark, "`sepia` was not treated as absent");
    ensure!(sel.stored_preference().is_none(), "`sepia` reported as a preference");
    Ok(())
}

fn invalid_selection_is_noop() -> Result<()> {
    let mut sel = selector(Some("light"));
    sel.initialize(Some(false));
    let writes = sel.document().writes();
    ensure!(sel.select("sepia") == Selection::Ignored, "`sepia` was applied");
    ensure!(sel.active() == Theme::Light, "active theme changed");
    ensure!(sel.document().writes() == writes, "document was touched");
    ensure!(stored(&sel).as_deref() == Some("light"), "stored value changed");
    Ok(())
}

fn select_persists_choice() -> Result<()> {
    let mut sel = selector(None);
    sel.initialize(Some(false));
    sel.select("dark");
    ensure!(stored(&sel).as_deref() == Some("dark"), "dark not persisted");
    ensure!(sel.document().attribute() == Some(Theme::Dark), "attribute not dark");
    ensure!(
        sel.document().announcements() == vec!["Theme changed to Dark".to_string()],
        "announcement missing"
    );
    Ok(())
}

fn cycle_is_total() -> Result<()> {
    let mut sel = selector(None);
    sel.initialize(None);
    let expected = [Theme::Dark, Theme::HighContrast, Theme::Light];
    for want in expected {
        let got = sel.cycle().applied();
        ensure!(got == Some(want), "cycle produced {got:?}, expected {want}");
    }
    Ok(())
}

fn shortcut_cycles() -> Result<()> {
    let mut sel = selector(None);
    sel.initialize(None);
    let Some(trigger) = Trigger::from_key(&KeyChord::new("KeyT").ctrl().shift()) else {
        anyhow::bail!("Ctrl+Shift+T not recognised");
    };
    sel.dispatch(&trigger);
    ensure!(sel.active() == Theme::Dark, "shortcut did not cycle");
    ensure!(
        Trigger::from_key(&KeyChord::new("KeyT").ctrl()).is_none(),
        "shortcut fired without Shift"
    );
    Ok(())
}

fn system_change_respects_preference() -> Result<()> {
    let mut sel = selector(None);
    sel.initialize(Some(false));
    sel.system_preference_changed(true);
    ensure!(sel.active() == Theme::Dark, "system change not followed");
    ensure!(stored(&sel).is_none(), "system change was persisted");

    sel.select("high-contrast");
    let outcome = sel.system_preference_changed(false);
    ensure!(outcome == Selection::Ignored, "explicit choice overridden");
    ensure!(sel.active() == Theme::HighContrast, "active theme drifted");
    Ok(())
}

fn broken_collaborators_degrade() -> Result<()> {
    let mut sel = ThemeSelector::new(
        MemoryStore::failing(),
        RecordingDocument::detached(),
        SiteConfig::default(),
    );
    let active = sel.initialize(Some(true));
    ensure!(active == Theme::Dark, "unreadable store must fall back to system");
    ensure!(
        sel.select("light") == Selection::Applied(Theme::Light),
        "selection failed with broken store"
    );
    Ok(())
}

pub const CATALOG: &[Scenario] = &[
    Scenario {
        key: "stored-preference",
        description: "Valid stored theme wins over the system signal",
        run: stored_preference_wins,
    },
    Scenario {
        key: "fresh-session",
        description: "No stored theme follows the system signal, default light",
        run: fresh_session_follows_system,
    },
    Scenario {
        key: "invalid-stored",
        description: "Unrecognised stored theme is treated as absent",
        run: invalid_stored_value_ignored,
    },
    Scenario {
        key: "invalid-select",
        description: "Selecting an unknown theme changes nothing",
        run: invalid_selection_is_noop,
    },
    Scenario {
        key: "select-persists",
        description: "Explicit selection persists, paints and announces",
        run: select_persists_choice,
    },
    Scenario {
        key: "cycle",
        description: "Cycling visits light, dark, high-contrast in order",
        run: cycle_is_total,
    },
    Scenario {
        key: "shortcut",
        description: "Ctrl/Cmd+Shift+T cycles the theme",
        run: shortcut_cycles,
    },
    Scenario {
        key: "system-change",
        description: "OS scheme changes apply only without an explicit choice",
        run: system_change_respects_preference,
    },
    Scenario {
        key: "degraded",
        description: "Broken storage and missing picker never break selection",
        run: broken_collaborators_degrade,
    },
];

pub fn find(key: &str) -> Option<&'static Scenario> {
    let key = key.to_lowercase();
    CATALOG.iter().find(|s| s.key == key)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description))
}
