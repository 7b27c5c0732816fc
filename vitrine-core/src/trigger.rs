//! Mapping from raw user input to selector actions.
//!
//! The browser side installs one delegated listener per event type and turns
//! each event into a [`Trigger`] here, so the mapping can be exercised with
//! plain values instead of synthetic DOM events.

/// Keyboard state relevant to the theme shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    /// Physical key code, e.g. `KeyT`.
    pub code: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub const fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub const fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl/Cmd + Shift + T.
    #[must_use]
    pub fn is_cycle_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && self.shift && self.code == "KeyT"
    }

    /// Escape, which closes an open dropdown menu.
    #[must_use]
    pub fn is_dismiss(&self) -> bool {
        self.code == "Escape"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Click on an option tagged with a theme id; the id is validated later.
    Select(String),
    /// Keyboard shortcut advancing to the next theme.
    Cycle,
}

impl Trigger {
    #[must_use]
    pub fn from_key(chord: &KeyChord) -> Option<Self> {
        chord.is_cycle_shortcut().then_some(Self::Cycle)
    }

    /// Build a trigger from the theme tag of a clicked option, if it had one.
    ///
    /// The tag is passed through verbatim; `" dark "` is not a theme id.
    #[must_use]
    pub fn from_option(tag: Option<&str>) -> Option<Self> {
        tag.map(|id| Self::Select(id.to_string()))
    }
}
