//! Theme identifiers and their static display metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Visual mode applied to the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// Display label and icon class for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeMeta {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const LIGHT: ThemeMeta = ThemeMeta {
    id: "light",
    label: "Light",
    icon: "bi-sun",
};

const DARK: ThemeMeta = ThemeMeta {
    id: "dark",
    label: "Dark",
    icon: "bi-moon",
};

const HIGH_CONTRAST: ThemeMeta = ThemeMeta {
    id: "high-contrast",
    label: "High Contrast",
    icon: "bi-circle-half",
};

impl Theme {
    /// Every theme in cycling order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::HighContrast];

    const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
            Self::HighContrast => 2,
        }
    }

    #[must_use]
    pub const fn meta(self) -> &'static ThemeMeta {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
            Self::HighContrast => &HIGH_CONTRAST,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.meta().id
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.meta().label
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        self.meta().icon
    }

    /// Next theme in the fixed order, wrapping from the last back to `Light`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Theme implied by the OS color-scheme signal.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Lenient parse used for stored or user-provided ids.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Icon classes belonging to every theme other than this one.
    pub fn stale_icons(self) -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .filter(move |theme| *theme != self)
            .map(Self::icon)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme id `{0}`")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

impl From<Theme> for String {
    fn from(value: Theme) -> Self {
        value.as_str().to_string()
    }
}

/// Derive the active theme from the stored preference and the system signal.
///
/// A stored id wins when it names a known theme. Anything else, including a
/// corrupt value, falls through to the system signal, and a missing signal
/// means `Light`.
#[must_use]
pub fn resolve_active(stored: Option<&str>, system_dark: Option<bool>) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or_else(|| Theme::from_system(system_dark.unwrap_or(false)))
}
