use crate::theme::Theme;

/// Selected state of a single theme option in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionState {
    pub id: &'static str,
    pub active: bool,
}

/// Every UI mutation needed to show `theme` as the current choice.
///
/// Adapters apply this verbatim and skip any part whose element is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorUpdate {
    pub theme: Theme,
    pub label: &'static str,
    pub icon: &'static str,
    pub stale_icons: Vec<&'static str>,
    pub options: Vec<OptionState>,
}

impl IndicatorUpdate {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            theme,
            label: theme.label(),
            icon: theme.icon(),
            stale_icons: theme.stale_icons().collect(),
            options: Theme::ALL
                .into_iter()
                .map(|option| OptionState {
                    id: option.as_str(),
                    active: option == theme,
                })
                .collect(),
        }
    }

    /// Whether an option tagged with `id` should carry the active class.
    ///
    /// Unknown tags are never active.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.options
            .iter()
            .any(|option| option.active && option.id == id)
    }
}

/// Text read out by screen readers after a selection.
#[must_use]
pub fn announcement_text(theme: Theme) -> String {
    format!("Theme changed to {}", theme.label())
}
