//! Isolated installation of independent page enhancements.
//!
//! Each enhancement reports its own failure; one broken piece never stops the
//! rest from installing.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnhancementError {
    #[error("required element `{0}` is missing")]
    MissingElement(String),
    #[error("browser capability `{0}` is unavailable")]
    Unsupported(&'static str),
    #[error("script error: {0}")]
    Script(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A self-contained piece of page behaviour.
pub trait Enhancement {
    fn name(&self) -> &'static str;

    /// Attach the enhancement to the page.
    ///
    /// # Errors
    ///
    /// Returns an error when the enhancement cannot be installed; callers log
    /// it and move on.
    fn install(&mut self) -> Result<(), EnhancementError>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

impl InstallReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Install every enhancement in order, containing individual failures.
pub fn install_all<I>(enhancements: I) -> InstallReport
where
    I: IntoIterator<Item = Box<dyn Enhancement>>,
{
    let mut report = InstallReport::default();
    for mut enhancement in enhancements {
        let name = enhancement.name();
        match enhancement.install() {
            Ok(()) => {
                log::debug!("installed enhancement `{name}`");
                report.installed.push(name);
            }
            Err(err) => {
                log::error!("enhancement `{name}` failed to install: {err}");
                report.failed.push((name, err.to_string()));
            }
        }
    }
    report
}
