//! Process-wide UI state (theme, detail sidebar) with change subscription.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CliError::InvalidArguments(format!(
                "Unknown theme '{}': expected light or dark",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_open: bool,
}

/// Shared handle to the UI state; clones observe and update the same state.
#[derive(Debug, Clone)]
pub struct UiStore {
    tx: Arc<watch::Sender<UiState>>,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl UiStore {
    pub fn new(theme: Theme) -> Self {
        let (tx, _rx) = watch::channel(UiState {
            theme,
            sidebar_open: false,
        });
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> UiState {
        self.tx.borrow().clone()
    }

    pub fn theme(&self) -> Theme {
        self.tx.borrow().theme
    }

    /// Receiver notified on every change
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.tx.send_modify(|state| state.theme = theme);
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&self) -> Theme {
        self.tx.send_modify(|state| state.theme = state.theme.toggled());
        let theme = self.theme();
        log::debug!("theme switched to {}", theme);
        theme
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.tx.send_if_modified(|state| {
            let changed = state.sidebar_open != open;
            state.sidebar_open = open;
            changed
        });
    }
}
