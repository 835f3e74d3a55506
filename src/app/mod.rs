//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::ThemeMode;
use crate::fetch::JobSource;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    source: JobSource,
    initial_search: String,
    initial_page: Option<usize>,
    logos_enabled: bool,
    force_half_cell: bool,
    theme: ThemeMode,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application reading the listing from `source`.
    pub fn new(source: JobSource) -> Self {
        Self {
            source,
            initial_search: String::new(),
            initial_page: None,
            logos_enabled: true,
            force_half_cell: false,
            theme: ThemeMode::Dark,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Pre-fill the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.initial_search = search.into();
        self
    }

    /// Open on this page once the listing arrives.
    pub const fn with_page(mut self, page: Option<usize>) -> Self {
        self.initial_page = page;
        self
    }

    /// Enable or disable company logo rendering.
    pub const fn with_logos_enabled(mut self, enabled: bool) -> Self {
        self.logos_enabled = enabled;
        self
    }

    /// Force half-cell logo rendering, bypassing protocol detection.
    pub const fn with_force_half_cell(mut self, force: bool) -> Self {
        self.force_half_cell = force;
        self
    }

    /// Start with this color theme.
    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}
