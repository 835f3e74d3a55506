use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::board::{JobBoard, Selection};
use crate::config::ThemeMode;
use crate::job::JobPosting;
use crate::logo::{LogoCache, LogoResult};

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    List,
    Detail,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Default)]
pub struct Model {
    /// Listing, search text, page and selection
    pub board: JobBoard,
    /// True until the listing fetch settles
    pub loading: bool,
    /// Endpoint or file the listing comes from
    pub source_label: String,
    /// Highlighted row within the current page
    pub cursor: usize,
    pub focus: Focus,
    /// Whether keystrokes edit the search text
    pub search_active: bool,
    /// First visible line of the detail body
    pub detail_scroll: u16,
    pub help_visible: bool,
    pub theme: ThemeMode,
    pub should_quit: bool,
    /// Terminal size (columns, rows)
    pub terminal_size: (u16, u16),
    /// Page requested on the command line, applied once the listing arrives
    pub initial_page: Option<usize>,
    /// Company logos keyed by URL
    pub logos: LogoCache,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("jobs", &self.board.jobs().len())
            .field("search_text", &self.board.search_text())
            .field("current_page", &self.board.current_page())
            .field("selected_id", &self.board.selected_id())
            .field("loading", &self.loading)
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model waiting for the listing from `source_label`.
    pub fn new(source_label: impl Into<String>, terminal_size: (u16, u16)) -> Self {
        Self {
            loading: true,
            source_label: source_label.into(),
            terminal_size,
            ..Self::default()
        }
    }

    /// Set the logo cache.
    #[must_use]
    pub fn with_logos(mut self, logos: LogoCache) -> Self {
        self.logos = logos;
        self
    }

    /// The posting under the keyboard cursor.
    pub fn cursor_job(&self) -> Option<&JobPosting> {
        self.board.visible_jobs().get(self.cursor).copied()
    }

    /// The posting shown in the detail pane, if it resolves.
    pub fn selected_job(&self) -> Option<&JobPosting> {
        match self.board.selection() {
            Selection::Found(job) => Some(job),
            Selection::None | Selection::NotFound(_) => None,
        }
    }

    /// Keep the cursor on an existing row of the current page.
    pub(super) fn clamp_cursor(&mut self) {
        let rows = self.board.visible_jobs().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Rows the detail pane scrolls by on PageUp/PageDown.
    pub fn detail_page_rows(&self) -> u16 {
        self.terminal_size.1.saturating_sub(12).max(1)
    }

    /// Logo URLs the current screen wants drawn.
    pub fn wanted_logo_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = Vec::new();
        let visible = self.board.visible_jobs();
        let selected = self.selected_job();
        for job in visible.into_iter().chain(selected) {
            if let Some(url) = job.logo_url()
                && !urls.iter().any(|u| u == url)
            {
                urls.push(url.to_string());
            }
        }
        urls
    }

    /// Store finished logo downloads.
    pub fn apply_logo_results(&mut self, results: Vec<LogoResult>) {
        for (url, result) in results {
            match result {
                Ok(image) => {
                    tracing::debug!(url = %url, "logo ready");
                    self.logos.insert_image(&url, image);
                }
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "logo unavailable");
                    self.logos.mark_failed(&url);
                }
            }
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}
