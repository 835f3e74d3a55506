//! The job board view-model.
//!
//! [`JobBoard`] owns the fetched postings, the search text, the current page
//! and the selected job id. The filtered set and the visible page are never
//! stored: they are derived from the postings and the search text on every
//! read, so they cannot drift from their sources.

use crate::job::JobPosting;

/// Number of postings shown per page.
pub const PAGE_SIZE: usize = 10;

/// What the detail pane should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    /// Nothing selected.
    None,
    /// The selected id resolved to a posting.
    Found(&'a JobPosting),
    /// The selected id is not in the fetched set.
    NotFound(&'a str),
}

/// Client-side state for browsing a fetched job listing.
#[derive(Debug, Clone, PartialEq)]
pub struct JobBoard {
    jobs: Vec<JobPosting>,
    search_text: String,
    current_page: usize,
    selected_id: Option<String>,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBoard {
    /// Create an empty board on page one.
    pub const fn new() -> Self {
        Self {
            jobs: Vec::new(),
            search_text: String::new(),
            current_page: 1,
            selected_id: None,
        }
    }

    /// Create a board that has already received `jobs`.
    pub fn with_jobs(jobs: Vec<JobPosting>) -> Self {
        let mut board = Self::new();
        board.load(jobs);
        board
    }

    /// Install the result of a successful fetch.
    ///
    /// Selects the first posting, or clears the selection when the listing is
    /// empty, and returns to page one.
    pub fn load(&mut self, jobs: Vec<JobPosting>) {
        self.selected_id = jobs.first().map(|job| job.id.clone());
        self.jobs = jobs;
        self.current_page = 1;
    }

    /// Record a failed fetch: the listing becomes empty and nothing is selected.
    pub fn load_failed(&mut self) {
        self.jobs.clear();
        self.selected_id = None;
        self.current_page = 1;
    }

    /// All fetched postings in API order.
    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replace the search text.
    ///
    /// A changed search always starts again from page one.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        self.search_text = text;
        self.current_page = 1;
    }

    /// Postings whose title contains the search text, ignoring case.
    pub fn filtered_jobs(&self) -> Vec<&JobPosting> {
        filter_jobs(&self.jobs, &self.search_text)
    }

    pub fn filtered_len(&self) -> usize {
        let needle = self.search_text.to_lowercase();
        self.jobs
            .iter()
            .filter(|job| job.title_matches(&needle))
            .count()
    }

    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages in the filtered set; zero when nothing matches.
    pub fn page_count(&self) -> usize {
        page_count(self.filtered_len(), PAGE_SIZE)
    }

    /// Postings on the current page.
    pub fn visible_jobs(&self) -> Vec<&JobPosting> {
        let filtered = self.filtered_jobs();
        page_slice(&filtered, self.current_page, PAGE_SIZE).to_vec()
    }

    /// Step back one page. Returns false at page one.
    pub const fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.page_count() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Jump to an explicit page number.
    ///
    /// Only pages that exist in the filtered set are accepted.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Select a posting by id. The id does not have to exist.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
    }

    /// The "back" action.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Resolve the selected id against the fetched postings.
    pub fn selection(&self) -> Selection<'_> {
        let Some(id) = self.selected_id.as_deref() else {
            return Selection::None;
        };
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .map_or(Selection::NotFound(id), Selection::Found)
    }

    /// Look up a posting by id.
    pub fn job(&self, id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

/// Postings whose title contains `search`, compared case-insensitively.
///
/// An empty search matches everything. Order is preserved.
pub fn filter_jobs<'a>(jobs: &'a [JobPosting], search: &str) -> Vec<&'a JobPosting> {
    let needle = search.to_lowercase();
    jobs.iter().filter(|job| job.title_matches(&needle)).collect()
}

/// Total pages needed for `len` items.
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The 1-based `page` of `items`, clipped to what exists.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}
