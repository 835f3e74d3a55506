use crate::app::Model;
use crate::app::model::Focus;
use crate::job::JobPosting;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The listing fetch settled (empty on failure)
    JobsLoaded(Vec<JobPosting>),

    // Search
    /// Start editing the search text
    StartSearch,
    /// Replace the search text
    SearchInput(String),
    /// Leave search input, keeping the text
    SubmitSearch,
    /// Leave search input and clear the text
    ClearSearch,

    // List
    /// Move the cursor up one row
    CursorUp,
    /// Move the cursor down one row
    CursorDown,
    /// Select the job under the cursor
    SelectCursor,
    /// Select the job on a row of the current page
    SelectRow(usize),
    PrevPage,
    NextPage,
    /// Jump to a 1-based page number
    GoToPage(usize),

    // Detail
    /// Clear the selection
    Back,
    /// Scroll the detail pane up by n lines
    ScrollDetailUp(u16),
    /// Scroll the detail pane down by n lines
    ScrollDetailDown(u16),
    /// Open the selected job's apply link in the browser
    ApplyNow,
    /// Copy the selected job's apply link
    CopyApplyLink,

    /// Switch focus between list and detail pane
    SwitchFocus,
    /// Switch between the light and dark theme
    ToggleTheme,
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Pure state transition.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::JobsLoaded(jobs) => {
            model.loading = false;
            if jobs.is_empty() {
                model.board.load_failed();
            } else {
                model.board.load(jobs);
            }
            if let Some(page) = model.initial_page.take() {
                model.board.go_to_page(page);
            }
            model.cursor = 0;
            model.detail_scroll = 0;
        }

        Message::StartSearch => {
            model.search_active = true;
            model.focus = Focus::List;
        }
        Message::SearchInput(text) => {
            if text != model.board.search_text() {
                model.board.set_search_text(text);
                model.cursor = 0;
            }
        }
        Message::SubmitSearch => {
            model.search_active = false;
        }
        Message::ClearSearch => {
            model.search_active = false;
            if !model.board.search_text().is_empty() {
                model.board.set_search_text(String::new());
                model.cursor = 0;
            }
        }

        Message::CursorUp => {
            model.cursor = model.cursor.saturating_sub(1);
        }
        Message::CursorDown => {
            model.cursor = model.cursor.saturating_add(1);
            model.clamp_cursor();
        }
        Message::SelectCursor => {
            let row = model.cursor;
            select_row(&mut model, row);
        }
        Message::SelectRow(row) => {
            select_row(&mut model, row);
        }
        Message::PrevPage => {
            if model.board.previous_page() {
                model.cursor = 0;
            }
        }
        Message::NextPage => {
            if model.board.next_page() {
                model.cursor = 0;
            }
        }
        Message::GoToPage(page) => {
            let before = model.board.current_page();
            if model.board.go_to_page(page) && before != page {
                model.cursor = 0;
            }
        }

        Message::Back => {
            model.board.clear_selection();
            model.focus = Focus::List;
            model.detail_scroll = 0;
        }
        Message::ScrollDetailUp(n) => {
            model.detail_scroll = model.detail_scroll.saturating_sub(n);
        }
        Message::ScrollDetailDown(n) => {
            model.detail_scroll = model.detail_scroll.saturating_add(n);
        }
        // Handled in side effects.
        Message::ApplyNow | Message::CopyApplyLink => {}

        Message::SwitchFocus => {
            model.focus = match model.focus {
                Focus::List => Focus::Detail,
                Focus::Detail => Focus::List,
            };
        }
        Message::ToggleTheme => {
            model.theme = model.theme.toggled();
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
        }
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}

fn select_row(model: &mut Model, row: usize) {
    let Some(id) = model
        .board
        .visible_jobs()
        .get(row)
        .map(|job| job.id.clone())
    else {
        return;
    };
    model.board.select(id);
    model.cursor = row;
    model.detail_scroll = 0;
}
