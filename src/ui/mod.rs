//! Terminal UI components.
//!
//! The screen is a search box on top, the job list (with its pagination bar)
//! on the left, the detail pane on the right and a one-line status bar at the
//! bottom. Layout helpers live here because mouse input hit-tests against the
//! same rectangles the renderer draws into.

pub mod style;

mod logos;
mod overlays;
mod render;
mod status;

pub use render::render;

use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

pub const SEARCH_HEIGHT: u16 = 3;
pub const LIST_WIDTH_PERCENT: u16 = 45;
pub const DETAIL_WIDTH_PERCENT: u16 = 55;
/// Rows used by one job card in the list.
pub const CARD_HEIGHT: u16 = 3;
/// Rows from the top of one card to the top of the next.
pub const CARD_STRIDE: u16 = CARD_HEIGHT + 1;
/// Width of the logo cell on a list card.
pub const CARD_LOGO_COLS: u16 = 6;
pub const DETAIL_LOGO_COLS: u16 = 10;
pub const DETAIL_LOGO_ROWS: u16 = 4;

const PREV_LABEL: &str = "\u{2039} Prev";
const NEXT_LABEL: &str = "Next \u{203a}";

/// Where each part of the screen is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub search: Rect,
    pub list: Rect,
    pub pagination: Rect,
    pub detail: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let columns = split_main_columns(rows[1]);
    let list_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(columns[0]);
    ScreenLayout {
        search: rows[0],
        list: list_column[0],
        pagination: list_column[1],
        detail: columns[1],
        status: rows[2],
    }
}

pub fn split_main_columns(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_WIDTH_PERCENT),
            Constraint::Percentage(DETAIL_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Area inside a bordered pane.
pub const fn bordered_inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// How many whole cards fit in `height` rows (at least one).
pub fn visible_cards(height: u16) -> usize {
    ((usize::from(height) + 1) / usize::from(CARD_STRIDE)).max(1)
}

/// First card drawn so the cursor row stays on screen.
pub const fn list_scroll_offset(cursor: usize, visible: usize) -> usize {
    (cursor + 1).saturating_sub(visible)
}

/// Row of the current page under screen row `row`, if a card is there.
pub fn list_row_at(model: &Model, list: Rect, row: u16) -> Option<usize> {
    if model.loading {
        return None;
    }
    let inner = bordered_inner(list);
    if row < inner.y || row >= inner.y.saturating_add(inner.height) {
        return None;
    }
    let rel = row - inner.y;
    if rel % CARD_STRIDE >= CARD_HEIGHT {
        return None;
    }
    let offset = list_scroll_offset(model.cursor, visible_cards(inner.height));
    let idx = offset + usize::from(rel / CARD_STRIDE);
    (idx < model.board.visible_jobs().len()).then_some(idx)
}

/// Row of the detail pane holding the "back" hint.
pub const fn detail_back_row(detail: Rect) -> u16 {
    detail.y.saturating_add(1)
}

/// A clickable element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Prev,
    Page(usize),
    Next,
}

/// Labels of the pagination bar, left to right.
///
/// Empty when there is nothing to page through.
pub fn pagination_items(total: usize) -> Vec<(String, PageTarget)> {
    if total == 0 {
        return Vec::new();
    }
    let mut items = Vec::with_capacity(total + 2);
    items.push((PREV_LABEL.to_string(), PageTarget::Prev));
    for page in 1..=total {
        items.push((format!(" {page} "), PageTarget::Page(page)));
    }
    items.push((NEXT_LABEL.to_string(), PageTarget::Next));
    items
}

/// The pagination element under `column`, if any.
pub fn pagination_target_at(area: Rect, total: usize, column: u16) -> Option<PageTarget> {
    let mut x = area.x;
    for (label, target) in pagination_items(total) {
        let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        if column >= x && column < x.saturating_add(width) {
            return Some(target);
        }
        // One column of spacing between items.
        x = x.saturating_add(width).saturating_add(1);
    }
    None
}

#[cfg(test)]
mod tests;
