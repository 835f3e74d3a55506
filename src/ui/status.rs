use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style::Theme;

pub fn render_search_bar(model: &Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = format!(
        "/{}  [{} matches]  Enter: keep  Esc: clear",
        model.board.search_text(),
        model.board.filtered_len()
    );
    let bar = Paragraph::new(text).style(theme.search_bar);
    frame.render_widget(bar, area);
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    let status = if model.loading {
        format!(" {}  fetching...  ?:help", model.source_label)
    } else {
        let search = model.board.search_text();
        let search_indicator = if search.is_empty() {
            String::new()
        } else {
            format!("  [search: {search}]")
        };
        format!(
            " {}  Page {}/{}  {}/{} jobs{}  ?:help",
            model.source_label,
            model.board.current_page(),
            model.board.page_count(),
            model.board.filtered_len(),
            model.board.jobs().len(),
            search_indicator
        )
    };

    let status_bar = Paragraph::new(status).style(theme.status_bar);
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
