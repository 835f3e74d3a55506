use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

use super::style::Theme;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup_width = area.width.saturating_sub(12).clamp(1, 64);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section = theme.section;
    let lines = vec![
        Line::styled("Jobs", section),
        Line::raw("  j/k or Up/Down      Move cursor"),
        Line::raw("  Enter / click       Show job details"),
        Line::raw("  h/l or Left/Right   Previous / next page"),
        Line::raw("  1-9                 Jump to page"),
        Line::raw(""),
        Line::styled("Search", section),
        Line::raw("  /                   Search by title"),
        Line::raw("  Enter               Keep search"),
        Line::raw("  Esc                 Clear search"),
        Line::raw(""),
        Line::styled("Details", section),
        Line::raw("  Tab                 Switch pane"),
        Line::raw("  PageUp/PageDown     Scroll details"),
        Line::raw("  Esc / Backspace     Back"),
        Line::raw("  a                   Apply Now (open link)"),
        Line::raw("  y                   Copy apply link"),
        Line::raw(""),
        Line::styled("Other", section),
        Line::raw("  t                   Light / dark theme"),
        Line::raw("  ? / F1              Toggle help"),
        Line::raw("  q / Ctrl-c          Quit"),
        Line::raw(""),
        Line::styled("Config", section),
        Line::raw(format!("  Global: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
    ];

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(theme.popup);
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Reserve 1 row at bottom for footer hint
    let content_height = inner.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, inner.width, content_height),
    );
    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled("any key closes", theme.dim)),
        footer_area,
    );
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
