use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{Focus, Model};
use crate::board::Selection;
use crate::description::{self, Block as DescriptionBlock};
use crate::job::{JobPosting, NO_TECHNOLOGIES_LABEL};

use super::{
    CARD_HEIGHT, CARD_LOGO_COLS, CARD_STRIDE, DETAIL_LOGO_COLS, DETAIL_LOGO_ROWS, PageTarget,
    bordered_inner, list_scroll_offset, logos, overlays, pagination_items, screen_layout, status,
    visible_cards,
};
use super::style::Theme;

const LOADING_TEXT: &str = "Loading...";
const EMPTY_LIST_TEXT: &str = "No jobs found";
const NO_SELECTION_TEXT: &str = "Select a job to view details";
const NOT_FOUND_TEXT: &str = "Job not found";

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = screen_layout(area);
    let theme = Theme::for_mode(model.theme);
    frame.render_widget(Block::default().style(theme.base), area);

    render_search_box(model, frame, layout.search, &theme);
    render_job_list(model, frame, layout.list, &theme);
    render_pagination(model, frame, layout.pagination, &theme);
    render_detail(model, frame, layout.detail, &theme);

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, layout.status);
    } else if model.search_active {
        status::render_search_bar(model, frame, layout.status, &theme);
    } else {
        status::render_status_bar(model, frame, layout.status, &theme);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area, &theme);
    }
}

fn render_search_box(model: &Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Search by title ")
        .borders(Borders::ALL)
        .border_style(theme.border(model.search_active));
    let text = model.board.search_text();
    let line = if text.is_empty() && !model.search_active {
        Line::styled("Press / to search", theme.dim)
    } else {
        Line::raw(text)
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if model.search_active {
        let inner = bordered_inner(area);
        let text_width = u16::try_from(unicode_width::UnicodeWidthStr::width(text))
            .unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(text_width)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_job_list(model: &mut Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = if model.loading {
        " Jobs ".to_string()
    } else {
        format!(" Jobs ({}) ", model.board.filtered_len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border(
            model.focus == Focus::List && !model.search_active,
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.loading {
        render_centered(frame, inner, LOADING_TEXT, theme);
        return;
    }

    let visible = model.board.visible_jobs();
    if visible.is_empty() {
        render_centered(frame, inner, EMPTY_LIST_TEXT, theme);
        return;
    }

    let capacity = visible_cards(inner.height);
    let offset = list_scroll_offset(model.cursor, capacity);
    let selected_id = model.board.selected_id();
    let mut y = inner.y;
    for (row, job) in visible.iter().enumerate().skip(offset).take(capacity) {
        if y.saturating_add(CARD_HEIGHT) > inner.bottom() {
            break;
        }
        let card = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        let is_cursor = row == model.cursor && model.focus == Focus::List;
        let is_selected = selected_id == Some(job.id.as_str());
        if is_cursor {
            frame.render_widget(Block::default().style(theme.cursor), card);
        }

        let logo_area = Rect::new(card.x, card.y, CARD_LOGO_COLS.min(card.width), CARD_HEIGHT);
        logos::render_logo(&mut model.logos, frame, logo_area, job.logo_url(), theme);

        let text_x = card.x.saturating_add(CARD_LOGO_COLS + 1);
        let text_area = Rect::new(
            text_x,
            card.y,
            card.right().saturating_sub(text_x),
            CARD_HEIGHT,
        );
        frame.render_widget(Paragraph::new(card_lines(job, is_selected, theme)), text_area);

        y = y.saturating_add(CARD_STRIDE);
    }
}

fn card_lines<'a>(job: &'a JobPosting, selected: bool, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::styled(job.company.as_str(), theme.company),
        Line::styled(job.title.as_str(), theme.card_title_style(selected)),
        Line::from(vec![
            Span::styled(format!(" {} ", job.payment_label()), theme.payment_badge),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", job.location_label()),
                theme.location_badge,
            ),
        ]),
    ]
}

fn render_pagination(model: &Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    if model.loading {
        return;
    }
    let current = model.board.current_page();
    let total = model.board.page_count();
    let mut spans = Vec::new();
    for (label, target) in pagination_items(total) {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let item_style = match target {
            PageTarget::Prev if current <= 1 => theme.dim,
            PageTarget::Next if current >= total => theme.dim,
            PageTarget::Page(page) if page == current => {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            }
            _ => Style::default(),
        };
        spans.push(Span::styled(label, item_style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_detail(model: &mut Model, frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(theme.border(model.focus == Focus::Detail));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.loading {
        render_centered(frame, inner, LOADING_TEXT, theme);
        return;
    }

    let job = match model.board.selection() {
        Selection::None => {
            render_centered(frame, inner, NO_SELECTION_TEXT, theme);
            return;
        }
        Selection::NotFound(id) => {
            let lines = vec![
                back_hint(theme),
                Line::raw(""),
                Line::styled(NOT_FOUND_TEXT, Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(format!("No posting with id {id}"), theme.dim),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
            return;
        }
        Selection::Found(job) => job,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(DETAIL_LOGO_ROWS),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
    frame.render_widget(Paragraph::new(back_hint(theme)), rows[0]);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(DETAIL_LOGO_COLS),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(rows[1]);
    logos::render_logo(&mut model.logos, frame, header[0], job.logo_url(), theme);
    let header_lines = vec![
        Line::styled(
            job.company.as_str(),
            theme.company.add_modifier(Modifier::BOLD),
        ),
        Line::raw(job.location_label()),
        Line::styled(job.payment_label(), theme.payment),
    ];
    frame.render_widget(Paragraph::new(header_lines), header[2]);

    let paragraph = Paragraph::new(detail_body_lines(job, theme)).wrap(Wrap { trim: false });
    // Scroll is measured in wrapped rows; stop once the last row is on screen.
    let wrapped_rows = u16::try_from(paragraph.line_count(rows[3].width)).unwrap_or(u16::MAX);
    let max_scroll = wrapped_rows.saturating_sub(rows[3].height);
    model.detail_scroll = model.detail_scroll.min(max_scroll);
    frame.render_widget(paragraph.scroll((model.detail_scroll, 0)), rows[3]);
}

fn back_hint(theme: &Theme) -> Line<'static> {
    Line::styled("\u{2190} Back (Esc)", theme.dim)
}

/// Everything below the detail header, in display order.
pub(super) fn detail_body_lines(job: &JobPosting, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(job.title.clone(), theme.heading(1)),
        Line::raw(""),
    ];
    lines.extend(description_lines(&job.description, theme));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Technologies:", theme.section));
    if job.technologies.is_empty() {
        lines.push(Line::styled(
            format!("  {NO_TECHNOLOGIES_LABEL}"),
            theme.dim,
        ));
    } else {
        for tech in &job.technologies {
            lines.push(Line::raw(format!("  \u{2022} {tech}")));
        }
    }
    lines.push(Line::raw(""));

    for (label, value) in [
        ("Type", fact_value(&job.job_type)),
        ("Skill level", fact_value(&job.skill_level)),
        ("Main technology", fact_value(&job.main_technology)),
        ("Applications", job.applications.to_string()),
        ("Views", job.views.to_string()),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), theme.dim),
            Span::raw(value),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Apply Now: ", theme.section),
        Span::styled(job.apply_url.clone(), theme.link),
    ]));
    lines.push(Line::styled("a: open in browser  y: copy link", theme.dim));
    lines
}

fn fact_value(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Styled terminal lines for a description.
pub(super) fn description_lines(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    description::parse_blocks(text)
        .iter()
        .map(|block| match block {
            DescriptionBlock::Heading { level, text } => {
                Line::from(inline_spans(text, theme.heading(*level)))
            }
            DescriptionBlock::ListItem(text) => {
                let mut spans = vec![Span::raw("  \u{2022} ")];
                spans.extend(inline_spans(text, Style::default()));
                Line::from(spans)
            }
            DescriptionBlock::Paragraph(text) => Line::from(inline_spans(text, Style::default())),
            DescriptionBlock::Blank => Line::raw(""),
        })
        .collect()
}

fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    description::bold_spans(text)
        .into_iter()
        .map(|span| {
            let span_style = if span.bold {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Span::styled(span.text.to_string(), span_style)
        })
        .collect()
}

fn render_centered(frame: &mut Frame, area: Rect, text: &'static str, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(text, theme.dim)).alignment(Alignment::Center),
        row,
    );
}
