use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::model::Focus;
use crate::app::{App, Message, Model};
use crate::board::Selection;
use crate::ui::PageTarget;

const WHEEL_SCROLL_LINES: u16 = 3;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'q'))
        {
            return Some(Message::Quit);
        }

        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if model.search_active {
            let current = model.board.search_text();
            return match key.code {
                KeyCode::Esc => Some(Message::ClearSearch),
                KeyCode::Enter | KeyCode::Down | KeyCode::Tab => Some(Message::SubmitSearch),
                KeyCode::Backspace => {
                    let mut next = current.to_string();
                    next.pop();
                    Some(Message::SearchInput(next))
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    let mut next = current.to_string();
                    next.push(c);
                    Some(Message::SearchInput(next))
                }
                _ => None,
            };
        }

        let page_rows = model.detail_page_rows();

        // Keys shared by both panes
        match key.code {
            KeyCode::Char('q') => return Some(Message::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::Char('/') => return Some(Message::StartSearch),
            KeyCode::Tab | KeyCode::BackTab => return Some(Message::SwitchFocus),
            KeyCode::Esc | KeyCode::Backspace => return Some(Message::Back),
            KeyCode::Char('a') => return Some(Message::ApplyNow),
            KeyCode::Char('y') => return Some(Message::CopyApplyLink),
            KeyCode::Char('t') => return Some(Message::ToggleTheme),
            KeyCode::PageDown => return Some(Message::ScrollDetailDown(page_rows)),
            KeyCode::PageUp => return Some(Message::ScrollDetailUp(page_rows)),
            _ => {}
        }

        match model.focus {
            Focus::Detail => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDetailDown(1)),
                KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollDetailUp(1)),
                KeyCode::Char(' ') => Some(Message::ScrollDetailDown(page_rows)),
                KeyCode::Char('b') => Some(Message::ScrollDetailUp(page_rows)),
                _ => None,
            },
            Focus::List => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Message::CursorDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Message::CursorUp),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SelectCursor),
                KeyCode::Char('h') | KeyCode::Left => Some(Message::PrevPage),
                KeyCode::Char('l') | KeyCode::Right => Some(Message::NextPage),
                KeyCode::Char(c @ '1'..='9') => c
                    .to_digit(10)
                    .and_then(|d| usize::try_from(d).ok())
                    .map(Message::GoToPage),
                _ => None,
            },
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Down(_)).then_some(Message::HideHelp);
        }

        let area = Rect::new(0, 0, model.terminal_size.0, model.terminal_size.1);
        let layout = crate::ui::screen_layout(area);
        let (col, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if point_in_rect(col, row, layout.list) {
                    return crate::ui::list_row_at(model, layout.list, row)
                        .map(Message::SelectRow);
                }
                if point_in_rect(col, row, layout.pagination) {
                    let total = model.board.page_count();
                    return crate::ui::pagination_target_at(layout.pagination, total, col).map(
                        |target| match target {
                            PageTarget::Prev => Message::PrevPage,
                            PageTarget::Next => Message::NextPage,
                            PageTarget::Page(page) => Message::GoToPage(page),
                        },
                    );
                }
                if point_in_rect(col, row, layout.search) {
                    return Some(Message::StartSearch);
                }
                if point_in_rect(col, row, layout.detail)
                    && row == crate::ui::detail_back_row(layout.detail)
                    && !matches!(model.board.selection(), Selection::None)
                {
                    return Some(Message::Back);
                }
                None
            }
            MouseEventKind::ScrollDown => {
                if point_in_rect(col, row, layout.detail) {
                    Some(Message::ScrollDetailDown(WHEEL_SCROLL_LINES))
                } else if point_in_rect(col, row, layout.list) {
                    Some(Message::CursorDown)
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp => {
                if point_in_rect(col, row, layout.detail) {
                    Some(Message::ScrollDetailUp(WHEEL_SCROLL_LINES))
                } else if point_in_rect(col, row, layout.list) {
                    Some(Message::CursorUp)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

const fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
