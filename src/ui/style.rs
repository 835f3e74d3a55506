//! Colors and text styles.
//!
//! Uses ANSI colors that adapt to the terminal's color palette. The light
//! theme paints its own background so it reads the same on any terminal.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Color theme for the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background and default text
    pub base: Style,
    pub h1: Style,
    pub h2: Style,
    pub h3: Style,
    /// Border of the focused pane
    pub focused_border: Style,
    pub dim: Style,
    /// Section labels ("Technologies:", help headings)
    pub section: Style,
    pub company: Style,
    pub card_title: Style,
    pub card_title_selected: Style,
    /// Background of the card under the keyboard cursor
    pub cursor: Style,
    pub payment: Style,
    pub payment_badge: Style,
    pub location_badge: Style,
    /// Gray block drawn where a logo is missing or still loading
    pub logo_placeholder: Style,
    pub link: Style,
    pub status_bar: Style,
    pub search_bar: Style,
    pub popup: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Style::default(),
            h1: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            focused_border: Style::default().fg(Color::Yellow),
            dim: Style::default().fg(Color::Indexed(245)),
            section: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            company: Style::default().fg(Color::Indexed(250)),
            card_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            card_title_selected: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            cursor: Style::default().bg(Color::Indexed(236)),
            payment: Style::default().fg(Color::Green),
            payment_badge: Style::default().fg(Color::Black).bg(Color::Green),
            location_badge: Style::default().fg(Color::Black).bg(Color::Cyan),
            logo_placeholder: Style::default().bg(Color::Indexed(240)),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            search_bar: Style::default().bg(Color::Blue).fg(Color::White),
            popup: Style::default().bg(Color::Black).fg(Color::White),
        }
    }
}

impl Theme {
    /// Create a theme optimized for dark terminals.
    pub fn dark() -> Self {
        Self::default()
    }

    /// Create a theme with a light background.
    pub fn light() -> Self {
        Self {
            base: Style::default()
                .bg(Color::Indexed(255))
                .fg(Color::Indexed(235)),
            h1: Style::default()
                .fg(Color::Indexed(31)) // Darker cyan
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Indexed(28)) // Darker green
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Indexed(136)) // Darker yellow/olive
                .add_modifier(Modifier::BOLD),
            focused_border: Style::default().fg(Color::Indexed(25)),
            dim: Style::default().fg(Color::Indexed(243)),
            section: Style::default()
                .fg(Color::Indexed(136))
                .add_modifier(Modifier::BOLD),
            company: Style::default().fg(Color::Indexed(240)),
            card_title: Style::default()
                .fg(Color::Indexed(25))
                .add_modifier(Modifier::BOLD),
            card_title_selected: Style::default()
                .fg(Color::Indexed(124))
                .add_modifier(Modifier::BOLD),
            cursor: Style::default().bg(Color::Indexed(252)),
            payment: Style::default().fg(Color::Indexed(28)),
            payment_badge: Style::default()
                .fg(Color::Indexed(255))
                .bg(Color::Indexed(28)),
            location_badge: Style::default()
                .fg(Color::Indexed(255))
                .bg(Color::Indexed(31)),
            logo_placeholder: Style::default().bg(Color::Indexed(250)),
            link: Style::default()
                .fg(Color::Indexed(25))
                .add_modifier(Modifier::UNDERLINED),
            status_bar: Style::default()
                .bg(Color::Indexed(252))
                .fg(Color::Indexed(235)),
            search_bar: Style::default()
                .bg(Color::Indexed(25))
                .fg(Color::Indexed(255)),
            popup: Style::default()
                .bg(Color::Indexed(254))
                .fg(Color::Indexed(235)),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Style for a description heading of the given level.
    pub const fn heading(&self, level: u8) -> Style {
        match level {
            1 => self.h1,
            2 => self.h2,
            _ => self.h3,
        }
    }

    /// Pane border, highlighted when the pane has focus.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            Style::default()
        }
    }

    /// Job title on a list card; the selected job stands out.
    pub const fn card_title_style(&self, selected: bool) -> Style {
        if selected {
            self.card_title_selected
        } else {
            self.card_title
        }
    }
}
