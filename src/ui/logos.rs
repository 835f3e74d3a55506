use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui_image::protocol::StatefulProtocolType;
use ratatui_image::{Resize, StatefulImage};

use crate::logo::LogoCache;

use super::style::Theme;

/// Draw the logo for `url` into `area`, or a placeholder block.
pub fn render_logo(
    logos: &mut LogoCache,
    frame: &mut Frame,
    area: Rect,
    url: Option<&str>,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    if let Some(protocol) = url.and_then(|url| logos.protocol_mut(url)) {
        let resize = if matches!(protocol.protocol_type(), StatefulProtocolType::Halfblocks(_)) {
            // Nearest-neighbor aliases badly at half-cell resolution.
            Resize::Scale(Some(image::imageops::FilterType::CatmullRom))
        } else {
            Resize::Scale(None)
        };
        frame.render_stateful_widget(StatefulImage::default().resize(resize), area, protocol);
        return;
    }
    frame.render_widget(Block::default().style(theme.logo_placeholder), area);
}
