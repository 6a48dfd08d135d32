//! Status banner shown after a submission

use crate::state::StatusBanner;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Banner height in rows (borders + one line of text)
pub const BANNER_HEIGHT: u16 = 3;

/// Background color for a banner
pub fn banner_color(banner: &StatusBanner) -> Color {
    if banner.is_success() {
        Color::Green
    } else {
        Color::Red
    }
}

/// Rectangle of the banner in the bottom-right corner of `area`, shifted
/// down while it slides in
pub fn banner_area(area: Rect, banner: &StatusBanner, now: Instant) -> Rect {
    let width = (banner.message.chars().count() as u16 + 6).min(area.width);
    let rest_y = area.bottom().saturating_sub(BANNER_HEIGHT);
    let y = rest_y + banner.slide_offset(now, BANNER_HEIGHT);
    Rect {
        x: area.right().saturating_sub(width + 1),
        y,
        width,
        height: BANNER_HEIGHT,
    }
    .intersection(area)
}

/// Render the banner over whatever is below it
pub fn render_status_banner(frame: &mut Frame, area: Rect, banner: &StatusBanner, now: Instant) {
    let banner_rect = banner_area(area, banner, now);
    if banner_rect.is_empty() {
        return;
    }

    let color = banner_color(banner);
    let content = Line::from(vec![
        Span::styled(banner.icon(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::raw(banner.message.as_str()),
    ]);

    frame.render_widget(Clear, banner_rect);
    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::White).bg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color).bg(color)),
        );
    frame.render_widget(paragraph, banner_rect);
}
