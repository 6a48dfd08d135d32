//! UI module for rendering the TUI

pub mod components;
mod contact_form;
pub mod layout;

use crate::app::App;
use layout::FormLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Smallest terminal the form is drawn in
pub const MIN_WIDTH: u16 = 32;
pub const MIN_HEIGHT: u16 = 16;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let now = Instant::now();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_too_small(frame, area);
        return;
    }

    let layout = FormLayout::compute(area, app.form.entries().len());
    contact_form::draw(frame, &layout, &app.form, now);

    if let Some(banner) = &app.form.status {
        let above_hint = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        components::render_status_banner(frame, above_hint, banner, now);
    }

    layout::draw_hint_bar(frame, layout.hint, app);
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let text = format!("Terminal too small (need {MIN_WIDTH}x{MIN_HEIGHT})");
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::MockEntrySubmitter;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn test_app() -> App {
        App::new(Arc::new(MockEntrySubmitter::new()))
    }

    #[test]
    fn test_renders_title_placeholders_and_buttons() {
        let text = render(&test_app(), 80, 30);
        assert!(text.contains("Contact Information"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("+ Add Field"));
        assert!(text.contains("Submit"));
        assert!(!text.contains("[x]"));
    }

    #[test]
    fn test_remove_controls_appear_with_two_entries() {
        let mut app = test_app();
        app.form = app.form.add_entry();
        let text = render(&app, 80, 30);
        assert_eq!(text.matches("[x]").count(), 2);
        assert!(text.contains("Contact 2"));
    }

    #[test]
    fn test_submit_label_while_submitting() {
        let mut app = test_app();
        app.form.submitting = true;
        let text = render(&app, 80, 30);
        assert!(text.contains("Submitting..."));
    }

    #[test]
    fn test_only_three_entries_visible() {
        let mut app = test_app();
        for _ in 0..4 {
            app.form = app.form.add_entry();
        }
        let text = render(&app, 80, 30);
        assert!(text.contains("Contact 5"));
        assert!(!text.contains("Contact 1 "));
    }

    #[test]
    fn test_tiny_terminal_shows_notice() {
        let text = render(&test_app(), 20, 8);
        assert!(text.contains("Terminal"));
    }
}
