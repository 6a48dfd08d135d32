//! Contact form card: title, entry list and footer buttons

use super::components::render_button;
use super::layout::{first_visible, FormLayout};
use crate::state::{ContactForm, Entry, EntryField, Focus, REQUIRED_MESSAGE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};
use std::time::Instant;

const ACCENT: Color = Color::Magenta;
const SUBMIT_ACCENT: Color = Color::LightMagenta;

/// Draw the whole card
pub fn draw(frame: &mut Frame, layout: &FormLayout, form: &ContactForm, now: Instant) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(card, layout.card);

    let title = Paragraph::new(Span::styled(
        "Contact Information",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_entry_list(frame, layout, form, now);
    draw_validation(frame, layout.message, form);

    render_button(
        frame,
        layout.add_button,
        "+ Add Field",
        ACCENT,
        form.focus == Focus::AddButton,
        true,
    );
    render_button(
        frame,
        layout.submit_button,
        form.submit_label(),
        SUBMIT_ACCENT,
        form.focus == Focus::SubmitButton,
        form.submit_enabled(),
    );
}

/// Draw the scrollable list of entries
fn draw_entry_list(frame: &mut Frame, layout: &FormLayout, form: &ContactForm, now: Instant) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, layout.list_block);

    let len = form.entries().len();
    let start = first_visible(len, form.scroll_anchor, layout.visible_entries);

    for (slot, (index, entry)) in form
        .entries()
        .iter()
        .enumerate()
        .skip(start)
        .take(layout.visible_entries)
        .enumerate()
    {
        draw_entry(frame, layout.entry_area(slot), index, entry, form, now);
    }

    if len > layout.visible_entries {
        let mut state = ScrollbarState::new(len - layout.visible_entries + 1).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_style(Style::default().fg(Color::Gray))
            .track_style(Style::default().fg(Color::DarkGray));
        frame.render_stateful_widget(scrollbar, layout.list_block, &mut state);
    }
}

/// Draw one entry: label row, two inputs, underline
fn draw_entry(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    entry: &Entry,
    form: &ContactForm,
    now: Instant,
) {
    let label = Paragraph::new(Span::styled(
        format!("Contact {}", index + 1),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(label, Rect { height: 1, ..area });

    if form.show_remove() {
        let focused = form.focus == Focus::Remove(index);
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[x]", style)),
            FormLayout::remove_area(area),
        );
    }

    for (row, field) in EntryField::ALL.into_iter().enumerate() {
        let focused = form.focus == Focus::Field { index, field };
        let invalid = form.validation == Some((index, field));
        let line = input_line(field, entry.get(field), focused, invalid);
        let row_area = Rect {
            y: area.y + 1 + row as u16,
            height: 1,
            ..area
        };
        frame.render_widget(Paragraph::new(line), row_area);
    }

    if form.active_entry() == Some(index) {
        let width = form
            .underline
            .filter(|u| u.index == index)
            .map_or(area.width, |u| u.width(now, area.width));
        let underline = Paragraph::new(Span::styled(
            "━".repeat(width as usize),
            Style::default().fg(ACCENT),
        ));
        frame.render_widget(
            underline,
            Rect {
                y: area.y + 3,
                height: 1,
                ..area
            },
        );
    }
}

/// Render an input as `icon value▌`, or its placeholder while empty
fn input_line(field: EntryField, value: &str, focused: bool, invalid: bool) -> Line<'static> {
    let icon_style = if invalid {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(format!("{} ", field.icon()), icon_style)];
    if value.is_empty() {
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
        }
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let value_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(value.to_string(), value_style));
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
        }
    }
    Line::from(spans)
}

/// Required-field message below the list
fn draw_validation(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let Some((index, field)) = form.validation else {
        return;
    };
    let text = format!(
        "⚠ {} (contact {}, {})",
        REQUIRED_MESSAGE,
        index + 1,
        field.placeholder().to_lowercase()
    );
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::Red))),
        area,
    );
}
