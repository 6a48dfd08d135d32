//! Screen geometry for the contact form
//!
//! Drawing and mouse handling both derive their rectangles from
//! `FormLayout`, so a click always lands on what was drawn there.
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │          Contact Information         │  title
//! │                                      │
//! │ ╭──────────────────────────────────╮ │
//! │ │ Contact 1                    [x] │ │  entry label + remove control
//! │ │ 👤 Name                          │ │  name input
//! │ │ ✉  Email                         │ │  email input
//! │ │ ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ │ │  active underline
//! │ ╰──────────────────────────────────╯ │
//! │ validation message                   │
//! │ ╭────────────╮          ╭──────────╮ │
//! │ │ + Add Field│          │  Submit  │ │  footer buttons
//! │ ╰────────────╯          ╰──────────╯ │
//! ╰──────────────────────────────────────╯
//!  hint bar                                 last screen row
//! ```

use crate::app::App;
use crate::platform::{ADD_SHORTCUT, REMOVE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ContactForm, EntryField, Focus};
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the card gets
pub const CARD_MAX_WIDTH: u16 = 56;
/// Rows per entry in the list
pub const ENTRY_HEIGHT: u16 = 4;
/// Entries visible before the list scrolls
pub const MAX_VISIBLE_ENTRIES: usize = 3;
/// Width of the remove control `[x]`
const REMOVE_WIDTH: u16 = 3;
const ADD_BUTTON_WIDTH: u16 = 15;
const SUBMIT_BUTTON_WIDTH: u16 = 17;
/// Rows of the card other than the list block
/// (borders, title, blank, validation line, buttons)
const CARD_CHROME_HEIGHT: u16 = 2 + 2 + 1 + BUTTON_HEIGHT;

/// Rectangles of every part of the form for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub card: Rect,
    pub title: Rect,
    /// Bordered block around the entries
    pub list_block: Rect,
    /// Inside of `list_block`
    pub list: Rect,
    pub message: Rect,
    pub add_button: Rect,
    pub submit_button: Rect,
    pub hint: Rect,
    /// Entries that fit in `list`
    pub visible_entries: usize,
}

impl FormLayout {
    /// Compute the layout for `area` and a form holding `entry_count` entries
    pub fn compute(area: Rect, entry_count: usize) -> Self {
        let hint = Rect {
            x: area.x,
            y: area.bottom().saturating_sub(1),
            width: area.width,
            height: area.height.min(1),
        };
        let usable_height = area.height.saturating_sub(1);

        let fit = usable_height.saturating_sub(CARD_CHROME_HEIGHT + 2) / ENTRY_HEIGHT;
        let visible_entries = entry_count
            .clamp(1, MAX_VISIBLE_ENTRIES)
            .min((fit as usize).max(1));

        let list_block_height = visible_entries as u16 * ENTRY_HEIGHT + 2;
        let card_height = (CARD_CHROME_HEIGHT + list_block_height).min(usable_height);
        let card_width = CARD_MAX_WIDTH.min(area.width);
        let card = Rect {
            x: area.x + (area.width - card_width) / 2,
            y: area.y + (usable_height - card_height) / 2,
            width: card_width,
            height: card_height,
        };

        let inner = Rect {
            x: card.x + 1,
            y: card.y + 1,
            width: card.width.saturating_sub(2),
            height: card.height.saturating_sub(2),
        };
        let title = Rect { height: 1, ..inner };
        let list_block = Rect {
            y: inner.y + 2,
            height: list_block_height,
            ..inner
        };
        let list = Rect {
            x: list_block.x + 1,
            y: list_block.y + 1,
            width: list_block.width.saturating_sub(2),
            height: list_block.height.saturating_sub(2),
        };
        let message = Rect {
            y: list_block.bottom(),
            height: 1,
            ..inner
        };
        let buttons_y = message.bottom();
        let add_button = Rect {
            x: inner.x,
            y: buttons_y,
            width: ADD_BUTTON_WIDTH.min(inner.width),
            height: BUTTON_HEIGHT,
        };
        let submit_width = SUBMIT_BUTTON_WIDTH.min(inner.width);
        let submit_button = Rect {
            x: inner.right().saturating_sub(submit_width),
            y: buttons_y,
            width: submit_width,
            height: BUTTON_HEIGHT,
        };

        Self {
            card,
            title,
            list_block,
            list,
            message,
            add_button,
            submit_button,
            hint,
            visible_entries,
        }
    }

    /// Rectangle of the `slot`-th visible entry
    pub fn entry_area(&self, slot: usize) -> Rect {
        Rect {
            x: self.list.x,
            y: self.list.y + slot as u16 * ENTRY_HEIGHT,
            width: self.list.width,
            height: ENTRY_HEIGHT,
        }
    }

    /// Remove control inside an entry rectangle
    pub fn remove_area(entry: Rect) -> Rect {
        Rect {
            x: entry.right().saturating_sub(REMOVE_WIDTH),
            y: entry.y,
            width: REMOVE_WIDTH.min(entry.width),
            height: 1,
        }
    }

    /// Control under a mouse position
    pub fn hit_test(&self, column: u16, row: u16, form: &ContactForm) -> Option<Focus> {
        let pos = Position::new(column, row);
        if self.add_button.contains(pos) {
            return Some(Focus::AddButton);
        }
        if self.submit_button.contains(pos) {
            return Some(Focus::SubmitButton);
        }
        if !self.list.contains(pos) {
            return None;
        }

        let slot = ((row - self.list.y) / ENTRY_HEIGHT) as usize;
        let index = first_visible(
            form.entries().len(),
            form.scroll_anchor,
            self.visible_entries,
        ) + slot;
        if index >= form.entries().len() {
            return None;
        }
        let entry = self.entry_area(slot);
        match row - entry.y {
            0 if form.show_remove() && Self::remove_area(entry).contains(pos) => {
                Some(Focus::Remove(index))
            }
            1 => Some(Focus::Field {
                index,
                field: EntryField::Name,
            }),
            2 => Some(Focus::Field {
                index,
                field: EntryField::Email,
            }),
            _ => None,
        }
    }
}

/// Index of the first entry shown so that `anchor` stays in view
pub fn first_visible(len: usize, anchor: Option<usize>, visible: usize) -> usize {
    let visible = visible.max(1);
    let anchor = anchor.unwrap_or(0).min(len.saturating_sub(1));
    let start = (anchor + 1).saturating_sub(visible);
    start.min(len.saturating_sub(visible))
}

/// Draw the key hint bar on the last screen row
pub fn draw_hint_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(
            " Tab:next  Enter:activate  {}:add  {}:remove  {}:submit  Esc:blur ",
            ADD_SHORTCUT, REMOVE_SHORTCUT, SUBMIT_SHORTCUT
        ),
        Style::default().fg(Color::Gray),
    )];

    if app.form.submitting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("sending…", Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " ^C:quit ";
    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);

    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_width),
        width: quit_width,
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
