//! UI state of the contact form and its transitions
//!
//! `ContactForm` owns everything the form shows: the entries, keyboard
//! focus, the scroll anchor of the entry list, the submitting guard and the
//! latest status. Transitions take `&self` and return the next state, so the
//! whole interaction can be exercised without a terminal.

use super::entry::{Entry, EntryField};
use super::form_state::FormState;
use super::status::{StatusBanner, Underline};
use std::fmt::Display;

/// Message shown next to the first empty input when a submit is blocked
pub const REQUIRED_MESSAGE: &str = "Please fill out this field.";

/// Keyboard focus target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Nothing focused (after Esc)
    #[default]
    None,
    /// A name or email input
    Field {
        index: usize,
        field: EntryField,
    },
    /// The remove control of an entry
    Remove(usize),
    AddButton,
    SubmitButton,
}

impl Focus {
    /// Entry index this focus target belongs to
    pub fn entry_index(&self) -> Option<usize> {
        match self {
            Focus::Field { index, .. } | Focus::Remove(index) => Some(*index),
            _ => None,
        }
    }
}

/// Reason a submit request did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("entry {} is missing its {field}", .index + 1)]
    Invalid {
        index: usize,
        field: EntryField,
    },
}

/// Complete state of the contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub form: FormState,
    pub focus: Focus,
    /// Entry the list viewport keeps visible
    pub scroll_anchor: Option<usize>,
    /// True only while the one outbound request is in flight
    pub submitting: bool,
    pub status: Option<StatusBanner>,
    /// Input that blocked the last submit attempt
    pub validation: Option<(usize, EntryField)>,
    pub underline: Option<Underline>,
}

impl ContactForm {
    /// Fresh form with one empty entry and its name input focused
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            focus: Focus::None,
            scroll_anchor: Some(0),
            submitting: false,
            status: None,
            validation: None,
            underline: None,
        }
        .with_focus(Focus::Field {
            index: 0,
            field: EntryField::Name,
        })
    }

    pub fn entries(&self) -> &[Entry] {
        self.form.entries()
    }

    /// Entry whose input currently has focus
    pub fn active_entry(&self) -> Option<usize> {
        match self.focus {
            Focus::Field { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Whether the remove controls are shown
    pub fn show_remove(&self) -> bool {
        self.form.can_remove()
    }

    /// Whether the submit control accepts activation
    pub fn submit_enabled(&self) -> bool {
        !self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Submitting..."
        } else {
            "Submit"
        }
    }

    /// Append an empty entry, focus it and scroll it into view
    pub fn add_entry(&self) -> Self {
        let mut next = self.clone();
        next.form = self.form.add_entry();
        let index = next.form.len() - 1;
        tracing::debug!(entries = next.form.len(), "entry added");
        next.with_focus(Focus::Field {
            index,
            field: EntryField::Name,
        })
    }

    /// Remove the entry at `index`. A no-op while only one entry remains.
    pub fn remove_entry(&self, index: usize) -> Self {
        let Some(form) = self.form.remove_entry(index) else {
            return self.clone();
        };
        tracing::debug!(index, entries = form.len(), "entry removed");
        let mut next = self.clone();
        next.scroll_anchor = Some(form.len() - 1);
        next.form = form;
        next.validation = None;
        next.focus = Focus::AddButton;
        next.underline = None;
        next
    }

    /// Replace one attribute of the entry at `index`
    pub fn update_entry(&self, index: usize, field: EntryField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.form = self.form.update_entry(index, field, value);
        if next.validation == Some((index, field)) {
            next.validation = None;
        }
        next
    }

    /// Replace an attribute addressed by its input name (`name` or `email`)
    #[cfg(test)]
    pub fn update_entry_by_name(
        &self,
        index: usize,
        input_name: &str,
        value: impl Into<String>,
    ) -> Result<Self, super::entry::UnknownField> {
        let field = input_name.parse::<EntryField>()?;
        Ok(self.update_entry(index, field, value))
    }

    /// Focus an input of an entry
    pub fn focus_field(&self, index: usize, field: EntryField) -> Self {
        if index >= self.form.len() {
            return self.clone();
        }
        self.with_focus(Focus::Field { index, field })
    }

    /// Drop focus entirely
    pub fn blur(&self) -> Self {
        self.with_focus(Focus::None)
    }

    /// Focus targets in keyboard order
    pub fn focus_order(&self) -> Vec<Focus> {
        let show_remove = self.show_remove();
        let mut order = Vec::with_capacity(self.form.len() * 3 + 2);
        for index in 0..self.form.len() {
            for field in EntryField::ALL {
                order.push(Focus::Field { index, field });
            }
            if show_remove {
                order.push(Focus::Remove(index));
            }
        }
        order.push(Focus::AddButton);
        order.push(Focus::SubmitButton);
        order
    }

    /// Move focus forward, wrapping around
    pub fn focus_next(&self) -> Self {
        let order = self.focus_order();
        let next = match order.iter().position(|f| *f == self.focus) {
            Some(pos) => order[(pos + 1) % order.len()],
            None => order[0],
        };
        self.with_focus(next)
    }

    /// Move focus backward, wrapping around
    pub fn focus_prev(&self) -> Self {
        let order = self.focus_order();
        let prev = match order.iter().position(|f| *f == self.focus) {
            Some(0) | None => order[order.len() - 1],
            Some(pos) => order[pos - 1],
        };
        self.with_focus(prev)
    }

    /// Type a character into the focused input
    pub fn input_char(&self, c: char) -> Self {
        match self.focus {
            Focus::Field { index, field } => {
                let Some(entry) = self.form.get(index) else {
                    return self.clone();
                };
                let mut value = entry.get(field).to_string();
                value.push(c);
                self.update_entry(index, field, value)
            }
            _ => self.clone(),
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&self) -> Self {
        match self.focus {
            Focus::Field { index, field } => {
                let Some(entry) = self.form.get(index) else {
                    return self.clone();
                };
                let mut value = entry.get(field).to_string();
                value.pop();
                self.update_entry(index, field, value)
            }
            _ => self.clone(),
        }
    }

    /// Start a submission.
    ///
    /// Returns the next state together with the payload to send. When the
    /// submit is blocked the payload is replaced by the reason and nothing
    /// must be sent.
    pub fn begin_submit(&self) -> (Self, Result<Vec<Entry>, SubmitBlocked>) {
        if self.submitting {
            return (self.clone(), Err(SubmitBlocked::InFlight));
        }
        if let Some((index, field)) = self.form.first_missing() {
            let mut next = self.with_focus(Focus::Field { index, field });
            next.validation = Some((index, field));
            return (next, Err(SubmitBlocked::Invalid { index, field }));
        }
        let mut next = self.clone();
        next.submitting = true;
        next.status = None;
        next.validation = None;
        (next, Ok(self.form.entries().to_vec()))
    }

    /// Apply the outcome of the in-flight submission.
    ///
    /// The submitting flag is released in every branch.
    pub fn finish_submit<E: Display>(&self, outcome: &Result<(), E>) -> Self {
        let mut next = self.clone();
        next.submitting = false;
        match outcome {
            Ok(()) => {
                tracing::info!(entries = self.form.len(), "submission accepted");
                next.form = FormState::new();
                next.status = Some(StatusBanner::success());
                next.scroll_anchor = Some(0);
                next.with_focus(Focus::Field {
                    index: 0,
                    field: EntryField::Name,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                next.status = Some(StatusBanner::failure());
                next
            }
        }
    }

    /// Move focus, keeping the underline and scroll anchor in step with it
    fn with_focus(&self, focus: Focus) -> Self {
        let mut next = self.clone();
        let previous = self.active_entry();
        next.focus = focus;
        if let Some(index) = focus.entry_index() {
            next.scroll_anchor = Some(index);
        }
        let current = next.active_entry();
        if current != previous {
            next.underline = current.map(Underline::new);
        }
        if next.validation.is_some() && focus != self.focus {
            next.validation = None;
        }
        next
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
