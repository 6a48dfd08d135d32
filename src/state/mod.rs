//! Application state module

mod contact_form;
mod entry;
mod form_state;
mod status;

pub use contact_form::*;
pub use entry::*;
#[cfg(test)]
pub use form_state::FormState;
pub use status::*;
