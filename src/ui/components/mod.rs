//! Reusable UI components

mod banner;
mod button;

pub use banner::render_status_banner;
pub use button::{render_button, BUTTON_HEIGHT};
