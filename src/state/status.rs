//! Submission status banner and small UI animations

use std::time::{Duration, Instant};

/// Marker that distinguishes a success message from a failure message
pub const SUCCESS_MARKER: &str = "successfully";

/// Status shown after a submission succeeded
pub const SUCCESS_MESSAGE: &str = "Data submitted successfully!";

/// Status shown after a submission failed for any reason
pub const FAILURE_MESSAGE: &str = "Failed to submit data. Please try again.";

/// Outcome of the latest submission, as shown to the user
#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub message: String,
    /// When the banner appeared
    pub shown_at: Instant,
}

impl StatusBanner {
    /// Slide-in duration
    const SLIDE_DURATION: Duration = Duration::from_millis(300);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn success() -> Self {
        Self::new(SUCCESS_MESSAGE)
    }

    pub fn failure() -> Self {
        Self::new(FAILURE_MESSAGE)
    }

    /// Whether the message reports a successful submission
    pub fn is_success(&self) -> bool {
        self.message.contains(SUCCESS_MARKER)
    }

    pub fn icon(&self) -> &'static str {
        if self.is_success() {
            "✔"
        } else {
            "✖"
        }
    }

    /// Rows the banner is still shifted below its resting position
    pub fn slide_offset(&self, now: Instant, distance: u16) -> u16 {
        let remaining = 1.0 - eased_progress(self.shown_at, now, Self::SLIDE_DURATION);
        (remaining * distance as f32).round() as u16
    }
}

/// Underline animation under the active entry
#[derive(Debug, Clone, Copy)]
pub struct Underline {
    pub index: usize,
    pub started_at: Instant,
}

impl Underline {
    const GROW_DURATION: Duration = Duration::from_millis(200);

    pub fn new(index: usize) -> Self {
        Self {
            index,
            started_at: Instant::now(),
        }
    }

    /// Visible width of the underline for a row `full_width` columns wide
    pub fn width(&self, now: Instant, full_width: u16) -> u16 {
        let progress = eased_progress(self.started_at, now, Self::GROW_DURATION);
        (progress * full_width as f32).round() as u16
    }

    /// Whether the animation has finished
    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= Self::GROW_DURATION
    }
}

/// Cubic ease-out progress (0.0 to 1.0) of an animation started at `start`
fn eased_progress(start: Instant, now: Instant, duration: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(start);
    let progress = (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0);
    simple_easing::cubic_out(progress)
}
