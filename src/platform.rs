//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
///
/// CONTROL is accepted on every platform as well.
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Add entry shortcut display
/// - macOS: "Cmd+N"
/// - Linux/Windows: "^N"
#[cfg(target_os = "macos")]
pub const ADD_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const ADD_SHORTCUT: &str = "^N";

/// Remove entry shortcut display
/// - macOS: "Cmd+D"
/// - Linux/Windows: "^D"
#[cfg(target_os = "macos")]
pub const REMOVE_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_SHORTCUT: &str = "^D";

/// Whether the modifiers hold the action modifier (or Ctrl)
pub fn is_action(modifiers: KeyModifiers) -> bool {
    modifiers.contains(ACTION_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
