//! Message types for the tunesheet UI.

use iced::keyboard;
use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Raw pointer input, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// Cursor left the window mid-gesture
    Left,
}

/// All possible messages that can be sent in the application
#[derive(Debug, Clone)]
pub enum Message {
    // Frame clock
    Tick(Instant),

    // Input
    Pointer(PointerEvent),
    WindowResized(Size),
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Player actions (keyboard shortcuts and taps)
    TogglePlay,
    Next,
    Previous,
    ExpandPanel,
    CollapsePanel,
    ExpandTabs,
    CollapseTabs,

    // Appearance
    ToggleVariant,
    ConfigSaved(Result<PathBuf, String>),
}
