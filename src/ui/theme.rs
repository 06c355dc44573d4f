//! Color theme constants for the Inbox Copilot UI
//!
//! A minimal dark palette with a single blue accent.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Border color for panels and cards
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - active navigation item, today's date, focused field
pub const COLOR_ACCENT: Color = Color::Rgb(37, 99, 235); // blue #2563EB

/// Header and title text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 41, 59);

// ============================================================================
// Status
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

/// Overdue tasks and high priority
pub const COLOR_WARNING: Color = Color::Rgb(234, 88, 12); // orange #EA580C

pub const COLOR_INFO: Color = Color::Cyan;

// ============================================================================
// Chat
// ============================================================================

/// User turns in the chat transcript
pub const COLOR_USER_TURN: Color = Color::Rgb(96, 165, 250);

/// Assistant turns in the chat transcript
pub const COLOR_ASSISTANT_TURN: Color = Color::Gray;
