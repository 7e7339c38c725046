//! Centralized constants for picker_ui
//!
//! All magic numbers and repeated constants are defined here for consistency
//! and easy maintenance.

use std::time::Duration;

// =============================================================================
// Typography
// =============================================================================

/// Font size of menu items and the field value
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Font size of helper/info text below a field
pub const HELPER_FONT_SIZE: f32 = 14.0;

/// Approximate character width as a ratio of font size
/// Used for text measurement approximation
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Line height for a font size.
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

/// Approximate rendered width of a string.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * CHAR_WIDTH_FACTOR
}

// =============================================================================
// Field
// =============================================================================

/// Height of the read-only input box
pub const FIELD_HEIGHT: f32 = 36.0;

/// Corner radius of the input box and popup
pub const FIELD_RADIUS: f32 = 8.0;

/// Left text padding inside the input box
pub const FIELD_PADDING_LEFT: f32 = 14.0;

/// Right padding inside the input box, leaves room for the chevron
pub const FIELD_PADDING_RIGHT: f32 = 36.0;

/// Gap between the label line and the input box
pub const LABEL_GAP: f32 = 6.0;

/// Gap between the input box and the helper text
pub const HELPER_GAP: f32 = 6.0;

/// Chevron icon size
pub const CHEVRON_SIZE: f32 = 20.0;

/// Distance of the chevron from the right edge of the field
pub const CHEVRON_INSET: f32 = 10.0;

/// Width used when the host gives unbounded space
pub const DEFAULT_FIELD_WIDTH: f32 = 320.0;

// =============================================================================
// Menu
// =============================================================================

/// Height of one menu row
pub const MENU_ITEM_HEIGHT: f32 = 40.0;

/// Horizontal text padding inside a menu row
pub const MENU_ITEM_PADDING_X: f32 = 16.0;

/// Vertical padding above the first and below the last row
pub const MENU_LIST_PADDING: f32 = 8.0;

/// Popup never grows past this height; longer lists scroll
pub const POPUP_MAX_HEIGHT: f32 = 420.0;

// =============================================================================
// Scrollbar
// =============================================================================

/// Width of the overlay thumb
pub const SCROLLBAR_WIDTH_COMPACT: f32 = 6.0;

/// Distance of the thumb from the popup's right edge
pub const SCROLLBAR_INSET: f32 = 2.0;

/// Minimum scrollbar thumb size
pub const SCROLLBAR_MIN_THUMB: f32 = 24.0;

/// Content must exceed the container by more than this before a thumb is shown
pub const SCROLL_OVERFLOW_TOLERANCE: f32 = 1.0;


// =============================================================================
// Timing
// =============================================================================

/// Idle time after which the typeahead buffer resets
pub const TYPEAHEAD_RESET_DELAY: Duration = Duration::from_millis(700);

/// Idle time after which the scroll thumb fades out
pub const THUMB_HIDE_DELAY: Duration = Duration::from_millis(2000);
