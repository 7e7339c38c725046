//! Widget configuration structs for customizable appearance and behavior.
//!
//! These configuration structs centralize hardcoded values and make widgets more customizable.

use std::time::Duration;

use crate::constants::{
    CHEVRON_INSET, CHEVRON_SIZE, DEFAULT_FONT_SIZE, FIELD_HEIGHT, FIELD_PADDING_LEFT,
    FIELD_PADDING_RIGHT, FIELD_RADIUS, HELPER_FONT_SIZE, HELPER_GAP, LABEL_GAP, MENU_ITEM_HEIGHT,
    MENU_ITEM_PADDING_X, MENU_LIST_PADDING, POPUP_MAX_HEIGHT, SCROLLBAR_INSET,
    SCROLLBAR_MIN_THUMB, SCROLLBAR_WIDTH_COMPACT, THUMB_HIDE_DELAY, TYPEAHEAD_RESET_DELAY,
};

/// Configuration for the attached dropdown's menu and overlay scrollbar.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownConfig {
    /// Height of one menu row
    pub item_height: f32,
    /// Padding above the first and below the last row
    pub list_padding: f32,
    /// Horizontal text padding inside a row
    pub item_padding_x: f32,
    /// Row text size
    pub font_size: f32,
    /// Popup height cap; longer lists scroll
    pub max_height: f32,
    /// Corner radius of the popup's bottom corners
    pub corner_radius: f32,
    /// Width of the overlay thumb
    pub thumb_width: f32,
    /// Gap between the thumb and the popup's right edge
    pub thumb_inset: f32,
    /// Minimum thumb height
    pub min_thumb_height: f32,
    /// Idle time before the typeahead buffer resets
    pub typeahead_reset: Duration,
    /// Idle time before the thumb hides
    pub thumb_hide_delay: Duration,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            item_height: MENU_ITEM_HEIGHT,
            list_padding: MENU_LIST_PADDING,
            item_padding_x: MENU_ITEM_PADDING_X,
            font_size: DEFAULT_FONT_SIZE,
            max_height: POPUP_MAX_HEIGHT,
            corner_radius: FIELD_RADIUS,
            thumb_width: SCROLLBAR_WIDTH_COMPACT,
            thumb_inset: SCROLLBAR_INSET,
            min_thumb_height: SCROLLBAR_MIN_THUMB,
            typeahead_reset: TYPEAHEAD_RESET_DELAY,
            thumb_hide_delay: THUMB_HIDE_DELAY,
        }
    }
}

impl DropdownConfig {
    /// Create a new dropdown configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    builder_field!(item_height, f32);
    builder_field!(list_padding, f32);
    builder_field!(max_height, f32);
    builder_field!(min_thumb_height, f32);
    builder_field!(typeahead_reset, Duration);
    builder_field!(thumb_hide_delay, Duration);

    /// Height of all rows plus list padding.
    pub fn content_height(&self, item_count: usize) -> f32 {
        item_count as f32 * self.item_height + 2.0 * self.list_padding
    }

    /// Visible height of the popup for a list of `item_count` rows.
    pub fn container_height(&self, item_count: usize) -> f32 {
        self.content_height(item_count).min(self.max_height)
    }
}

/// Configuration for the labelled select field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Height of the input box
    pub height: f32,
    /// Corner radius of the input box
    pub corner_radius: f32,
    /// Text padding on the left
    pub padding_left: f32,
    /// Padding on the right, reserved for the chevron
    pub padding_right: f32,
    /// Value and label text size
    pub font_size: f32,
    /// Info message text size
    pub helper_font_size: f32,
    /// Gap between label line and input box
    pub label_gap: f32,
    /// Gap between input box and info message
    pub helper_gap: f32,
    /// Chevron icon size
    pub chevron_size: f32,
    /// Distance of the chevron's center from the right edge, minus half its size
    pub chevron_inset: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            height: FIELD_HEIGHT,
            corner_radius: FIELD_RADIUS,
            padding_left: FIELD_PADDING_LEFT,
            padding_right: FIELD_PADDING_RIGHT,
            font_size: DEFAULT_FONT_SIZE,
            helper_font_size: HELPER_FONT_SIZE,
            label_gap: LABEL_GAP,
            helper_gap: HELPER_GAP,
            chevron_size: CHEVRON_SIZE,
            chevron_inset: CHEVRON_INSET,
        }
    }
}

impl FieldConfig {
    /// Create a new field configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    builder_field!(height, f32);
    builder_field!(font_size, f32);
}
