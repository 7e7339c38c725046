//! Fixed color palette for the form widgets
//!
//! Widgets reference these constants instead of hardcoding values.

use crate::renderer::Color;

pub mod colors {
    use super::Color;

    // ==========================================================================
    // Field
    // ==========================================================================
    pub const FIELD_BG: Color = Color::WHITE;
    pub const FIELD_BG_DISABLED: Color = Color::rgba(0.0, 0.0, 0.0, 0.04);
    pub const FIELD_BORDER: Color = Color::rgb(0.769, 0.769, 0.769);
    pub const FIELD_BORDER_HOVER: Color = Color::rgb(0.741, 0.741, 0.741);
    pub const ACCENT: Color = Color::rgb(0.098, 0.463, 0.824);

    // ==========================================================================
    // Text
    // ==========================================================================
    pub const TEXT_PRIMARY: Color = Color::rgba(0.0, 0.0, 0.0, 0.87);
    pub const TEXT_SECONDARY: Color = Color::rgba(0.0, 0.0, 0.0, 0.6);
    pub const TEXT_DISABLED: Color = Color::rgba(0.0, 0.0, 0.0, 0.38);
    pub const TEXT_PLACEHOLDER: Color = Color::rgba(0.0, 0.0, 0.0, 0.42);
    pub const ERROR: Color = Color::rgb(0.827, 0.184, 0.184);

    // ==========================================================================
    // Popup
    // ==========================================================================
    pub const POPUP_BG: Color = Color::WHITE;
    pub const POPUP_BORDER: Color = Color::rgb(0.878, 0.878, 0.878);
    pub const POPUP_SHADOW: Color = Color::rgba(0.0, 0.0, 0.0, 0.08);
    pub const ITEM_DIVIDER: Color = Color::rgb(0.945, 0.945, 0.945);

    /// Warm highlight shared by selection, focus and hover at different strengths
    pub const ITEM_SELECTED: Color = Color::rgba(1.0, 0.722, 0.471, 0.25);
    pub const ITEM_SELECTED_HOVER: Color = Color::rgba(1.0, 0.722, 0.471, 0.28);
    pub const ITEM_FOCUSED: Color = Color::rgba(1.0, 0.722, 0.471, 0.18);
    pub const ITEM_HOVER: Color = Color::rgba(1.0, 0.722, 0.471, 0.18);

    pub const SCROLL_THUMB: Color = Color::rgba(0.0, 0.0, 0.0, 0.35);
}
