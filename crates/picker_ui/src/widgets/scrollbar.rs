//! Overlay scrollbar geometry
//!
//! Pure functions from (content height, container height, scroll offset) to
//! thumb geometry, plus the scroll-offset helpers the menu uses. The native
//! scrollbar is never drawn; a thin thumb is overlaid on the right edge.

use crate::constants::SCROLL_OVERFLOW_TOLERANCE;
use crate::layout::Bounds;
use crate::renderer::{Color, Radii, Renderer};

/// Size and position of the overlay thumb, relative to the top of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbMetrics {
    pub height: f32,
    pub offset: f32,
}

/// Whether the content overflows its container enough to need a thumb.
pub fn needs_thumb(content_height: f32, container_height: f32) -> bool {
    content_height > container_height + SCROLL_OVERFLOW_TOLERANCE
}

/// Calculate the thumb for a vertically scrolling container whose track spans
/// the full container height.
///
/// Returns `None` if the content fits (within the overflow tolerance).
pub fn thumb_metrics(
    content_height: f32,
    container_height: f32,
    scroll_top: f32,
    min_thumb: f32,
) -> Option<ThumbMetrics> {
    if !needs_thumb(content_height, container_height) {
        return None;
    }

    let track = container_height;
    let height = (track * container_height / content_height).round().max(min_thumb);

    let max_scroll = content_height - container_height;
    let ratio = (scroll_top / max_scroll).clamp(0.0, 1.0);
    let offset = (ratio * (track - height)).round();

    Some(ThumbMetrics { height, offset })
}

/// Clamp a scroll offset to valid range
pub fn clamp_scroll_offset(offset: f32, content_size: f32, viewport_size: f32) -> f32 {
    let max_scroll = (content_size - viewport_size).max(0.0);
    offset.clamp(0.0, max_scroll)
}

/// Smallest scroll change that brings `[top, top + height)` fully into view.
/// Leaves the offset alone if the row is already visible.
pub fn scroll_to_reveal(current: f32, top: f32, height: f32, viewport_size: f32) -> f32 {
    if top < current {
        top
    } else if top + height > current + viewport_size {
        top + height - viewport_size
    } else {
        current
    }
}

/// Screen bounds of the thumb inside a popup.
pub fn thumb_bounds(track: Bounds, metrics: &ThumbMetrics, width: f32, inset: f32) -> Bounds {
    Bounds::new(
        track.right() - inset - width,
        track.y + metrics.offset,
        width,
        metrics.height,
    )
}

/// Draw the thumb as a pill.
pub fn draw_thumb(renderer: &mut Renderer, bounds: Bounds, color: Color) {
    renderer.fill_rounded_rect(bounds, color, Radii::all(bounds.width / 2.0));
}
