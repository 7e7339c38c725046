//! Widget state types for stateful widgets

use std::time::Duration;

use crate::constants::{THUMB_HIDE_DELAY, TYPEAHEAD_RESET_DELAY};
use crate::timer::Timer;
use crate::widgets::scrollbar::{clamp_scroll_offset, scroll_to_reveal, ThumbMetrics};

/// Index of the first label that starts with `query`, ignoring case.
///
/// An empty query matches nothing.
pub fn find_prefix<I, S>(labels: I, query: &str) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    labels
        .into_iter()
        .position(|label| label.as_ref().to_lowercase().starts_with(&query))
}

/// Keyboard typeahead buffer with an idle reset.
///
/// Every push or pop restarts the reset countdown; when it runs out the
/// buffer empties itself, so a pause starts a fresh search.
#[derive(Debug, Clone)]
pub struct TypeaheadBuffer {
    query: String,
    reset: Timer,
    delay: Duration,
}

impl Default for TypeaheadBuffer {
    fn default() -> Self {
        Self::new(TYPEAHEAD_RESET_DELAY)
    }
}

impl TypeaheadBuffer {
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            reset: Timer::new(),
            delay,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Whether an idle reset is pending.
    pub fn is_armed(&self) -> bool {
        self.reset.is_pending()
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.reset.schedule(self.delay);
    }

    /// Remove the last character. An emptied buffer disarms the reset.
    pub fn pop(&mut self) -> Option<char> {
        let popped = self.query.pop();
        if self.query.is_empty() {
            self.reset.cancel();
        } else {
            self.reset.schedule(self.delay);
        }
        popped
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.reset.cancel();
    }

    /// Advance the reset countdown. Returns `true` if the buffer was cleared.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.reset.advance(elapsed) {
            self.query.clear();
            true
        } else {
            false
        }
    }

    /// First label matching the current buffer.
    pub fn find_in<I, S>(&self, labels: I) -> Option<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        find_prefix(labels, &self.query)
    }
}

/// Overlay scroll thumb: derived geometry plus a visibility flag that fades
/// out after a period without scroll activity.
#[derive(Debug, Clone)]
pub struct ScrollThumb {
    metrics: Option<ThumbMetrics>,
    visible: bool,
    hide: Timer,
    hide_delay: Duration,
}

impl Default for ScrollThumb {
    fn default() -> Self {
        Self::new(THUMB_HIDE_DELAY)
    }
}

impl ScrollThumb {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            metrics: None,
            visible: false,
            hide: Timer::new(),
            hide_delay,
        }
    }

    /// Thumb geometry, `None` when the content fits.
    pub fn metrics(&self) -> Option<ThumbMetrics> {
        self.metrics
    }

    pub fn is_needed(&self) -> bool {
        self.metrics.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_metrics(&mut self, metrics: Option<ThumbMetrics>) {
        self.metrics = metrics;
    }

    /// Make the thumb visible and restart the hide countdown.
    pub fn show(&mut self) {
        self.visible = true;
        self.hide.schedule(self.hide_delay);
    }

    /// Advance the hide countdown. Returns `true` if the thumb was hidden.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.hide.advance(elapsed) {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.metrics = None;
        self.visible = false;
        self.hide.cancel();
    }
}

/// Vertical scroll position of a list container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `offset`, clamped to the scrollable range. Returns `true` if
    /// the position changed.
    pub fn scroll_to(&mut self, offset: f32, content: f32, viewport: f32) -> bool {
        let clamped = clamp_scroll_offset(offset, content, viewport);
        if (clamped - self.offset).abs() < f32::EPSILON {
            return false;
        }
        self.offset = clamped;
        true
    }

    /// Scroll just enough to show the row `[top, top + height)`.
    pub fn reveal(&mut self, top: f32, height: f32, content: f32, viewport: f32) -> bool {
        let target = scroll_to_reveal(self.offset, top, height, viewport);
        self.scroll_to(target, content, viewport)
    }
}
