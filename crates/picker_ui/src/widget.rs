//! Widget trait and related types

use std::time::Duration;

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Receive the final bounds after layout. Widgets that expose the
    /// geometry of their parts to others (an anchor for a popup) update it here.
    fn arrange(&mut self, bounds: Bounds) {
        let _ = bounds;
    }

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let _ = (event, bounds);
        None
    }

    /// Let `elapsed` pass: run expired timers and deferred work scheduled for
    /// the next frame.
    fn advance(&mut self, elapsed: Duration) -> Option<M> {
        let _ = elapsed;
        None
    }
}
