//! Size observation for elements whose geometry other widgets depend on.

use crate::layout::Size;

/// Watches one element's size across layout passes.
///
/// An observer is connected for as long as its owner cares about the element
/// and disconnected when it stops caring, which drops the remembered size.
/// Measurements fed to a disconnected observer are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeObserver {
    connected: bool,
    last: Option<Size>,
}

impl SizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self) {
        if !self.connected {
            self.connected = true;
            self.last = None;
        }
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.last = None;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Last size reported while connected.
    pub fn last_size(&self) -> Option<Size> {
        self.last
    }

    /// Feed a fresh measurement. Returns the size when it differs from the
    /// previous one, which is always the case for the first measurement after
    /// connecting.
    pub fn observe(&mut self, size: Size) -> Option<Size> {
        if !self.connected || self.last == Some(size) {
            return None;
        }
        self.last = Some(size);
        Some(size)
    }
}
