//! Callback abstraction for widget event handlers
//!
//! Widgets never call back into application code directly. They hold
//! optional handlers that turn a widget-level value into an application
//! message, and return that message from `on_event`.
//!
//! # Examples
//!
//! ```
//! use picker_ui::Callback;
//!
//! enum Message {
//!     Picked(String),
//! }
//!
//! let on_select: Callback<String, Message> = Callback::new(Message::Picked);
//! assert!(matches!(on_select.call("Chad".to_string()), Some(Message::Picked(_))));
//!
//! let unset: Callback<String, Message> = Callback::none();
//! assert!(unset.call("Chad".to_string()).is_none());
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional event handler.
///
/// - `T`: The value the widget hands to the handler (selected item, new value)
/// - `M`: The message type returned by the handler
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if a handler is set, or `None` otherwise.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

/// A callback that takes no parameters, such as a close request.
pub type Callback0<M> = Callback<(), M>;

impl<M> Callback0<M> {
    /// Call the callback without any parameters.
    pub fn emit(&self) -> Option<M> {
        self.call(())
    }
}
