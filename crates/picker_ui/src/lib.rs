//! picker_ui - A small retained widget toolkit for form pickers
//!
//! This crate provides a callback-based widget system with a clean builder API,
//! a recording renderer that produces a display list plus an accessibility
//! tree, and two form widgets: [`AttachedDropdown`] and [`CountrySelect`].

#[macro_use]
mod macros;

pub mod application;
pub mod callback;
pub mod constants;
pub mod event;
pub mod layout;
pub mod observer;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod timer;
pub mod widget;
pub mod widgets;

pub use application::{Application, FrameClock, Headless, Settings};
pub use callback::{Callback, Callback0};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::{Bounds, Point, Size};
pub use observer::SizeObserver;
pub use renderer::{AccessNode, AccessState, Color, DrawCommand, Radii, Renderer, Role};
pub use state::{ScrollState, ScrollThumb, TypeaheadBuffer};
pub use timer::Timer;
pub use widget::Widget;

// Re-export widgets
pub use widgets::{
    attached_dropdown, country_select, AttachedDropdown, CountrySelect, DropdownConfig,
    FieldConfig, FocusRequest, ThumbMetrics, COUNTRIES,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, FrameClock, Headless, Settings};
    pub use crate::event::{Event, Key, Modifiers, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::renderer::{AccessNode, Renderer, Role};
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        attached_dropdown, country_select, AttachedDropdown, CountrySelect, DropdownConfig,
        FieldConfig, FocusRequest,
    };
}
