//! Application lifecycle and the headless runtime.

use std::time::Duration;

use log::trace;
use web_time::Instant;

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::Widget;

/// Core application trait, in the style of the Elm Architecture.
///
/// The application owns a retained widget tree. Widgets turn events into
/// messages, and messages are fed back through [`Application::update`].
pub trait Application {
    /// The message type that this application handles.
    type Message;

    /// Window or document title.
    fn title(&self) -> String;

    /// Update the application state in response to a message.
    fn update(&mut self, message: Self::Message);

    /// Root of the widget tree.
    fn root(&self) -> &dyn Widget<Self::Message>;

    fn root_mut(&mut self) -> &mut dyn Widget<Self::Message>;
}

/// Settings for running an application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Logical viewport size
    pub viewport: Size,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
        }
    }
}

/// Runs an application without a window: events and elapsed time go in,
/// recorded frames come out.
///
/// Every entry point lays the tree out again first, so the widgets always
/// see current bounds.
pub struct Headless<A: Application> {
    app: A,
    renderer: Renderer,
}

impl<A: Application> Headless<A> {
    pub fn new(app: A, settings: Settings) -> Self {
        Self {
            app,
            renderer: Renderer::new(settings.viewport),
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn viewport(&self) -> Size {
        self.renderer.viewport()
    }

    pub fn resize(&mut self, viewport: Size) {
        self.renderer.resize(viewport);
    }

    fn relayout(&mut self) -> Bounds {
        let root = self.app.root_mut();
        let size = root.layout(self.renderer.viewport());
        let bounds = Bounds::from_size(size);
        root.arrange(bounds);
        bounds
    }

    /// Route an event to the root widget and apply the resulting message.
    /// Returns `true` if a message was produced.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let bounds = self.relayout();
        let message = self.app.root_mut().on_event(event, bounds);
        self.dispatch(message)
    }

    /// Let time pass: fires due timers and deferred focus requests.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.relayout();
        let message = self.app.root_mut().advance(elapsed);
        self.dispatch(message)
    }

    fn dispatch(&mut self, message: Option<A::Message>) -> bool {
        match message {
            Some(message) => {
                self.app.update(message);
                true
            }
            None => false,
        }
    }

    /// Record a frame.
    pub fn render(&mut self) -> &Renderer {
        let bounds = self.relayout();
        self.renderer.clear();
        self.app.root().draw(&mut self.renderer, bounds);
        &self.renderer
    }
}

/// Measures real time between frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time since the previous tick (or since creation).
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        trace!("frame tick {:?}", elapsed);
        elapsed
    }
}
