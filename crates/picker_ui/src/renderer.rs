//! Recording renderer.
//!
//! Widgets draw into a [`Renderer`] that records a display list of
//! [`DrawCommand`]s and a flat accessibility tree of [`AccessNode`]s. A backend
//! replays the display list; tests and the headless runtime inspect it
//! directly.

use serde::Serialize;

use crate::layout::{Bounds, Point, Size};

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }
}

/// Per-corner radii, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Radii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Radii {
    pub const ZERO: Radii = Radii::all(0.0);

    pub const fn all(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Rounded top corners, square bottom corners.
    pub const fn top(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }

    /// Square top corners, rounded bottom corners.
    pub const fn bottom(r: f32) -> Self {
        Self {
            top_left: 0.0,
            top_right: 0.0,
            bottom_right: r,
            bottom_left: r,
        }
    }
}

/// A draw command to be executed by a backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    FillRect {
        rect: Bounds,
        color: Color,
        radii: Radii,
    },
    StrokeRect {
        rect: Bounds,
        color: Color,
        width: f32,
        radii: Radii,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    DrawText {
        text: String,
        position: Point,
        color: Color,
        size: f32,
        bold: bool,
    },
    /// Right-pointing chevron rotated by `rotation` degrees around `center`.
    Chevron {
        center: Point,
        size: f32,
        rotation: f32,
        color: Color,
    },
    PushClip(Bounds),
    PopClip,
}

/// Semantic role of an accessibility node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Button,
    Menu,
    MenuItem,
    Label,
    Text,
}

/// Boolean state flags of an accessibility node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AccessState {
    pub focused: bool,
    pub selected: bool,
    pub expanded: bool,
    pub disabled: bool,
}

/// One node of the accessibility tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessNode {
    pub role: Role,
    pub label: String,
    pub bounds: Bounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_popup: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labelled_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    pub state: AccessState,
}

impl AccessNode {
    pub fn new(role: Role, label: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            role,
            label: label.into(),
            bounds,
            id: None,
            key: None,
            has_popup: None,
            labelled_by: None,
            described_by: None,
            state: AccessState::default(),
        }
    }

    builder_text_option!(id);
    builder_text_option!(key);
    builder_text_option!(labelled_by);
    builder_field!(state, AccessState);

    pub fn has_popup(mut self, role: Role) -> Self {
        self.has_popup = Some(role);
        self
    }

    pub fn described_by(mut self, id: Option<String>) -> Self {
        self.described_by = id;
        self
    }
}

/// Collects draw commands and accessibility nodes for one frame.
///
/// Commands issued between [`Renderer::begin_overlay`] and
/// [`Renderer::end_overlay`] go to the overlay layer, which a backend draws
/// after (on top of) the base layer.
#[derive(Debug, Clone)]
pub struct Renderer {
    viewport: Size,
    base: Vec<DrawCommand>,
    overlay: Vec<DrawCommand>,
    overlay_depth: usize,
    nodes: Vec<AccessNode>,
}

impl Renderer {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            base: Vec::new(),
            overlay: Vec::new(),
            overlay_depth: 0,
            nodes: Vec::new(),
        }
    }

    /// Drop everything recorded for the previous frame.
    pub fn clear(&mut self) {
        self.base.clear();
        self.overlay.clear();
        self.overlay_depth = 0;
        self.nodes.clear();
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport.height
    }

    fn push(&mut self, command: DrawCommand) {
        if self.overlay_depth > 0 {
            self.overlay.push(command);
        } else {
            self.base.push(command);
        }
    }

    pub fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.fill_rounded_rect(rect, color, Radii::ZERO);
    }

    pub fn fill_rounded_rect(&mut self, rect: Bounds, color: Color, radii: Radii) {
        self.push(DrawCommand::FillRect { rect, color, radii });
    }

    pub fn stroke_rect(&mut self, rect: Bounds, color: Color, width: f32) {
        self.stroke_rounded_rect(rect, color, width, Radii::ZERO);
    }

    pub fn stroke_rounded_rect(&mut self, rect: Bounds, color: Color, width: f32, radii: Radii) {
        self.push(DrawCommand::StrokeRect {
            rect,
            color,
            width,
            radii,
        });
    }

    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    pub fn draw_text(&mut self, text: &str, position: Point, color: Color, size: f32) {
        self.push(DrawCommand::DrawText {
            text: text.to_string(),
            position,
            color,
            size,
            bold: false,
        });
    }

    pub fn draw_bold_text(&mut self, text: &str, position: Point, color: Color, size: f32) {
        self.push(DrawCommand::DrawText {
            text: text.to_string(),
            position,
            color,
            size,
            bold: true,
        });
    }

    pub fn draw_chevron(&mut self, center: Point, size: f32, rotation: f32, color: Color) {
        self.push(DrawCommand::Chevron {
            center,
            size,
            rotation,
            color,
        });
    }

    pub fn push_clip(&mut self, bounds: Bounds) {
        self.push(DrawCommand::PushClip(bounds));
    }

    pub fn pop_clip(&mut self) {
        self.push(DrawCommand::PopClip);
    }

    pub fn begin_overlay(&mut self) {
        self.overlay_depth += 1;
    }

    pub fn end_overlay(&mut self) {
        self.overlay_depth = self.overlay_depth.saturating_sub(1);
    }

    /// Record an accessibility node.
    pub fn push_node(&mut self, node: AccessNode) {
        self.nodes.push(node);
    }

    pub fn base_commands(&self) -> &[DrawCommand] {
        &self.base
    }

    pub fn overlay_commands(&self) -> &[DrawCommand] {
        &self.overlay
    }

    /// All commands in paint order: base layer, then overlay.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.base.iter().chain(self.overlay.iter())
    }

    pub fn access_tree(&self) -> &[AccessNode] {
        &self.nodes
    }

    pub fn nodes_with_role(&self, role: Role) -> impl Iterator<Item = &AccessNode> {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    pub fn node_by_id(&self, id: &str) -> Option<&AccessNode> {
        self.nodes.iter().find(|n| n.id.as_deref() == Some(id))
    }

    /// Every text string drawn this frame, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands()
            .filter_map(|c| match c {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
