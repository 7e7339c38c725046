//! Attached dropdown: a popup menu anchored below a trigger.
//!
//! The popup sits directly under its anchor with the anchor's width and draws
//! in the overlay layer. It never flips or shifts to stay on screen, so a
//! trigger near the bottom of the viewport gets a clipped menu.
//!
//! The dropdown owns all transient menu state: keyboard focus, the typeahead
//! buffer, the scroll offset and the overlay thumb. The open flag belongs to
//! whoever owns the anchor. It pushes changes in with
//! [`AttachedDropdown::set_open`] and gets select/close requests back as
//! messages.

use std::fmt;
use std::time::Duration;

use log::{debug, trace};

use crate::callback::{Callback, Callback0};
use crate::constants::line_height;
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::layout::{Bounds, Point, Size};
use crate::observer::SizeObserver;
use crate::renderer::{AccessNode, AccessState, Color, Radii, Renderer, Role};
use crate::state::{ScrollState, ScrollThumb, TypeaheadBuffer};
use crate::theme::colors;
use crate::widget::Widget;
use crate::widgets::config::DropdownConfig;
use crate::widgets::scrollbar::{draw_thumb, thumb_bounds, thumb_metrics};

type KeyFn<T> = Box<dyn Fn(&T, usize) -> String>;
type LabelFn<T> = Box<dyn Fn(&T) -> String>;
type SelectedFn<T> = Box<dyn Fn(&T) -> bool>;

/// Which item receives keyboard focus on the first frame after opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    /// The first item.
    First,
    /// The selected item, or the first one if nothing is selected.
    SelectedOrFirst,
}

/// A popup list anchored below a trigger element.
pub struct AttachedDropdown<T, M> {
    items: Vec<T>,
    key_of: KeyFn<T>,
    label_of: LabelFn<T>,
    is_selected: SelectedFn<T>,
    on_select: Callback<T, M>,
    on_close: Callback0<M>,
    id: Option<String>,
    config: DropdownConfig,

    is_open: bool,
    anchor: Option<Bounds>,
    anchor_observer: SizeObserver,
    /// Width measured from the anchor; unset until an anchor is observed
    menu_width: Option<f32>,
    container_observer: SizeObserver,

    typeahead: TypeaheadBuffer,
    /// Most recent key pressed inside the menu, cleared by pointer presses
    last_key: Option<Key>,
    focused: Option<usize>,
    hovered: Option<usize>,
    pending_focus: Option<FocusRequest>,
    scroll: ScrollState,
    thumb: ScrollThumb,
}

impl<T: fmt::Display + 'static, M> AttachedDropdown<T, M> {
    /// Create a dropdown that labels items with their `Display` output.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_labels(items, |item: &T| item.to_string())
    }
}

impl<T: 'static, M> AttachedDropdown<T, M> {
    /// Create a dropdown with a custom label extractor.
    pub fn with_labels<F>(items: Vec<T>, label_of: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        let config = DropdownConfig::default();
        Self {
            items,
            key_of: Box::new(|_: &T, index: usize| index.to_string()),
            label_of: Box::new(label_of),
            is_selected: Box::new(|_: &T| false),
            on_select: Callback::none(),
            on_close: Callback::none(),
            id: None,
            is_open: false,
            anchor: None,
            anchor_observer: SizeObserver::new(),
            menu_width: None,
            container_observer: SizeObserver::new(),
            typeahead: TypeaheadBuffer::new(config.typeahead_reset),
            last_key: None,
            focused: None,
            hovered: None,
            pending_focus: None,
            scroll: ScrollState::new(),
            thumb: ScrollThumb::new(config.thumb_hide_delay),
            config,
        }
    }

    /// Set the key extractor used for the item nodes. Defaults to the index.
    pub fn key_of<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> String + 'static,
    {
        self.key_of = Box::new(f);
        self
    }

    pub fn label_of<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.label_of = Box::new(f);
        self
    }

    /// Set the predicate marking the currently selected item(s).
    pub fn is_selected<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.set_is_selected(f);
        self
    }

    callback_setter!(on_select, T);
    callback_setter!(on_close);
    builder_text_option!(id);

    pub fn config(mut self, config: DropdownConfig) -> Self {
        self.typeahead = TypeaheadBuffer::new(config.typeahead_reset);
        self.thumb = ScrollThumb::new(config.thumb_hide_delay);
        self.config = config;
        self
    }

    pub fn set_is_selected<F>(&mut self, f: F)
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.is_selected = Box::new(f);
    }

    /// Replace the item list. Focus, typeahead and scroll start over.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.reset_transient();
        self.sync_container();
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }
}

impl<T, M> AttachedDropdown<T, M> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn menu_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn anchor(&self) -> Option<Bounds> {
        self.anchor
    }

    pub fn menu_width(&self) -> Option<f32> {
        self.menu_width
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_item(&self) -> Option<&T> {
        self.focused.and_then(|i| self.items.get(i))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn typeahead_query(&self) -> &str {
        self.typeahead.query()
    }

    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset
    }

    pub fn thumb(&self) -> &ScrollThumb {
        &self.thumb
    }

    pub fn is_watching_anchor(&self) -> bool {
        self.anchor_observer.is_connected()
    }

    pub fn is_watching_container(&self) -> bool {
        self.container_observer.is_connected()
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.items.get(index).map(|item| (self.label_of)(item))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| (self.is_selected)(item))
    }

    pub fn content_height(&self) -> f32 {
        self.config.content_height(self.items.len())
    }

    pub fn container_height(&self) -> f32 {
        self.config.container_height(self.items.len())
    }

    /// Popup rectangle: directly below the anchor, as wide as the anchor.
    pub fn popup_bounds(&self) -> Option<Bounds> {
        let anchor = self.anchor?;
        let width = self.menu_width?;
        Some(Bounds::new(anchor.x, anchor.bottom(), width, self.container_height()))
    }

    /// Screen bounds of a row at the current scroll offset. Rows scrolled out
    /// of view lie outside the popup.
    pub fn item_bounds(&self, index: usize) -> Option<Bounds> {
        if index >= self.items.len() {
            return None;
        }
        let popup = self.popup_bounds()?;
        let y = popup.y + self.row_top(index) - self.scroll.offset;
        Some(Bounds::new(popup.x, y, popup.width, self.config.item_height))
    }

    fn row_top(&self, index: usize) -> f32 {
        self.config.list_padding + index as f32 * self.config.item_height
    }

    fn item_at(&self, position: Point) -> Option<usize> {
        let popup = self.popup_bounds()?;
        if !popup.contains(position) {
            return None;
        }
        let y = position.y - popup.y + self.scroll.offset - self.config.list_padding;
        if y < 0.0 {
            return None;
        }
        let index = (y / self.config.item_height) as usize;
        (index < self.items.len()).then_some(index)
    }

    fn search(&self) -> Option<usize> {
        self.typeahead
            .find_in(self.items.iter().map(|item| (self.label_of)(item)))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open or close the popup. Either transition discards focus, typeahead,
    /// scroll position and thumb state and cancels their timers.
    pub fn set_open(&mut self, open: bool) {
        if self.is_open == open {
            return;
        }
        self.is_open = open;
        self.reset_transient();
        if open {
            debug!(
                "dropdown {} opened with {} items",
                self.id.as_deref().unwrap_or("-"),
                self.items.len()
            );
            self.container_observer.connect();
            self.pending_focus = Some(FocusRequest::SelectedOrFirst);
            self.sync_container();
        } else {
            debug!("dropdown {} closed", self.id.as_deref().unwrap_or("-"));
            self.container_observer.disconnect();
        }
    }

    /// Replace the focus target for the next frame. Ignored while closed.
    pub fn request_focus(&mut self, request: FocusRequest) {
        if self.is_open {
            self.pending_focus = Some(request);
        }
    }

    fn reset_transient(&mut self) {
        self.typeahead.clear();
        self.last_key = None;
        self.focused = None;
        self.hovered = None;
        self.pending_focus = None;
        self.scroll = ScrollState::new();
        self.thumb.reset();
    }

    /// Feed the anchor's current bounds. Called on every layout pass; the
    /// menu width follows whenever the anchor's size changes.
    pub fn observe_anchor(&mut self, anchor: Option<Bounds>) {
        self.anchor = anchor;
        let Some(bounds) = anchor else {
            self.anchor_observer.disconnect();
            return;
        };
        self.anchor_observer.connect();
        if let Some(size) = self.anchor_observer.observe(bounds.size()) {
            trace!("anchor resized to {}x{}", size.width, size.height);
            self.menu_width = Some(size.width);
        }
        self.sync_container();
    }

    /// Re-measure the scroll container while open.
    fn sync_container(&mut self) {
        if !self.is_open {
            return;
        }
        let Some(popup) = self.popup_bounds() else {
            return;
        };
        if self.container_observer.observe(popup.size()).is_some() {
            let offset = self.scroll.offset;
            let (content, container) = (self.content_height(), self.container_height());
            self.scroll.scroll_to(offset, content, container);
            self.update_thumb_metrics();
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Recompute thumb geometry from the container's current metrics. Does
    /// nothing while closed or without an anchor.
    pub fn update_thumb_metrics(&mut self) {
        if !self.is_open || self.popup_bounds().is_none() {
            return;
        }
        let metrics = thumb_metrics(
            self.content_height(),
            self.container_height(),
            self.scroll.offset,
            self.config.min_thumb_height,
        );
        trace!("thumb metrics {:?}", metrics);
        self.thumb.set_metrics(metrics);
    }

    /// Show the thumb and restart its hide countdown.
    pub fn show_thumb(&mut self) {
        if !self.is_open {
            return;
        }
        self.update_thumb_metrics();
        self.thumb.show();
    }

    /// Scroll the list; any actual movement shows the thumb. Returns whether
    /// the offset changed.
    pub fn scroll_to(&mut self, offset: f32) -> bool {
        let (content, container) = (self.content_height(), self.container_height());
        let moved = self.scroll.scroll_to(offset, content, container);
        if moved {
            self.show_thumb();
        }
        moved
    }

    fn reveal(&mut self, index: usize) {
        let (content, container) = (self.content_height(), self.container_height());
        let top = self.row_top(index);
        if self.scroll.reveal(top, self.config.item_height, content, container) {
            self.show_thumb();
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Give keyboard focus to an item and scroll it into view.
    pub fn focus_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.focused = Some(index);
        self.reveal(index);
    }

    fn move_focus(&mut self, step: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let next = match self.focused {
            Some(i) => (i as isize + step).rem_euclid(len as isize) as usize,
            None if step > 0 => 0,
            None => len - 1,
        };
        self.focus_item(next);
    }
}

impl<T: Clone, M> AttachedDropdown<T, M> {
    /// Select an item, unless the last key pressed was Space: Space belongs
    /// to the typeahead query and must never pick the focused item.
    pub fn activate(&mut self, index: usize) -> Option<M> {
        if self.last_key == Some(Key::Space) {
            debug!("ignoring activation of item {index} after Space");
            return None;
        }
        let item = self.items.get(index)?.clone();
        debug!("dropdown item {index} selected");
        self.on_select.call(item)
    }

    /// Key press handling for the open menu.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<M> {
        self.last_key = Some(key);

        match key {
            Key::Enter => {
                let focused = self.focused?;
                return self.activate(focused);
            }
            Key::Backspace => {
                self.typeahead.pop();
                if let Some(index) = self.search() {
                    self.focus_item(index);
                }
                return None;
            }
            Key::Down => {
                self.move_focus(1);
                return None;
            }
            Key::Up => {
                self.move_focus(-1);
                return None;
            }
            Key::Home => {
                self.focus_item(0);
                return None;
            }
            Key::End => {
                self.focus_item(self.items.len().saturating_sub(1));
                return None;
            }
            _ => {}
        }

        if modifiers.has_command() {
            return None;
        }
        if let Some(c) = key.typed_char() {
            self.typeahead.push(c);
            let found = self.search();
            trace!("typeahead {:?} -> {:?}", self.typeahead.query(), found);
            if let Some(index) = found {
                self.focus_item(index);
            }
        }
        None
    }

    fn handle_press(&mut self, position: Point) -> Option<M> {
        if let Some(popup) = self.popup_bounds() {
            if popup.contains(position) {
                // A real pointer press ends any keyboard sequence
                self.last_key = None;
                let index = self.item_at(position)?;
                return self.activate(index);
            }
        }
        if self.anchor.is_some_and(|a| a.contains(position)) {
            // The anchor's own toggle handles this press
            return None;
        }
        debug!("press outside dropdown, requesting close");
        self.on_close.emit()
    }
}

impl<T: Clone, M> Widget<M> for AttachedDropdown<T, M> {
    /// The popup floats over other content and takes no space in the flow.
    fn layout(&mut self, _available: Size) -> Size {
        Size::ZERO
    }

    fn draw(&self, renderer: &mut Renderer, _bounds: Bounds) {
        if !self.is_open {
            return;
        }
        let Some(popup) = self.popup_bounds() else {
            return;
        };
        renderer.begin_overlay();
        self.draw_popup(renderer, popup);
        renderer.end_overlay();
    }

    fn on_event(&mut self, event: &Event, _bounds: Bounds) -> Option<M> {
        if !self.is_open {
            return None;
        }
        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => self.handle_press(*position),
            Event::MouseMoved { position } => {
                self.hovered = self.item_at(*position);
                None
            }
            Event::MouseWheel { delta, position } => {
                if self.popup_bounds().is_some_and(|p| p.contains(*position)) {
                    // Wheeling against either end still reveals the thumb
                    if !self.scroll_to(self.scroll.offset - delta) {
                        self.show_thumb();
                    }
                }
                None
            }
            Event::KeyPressed { key, modifiers } => self.handle_key(*key, *modifiers),
            // Releases never activate; selection comes from Enter or a press
            _ => None,
        }
    }

    fn advance(&mut self, elapsed: Duration) -> Option<M> {
        if let Some(request) = self.pending_focus.take() {
            let index = match request {
                FocusRequest::First => 0,
                FocusRequest::SelectedOrFirst => self.selected_index().unwrap_or(0),
            };
            self.focus_item(index);
        }
        if self.typeahead.advance(elapsed) {
            trace!("typeahead buffer cleared");
        }
        if self.thumb.advance(elapsed) {
            trace!("scroll thumb hidden");
        }
        None
    }
}

impl<T, M> AttachedDropdown<T, M> {
    fn draw_popup(&self, renderer: &mut Renderer, popup: Bounds) {
        let config = &self.config;
        let radii = Radii::bottom(config.corner_radius);

        let mut menu = AccessNode::new(Role::Menu, "", popup);
        if let Some(id) = &self.id {
            menu = menu.id(id.clone());
        }
        renderer.push_node(menu);

        let shadow = Bounds::new(popup.x, popup.y + 4.0, popup.width, popup.height);
        renderer.fill_rounded_rect(shadow, colors::POPUP_SHADOW, radii);
        renderer.fill_rounded_rect(popup, colors::POPUP_BG, radii);

        // Border on three sides; the open top edge merges with the anchor
        let (left, right, bottom) = (popup.x, popup.right(), popup.bottom());
        renderer.draw_line(Point::new(left, popup.y), Point::new(left, bottom), colors::POPUP_BORDER, 1.0);
        renderer.draw_line(Point::new(right, popup.y), Point::new(right, bottom), colors::POPUP_BORDER, 1.0);
        renderer.draw_line(Point::new(left, bottom), Point::new(right, bottom), colors::POPUP_BORDER, 1.0);

        renderer.push_clip(popup);
        let last = self.items.len().saturating_sub(1);
        let text_offset = (config.item_height - line_height(config.font_size)) / 2.0;
        for (index, item) in self.items.iter().enumerate() {
            let Some(row) = self.item_bounds(index) else {
                continue;
            };
            let label = (self.label_of)(item);
            let selected = (self.is_selected)(item);
            let focused = self.focused == Some(index);
            let hovered = self.hovered == Some(index);

            renderer.push_node(
                AccessNode::new(Role::MenuItem, label.as_str(), row)
                    .key((self.key_of)(item, index))
                    .state(AccessState {
                        focused,
                        selected,
                        ..AccessState::default()
                    }),
            );

            if !row.intersects(&popup) {
                continue;
            }
            if let Some(bg) = row_background(selected, focused, hovered) {
                renderer.fill_rect(row, bg);
            }
            if index < last {
                renderer.draw_line(
                    Point::new(row.x, row.bottom()),
                    Point::new(row.right(), row.bottom()),
                    colors::ITEM_DIVIDER,
                    1.0,
                );
            }
            renderer.draw_text(
                &label,
                Point::new(row.x + config.item_padding_x, row.y + text_offset),
                colors::TEXT_PRIMARY,
                config.font_size,
            );
        }
        renderer.pop_clip();

        if self.thumb.is_visible() {
            if let Some(metrics) = self.thumb.metrics() {
                let bounds = thumb_bounds(popup, &metrics, config.thumb_width, config.thumb_inset);
                draw_thumb(renderer, bounds, colors::SCROLL_THUMB);
            }
        }
    }
}

fn row_background(selected: bool, focused: bool, hovered: bool) -> Option<Color> {
    match (selected, focused || hovered) {
        (true, true) => Some(colors::ITEM_SELECTED_HOVER),
        (true, false) => Some(colors::ITEM_SELECTED),
        (false, true) if focused => Some(colors::ITEM_FOCUSED),
        (false, true) => Some(colors::ITEM_HOVER),
        (false, false) => None,
    }
}

/// Helper function to create a dropdown labelled by `Display`.
pub fn attached_dropdown<T: fmt::Display + 'static, M>(items: Vec<T>) -> AttachedDropdown<T, M> {
    AttachedDropdown::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Selected(&'static str),
        Closed,
    }

    const ANCHOR: Bounds = Bounds::new(20.0, 40.0, 300.0, 36.0);

    fn open_with(items: Vec<&'static str>) -> AttachedDropdown<&'static str, Msg> {
        let mut dd = AttachedDropdown::new(items)
            .on_select(Msg::Selected)
            .on_close(|| Msg::Closed)
            .id("fruit-menu");
        dd.observe_anchor(Some(ANCHOR));
        dd.set_open(true);
        dd
    }

    fn fruit() -> AttachedDropdown<&'static str, Msg> {
        open_with(vec!["Apple", "Banana", "Cherry"])
    }

    fn long_list() -> AttachedDropdown<&'static str, Msg> {
        open_with(crate::widgets::countries::COUNTRIES.to_vec())
    }

    fn press(dd: &mut AttachedDropdown<&'static str, Msg>, key: Key) -> Option<Msg> {
        dd.on_event(&Event::key_pressed(key), Bounds::default())
    }

    fn type_text(dd: &mut AttachedDropdown<&'static str, Msg>, text: &str) {
        for c in text.chars() {
            let key = if c == ' ' { Key::Space } else { Key::Char(c) };
            assert_eq!(press(dd, key), None);
            dd.on_event(&Event::key_released(key), Bounds::default());
        }
    }

    #[test]
    fn test_typeahead_focuses_prefix_match() {
        let mut dd = fruit();
        type_text(&mut dd, "b");
        assert_eq!(dd.focused_item(), Some(&"Banana"));
    }

    #[test]
    fn test_typeahead_is_case_insensitive() {
        let mut dd = fruit();
        type_text(&mut dd, "CH");
        assert_eq!(dd.focused(), Some(2));
    }

    #[test]
    fn test_typeahead_without_match_keeps_focus() {
        let mut dd = fruit();
        type_text(&mut dd, "b");
        type_text(&mut dd, "x");
        assert_eq!(dd.focused(), Some(1));
        assert_eq!(dd.typeahead_query(), "bx");
    }

    #[test]
    fn test_command_modifier_is_not_typeahead() {
        let mut dd = fruit();
        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        dd.on_event(
            &Event::KeyPressed {
                key: Key::Char('b'),
                modifiers: ctrl,
            },
            Bounds::default(),
        );
        assert_eq!(dd.typeahead_query(), "");
        assert_eq!(dd.focused(), None);
    }

    #[test]
    fn test_enter_selects_focused_once() {
        let mut dd = fruit();
        type_text(&mut dd, "c");
        assert_eq!(press(&mut dd, Key::Enter), Some(Msg::Selected("Cherry")));
        assert_eq!(dd.on_event(&Event::key_released(Key::Enter), Bounds::default()), None);
    }

    #[test]
    fn test_enter_without_focus_does_nothing() {
        let mut dd = fruit();
        assert_eq!(press(&mut dd, Key::Enter), None);
    }

    #[test]
    fn test_space_never_selects() {
        let mut dd = long_list();
        type_text(&mut dd, "united");
        assert_eq!(dd.focused_item(), Some(&"United Arab Emirates"));

        assert_eq!(press(&mut dd, Key::Space), None);
        let released = dd.on_event(&Event::key_released(Key::Space), Bounds::default());
        assert_eq!(released, None);
        assert_eq!(dd.typeahead_query(), "united ");

        type_text(&mut dd, "s");
        assert_eq!(dd.focused_item(), Some(&"United States"));
        assert_eq!(press(&mut dd, Key::Enter), Some(Msg::Selected("United States")));
    }

    #[test]
    fn test_space_released_after_next_key_never_selects() {
        let mut dd = long_list();
        type_text(&mut dd, "united");

        // Next letter goes down before Space comes up
        assert_eq!(press(&mut dd, Key::Space), None);
        assert_eq!(press(&mut dd, Key::Char('s')), None);
        assert_eq!(dd.typeahead_query(), "united s");
        assert_eq!(dd.focused_item(), Some(&"United States"));

        let released = dd.on_event(&Event::key_released(Key::Space), Bounds::default());
        assert_eq!(released, None);
        let released = dd.on_event(&Event::key_released(Key::Char('s')), Bounds::default());
        assert_eq!(released, None);
        assert!(dd.is_open());
    }

    #[test]
    fn test_wheel_scroll_restarts_hide_countdown() {
        let mut dd = long_list();
        dd.advance(Duration::ZERO);
        let wheel = Event::MouseWheel {
            delta: -50.0,
            position: dd.popup_bounds().unwrap().center(),
        };
        dd.on_event(&wheel, Bounds::default());
        dd.advance(Duration::from_millis(1500));
        dd.on_event(&wheel, Bounds::default());
        assert_eq!(dd.scroll_offset(), 100.0);
        dd.advance(Duration::from_millis(1500));
        assert!(dd.thumb().is_visible());
        dd.advance(Duration::from_millis(500));
        assert!(!dd.thumb().is_visible());
    }

    #[test]
    fn test_space_blocks_direct_activation() {
        let mut dd = fruit();
        type_text(&mut dd, "a ");
        assert_eq!(dd.last_key(), Some(Key::Space));
        assert_eq!(dd.activate(0), None);
    }

    #[test]
    fn test_pointer_press_selects_item() {
        let mut dd = fruit();
        let row = dd.item_bounds(1).unwrap();
        let msg = dd.on_event(&Event::left_press(row.x + 5.0, row.y + 5.0), Bounds::default());
        assert_eq!(msg, Some(Msg::Selected("Banana")));
    }

    #[test]
    fn test_pointer_press_after_space_still_selects() {
        let mut dd = fruit();
        type_text(&mut dd, "a ");
        let row = dd.item_bounds(2).unwrap();
        let msg = dd.on_event(&Event::left_press(row.x + 5.0, row.y + 5.0), Bounds::default());
        assert_eq!(msg, Some(Msg::Selected("Cherry")));
    }

    #[test]
    fn test_press_outside_requests_close() {
        let mut dd = fruit();
        let msg = dd.on_event(&Event::left_press(700.0, 500.0), Bounds::default());
        assert_eq!(msg, Some(Msg::Closed));
    }

    #[test]
    fn test_press_on_anchor_is_ignored() {
        let mut dd = fruit();
        let center = ANCHOR.center();
        let msg = dd.on_event(&Event::left_press(center.x, center.y), Bounds::default());
        assert_eq!(msg, None);
    }

    #[test]
    fn test_right_click_outside_is_ignored() {
        let mut dd = fruit();
        let event = Event::MousePressed {
            button: MouseButton::Right,
            position: Point::new(700.0, 500.0),
        };
        assert_eq!(dd.on_event(&event, Bounds::default()), None);
    }

    #[test]
    fn test_closed_dropdown_ignores_events() {
        let mut dd = fruit();
        dd.set_open(false);
        assert_eq!(dd.on_event(&Event::left_press(700.0, 500.0), Bounds::default()), None);
        assert_eq!(press(&mut dd, Key::Char('a')), None);
        assert_eq!(dd.typeahead_query(), "");
    }

    #[test]
    fn test_typeahead_buffer_clears_after_idle() {
        let mut dd = fruit();
        type_text(&mut dd, "b");
        dd.advance(Duration::from_millis(699));
        assert_eq!(dd.typeahead_query(), "b");
        dd.advance(Duration::from_millis(1));
        assert_eq!(dd.typeahead_query(), "");

        // A fresh search starts from scratch
        type_text(&mut dd, "c");
        assert_eq!(dd.focused_item(), Some(&"Cherry"));
    }

    #[test]
    fn test_each_key_restarts_idle_reset() {
        let mut dd = fruit();
        type_text(&mut dd, "c");
        dd.advance(Duration::from_millis(500));
        type_text(&mut dd, "h");
        dd.advance(Duration::from_millis(500));
        assert_eq!(dd.typeahead_query(), "ch");
    }

    #[test]
    fn test_backspace_refocuses_first_match() {
        let mut dd = open_with(vec!["Canada", "Chad", "Chile", "China"]);
        type_text(&mut dd, "chi");
        assert_eq!(dd.focused_item(), Some(&"Chile"));

        press(&mut dd, Key::Backspace);
        assert_eq!(dd.typeahead_query(), "ch");
        assert_eq!(dd.focused_item(), Some(&"Chad"));

        press(&mut dd, Key::Backspace);
        assert_eq!(dd.focused_item(), Some(&"Canada"));

        press(&mut dd, Key::Backspace);
        assert_eq!(dd.typeahead_query(), "");
        assert_eq!(dd.focused_item(), Some(&"Canada"));
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        let mut dd = fruit();
        press(&mut dd, Key::Down);
        assert_eq!(dd.focused(), Some(0));
        press(&mut dd, Key::Up);
        assert_eq!(dd.focused(), Some(2));
        press(&mut dd, Key::Down);
        assert_eq!(dd.focused(), Some(0));
        press(&mut dd, Key::End);
        assert_eq!(dd.focused(), Some(2));
        press(&mut dd, Key::Home);
        assert_eq!(dd.focused(), Some(0));
    }

    #[test]
    fn test_deferred_focus_prefers_selected() {
        let mut dd = fruit().is_selected(|item: &&'static str| *item == "Cherry");
        dd.set_open(false);
        dd.set_open(true);
        assert_eq!(dd.focused(), None);
        dd.advance(Duration::ZERO);
        assert_eq!(dd.focused(), Some(2));
    }

    #[test]
    fn test_deferred_focus_first_request() {
        let mut dd = fruit().is_selected(|item: &&'static str| *item == "Cherry");
        dd.request_focus(FocusRequest::First);
        dd.advance(Duration::ZERO);
        assert_eq!(dd.focused(), Some(0));
    }

    #[test]
    fn test_width_tracks_anchor() {
        let mut dd = fruit();
        assert_eq!(dd.menu_width(), Some(300.0));
        dd.observe_anchor(Some(Bounds::new(20.0, 40.0, 240.0, 36.0)));
        assert_eq!(dd.menu_width(), Some(240.0));
        let popup = dd.popup_bounds().unwrap();
        assert_eq!((popup.x, popup.y, popup.width), (20.0, 76.0, 240.0));
    }

    #[test]
    fn test_popup_never_flips() {
        let mut dd = long_list();
        // Anchor near the bottom of a 600px viewport: popup still opens downward
        dd.observe_anchor(Some(Bounds::new(0.0, 560.0, 300.0, 36.0)));
        let popup = dd.popup_bounds().unwrap();
        assert_eq!(popup.y, 596.0);
        assert_eq!(popup.height, 420.0);
    }

    #[test]
    fn test_no_anchor_is_a_no_op() {
        let mut dd: AttachedDropdown<&'static str, Msg> =
            AttachedDropdown::new(vec!["Apple"]).on_close(|| Msg::Closed);
        dd.set_open(true);
        assert_eq!(dd.menu_width(), None);
        assert!(dd.popup_bounds().is_none());
        dd.update_thumb_metrics();
        assert!(!dd.thumb().is_needed());

        let mut renderer = Renderer::new(Size::new(800.0, 600.0));
        dd.draw(&mut renderer, Bounds::default());
        assert!(renderer.access_tree().is_empty());
        assert_eq!(renderer.commands().count(), 0);
    }

    #[test]
    fn test_empty_list() {
        let mut dd = open_with(Vec::new());
        dd.advance(Duration::ZERO);
        type_text(&mut dd, "a");
        assert_eq!(dd.focused(), None);
        assert_eq!(press(&mut dd, Key::Enter), None);
        press(&mut dd, Key::Down);
        assert_eq!(dd.focused(), None);
    }

    #[test]
    fn test_short_list_has_no_thumb() {
        let dd = fruit();
        assert!(!dd.thumb().is_needed());
    }

    #[test]
    fn test_long_list_thumb_geometry() {
        let dd = long_list();
        let metrics = dd.thumb().metrics().unwrap();
        // 201 rows of 40px plus 16px padding in a 420px container
        assert_eq!(dd.content_height(), 8056.0);
        assert_eq!(metrics.height, 24.0);
        assert_eq!(metrics.offset, 0.0);
        assert!(!dd.thumb().is_visible());
    }

    #[test]
    fn test_wheel_shows_thumb_then_hides() {
        let mut dd = long_list();
        // Opening focus lands on the first row before scrolling
        dd.advance(Duration::ZERO);
        let popup = dd.popup_bounds().unwrap();
        let wheel = Event::MouseWheel {
            delta: -200.0,
            position: popup.center(),
        };
        dd.on_event(&wheel, Bounds::default());
        assert_eq!(dd.scroll_offset(), 200.0);
        assert!(dd.thumb().is_visible());
        let expected = ((200.0_f32 / (8056.0 - 420.0)) * (420.0 - 24.0)).round();
        assert_eq!(dd.thumb().metrics().unwrap().offset, expected);

        dd.advance(Duration::from_millis(1999));
        assert!(dd.thumb().is_visible());
        dd.advance(Duration::from_millis(1));
        assert!(!dd.thumb().is_visible());
    }

    #[test]
    fn test_wheel_at_top_still_shows_thumb() {
        let mut dd = long_list();
        let popup = dd.popup_bounds().unwrap();
        let wheel = Event::MouseWheel {
            delta: 100.0,
            position: popup.center(),
        };
        dd.on_event(&wheel, Bounds::default());
        assert_eq!(dd.scroll_offset(), 0.0);
        assert!(dd.thumb().is_visible());
    }

    #[test]
    fn test_typeahead_scrolls_focus_into_view() {
        let mut dd = long_list();
        type_text(&mut dd, "zim");
        assert_eq!(dd.focused_item(), Some(&"Zimbabwe"));
        let row = dd.item_bounds(dd.focused().unwrap()).unwrap();
        let popup = dd.popup_bounds().unwrap();
        assert!(row.y >= popup.y && row.bottom() <= popup.bottom() + 0.01);
        assert!(dd.thumb().is_visible());
    }

    #[test]
    fn test_reopen_resets_transient_state() {
        let mut dd = long_list();
        type_text(&mut dd, "zim");
        assert!(dd.scroll_offset() > 0.0);
        dd.set_open(false);
        assert!(!dd.is_watching_container());
        dd.set_open(true);
        assert!(dd.is_watching_container());
        assert_eq!(dd.typeahead_query(), "");
        assert_eq!(dd.focused(), None);
        assert_eq!(dd.scroll_offset(), 0.0);
        assert!(!dd.thumb().is_visible());
        assert!(dd.thumb().is_needed());
    }

    #[test]
    fn test_close_cancels_pending_timers() {
        let mut dd = fruit();
        type_text(&mut dd, "b");
        dd.set_open(false);
        dd.set_open(true);
        type_text(&mut dd, "c");
        // The reset armed before closing must not clear the new query early
        dd.advance(Duration::from_millis(600));
        assert_eq!(dd.typeahead_query(), "c");
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut dd = fruit();
        let row = dd.item_bounds(2).unwrap();
        dd.on_event(
            &Event::MouseMoved {
                position: row.center(),
            },
            Bounds::default(),
        );
        assert_eq!(dd.hovered(), Some(2));
        dd.on_event(
            &Event::MouseMoved {
                position: Point::new(0.0, 0.0),
            },
            Bounds::default(),
        );
        assert_eq!(dd.hovered(), None);
    }

    #[test]
    fn test_draw_emits_menu_roles() {
        let mut dd = fruit().key_of(|item: &&'static str, _| item.to_lowercase());
        dd.advance(Duration::ZERO);
        let mut renderer = Renderer::new(Size::new(800.0, 600.0));
        dd.draw(&mut renderer, Bounds::default());

        let menu = renderer.node_by_id("fruit-menu").unwrap();
        assert_eq!(menu.role, Role::Menu);
        let items: Vec<_> = renderer.nodes_with_role(Role::MenuItem).collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].key.as_deref(), Some("apple"));
        assert!(items[0].state.focused);
        assert!(renderer.base_commands().is_empty());
        assert_eq!(renderer.texts(), vec!["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_draw_clips_rows_outside_popup() {
        let dd = long_list();
        let mut renderer = Renderer::new(Size::new(800.0, 600.0));
        dd.draw(&mut renderer, Bounds::default());
        assert_eq!(renderer.nodes_with_role(Role::MenuItem).count(), 201);
        // Rows 0..=10 touch the 420px viewport
        assert_eq!(renderer.texts().len(), 11);
    }
}
