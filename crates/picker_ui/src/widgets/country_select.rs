//! Country select field
//!
//! A labelled, read-only field that opens an [`AttachedDropdown`] of
//! [`COUNTRIES`] below itself. The field owns the open flag and reports the
//! chosen country through `on_change`; the value itself stays with the
//! application, which feeds it back with [`CountrySelect::set_value`].

use std::time::Duration;

use log::debug;

use crate::callback::Callback;
use crate::constants::{line_height, text_width, DEFAULT_FIELD_WIDTH};
use crate::event::{Event, Key, MouseButton};
use crate::layout::{Bounds, Point, Size};
use crate::renderer::{AccessNode, AccessState, Radii, Renderer, Role};
use crate::state::ScrollThumb;
use crate::theme::colors;
use crate::widget::Widget;
use crate::widgets::config::{DropdownConfig, FieldConfig};
use crate::widgets::countries::COUNTRIES;
use crate::widgets::dropdown::{AttachedDropdown, FocusRequest};

const DEFAULT_LABEL: &str = "Country";
const DEFAULT_HINT: &str = "You must select your country first before entering the state";
const DEFAULT_ID: &str = "country-select";

/// What the inner menu asks the field to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Picked(&'static str),
    Dismissed,
}

/// A country picker field.
pub struct CountrySelect<M> {
    value: String,
    label: String,
    hint: String,
    placeholder: String,
    disabled: bool,
    id: String,
    info_message: Option<String>,
    on_change: Callback<String, M>,
    width: Option<f32>,
    config: FieldConfig,

    is_open: bool,
    field_focused: bool,
    field_hovered: bool,
    /// Field bounds from the last arrange pass
    field: Option<Bounds>,
    dropdown: AttachedDropdown<&'static str, Choice>,
}

impl<M> CountrySelect<M> {
    /// Create a country select showing `value` (empty for no selection).
    pub fn new(value: impl Into<String>) -> Self {
        let dropdown = AttachedDropdown::new(COUNTRIES.to_vec())
            .key_of(|name: &&'static str, _| name.to_string())
            .on_select(Choice::Picked)
            .on_close(|| Choice::Dismissed)
            .id(format!("{DEFAULT_ID}-menu"));
        let mut select = Self {
            value: String::new(),
            label: DEFAULT_LABEL.to_string(),
            hint: DEFAULT_HINT.to_string(),
            placeholder: String::new(),
            disabled: false,
            id: DEFAULT_ID.to_string(),
            info_message: None,
            on_change: Callback::none(),
            width: None,
            config: FieldConfig::default(),
            is_open: false,
            field_focused: false,
            field_hovered: false,
            field: None,
            dropdown,
        };
        select.set_value(value);
        select
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Base id; the label, helper and menu ids derive from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.dropdown.set_id(self.menu_id());
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    builder_field!(disabled, bool);
    builder_text_option!(info_message);
    builder_field!(config, FieldConfig);
    callback_setter!(on_change, String);

    pub fn dropdown_config(mut self, config: DropdownConfig) -> Self {
        self.dropdown = self.dropdown.config(config);
        self
    }

    // =========================================================================
    // Controlled state
    // =========================================================================

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Show a new value and mark it selected in the menu.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        let current = self.value.clone();
        self.dropdown
            .set_is_selected(move |name: &&'static str| *name == current);
    }

    pub fn set_info_message(&mut self, message: Option<String>) {
        self.info_message = message;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.set_open(false);
            self.field_focused = false;
        }
    }

    /// Give keyboard focus to the field.
    pub fn focus(&mut self) {
        if !self.disabled {
            self.field_focused = true;
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_field_focused(&self) -> bool {
        self.field_focused
    }

    pub fn field_bounds(&self) -> Option<Bounds> {
        self.field
    }

    pub fn label_id(&self) -> String {
        format!("{}-label", self.id)
    }

    pub fn helper_id(&self) -> String {
        format!("{}-helper", self.id)
    }

    pub fn menu_id(&self) -> String {
        format!("{}-menu", self.id)
    }

    /// Country holding keyboard focus inside the open menu.
    pub fn focused_country(&self) -> Option<&'static str> {
        self.dropdown.focused_item().copied()
    }

    pub fn typeahead_query(&self) -> &str {
        self.dropdown.typeahead_query()
    }

    pub fn menu_scroll_offset(&self) -> f32 {
        self.dropdown.scroll_offset()
    }

    pub fn menu_thumb(&self) -> &ScrollThumb {
        self.dropdown.thumb()
    }

    pub fn menu_bounds(&self) -> Option<Bounds> {
        self.dropdown.popup_bounds()
    }

    /// Screen bounds of a country row in the open menu.
    pub fn country_bounds(&self, name: &str) -> Option<Bounds> {
        let index = COUNTRIES.iter().position(|c| *c == name)?;
        self.dropdown.item_bounds(index)
    }

    pub fn is_watching_menu(&self) -> bool {
        self.dropdown.is_watching_container()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn set_open(&mut self, open: bool) {
        self.is_open = open;
        self.dropdown.set_open(open);
    }

    fn field_rect(&self, bounds: Bounds) -> Bounds {
        let top = bounds.y + line_height(self.config.font_size) + self.config.label_gap;
        Bounds::new(bounds.x, top, bounds.width, self.config.height)
    }

    fn apply(&mut self, choice: Choice) -> Option<M> {
        match choice {
            Choice::Picked(name) => {
                debug!("{}: picked {name}", self.id);
                self.set_open(false);
                self.field_focused = true;
                self.on_change.call(name.to_string())
            }
            Choice::Dismissed => {
                self.set_open(false);
                None
            }
        }
    }
}

impl<M> Widget<M> for CountrySelect<M> {
    fn layout(&mut self, available: Size) -> Size {
        let config = &self.config;
        let width = self.width.unwrap_or(if available.width.is_finite() {
            available.width
        } else {
            DEFAULT_FIELD_WIDTH
        });
        let mut height = line_height(config.font_size) + config.label_gap + config.height;
        if self.info_message.is_some() {
            height += config.helper_gap + line_height(config.helper_font_size);
        }
        self.dropdown.layout(available);
        Size::new(width, height)
    }

    fn arrange(&mut self, bounds: Bounds) {
        let field = self.field_rect(bounds);
        self.field = Some(field);
        self.dropdown.observe_anchor(Some(field));
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let config = &self.config;
        let font = config.font_size;
        let field = self.field.unwrap_or_else(|| self.field_rect(bounds));

        // Label line: bold label, secondary hint in parentheses
        let label_text = if self.disabled {
            colors::TEXT_DISABLED
        } else {
            colors::TEXT_PRIMARY
        };
        renderer.draw_bold_text(&self.label, Point::new(bounds.x, bounds.y), label_text, font);
        let hint_x = bounds.x + text_width(&self.label, font) + text_width(" ", font);
        renderer.draw_text(
            &format!("({})", self.hint),
            Point::new(hint_x, bounds.y),
            colors::TEXT_SECONDARY,
            font,
        );
        renderer.push_node(
            AccessNode::new(
                Role::Label,
                format!("{} ({})", self.label, self.hint),
                Bounds::new(bounds.x, bounds.y, bounds.width, line_height(font)),
            )
            .id(self.label_id()),
        );

        // Square bottom corners while the menu hangs off the field
        let radii = if self.is_open {
            Radii::top(config.corner_radius)
        } else {
            Radii::all(config.corner_radius)
        };
        let background = if self.disabled {
            colors::FIELD_BG_DISABLED
        } else {
            colors::FIELD_BG
        };
        renderer.fill_rounded_rect(field, background, radii);
        let (border, border_width) = if self.disabled {
            (colors::FIELD_BORDER, 1.0)
        } else if self.field_focused {
            (colors::ACCENT, 2.0)
        } else if self.field_hovered {
            (colors::FIELD_BORDER_HOVER, 1.0)
        } else {
            (colors::FIELD_BORDER, 1.0)
        };
        renderer.stroke_rounded_rect(field, border, border_width, radii);

        let text_pos = Point::new(
            field.x + config.padding_left,
            field.y + (field.height - line_height(font)) / 2.0,
        );
        if self.value.is_empty() {
            if !self.placeholder.is_empty() {
                renderer.draw_text(&self.placeholder, text_pos, colors::TEXT_PLACEHOLDER, font);
            }
        } else {
            let color = if self.disabled {
                colors::TEXT_DISABLED
            } else {
                colors::TEXT_PRIMARY
            };
            renderer.draw_text(&self.value, text_pos, color, font);
        }

        // Chevron points right when closed, up when open
        let chevron = Point::new(
            field.right() - config.chevron_inset - config.chevron_size / 2.0,
            field.center().y,
        );
        let rotation = if self.is_open { -90.0 } else { 0.0 };
        let chevron_color = if self.disabled {
            colors::TEXT_DISABLED
        } else {
            colors::ACCENT
        };
        renderer.draw_chevron(chevron, config.chevron_size, rotation, chevron_color);

        let shown = if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        };
        renderer.push_node(
            AccessNode::new(Role::Button, shown.as_str(), field)
                .id(self.id.clone())
                .has_popup(Role::Menu)
                .labelled_by(self.label_id())
                .described_by(self.info_message.as_ref().map(|_| self.helper_id()))
                .state(AccessState {
                    focused: self.field_focused,
                    expanded: self.is_open,
                    disabled: self.disabled,
                    ..AccessState::default()
                }),
        );

        if let Some(message) = &self.info_message {
            let helper = Bounds::new(
                bounds.x,
                field.bottom() + config.helper_gap,
                bounds.width,
                line_height(config.helper_font_size),
            );
            renderer.draw_text(
                message,
                Point::new(helper.x, helper.y),
                colors::ERROR,
                config.helper_font_size,
            );
            renderer.push_node(AccessNode::new(Role::Text, message.as_str(), helper).id(self.helper_id()));
        }

        self.dropdown.draw(renderer, bounds);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        if self.disabled {
            return None;
        }
        let field = self.field?;

        match event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } if field.contains(*position) => {
                self.field_focused = true;
                self.set_open(!self.is_open);
                return None;
            }
            Event::MouseMoved { position } => {
                self.field_hovered = field.contains(*position);
            }
            _ => {}
        }

        if self.is_open {
            if let Event::KeyPressed {
                key: Key::Escape, ..
            } = event
            {
                self.set_open(false);
                self.field_focused = true;
                return None;
            }
            let choice = self.dropdown.on_event(event, bounds)?;
            return self.apply(choice);
        }

        match event {
            Event::KeyPressed {
                key: Key::Down | Key::Enter | Key::Space,
                ..
            } if self.field_focused => {
                debug!("{}: opened from keyboard", self.id);
                self.set_open(true);
                self.dropdown.request_focus(FocusRequest::First);
            }
            Event::MousePressed { .. } => {
                // Pressing anywhere else moves focus away from the field
                self.field_focused = false;
            }
            _ => {}
        }
        None
    }

    fn advance(&mut self, elapsed: Duration) -> Option<M> {
        let choice = self.dropdown.advance(elapsed);
        if self.is_open && self.dropdown.focused().is_some() {
            // Focus has moved into the menu
            self.field_focused = false;
        }
        choice.and_then(|c| self.apply(c))
    }
}

/// Helper function to create a country select.
pub fn country_select<M>(value: impl Into<String>) -> CountrySelect<M> {
    CountrySelect::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Changed(String),
    }

    fn arranged(mut select: CountrySelect<Msg>) -> (CountrySelect<Msg>, Bounds) {
        let size = select.layout(Size::new(400.0, 600.0));
        let bounds = Bounds::from_size(size);
        select.arrange(bounds);
        (select, bounds)
    }

    fn form(value: &str) -> (CountrySelect<Msg>, Bounds) {
        arranged(CountrySelect::new(value).on_change(Msg::Changed))
    }

    fn send(select: &mut CountrySelect<Msg>, bounds: Bounds, event: Event) -> Option<Msg> {
        let msg = select.on_event(&event, bounds);
        select.advance(Duration::ZERO);
        msg
    }

    fn tap(select: &mut CountrySelect<Msg>, bounds: Bounds, key: Key) -> Option<Msg> {
        let pressed = send(select, bounds, Event::key_pressed(key));
        let released = send(select, bounds, Event::key_released(key));
        pressed.or(released)
    }

    fn type_text(select: &mut CountrySelect<Msg>, bounds: Bounds, text: &str) {
        for c in text.chars() {
            let key = if c == ' ' { Key::Space } else { Key::Char(c) };
            assert_eq!(tap(select, bounds, key), None);
        }
    }

    fn click_field(select: &mut CountrySelect<Msg>, bounds: Bounds) -> Option<Msg> {
        let center = select.field_bounds().unwrap().center();
        send(select, bounds, Event::left_press(center.x, center.y))
    }

    fn render(select: &CountrySelect<Msg>, bounds: Bounds) -> Renderer {
        let mut renderer = Renderer::new(Size::new(800.0, 600.0));
        select.draw(&mut renderer, bounds);
        renderer
    }

    #[test]
    fn test_defaults_and_derived_ids() {
        let select: CountrySelect<Msg> = CountrySelect::new("");
        assert_eq!(select.label, "Country");
        assert_eq!(
            select.hint,
            "You must select your country first before entering the state"
        );
        assert_eq!(select.label_id(), "country-select-label");
        assert_eq!(select.helper_id(), "country-select-helper");
        assert_eq!(select.menu_id(), "country-select-menu");

        let custom: CountrySelect<Msg> = CountrySelect::new("").id("home");
        assert_eq!(custom.menu_id(), "home-menu");
        assert_eq!(custom.dropdown.menu_id(), Some("home-menu"));
    }

    #[test]
    fn test_click_toggles_menu() {
        let (mut select, bounds) = form("");
        click_field(&mut select, bounds);
        assert!(select.is_open());
        assert_eq!(select.focused_country(), Some("Afghanistan"));

        click_field(&mut select, bounds);
        assert!(!select.is_open());
        assert!(select.is_field_focused());
    }

    #[test]
    fn test_click_open_focuses_current_value() {
        let (mut select, bounds) = form("Chad");
        click_field(&mut select, bounds);
        assert_eq!(select.focused_country(), Some("Chad"));
    }

    #[test]
    fn test_menu_hangs_below_field() {
        let (mut select, bounds) = form("");
        click_field(&mut select, bounds);
        let field = select.field_bounds().unwrap();
        let menu = select.menu_bounds().unwrap();
        assert_eq!(menu.y, field.bottom());
        assert_eq!(menu.x, field.x);
        assert_eq!(menu.width, field.width);
    }

    #[test]
    fn test_arrow_down_opens_on_first_country() {
        let (mut select, bounds) = form("Chad");
        select.focus();
        send(&mut select, bounds, Event::key_pressed(Key::Down));
        assert!(select.is_open());
        assert_eq!(select.focused_country(), Some("Afghanistan"));
        assert!(!select.is_field_focused());
    }

    #[test]
    fn test_space_opens_without_selecting() {
        let (mut select, bounds) = form("");
        select.focus();
        assert_eq!(tap(&mut select, bounds, Key::Space), None);
        assert!(select.is_open());
        assert_eq!(select.focused_country(), Some("Afghanistan"));
        assert_eq!(select.typeahead_query(), "");
    }

    #[test]
    fn test_space_held_while_typing_never_selects() {
        let (mut select, bounds) = form("");
        select.focus();
        assert_eq!(send(&mut select, bounds, Event::key_pressed(Key::Space)), None);
        assert!(select.is_open());
        assert_eq!(send(&mut select, bounds, Event::key_pressed(Key::Char('a'))), None);
        assert_eq!(select.focused_country(), Some("Afghanistan"));

        assert_eq!(send(&mut select, bounds, Event::key_released(Key::Space)), None);
        assert!(select.is_open());
        assert_eq!(select.value(), "");
    }

    #[test]
    fn test_keys_ignored_without_field_focus() {
        let (mut select, bounds) = form("");
        send(&mut select, bounds, Event::key_pressed(Key::Enter));
        assert!(!select.is_open());
    }

    #[test]
    fn test_typeahead_and_enter_selects() {
        let (mut select, bounds) = form("");
        select.focus();
        tap(&mut select, bounds, Key::Enter);
        type_text(&mut select, bounds, "can");
        assert_eq!(select.focused_country(), Some("Canada"));

        let msg = tap(&mut select, bounds, Key::Enter);
        assert_eq!(msg, Some(Msg::Changed("Canada".to_string())));
        assert!(!select.is_open());
        assert!(select.is_field_focused());
    }

    #[test]
    fn test_multi_word_typeahead() {
        let (mut select, bounds) = form("");
        click_field(&mut select, bounds);
        type_text(&mut select, bounds, "united s");
        assert!(select.is_open());
        assert_eq!(select.focused_country(), Some("United States"));
        assert_eq!(
            tap(&mut select, bounds, Key::Enter),
            Some(Msg::Changed("United States".to_string()))
        );
    }

    #[test]
    fn test_click_item_after_space_selects() {
        let (mut select, bounds) = form("");
        click_field(&mut select, bounds);
        type_text(&mut select, bounds, "a ");
        let row = select.country_bounds("Albania").unwrap();
        let msg = send(&mut select, bounds, Event::left_press(row.x + 10.0, row.y + 10.0));
        assert_eq!(msg, Some(Msg::Changed("Albania".to_string())));
    }

    #[test]
    fn test_escape_closes_and_refocuses_field() {
        let (mut select, bounds) = form("");
        click_field(&mut select, bounds);
        assert!(!select.is_field_focused());
        send(&mut select, bounds, Event::key_pressed(Key::Escape));
        assert!(!select.is_open());
        assert!(select.is_field_focused());
        assert!(!select.is_watching_menu());
    }

    #[test]
    fn test_outside_press_closes() {
        let (mut select, bounds) = form("");
        click_field(&mut select, bounds);
        let msg = send(&mut select, bounds, Event::left_press(790.0, 590.0));
        assert_eq!(msg, None);
        assert!(!select.is_open());
    }

    #[test]
    fn test_disabled_ignores_input() {
        let (mut select, bounds) = arranged(CountrySelect::new("").disabled(true));
        click_field(&mut select, bounds);
        assert!(!select.is_open());
        select.focus();
        assert!(!select.is_field_focused());
    }

    #[test]
    fn test_reopen_starts_fresh() {
        let (mut select, bounds) = form("");
        click_field(&mut select, bounds);
        type_text(&mut select, bounds, "zim");
        assert!(select.menu_scroll_offset() > 0.0);
        click_field(&mut select, bounds);
        click_field(&mut select, bounds);
        assert_eq!(select.typeahead_query(), "");
        assert_eq!(select.menu_scroll_offset(), 0.0);
        assert!(!select.menu_thumb().is_visible());
    }

    #[test]
    fn test_button_node_reflects_state() {
        let (mut select, bounds) = form("");
        let closed = render(&select, bounds);
        let button = closed.node_by_id("country-select").unwrap();
        assert_eq!(button.role, Role::Button);
        assert_eq!(button.has_popup, Some(Role::Menu));
        assert_eq!(button.labelled_by.as_deref(), Some("country-select-label"));
        assert_eq!(button.described_by, None);
        assert!(!button.state.expanded);

        click_field(&mut select, bounds);
        let open = render(&select, bounds);
        assert!(open.node_by_id("country-select").unwrap().state.expanded);
        assert!(open.node_by_id("country-select-menu").is_some());
        let selected: Vec<_> = open
            .nodes_with_role(Role::MenuItem)
            .filter(|n| n.state.focused)
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Afghanistan"]);
    }

    #[test]
    fn test_chevron_rotates_when_open() {
        let (mut select, bounds) = form("");
        let rotation = |r: &Renderer| {
            r.commands().find_map(|c| match c {
                DrawCommand::Chevron { rotation, .. } => Some(*rotation),
                _ => None,
            })
        };
        assert_eq!(rotation(&render(&select, bounds)), Some(0.0));
        click_field(&mut select, bounds);
        assert_eq!(rotation(&render(&select, bounds)), Some(-90.0));
    }

    #[test]
    fn test_info_message_describes_field() {
        let (select, bounds) = arranged(
            CountrySelect::<Msg>::new("")
                .placeholder("Pick one")
                .info_message("Required"),
        );
        assert!(bounds.height > 61.2);
        let renderer = render(&select, bounds);
        let button = renderer.node_by_id("country-select").unwrap();
        assert_eq!(button.described_by.as_deref(), Some("country-select-helper"));
        assert_eq!(button.label, "Pick one");
        assert_eq!(
            renderer.node_by_id("country-select-helper").map(|n| n.label.as_str()),
            Some("Required")
        );
        assert!(renderer.texts().contains(&"Pick one"));
    }

    #[test]
    fn test_set_value_marks_selection() {
        let (mut select, bounds) = form("");
        select.set_value("Chile");
        click_field(&mut select, bounds);
        let renderer = render(&select, bounds);
        let selected: Vec<_> = renderer
            .nodes_with_role(Role::MenuItem)
            .filter(|n| n.state.selected)
            .map(|n| n.key.clone())
            .collect();
        assert_eq!(selected, vec![Some("Chile".to_string())]);
    }
}
