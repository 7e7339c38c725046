//! Macros for reducing boilerplate in widget implementations.

/// Generates a builder-style setter method for a field.
///
/// # Usage
///
/// ```ignore
/// // When method name matches field name:
/// builder_field!(disabled, bool);
/// // Generates: pub fn disabled(mut self, value: bool) -> Self { self.disabled = value; self }
///
/// // When method name differs from field name:
/// builder_field!(max_popup_height, max_height, f32);
/// ```
macro_rules! builder_field {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    ($method:ident, $field:ident, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$field = value;
            self
        }
    };
}

/// Generates a builder-style setter for an `Option<String>` field that
/// accepts anything convertible into a `String`.
///
/// ```ignore
/// builder_text_option!(id);
/// // Generates: pub fn id(mut self, value: impl Into<String>) -> Self { self.id = Some(value.into()); self }
/// ```
macro_rules! builder_text_option {
    ($name:ident) => {
        pub fn $name(mut self, value: impl Into<String>) -> Self {
            self.$name = Some(value.into());
            self
        }
    };
}

/// Generates a callback setter method for widgets whose message type
/// parameter is named `M` and whose handler field is a [`Callback`](crate::Callback).
///
/// # Usage
///
/// ```ignore
/// // For callbacks with no parameters:
/// callback_setter!(on_close);
/// // Generates: pub fn on_close<F>(mut self, f: F) -> Self where F: Fn() -> M + 'static
///
/// // For callbacks with a parameter:
/// callback_setter!(on_change, String);
/// // Generates: pub fn on_change<F>(mut self, f: F) -> Self where F: Fn(String) -> M + 'static
/// ```
macro_rules! callback_setter {
    ($name:ident) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn() -> M + 'static,
        {
            self.$name = $crate::callback::Callback::new(move |()| f());
            self
        }
    };
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> M + 'static,
        {
            self.$name = $crate::callback::Callback::new(f);
            self
        }
    };
}
