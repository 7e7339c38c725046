//! The form application: a single country field.

use picker_ui::{Application, CountrySelect, Widget};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CountryChanged(String),
}

/// Form state. The selected country is owned here and pushed back into the
/// field after every change.
pub struct CountryForm {
    country: String,
    select: CountrySelect<Message>,
}

impl CountryForm {
    pub fn new(config: &AppConfig) -> Self {
        let field = &config.field;
        let mut select = CountrySelect::new(field.value.as_str())
            .id(field.id.as_str())
            .label(field.label.as_str())
            .hint(field.hint.as_str())
            .placeholder(field.placeholder.as_str())
            .disabled(field.disabled)
            .dropdown_config(config.timing.dropdown_config())
            .on_change(Message::CountryChanged);
        select.set_info_message(field.info_message.clone());

        Self {
            country: field.value.clone(),
            select,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn select(&self) -> &CountrySelect<Message> {
        &self.select
    }
}

impl Application for CountryForm {
    type Message = Message;

    fn title(&self) -> String {
        "Country picker".to_string()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::CountryChanged(country) => {
                log::info!("Country changed to {}", country);
                self.select.set_value(country.as_str());
                self.country = country;
            }
        }
    }

    fn root(&self) -> &dyn Widget<Message> {
        &self.select
    }

    fn root_mut(&mut self) -> &mut dyn Widget<Message> {
        &mut self.select
    }
}
