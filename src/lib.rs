//! Country picker: a headless form hosting a single country select.
//!
//! The form is driven by key scripts (see [`script`]) and reports its
//! accessibility tree after every script line.

pub mod config;
pub mod error;
pub mod form;
pub mod script;
pub mod session;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use error::AppError;
pub use form::{CountryForm, Message};
pub use script::{ScriptError, ScriptParser, Step};
pub use session::{Session, run};
