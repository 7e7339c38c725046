//! Widget implementations

mod config;
mod countries;
mod country_select;
mod dropdown;
pub mod scrollbar;

pub use config::{DropdownConfig, FieldConfig};
pub use countries::COUNTRIES;
pub use country_select::{country_select, CountrySelect};
pub use dropdown::{attached_dropdown, AttachedDropdown, FocusRequest};
pub use scrollbar::ThumbMetrics;
