pub mod data_state;
pub mod use_energy;
pub mod use_properties;
pub mod use_property;

pub use data_state::DataState;
pub use use_energy::use_energy;
pub use use_properties::{PropertiesHandle, use_properties};
pub use use_property::use_property;
