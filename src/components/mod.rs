pub mod energy_chart;
pub mod energy_summary;
pub mod property_form;
pub mod readings_table;
pub mod status;
pub mod type_badge;

pub use energy_chart::EnergyChart;
pub use energy_summary::EnergySummary;
pub use property_form::{PropertyForm, SubmitHandler};
pub use readings_table::ReadingsTable;
pub use status::{ErrorBanner, Spinner};
pub use type_badge::TypeBadge;
