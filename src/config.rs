/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the property REST backend
    pub const API_BASE_URL: &'static str = "http://localhost:8000";
}
