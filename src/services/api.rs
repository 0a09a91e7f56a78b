use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::models::{
    energy::EnergyData,
    error::AppError,
    property::{Property, PropertyCreate},
};

// API CONFIGURATION
/// Configuration for the property backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// URL of the property collection.
    pub fn properties_url(&self) -> String {
        format!("{}/properties", self.base_url)
    }

    /// URL of a single property.
    pub fn property_url(&self, id: &str) -> String {
        format!("{}/properties/{id}", self.base_url)
    }

    /// URL of a property's energy readings.
    pub fn energy_url(&self, id: &str) -> String {
        format!("{}/properties/{id}/energy", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
        }
    }
}

// PROPERTY CLIENT
/// HTTP client for the property REST backend. Every operation issues a
/// single request; there are no retries, no caching and no request
/// deduplication.
pub struct PropertyClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PropertyClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches all properties.
    pub async fn fetch_properties(&self) -> Result<Vec<Property>, AppError> {
        self.get_json(&self.config.properties_url()).await
    }

    /// Fetches a single property by id.
    pub async fn fetch_property(&self, id: &str) -> Result<Property, AppError> {
        self.get_json(&self.config.property_url(id)).await
    }

    /// Creates a property and returns the server's record, with the
    /// server-assigned id and timestamp.
    pub async fn create_property(&self, payload: &PropertyCreate) -> Result<Property, AppError> {
        let request = self.http.post(self.config.properties_url()).json(payload);
        Self::parse_json(Self::execute(request).await?).await
    }

    /// Updates a property and returns the server's record.
    pub async fn update_property(
        &self,
        id: &str,
        payload: &PropertyCreate,
    ) -> Result<Property, AppError> {
        let request = self.http.put(self.config.property_url(id)).json(payload);
        Self::parse_json(Self::execute(request).await?).await
    }

    /// Deletes a property. The response body, if any, is discarded.
    pub async fn delete_property(&self, id: &str) -> Result<(), AppError> {
        let request = self.http.delete(self.config.property_url(id));
        Self::execute(request).await.map(|_| ())
    }

    /// Fetches the energy reading history for a property.
    pub async fn fetch_energy(&self, id: &str) -> Result<EnergyData, AppError> {
        self.get_json(&self.config.energy_url(id)).await
    }

    /// Executes a single GET and parses the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        Self::parse_json(Self::execute(self.http.get(url)).await?).await
    }

    /// Sends a request and maps transport errors and non-2xx statuses
    /// to a uniform API error. The response body text, when present,
    /// becomes the error message.
    async fn execute(request: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = request.send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        Ok(response)
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}

/// Converts a reqwest error into an appropriate `AppError`.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ApiError(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::ApiError(format!("Request error: {error}"))
    } else {
        AppError::ApiError(format!("Network error: {error}"))
    }
}

/// Creates an error from a non-2xx response. Failures are uniform; the
/// server's body text is the message when it sent one.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    if body.trim().is_empty() {
        AppError::ApiError(format!("Request failed with status {status}"))
    } else {
        AppError::ApiError(body.trim().to_string())
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches all properties using default configuration.
pub async fn fetch_properties() -> Result<Vec<Property>, AppError> {
    PropertyClient::new()?.fetch_properties().await
}

/// Fetches one property using default configuration.
pub async fn fetch_property(id: &str) -> Result<Property, AppError> {
    PropertyClient::new()?.fetch_property(id).await
}

/// Creates a property using default configuration.
pub async fn create_property(payload: &PropertyCreate) -> Result<Property, AppError> {
    PropertyClient::new()?.create_property(payload).await
}

/// Updates a property using default configuration.
pub async fn update_property(id: &str, payload: &PropertyCreate) -> Result<Property, AppError> {
    PropertyClient::new()?.update_property(id, payload).await
}

/// Deletes a property using default configuration.
pub async fn delete_property(id: &str) -> Result<(), AppError> {
    PropertyClient::new()?.delete_property(id).await
}

/// Fetches a property's energy data using default configuration.
pub async fn fetch_energy(id: &str) -> Result<EnergyData, AppError> {
    PropertyClient::new()?.fetch_energy(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.properties_url(), "http://localhost:8000/properties");
    }

    #[test]
    fn test_config_builder_custom_base() {
        let config = ApiConfig::builder().base_url("https://example.test/api").build();
        assert_eq!(
            config.properties_url(),
            "https://example.test/api/properties"
        );
    }

    #[test]
    fn test_property_url_construction() {
        let config = ApiConfig::builder().base_url("http://host").build();
        assert_eq!(config.property_url("abc-123"), "http://host/properties/abc-123");
    }

    #[test]
    fn test_energy_url_construction() {
        let config = ApiConfig::builder().base_url("http://host").build();
        assert_eq!(
            config.energy_url("abc-123"),
            "http://host/properties/abc-123/energy"
        );
    }

    #[test]
    fn test_error_for_status_uses_body_text() {
        let err = error_for_status(reqwest::StatusCode::NOT_FOUND, "Property not found");
        assert_eq!(err.to_string(), "API error: Property not found");
    }

    #[test]
    fn test_error_for_status_falls_back_to_status() {
        let err = error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(
            err.to_string(),
            "API error: Request failed with status 500 Internal Server Error"
        );
    }
}
