use crate::config::Config;
use crate::models::{
    chat::{ChatAnswer, ChatReply, ChatRequest},
    error::AppError,
    guides::Guide,
    market::{PriceQuote, Prediction},
    weather::WeatherReading,
};
use reqwest::Url;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

// API CONFIGURATION
/// Configuration for the AgriSmartAI backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    prediction_days: u32,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Builds a config from the runtime environment (see [`Config::api_base`]).
    pub fn from_environment() -> Self {
        Self::builder().base_url(Config::api_base()).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn prediction_days(&self) -> u32 {
        self.prediction_days
    }

    /// `GET {base}/weather?city=...`
    pub fn weather_url(&self, city: &str) -> Result<Url, AppError> {
        self.endpoint("weather", &[("city", city)])
    }

    /// `GET {base}/market/prices?crop=...`
    pub fn prices_url(&self, crop: &str) -> Result<Url, AppError> {
        self.endpoint("market/prices", &[("crop", crop)])
    }

    /// `GET {base}/market/predict?crop=...&days=...`
    pub fn predict_url(&self, crop: &str, days: u32) -> Result<Url, AppError> {
        let days = days.to_string();
        self.endpoint("market/predict", &[("crop", crop), ("days", days.as_str())])
    }

    /// `GET {base}/guides?topic=...`
    pub fn guides_url(&self, topic: &str) -> Result<Url, AppError> {
        self.endpoint("guides", &[("topic", topic)])
    }

    /// `POST {base}/chat`
    pub fn chat_url(&self) -> Result<Url, AppError> {
        self.endpoint("chat", &[])
    }

    /// `GET {base}/health`
    pub fn health_url(&self) -> Result<Url, AppError> {
        self.endpoint("health", &[])
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, AppError> {
        let raw = format!("{}/{path}", self.base_url.trim_end_matches('/'));
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };

        parsed.map_err(|e| AppError::ConfigError(format!("Invalid API URL '{raw}': {e}")))
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
    prediction_days: Option<u32>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL, including the `/api` prefix.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the prediction horizon in days.
    pub fn prediction_days(mut self, days: u32) -> Self {
        self.prediction_days = Some(days);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::DEFAULT_API_BASE.to_string()),
            prediction_days: self.prediction_days.unwrap_or(Config::PREDICTION_DAYS),
        }
    }
}

// API RESPONSE TYPES
/// The backend reports some failures in-band as `{"error": ...}` with a
/// success status; those bodies must not be read as data.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ApiEnvelope<T> {
    Failure {
        error: String,
        #[serde(default)]
        details: Option<String>,
    },
    Success(T),
}

impl<T> ApiEnvelope<T> {
    fn into_result(self) -> Result<T, AppError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure {
                error,
                details: Some(details),
            } => Err(AppError::BackendError(format!("{error}: {details}"))),
            Self::Failure { error, .. } => Err(AppError::BackendError(error)),
        }
    }
}

/// Body of `GET /api/health`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

// AGRISMART CLIENT
/// HTTP client for the AgriSmartAI backend.
pub struct AgriClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AgriClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a client pointed at the base URL resolved from the environment.
    pub fn from_environment() -> Result<Self, AppError> {
        let config = ApiConfig::from_environment();
        gloo::console::log!(format!("AgriSmartAI API base: {}", config.base_url()));
        Self::with_config(config)
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

    /// Fetches current weather for a city.
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, AppError> {
        let url = self.config.weather_url(city)?;
        self.get(url).await
    }

    /// Fetches the latest price quote for a crop.
    pub async fn fetch_market_prices(&self, crop: &str) -> Result<PriceQuote, AppError> {
        let url = self.config.prices_url(crop)?;
        let quote: PriceQuote = self.get(url).await?;
        quote.require_price(crop)
    }

    /// Fetches a price prediction `days` ahead for a crop.
    pub async fn predict_market(&self, crop: &str, days: u32) -> Result<Prediction, AppError> {
        let url = self.config.predict_url(crop, days)?;
        let prediction: Prediction = self.get(url).await?;
        prediction.require_price(crop)
    }

    /// Fetches backend guides whose topic contains `topic`.
    pub async fn fetch_guides(&self, topic: &str) -> Result<Vec<Guide>, AppError> {
        let url = self.config.guides_url(topic)?;
        self.get(url).await
    }

    /// Sends a query to the assistant.
    pub async fn chat(&self, query: &str) -> Result<ChatAnswer, AppError> {
        let url = self.config.chat_url()?;
        let request = ChatRequest {
            query: query.to_string(),
        };

        let reply: ChatReply = self.post(url, &request).await?;
        Ok(reply.into())
    }

    /// Checks that the backend is up.
    pub async fn health(&self) -> Result<HealthStatus, AppError> {
        let url = self.config.health_url()?;
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.read_body(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.read_body(response).await
    }

    /// Checks the status and unwraps the response envelope.
    async fn read_body<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(self.error_for_status(status, &body));
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        envelope.into_result()
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches weather using the environment's configuration.
pub async fn fetch_weather(city: String) -> Result<WeatherReading, AppError> {
    AgriClient::from_environment()?.fetch_weather(&city).await
}

/// Fetches the latest price quote for a crop.
pub async fn fetch_market_prices(crop: String) -> Result<PriceQuote, AppError> {
    AgriClient::from_environment()?
        .fetch_market_prices(&crop)
        .await
}

/// Fetches the configured-horizon prediction for a crop.
pub async fn predict_market(crop: String) -> Result<Prediction, AppError> {
    let client = AgriClient::from_environment()?;
    let days = client.config().prediction_days();
    client.predict_market(&crop, days).await
}

/// Fetches guides from the backend.
pub async fn fetch_guides(topic: String) -> Result<Vec<Guide>, AppError> {
    AgriClient::from_environment()?.fetch_guides(&topic).await
}

/// Asks the assistant a question.
pub async fn ask_assistant(query: String) -> Result<ChatAnswer, AppError> {
    AgriClient::from_environment()?.chat(&query).await
}
