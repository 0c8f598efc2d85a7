use crate::config::Config;
use crate::models::{
    comparison::ModelComparison,
    dashboard::{DashboardInsights, DashboardMetrics, DashboardSnapshot, DashboardTrends},
    error::AppError,
    esg::{EsgModelRow, EsgReport, EsgSummary, ReportFormat},
    recommendations::{Recommendation, RecommendationRequest, RecommendationsResponse},
    validate::Validate,
};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;

/// Every backend route the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    DashboardMetrics,
    DashboardInsights,
    DashboardTrends,
    ModelsCompare,
    EsgSummary,
    EsgModels,
    EsgDownloadCsv,
    EsgDownloadPdf,
    Recommendations,
}

impl Endpoint {
    /// Path relative to the backend origin.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::DashboardMetrics => "/api/dashboard/metrics",
            Endpoint::DashboardInsights => "/api/dashboard/insights",
            Endpoint::DashboardTrends => "/api/dashboard/trends",
            Endpoint::ModelsCompare => "/api/models/compare",
            Endpoint::EsgSummary => "/api/esg/summary",
            Endpoint::EsgModels => "/api/esg/models",
            Endpoint::EsgDownloadCsv => "/api/esg/download/csv",
            Endpoint::EsgDownloadPdf => "/api/esg/download/pdf",
            Endpoint::Recommendations => "/api/recommendations/ai",
        }
    }
}

impl From<ReportFormat> for Endpoint {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Csv => Endpoint::EsgDownloadCsv,
            ReportFormat::Pdf => Endpoint::EsgDownloadPdf,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// API CONFIGURATION
/// Configuration for the sustainability backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Absolute URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// URL the browser opens to download a report file.
    pub fn download_url(&self, format: ReportFormat) -> String {
        self.url(format.into())
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
    /// Sets a custom backend origin (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::BACKEND_ORIGIN.to_string());
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Parses a response body and runs the payload's validation.
pub fn parse_payload<T>(endpoint: Endpoint, body: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_str(body).map_err(|e| AppError::Validation {
        endpoint: endpoint.path(),
        message: e.to_string(),
    })?;

    payload
        .validate()
        .map_err(|message| AppError::Validation {
            endpoint: endpoint.path(),
            message,
        })?;

    Ok(payload)
}

// GREEN API CLIENT
/// HTTP client for the sustainability metrics backend.
pub struct GreenApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GreenApiClient {
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

    pub async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, AppError> {
        self.get(Endpoint::DashboardMetrics).await
    }

    pub async fn fetch_dashboard_insights(&self) -> Result<DashboardInsights, AppError> {
        self.get(Endpoint::DashboardInsights).await
    }

    pub async fn fetch_dashboard_trends(&self) -> Result<DashboardTrends, AppError> {
        self.get(Endpoint::DashboardTrends).await
    }

    pub async fn fetch_model_comparison(&self) -> Result<ModelComparison, AppError> {
        self.get(Endpoint::ModelsCompare).await
    }

    pub async fn fetch_esg_summary(&self) -> Result<EsgSummary, AppError> {
        self.get(Endpoint::EsgSummary).await
    }

    pub async fn fetch_esg_models(&self) -> Result<Vec<EsgModelRow>, AppError> {
        self.get(Endpoint::EsgModels).await
    }

    /// Requests AI recommendations for the fixed sample workload.
    pub async fn fetch_recommendations(&self) -> Result<Vec<Recommendation>, AppError> {
        let response: RecommendationsResponse = self
            .post(Endpoint::Recommendations, &RecommendationRequest::default())
            .await?;
        Ok(response.recommendations)
    }

    async fn get<T>(&self, endpoint: Endpoint) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let response = self
            .http
            .get(self.config.url(endpoint))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.read(endpoint, response).await
    }

    async fn post<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Validate,
    {
        let response = self
            .http
            .post(self.config.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.read(endpoint, response).await
    }

    async fn read<T>(&self, endpoint: Endpoint, response: reqwest::Response) -> Result<T, AppError>
    where
        T: DeserializeOwned + Validate,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch {
                endpoint: endpoint.path(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify_error(e))?;
        parse_payload(endpoint, &body)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(error.to_string())
        }
    }
}

// PARALLEL LOADS
/// Joins the three dashboard fetches; the first failure wins.
pub async fn join_dashboard<M, I, T>(
    metrics: M,
    insights: I,
    trends: T,
) -> Result<DashboardSnapshot, AppError>
where
    M: Future<Output = Result<DashboardMetrics, AppError>>,
    I: Future<Output = Result<DashboardInsights, AppError>>,
    T: Future<Output = Result<DashboardTrends, AppError>>,
{
    let (metrics, insights, trends) = futures::future::try_join3(metrics, insights, trends).await?;
    Ok(DashboardSnapshot {
        metrics,
        insights,
        trends,
    })
}

/// Joins the ESG summary and per-model rows.
pub async fn join_esg_report<S, M>(summary: S, models: M) -> Result<EsgReport, AppError>
where
    S: Future<Output = Result<EsgSummary, AppError>>,
    M: Future<Output = Result<Vec<EsgModelRow>, AppError>>,
{
    let (summary, models) = futures::future::try_join(summary, models).await?;
    Ok(EsgReport { summary, models })
}

// CONVENIENCE FUNCTIONS
/// Fetches one dashboard round using default configuration.
pub async fn fetch_dashboard() -> Result<DashboardSnapshot, AppError> {
    let client = GreenApiClient::new()?;
    join_dashboard(
        client.fetch_dashboard_metrics(),
        client.fetch_dashboard_insights(),
        client.fetch_dashboard_trends(),
    )
    .await
}

/// Fetches the model comparison list using default configuration.
pub async fn fetch_model_comparison() -> Result<ModelComparison, AppError> {
    GreenApiClient::new()?.fetch_model_comparison().await
}

/// Fetches the ESG summary and model rows using default configuration.
pub async fn fetch_esg_report() -> Result<EsgReport, AppError> {
    let client = GreenApiClient::new()?;
    join_esg_report(client.fetch_esg_summary(), client.fetch_esg_models()).await
}

/// Fetches recommendations using default configuration.
pub async fn fetch_recommendations() -> Result<Vec<Recommendation>, AppError> {
    GreenApiClient::new()?.fetch_recommendations().await
}
