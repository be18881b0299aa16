//! REST client for the store API.
//!
//! Every body is wrapped in `{ "data": ..., "error": { "statusCode", "message" } }`.
//! Non-2xx responses and transport failures are mapped onto [`DomainError`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::data::preferences::PreferenceStore;
use crate::domain::{DomainError, DomainResponse, ProductItem, Rating};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Product as returned by `/products`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductDto {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<RatingDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RatingDto {
    pub rate: f64,
    pub count: u32,
}

impl ProductDto {
    /// Domain item with local membership flags cleared.
    pub fn into_item(self) -> ProductItem {
        ProductItem {
            product_id: self.id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: self.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
            is_wish_listed: false,
            is_added_to_cart: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Remote operations the repositories depend on.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `POST /auth/login`, returning the session token.
    async fn login(&self, username: &str, password: &str) -> DomainResponse<String>;

    /// `GET /products`
    async fn products(&self) -> DomainResponse<Vec<ProductDto>>;

    /// `GET /products/{id}`
    async fn product(&self, id: u64) -> DomainResponse<ProductDto>;

    /// `GET /products/categories`
    async fn categories(&self) -> DomainResponse<Vec<String>>;
}

/// [`StoreApi`] over HTTP.
///
/// Attaches the stored session token as a bearer token when one exists.
pub struct HttpStoreApi {
    client: Client,
    base_url: String,
    preferences: Arc<dyn PreferenceStore>,
}

impl HttpStoreApi {
    pub fn new(
        config: &ApiConfig,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            preferences,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.preferences.session_token().await {
            Ok(Some(token)) if !token.is_empty() => builder.bearer_auth(token),
            Ok(_) => builder,
            Err(err) => {
                tracing::warn!(error = %err, "Could not read session token");
                builder
            }
        }
    }

    async fn send<T: DeserializeOwned + Send>(&self, builder: RequestBuilder) -> DomainResponse<T> {
        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .and_then(|error| error.message);
            let err = DomainError::from_status(status.as_u16(), message);
            tracing::debug!(status = status.as_u16(), error_type = err.error_type(), "API error");
            return Err(err);
        }

        let envelope: Envelope<T> = serde_json::from_slice(&body)
            .map_err(|e| DomainError::generic(format!("Malformed response body: {}", e)))?;

        if let Some(error) = envelope.error {
            return Err(DomainError::from_status(
                error.status_code.unwrap_or(status.as_u16()),
                error.message,
            ));
        }

        envelope
            .data
            .ok_or_else(|| DomainError::generic("Response carried no data"))
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn login(&self, username: &str, password: &str) -> DomainResponse<String> {
        let builder = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { username, password });
        let response: LoginResponse = self.send(builder).await?;
        Ok(response.token)
    }

    async fn products(&self) -> DomainResponse<Vec<ProductDto>> {
        let builder = self.authorized(self.client.get(self.url("/products"))).await;
        self.send(builder).await
    }

    async fn product(&self, id: u64) -> DomainResponse<ProductDto> {
        let builder = self
            .authorized(self.client.get(self.url(&format!("/products/{}", id))))
            .await;
        self.send(builder).await
    }

    async fn categories(&self) -> DomainResponse<Vec<String>> {
        let builder = self
            .authorized(self.client.get(self.url("/products/categories")))
            .await;
        self.send(builder).await
    }
}

/// Connect failures (including unknown hosts) and timeouts mean no network.
fn map_transport_error(err: reqwest::Error) -> DomainError {
    if err.is_connect() || err.is_timeout() {
        tracing::debug!(error = %err, "Transport failure");
        return DomainError::Network;
    }
    if let Some(status) = err.status() {
        return DomainError::from_status(status.as_u16(), None);
    }
    DomainError::generic(err.to_string())
}
