//! CryptoPro backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use super::dto::{ErrorResponse, HealthResponse, TradeResponse};
use crate::domain::entities::{
    Account, PriceMap, TelegramId, TradeOutcome, TradeRequest, TradeSide, Transaction,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::PortfolioPort;

const USER_AGENT: &str = concat!("cryptopro/", env!("CARGO_PKG_VERSION"));
const REQUEST_ID_HEADER: &str = "x-request-id";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the CryptoPro API.
pub struct PortfolioClient {
    client: Client,
    base_url: String,
}

impl PortfolioClient {
    /// Creates client with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates client with a request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach CryptoPro API");
            if e.is_timeout() {
                ApiError::Timeout
            } else if e.is_connect() {
                ApiError::network("failed to connect to server")
            } else {
                ApiError::network(e.to_string())
            }
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse response");
            ApiError::invalid_response(e.to_string())
        })
    }

    async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {status}"),
        };
        ApiError::rejected(status.as_u16(), message)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.endpoint(path))).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        Self::decode(response).await
    }

    const fn trade_path(side: TradeSide) -> &'static str {
        match side {
            TradeSide::Buy => "/api/buy",
            TradeSide::Sell => "/api/sell",
        }
    }
}

#[async_trait]
impl PortfolioPort for PortfolioClient {
    async fn fetch_account(&self, telegram_id: TelegramId) -> Result<Account, ApiError> {
        debug!(telegram_id = %telegram_id, "GET user");

        match self.get_json(&format!("/api/user/{telegram_id}")).await {
            Err(ApiError::Rejected { status: 404, .. }) => {
                Err(ApiError::UserNotFound { telegram_id })
            }
            other => other,
        }
    }

    async fn fetch_prices(&self) -> Result<PriceMap, ApiError> {
        debug!("GET prices");
        self.get_json("/api/prices").await
    }

    async fn submit_trade(&self, request: &TradeRequest) -> Result<TradeOutcome, ApiError> {
        let request_id = Uuid::new_v4();
        debug!(request_id = %request_id, side = %request.side, "POST trade");

        let response = self
            .send(
                self.client
                    .post(self.endpoint(Self::trade_path(request.side)))
                    .header(REQUEST_ID_HEADER, request_id.to_string())
                    .json(request),
            )
            .await?;

        let status = response.status();
        let body: TradeResponse = match Self::decode(response).await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                let message = format!("HTTP {status}");
                return Err(ApiError::rejected(status.as_u16(), message));
            }
            Err(e) => return Err(e),
        };

        body.into_outcome(request.side)
            .map_err(|reason| ApiError::rejected(status.as_u16(), reason))
    }

    async fn fetch_transactions(
        &self,
        telegram_id: TelegramId,
    ) -> Result<Vec<Transaction>, ApiError> {
        debug!(telegram_id = %telegram_id, "GET transactions");

        match self
            .get_json(&format!("/api/transactions/{telegram_id}"))
            .await
        {
            Err(ApiError::Rejected { status: 404, .. }) => {
                Err(ApiError::UserNotFound { telegram_id })
            }
            other => other,
        }
    }

    async fn health_check(&self) -> Result<(), ApiError> {
        let health: HealthResponse = self.get_json("/health").await?;
        if health.status == "ok" {
            Ok(())
        } else {
            Err(ApiError::unexpected(format!(
                "server reported status {}",
                health.status
            )))
        }
    }
}
