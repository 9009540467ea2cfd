//! HTTP client for the order service
//!
//! Sends the order form as JSON to `POST /api/order` and maps the reply
//! (success or failure, both carrying a `message`) into typed results.

use crate::state::OrderRequest;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default order endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9009/api/order";

/// Errors that can occur when placing an order
#[derive(Debug, Error)]
pub enum OrderClientError {
    /// The request never produced a response
    #[error("Could not reach the order service: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the order with a message
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The service replied without the expected `message` field
    #[error("Unexpected response from the order service ({status}): {body}")]
    MalformedResponse { status: u16, body: String },
}

/// Body returned by the order service on success and on failure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderResponse {
    pub message: String,
}

/// Client for the order service
#[derive(Debug, Clone)]
pub struct OrderClient {
    client: Client,
    endpoint: String,
}

impl OrderClient {
    /// Create a new client. Without a timeout the reqwest default applies.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, OrderClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Place an order. Single attempt, no retry.
    pub async fn place_order(
        &self,
        order: &OrderRequest,
    ) -> Result<OrderResponse, OrderClientError> {
        let response = self.client.post(&self.endpoint).json(order).send().await?;

        Self::handle_response(response.status(), &response.text().await?)
    }

    fn handle_response(status: StatusCode, body: &str) -> Result<OrderResponse, OrderClientError> {
        let parsed = serde_json::from_str::<OrderResponse>(body);

        match parsed {
            Ok(reply) if status.is_success() => Ok(reply),
            Ok(reply) => Err(OrderClientError::Rejected {
                status: status.as_u16(),
                message: reply.message,
            }),
            Err(_) => Err(OrderClientError::MalformedResponse {
                status: status.as_u16(),
                body: body.to_string(),
            }),
        }
    }
}
