//! Client for the Race payment API
//!
//! This module provides the client used for every interaction with the
//! payment service: the generic [`RacePayClient::call`] engine, the typed
//! catalog methods built on top of it, and the registration point for
//! inbound payment notifications.
//!
//! # Architecture
//!
//! The client module is organized as follows:
//! - [`RacePayClient`] - Main client for API interactions
//! - Tests - Wire-contract test suite driven by a mock server
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use racepay::RacePayClient;
//! use racepay::types::{Currency, HistoryRequest};
//!
//! # async fn example() -> racepay::Result<()> {
//! let client = RacePayClient::with_token("merchant-token")?;
//!
//! // Fetch the merchant profile
//! let merchant = client.merchant().await?;
//! println!("Merchant: {}", merchant.name);
//!
//! // Send 150 coins to user 42
//! client.pay_to(Currency::Coin, 150, 42).await?;
//!
//! // Fetch the last 25 transfers
//! let history = client.history(&HistoryRequest::new().with_count(25)).await?;
//! println!("{} transfers", history.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Receiving payment notifications
//!
//! ```no_run
//! use racepay::RacePayClient;
//!
//! # async fn example() -> racepay::Result<()> {
//! let client = RacePayClient::with_token("merchant-token")?;
//! client.webhook_new("https://example.com/race/hook").await?;
//!
//! client.on_payment(|payload| {
//!     println!("incoming transfer: {}", payload);
//! });
//!
//! // The application's webhook route hands each delivery body to the
//! // client, which forwards it to the handler above:
//! // client.dispatch_payment(body);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::notify::NotificationSink;
use crate::types::{
    methods, ClientConfig, Currency, HistoryKind, HistoryRequest, Ids, Merchant, MerchantEdit,
    Transfer, User, Webhook,
};
use crate::{RacePayError, Result};


/// Wire envelope wrapping every API response
///
/// Exactly one of the two fields is populated: `error` for failures,
/// `response` for successes.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: Option<ResponsePayload<T>>,
    error: Option<RemoteError>,
}

#[derive(Debug, Deserialize)]
struct ResponsePayload<T> {
    msg: T,
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    error_code: i64,
    error_msg: String,
}

/// Client for the Race payment API
///
/// Holds the merchant access token and base endpoint, immutable for the
/// life of the client. Calls are independent and may run concurrently;
/// the only mutable state is the notification handler slot. Cloning is
/// cheap and clones share the underlying connection pool and handler slot.
#[derive(Clone)]
pub struct RacePayClient {
    config: ClientConfig,
    client: Client,
    sink: Arc<NotificationSink>,
}

impl fmt::Debug for RacePayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RacePayClient")
            .field("base_url", &self.config.base_url)
            .field("sink", &self.sink)
            .finish()
    }
}

impl RacePayClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate configuration first
        config.validate()?;

        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| RacePayError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            sink: Arc::new(NotificationSink::new()),
        })
    }

    /// Create a client for the production endpoint
    pub fn with_token(access_token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(access_token))
    }

    /// Get the base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Call any API method
    ///
    /// `params` must be a JSON object (or `null` for no parameters). The
    /// configured access token is merged into the body last, so a caller
    /// supplied `access_token` key can never override the configured
    /// identity. Issues exactly one `POST {base_url}{method}` per call and
    /// resolves the response envelope to `msg` or a remote error, carried
    /// verbatim.
    pub async fn call<T>(&self, method: &str, params: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if method.is_empty() {
            return Err(RacePayError::invalid_parameter(
                "Method name must not be empty",
            ));
        }

        let mut body = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(RacePayError::invalid_parameter(format!(
                    "Params must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };
        body.insert(
            "access_token".to_string(),
            Value::String(self.config.access_token.clone()),
        );

        let url = format!("{}{}", self.config.base_url, method);
        tracing::debug!("Sending request to: {}", url);

        let response = self
            .client
            .post(url)
            .json(&Value::Object(body))
            .send()
            .await?;
        let status = response.status();
        let raw = response.bytes().await?;

        // The envelope is authoritative: the server reports failures inside
        // the body, so the status line is logged but not interpreted.
        tracing::debug!("Response status: {}, {} bytes", status, raw.len());

        let envelope: Envelope<T> = serde_json::from_slice(&raw)?;
        if let Some(error) = envelope.error {
            tracing::debug!(
                "API error for {}: {} {}",
                method,
                error.error_code,
                error.error_msg
            );
            return Err(RacePayError::api(error.error_code, error.error_msg));
        }
        match envelope.response {
            Some(payload) => Ok(payload.msg),
            None => Err(RacePayError::MalformedEnvelope),
        }
    }

    /// Fetch the authenticated merchant's profile
    pub async fn merchant(&self) -> Result<Merchant> {
        self.call(methods::MERCHANT_GET, json!({})).await
    }

    /// Edit the authenticated merchant's profile
    ///
    /// Fields left unset in `edit` keep their current server-side values.
    pub async fn edit_merchant(&self, edit: &MerchantEdit) -> Result<Value> {
        self.call(methods::MERCHANT_EDIT, serde_json::to_value(edit)?)
            .await
    }

    /// Fetch the merchant's transfer history
    ///
    /// `HistoryRequest::default()` matches the server defaults: the 100
    /// most recent transfers in both directions.
    pub async fn history(&self, request: &HistoryRequest) -> Result<Vec<Transfer>> {
        self.call(methods::PAYMENT_GET_HISTORY, serde_json::to_value(request)?)
            .await
    }

    /// Fetch specific transfers by their identifiers
    pub async fn history_by_ids(
        &self,
        ids: impl Into<Ids>,
        kind: HistoryKind,
    ) -> Result<Vec<Transfer>> {
        let ids = ids.into();
        ids.validate()?;
        self.call(
            methods::PAYMENT_GET_HISTORY_BY_IDS,
            json!({ "ids": ids, "type": kind }),
        )
        .await
    }

    /// Send `amount` of `currency` to the user with id `to`
    pub async fn pay_to(&self, currency: Currency, amount: i64, to: i64) -> Result<Value> {
        self.call(
            methods::PAYMENT_SEND,
            json!({ "field": currency, "amount": amount, "id": to }),
        )
        .await
    }

    /// Look up users by their identifiers
    pub async fn users(&self, user_ids: impl Into<Ids>) -> Result<Vec<User>> {
        let user_ids = user_ids.into();
        user_ids.validate()?;
        self.call(methods::USERS_GET, json!({ "userIds": user_ids }))
            .await
    }

    /// Register the URL payment notifications are delivered to
    ///
    /// The URL must start with the literal prefix `http`.
    pub async fn webhook_new(&self, url: &str) -> Result<Webhook> {
        if url.is_empty() {
            return Err(RacePayError::invalid_parameter("Url must not be empty"));
        }
        if !url.starts_with("http") {
            return Err(RacePayError::invalid_parameter(
                "Url must start with the http(s):// protocol",
            ));
        }
        self.call(methods::WEBHOOKS_CREATE, json!({ "url": url }))
            .await
    }

    /// Fetch the currently registered webhook URL, if any
    pub async fn webhook(&self) -> Result<Option<String>> {
        self.call(methods::WEBHOOKS_GET, json!({})).await
    }

    /// Register the handler for inbound payment notifications
    ///
    /// The last registration wins; there is no unregister operation.
    pub fn on_payment<F>(&self, handler: F)
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        self.sink.register(Arc::new(handler));
    }

    /// Forward an inbound webhook delivery to the registered handler
    ///
    /// The application's webhook transport calls this with the raw request
    /// body. With no handler registered the delivery is dropped silently.
    pub fn dispatch_payment(&self, payload: Value) {
        self.sink.dispatch(payload);
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
