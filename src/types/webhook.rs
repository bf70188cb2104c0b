//! Webhook registration types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Webhook registration returned by `webhooks.create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Delivery URL notifications are sent to
    pub url: String,
    /// Server fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
