//! Merchant profile types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Merchant profile returned by `merchant.get`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Merchant {
    /// Display name of the merchant
    pub name: String,
    /// Description shown to users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Direct URL of the merchant's avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Numeric id of the community backing the merchant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    /// Server fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for `merchant.edit`
///
/// Fields left unset are omitted from the request body and the server
/// keeps their current values. The avatar URL is only accepted by the
/// server when it points at imgur and ends in png/jpg/jpeg.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MerchantEdit {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// New community id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

impl MerchantEdit {
    /// Create an edit that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new avatar URL
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Set a new community id
    pub fn with_group_id(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }
}
