//! Payment and transfer types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RacePayError;

/// Currency moved by a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Dollars
    Coin,
    /// Diamonds
    Diamonds,
}

impl Currency {
    /// Wire identifier for this currency
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Coin => "coin",
            Currency::Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = RacePayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coin" => Ok(Currency::Coin),
            "diamonds" => Ok(Currency::Diamonds),
            _ => Err(RacePayError::invalid_parameter(
                r#"Currency must be either "coin" or "diamonds""#,
            )),
        }
    }
}

/// Direction filter for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HistoryKind {
    /// Both incoming and outgoing transfers
    #[default]
    #[serde(rename = "all")]
    All,
    /// Transfers received by the merchant
    #[serde(rename = "in")]
    Incoming,
    /// Transfers sent by the merchant
    #[serde(rename = "out")]
    Outgoing,
}

impl HistoryKind {
    /// Wire identifier for this filter
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryKind::All => "all",
            HistoryKind::Incoming => "in",
            HistoryKind::Outgoing => "out",
        }
    }
}

/// Parameters for `payment.getHistory`
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRequest {
    /// Maximum number of transfers to return
    pub count: u32,
    /// Direction filter
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    /// Number of records to skip
    pub offset: u32,
}

impl Default for HistoryRequest {
    fn default() -> Self {
        Self {
            count: 100,
            kind: HistoryKind::All,
            offset: 0,
        }
    }
}

impl HistoryRequest {
    /// Create a request with the server defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of returned transfers
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Restrict the result to one direction
    pub fn with_kind(mut self, kind: HistoryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Skip the first `offset` records
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

/// One identifier or a list of identifiers
///
/// Several API methods accept either a single numeric id or an array of
/// ids. Serializes untagged, so `Ids::One(5)` becomes `5` on the wire and
/// `Ids::Many(vec![1, 2])` becomes `[1, 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Ids {
    /// A single identifier
    One(i64),
    /// A list of identifiers
    Many(Vec<i64>),
}

impl Ids {
    /// Check the identifier set before it is sent
    ///
    /// A single id must be a positive number; lists are forwarded as-is.
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Ids::One(id) if *id <= 0 => Err(RacePayError::invalid_parameter(
                "Id must be a positive number or a list of ids",
            )),
            _ => Ok(()),
        }
    }
}

impl From<i64> for Ids {
    fn from(id: i64) -> Self {
        Ids::One(id)
    }
}

impl From<Vec<i64>> for Ids {
    fn from(ids: Vec<i64>) -> Self {
        Ids::Many(ids)
    }
}

impl From<&[i64]> for Ids {
    fn from(ids: &[i64]) -> Self {
        Ids::Many(ids.to_vec())
    }
}

/// A single transfer from the payment history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    /// Transfer identifier
    pub id: i64,
    /// Currency moved by the transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Currency>,
    /// Amount of currency moved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Sender's user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<i64>,
    /// Recipient's user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_id: Option<i64>,
    /// Server fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
