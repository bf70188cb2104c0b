//! User lookup types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record returned by `users.get`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id
    pub id: i64,
    /// Server fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
