//! Common constants for endpoints and remote method names

/// Production base URL of the Race payment API
pub const DEFAULT_BASE_URL: &str = "https://race.danyarub.ru/api/";

/// Remote method names understood by the API
pub mod methods {
    /// Fetch the authenticated merchant's profile
    pub const MERCHANT_GET: &str = "merchant.get";
    /// Edit the authenticated merchant's profile
    pub const MERCHANT_EDIT: &str = "merchant.edit";
    /// Fetch the merchant's transfer history
    pub const PAYMENT_GET_HISTORY: &str = "payment.getHistory";
    /// Fetch specific transfers by their identifiers
    pub const PAYMENT_GET_HISTORY_BY_IDS: &str = "payment.getHistoryByIds";
    /// Send currency to a user
    pub const PAYMENT_SEND: &str = "payment.send";
    /// Look up users by their identifiers
    pub const USERS_GET: &str = "users.get";
    /// Register the webhook delivery URL
    pub const WEBHOOKS_CREATE: &str = "webhooks.create";
    /// Fetch the currently registered webhook URL
    pub const WEBHOOKS_GET: &str = "webhooks.get";

    /// All remote methods exposed by the catalog
    pub fn all() -> Vec<&'static str> {
        vec![
            MERCHANT_GET,
            MERCHANT_EDIT,
            PAYMENT_GET_HISTORY,
            PAYMENT_GET_HISTORY_BY_IDS,
            PAYMENT_SEND,
            USERS_GET,
            WEBHOOKS_CREATE,
            WEBHOOKS_GET,
        ]
    }
}
