//! Core types for the Race payment API
//!
//! This module defines the data structures exchanged with the API: the
//! client configuration, the typed parameter records for each catalog
//! method, and the response types they decode into.
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`config`] - Client configuration and validation
//! - [`merchant`] - Merchant profile and edit parameters
//! - [`payment`] - Currencies, history queries, and transfers
//! - [`user`] - User lookup results
//! - [`webhook`] - Webhook registration results
//! - [`constants`] - Endpoint and remote method name constants
//!
//! # Examples
//!
//! ## Configuring a client
//!
//! ```
//! use racepay::types::ClientConfig;
//! use std::time::Duration;
//!
//! # fn example() -> racepay::Result<()> {
//! let config = ClientConfig::new("merchant-token")
//!     .with_timeout(Duration::from_secs(30));
//!
//! config.validate()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a history query
//!
//! ```
//! use racepay::types::{HistoryKind, HistoryRequest};
//!
//! let request = HistoryRequest::new()
//!     .with_count(25)
//!     .with_kind(HistoryKind::Incoming);
//! assert_eq!(request.count, 25);
//! ```

pub mod config;
pub mod constants;
pub mod merchant;
pub mod payment;
pub mod user;
pub mod webhook;

// Re-export commonly used types
pub use config::ClientConfig;
pub use constants::{methods, DEFAULT_BASE_URL};
pub use merchant::{Merchant, MerchantEdit};
pub use payment::{Currency, HistoryKind, HistoryRequest, Ids, Transfer};
pub use user::User;
pub use webhook::Webhook;
