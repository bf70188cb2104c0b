//! # racepay
//!
//! An async, type-safe Rust client for the Race merchant payment API.
//!
//! ## Features
//!
//! - **Merchant management**: fetch and edit the merchant profile
//! - **Payments**: send coins or diamonds to users and query the transfer
//!   history, in full or by transfer id
//! - **User lookup**: resolve one or many user ids
//! - **Webhooks**: register the delivery URL and route inbound payment
//!   notifications to a handler of your choice
//! - **Typed errors**: local misuse, remote API errors, and transport
//!   failures stay distinguishable through one error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use racepay::RacePayClient;
//! use racepay::types::{Currency, HistoryRequest};
//!
//! #[tokio::main]
//! async fn main() -> racepay::Result<()> {
//!     let client = RacePayClient::with_token("merchant-token")?;
//!
//!     let merchant = client.merchant().await?;
//!     println!("merchant: {}", merchant.name);
//!
//!     // Send 150 coins to user 42
//!     client.pay_to(Currency::Coin, 150, 42).await?;
//!
//!     // The 25 most recent incoming transfers
//!     let history = client
//!         .history(&HistoryRequest::new().with_count(25))
//!         .await?;
//!     println!("{} transfers", history.len());
//!
//!     // Route inbound payment notifications
//!     client.on_payment(|payload| {
//!         println!("incoming transfer: {}", payload);
//!     });
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - **`client`**: the generic call engine and the typed method catalog
//! - **`types`**: configuration and request/response data structures
//! - **`notify`**: single-slot dispatch for inbound payment notifications
//! - **`error`**: unified error handling across all three failure origins
//!
//! ## Wire protocol
//!
//! Every call is a `POST {base_url}{method}` with a JSON body carrying the
//! merchant access token and the method parameters. Responses arrive in an
//! envelope holding either `response.msg` (the result) or `error`
//! (`error_code` and `error_msg`, passed through verbatim). The client
//! performs no retries and installs no timeout unless one is configured.

pub mod client;
pub mod error;
pub mod notify;
pub mod types;

// Re-exports for convenience
pub use client::RacePayClient;
pub use error::{ErrorKind, RacePayError, Result};
pub use notify::{NotificationSink, PaymentHandler, PaymentHandlerArc};
pub use types::*;

/// Current version of the racepay library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
