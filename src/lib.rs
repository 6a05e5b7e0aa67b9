/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # v20 Client
//!
//! An async Rust client for the v20 REST and streaming trading API: accounts,
//! instruments, orders, trades, positions, transactions, pricing and users.
//!
//! ## Features
//!
//! - **Typed entities**: every wire object is a `serde` struct. Monetary and price
//!   quantities are decoded into exact [`rust_decimal::Decimal`] values, never `f64`.
//! - **Polymorphic decoding**: [`Transaction`](presentation::transaction::Transaction)
//!   and [`Order`](presentation::order::Order) dispatch on their `type` field and fall
//!   back to a header-only variant for kinds this client does not know yet.
//! - **Status-keyed responses**: each operation decodes the body into the shape
//!   registered for the returned HTTP status, passes unregistered statuses through as
//!   raw JSON, and leaves non-JSON bodies untouched.
//! - **Streaming**: the transaction and pricing streams are exposed as lazy
//!   [`Stream`](futures_util::Stream)s of heartbeat or domain records.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use v20_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let client = Client::new(Config::new())?;
//! let account_id = client.config().account_id.clone();
//!
//! let response = client.get_account(&account_id).await?;
//! if let Some(GetAccountResponse::Ok(body)) = response.decoded() {
//!     if let Some(account) = &body.account {
//!         info!("balance: {:?}", account.core.balance);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The client reads its settings from environment variables (a `.env` file is loaded
//! when present):
//!
//! ```bash
//! V20_HOSTNAME=api-fxpractice.oanda.com
//! V20_STREAMING_HOSTNAME=stream-fxpractice.oanda.com
//! V20_TOKEN=your_token
//! V20_ACCOUNT_ID=101-004-1234567-001
//! V20_DATETIME_FORMAT=RFC3339
//! ```

/// Application layer: configuration, client and the per-resource services
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Requests, responses, transport and the streaming decoder
pub mod model;

/// Commonly used types, re-exported
pub mod prelude;

/// Wire entities for every API resource
pub mod presentation;

/// Configuration, identifier, logging and time helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
