//! Implementations of the service interfaces on [`crate::application::client::Client`]

mod account_service;
mod instrument_service;
mod order_service;
mod position_service;
mod pricing_service;
mod trade_service;
mod transaction_service;
mod user_service;
