/// Accounts, account summaries and account changes
pub mod account;
/// Candles, order books and position books
pub mod instrument;
/// Orders and the order tagged union
pub mod order;
/// Positions and position sides
pub mod position;
/// Prices and pricing stream records
pub mod pricing;
/// Value types shared by several resources
pub mod primitives;
/// Serde helpers for irregular wire shapes
pub mod serialization;
pub(crate) mod tagged;
/// Trades and trade summaries
pub mod trade;
/// Transactions and the transaction tagged union
pub mod transaction;
/// User details
pub mod user;
