/// Account service interface
pub mod account;
/// Instrument service interface
pub mod instrument;
/// Order service interface
pub mod order;
/// Position service interface
pub mod position;
/// Pricing service interface
pub mod pricing;
/// Trade service interface
pub mod trade;
/// Transaction service interface
pub mod transaction;
/// User service interface
pub mod user;
