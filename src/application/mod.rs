/// Client implementing every service interface
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one per API resource
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
mod services;
