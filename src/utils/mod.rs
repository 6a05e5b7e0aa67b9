/// Environment variable helpers used by the configuration layer
pub mod config;
/// Module containing utilities for generating client-side identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;
/// Module containing wire date-time parsing helpers
pub mod time;

pub use config::*;
pub use id::*;
pub use logger::*;
pub use time::*;
