/// Default REST host (practice environment)
pub const DEFAULT_HOSTNAME: &str = "api-fxpractice.oanda.com";
/// Default streaming host (practice environment)
pub const DEFAULT_STREAMING_HOSTNAME: &str = "stream-fxpractice.oanda.com";
/// Default HTTPS port
pub const DEFAULT_PORT: u16 = 443;
/// Default REST request timeout in seconds
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("v20-client/", env!("CARGO_PKG_VERSION"));
/// Value of the `type` field that marks a stream heartbeat
pub const HEARTBEAT_TYPE: &str = "HEARTBEAT";
/// Default maximum number of requests per period
///
/// The API allows 120 requests per second on a persistent connection; this keeps a
/// margin below it.
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
/// Default rate limiting period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Default burst size for the rate limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 20;
