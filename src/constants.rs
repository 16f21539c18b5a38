/// Root of the DigitalOcean v2 REST API
pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com/v2";
/// Default `per_page` merged into every list request
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Default first page merged into every list request
pub const DEFAULT_PAGE: u32 = 1;
/// Default maximum number of attempts for a single request
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Linear backoff step in milliseconds: attempt `n` waits `n * step` before retrying
pub const DEFAULT_BACKOFF_STEP_MS: u64 = 1000;
/// Default timeout in seconds for REST requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Requests per period allowed by the client-side rate limiter.
/// DigitalOcean allows 250 requests per minute per token.
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 250;
/// Period in seconds of the client-side rate limiter
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Burst size of the client-side rate limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 25;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("digitalocean-client/", env!("CARGO_PKG_VERSION"));
