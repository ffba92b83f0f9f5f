//! Request execution core
//!
//! Every API call goes through this module:
//! - `rate_limit`: token-bucket admission shared by all calls on a client
//! - `http`: the transport seam and its reqwest implementation
//! - `executor`: admission, GET, body read, and status classification

pub mod executor;
pub mod http;
pub mod rate_limit;

// Re-export commonly used items for convenience
pub use executor::RequestExecutor;
pub use http::{HttpTransport, ReqwestTransport, TransportResponse};
pub use rate_limit::{RateLimiter, DEFAULT_BURST, DEFAULT_REQUESTS_PER_SECOND};
