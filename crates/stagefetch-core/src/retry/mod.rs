//! Retry policy for HTTP transfers.
//!
//! This module encapsulates transport error classification (timeouts,
//! connection failures, bad statuses) and the fixed-delay retry decision so
//! the fetcher and the pipeline share one policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::TransportError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
