//! Rate Limiter Module
//!
//! Per-key admission control over a trailing time window.

mod sliding;
mod window;


pub use sliding::SlidingWindowRateLimiter;
pub use window::WindowLog;
