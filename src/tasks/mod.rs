//! Background Tasks Module
//!
//! Contains the periodic sweeper shared by the TTL cache and the rate limiter.
//!
//! # Tasks
//! - Janitor: Runs a [`Sweep`] implementation at a fixed interval until cancelled

mod janitor;

pub use janitor::{Janitor, Sweep};
