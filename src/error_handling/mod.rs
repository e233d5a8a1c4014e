//! Error type definitions.
//!
//! This module defines the error types used throughout the application:
//! - [`LookupError`] for DNS query failures (transport vs. upstream)
//! - [`NotIpv6Error`] for the IPv6 origin-label codec
//! - [`InitializationError`] for startup failures

mod types;

pub use types::{InitializationError, LookupError, NotIpv6Error};
