//! DNS querying.
//!
//! This module provides the [`DnsClient`] trait (one async single-question
//! lookup per record type the pipeline needs: A, AAAA, CNAME, TXT, CAA)
//! and [`Resolver`], the `hickory-resolver`-backed implementation pinned to
//! one fixed upstream server.
//!
//! The trait is the seam for testing: the pipeline is generic over it, so
//! tests drive it with canned answers instead of the network.

mod client;
mod resolver;

// Re-export public API
pub use client::{fqdn, DnsClient};
pub use resolver::Resolver;
