//! Error type definitions.

use std::net::Ipv6Addr;

use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::op::ResponseCode;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for a single DNS query.
///
/// Callers treat any variant as terminal for that query; whether the failure
/// is fatal for the whole run depends on where in the pipeline it occurs.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The query could not be exchanged with the upstream server (socket
    /// error, timeout, malformed response).
    #[error("DNS transport error: {0}")]
    Transport(#[from] ResolveError),

    /// The upstream server answered with a non-success response code.
    #[error("lookup code {code} for {name}")]
    Upstream {
        /// The fully-qualified name that was queried.
        name: String,
        /// The response code the server returned.
        code: ResponseCode,
    },
}

/// The address is not a routable IPv6 address.
///
/// Raised by the IPv6 origin-label codec for IPv4-mapped addresses
/// (`::ffff:a.b.c.d`), which have no IPv6 ASN-origin meaning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not an IPv6 address: {0} is an IPv4-mapped address")]
pub struct NotIpv6Error(pub Ipv6Addr);

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
