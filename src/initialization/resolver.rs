//! DNS resolver initialization.

use std::time::Duration;

use crate::config::{DNS_TIMEOUT_SECS, UPSTREAM_DNS_SERVER};
use crate::dns::Resolver;

/// Initializes the DNS resolver used for every query of a run.
///
/// Creates a [`Resolver`] pinned to the fixed upstream server
/// ([`UPSTREAM_DNS_SERVER`]) with the configured timeout. The resolver is
/// explicitly passed to the pipeline; there is no ambient global.
pub fn init_resolver() -> Resolver {
    Resolver::new(UPSTREAM_DNS_SERVER, Duration::from_secs(DNS_TIMEOUT_SECS))
}
