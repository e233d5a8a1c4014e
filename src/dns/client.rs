//! The DNS lookup contract the pipeline is written against.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error_handling::LookupError;

/// Normalizes a domain name to fully-qualified form.
///
/// Appends the trailing dot if it is not already present; names are
/// normalized this way before every query so the resolver never appends
/// search domains.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Single-question DNS lookups, one method per record type.
///
/// Every method issues exactly one query against one upstream server and
/// returns only the answer records matching the requested type; other
/// records in the answer section are filtered out, not errors. A successful
/// response with no matching records is an empty `Vec`.
///
/// # Errors
///
/// Methods fail with [`LookupError::Transport`] when the query cannot be
/// exchanged, and [`LookupError::Upstream`] when the server answers with a
/// non-success response code. Callers must treat any failure as terminal
/// for that query. There are no retries.
#[allow(async_fn_in_trait)]
pub trait DnsClient {
    /// Looks up A records, returning the IPv4 addresses.
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>, LookupError>;

    /// Looks up AAAA records, returning the IPv6 addresses.
    async fn lookup_aaaa(&self, name: &str) -> Result<Vec<Ipv6Addr>, LookupError>;

    /// Looks up CNAME records, returning the canonical-name targets.
    async fn lookup_cname(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// Looks up TXT records, returning one string per character-string
    /// segment. Segments are not joined: a record with several segments
    /// yields several strings, each parsed independently by callers.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// Looks up CAA records, returning display strings of the form
    /// `<flags> <tag> "<value>"`.
    async fn lookup_caa(&self, name: &str) -> Result<Vec<String>, LookupError>;
}
