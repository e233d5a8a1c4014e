//! Configuration constants.
//!
//! This module defines the fixed external conventions the tool consumes:
//! the upstream DNS server every query goes to, and the Team Cymru
//! lookup-zone names used for address-to-ASN and ASN-description queries.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Upstream DNS server used for every query.
///
/// One fixed public resolver; no alternate servers or protocols are
/// configurable.
pub const UPSTREAM_DNS_SERVER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), 53);

/// DNS query timeout in seconds.
///
/// Most queries complete in well under a second; failing fast keeps a dead
/// upstream from hanging the whole pipeline.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Zone queried for IPv4 origin-ASN TXT lookups.
pub const IPV4_ORIGIN_ZONE: &str = "origin.asn.cymru.com";

/// Zone queried for IPv6 origin-ASN TXT lookups.
pub const IPV6_ORIGIN_ZONE: &str = "origin6.asn.cymru.com";

/// Zone queried for ASN description TXT lookups (`AS<n>.<zone>`).
pub const ASN_DESCRIPTION_ZONE: &str = "asn.cymru.com";

/// Field delimiter inside Cymru TXT record segments.
pub const TXT_FIELD_DELIMITER: &str = " | ";

/// Maximum CNAME-chain candidates considered in the CAA fallback tier.
pub const CAA_CHAIN_CANDIDATE_LIMIT: usize = 7;
