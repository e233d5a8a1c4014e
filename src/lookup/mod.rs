//! The resolution pipeline.
//!
//! Four stages built on [`DnsClient`](crate::dns::DnsClient):
//! - CNAME chain walking (breadth-first over alias indirection)
//! - per-address origin-ASN TXT lookups
//! - per-ASN description TXT lookups
//! - the CAA fallback-chain walk
//!
//! The CNAME chain and the initial address lookups are primary-path
//! operations whose errors propagate; everything else is per-item
//! enrichment that degrades to empty output on failure.

mod addresses;
mod caa;
mod cname;
mod descriptions;

// Re-export public API
pub use addresses::{address_infos, AddressInfos};
pub use caa::caa_infos;
pub use cname::cname_chain;
pub use descriptions::asn_descriptions;

#[cfg(test)]
mod tests;
