//! Output data model.
//!
//! These types describe the single JSON document the tool prints: the CNAME
//! chain, per-address ASN announcements, ASN descriptions, and CAA
//! observations. Everything is constructed fresh per invocation and
//! serialized once at the end.

use std::collections::BTreeMap;

use serde::Serialize;

/// One origin-ASN announcement for an IP address.
///
/// Parsed from a Team Cymru origin TXT record such as
/// `"15169 | 8.8.8.0/24 | US | arin | 2023-12-28"`. An address announced by
/// multiple ASNs carries one `AsnInfo` per announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsnInfo {
    /// ASN identifier (bare number as a string, e.g. `"15169"`).
    pub asn: String,
    /// Announced address block in CIDR notation.
    pub address_block: String,
    /// Country code of the announcement.
    pub country: String,
    /// Regional internet registry the block is allocated under.
    pub internet_registry: String,
    /// Allocation date.
    pub date: String,
}

/// Descriptive record for one ASN identifier.
///
/// Parsed from an `AS<n>.asn.cymru.com` TXT record. At most one per ASN;
/// when the upstream returns several segments the last accepted one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsnDescription {
    /// ASN identifier the description belongs to.
    pub asn: String,
    /// Country code of the AS.
    pub country: String,
    /// Regional internet registry.
    pub internet_registry: String,
    /// Allocation date.
    pub date: String,
    /// Organization name.
    pub org: String,
}

/// One CAA policy observation.
///
/// Records which domain the observation was made on and the CAA records seen
/// there, flattened to display strings (`<flags> <tag> "<value>"`). An
/// observation with an empty `cas` list means the query succeeded but the
/// domain publishes no CAA policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaaInfo {
    /// Domain the CAA query was issued against.
    pub domain: String,
    /// CAA record display strings observed on that domain.
    pub cas: Vec<String>,
}

/// The aggregate result for one domain query.
///
/// Serialized to stdout as pretty-printed JSON. The address-info maps are
/// `BTreeMap`s so the JSON key order is deterministic by address string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    /// The queried domain, echoed as given on the command line.
    pub domain: String,
    /// Canonical-name targets reachable transitively via CNAME indirection,
    /// in discovery order.
    pub canonical_names_targets: Vec<String>,
    /// ASN announcements per IPv4 address of the domain.
    pub ipv4_address_info: BTreeMap<String, Vec<AsnInfo>>,
    /// ASN announcements per IPv6 address of the domain.
    pub ipv6_address_info: BTreeMap<String, Vec<AsnInfo>>,
    /// Descriptions for every distinct ASN discovered above, ordered by ASN
    /// identifier.
    pub asn_descriptions: Vec<AsnDescription>,
    /// CAA observations in fallback-search order.
    pub caa_infos: Vec<CaaInfo>,
}
