//! Per-address origin-ASN lookups.

use std::collections::{BTreeMap, BTreeSet};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::config::{IPV4_ORIGIN_ZONE, IPV6_ORIGIN_ZONE, TXT_FIELD_DELIMITER};
use crate::dns::DnsClient;
use crate::ip;
use crate::models::AsnInfo;

/// ASN announcements per address, plus the distinct ASN identifiers seen.
///
/// The maps always contain one entry per input address: an address whose
/// lookup failed or parsed to nothing keeps an empty list. `asns` feeds the
/// description stage; `BTreeSet` iteration keeps that stage's output order
/// deterministic.
#[derive(Debug, Default)]
pub struct AddressInfos {
    /// Announcements per IPv4 address string.
    pub ipv4: BTreeMap<String, Vec<AsnInfo>>,
    /// Announcements per IPv6 address string.
    pub ipv6: BTreeMap<String, Vec<AsnInfo>>,
    /// Distinct ASN identifiers across both families.
    pub asns: BTreeSet<String>,
}

/// Parses one origin TXT segment into an announcement.
///
/// A segment is valid only when splitting on ` | ` yields exactly 5 fields:
/// ASN, address block, country, registry, date. Anything else is silently
/// discarded. No validation beyond the field count: an empty ASN field
/// still parses.
pub(crate) fn parse_asn_segment(segment: &str) -> Option<AsnInfo> {
    let fields: Vec<&str> = segment.split(TXT_FIELD_DELIMITER).collect();
    if fields.len() != 5 {
        return None;
    }
    Some(AsnInfo {
        asn: fields[0].to_string(),
        address_block: fields[1].to_string(),
        country: fields[2].to_string(),
        internet_registry: fields[3].to_string(),
        date: fields[4].to_string(),
    })
}

/// Resolves origin-ASN announcements for every address of both families.
///
/// Each address is encoded into its origin-lookup label and TXT-queried
/// under the appropriate zone. Failures are non-fatal per address: a codec
/// rejection (IPv4-mapped IPv6) or a query error is logged and leaves that
/// address's entry empty, and the pipeline continues.
pub async fn address_infos<C: DnsClient>(
    client: &C,
    ipv4s: &[Ipv4Addr],
    ipv6s: &[Ipv6Addr],
) -> AddressInfos {
    let mut infos = AddressInfos::default();

    for addr in ipv4s {
        let entry = infos.ipv4.entry(addr.to_string()).or_default();
        let name = format!("{}.{}", ip::ipv4_origin_label(*addr), IPV4_ORIGIN_ZONE);
        match client.lookup_txt(&name).await {
            Ok(segments) => {
                for segment in &segments {
                    if let Some(info) = parse_asn_segment(segment) {
                        infos.asns.insert(info.asn.clone());
                        entry.push(info);
                    }
                }
            }
            Err(e) => log::warn!("Failed to lookup origin ASN for {addr}: {e}"),
        }
    }

    for addr in ipv6s {
        let entry = infos.ipv6.entry(addr.to_string()).or_default();
        let label = match ip::ipv6_origin_label(*addr) {
            Ok(label) => label,
            Err(e) => {
                log::warn!("Skipping origin ASN lookup for {addr}: {e}");
                continue;
            }
        };
        let name = format!("{label}.{IPV6_ORIGIN_ZONE}");
        match client.lookup_txt(&name).await {
            Ok(segments) => {
                for segment in &segments {
                    if let Some(info) = parse_asn_segment(segment) {
                        infos.asns.insert(info.asn.clone());
                        entry.push(info);
                    }
                }
            }
            Err(e) => log::warn!("Failed to lookup origin ASN for {addr}: {e}"),
        }
    }

    infos
}
