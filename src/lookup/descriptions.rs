//! Per-ASN description lookups.

use std::collections::BTreeSet;

use crate::config::{ASN_DESCRIPTION_ZONE, TXT_FIELD_DELIMITER};
use crate::dns::DnsClient;
use crate::models::AsnDescription;

/// Parses one description TXT segment for the given ASN.
///
/// A valid segment has exactly 5 ` | `-separated fields and echoes the
/// queried identifier in the first field; the upstream may echo a
/// different ASN on malformed responses, and those segments are discarded.
pub(crate) fn parse_description_segment(asn: &str, segment: &str) -> Option<AsnDescription> {
    let fields: Vec<&str> = segment.split(TXT_FIELD_DELIMITER).collect();
    if fields.len() != 5 || fields[0] != asn {
        return None;
    }
    Some(AsnDescription {
        asn: fields[0].to_string(),
        country: fields[1].to_string(),
        internet_registry: fields[2].to_string(),
        date: fields[3].to_string(),
        org: fields[4].to_string(),
    })
}

/// Resolves the descriptive record for every discovered ASN.
///
/// Identifiers are processed in sorted order so the output is
/// deterministic. A query failure is non-fatal: the identifier simply
/// produces no entry. When the upstream returns several valid segments for
/// one identifier, the last one wins.
pub async fn asn_descriptions<C: DnsClient>(
    client: &C,
    asns: &BTreeSet<String>,
) -> Vec<AsnDescription> {
    let mut descriptions = Vec::new();

    for asn in asns {
        let name = format!("AS{asn}.{ASN_DESCRIPTION_ZONE}");
        match client.lookup_txt(&name).await {
            Ok(segments) => {
                let mut description = None;
                for segment in &segments {
                    if let Some(parsed) = parse_description_segment(asn, segment) {
                        description = Some(parsed);
                    }
                }
                if let Some(description) = description {
                    descriptions.push(description);
                }
            }
            Err(e) => log::warn!("Failed to lookup description for AS{asn}: {e}"),
        }
    }

    descriptions
}
