//! CAA policy resolution with fallback.

use crate::config::CAA_CHAIN_CANDIDATE_LIMIT;
use crate::dns::DnsClient;
use crate::models::CaaInfo;

/// Resolves the effective CAA authority for `domain`.
///
/// Three tiers, stopping at the first that yields any CAA records:
///
/// 1. The domain itself. A successful query records an observation even
///    when it holds zero records.
/// 2. The CNAME-chain `targets` in discovery order, capped at the first
///    [`CAA_CHAIN_CANDIDATE_LIMIT`] entries. A failing query moves on to
///    the next candidate, but the first *successful* query ends the tier
///    unconditionally; later candidates are never consulted, even when
///    that query returned nothing.
///    TODO: confirm with product owners whether the remaining candidates
///    were ever meant to be tried; the cap suggests they were.
/// 3. The parent domain (text after the first `.`, skipped when the dot
///    leads), queried exactly once; the observation is recorded even when
///    empty.
///
/// Query failures at any tier are logged and treated as zero records.
pub async fn caa_infos<C: DnsClient>(
    client: &C,
    domain: &str,
    targets: &[String],
) -> Vec<CaaInfo> {
    let mut caa_infos = Vec::new();
    let mut found = false;

    match client.lookup_caa(domain).await {
        Ok(records) => {
            found = !records.is_empty();
            caa_infos.push(CaaInfo {
                domain: domain.to_string(),
                cas: records,
            });
        }
        Err(e) => log::warn!("Failed to lookup CAA records for {domain}: {e}"),
    }

    if !found {
        for target in targets.iter().take(CAA_CHAIN_CANDIDATE_LIMIT) {
            match client.lookup_caa(target).await {
                Ok(records) => {
                    found = !records.is_empty();
                    caa_infos.push(CaaInfo {
                        domain: target.clone(),
                        cas: records,
                    });
                    break;
                }
                Err(e) => log::warn!("Failed to lookup CAA records for {target}: {e}"),
            }
        }
    }

    if !found {
        if let Some(dot) = domain.find('.') {
            if dot > 0 {
                let parent = &domain[dot + 1..];
                match client.lookup_caa(parent).await {
                    Ok(records) => caa_infos.push(CaaInfo {
                        domain: parent.to_string(),
                        cas: records,
                    }),
                    Err(e) => log::warn!("Failed to lookup CAA records for {parent}: {e}"),
                }
            }
        }
    }

    caa_infos
}
