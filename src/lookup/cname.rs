//! CNAME chain walking.

use std::collections::{HashSet, VecDeque};

use crate::dns::{fqdn, DnsClient};
use crate::error_handling::LookupError;

/// Walks the CNAME indirection chain starting from `domain`.
///
/// Breadth-first: every discovered target is both recorded and re-queried,
/// so multi-hop chains are followed transitively. A domain with no CNAME
/// produces no new work and the walk terminates when the queue empties.
///
/// Targets are returned in discovery order, which the CAA fallback relies
/// on. A visited set (seeded with the query domain) drops already-seen
/// targets, so a misconfigured zone with a CNAME cycle terminates instead
/// of looping; the query domain itself therefore never appears in the
/// result.
///
/// # Errors
///
/// Strict variant: any CNAME query error propagates. A partial chain is
/// never returned.
pub async fn cname_chain<C: DnsClient>(
    client: &C,
    domain: &str,
) -> Result<Vec<String>, LookupError> {
    let mut queue = VecDeque::from([domain.to_string()]);
    let mut seen = HashSet::from([fqdn(domain)]);
    let mut targets = Vec::new();

    while let Some(next) = queue.pop_front() {
        for target in client.lookup_cname(&next).await? {
            if seen.insert(fqdn(&target)) {
                targets.push(target.clone());
                queue.push_back(target);
            }
        }
    }

    Ok(targets)
}
