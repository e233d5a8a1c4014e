//! Pipeline tests against a mock DNS client.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Mutex;

use hickory_resolver::proto::op::ResponseCode;

use super::addresses::parse_asn_segment;
use super::descriptions::parse_description_segment;
use super::*;
use crate::dns::DnsClient;
use crate::error_handling::LookupError;

/// A DNS client answering from canned maps, recording every query.
#[derive(Default)]
struct MockClient {
    cname: HashMap<String, Vec<String>>,
    txt: HashMap<String, Vec<String>>,
    caa: HashMap<String, Vec<String>>,
    failing: Vec<String>,
    queries: Mutex<Vec<(String, String)>>,
}

impl MockClient {
    fn with_cname(mut self, name: &str, targets: &[&str]) -> Self {
        self.cname
            .insert(name.to_string(), targets.iter().map(|t| t.to_string()).collect());
        self
    }

    fn with_txt(mut self, name: &str, segments: &[&str]) -> Self {
        self.txt
            .insert(name.to_string(), segments.iter().map(|s| s.to_string()).collect());
        self
    }

    fn with_caa(mut self, name: &str, records: &[&str]) -> Self {
        self.caa
            .insert(name.to_string(), records.iter().map(|r| r.to_string()).collect());
        self
    }

    /// Marks a name so every query against it fails.
    fn with_failure(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    fn answer<T: Clone>(
        &self,
        record_type: &str,
        map: &HashMap<String, Vec<T>>,
        name: &str,
    ) -> Result<Vec<T>, LookupError> {
        self.queries
            .lock()
            .unwrap()
            .push((record_type.to_string(), name.to_string()));
        if self.failing.iter().any(|f| f == name) {
            return Err(LookupError::Upstream {
                name: name.to_string(),
                code: ResponseCode::ServFail,
            });
        }
        Ok(map.get(name).cloned().unwrap_or_default())
    }

    fn queries_of(&self, record_type: &str) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == record_type)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

impl DnsClient for MockClient {
    async fn lookup_a(&self, _name: &str) -> Result<Vec<Ipv4Addr>, LookupError> {
        // Address pools are fed to the pipeline directly in these tests
        Ok(Vec::new())
    }

    async fn lookup_aaaa(&self, _name: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        Ok(Vec::new())
    }

    async fn lookup_cname(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.answer("CNAME", &self.cname, name)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.answer("TXT", &self.txt, name)
    }

    async fn lookup_caa(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.answer("CAA", &self.caa, name)
    }
}

#[tokio::test]
async fn test_cname_chain_empty_for_domain_without_cname() {
    let client = MockClient::default();
    let chain = cname_chain(&client, "example.com").await.unwrap();
    assert!(chain.is_empty());
}

#[tokio::test]
async fn test_cname_chain_follows_three_hops() {
    let client = MockClient::default()
        .with_cname("a.example.com", &["b.example.net."])
        .with_cname("b.example.net.", &["c.example.org."])
        .with_cname("c.example.org.", &["d.example.io."]);

    let chain = cname_chain(&client, "a.example.com").await.unwrap();
    assert_eq!(
        chain,
        vec!["b.example.net.", "c.example.org.", "d.example.io."]
    );
}

#[tokio::test]
async fn test_cname_chain_terminates_on_cycle() {
    let client = MockClient::default()
        .with_cname("a.example.com", &["b.example.net."])
        .with_cname("b.example.net.", &["a.example.com."]);

    let chain = cname_chain(&client, "a.example.com").await.unwrap();
    // The cycle back to the query domain is dropped by the visited guard
    assert_eq!(chain, vec!["b.example.net."]);
}

#[tokio::test]
async fn test_cname_chain_propagates_query_errors() {
    let client = MockClient::default()
        .with_cname("a.example.com", &["b.example.net."])
        .with_failure("b.example.net.");

    let result = cname_chain(&client, "a.example.com").await;
    assert!(result.is_err(), "chain walk should fail on a sub-lookup error");
}

#[test]
fn test_parse_asn_segment_five_fields() {
    let info = parse_asn_segment("15169 | 8.8.8.0/24 | US | arin | 2023-12-28").unwrap();
    assert_eq!(info.asn, "15169");
    assert_eq!(info.address_block, "8.8.8.0/24");
    assert_eq!(info.country, "US");
    assert_eq!(info.internet_registry, "arin");
    assert_eq!(info.date, "2023-12-28");
}

#[test]
fn test_parse_asn_segment_wrong_field_count_dropped() {
    assert!(parse_asn_segment("15169 | 8.8.8.0/24 | US | arin").is_none());
    assert!(parse_asn_segment("15169 | 8.8.8.0/24 | US | arin | 2023-12-28 | extra").is_none());
    assert!(parse_asn_segment("").is_none());
}

#[test]
fn test_parse_asn_segment_empty_asn_field_accepted() {
    // Field count is the only validation
    let info = parse_asn_segment(" | 8.8.8.0/24 | US | arin | 2023-12-28").unwrap();
    assert_eq!(info.asn, "");
}

#[tokio::test]
async fn test_address_infos_records_announcements_per_address() {
    let client = MockClient::default().with_txt(
        "34.216.184.93.origin.asn.cymru.com",
        &[
            "15133 | 93.184.216.0/24 | US | arin | 2008-06-02",
            "malformed | segment",
        ],
    );

    let addr = Ipv4Addr::new(93, 184, 216, 34);
    let infos = address_infos(&client, &[addr], &[]).await;

    let entries = &infos.ipv4["93.184.216.34"];
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].asn, "15133");
    assert_eq!(infos.asns.iter().collect::<Vec<_>>(), vec!["15133"]);
}

#[tokio::test]
async fn test_address_infos_failed_lookup_keeps_empty_entry() {
    let client = MockClient::default().with_failure("4.3.2.1.origin.asn.cymru.com");

    let infos = address_infos(&client, &[Ipv4Addr::new(1, 2, 3, 4)], &[]).await;

    assert_eq!(infos.ipv4["1.2.3.4"], vec![]);
    assert!(infos.asns.is_empty());
}

#[tokio::test]
async fn test_address_infos_mapped_ipv6_skips_lookup() {
    let client = MockClient::default();
    let mapped: Ipv6Addr = "::ffff:192.0.2.1".parse().unwrap();

    let infos = address_infos(&client, &[], &[mapped]).await;

    assert_eq!(infos.ipv6[&mapped.to_string()], vec![]);
    assert!(client.queries_of("TXT").is_empty(), "codec rejection must not query");
}

#[tokio::test]
async fn test_address_infos_deduplicates_asns_across_addresses() {
    let client = MockClient::default()
        .with_txt(
            "1.1.8.8.origin.asn.cymru.com",
            &["15169 | 8.8.8.0/24 | US | arin | 2023-12-28"],
        )
        .with_txt(
            "4.4.8.8.origin.asn.cymru.com",
            &["15169 | 8.8.4.0/24 | US | arin | 2023-12-28"],
        );

    let infos = address_infos(
        &client,
        &[Ipv4Addr::new(8, 8, 1, 1), Ipv4Addr::new(8, 8, 4, 4)],
        &[],
    )
    .await;

    assert_eq!(infos.asns.len(), 1);
    assert_eq!(infos.ipv4.len(), 2);
}

#[test]
fn test_parse_description_segment_checks_asn_echo() {
    let segment = "15169 | US | arin | 2000-03-30 | GOOGLE, US";
    assert!(parse_description_segment("15169", segment).is_some());
    // Upstream echoing a different ASN is discarded
    assert!(parse_description_segment("64500", segment).is_none());
}

#[test]
fn test_parse_description_segment_wrong_field_count() {
    assert!(parse_description_segment("15169", "15169 | US | arin | 2000-03-30").is_none());
}

#[tokio::test]
async fn test_asn_descriptions_last_segment_wins() {
    let client = MockClient::default().with_txt(
        "AS15169.asn.cymru.com",
        &[
            "15169 | US | arin | 2000-03-30 | GOOGLE-OLD, US",
            "15169 | US | arin | 2000-03-30 | GOOGLE, US",
        ],
    );

    let mut asns = std::collections::BTreeSet::new();
    asns.insert("15169".to_string());

    let descriptions = asn_descriptions(&client, &asns).await;
    assert_eq!(descriptions.len(), 1);
    assert_eq!(descriptions[0].org, "GOOGLE, US");
}

#[tokio::test]
async fn test_asn_descriptions_failed_lookup_produces_no_entry() {
    let client = MockClient::default()
        .with_failure("AS64500.asn.cymru.com")
        .with_txt(
            "AS15169.asn.cymru.com",
            &["15169 | US | arin | 2000-03-30 | GOOGLE, US"],
        );

    let asns: std::collections::BTreeSet<String> =
        ["15169".to_string(), "64500".to_string()].into();

    let descriptions = asn_descriptions(&client, &asns).await;
    assert_eq!(descriptions.len(), 1);
    assert_eq!(descriptions[0].asn, "15169");
}

#[tokio::test]
async fn test_caa_direct_records_stop_the_walk() {
    let client = MockClient::default()
        .with_caa("example.com", &["0 issue \"ca.example.net\""])
        .with_caa("cdn.example.net.", &["0 issue \"other-ca.example.net\""]);

    let targets = vec!["cdn.example.net.".to_string()];
    let infos = caa_infos(&client, "example.com", &targets).await;

    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].domain, "example.com");
    assert_eq!(infos[0].cas, vec!["0 issue \"ca.example.net\""]);
    // Neither the chain nor the parent is consulted
    assert_eq!(client.queries_of("CAA"), vec!["example.com"]);
}

#[tokio::test]
async fn test_caa_falls_back_to_first_chain_target() {
    let client = MockClient::default()
        .with_caa("cdn.example.net.", &["0 issue \"ca.example.net\""]);

    let targets = vec![
        "cdn.example.net.".to_string(),
        "edge.example.org.".to_string(),
    ];
    let infos = caa_infos(&client, "www.example.com", &targets).await;

    // Empty direct observation, then the first target's records
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].domain, "www.example.com");
    assert!(infos[0].cas.is_empty());
    assert_eq!(infos[1].domain, "cdn.example.net.");
    assert_eq!(infos[1].cas, vec!["0 issue \"ca.example.net\""]);
    assert_eq!(
        client.queries_of("CAA"),
        vec!["www.example.com", "cdn.example.net."]
    );
}

#[tokio::test]
async fn test_caa_chain_tier_stops_after_first_candidate_even_when_empty() {
    let client = MockClient::default()
        .with_caa("parent.example", &["0 issue \"parent-ca.example\""]);

    let targets = vec![
        "first.example.net.".to_string(),
        "second.example.org.".to_string(),
    ];
    let infos = caa_infos(&client, "www.parent.example", &targets).await;

    // The first candidate answered (empty), so the second is never consulted
    // and the walk proceeds to the parent
    assert_eq!(
        client.queries_of("CAA"),
        vec!["www.parent.example", "first.example.net.", "parent.example"]
    );
    assert_eq!(infos.len(), 3);
    assert_eq!(infos[2].domain, "parent.example");
    assert_eq!(infos[2].cas, vec!["0 issue \"parent-ca.example\""]);
}

#[tokio::test]
async fn test_caa_chain_tier_tries_next_candidate_on_error() {
    let client = MockClient::default()
        .with_failure("first.example.net.")
        .with_caa("second.example.org.", &["0 issue \"ca.example.net\""]);

    let targets = vec![
        "first.example.net.".to_string(),
        "second.example.org.".to_string(),
    ];
    let infos = caa_infos(&client, "www.example.com", &targets).await;

    assert_eq!(infos.len(), 2);
    assert_eq!(infos[1].domain, "second.example.org.");
}

#[tokio::test]
async fn test_caa_parent_queried_exactly_once_without_chain() {
    let client = MockClient::default();

    let infos = caa_infos(&client, "www.example.com", &[]).await;

    let caa_queries = client.queries_of("CAA");
    assert_eq!(caa_queries, vec!["www.example.com", "example.com"]);
    // The empty parent observation is still recorded
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[1].domain, "example.com");
    assert!(infos[1].cas.is_empty());
}

#[tokio::test]
async fn test_caa_failed_direct_query_records_no_observation() {
    let client = MockClient::default()
        .with_failure("www.example.com")
        .with_caa("example.com", &["0 issue \"ca.example.net\""]);

    let infos = caa_infos(&client, "www.example.com", &[]).await;

    // Only the parent observation survives
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].domain, "example.com");
}

#[tokio::test]
async fn test_caa_chain_tier_considers_at_most_seven_candidates() {
    let mut client = MockClient::default();
    let targets: Vec<String> = (0..10).map(|i| format!("t{i}.example.net.")).collect();
    for target in &targets {
        client = client.with_failure(target);
    }

    caa_infos(&client, "www.example.com", &targets).await;

    // Direct query, 7 failing candidates, then the parent
    assert_eq!(client.queries_of("CAA").len(), 1 + 7 + 1);
}
