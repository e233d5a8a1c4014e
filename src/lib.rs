//! domaininfo library: DNS-derived domain metadata resolution
//!
//! This library resolves public DNS-derived metadata for a domain: its CNAME
//! alias chain, IPv4/IPv6 addresses, the autonomous system announcing each
//! address (via TXT queries against the Team Cymru IP-to-ASN mapping
//! service), human-readable ASN descriptions, and the CAA policy governing
//! certificate issuance for the domain or its ancestors.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use domaininfo::{run_domain_info, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::try_parse_from(["domaininfo", "example.com"])?;
//! let info = run_domain_info(&config).await?;
//! println!("{}", serde_json::to_string_pretty(&info)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
mod ip;
mod lookup;
mod models;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DnsClient, Resolver};
pub use error_handling::{InitializationError, LookupError, NotIpv6Error};
pub use ip::{ipv4_origin_label, ipv6_origin_label, uncompressed_ipv6};
pub use lookup::{address_infos, asn_descriptions, caa_infos, cname_chain, AddressInfos};
pub use models::{AsnDescription, AsnInfo, CaaInfo, DomainInfo};
pub use run::{resolve_domain_info, run_domain_info};

// Internal run module (contains the resolution pipeline orchestration)
mod run {
    use anyhow::{Context, Result};

    use crate::config::Config;
    use crate::dns::DnsClient;
    use crate::error_handling::LookupError;
    use crate::initialization::init_resolver;
    use crate::lookup;
    use crate::models::DomainInfo;

    /// Resolves all domain metadata through the given DNS client.
    ///
    /// Runs the full pipeline strictly sequentially: CNAME chain walk,
    /// A/AAAA lookups, per-address origin-ASN resolution, per-ASN
    /// descriptions, and the CAA fallback walk.
    ///
    /// # Errors
    ///
    /// Fails on primary-path errors only: the CNAME chain walk and the
    /// initial A/AAAA lookups. Per-item enrichment failures (origin TXT,
    /// description TXT, CAA tiers) are logged and leave their output
    /// empty.
    pub async fn resolve_domain_info<C: DnsClient>(
        client: &C,
        domain: &str,
    ) -> Result<DomainInfo, LookupError> {
        let targets = lookup::cname_chain(client, domain).await?;

        let ipv4s = client.lookup_a(domain).await?;
        let ipv6s = client.lookup_aaaa(domain).await?;

        let addresses = lookup::address_infos(client, &ipv4s, &ipv6s).await;
        let asn_descriptions = lookup::asn_descriptions(client, &addresses.asns).await;
        let caa_infos = lookup::caa_infos(client, domain, &targets).await;

        Ok(DomainInfo {
            domain: domain.to_string(),
            canonical_names_targets: targets,
            ipv4_address_info: addresses.ipv4,
            ipv6_address_info: addresses.ipv6,
            asn_descriptions,
            caa_infos,
        })
    }

    /// Resolves all domain metadata for the configured domain.
    ///
    /// Constructs a fresh resolver against the fixed upstream server and
    /// runs [`resolve_domain_info`] with it.
    pub async fn run_domain_info(config: &Config) -> Result<DomainInfo> {
        let resolver = init_resolver();
        resolve_domain_info(&resolver, &config.domain)
            .await
            .with_context(|| format!("Failed to resolve domain information for {}", config.domain))
    }
}
