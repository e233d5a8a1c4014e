//! The `hickory-resolver`-backed [`DnsClient`] implementation.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::client::{fqdn, DnsClient};
use crate::error_handling::LookupError;

/// A DNS resolver pinned to one upstream server.
///
/// Explicitly constructed and explicitly passed; there is no ambient
/// process-wide resolver. Each run owns its own handle.
pub struct Resolver {
    inner: TokioAsyncResolver,
}

impl Resolver {
    /// Creates a resolver that sends every query to `upstream`.
    ///
    /// Caching and retries are disabled: one query per lookup, answered or
    /// failed within `timeout`. `ndots` is set to 0 so search domains are
    /// never appended.
    pub fn new(upstream: SocketAddr, timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;
        opts.ndots = 0;
        opts.cache_size = 0;
        opts.use_hosts_file = false;

        let name_servers =
            NameServerConfigGroup::from_ips_clear(&[upstream.ip()], upstream.port(), true);
        let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);

        Self {
            inner: TokioAsyncResolver::tokio(config, opts),
        }
    }

    /// Issues one query and classifies the outcome.
    ///
    /// `Ok(None)` means the server answered NOERROR with no matching
    /// records. Any other response code is an [`LookupError::Upstream`];
    /// exchange failures are [`LookupError::Transport`].
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<Lookup>, LookupError> {
        let name = fqdn(name);
        match self.inner.lookup(name.as_str(), record_type).await {
            Ok(lookup) => Ok(Some(lookup)),
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                    if *response_code == ResponseCode::NoError {
                        Ok(None)
                    } else {
                        Err(LookupError::Upstream {
                            name,
                            code: *response_code,
                        })
                    }
                }
                _ => Err(LookupError::Transport(e)),
            },
        }
    }
}

impl DnsClient for Resolver {
    async fn lookup_a(&self, name: &str) -> Result<Vec<Ipv4Addr>, LookupError> {
        let Some(lookup) = self.query(name, RecordType::A).await? else {
            return Ok(Vec::new());
        };
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::A(a) => Some(a.0),
                _ => None,
            })
            .collect())
    }

    async fn lookup_aaaa(&self, name: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        let Some(lookup) = self.query(name, RecordType::AAAA).await? else {
            return Ok(Vec::new());
        };
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::AAAA(aaaa) => Some(aaaa.0),
                _ => None,
            })
            .collect())
    }

    async fn lookup_cname(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let Some(lookup) = self.query(name, RecordType::CNAME).await? else {
            return Ok(Vec::new());
        };
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::CNAME(cname) => Some(cname.0.to_utf8()),
                _ => None,
            })
            .collect())
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let Some(lookup) = self.query(name, RecordType::TXT).await? else {
            return Ok(Vec::new());
        };
        // One string per character-string segment; segments are parsed
        // independently downstream, so they must not be joined here.
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::TXT(txt) => Some(
                    txt.iter()
                        .map(|segment| String::from_utf8_lossy(segment).to_string())
                        .collect::<Vec<String>>(),
                ),
                _ => None,
            })
            .flatten()
            .collect())
    }

    async fn lookup_caa(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let Some(lookup) = self.query(name, RecordType::CAA).await? else {
            return Ok(Vec::new());
        };
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::CAA(caa) => {
                    let flags: u8 = if caa.issuer_critical() { 128 } else { 0 };
                    Some(format!("{} {} \"{}\"", flags, caa.tag().as_str(), caa.value()))
                }
                _ => None,
            })
            .collect())
    }
}
