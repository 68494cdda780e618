// src/resolver.rs
use async_trait::async_trait;
use log::debug;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use trust_dns_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::ResolveErrorKind;
use trust_dns_resolver::TokioAsyncResolver;

use crate::error::Result;
use crate::types::{ResolutionOutcome, SubScoutError};

const DEFAULT_NAMESERVERS: &[&str] = &["8.8.8.8:53", "8.8.4.4:53", "1.1.1.1:53", "1.0.0.1:53"];

/// A single timed name lookup. Implementations classify the result and never
/// fail the caller; tests substitute a deterministic fake.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, subdomain: &str, timeout: Duration) -> ResolutionOutcome;
}

pub struct DnsResolver {
    resolver: TokioAsyncResolver,
}

impl DnsResolver {
    /// Build a resolver against the default public nameservers.
    ///
    /// The lookup timeout is enforced per call; the resolver itself is
    /// configured for a single attempt with the same bound so an internal
    /// retry can never outlive it.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut config = ResolverConfig::new();
        for ns in DEFAULT_NAMESERVERS {
            let socket_addr = SocketAddr::from_str(ns).map_err(|e| {
                SubScoutError::Resolution(format!("invalid nameserver address {}: {}", ns, e))
            })?;
            config.add_name_server(NameServerConfig {
                socket_addr,
                protocol: Protocol::Udp,
                tls_dns_name: None,
                trust_negative_responses: false,
                bind_addr: None,
            });
        }

        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;

        Ok(Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        })
    }
}

#[async_trait]
impl Resolve for DnsResolver {
    async fn resolve(&self, subdomain: &str, timeout: Duration) -> ResolutionOutcome {
        match tokio::time::timeout(timeout, self.resolver.lookup_ip(subdomain)).await {
            Err(_) => {
                debug!("timeout resolving: {}", subdomain);
                ResolutionOutcome::TimedOut
            }
            Ok(Ok(lookup)) => match lookup.iter().next() {
                Some(ip) => {
                    debug!("resolved: {} -> {}", subdomain, ip);
                    ResolutionOutcome::Resolved(subdomain.to_string())
                }
                None => {
                    debug!("no record for: {}", subdomain);
                    ResolutionOutcome::NotFound
                }
            },
            Ok(Err(e)) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { .. } => {
                    debug!("no record for: {}", subdomain);
                    ResolutionOutcome::NotFound
                }
                ResolveErrorKind::Timeout => {
                    debug!("timeout resolving: {}", subdomain);
                    ResolutionOutcome::TimedOut
                }
                _ => {
                    debug!("error resolving {}: {}", subdomain, e);
                    ResolutionOutcome::Error(e.to_string())
                }
            },
        }
    }
}
