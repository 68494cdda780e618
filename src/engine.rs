// src/engine.rs
use crate::bruteforce::BruteForcer;
use crate::error::Result;
use crate::output::OutputManager;
use crate::resolver::{DnsResolver, Resolve};
use crate::session::Session;
use crate::sources::{get_all_sources, Source};
use crate::types::{Config, ScanStats, SubScoutError};
use crate::utils;
use log::{debug, error, info};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

/// Orchestrates one scan: passive sources and/or the brute-force engine,
/// merged into a single deduplicated, sorted result.
pub struct SubScoutEngine {
    config: Config,
    session: Session,
    sources: Vec<Box<dyn Source>>,
    resolver: Arc<dyn Resolve>,
    output: OutputManager,
}

impl SubScoutEngine {
    pub fn new(config: Config) -> Result<Self> {
        if !utils::is_valid_domain(&config.domain) {
            return Err(SubScoutError::InvalidDomain(config.domain.clone()));
        }

        let session = Session::new(&config)?;
        let resolver: Arc<dyn Resolve> = Arc::new(DnsResolver::new(config.timeout)?);
        let output = OutputManager::new(config.output_file.clone());

        Ok(Self {
            config,
            session,
            sources: get_all_sources(),
            resolver,
            output,
        })
    }

    /// Replace the passive sources, e.g. with a deterministic fake in tests.
    pub fn with_sources(mut self, sources: Vec<Box<dyn Source>>) -> Self {
        self.sources = sources;
        self
    }

    /// Replace the resolver, e.g. with a deterministic fake in tests.
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolve>) -> Self {
        self.resolver = resolver;
        self
    }

    pub async fn run(&self) -> Result<ScanStats> {
        let start = Instant::now();
        let mut all_found: BTreeSet<String> = BTreeSet::new();

        let mut passive_found = 0;
        if self.config.run_passive {
            let passive = self.collect_passive().await;
            passive_found = passive.len();
            all_found.extend(passive);
        }

        let mut active_found = 0;
        if self.config.run_active {
            let active = self.collect_active().await;
            active_found = active.len();
            all_found.extend(active);
        }

        let results: Vec<String> = all_found.into_iter().collect();

        if results.is_empty() {
            debug!("no subdomains found for {}", self.config.domain);
        } else {
            debug!(
                "found {} unique subdomains for {}",
                results.len(),
                self.config.domain
            );
            self.output.print_results(&results);
        }

        // persistence failure must not discard what is already on stdout
        match self.output.persist(&results) {
            Ok(Some(path)) => info!("results saved to {}", path),
            Ok(None) => {}
            Err(e) => error!("{}", e),
        }

        Ok(ScanStats {
            unique_subdomains: results.len(),
            passive_found,
            active_found,
            duration: start.elapsed(),
        })
    }

    /// Query every passive source; failures degrade to an empty contribution.
    async fn collect_passive(&self) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        for source in &self.sources {
            debug!(
                "fetching subdomains from {} for {}",
                source.name(),
                self.config.domain
            );
            match source.enumerate(&self.config.domain, &self.session).await {
                Ok(names) => {
                    debug!("{}: found {} unique subdomains", source.name(), names.len());
                    found.extend(names);
                }
                Err(e) => {
                    error!("{}: {}", source.name(), e);
                }
            }
        }
        found
    }

    /// Run the brute-force engine; a wordlist failure kills only the active
    /// path, never the whole scan.
    async fn collect_active(&self) -> Vec<String> {
        let Some(wordlist) = &self.config.wordlist else {
            return Vec::new();
        };

        let engine = BruteForcer::new(
            Arc::clone(&self.resolver),
            self.config.threads,
            self.config.timeout,
        );
        match engine.run(&self.config.domain, wordlist).await {
            Ok(found) => found,
            Err(e) => {
                error!("{}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResolutionOutcome;
    use async_trait::async_trait;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    struct StaticSource {
        names: Vec<String>,
    }

    #[async_trait]
    impl Source for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        async fn enumerate(&self, _domain: &str, _session: &Session) -> Result<Vec<String>> {
            Ok(self.names.clone())
        }
    }

    struct FakeResolver {
        resolvable: Vec<String>,
    }

    #[async_trait]
    impl Resolve for FakeResolver {
        async fn resolve(&self, subdomain: &str, _timeout: Duration) -> ResolutionOutcome {
            if self.resolvable.iter().any(|s| s == subdomain) {
                ResolutionOutcome::Resolved(subdomain.to_string())
            } else {
                ResolutionOutcome::NotFound
            }
        }
    }

    #[test]
    fn invalid_domain_is_rejected_before_any_work() {
        let config = Config {
            domain: "not a domain".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            SubScoutEngine::new(config),
            Err(SubScoutError::InvalidDomain(_))
        ));
    }

    #[tokio::test]
    async fn missing_wordlist_leaves_passive_results_intact() {
        let config = Config {
            domain: "example.com".to_string(),
            wordlist: Some("/nonexistent/words.txt".into()),
            run_passive: true,
            run_active: true,
            ..Config::default()
        };

        let engine = SubScoutEngine::new(config)
            .unwrap()
            .with_sources(vec![Box::new(StaticSource {
                names: vec!["a.example.com".to_string(), "b.example.com".to_string()],
            })]);

        let stats = engine.run().await.unwrap();
        assert_eq!(stats.passive_found, 2);
        assert_eq!(stats.active_found, 0);
        assert_eq!(stats.unique_subdomains, 2);
    }

    #[tokio::test]
    async fn active_results_flow_through_the_engine() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "www\nmail\nbogus123xyz").unwrap();

        let config = Config {
            domain: "example.com".to_string(),
            wordlist: Some(file.path().to_path_buf()),
            run_passive: false,
            run_active: true,
            ..Config::default()
        };

        let engine = SubScoutEngine::new(config)
            .unwrap()
            .with_resolver(Arc::new(FakeResolver {
                resolvable: vec![
                    "www.example.com".to_string(),
                    "mail.example.com".to_string(),
                ],
            }));

        let stats = engine.run().await.unwrap();
        assert_eq!(stats.passive_found, 0);
        assert_eq!(stats.active_found, 2);
        assert_eq!(stats.unique_subdomains, 2);
    }
}
