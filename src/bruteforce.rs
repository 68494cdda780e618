// src/bruteforce.rs
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, error};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::queue::WorkQueue;
use crate::resolver::Resolve;
use crate::sink::ResultSink;
use crate::types::ResolutionOutcome;

/// DNS brute-force engine: a fixed pool of workers drains the candidate
/// queue, resolves each `word.domain`, and records hits in a shared sink.
pub struct BruteForcer {
    resolver: Arc<dyn Resolve>,
    workers: usize,
    timeout: Duration,
}

impl BruteForcer {
    pub fn new(resolver: Arc<dyn Resolve>, workers: usize, timeout: Duration) -> Self {
        Self {
            // a degenerate single-worker run rather than a failure
            workers: workers.max(1),
            resolver,
            timeout,
        }
    }

    /// Run the brute-force scan to completion and return the sorted set of
    /// discovered subdomains.
    ///
    /// A missing or unreadable wordlist propagates as `Wordlist`; an empty
    /// wordlist returns an empty result without error. Termination is
    /// guaranteed: the queue only shrinks, and each worker exits as soon as
    /// it observes the queue empty.
    pub async fn run(&self, domain: &str, wordlist: &Path) -> Result<Vec<String>> {
        let queue = Arc::new(WorkQueue::from_file(wordlist)?);
        if queue.is_empty() {
            debug!("wordlist is empty or contains only whitespace");
            return Ok(Vec::new());
        }

        debug!(
            "starting DNS brute-force for {} with {} workers ({} candidates)",
            domain,
            self.workers,
            queue.len()
        );

        let sink = Arc::new(ResultSink::new());
        let mut tasks = FuturesUnordered::new();
        for _ in 0..self.workers {
            let queue = Arc::clone(&queue);
            let sink = Arc::clone(&sink);
            let resolver = Arc::clone(&self.resolver);
            let domain = domain.to_string();
            let timeout = self.timeout;

            tasks.push(tokio::spawn(async move {
                while let Some(word) = queue.try_dequeue() {
                    let subdomain = format!("{}.{}", word, domain);
                    if let ResolutionOutcome::Resolved(found) =
                        resolver.resolve(&subdomain, timeout).await
                    {
                        sink.offer(found);
                    }
                }
            }));
        }

        while let Some(joined) = tasks.next().await {
            if let Err(e) = joined {
                error!("brute-force worker failed: {}", e);
            }
        }

        debug!("DNS brute-force scan complete");
        Ok(sink.snapshot())
    }
}
