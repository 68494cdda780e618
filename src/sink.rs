// src/sink.rs
use dashmap::DashSet;

/// Deduplicated collection of discovered subdomains, safe for concurrent
/// writes from every worker. Owns all dedup state for one run.
#[derive(Default)]
pub struct ResultSink {
    found: DashSet<String>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert if absent. Returns true when the subdomain was newly recorded.
    pub fn offer(&self, subdomain: String) -> bool {
        self.found.insert(subdomain)
    }

    /// Sorted view of everything recorded so far. Call after all writers
    /// have finished.
    pub fn snapshot(&self) -> Vec<String> {
        let mut results: Vec<String> = self.found.iter().map(|s| s.key().clone()).collect();
        results.sort();
        results
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn offer_reports_whether_newly_inserted() {
        let sink = ResultSink::new();
        assert!(sink.offer("www.example.com".to_string()));
        assert!(!sink.offer("www.example.com".to_string()));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn snapshot_is_sorted() {
        let sink = ResultSink::new();
        sink.offer("mail.example.com".to_string());
        sink.offer("api.example.com".to_string());
        sink.offer("www.example.com".to_string());
        assert_eq!(
            sink.snapshot(),
            vec![
                "api.example.com".to_string(),
                "mail.example.com".to_string(),
                "www.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn concurrent_duplicate_offers_count_once() {
        let sink = Arc::new(ResultSink::new());

        let mut handles = Vec::new();
        for _ in 0..2 {
            let sink = Arc::clone(&sink);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    sink.offer("dup.example.com".to_string());
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.snapshot(), vec!["dup.example.com".to_string()]);
    }
}
