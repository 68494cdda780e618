// src/sources/crtsh.rs
use crate::error::Result;
use crate::session::Session;
use crate::sources::Source;
use crate::types::SubScoutError;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CrtShEntry {
    name_value: String,
}

/// crt.sh certificate transparency log source.
#[derive(Debug, Clone)]
pub struct CrtShSource {
    name: String,
    base_url: String,
}

impl CrtShSource {
    pub fn new() -> Self {
        Self {
            name: "crtsh".to_string(),
            base_url: "https://crt.sh".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Keep a certificate name only if it is a real subdomain of the target:
    /// mentions the domain, is not the domain itself, and is not a wildcard
    /// entry.
    fn retain(name: &str, domain: &str) -> bool {
        !name.is_empty() && name.contains(domain) && name != domain && !name.starts_with("*.")
    }
}

impl Default for CrtShSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for CrtShSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn enumerate(&self, domain: &str, session: &Session) -> Result<Vec<String>> {
        let url = format!("{}/?q=%.{}&output=json", self.base_url, domain);

        let response = session.get(&url).await?;
        if !response.status().is_success() {
            return Err(SubScoutError::Source {
                source_name: self.name.clone(),
                message: format!("HTTP error: {}", response.status()),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| SubScoutError::Network(e.to_string()))?;

        let entries: Vec<CrtShEntry> = serde_json::from_str(&text).map_err(|e| {
            SubScoutError::Source {
                source_name: self.name.clone(),
                message: format!("failed to parse JSON: {}", e),
            }
        })?;

        let mut results = Vec::new();
        for entry in entries {
            // name_value can hold several names separated by newlines
            for line in entry.name_value.lines() {
                let name = line.trim().to_lowercase();
                if Self::retain(&name, domain) {
                    results.push(name);
                }
            }
        }

        results.sort();
        results.dedup();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Config;

    fn session() -> Session {
        Session::new(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn filters_wildcards_and_the_domain_itself() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"[{"name_value":"a.example.com\n*.example.com\nexample.com"}]"#;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let source = CrtShSource::new().with_base_url(&server.url());
        let results = source.enumerate("example.com", &session()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results, vec!["a.example.com".to_string()]);
    }

    #[tokio::test]
    async fn deduplicates_across_entries() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"[
            {"name_value":"www.example.com\nmail.example.com"},
            {"name_value":"www.example.com"}
        ]"#;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let source = CrtShSource::new().with_base_url(&server.url());
        let results = source.enumerate("example.com", &session()).await.unwrap();

        assert_eq!(
            results,
            vec!["mail.example.com".to_string(), "www.example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn malformed_json_is_a_source_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let source = CrtShSource::new().with_base_url(&server.url());
        let result = source.enumerate("example.com", &session()).await;

        assert!(matches!(result, Err(SubScoutError::Source { .. })));
    }

    #[tokio::test]
    async fn http_failure_is_a_source_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let source = CrtShSource::new().with_base_url(&server.url());
        let result = source.enumerate("example.com", &session()).await;

        assert!(matches!(result, Err(SubScoutError::Source { .. })));
    }
}
