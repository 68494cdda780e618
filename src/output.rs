// src/output.rs
use crate::error::Result;
use crate::types::SubScoutError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes final results: one subdomain per line to stdout, and optionally
/// the same lines to a file. Diagnostics never go to stdout.
pub struct OutputManager {
    file: Option<String>,
}

impl OutputManager {
    pub fn new(file: Option<String>) -> Self {
        Self { file }
    }

    pub fn print_results(&self, subdomains: &[String]) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for subdomain in subdomains {
            // ignore a broken pipe rather than panic
            let _ = writeln!(handle, "{}", subdomain);
        }
    }

    /// Persist results to the configured file, if any. Returns the path
    /// written to; failures are the caller's to report, not fatal.
    pub fn persist(&self, subdomains: &[String]) -> Result<Option<&str>> {
        let Some(file_path) = &self.file else {
            return Ok(None);
        };

        if let Some(parent) = Path::new(file_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SubScoutError::Output(format!("failed to create directory: {}", e))
                })?;
            }
        }

        let mut file = File::create(file_path)
            .map_err(|e| SubScoutError::Output(format!("failed to create {}: {}", file_path, e)))?;
        for subdomain in subdomains {
            writeln!(file, "{}", subdomain)
                .map_err(|e| SubScoutError::Output(format!("failed to write {}: {}", file_path, e)))?;
        }

        Ok(Some(file_path))
    }
}
