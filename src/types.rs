// src/types.rs
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::cli::Args;

#[derive(Debug, Clone)]
pub struct Config {
    pub domain: String,
    pub wordlist: Option<PathBuf>,
    pub output_file: Option<String>,
    pub threads: usize,
    pub timeout: Duration,
    pub http_timeout: Duration,
    pub user_agent: String,
    pub run_passive: bool,
    pub run_active: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            wordlist: None,
            output_file: None,
            threads: 10,
            timeout: Duration::from_secs(2),
            http_timeout: Duration::from_secs(15),
            user_agent: "subscout/0.1 (+https://github.com/subscout/subscout)".to_string(),
            run_passive: true,
            run_active: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Derive the effective configuration from command line arguments.
    ///
    /// Mode selection follows the historical behavior: supplying a wordlist
    /// implicitly enables active discovery even without `--active-only`.
    pub fn from_args(args: &Args) -> Result<Self, SubScoutError> {
        args.validate()?;

        // NaN fails the <= comparison, so reject non-finite values explicitly
        if !args.timeout.is_finite() || args.timeout <= 0.0 {
            return Err(SubScoutError::Usage(
                "--timeout must be a positive number of seconds".to_string(),
            ));
        }
        let timeout = Duration::try_from_secs_f64(args.timeout).map_err(|_| {
            SubScoutError::Usage(format!("--timeout value {} is too large", args.timeout))
        })?;

        let mut run_passive = true;
        let mut run_active = args.wordlist.is_some();
        if args.passive_only {
            run_active = false;
        }
        if args.active_only {
            run_passive = false;
        }

        Ok(Self {
            domain: args.domain.clone(),
            wordlist: args.wordlist.clone(),
            output_file: args.output.clone(),
            threads: args.threads,
            timeout,
            run_passive,
            run_active,
            verbose: args.verbose,
            ..Self::default()
        })
    }
}

/// The classified result of one DNS lookup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The name resolved to at least one address; carries the subdomain itself.
    Resolved(String),
    /// The resolver authoritatively reported that the name does not exist.
    NotFound,
    /// The lookup exceeded the configured timeout.
    TimedOut,
    /// Any other failure, with a human-readable detail.
    Error(String),
}

#[derive(Debug, Clone)]
pub struct ScanStats {
    pub unique_subdomains: usize,
    pub passive_found: usize,
    pub active_found: usize,
    pub duration: Duration,
}

#[derive(Debug, Error)]
pub enum SubScoutError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("failed to read wordlist {path:?}: {source}")]
    Wordlist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source error in {source_name}: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("resolution error: {0}")]
    Resolution(String),

    #[error("output error: {0}")]
    Output(String),

    #[error("invalid domain: {0}")]
    InvalidDomain(String),
}
