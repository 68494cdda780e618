use clap::Parser;
use std::path::PathBuf;

use crate::types::SubScoutError;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "subscout",
    about = "CLI subdomain discovery tool",
    long_about = "SubScout discovers subdomains of a target domain by querying certificate\ntransparency logs (passive) and by brute-forcing candidates from a wordlist\nagainst DNS (active). Providing a wordlist enables active discovery."
)]
pub struct Args {
    /// Target domain (e.g., example.com)
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN", required = true)]
    pub domain: String,

    /// Path to a wordlist file for brute-forcing
    #[arg(short = 'w', long = "wordlist", value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Output file to save results
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Number of workers for brute-forcing
    #[arg(short = 't', long = "threads", default_value_t = 10)]
    pub threads: usize,

    /// DNS resolution timeout in seconds
    #[arg(long = "timeout", default_value_t = 2.0)]
    pub timeout: f64,

    /// Only perform passive discovery (certificate logs)
    #[arg(long = "passive-only")]
    pub passive_only: bool,

    /// Only perform active discovery (DNS brute-force)
    #[arg(long = "active-only")]
    pub active_only: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Reject flag combinations before any work begins.
    pub fn validate(&self) -> Result<(), SubScoutError> {
        if self.passive_only && self.active_only {
            return Err(SubScoutError::Usage(
                "cannot use --passive-only and --active-only together".to_string(),
            ));
        }
        if self.active_only && self.wordlist.is_none() {
            return Err(SubScoutError::Usage(
                "--wordlist is required for --active-only mode".to_string(),
            ));
        }
        Ok(())
    }
}
