// src/lib.rs
pub mod bruteforce;
pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod queue;
pub mod resolver;
pub mod session;
pub mod sink;
pub mod sources;
pub mod types;
pub mod utils;

pub use bruteforce::BruteForcer;
pub use cli::Args;
pub use engine::SubScoutEngine;
pub use queue::WorkQueue;
pub use sink::ResultSink;
pub use types::{Config, ResolutionOutcome, ScanStats, SubScoutError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
