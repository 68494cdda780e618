// src/sources/mod.rs
use crate::error::Result;
use crate::session::Session;
use async_trait::async_trait;

mod crtsh;

pub use crtsh::CrtShSource;

/// A passive subdomain source. Implementations query third-party historical
/// data and return candidate names; they never touch the target directly.
#[async_trait]
pub trait Source: Send + Sync {
    fn name(&self) -> &str;
    async fn enumerate(&self, domain: &str, session: &Session) -> Result<Vec<String>>;
}

pub fn get_all_sources() -> Vec<Box<dyn Source>> {
    vec![Box::new(CrtShSource::new())]
}
