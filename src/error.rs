pub use crate::types::SubScoutError;

pub type Result<T> = std::result::Result<T, SubScoutError>;
