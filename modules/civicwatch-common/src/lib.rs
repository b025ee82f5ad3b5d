pub mod error;
pub mod types;

pub use error::CivicWatchError;
pub use types::*;
