//! @acp:module "Metadata"
//! @acp:summary "Action metadata model and YAML loading"
//! @acp:domain cli
//! @acp:layer feature

pub mod loader;
pub mod types;

pub use loader::{load_metadata, parse_metadata};
pub use types::*;
