/// Setlist CLI - scripted playlist editing against a Setlist server
pub mod config;
pub mod error;
pub mod script;

pub use config::AppConfig;
pub use error::{CliError, Result};
pub use script::EditOp;
