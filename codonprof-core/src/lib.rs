//! Core utilities and types shared across all codonprof crates

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{load_config, save_config, Config, LoggingConfig, TranslationConfig};
pub use error::{CodonError, CodonResult};
pub use logging::init_logging;

/// Version information for the codonprof project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
