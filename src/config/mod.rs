//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (semantic checks)
//!     → env overrides (RECIPE_API_ORIGIN, BASE_URL)
//!     → ClientConfig (validated, immutable)
//!     → injected into ApiClient / Router at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no runtime mutation, no globals
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{from_env, load_config, ConfigError};
pub use schema::ClientConfig;
