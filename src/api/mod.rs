//! Backend API subsystem.
//!
//! # Data Flow
//! ```text
//! Caller (view layer, out of scope)
//!     → client.rs (one method per REST operation)
//!     → reqwest (single HTTP request, no retries)
//!     → types.rs (deserialize 2xx body)
//!     → error.rs (map non-2xx / transport failure)
//!     → Return: Result<typed body, ApiError>
//! ```
//!
//! # Design Decisions
//! - One configured client instance shared by all JSON calls; read-only
//!   after construction, safe across concurrent calls
//! - Image upload deliberately bypasses the shared instance (multipart body,
//!   fixed absolute path) to avoid the default JSON content type
//! - Every failure propagates unchanged to the caller; no recovery here

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ApiMessage, Recipe, RecipePayload, Tag, UploadedImage};
