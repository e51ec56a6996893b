//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target (path string, may carry ?query/#fragment)
//!     → router.rs (strip base path, walk route table in order)
//!     → pattern.rs (segment match, extract :params)
//!     → Return: RouteMatch (page + params + view handle) or None
//!
//! Route Compilation (at startup):
//!     path patterns
//!     → Parse into literal/param segments
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes defined once at startup, immutable at runtime
//! - No regex; plain segment comparison
//! - First match wins over the ordered table
//! - Explicit no-match (None) rather than a fallback route
//! - Parameter values are forwarded verbatim, never validated here

pub mod pattern;
pub mod router;

pub use pattern::{Params, PathPattern};
pub use router::{app_router, Page, Route, RouteMatch, Router, ViewHandle};
