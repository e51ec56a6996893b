//! Client library for the recipe manager web application.
//!
//! Two subsystems: `routing` maps navigation targets to logical pages, and
//! `api` wraps the backend's REST endpoints behind typed async calls.

pub mod api;
pub mod config;
pub mod routing;

pub use api::client::ApiClient;
pub use api::error::ApiError;
pub use api::types::{ApiMessage, Recipe, RecipePayload, Tag, UploadedImage};
pub use config::ClientConfig;
pub use routing::router::{app_router, Page, Route, RouteMatch, Router, ViewHandle};
