//! Wire types for the recipe API.
//!
//! Shapes mirror the backend's JSON responses exactly; these are the
//! compatibility contract with any server implementation.

use serde::{Deserialize, Serialize};

/// A tag attached to one or more recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// A recipe as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Create/update request body.
///
/// `tags` is the comma-separated tag string the server splits and
/// deduplicates itself. Absent optional fields are omitted from the JSON,
/// so the server's field-by-field update semantics apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Response to an image upload: where the stored file is served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub image_url: String,
}

/// Plain acknowledgement body, e.g. from a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
