//! Route table and resolution.
//!
//! # Responsibilities
//! - Store the ordered route table, compiled once at startup
//! - Resolve a navigation target to a page, its parameters, and its view
//! - Support history-mode URLs rooted at a configurable base path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins; the table order is the priority order
//! - Explicit `None` on no match; not-found rendering is the host's concern
//! - The detail view is loaded lazily on first access, transparent to
//!   resolution itself

use std::sync::OnceLock;

use crate::routing::pattern::{Params, PathPattern};

/// Logical page identifiers for the application's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Recipe list at `/`.
    Home,
    /// Create-recipe form at `/create`.
    Create,
    /// Edit-recipe form at `/edit/:id`.
    Edit,
    /// Recipe detail at `/recipes/:id`.
    RecipeDetail,
}

/// A view reference that is either available immediately or produced by a
/// loader on first access and cached thereafter.
#[derive(Debug)]
pub enum ViewHandle<V> {
    Eager(V),
    Lazy {
        cell: OnceLock<V>,
        load: fn() -> V,
    },
}

impl<V> ViewHandle<V> {
    /// Create a lazy handle from a loader function.
    pub fn lazy(load: fn() -> V) -> Self {
        Self::Lazy {
            cell: OnceLock::new(),
            load,
        }
    }

    /// The view itself. Runs the loader on the first call for lazy handles.
    pub fn view(&self) -> &V {
        match self {
            Self::Eager(v) => v,
            Self::Lazy { cell, load } => cell.get_or_init(load),
        }
    }

    /// Whether the view is materialized (eager, or lazy and already loaded).
    pub fn is_loaded(&self) -> bool {
        match self {
            Self::Eager(_) => true,
            Self::Lazy { cell, .. } => cell.get().is_some(),
        }
    }
}

/// One entry of the route table.
#[derive(Debug)]
pub struct Route<V> {
    pattern: PathPattern,
    page: Page,
    view: ViewHandle<V>,
}

impl<V> Route<V> {
    pub fn new(pattern: &str, page: Page, view: ViewHandle<V>) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            page,
            view,
        }
    }
}

/// A successful resolution: the matched page, extracted parameters, and the
/// route's view handle.
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    pub page: Page,
    pub params: Params,
    handle: &'a ViewHandle<V>,
}

impl<'a, V> RouteMatch<'a, V> {
    /// Convenience lookup of a single parameter value.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The matched route's view, loading it first if it is lazy.
    pub fn view(&self) -> &'a V {
        self.handle.view()
    }
}

/// Ordered route table rooted at a base path.
#[derive(Debug)]
pub struct Router<V> {
    base: String,
    routes: Vec<Route<V>>,
}

impl<V> Router<V> {
    /// Build a router from an ordered list of routes.
    ///
    /// `base` is the history-mode base path; `"/"` or `""` means the
    /// application is served from the root.
    pub fn new(base: impl Into<String>, routes: Vec<Route<V>>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base, routes }
    }

    /// Resolve a navigation target to a route, first match wins.
    ///
    /// The target may carry a query string or fragment; both are ignored for
    /// matching. Targets outside the base path never match.
    pub fn resolve(&self, target: &str) -> Option<RouteMatch<'_, V>> {
        let path = target
            .split(['?', '#'])
            .next()
            .unwrap_or(target);

        let path = if self.base.is_empty() {
            path
        } else {
            let stripped = path.strip_prefix(self.base.as_str())?;
            // "/app" itself means the app root; "/apple" is outside the base
            if !stripped.is_empty() && !stripped.starts_with('/') {
                return None;
            }
            stripped
        };

        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| RouteMatch {
                page: route.page,
                params,
                handle: &route.view,
            })
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

/// The application's route table: list, create form, edit form, and detail.
///
/// Table order is the match priority. The detail view is the one entry
/// loaded lazily, on first access of the resolved view.
pub fn app_router<V>(
    base: impl Into<String>,
    home: V,
    create: V,
    edit: V,
    load_detail: fn() -> V,
) -> Router<V> {
    Router::new(
        base,
        vec![
            Route::new("/", Page::Home, ViewHandle::Eager(home)),
            Route::new("/create", Page::Create, ViewHandle::Eager(create)),
            Route::new("/edit/:id", Page::Edit, ViewHandle::Eager(edit)),
            Route::new("/recipes/:id", Page::RecipeDetail, ViewHandle::lazy(load_detail)),
        ],
    )
}
