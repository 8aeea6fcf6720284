//! Positional queries over a [`Catalog`](crate::Catalog).
//!
//! - [`nearest`]: single closest object within an acceptance threshold
//! - [`cone`]: every object within a radius, closest first

pub mod cone;
pub mod nearest;

pub use cone::{cone_search, ConeSearchParams, ConeSearchResult};
pub use nearest::{CatalogMatch, NearestMatcher, DEFAULT_THRESHOLD_DEG, NO_MATCH_LABEL};
