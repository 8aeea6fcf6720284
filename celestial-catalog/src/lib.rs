//! Messier deep-sky catalog with positional queries.
//!
//! The 110 Messier objects are compiled into the crate with J2000.0
//! positions and loaded once into a shared [`Catalog`]. Queries take
//! [`EquatorialPosition<J2000>`](celestial_coords::EquatorialPosition), so a
//! position must be precessed to J2000 before it can be matched.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`messier`] | The compiled Messier table and reference links |
//! | [`query::nearest`] | [`NearestMatcher`](query::NearestMatcher), [`CatalogMatch`](query::CatalogMatch) |
//! | [`query::cone`] | [`cone_search`](query::cone_search), [`ConeSearchParams`](query::ConeSearchParams) |
//!
//! # Quick Start
//!
//! ```
//! use celestial_catalog::query::NearestMatcher;
//! use celestial_coords::{EquatorialPosition, J2000};
//!
//! let matcher = NearestMatcher::messier();
//! let target = EquatorialPosition::<J2000>::from_degrees(10.68, 41.27);
//! assert_eq!(matcher.find(&target).label(), "Andromeda Galaxy");
//! ```
//!
//! # Features
//!
//! - **`serde`**: serialization for [`CatalogObject`] and
//!   [`CatalogMatch`](query::CatalogMatch).
//! - **`cli`**: enables the `messier-query` binary.

mod catalog;
pub mod messier;
mod object;
pub mod query;

pub use catalog::Catalog;
pub use object::CatalogObject;
