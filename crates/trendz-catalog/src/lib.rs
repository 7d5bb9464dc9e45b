//! Product catalog types for the Trendz storefront.
//!
//! Raw API records carry many fields; components only ever see the
//! nine-field [`ProductSummary`] produced by [`project`].

pub mod format;
pub mod ids;
mod product;

pub use ids::ProductId;
pub use product::{project, ProductDetails, ProductSummary, ProjectionError};
