//! Product summaries and the record projection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::ProductId;

/// Field of a product record that embeds its similar products.
pub const SIMILAR_PRODUCTS_FIELD: &str = "similar_products";

/// The normalized product shape used for display.
///
/// Exactly nine fields; everything else in an API record is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    pub rating: f64,
    pub availability: String,
    pub total_reviews: u64,
    pub image_url: String,
}

/// Error projecting an API record.
#[derive(Debug, thiserror::Error)]
#[error("invalid product record at {path}: {message}")]
pub struct ProjectionError {
    /// Location of the bad record, e.g. `$` or `$.similar_products[2]`.
    pub path: String,
    /// What was wrong with it.
    pub message: String,
}

impl ProjectionError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Project a raw API record onto a [`ProductSummary`].
///
/// Unknown fields are ignored; any of the nine fields missing or of the wrong
/// type is an error.
pub fn project(record: &Value) -> Result<ProductSummary, ProjectionError> {
    project_at(record, "$")
}

fn project_at(record: &Value, path: &str) -> Result<ProductSummary, ProjectionError> {
    if !record.is_object() {
        return Err(ProjectionError::new(path, "expected an object"));
    }
    ProductSummary::deserialize(record).map_err(|e| ProjectionError::new(path, e.to_string()))
}

/// A product with its similar products, as shown on the details page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub product: ProductSummary,
    pub similar_products: Vec<ProductSummary>,
}

impl ProductDetails {
    /// Project a full details record: the root and every entry of
    /// `similar_products`, independently and in order.
    ///
    /// A missing or null `similar_products` is an empty list.
    pub fn from_record(record: &Value) -> Result<Self, ProjectionError> {
        let product = project(record)?;

        let similar_products = match record.get(SIMILAR_PRODUCTS_FIELD) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    project_at(item, &format!("$.{}[{}]", SIMILAR_PRODUCTS_FIELD, i))
                })
                .collect::<Result<_, _>>()?,
            Some(_) => {
                return Err(ProjectionError::new(
                    format!("$.{}", SIMILAR_PRODUCTS_FIELD),
                    "expected an array",
                ))
            }
        };

        Ok(Self {
            product,
            similar_products,
        })
    }
}
