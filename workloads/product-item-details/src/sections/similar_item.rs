//! Similar product list items.

use std::collections::HashSet;

use trendz_catalog::format::{format_number, format_price};
use trendz_catalog::ProductSummary;

use super::{escape_html, STAR_IMAGE_URL};

/// Renders one entry of the similar products list.
pub trait SimilarItemRenderer {
    /// Render `product` as a list item carrying `key`.
    fn render_item(&self, product: &ProductSummary, key: &str) -> String;
}

/// The storefront's similar product card.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarProductItem;

impl SimilarItemRenderer for SimilarProductItem {
    fn render_item(&self, product: &ProductSummary, key: &str) -> String {
        format!(
            r#"<li class="similar-product-item" data-key="{key}">
    <img src="{image}" class="similar-product-img" alt="similar product {title}">
    <p class="similar-product-title">{title}</p>
    <p class="similar-products-brand">by {brand}</p>
    <div class="similar-product-price-rating-container">
        <p class="similar-product-price">{price}</p>
        <div class="similar-product-rating-container">
            <p class="similar-product-rating">{rating}</p>
            <img src="{star}" alt="star" class="similar-product-star">
        </div>
    </div>
</li>"#,
            key = escape_html(key),
            image = escape_html(&product.image_url),
            title = escape_html(&product.title),
            brand = escape_html(&product.brand),
            price = format_price(product.price),
            rating = format_number(product.rating),
            star = STAR_IMAGE_URL,
        )
    }
}

/// List keys for similar products: the product id, with `-2`, `-3`, ... appended
/// to repeated ids so every key is unique and the same input yields the same keys.
pub fn similar_item_keys(products: &[ProductSummary]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    products
        .iter()
        .map(|p| {
            let mut key = p.id.to_string();
            let mut n = 1;
            while used.contains(&key) {
                n += 1;
                key = format!("{}-{}", p.id, n);
            }
            used.insert(key.clone());
            key
        })
        .collect()
}
