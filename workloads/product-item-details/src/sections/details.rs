//! Product details view.

use trendz_catalog::format::{format_number, format_price, format_review_count};
use trendz_catalog::{ProductDetails, ProductSummary};

use crate::state::Quantity;

use super::{escape_html, render_quantity_stepper, similar_item_keys, SimilarItemRenderer, STAR_IMAGE_URL};

/// Render the loaded product, the quantity stepper and the similar products list.
pub fn render_product_details_view(
    details: &ProductDetails,
    quantity: Quantity,
    similar_item: &dyn SimilarItemRenderer,
) -> String {
    format!(
        r#"<div class="product-detail-success-view">
    {product}
    <h1 class="similar-product-heading">Similar Products</h1>
    {similar}
</div>"#,
        product = render_product(&details.product, quantity),
        similar = render_similar_products(&details.similar_products, similar_item),
    )
}

fn render_product(product: &ProductSummary, quantity: Quantity) -> String {
    format!(
        r#"<div class="product-detail-container">
        <img src="{image}" class="product-img" alt="product">
        <div class="product">
            <h1 class="product-name">{title}</h1>
            <p class="product-price">{price}</p>
            <div class="rating-review-count">
                <div class="rating-container">
                    <p class="rating">{rating}</p>
                    <img src="{star}" alt="star" class="star">
                </div>
                <p class="review-count">{reviews}</p>
            </div>
            <p class="product-description">{description}</p>
            <div class="label-value-container">
                <p class="label">Available:</p>
                <p class="value">{availability}</p>
            </div>
            <div class="label-value-container">
                <p class="label">Brand:</p>
                <p class="value">{brand}</p>
            </div>
            <hr class="line">
            {stepper}
            <button type="button" class="add-cart-btn">ADD TO CART</button>
        </div>
    </div>"#,
        image = escape_html(&product.image_url),
        title = escape_html(&product.title),
        price = format_price(product.price),
        rating = format_number(product.rating),
        star = STAR_IMAGE_URL,
        reviews = format_review_count(product.total_reviews),
        description = escape_html(&product.description),
        availability = escape_html(&product.availability),
        brand = escape_html(&product.brand),
        stepper = render_quantity_stepper(quantity),
    )
}

fn render_similar_products(
    products: &[ProductSummary],
    similar_item: &dyn SimilarItemRenderer,
) -> String {
    let items: String = products
        .iter()
        .zip(similar_item_keys(products))
        .map(|(product, key)| similar_item.render_item(product, &key))
        .collect();

    format!(r#"<ul class="similar-product-list">{}</ul>"#, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SimilarProductItem;
    use trendz_catalog::ProductId;

    fn summary(id: &str, title: &str) -> ProductSummary {
        ProductSummary {
            id: ProductId::new(id),
            title: title.to_string(),
            description: "Soft & light".to_string(),
            brand: "MAJIK".to_string(),
            price: 288.0,
            rating: 3.6,
            availability: "In Stock".to_string(),
            total_reviews: 8,
            image_url: "https://assets.test/hat.png".to_string(),
        }
    }

    #[test]
    fn test_renders_product_fields() {
        let details = ProductDetails {
            product: summary("16", "Wide Bowknot Hat"),
            similar_products: Vec::new(),
        };
        let html = render_product_details_view(&details, Quantity::new(2), &SimilarProductItem);
        assert!(html.contains(r#"<h1 class="product-name">Wide Bowknot Hat</h1>"#));
        assert!(html.contains(r#"<p class="product-price">Rs 288/-</p>"#));
        assert!(html.contains(r#"<p class="rating">3.6</p>"#));
        assert!(html.contains(r#"<p class="review-count">8 Reviews</p>"#));
        assert!(html.contains("Soft &amp; light"));
        assert!(html.contains(r#"<p class="value">MAJIK</p>"#));
        assert!(html.contains(r#"data-testid="quantity">2</p>"#));
        assert!(html.contains("ADD TO CART"));
        assert!(html.contains(r#"<ul class="similar-product-list"></ul>"#));
    }

    #[test]
    fn test_renders_similar_products_in_order() {
        let details = ProductDetails {
            product: summary("16", "Hat"),
            similar_products: vec![summary("1", "First"), summary("2", "Second")],
        };
        let html = render_product_details_view(&details, Quantity::MIN, &SimilarProductItem);
        assert_eq!(html.matches("<li class=\"similar-product-item\"").count(), 2);
        let first = html.find(r#"data-key="1""#).unwrap();
        let second = html.find(r#"data-key="2""#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_uses_injected_item_renderer() {
        struct Plain;
        impl SimilarItemRenderer for Plain {
            fn render_item(&self, product: &ProductSummary, key: &str) -> String {
                format!("<li key={}>{}</li>", key, product.title)
            }
        }

        let details = ProductDetails {
            product: summary("16", "Hat"),
            similar_products: vec![summary("9", "Scarf")],
        };
        let html = render_product_details_view(&details, Quantity::MIN, &Plain);
        assert!(html.contains("<li key=9>Scarf</li>"));
    }
}
