//! Not-found view.

use super::{escape_html, ERROR_VIEW_IMAGE_URL};

/// Heading of the not-found view.
pub const PRODUCT_NOT_FOUND_HEADING: &str = "Product Not Found";

/// Render the view shown when the product does not exist.
pub fn render_failure_view(listing_route: &str) -> String {
    format!(
        r#"<div class="failure-container">
    <img src="{image}" alt="error view" class="fail-img">
    <h1 class="failure-heading">{heading}</h1>
    <a href="{listing}">
        <button class="fail-btn" type="button">Continue Shopping</button>
    </a>
</div>"#,
        image = ERROR_VIEW_IMAGE_URL,
        heading = PRODUCT_NOT_FOUND_HEADING,
        listing = escape_html(listing_route),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_view() {
        let html = render_failure_view("/products");
        assert!(html.contains(r#"<h1 class="failure-heading">Product Not Found</h1>"#));
        assert!(html.contains(r#"<a href="/products">"#));
        assert!(html.contains("Continue Shopping"));
    }
}
