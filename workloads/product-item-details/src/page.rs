//! Page shell wrapping the header and the component.

use crate::sections::{escape_html, render_header};

/// Render a complete HTML document with the site header and `content`.
pub fn render_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Nxt Trendz</title>
    <style>{styles}</style>
</head>
<body>
{header}
<div class="product-item-details-container">
{content}
</div>
</body>
</html>"#,
        title = escape_html(title),
        styles = STYLES,
        header = render_header(),
        content = content,
    )
}

/// CSS for the product item details page.
const STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: 'Roboto', sans-serif; margin: 0; background: #ffffff; color: #1e293b; }
a { text-decoration: none; }

/* Header */
.nav-header { display: flex; justify-content: center; padding: 16px 0; border-bottom: 1px solid #e2e8f0; }
.nav-content { display: flex; align-items: center; justify-content: space-between; width: 90%; max-width: 1110px; }
.website-logo { width: 110px; }
.nav-menu { display: flex; list-style: none; gap: 32px; margin: 0; padding: 0; }
.nav-link { color: #475569; font-weight: 500; }
.logout-desktop-btn { background: #0967d2; color: #ffffff; border: none; border-radius: 4px; padding: 8px 16px; cursor: pointer; }

/* Container */
.product-item-details-container { display: flex; flex-direction: column; align-items: center; min-height: 90vh; padding: 32px 0; }
.products-loader-container { display: flex; justify-content: center; align-items: center; min-height: 50vh; }
.three-dots { display: flex; gap: 8px; }
.dot { width: 14px; height: 14px; border-radius: 50%; background: #0b69ff; }

/* Details */
.product-detail-success-view { width: 90%; max-width: 1110px; }
.product-detail-container { display: flex; gap: 48px; }
.product-img { width: 45%; border-radius: 16px; }
.product { flex: 1; }
.product-name { font-size: 36px; margin: 0 0 8px 0; }
.product-price { font-size: 28px; font-weight: 700; margin: 0; }
.rating-review-count { display: flex; align-items: center; gap: 16px; margin: 12px 0; }
.rating-container { display: flex; align-items: center; gap: 4px; background: #3b82f6; color: #ffffff; border-radius: 8px; padding: 4px 12px; }
.rating { margin: 0; }
.star { width: 14px; }
.review-count { color: #12022f; margin: 0; }
.product-description { color: #616e7c; line-height: 1.6; }
.label-value-container { display: flex; gap: 8px; }
.label { font-weight: 700; margin: 4px 0; }
.value { margin: 4px 0; }
.line { border: 1px solid #cbd2d9; margin: 24px 0; }
.quantity-container { display: flex; align-items: center; gap: 16px; margin: 0; }
.quantity-btn { background: transparent; border: 1px solid #616e7c; border-radius: 4px; width: 28px; height: 28px; cursor: pointer; }
.quantity { font-size: 20px; font-weight: 600; margin: 0; }
.add-cart-btn { background: #3b82f6; color: #ffffff; border: none; border-radius: 8px; padding: 12px 20px; margin-top: 24px; cursor: pointer; }

/* Similar products */
.similar-product-heading { font-size: 32px; margin-top: 48px; }
.similar-product-list { display: flex; flex-wrap: wrap; gap: 24px; list-style: none; padding: 0; }
.similar-product-item { width: 250px; }
.similar-product-img { width: 100%; border-radius: 8px; }
.similar-product-title { font-weight: 600; margin: 8px 0 4px 0; }
.similar-products-brand { color: #594d6d; margin: 0; }
.similar-product-price-rating-container { display: flex; justify-content: space-between; align-items: center; }
.similar-product-price { font-weight: 700; }
.similar-product-rating-container { display: flex; align-items: center; gap: 4px; background: #3b82f6; color: #ffffff; border-radius: 8px; padding: 2px 8px; }
.similar-product-rating { margin: 0; }
.similar-product-star { width: 12px; }

/* Failure / error */
.failure-container { display: flex; flex-direction: column; align-items: center; text-align: center; }
.fail-img { width: 60%; max-width: 500px; }
.failure-heading { font-size: 32px; color: #1e293b; }
.failure-description { color: #616e7c; }
.fail-btn { background: #3b82f6; color: #ffffff; border: none; border-radius: 8px; padding: 12px 24px; cursor: pointer; }
"#;
