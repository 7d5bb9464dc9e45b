//! Site header.

use trendz_core::{CART_ROUTE, HOME_ROUTE, PRODUCTS_ROUTE};

use super::LOGO_IMAGE_URL;

/// Render the storefront header with navigation links.
pub fn render_header() -> String {
    format!(
        r#"<nav class="nav-header">
    <div class="nav-content">
        <a href="{home}"><img class="website-logo" src="{logo}" alt="website logo"></a>
        <ul class="nav-menu">
            <li class="nav-menu-item"><a href="{home}" class="nav-link">Home</a></li>
            <li class="nav-menu-item"><a href="{products}" class="nav-link">Products</a></li>
            <li class="nav-menu-item"><a href="{cart}" class="nav-link">Cart</a></li>
        </ul>
        <button type="button" class="logout-desktop-btn">Logout</button>
    </div>
</nav>"#,
        home = HOME_ROUTE,
        products = PRODUCTS_ROUTE,
        cart = CART_ROUTE,
        logo = LOGO_IMAGE_URL,
    )
}
