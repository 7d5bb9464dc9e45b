//! Loading indicator.

/// Render the loading view shown while the product is being fetched.
pub fn render_loading_view() -> String {
    r#"<div class="products-loader-container" data-testid="loader">
    <div class="three-dots" role="status" aria-label="Loading">
        <span class="dot"></span><span class="dot"></span><span class="dot"></span>
    </div>
</div>"#
        .to_string()
}
