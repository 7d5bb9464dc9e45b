//! Error view for loads that fail for reasons other than not-found.

use crate::state::ErrorKind;

use super::{escape_html, ERROR_VIEW_IMAGE_URL};

/// Links the error view can offer.
#[derive(Debug, Clone, Copy)]
pub struct ErrorViewLinks<'a> {
    /// Path that reloads the current product.
    pub retry: &'a str,
    /// Login route for credential failures.
    pub login: &'a str,
}

/// Render the view shown when loading failed without a not-found answer.
///
/// Credential failures send the visitor to log in; everything else offers a retry.
pub fn render_error_view(kind: &ErrorKind, links: ErrorViewLinks<'_>) -> String {
    let (heading, message, href, action) = match kind {
        ErrorKind::Unauthorized => (
            "Please Log In",
            "Your session has expired or you are not logged in.",
            links.login,
            "Login",
        ),
        ErrorKind::Upstream { .. } | ErrorKind::Transport(_) | ErrorKind::Decode(_) => (
            "Something Went Wrong",
            "We are having some trouble loading this product. Please try again.",
            links.retry,
            "Retry",
        ),
    };

    format!(
        r#"<div class="failure-container error-container" data-error="{label}">
    <img src="{image}" alt="error view" class="fail-img">
    <h1 class="failure-heading">{heading}</h1>
    <p class="failure-description">{message}</p>
    <a href="{href}">
        <button class="fail-btn" type="button">{action}</button>
    </a>
</div>"#,
        label = kind.label(),
        image = ERROR_VIEW_IMAGE_URL,
        heading = heading,
        message = message,
        href = escape_html(href),
        action = action,
    )
}
