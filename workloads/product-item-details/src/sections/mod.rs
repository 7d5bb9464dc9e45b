//! Section renderers for the product item details component.

mod details;
mod error;
mod failure;
mod header;
mod loader;
mod similar_item;
mod stepper;

pub use details::*;
pub use error::*;
pub use failure::*;
pub use header::*;
pub use loader::*;
pub use similar_item::*;
pub use stepper::*;

/// Site logo.
pub const LOGO_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-trendz-logo-img.png";
/// Illustration shown when a product cannot be loaded.
pub const ERROR_VIEW_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-trendz-error-view-img.png";
/// Star icon next to ratings.
pub const STAR_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/star-img.png";

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
