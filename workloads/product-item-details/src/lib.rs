//! Product Item Details - Nxt Trendz storefront component.
//!
//! Shows one product with a quantity stepper and a list of similar products:
//! - Reads the product id from the `/products/:id` route
//! - Fetches `{api}/products/{id}` with the user's bearer token
//! - Restores the quantity stepper from the page query
//! - Renders a loader, the details view, a not-found view or an error view
//!   depending on where the fetch settled

mod component;
mod fetch;
mod lifecycle;
mod page;
mod query;
mod sections;
mod state;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use component::{
    FetchCompletion, PendingFetch, ProductItemDetails, PRODUCT_DEPENDENCY, PRODUCT_ID_PARAM,
};
pub use fetch::{details_from_response, request_product, settle, LoadError};
pub use lifecycle::CancellationToken;
pub use page::render_page;
pub use query::{StepAction, StepperQuery, QUANTITY_PARAM, STEP_PARAM};
pub use sections::{
    render_error_view, render_failure_view, render_header, render_loading_view,
    render_product_details_view, render_quantity_stepper, similar_item_keys, ErrorViewLinks,
    SimilarItemRenderer, SimilarProductItem, ERROR_VIEW_IMAGE_URL, LOGO_IMAGE_URL,
    PRODUCT_NOT_FOUND_HEADING, STAR_IMAGE_URL,
};
pub use state::{ApiStatus, ErrorKind, Quantity, ViewState};
