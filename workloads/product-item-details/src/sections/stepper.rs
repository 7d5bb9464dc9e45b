//! Quantity stepper.

use crate::query::{StepAction, QUANTITY_PARAM, STEP_PARAM};
use crate::state::Quantity;

/// Render the quantity stepper: minus button, current value, plus button.
///
/// The buttons submit a GET form back to the current page with the shown
/// quantity and the pressed button.
pub fn render_quantity_stepper(quantity: Quantity) -> String {
    format!(
        r#"<form class="quantity-container" method="get">
    <input type="hidden" name="{quantity_param}" value="{quantity}">
    <button type="submit" name="{step_param}" value="{decrement}" data-testid="minus" class="quantity-btn" aria-label="Decrease quantity">
        <span class="quantity-icon">&#8722;</span>
    </button>
    <p class="quantity" data-testid="quantity">{quantity}</p>
    <button type="submit" name="{step_param}" value="{increment}" data-testid="plus" class="quantity-btn" aria-label="Increase quantity">
        <span class="quantity-icon">+</span>
    </button>
</form>"#,
        quantity_param = QUANTITY_PARAM,
        step_param = STEP_PARAM,
        decrement = StepAction::Decrement.as_str(),
        increment = StepAction::Increment.as_str(),
        quantity = quantity,
    )
}
