//! Stepper query string: `?quantity=2&step=increment`.
//!
//! The stepper renders as a GET form, so a click reloads the page with the
//! current quantity and the pressed button in the query.

use serde::Deserialize;

use crate::state::Quantity;

/// Query parameter carrying the quantity shown when the button was pressed.
pub const QUANTITY_PARAM: &str = "quantity";
/// Query parameter carrying the pressed stepper button.
pub const STEP_PARAM: &str = "step";

/// A stepper button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Increment,
    Decrement,
}

impl StepAction {
    /// Value submitted by the button.
    pub fn as_str(self) -> &'static str {
        match self {
            StepAction::Increment => "increment",
            StepAction::Decrement => "decrement",
        }
    }
}

/// Stepper state carried in the page query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StepperQuery {
    /// Quantity before the step.
    pub quantity: Option<u32>,
    /// Button pressed, if any.
    pub step: Option<StepAction>,
}

impl StepperQuery {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Unrelated parameters are ignored. A malformed query yields the empty
    /// query, leaving the quantity at its default.
    pub fn parse(query: &str) -> Self {
        serde_urlencoded::from_str(query.trim_start_matches('?')).unwrap_or_default()
    }

    /// The quantity to restore, floored at one.
    pub fn quantity(&self) -> Option<Quantity> {
        self.quantity.map(Quantity::new)
    }
}
