//! View state for the product item details component.

use std::fmt;

use trendz_catalog::ProductDetails;

/// Why a load ended in the error state rather than success or not-found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No usable credential, or the API rejected it (401/403).
    Unauthorized,
    /// The API answered with a status other than 2xx, 401, 403 or 404.
    Upstream { status: u16 },
    /// The request never produced a response.
    Transport(String),
    /// The response body was not a valid product record.
    Decode(String),
}

impl ErrorKind {
    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Upstream { .. } => "upstream",
            ErrorKind::Transport(_) => "transport",
            ErrorKind::Decode(_) => "decode",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Unauthorized => write!(f, "not authorized"),
            ErrorKind::Upstream { status } => write!(f, "products API returned {}", status),
            ErrorKind::Transport(msg) => write!(f, "request failed: {}", msg),
            ErrorKind::Decode(msg) => write!(f, "invalid product data: {}", msg),
        }
    }
}

/// Load status of the component. Loaded data lives inside `Success`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiStatus {
    /// Created, fetch not yet started.
    Initial,
    /// Fetch in flight.
    InProgress,
    /// Product and similar products loaded.
    Success(ProductDetails),
    /// The product does not exist.
    Failure,
    /// The load failed for any other reason.
    Error(ErrorKind),
}

impl ApiStatus {
    /// Short label used in logs and tests.
    pub fn name(&self) -> &'static str {
        match self {
            ApiStatus::Initial => "INITIAL",
            ApiStatus::InProgress => "IN_PROGRESS",
            ApiStatus::Success(_) => "SUCCESS",
            ApiStatus::Failure => "FAILURE",
            ApiStatus::Error(_) => "ERROR",
        }
    }

    /// Whether the loading indicator is shown for this status.
    pub fn is_loading(&self) -> bool {
        matches!(self, ApiStatus::Initial | ApiStatus::InProgress)
    }

    /// Whether a request has finished, one way or another.
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}

/// Selected quantity, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest quantity.
    pub const MIN: Quantity = Quantity(1);

    /// Create a quantity, clamping to the minimum.
    pub fn new(value: u32) -> Self {
        Self(value.max(Self::MIN.0))
    }

    /// The numeric value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// One more, saturating at `u32::MAX`.
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One less, unless already at the minimum.
    pub fn decremented(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The component's entire local state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub status: ApiStatus,
    pub quantity: Quantity,
}

impl ViewState {
    /// Fresh state: `Initial`, quantity one.
    pub fn new() -> Self {
        Self {
            status: ApiStatus::Initial,
            quantity: Quantity::MIN,
        }
    }

    /// Loaded details, when the status is `Success`.
    pub fn details(&self) -> Option<&ProductDetails> {
        match &self.status {
            ApiStatus::Success(details) => Some(details),
            _ => None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
