//! Error types for framemenu.
//!
//! Every variant is a contract violation by the caller: the call that
//! produced it had no effect. Internal consistency faults are not
//! represented here; they panic.

use thiserror::Error;

/// Errors returned by menu operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A numeric value lies outside `[minimum, maximum]`.
    #[error("value {value} is outside [{minimum}, {maximum}]")]
    ValueOutOfRange {
        /// Rejected value
        value: String,
        /// Lower bound
        minimum: String,
        /// Upper bound
        maximum: String,
    },

    /// A numeric value is in range but does not land on an option.
    #[error("value {value} is not minimum + n * {increment}")]
    ValueNotOnStep {
        /// Rejected value
        value: String,
        /// Step between options
        increment: String,
    },

    /// Increment must be strictly positive.
    #[error("increment must be greater than zero, got {0}")]
    InvalidIncrement(String),

    /// An index does not address an element.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Collection length
        len: usize,
    },

    /// The menu handle is not registered.
    #[error("unknown menu {0}")]
    UnknownMenu(u32),

    /// The menu handle was disposed.
    #[error("menu {0} has been disposed")]
    MenuDisposed(u32),

    /// A menu was shown as its own parent.
    #[error("menu {0} cannot be shown as its own child")]
    InvalidParent(u32),

    /// Configuration could not be parsed or validated.
    #[error("invalid menu configuration: {0}")]
    Config(String),
}

/// Result alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
