//! Error types.
//!
//! Nothing here is fatal to the process. Input errors leave the model
//! untouched; render errors drop a single item from the frame.

use thiserror::Error;

use crate::model::ItemId;

/// Rejected user input. The previous state is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} must be at most {max}, got {value}")]
    TooLarge { field: &'static str, value: i64, max: i64 },

    #[error("scale factor must be a finite number, got {0:?}")]
    InvalidScale(String),

    #[error("no furniture item with id {0}")]
    UnknownItem(ItemId),
}

impl InputError {
    /// Message suitable for a validation dialog.
    pub fn user_message(&self) -> String {
        match self {
            InputError::NotANumber { .. } | InputError::NotPositive { .. } | InputError::TooLarge { .. } => {
                "Please enter valid numbers for room dimensions".to_owned()
            }
            InputError::InvalidScale(_) => "Please enter a valid number".to_owned(),
            InputError::UnknownItem(_) => "Please select an item".to_owned(),
        }
    }
}

/// Failure to build geometry for one furniture item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("item {id}: scale {scale} is not a finite positive number")]
    DegenerateScale { id: ItemId, scale: f32 },

    #[error("item {id}: produced non-finite geometry")]
    NonFiniteGeometry { id: ItemId },

    #[error("item {id}: coordinates exceed the drawable range")]
    OutOfRange { id: ItemId },
}
