//! Error types for the extract module

use thiserror::Error;

/// Error type for specification extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A field the record cannot exist without was not on the page
    #[error("Required field missing: {field}")]
    MissingRequiredField {
        /// Name of the missing field
        field: &'static str,
    },
}
