use crate::Side;

#[derive(Debug, thiserror::Error)]
pub enum BoundsError {
    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Field name '{0}' does not form a C identifier")]
    InvalidFieldName(String),

    #[error("Field '{field}': no integer representation and no explicit {side} bound")]
    MissingBoundInformation { field: String, side: Side },

    #[error("Field '{field}': radix is required to compute a bound from the integer representation")]
    MissingRadix { field: String },

    #[error("Field '{field}': radix {radix} out of range for a {bits} bit integer")]
    RadixOutOfRange { field: String, radix: u32, bits: u32 },

    #[error("Field '{field}': explicit {side} bound is not a finite {float_type}")]
    NonFiniteBound { field: String, side: Side, float_type: &'static str },

    #[error("Field '{field}': lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { field: String, lower: f64, upper: f64 },

    #[error("Field '{0}' would redefine an existing constant")]
    DuplicateField(String),

    #[error("Invalid include guard: '{0}'")]
    InvalidHeaderGuard(String),

    #[error("IO error writing {context}: {source}")]
    IoError {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl BoundsError {
    /// Create an IoError with the given context and source error.
    pub fn io_error(context: impl Into<String>, source: std::io::Error) -> Self {
        BoundsError::IoError {
            context: context.into(),
            source,
        }
    }
}
