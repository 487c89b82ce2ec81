use holdfast_types::SchemeKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The scheme in the context is not the one this codec encodes.
    #[error("codec handles the {expected} scheme, context is {actual}")]
    UnsupportedScheme {
        expected: SchemeKind,
        actual: SchemeKind,
    },

    /// A tag field does not have the length the scheme parameters fix.
    #[error("{field} is {actual} bytes, scheme parameters require {expected}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The buffer ends before one full record.
    #[error("record truncated: need {expected} bytes, have {actual}")]
    Truncated { expected: usize, actual: usize },
}
