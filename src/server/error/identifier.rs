use thiserror::Error;

/// Client-supplied identifier that cannot be parsed.
#[derive(Error, Debug)]
pub enum IdentifierError {
    /// The value is not a 24 character hex string.
    #[error("Invalid identifier '{value}': {source}")]
    Malformed {
        /// The string value that failed to parse
        value: String,
        /// The underlying hex decoding error
        #[source]
        source: hex::FromHexError,
    },
}
