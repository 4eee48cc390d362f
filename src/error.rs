use thiserror::Error;

/// Errors produced while decoding or encoding feed messages.
///
/// There is deliberately no validation variant: structurally valid but
/// semantically odd data (both `home` and `away` flags set, duplicate
/// match ids) decodes successfully. Validation is a consumer concern.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Input is not well-formed XML. Fatal to the decode call that
    /// produced it; no partial structure is returned.
    #[error("malformed XML document: {0}")]
    MalformedDocument(String),

    /// An attribute or text value could not be converted to its declared
    /// scalar type (numeric overflow, non-boolean token, etc.).
    #[error("cannot convert {path}=\"{raw}\" to {target}")]
    TypeConversion {
        /// Path of the offending field, e.g. `Match/Odds/@combination`.
        path: String,
        /// The raw wire text that failed to convert.
        raw: String,
        /// Name of the target scalar type.
        target: &'static str,
    },

    /// The encoder failed to write an event. Output goes to an in-memory
    /// buffer, so this is effectively unreachable in practice.
    #[error("XML write error: {0}")]
    Write(String),
}

impl FeedError {
    pub(crate) fn conversion(path: impl Into<String>, raw: &str, target: &'static str) -> Self {
        FeedError::TypeConversion {
            path: path.into(),
            raw: raw.to_string(),
            target,
        }
    }
}
