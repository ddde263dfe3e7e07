use thiserror::Error;

/// Decode failures surfaced by this crate.
///
/// Every variant is fatal to the decode call that produced it: the decoder
/// returns no partial results and performs no recovery. Variants that are
/// detected at a known position in the input buffer carry that position as a
/// byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The `Content-Type` value has no `boundary` parameter.
    #[error("Content-Type has no boundary parameter")]
    MissingBoundary,
    /// The boundary extracted from `Content-Type` (or supplied directly) is
    /// zero-length.
    #[error("multipart boundary is empty")]
    EmptyBoundary,
    /// The buffer contains no part delimiter lines.
    #[error("multipart body contains no delimiter lines")]
    NoParts,
    /// A delimiter opened a part but no closing delimiter followed.
    #[error("no closing delimiter after the delimiter at offset {offset}")]
    UnterminatedMultipart {
        /// Byte offset of the last normal delimiter line.
        offset: usize,
    },
    /// A part has no blank line separating its headers from its body.
    #[error("part at offset {offset} has no blank line between headers and body")]
    MalformedPart {
        /// Byte offset at which the part's raw content starts.
        offset: usize,
    },
    /// A header line lacks a colon, starts with whitespace (folding is
    /// unsupported), has an empty key, or is not valid UTF-8.
    #[error("malformed header line at offset {offset}")]
    MalformedHeaderLine {
        /// Byte offset of the offending line (or of the first invalid byte).
        offset: usize,
    },
}

impl DecodeError {
    /// Returns the byte offset at which the failure was detected, for the
    /// variants that carry one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnterminatedMultipart { offset }
            | Self::MalformedPart { offset }
            | Self::MalformedHeaderLine { offset } => Some(*offset),
            _ => None,
        }
    }
}
