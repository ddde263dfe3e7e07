#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Byte-exact decoder for multipart HTTP response bodies.
//!
//! Takes a complete response buffer plus the response `Content-Type` value
//! and splits it into an ordered sequence of [`Part`]s, each carrying its own
//! headers and an opaque binary body. Delimiter matching is byte-level, so
//! binary payloads (images, archives) survive unmodified even when they
//! contain boundary-lookalike byte sequences; only each part's isolated
//! header block is decoded as text.
//!
//! The decoder is pure and synchronous: no I/O, no logging, no partial
//! results. Any malformed input fails the whole call with a [`DecodeError`]
//! naming the stage and, where known, the byte offset.
//!
//! ```
//! let body = b"--B\r\nContent-Type: application/json\r\n\r\n{\"status\":\"done\"}\r\n--B--\r\n";
//!
//! let result = multisplit::decode(&body[..], "multipart/mixed; boundary=B")
//!     .expect("well-formed multipart body");
//! let part = &result.parts()[0];
//! assert_eq!(part.content_type(), Some("application/json"));
//! assert_eq!(part.text(), Some("{\"status\":\"done\"}"));
//! ```

/// Error types exposed by this crate.
pub mod error;
/// Low-level decoding stages: boundary extraction, delimiter scanning,
/// header parsing.
pub mod parser;
/// Decoded part model.
pub mod part;

use bytes::Bytes;

pub use error::DecodeError;
pub use parser::extract_boundary;
pub use part::{DecodeResult, Part, PartHeaders};

/// Decodes a complete multipart response body.
///
/// `content_type` is the response `Content-Type` header value; the multipart
/// boundary is extracted from its `boundary` parameter. Part bodies are
/// zero-copy [`Bytes`] views into `buffer`.
///
/// Decoding is all-or-nothing: the first failure in any stage aborts the
/// call and is returned as a single [`DecodeError`].
pub fn decode(buffer: impl Into<Bytes>, content_type: &str) -> Result<DecodeResult, DecodeError> {
    let boundary = parser::extract_boundary(content_type)?;
    decode_with_boundary(buffer, &boundary)
}

/// Decodes a complete multipart response body with an already known boundary.
///
/// Same contract as [`decode`], for callers that extracted the boundary
/// themselves.
pub fn decode_with_boundary(
    buffer: impl Into<Bytes>,
    boundary: &str,
) -> Result<DecodeResult, DecodeError> {
    let buffer = buffer.into();
    let ranges = parser::scan_delimiters(&buffer, boundary)?;

    let mut parts = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (header_range, body_range) = parser::split_part(&buffer, range)?;
        let headers = parser::parse_header_block(&buffer[header_range.clone()], header_range.start)?;
        parts.push(Part::new(headers, buffer.slice(body_range)));
    }

    Ok(DecodeResult::new(parts))
}
