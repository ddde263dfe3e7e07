/// Multipart boundary extraction helpers.
pub mod boundary;
/// Part header-block parsing helpers.
pub mod headers;
/// Byte-level delimiter scanning and part splitting.
pub mod scan;

pub use boundary::extract_boundary;
pub use headers::parse_header_block;
pub use scan::{scan_delimiters, split_part};
