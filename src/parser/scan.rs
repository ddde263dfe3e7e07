use std::ops::Range;

use crate::error::DecodeError;

/// Scans `buffer` for delimiter lines and returns one byte range per part.
///
/// Matching is byte-exact and the buffer is never decoded as text: a
/// candidate is `--` plus the boundary bytes at offset zero or immediately
/// after an end-of-line marker (`\r\n` or `\n`). The same byte sequence in
/// the middle of a line is part payload, never a delimiter. A candidate
/// followed by `--` closes the whole body; one followed by an end-of-line
/// marker separates parts; anything else (the boundary as a prefix of a
/// longer token) is a false match and scanning continues.
///
/// Each returned range runs from just after a normal delimiter's end-of-line
/// marker to the start of the next delimiter line, so it still carries the
/// framing end-of-line stripped later by [`split_part`]. Bytes before the
/// first delimiter (preamble) and after the closing delimiter (epilogue) are
/// discarded.
pub fn scan_delimiters(buffer: &[u8], boundary: &str) -> Result<Vec<Range<usize>>, DecodeError> {
    if boundary.is_empty() {
        return Err(DecodeError::EmptyBoundary);
    }

    let delimiter = format!("--{boundary}").into_bytes();
    let mut ranges = Vec::new();
    let mut open: Option<usize> = None;
    let mut last_delimiter = 0usize;
    let mut closed = false;

    let mut pos = 0usize;
    while pos < buffer.len() {
        if buffer[pos..].starts_with(&delimiter) {
            let after = &buffer[pos + delimiter.len()..];

            if after.starts_with(b"--") {
                if let Some(start) = open.take() {
                    ranges.push(start..pos);
                }
                closed = true;
                break;
            }

            if let Some(eol) = eol_width(after) {
                if let Some(start) = open.take() {
                    ranges.push(start..pos);
                }
                last_delimiter = pos;
                pos += delimiter.len() + eol;
                open = Some(pos);
                continue;
            }
            // False match: the boundary is a prefix of a longer token on
            // this line. Fall through and resume at the next line start.
        }

        match buffer[pos..].iter().position(|&byte| byte == b'\n') {
            Some(newline) => pos += newline + 1,
            None => break,
        }
    }

    if !closed {
        if open.is_none() {
            return Err(DecodeError::NoParts);
        }
        return Err(DecodeError::UnterminatedMultipart {
            offset: last_delimiter,
        });
    }

    if ranges.is_empty() {
        return Err(DecodeError::NoParts);
    }

    Ok(ranges)
}

/// Splits one part range into its header block and body ranges.
///
/// The header block ends at the first blank line: a leading end-of-line
/// marker (empty header block), or the earliest `\r\n\r\n` / `\n\n`
/// occurrence. The body runs from just after the blank line to the end of
/// the range minus the single end-of-line marker that frames the next
/// delimiter line. Both returned ranges are absolute offsets into the
/// original buffer; the body range is never inspected further.
pub fn split_part(
    buffer: &[u8],
    range: Range<usize>,
) -> Result<(Range<usize>, Range<usize>), DecodeError> {
    let raw = &buffer[range.clone()];
    let (header_len, body_offset) =
        find_blank_line(raw).ok_or(DecodeError::MalformedPart {
            offset: range.start,
        })?;

    let mut body_len = raw.len() - body_offset;
    let body = &raw[body_offset..];
    if body.ends_with(b"\r\n") {
        body_len -= 2;
    } else if body.ends_with(b"\n") {
        body_len -= 1;
    }

    let header_range = range.start..range.start + header_len;
    let body_start = range.start + body_offset;
    Ok((header_range, body_start..body_start + body_len))
}

fn find_blank_line(raw: &[u8]) -> Option<(usize, usize)> {
    // A part may carry zero headers; the lone blank line then sits at the
    // very start of the range.
    if raw.starts_with(b"\r\n") {
        return Some((0, 2));
    }
    if raw.starts_with(b"\n") {
        return Some((0, 1));
    }

    let crlf = find_subslice(raw, b"\r\n\r\n");
    let lf = find_subslice(raw, b"\n\n");
    match (crlf, lf) {
        (Some(c), Some(l)) if c < l => Some((c, c + 4)),
        (Some(c), None) => Some((c, c + 4)),
        (_, Some(l)) => Some((l, l + 2)),
        (None, None) => None,
    }
}

fn eol_width(bytes: &[u8]) -> Option<usize> {
    if bytes.starts_with(b"\r\n") {
        return Some(2);
    }
    if bytes.starts_with(b"\n") {
        return Some(1);
    }
    None
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
