use crate::error::DecodeError;
use crate::part::PartHeaders;

/// Parses one part's header block into an ordered header collection.
///
/// Only this slice is ever decoded as text; its byte range was already fixed
/// by byte-level delimiter matching, so part bodies never pass through here.
/// `base_offset` is the block's position in the original buffer and is used
/// to report absolute offsets in errors.
///
/// Lines split on `\n` with a trailing `\r` stripped; empty lines are
/// skipped. Header folding is unsupported: a line starting with whitespace
/// is rejected rather than merged into the previous value. Keys keep their
/// original casing; duplicates are appended in order.
pub fn parse_header_block(raw: &[u8], base_offset: usize) -> Result<PartHeaders, DecodeError> {
    let text = std::str::from_utf8(raw).map_err(|err| DecodeError::MalformedHeaderLine {
        offset: base_offset + err.valid_up_to(),
    })?;

    let mut headers = PartHeaders::new();
    let mut line_offset = base_offset;

    for line in text.split('\n') {
        let offset = line_offset;
        line_offset += line.len() + 1;

        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            return Err(DecodeError::MalformedHeaderLine { offset });
        }

        let Some((raw_key, raw_value)) = line.split_once(':') else {
            return Err(DecodeError::MalformedHeaderLine { offset });
        };

        let key = raw_key.trim();
        if key.is_empty() {
            return Err(DecodeError::MalformedHeaderLine { offset });
        }

        headers.append(key.to_owned(), raw_value.trim().to_owned());
    }

    Ok(headers)
}
