use crate::error::DecodeError;

/// Extracts the `boundary` parameter from a `Content-Type` value.
///
/// The parameter name is matched case-insensitively; the value is returned
/// verbatim (case-sensitive) after stripping one layer of surrounding quotes
/// and backslash escapes inside them. The body buffer is never inspected
/// here.
pub fn extract_boundary(content_type: &str) -> Result<String, DecodeError> {
    // Segment zero is the media type itself; parameters follow.
    for segment in split_parameters(content_type).into_iter().skip(1) {
        let trimmed = segment.trim();
        let Some((raw_key, raw_value)) = trimmed.split_once('=') else {
            continue;
        };

        if !raw_key.trim().eq_ignore_ascii_case("boundary") {
            continue;
        }

        let boundary = unquote(raw_value.trim());
        if boundary.is_empty() {
            return Err(DecodeError::EmptyBoundary);
        }
        return Ok(boundary);
    }

    Err(DecodeError::MissingBoundary)
}

fn unquote(raw: &str) -> String {
    let Some(stripped) = raw.strip_prefix('"').and_then(|v| v.strip_suffix('"')) else {
        return raw.to_owned();
    };

    let mut out = String::with_capacity(stripped.len());
    let mut chars = stripped.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                // Dangling escape at the end of the value; keep it verbatim.
                None => out.push(ch),
            }
            continue;
        }
        out.push(ch);
    }

    out
}

fn split_parameters(value: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in value.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_quotes => {
                current.push(ch);
                escaped = true;
            }
            '"' => {
                current.push(ch);
                in_quotes = !in_quotes;
            }
            ';' if !in_quotes => {
                segments.push(current);
                current = String::new();
            }
            _ => current.push(ch),
        }
    }

    segments.push(current);
    segments
}
