use bytes::Bytes;

/// Ordered multipart part headers.
///
/// Keys keep the casing they had on the wire; lookups compare
/// case-insensitively. Duplicate keys are retained in insertion order and
/// reachable through [`PartHeaders::get_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartHeaders {
    entries: Vec<(String, String)>,
}

impl PartHeaders {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, name: String, value: String) {
        self.entries.push((name, value));
    }

    /// Returns the first value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns every value for `name` in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns whether any header with `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of header entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// One decoded multipart part: a header block plus an opaque binary body.
///
/// The body is a [`Bytes`] view into the buffer handed to
/// [`decode`](crate::decode), so no part payload is copied during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    headers: PartHeaders,
    body: Bytes,
}

impl Part {
    pub(crate) fn new(headers: PartHeaders, body: Bytes) -> Self {
        Self { headers, body }
    }

    /// Returns this part's headers.
    pub fn headers(&self) -> &PartHeaders {
        &self.headers
    }

    /// Returns this part's raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the part and returns its body.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Returns the raw `Content-Type` header value, if the part declared one.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("Content-Type")
    }

    /// Returns the parsed part content type.
    ///
    /// `None` when the part declared no `Content-Type` or the declared value
    /// does not parse as a MIME type; callers that only need prefix matching
    /// can use [`Part::content_type`] instead.
    pub fn mime(&self) -> Option<mime::Mime> {
        self.content_type()?.trim().parse::<mime::Mime>().ok()
    }

    /// Returns the body decoded as UTF-8 text, or `None` for binary bodies.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Ordered sequence of decoded parts, in buffer order.
///
/// Never empty: a buffer without parts fails with
/// [`DecodeError::NoParts`](crate::DecodeError::NoParts) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    parts: Vec<Part>,
}

impl DecodeResult {
    pub(crate) fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Returns the decoded parts as a slice.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Consumes the result and returns the decoded parts.
    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Returns the number of decoded parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns whether the result holds no parts. Always `false` for results
    /// produced by this crate, which reports an empty sequence as
    /// [`DecodeError::NoParts`](crate::DecodeError::NoParts) instead.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterates over the decoded parts in buffer order.
    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }
}

impl IntoIterator for DecodeResult {
    type Item = Part;
    type IntoIter = std::vec::IntoIter<Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeResult {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
