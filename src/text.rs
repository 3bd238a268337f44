use encoding_rs::UTF_8;

/// Check if a string value is absent or contains only whitespace
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

/// Check if a string value is present and contains non-whitespace text
pub fn is_not_blank(value: Option<&str>) -> bool {
    !is_blank(value)
}

/// Encode a string to its UTF-8 bytes.
/// Returns None for the empty string — emptiness is a valid outcome, not an
/// error. The allocation is sized to the exact byte length.
pub fn encode_to_bytes(value: &str) -> Option<Vec<u8>> {
    if value.is_empty() {
        return None;
    }
    Some(value.as_bytes().to_vec())
}

/// Outcome of [`encode_into`]: how much of the source was consumed and how
/// many destination bytes were filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeInto {
    /// Unicode scalar values read from the source string
    pub read: usize,
    /// UTF-8 bytes written to the destination
    pub written: usize,
}

/// Encode as many whole characters of `value` into `dest` as fit.
///
/// A character whose encoding would not fit completely is not written at all,
/// so truncation always lands on a character boundary and the destination is
/// never overrun. Returns None for empty input without touching `dest`.
pub fn encode_into(value: &str, dest: &mut [u8]) -> Option<EncodeInto> {
    if value.is_empty() {
        return None;
    }

    let mut read = 0;
    let mut written = 0;
    for ch in value.chars() {
        let len = ch.len_utf8();
        if written + len > dest.len() {
            break;
        }
        ch.encode_utf8(&mut dest[written..written + len]);
        read += 1;
        written += len;
    }

    Some(EncodeInto { read, written })
}

/// Decode a UTF-8 byte sequence to a string in one shot.
///
/// A leading BOM is stripped; malformed sequences become U+FFFD replacement
/// characters rather than an error. Empty input yields the empty string.
pub fn decode_bytes(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }
    let (text, _had_errors) = UTF_8.decode_with_bom_removal(input);
    text.into_owned()
}

/// Decode any borrowable byte buffer with the same semantics as
/// [`decode_bytes`]. The source is only viewed, never mutated or consumed.
pub fn decode_buffer<B: AsRef<[u8]> + ?Sized>(input: &B) -> String {
    decode_bytes(input.as_ref())
}
