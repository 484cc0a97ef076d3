//! Scalar-value offset arithmetic.
//!
//! Every offset the editor exposes counts Unicode scalar values (`char`s), never
//! bytes. Rust strings are UTF-8, so these helpers convert at the boundary.

/// Number of scalar values in `s`.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    if s.is_ascii() {
        s.len()
    } else {
        s.chars().count()
    }
}

/// Byte index of the scalar value at `char_idx`, clamped to `s.len()`.
#[must_use]
pub fn char_to_byte(s: &str, char_idx: usize) -> usize {
    if s.is_ascii() {
        return char_idx.min(s.len());
    }
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte, _)| byte)
}

/// Slice `s` by scalar-value range.
#[must_use]
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let start_byte = char_to_byte(s, start);
    let end_byte = char_to_byte(s, end.max(start));
    &s[start_byte..end_byte]
}

/// Prefix of `s` holding at most `max` scalar values.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    &s[..char_to_byte(s, max)]
}

/// The scalar value immediately before byte offset `byte_idx`, if any.
#[must_use]
pub fn char_before(s: &str, byte_idx: usize) -> Option<char> {
    s.get(..byte_idx).and_then(|head| head.chars().next_back())
}

/// True when `s` is empty or holds only whitespace.
///
/// Whitespace is the Unicode `White_Space` property, as in
/// [`char::is_whitespace`]: NEL (U+0085) counts, the byte order mark
/// (U+FEFF) does not.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_uses_white_space_property() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n\u{3000}"));
        assert!(is_blank("\u{0085}"));
        assert!(!is_blank("\u{FEFF}"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_char_len_mixed() {
        assert_eq!(char_len("hello"), 5);
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本"), 2);
        assert_eq!(char_len("👍"), 1);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_char_byte_conversion() {
        let s = "a日b";
        assert_eq!(char_to_byte(s, 0), 0);
        assert_eq!(char_to_byte(s, 1), 1);
        assert_eq!(char_to_byte(s, 2), 4);
        assert_eq!(char_to_byte(s, 3), 5);
        assert_eq!(char_to_byte(s, 99), 5);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("👍👍👍", 1), "👍");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_char_slice() {
        assert_eq!(char_slice("日本語テキスト", 2, 4), "語テ");
        assert_eq!(char_slice("abc", 2, 1), "");
    }

    #[test]
    fn test_char_before() {
        assert_eq!(char_before("@foo", 1), Some('@'));
        assert_eq!(char_before("@foo", 0), None);
        assert_eq!(char_before("é!", 2), Some('é'));
        // Not a boundary.
        assert_eq!(char_before("é!", 1), None);
    }

}
