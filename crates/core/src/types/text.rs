//! Whitespace as form inputs define it.

/// Whether `c` is whitespace in the sense of a browser form's `\s`.
///
/// That set is the ECMAScript `WhiteSpace` and `LineTerminator` code
/// points. It differs from [`char::is_whitespace`]: U+0085 is not in it and
/// U+FEFF is.
#[must_use]
pub const fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}'] {
            assert!(is_form_whitespace(c), "{c:?}");
        }
        assert!(!is_form_whitespace('a'));
        assert!(!is_form_whitespace('@'));
    }

    #[test]
    fn test_differs_from_char_is_whitespace() {
        assert!('\u{0085}'.is_whitespace());
        assert!(!is_form_whitespace('\u{0085}'));

        assert!(!'\u{FEFF}'.is_whitespace());
        assert!(is_form_whitespace('\u{FEFF}'));
    }

    #[test]
    fn test_unicode_spaces() {
        for c in ['\u{00A0}', '\u{2003}', '\u{2028}', '\u{3000}'] {
            assert!(is_form_whitespace(c), "{c:?}");
        }
    }
}
