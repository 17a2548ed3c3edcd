pub fn join<T: ToString>(array: &[T]) -> String {
    array
        .iter()
        .map(|expr| expr.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

pub fn is_alpha_or_underscore(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

// Form feed is deliberately not part of this set.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn join_test() {
        assert_eq!(join::<String>(&[]), "");
        assert_eq!(join(&["x"]), "x");
        assert_eq!(join(&[1, 2, 3]), "1, 2, 3");
    }

    #[test]
    fn byte_classes_test() {
        assert!(is_digit(b'0') && is_digit(b'9'));
        assert!(!is_digit(b'a'));
        assert!(is_alpha_or_underscore(b'a') && is_alpha_or_underscore(b'Z'));
        assert!(is_alpha_or_underscore(b'_'));
        assert!(!is_alpha_or_underscore(b'1'));
        assert!(is_whitespace(b' ') && is_whitespace(b'\t'));
        assert!(is_whitespace(b'\n') && is_whitespace(b'\r'));
        assert!(!is_whitespace(b'\x0c'));
    }
}
