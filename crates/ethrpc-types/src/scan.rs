//! Byte-level scanners shared by the hex-backed primitives.

/// The `0x` prefix every hex-encoded wire value carries.
pub(crate) const HEX_PREFIX: &str = "0x";

/// `[0-9a-f]`
pub(crate) fn is_lower_hex_digit(b: u8) -> bool {
    b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
}

/// Strip `0x` and require exactly `digits` characters after it, each
/// accepted by `accept`.
pub(crate) fn fixed_hex(s: &str, digits: usize, accept: impl Fn(u8) -> bool) -> bool {
    match s.strip_prefix(HEX_PREFIX) {
        Some(body) => body.len() == digits && body.bytes().all(accept),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_hex_digits() {
        for b in b"0123456789abcdef" {
            assert!(is_lower_hex_digit(*b));
        }
        for b in b"ABCDEFgxz ." {
            assert!(!is_lower_hex_digit(*b));
        }
    }

    #[test]
    fn fixed_hex_requires_prefix_and_length() {
        assert!(fixed_hex("0xab", 2, is_lower_hex_digit));
        assert!(!fixed_hex("ab", 2, is_lower_hex_digit));
        assert!(!fixed_hex("0Xab", 2, is_lower_hex_digit));
        assert!(!fixed_hex("0xabc", 2, is_lower_hex_digit));
        assert!(!fixed_hex("0xa", 2, is_lower_hex_digit));
    }

    #[test]
    fn fixed_hex_multibyte_input_is_rejected() {
        // Two bytes of UTF-8 counted as two digits must still fail the digit check.
        assert!(!fixed_hex("0xé", 2, |b| b.is_ascii_hexdigit()));
    }
}
