//!
//! Byte classes: whitespace and separators.
//!
//! Both are fixed 256-entry tables built at compile time,
//! so classifying a byte is a single lookup.
//!

///
/// Structural separators: whitespace next to any of these is never significant.
///
/// NUL (0x00) counts as a separator too: `:;{},+` is matched
/// like a NUL-terminated C string, terminator included.
///
pub const SEPARATORS: [u8; 7] = [b':', b';', b'{', b'}', b',', b'+', b'\0'];

///
/// ASCII whitespace, *including* vertical tab (0x0B),
/// which [u8::is_ascii_whitespace] leaves out.
///
pub const WHITESPACE: [u8; 6] = [b' ', b'\t', b'\n', b'\r', 0x0B, 0x0C];

const fn table(members: &[u8]) -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < members.len() {
        table[members[i] as usize] = true;
        i += 1;
    }
    table
}

const SEPARATOR_TABLE: [bool; 256] = table(&SEPARATORS);
const WHITESPACE_TABLE: [bool; 256] = table(&WHITESPACE);

///
/// Is this byte a structural separator?
///
#[inline]
pub fn is_separator(byte: u8) -> bool {
    SEPARATOR_TABLE[byte as usize]
}

///
/// Is this byte whitespace?
///
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    WHITESPACE_TABLE[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::{is_separator, is_whitespace};

    #[test]
    fn separators() {
        for byte in b":;{},+\0" {
            assert!(is_separator(*byte), "{byte:#04x} should separate");
        }

        for byte in b"abz09.\"#%()[]-_ \t" {
            assert!(!is_separator(*byte), "{byte:#04x} should not separate");
        }

        assert_eq!((0..=255u8).filter(|b| is_separator(*b)).count(), 7);
    }

    #[test]
    fn whitespace() {
        for byte in b" \t\n\r\x0B\x0C" {
            assert!(is_whitespace(*byte));
        }

        assert!(!is_whitespace(b'a'));
        assert!(!is_whitespace(b'\0'));
        assert!(!is_whitespace(0xA0));
        assert_eq!((0..=255u8).filter(|b| is_whitespace(*b)).count(), 6);
    }
}
