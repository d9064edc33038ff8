//!
//! ## Separators
//!
//! Structural punctuation: `: { } , +` (and NUL).
//!
//! Whitespace after one is never significant.
//!

use crate::{
    common::{Sink, Source},
    error::CompressError,
    squash::utils::{is_separator, Emitter, SourceStream},
};

use super::Squash;

#[derive(Debug)]
pub struct Separator;

impl Squash for Separator {
    fn peek(byte: u8) -> bool {
        // `;` starts a run of its own.
        is_separator(byte) && byte != b';'
    }

    fn squash<S: Source, K: Sink>(
        first: u8,
        input: &mut SourceStream<S>,
        output: &mut Emitter<K>,
    ) -> Result<(), CompressError> {
        output.emit(first)?;
        input.skip_whitespace()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::squash::tokens::{testing::squash_one, Squash};

    use super::Separator;

    #[test]
    fn drops_following_whitespace() {
        assert_eq!(squash_one::<Separator>(":   1"), (":".to_string(), Some(b'1')));
        assert_eq!(squash_one::<Separator>("{\n\t\ta"), ("{".to_string(), Some(b'a')));
        assert_eq!(squash_one::<Separator>("+ b"), ("+".to_string(), Some(b'b')));
    }

    #[test]
    fn adjacent_separators() {
        assert_eq!(squash_one::<Separator>("}}"), ("}".to_string(), Some(b'}')));
        assert_eq!(squash_one::<Separator>(", {"), (",".to_string(), Some(b'{')));
    }

    #[test]
    fn semicolon_is_not_a_plain_separator() {
        assert!(!Separator::peek(b';'));
        assert!(Separator::peek(b':'));
    }

    #[test]
    fn at_end_of_stream() {
        assert_eq!(squash_one::<Separator>("}\n"), ("}".to_string(), None));
    }

    #[test]
    fn nul_separates() {
        assert_eq!(squash_one::<Separator>("\0 x"), ("\0".to_string(), Some(b'x')));
    }
}
