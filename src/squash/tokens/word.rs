//!
//! ## Words
//!
//! Everything else: selectors, property names, numbers, units, colours.
//! A word runs until whitespace, a separator, or the end of the stream,
//! and is copied byte-for-byte.
//!

use crate::{
    common::{Sink, Source},
    error::CompressError,
    squash::utils::{is_separator, is_whitespace, Emitter, SourceStream},
};

use super::{collapse_gap, LeadingZeros, Squash, StringLiteral};

#[derive(Debug)]
pub struct Word;

impl Word {
    ///
    /// Can this byte carry on a word already started?
    ///
    /// Unlike [Squash::peek], quotes and zeros are fine here.
    ///
    fn continues(byte: u8) -> bool {
        !is_separator(byte) && !is_whitespace(byte)
    }
}

impl Squash for Word {
    fn peek(byte: u8) -> bool {
        Self::continues(byte) && !StringLiteral::peek(byte) && !LeadingZeros::peek(byte)
    }

    fn squash<S: Source, K: Sink>(
        first: u8,
        input: &mut SourceStream<S>,
        output: &mut Emitter<K>,
    ) -> Result<(), CompressError> {
        output.emit(first)?;

        while let Some(byte) = input.advance()? {
            if !Self::continues(byte) {
                break;
            }

            output.emit(byte)?;
        }

        // Two words in a row keep exactly one space between them.
        collapse_gap(input, output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::squash::tokens::{testing::squash_one, Squash};

    use super::Word;

    #[test]
    fn copied_verbatim() {
        assert_eq!(squash_one::<Word>("a.b#c>d"), ("a.b#c>d".to_string(), None));
        assert_eq!(squash_one::<Word>("1px;"), ("1px".to_string(), Some(b';')));
        assert_eq!(squash_one::<Word>("10.50em}"), ("10.50em".to_string(), Some(b'}')));
    }

    #[test]
    fn quotes_and_zeros_only_start_their_own_tokens() {
        assert!(!Word::peek(b'"'));
        assert!(!Word::peek(b'0'));
        assert_eq!(squash_one::<Word>("a0\"0"), ("a0\"0".to_string(), None));
    }

    #[test]
    fn quotes_inside_a_word() {
        assert_eq!(squash_one::<Word>("url(\"x\")"), ("url(\"x\")".to_string(), None));
    }

    #[test]
    fn single_space_between_words() {
        assert_eq!(squash_one::<Word>("solid   red"), ("solid ".to_string(), Some(b'r')));
        assert_eq!(squash_one::<Word>("a\n\n\tb"), ("a ".to_string(), Some(b'b')));
        assert_eq!(squash_one::<Word>("a \"b\""), ("a ".to_string(), Some(b'"')));
    }

    #[test]
    fn no_space_before_separator_or_end() {
        assert_eq!(squash_one::<Word>("a  :"), ("a".to_string(), Some(b':')));
        assert_eq!(squash_one::<Word>("red ;"), ("red".to_string(), Some(b';')));
        assert_eq!(squash_one::<Word>("p \n"), ("p".to_string(), None));
    }

    #[test]
    fn non_ascii_bytes() {
        assert_eq!(
            squash_one::<Word>("\u{e9}t\u{e9}  x"),
            ("\u{e9}t\u{e9} ".to_string(), Some(b'x'))
        );
    }
}
