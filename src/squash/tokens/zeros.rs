//!
//! Leading zeros of a number: `0`, `000`, `000.5`.
//!

use crate::{
    common::{Sink, Source},
    error::CompressError,
    squash::utils::{Emitter, SourceStream},
};

use super::{collapse_gap, Squash};

///
/// A run of `0`s starting a token.
///
/// * Followed by `.`: the whole run goes (`000.5` is written `.5`).
/// * Otherwise: a single `0` stays (`000` is written `0`).
///
/// Whatever follows the run is left as the lookahead, so
/// `007px` is written `0`, then `7px` as a word of its own.
///
#[derive(Debug)]
pub struct LeadingZeros;

impl Squash for LeadingZeros {
    fn peek(byte: u8) -> bool {
        byte == b'0'
    }

    fn squash<S: Source, K: Sink>(
        _: u8,
        input: &mut SourceStream<S>,
        output: &mut Emitter<K>,
    ) -> Result<(), CompressError> {
        while input.advance()? == Some(b'0') {}

        if !input.upcoming(b'.') {
            output.emit(b'0')?;
        }

        collapse_gap(input, output)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::squash::tokens::testing::squash_one;

    use super::LeadingZeros;

    #[test]
    fn lone_zero() {
        assert_eq!(squash_one::<LeadingZeros>("0"), ("0".to_string(), None));
        assert_eq!(squash_one::<LeadingZeros>("0px"), ("0".to_string(), Some(b'p')));
    }

    #[test]
    fn run_collapses() {
        assert_eq!(squash_one::<LeadingZeros>("000"), ("0".to_string(), None));
        assert_eq!(squash_one::<LeadingZeros>("007px"), ("0".to_string(), Some(b'7')));
    }

    #[test]
    fn dropped_before_decimal_point() {
        assert_eq!(squash_one::<LeadingZeros>("000.5"), ("".to_string(), Some(b'.')));
        assert_eq!(squash_one::<LeadingZeros>("0.5"), ("".to_string(), Some(b'.')));
    }

    #[test]
    fn spaced_from_next_word() {
        assert_eq!(
            squash_one::<LeadingZeros>("0   solid"),
            ("0 ".to_string(), Some(b's'))
        );

        assert_eq!(
            squash_one::<LeadingZeros>("00\n\t0"),
            ("0 ".to_string(), Some(b'0'))
        );
    }

    #[test]
    fn not_spaced_from_separator_or_end() {
        assert_eq!(squash_one::<LeadingZeros>("0 ;"), ("0".to_string(), Some(b';')));
        assert_eq!(squash_one::<LeadingZeros>("00 }"), ("0".to_string(), Some(b'}')));
        assert_eq!(squash_one::<LeadingZeros>("0  \n"), ("0".to_string(), None));
    }
}
