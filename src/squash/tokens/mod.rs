//!
//! Token classes, and how each one is squashed.
//!
//! Every class inspects the lookahead, consumes its own run of input,
//! writes its (possibly shortened) form, and leaves a fresh lookahead
//! behind for the next dispatch.
//!

pub mod semicolon;
pub mod separator;
pub mod string;
pub mod word;
pub mod zeros;

use crate::{
    common::{Sink, Source},
    error::CompressError,
};

use super::utils::{is_whitespace, Emitter, SourceStream};

pub use self::{
    semicolon::Semicolons, separator::Separator, string::StringLiteral, word::Word,
    zeros::LeadingZeros,
};

///
/// ## Squashing
///
/// Operations on a token class:
/// * Peeking (does this class start with the lookahead?),
/// * Squashing (consume it, write its compressed form).
///
pub trait Squash {
    ///
    /// Checks if a token of this class starts with `byte`.
    ///
    fn peek(byte: u8) -> bool;

    ///
    /// Given that the token starts with `first` (the current lookahead),
    /// consume it and write its compressed form.
    ///
    /// On return, the stream's lookahead is the first byte *after*
    /// this token, or the end of the stream.
    ///
    fn squash<S: Source, K: Sink>(
        first: u8,
        input: &mut SourceStream<S>,
        output: &mut Emitter<K>,
    ) -> Result<(), CompressError>;
}

///
/// Which class the lookahead starts.
///
/// The classes' [Squash::peek]s never overlap: every byte
/// but whitespace starts exactly one of them.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Semicolons,
    StringLiteral,
    LeadingZeros,
    Separator,
    Word,
}

impl TokenClass {
    pub fn classify(byte: u8) -> Self {
        if Semicolons::peek(byte) {
            Self::Semicolons
        } else if StringLiteral::peek(byte) {
            Self::StringLiteral
        } else if LeadingZeros::peek(byte) {
            Self::LeadingZeros
        } else if Separator::peek(byte) {
            Self::Separator
        } else {
            debug_assert!(Word::peek(byte) || is_whitespace(byte));
            Self::Word
        }
    }

    ///
    /// Forward to this class's [Squash] implementation.
    ///
    pub fn squash<S: Source, K: Sink>(
        self,
        first: u8,
        input: &mut SourceStream<S>,
        output: &mut Emitter<K>,
    ) -> Result<(), CompressError> {
        match self {
            Self::Semicolons => Semicolons::squash(first, input, output),
            Self::StringLiteral => StringLiteral::squash(first, input, output),
            Self::LeadingZeros => LeadingZeros::squash(first, input, output),
            Self::Separator => Separator::squash(first, input, output),
            Self::Word => Word::squash(first, input, output),
        }
    }
}

///
/// If the lookahead is whitespace, skip the whole run and leave
/// one space in its place, unless what follows is a separator
/// or the end of the stream.
///
pub(crate) fn collapse_gap<S: Source, K: Sink>(
    input: &mut SourceStream<S>,
    output: &mut Emitter<K>,
) -> Result<(), CompressError> {
    if !input.upcoming(is_whitespace) {
        return Ok(());
    }

    let next = input.skip_whitespace()?;
    output.space_unless_separator_or_eof(next)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::squash::utils::{Emitter, SourceStream};

    use super::Squash;

    ///
    /// Squash exactly one `T` token from the start of `text`.
    ///
    /// Returns what was written, and the lookahead left behind.
    ///
    pub fn squash_one<T: Squash>(text: &str) -> (String, Option<u8>) {
        let mut input = SourceStream::primed(text.as_bytes()).expect("Infallible source");
        let mut output = Emitter::new(Vec::<u8>::new());

        let first = input.current().expect("Non-blank input");
        assert!(T::peek(first), "{:?} does not start this token", first as char);

        T::squash(first, &mut input, &mut output).expect("Infallible sink");
        let written = output.finish().expect("Infallible sink");

        (
            String::from_utf8(written).expect("Valid UTF-8"),
            input.current(),
        )
    }
}
