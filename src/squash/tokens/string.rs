//!
//! String literals: `"..."`.
//!
//! Contents are opaque, and copied byte-for-byte.
//!
//! Only `"` delimits: there is no escape handling, so a `\"`
//! inside a literal ends it early.
//!

use tracing::debug;

use crate::{
    common::{Loc, Sink, Source},
    error::CompressError,
    squash::utils::{Emitter, SourceStream},
};

use super::Squash;

#[derive(Debug)]
pub struct StringLiteral;

impl Squash for StringLiteral {
    fn peek(byte: u8) -> bool {
        byte == b'"'
    }

    fn squash<S: Source, K: Sink>(
        first: u8,
        input: &mut SourceStream<S>,
        output: &mut Emitter<K>,
    ) -> Result<(), CompressError> {
        let opened = Loc::from(input.consumed().index().saturating_sub(1));
        output.emit(first)?;

        while let Some(byte) = input.advance()? {
            output.emit(byte)?;

            if byte == b'"' {
                // Whitespace after a literal is dropped outright.
                input.skip_whitespace()?;
                return Ok(());
            }
        }

        // No closing quote is made up.
        debug!(%opened, "string literal left open at end of input");
        Ok(())
    }
}
