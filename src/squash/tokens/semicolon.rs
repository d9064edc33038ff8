//!
//! ## Semicolons
//!
//! Statement terminators: `;`.
//!
//! A run of them (whitespace allowed in between) is written as a single `;`,
//! or dropped entirely right before `}`.
//!

use crate::{
    common::{Sink, Source},
    error::CompressError,
    squash::utils::{Emitter, SourceStream},
};

use super::Squash;

#[derive(Debug)]
pub struct Semicolons;

impl Squash for Semicolons {
    fn peek(byte: u8) -> bool {
        byte == b';'
    }

    fn squash<S: Source, K: Sink>(
        _: u8,
        input: &mut SourceStream<S>,
        output: &mut Emitter<K>,
    ) -> Result<(), CompressError> {
        while input.upcoming(b';') {
            input.skip_whitespace()?;
        }

        if !input.upcoming(b'}') {
            output.emit(b';')?;
        }

        Ok(())
    }
}
