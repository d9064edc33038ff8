//!
//! Squashing stylesheet text in a single pass.
//!
//! The [Compressor] keeps one byte of lookahead, works out which
//! [TokenClass] it starts, and lets that class consume and
//! rewrite its run of input.
//!

pub mod tokens;
pub mod utils;

use std::io::{BufRead, BufReader, Read, Write};

use tracing::{debug, trace};

use crate::{
    common::{Loc, ReaderSource, Sink, Source, WriterSink},
    error::CompressError,
};

pub use self::tokens::TokenClass;
use self::utils::{Emitter, SourceStream};

///
/// Byte counts of a finished run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub read: Loc,
    pub written: Loc,
}

impl Summary {
    ///
    /// How many bytes were squashed away.
    ///
    pub fn saved(&self) -> usize {
        self.read - self.written
    }
}

///
/// A one-shot, single-pass compressor from a [Source] to a [Sink].
///
/// Every byte sequence is valid input: the only failures
/// are I/O faults from either end.
///
#[derive(Debug)]
pub struct Compressor<S: Source, K: Sink> {
    source: S,
    sink: K,
}

impl<S: Source, K: Sink> Compressor<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    ///
    /// Consume the whole source, writing the compressed text to the sink,
    /// then flush it.
    ///
    pub fn run(self) -> Result<Summary, CompressError> {
        let mut input = SourceStream::primed(self.source)?;
        let mut output = Emitter::new(self.sink);

        while let Some(byte) = input.current() {
            let class = TokenClass::classify(byte);
            trace!(?class, consumed = %input.consumed(), "squashing token");
            class.squash(byte, &mut input, &mut output)?;
        }

        let summary = Summary {
            read: input.consumed(),
            written: output.written(),
        };

        output.finish()?;

        debug!(
            read = %summary.read,
            written = %summary.written,
            saved = summary.saved(),
            "compression finished"
        );

        Ok(summary)
    }
}

///
/// Compress everything from `input` into `output`.
///
/// Both ends are buffered internally; `output` is flushed before returning.
/// Use [compress_buffered] when `input` already has a buffer of its own.
///
pub fn compress(input: impl Read, output: impl Write) -> Result<Summary, CompressError> {
    compress_buffered(BufReader::new(input), output)
}

///
/// Compress everything from an already-buffered `input` (a locked stdin,
/// a [BufReader], a cursor) into `output`, reading straight from its buffer.
///
pub fn compress_buffered(
    input: impl BufRead,
    output: impl Write,
) -> Result<Summary, CompressError> {
    debug!("compressing stream");
    Compressor::new(ReaderSource::new(input), WriterSink::new(output)).run()
}

///
/// Compress a buffer in memory.
///
pub fn compress_bytes(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());

    // A slice source and a Vec sink have no failure path,
    // so only the summary is being thrown away here.
    let _ = Compressor::new(input, &mut output).run();
    output
}

///
/// Compress a string in memory.
///
/// Only ASCII bytes are ever dropped or inserted, so valid
/// UTF-8 in means valid UTF-8 out.
///
pub fn compress_str(input: &str) -> String {
    let bytes = compress_bytes(input.as_bytes());
    match String::from_utf8(bytes) {
        Ok(st) => st,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
