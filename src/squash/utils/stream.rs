//!
//! The lookahead cursor over the input, and the counting
//! writer over the output.
//!

use crate::{
    common::{Loc, Sink, Source},
    error::CompressError,
};

use super::class::{is_separator, is_whitespace};

///
/// Things that [SourceStream] can
/// check are coming up.
///
pub trait Lookahead {
    fn upcoming<S: Source>(self, input: &SourceStream<S>) -> bool;
}

impl Lookahead for u8 {
    fn upcoming<S: Source>(self, input: &SourceStream<S>) -> bool {
        input.current() == Some(self)
    }
}

impl<F: Fn(u8) -> bool> Lookahead for F {
    fn upcoming<S: Source>(self, input: &SourceStream<S>) -> bool {
        input.current().map(self).unwrap_or(false)
    }
}

///
/// A [Source] with exactly one byte of lookahead.
///
/// The lookahead is the byte already pulled from the source
/// but not yet acted upon. There is never more than one,
/// and nothing is ever pushed back.
///
#[derive(Debug)]
pub struct SourceStream<S: Source> {
    source: S,
    current: Option<u8>,
    consumed: Loc,
}

impl<S: Source> SourceStream<S> {
    ///
    /// Create a new stream, with the lookahead primed
    /// on the first non-whitespace byte.
    ///
    pub fn primed(source: S) -> Result<Self, CompressError> {
        let mut stream = Self {
            source,
            current: None,
            consumed: Loc::default(),
        };

        stream.skip_whitespace()?;
        Ok(stream)
    }

    ///
    /// The lookahead byte, or `None` at the end of the stream.
    ///
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    ///
    /// Drop the lookahead and pull the next byte in its place.
    ///
    pub fn advance(&mut self) -> Result<Option<u8>, CompressError> {
        self.current = self.source.next_byte()?;
        if self.current.is_some() {
            self.consumed = self.consumed + 1;
        }

        Ok(self.current)
    }

    ///
    /// Drop the lookahead and every whitespace byte after it.
    ///
    /// Returns the new lookahead: the first non-whitespace byte,
    /// or `None` if the stream ran out.
    ///
    pub fn skip_whitespace(&mut self) -> Result<Option<u8>, CompressError> {
        loop {
            self.advance()?;
            if !self.upcoming(is_whitespace) {
                return Ok(self.current);
            }
        }
    }

    ///
    /// Checks if a lookahead pattern is next in the stream.
    ///
    pub fn upcoming<L: Lookahead>(&self, lookahead: L) -> bool {
        lookahead.upcoming(self)
    }

    ///
    /// How many bytes have been pulled from the source.
    ///
    pub fn consumed(&self) -> Loc {
        self.consumed
    }
}

///
/// A [Sink] that counts what is written through it.
///
#[derive(Debug)]
pub struct Emitter<K: Sink> {
    sink: K,
    written: Loc,
}

impl<K: Sink> Emitter<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            written: Loc::default(),
        }
    }

    ///
    /// Push one byte to the output.
    ///
    #[inline]
    pub fn emit(&mut self, byte: u8) -> Result<(), CompressError> {
        self.sink.put(byte)?;
        self.written = self.written + 1;
        Ok(())
    }

    ///
    /// Keep two tokens apart with a single space, given the byte
    /// that follows a run of (already skipped) whitespace.
    ///
    /// Nothing is written if `next` is a separator, since separators
    /// need no padding, or if the stream has ended.
    ///
    pub fn space_unless_separator_or_eof(
        &mut self,
        next: Option<u8>,
    ) -> Result<(), CompressError> {
        match next {
            Some(byte) if !is_separator(byte) => self.emit(b' '),
            _ => Ok(()),
        }
    }

    ///
    /// How many bytes have been written.
    ///
    pub fn written(&self) -> Loc {
        self.written
    }

    ///
    /// Flush the sink, and hand it back.
    ///
    pub fn finish(mut self) -> Result<K, CompressError> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
