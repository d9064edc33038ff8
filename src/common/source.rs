//!
//! Where bytes come from, and where they go.
//!

use std::io::{self, BufRead, BufWriter, Write};

use super::Loc;
use crate::error::CompressError;

///
/// A byte-at-a-time pull source.
///
/// This trait abstracts how the stylesheet text is obtained
/// (a file, a pipe, a string in memory) so the compressor only
/// ever sees one byte at a time.
///
pub trait Source {
    ///
    /// Pull the next byte.
    ///
    /// `Ok(None)` marks the end of the stream.
    ///
    fn next_byte(&mut self) -> Result<Option<u8>, CompressError>;
}

///
/// A byte-at-a-time push sink.
///
pub trait Sink {
    ///
    /// Push one byte.
    ///
    fn put(&mut self, byte: u8) -> Result<(), CompressError>;

    ///
    /// Push out anything buffered.
    ///
    fn flush(&mut self) -> Result<(), CompressError> {
        Ok(())
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn next_byte(&mut self) -> Result<Option<u8>, CompressError> {
        (**self).next_byte()
    }
}

impl<K: Sink + ?Sized> Sink for &mut K {
    fn put(&mut self, byte: u8) -> Result<(), CompressError> {
        (**self).put(byte)
    }

    fn flush(&mut self) -> Result<(), CompressError> {
        (**self).flush()
    }
}

///
/// In-memory input.
///
impl<'a> Source for &'a [u8] {
    fn next_byte(&mut self) -> Result<Option<u8>, CompressError> {
        let bytes: &'a [u8] = *self;
        let Some((first, rest)) = bytes.split_first() else {
            return Ok(None);
        };

        *self = rest;
        Ok(Some(*first))
    }
}

///
/// In-memory output.
///
impl Sink for Vec<u8> {
    fn put(&mut self, byte: u8) -> Result<(), CompressError> {
        self.push(byte);
        Ok(())
    }
}

///
/// [Source] over any [BufRead]er.
///
/// Bytes are taken straight out of the reader's own buffer,
/// so wrap plain [Read](std::io::Read)ers in a
/// [BufReader](std::io::BufReader) first
/// (as [crate::compress] does).
///
#[derive(Debug)]
pub struct ReaderSource<R: BufRead> {
    inner: R,
    at: Loc,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader,
            at: Loc::default(),
        }
    }

    ///
    /// How many bytes have been read so far.
    ///
    #[cfg(test)]
    pub(crate) fn position(&self) -> Loc {
        self.at
    }
}

impl<R: BufRead> Source for ReaderSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>, CompressError> {
        loop {
            match self.inner.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let byte = buf[0];
                    self.inner.consume(1);
                    self.at = self.at + 1;
                    return Ok(Some(byte));
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(CompressError::Read {
                        at: self.at,
                        source,
                    })
                }
            }
        }
    }
}

///
/// [Sink] into any [Write]r, buffered.
///
/// Bytes may sit in the buffer until [Sink::flush] is called,
/// so a write fault can surface late.
///
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: BufWriter<W>,
    at: Loc,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
            at: Loc::default(),
        }
    }

    ///
    /// How many bytes have been accepted so far.
    ///
    #[cfg(test)]
    pub(crate) fn position(&self) -> Loc {
        self.at
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn put(&mut self, byte: u8) -> Result<(), CompressError> {
        self.inner
            .write_all(&[byte])
            .map_err(|source| CompressError::Write {
                at: self.at,
                source,
            })?;

        self.at = self.at + 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), CompressError> {
        self.inner.flush().map_err(|source| CompressError::Write {
            at: self.at,
            source,
        })
    }
}
