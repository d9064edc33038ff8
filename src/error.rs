//!
//! Errors that can occur whilst compressing.
//!
//! Stylesheet *content* can never be invalid here: every byte
//! sequence has a defined output. Only the streams themselves can fail.
//!

use std::io;

use thiserror::Error;

use crate::common::Loc;

///
/// An I/O fault from the input source or the output sink.
///
/// These are never retried: they end the run immediately.
///
#[derive(Debug, Error)]
pub enum CompressError {
    ///
    /// Pulling the next byte from the input failed.
    ///
    #[error("Failed to read input\n\tat {at}")]
    Read {
        at: Loc,
        #[source]
        source: io::Error,
    },

    ///
    /// Pushing a byte (or flushing) to the output failed.
    ///
    #[error("Failed to write output\n\tat {at}")]
    Write {
        at: Loc,
        #[source]
        source: io::Error,
    },
}

impl CompressError {
    ///
    /// Where in its stream this fault happened.
    ///
    pub fn at(&self) -> Loc {
        match self {
            CompressError::Read { at, .. } | CompressError::Write { at, .. } => *at,
        }
    }
}
