//!
//! ## cssquash
//!
//! A single-pass stylesheet compressor.
//!
//! Whitespace, duplicate semicolons and leading zeros are squashed out;
//! selectors, properties, values and string literals come through intact.
//! There is no parser and no AST: just one byte of lookahead.
//!
//! ```
//! assert_eq!(
//!     cssquash::compress_str("a :  1px  solid   red ;; }"),
//!     "a:1px solid red}"
//! );
//! ```
//!

pub mod common;
pub mod error;
pub mod squash;

pub use common::{Loc, ReaderSource, Sink, Source, WriterSink};
pub use error::CompressError;
pub use squash::{
    compress, compress_buffered, compress_bytes, compress_str, Compressor, Summary, TokenClass,
};
