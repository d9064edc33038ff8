//!
//! Utilities for compressing: byte classes and streams.
//!

pub mod class;
pub mod stream;

pub use self::{
    class::{is_separator, is_whitespace, SEPARATORS, WHITESPACE},
    stream::{Emitter, Lookahead, SourceStream},
};
