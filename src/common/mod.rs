//!
//! Common plumbing shared by the compressor and its callers.
//!

pub mod location;
pub mod source;

pub use location::*;
pub use source::*;
