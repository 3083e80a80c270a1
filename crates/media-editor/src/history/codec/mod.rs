//! History item codecs.

pub mod json;
