//! Browser Command Wrappers
//!
//! Thin bindings to browser APIs the page calls into.

mod download;

pub use download::*;
