//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

/// Properties that every solution should have, checked on a family of small programs.
mod properties;
/// The bundled problems, rendered end to end.
mod scenes;
