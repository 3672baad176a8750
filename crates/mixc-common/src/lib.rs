//! Common types and utilities for the mixc mixin type closer.
//!
//! This crate provides the foundational pieces shared across mixc crates:
//! - String interning (`Atom`, `Interner`)

pub mod interner;
pub use interner::{Atom, Interner};
