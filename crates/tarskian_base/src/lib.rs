//! # tarskian-base
//!
//! Structural atoms for the tarskian proof kernel.
//!
//! This crate provides the generic infrastructure the logic layers build on:
//!
//! - [`Interner`]/[`Symbol`] — string interning for display hints
//! - [`OrderedSet`] — insertion-deduplicating set preserving first-seen order
//!
//! It has no knowledge of terms, formulas or proofs.

pub mod intern;
pub mod ordered_set;

pub use intern::{Interner, Symbol};
pub use ordered_set::OrderedSet;
