//! # tarskian-kernel
//!
//! The formula algebra: classical first-order logic with equality,
//! represented so that α-equivalence, capture checks and canonical
//! identity come from the data model instead of from renaming passes.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                   display                     │
//! │   NameAllocator, name sequences, pretty       │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │                   formula                     │
//! │   free / bound / substitute / serialize /     │
//! │   generalize / specialise / combinators       │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │                     term                      │
//! │   FreeTerm, BoundTerm, Predicate, EQUAL       │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! # Core Types
//!
//! - [`Term`], [`FreeTerm`], [`BoundTerm`] — the two-kind variable model
//! - [`Predicate`] — process-wide predicate descriptors ([`EQUAL`] built in)
//! - [`Formula`] — immutable formula values with α-invariant equality
//! - [`NameAllocator`] — display-name assignment and recycling
//! - [`KernelError`] / [`KernelResult`] — precondition failures
//!
//! This crate knows nothing about proof state: contexts, facts and
//! inference rules live in `tarskian-proof`.

mod display;
mod error;
mod formula;
mod term;

pub use display::{bound_names, free_names, NameAllocator, NameSequence, NameSource};
pub use error::{KernelError, KernelResult};
pub use formula::{Canonical, CanonicalNode, Connective, Formula, TermSubst};
pub use term::{BoundTerm, FreeTerm, Predicate, Term, EQUAL};
