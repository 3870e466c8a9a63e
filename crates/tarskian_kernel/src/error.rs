//! Error types for the formula algebra.
//!
//! Every error here is a violated precondition: malformed predicate
//! application, a substitution that would capture, or misuse of the
//! display-name allocator. Callers propagate them with `?`; nothing is
//! recovered.

use crate::term::Term;
use std::fmt;

/// Errors raised by formula construction and manipulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A predicate was applied to the wrong number of terms.
    ArityMismatch {
        predicate: &'static str,
        expected: usize,
        found: usize,
    },

    /// A substitution value collides with a bound marker of the target
    /// formula.
    WouldCapture { term: Term },

    /// Specialisation was attempted on a formula that is not universally
    /// quantified.
    NotUniversal,

    /// Specialisation addressed a binder position the quantifier does not
    /// have.
    BinderOutOfRange { index: usize, arity: usize },

    /// A discarded free term was displayed again.
    DiscardedTerm,

    /// A free term was discarded twice.
    AlreadyDiscarded,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ArityMismatch {
                predicate,
                expected,
                found,
            } => {
                write!(
                    f,
                    "predicate '{}' expects {} terms, got {}",
                    predicate, expected, found
                )
            }
            KernelError::WouldCapture { term } => {
                write!(
                    f,
                    "substitution value {:?} collides with a bound marker of the formula",
                    term
                )
            }
            KernelError::NotUniversal => {
                write!(f, "formula is not universally quantified")
            }
            KernelError::BinderOutOfRange { index, arity } => {
                write!(
                    f,
                    "binder index {} out of range for a quantifier over {} variables",
                    index, arity
                )
            }
            KernelError::DiscardedTerm => {
                write!(f, "displaying a discarded free term")
            }
            KernelError::AlreadyDiscarded => {
                write!(f, "free term discarded twice")
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type for formula-algebra operations.
pub type KernelResult<T> = Result<T, KernelError>;
