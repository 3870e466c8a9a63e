//! Error types for the proof engine.
//!
//! Every variant is a violated rule precondition — a bug in the proof
//! script, not an event to handle. The engine performs no recovery and no
//! rollback; callers propagate with `?` and stop.

use crate::fact::Justification;
use std::fmt;
use tarskian_kernel::{Formula, KernelError};

/// Errors raised by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// A rule was invoked while no proof context was open.
    NoOpenContext { operation: &'static str },

    /// The formula is already recorded in a visible frame.
    DuplicateFact {
        formula: Formula,
        serial: u64,
        justification: Justification,
    },

    /// A premise referenced by a rule is not visible from the current
    /// frame.
    MissingPremise {
        formula: Formula,
        justification: Justification,
    },

    /// The formula to record contains a free term not introduced by any
    /// still-open frame.
    TermNotLive {
        formula: Formula,
        justification: Justification,
    },

    /// Direct proof of a formula that is not recorded in the frame being
    /// closed.
    NotRecorded { formula: Formula },

    /// A conjunct was requested from a formula that is not a conjunction.
    NotConjunction { formula: Formula },

    /// Modus ponens on a formula that is not an implication.
    NotImplication { formula: Formula },

    /// Instantiation of a formula that is not existentially quantified.
    NotExistential { formula: Formula },

    /// Equality substitution with an identity that is not an `Equal` fact.
    NotEquality { formula: Formula },

    /// The two formulas of an equality substitution do not coincide under
    /// merging the equated terms.
    EqualityMismatch { left: Formula, right: Formula },

    /// Instantiation hints do not match the binder count.
    HintCount { expected: usize, found: usize },

    /// A formula-algebra precondition failed inside a rule.
    Kernel(KernelError),
}

impl fmt::Display for ProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofError::NoOpenContext { operation } => {
                write!(f, "'{}' requires an open proof context", operation)
            }
            ProofError::DuplicateFact {
                formula,
                serial,
                justification,
            } => {
                write!(
                    f,
                    "{}: formula already recorded as fact {}: {:?}",
                    justification, serial, formula
                )
            }
            ProofError::MissingPremise {
                formula,
                justification,
            } => {
                write!(f, "{}: premise is not a visible fact: {:?}", justification, formula)
            }
            ProofError::TermNotLive {
                formula,
                justification,
            } => {
                write!(
                    f,
                    "{}: formula contains a free term of no open context: {:?}",
                    justification, formula
                )
            }
            ProofError::NotRecorded { formula } => {
                write!(
                    f,
                    "direct proof of a formula not recorded in the closing frame: {:?}",
                    formula
                )
            }
            ProofError::NotConjunction { formula } => {
                write!(f, "not a conjunction: {:?}", formula)
            }
            ProofError::NotImplication { formula } => {
                write!(f, "not an implication: {:?}", formula)
            }
            ProofError::NotExistential { formula } => {
                write!(f, "not an existential: {:?}", formula)
            }
            ProofError::NotEquality { formula } => {
                write!(f, "not an equality fact: {:?}", formula)
            }
            ProofError::EqualityMismatch { left, right } => {
                write!(
                    f,
                    "formulas differ outside the equated terms: {:?} vs {:?}",
                    left, right
                )
            }
            ProofError::HintCount { expected, found } => {
                write!(f, "expected {} witness hints, got {}", expected, found)
            }
            ProofError::Kernel(e) => write!(f, "kernel error: {}", e),
        }
    }
}

impl std::error::Error for ProofError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProofError::Kernel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KernelError> for ProofError {
    fn from(e: KernelError) -> Self {
        ProofError::Kernel(e)
    }
}

/// Result type for engine operations.
pub type ProofResult<T> = Result<T, ProofError>;
