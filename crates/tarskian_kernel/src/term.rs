//! Individual variables and predicate descriptors.
//!
//! Terms come in two kinds. A [`FreeTerm`] is an individual variable
//! introduced by opening a proof context or by existential instantiation;
//! it is meaningful across formulas. A [`BoundTerm`] is a marker minted
//! exactly when a quantifier is constructed and never escapes the formula
//! tree that owns it. Keeping the kinds apart is what makes α-conversion
//! free: equality canonicalises marker names positionally, and the
//! substitution capture check reduces to a disjointness test against the
//! marker set.
//!
//! Identity is a process-unique integer drawn from an atomic counter, so
//! terms can be minted without an engine in scope (axiom construction) and
//! several engines can coexist while sharing immutable formulas.

use crate::error::{KernelError, KernelResult};
use crate::formula::Formula;
use std::sync::atomic::{AtomicU64, Ordering};
use tarskian_base::Symbol;

static NEXT_TERM_ID: AtomicU64 = AtomicU64::new(0);

fn next_term_id() -> u64 {
    NEXT_TERM_ID.fetch_add(1, Ordering::Relaxed)
}

/// An individual variable, optionally carrying a display hint.
///
/// The hint is a [`Symbol`] into the interner owned by the engine's name
/// allocator; it only affects pretty-printing, never identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FreeTerm {
    id: u64,
    hint: Option<Symbol>,
}

impl FreeTerm {
    /// Mints a fresh variable with no display hint.
    pub fn fresh() -> Self {
        FreeTerm {
            id: next_term_id(),
            hint: None,
        }
    }

    /// Mints a fresh variable carrying a display hint.
    pub fn with_hint(hint: Symbol) -> Self {
        FreeTerm {
            id: next_term_id(),
            hint: Some(hint),
        }
    }

    /// The display hint, if one was supplied at creation.
    pub fn hint(&self) -> Option<Symbol> {
        self.hint
    }
}

/// A quantifier-local marker.
///
/// Minted by [`Formula::forall`] and [`Formula::exists`]; occurs only
/// under the quantifier that introduced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoundTerm {
    id: u64,
}

impl BoundTerm {
    pub(crate) fn fresh() -> Self {
        BoundTerm { id: next_term_id() }
    }
}

/// Either kind of variable, as it appears inside a formula.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Term {
    Free(FreeTerm),
    Bound(BoundTerm),
}

impl Term {
    /// Returns `true` for quantifier markers.
    pub fn is_bound(&self) -> bool {
        matches!(self, Term::Bound(_))
    }
}

impl From<FreeTerm> for Term {
    fn from(t: FreeTerm) -> Self {
        Term::Free(t)
    }
}

impl From<BoundTerm> for Term {
    fn from(t: BoundTerm) -> Self {
        Term::Bound(t)
    }
}

/// A predicate descriptor: name, arity and display template.
///
/// Descriptors are process-wide constants. The template is
/// positional-indexed (`"{0}{1}~{2}{3}"`); a bare `{}` consumes the next
/// position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Predicate {
    name: &'static str,
    arity: usize,
    fmt: &'static str,
}

impl Predicate {
    /// Defines a descriptor. Intended for `const` items.
    pub const fn new(name: &'static str, arity: usize, fmt: &'static str) -> Self {
        Predicate { name, arity, fmt }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub(crate) fn template(&self) -> &'static str {
        self.fmt
    }

    /// Applies the predicate to an argument tuple, checking arity.
    pub fn apply(&self, args: &[Term]) -> KernelResult<Formula> {
        if args.len() != self.arity {
            return Err(KernelError::ArityMismatch {
                predicate: self.name,
                expected: self.arity,
                found: args.len(),
            });
        }
        Ok(Formula::Pred(*self, args.to_vec()))
    }
}

/// The distinguished equality predicate of the logic.
///
/// Equality is part of the logic itself (first-order logic *with*
/// equality): the proof engine's equality-substitution rule recognises
/// facts built from this descriptor regardless of the client signature.
pub const EQUAL: Predicate = Predicate::new("Equal", 2, "{0} = {1}");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_terms_are_distinct() {
        assert_ne!(FreeTerm::fresh(), FreeTerm::fresh());
    }

    #[test]
    fn free_and_bound_never_compare_equal() {
        let f = Term::Free(FreeTerm::fresh());
        let b = Term::Bound(BoundTerm::fresh());
        assert_ne!(f, b);
        assert!(b.is_bound());
        assert!(!f.is_bound());
    }

    #[test]
    fn apply_rejects_wrong_arity() {
        let x = Term::Free(FreeTerm::fresh());
        let err = EQUAL.apply(&[x]).unwrap_err();
        assert_eq!(
            err,
            KernelError::ArityMismatch {
                predicate: "Equal",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn apply_accepts_matching_arity() {
        let x = Term::Free(FreeTerm::fresh());
        let y = Term::Free(FreeTerm::fresh());
        assert!(EQUAL.apply(&[x, y]).is_ok());
    }
}
