//! First-order formulas over the two-kind term representation.
//!
//! A [`Formula`] is an immutable value tree: predicate applications at the
//! leaves, negation and binary connectives inside, and quantifiers whose
//! binders are freshly minted [`BoundTerm`] markers. Quantifier
//! construction rewrites the body, replacing the caller's free terms by the
//! new markers, so free and bound namespaces never overlap inside a tree.
//!
//! Equality is α-invariant: [`Formula::serialize`] produces a canonical
//! tree naming every variable by the position in which it is first seen
//! (free variables before markers), and two formulas are equal when their
//! free-variable sequences and canonical trees agree. Renaming markers
//! uniformly can change neither.
//!
//! # Example
//!
//! ```
//! use tarskian_kernel::{Formula, FreeTerm, Term, EQUAL};
//!
//! let x = FreeTerm::fresh();
//! let y = FreeTerm::fresh();
//! let eq = EQUAL.apply(&[Term::Free(x), Term::Free(y)]).unwrap();
//! let closed = Formula::forall(&[x, y], eq);
//! assert!(closed.free().is_empty());
//! ```

use crate::error::{KernelError, KernelResult};
use crate::term::{BoundTerm, FreeTerm, Predicate, Term};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use tarskian_base::OrderedSet;

/// A finite simultaneous substitution of terms for terms.
pub type TermSubst = FxHashMap<Term, Term>;

/// Binary propositional connectives.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Connective {
    Conj,
    Disj,
    Impl,
}

impl Connective {
    /// The transcript spelling of the connective.
    pub fn symbol(&self) -> &'static str {
        match self {
            Connective::Conj => "&",
            Connective::Disj => "|",
            Connective::Impl => "->",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A first-order formula.
///
/// Quantified variants should be built through [`Formula::forall`] and
/// [`Formula::exists`], which mint the binder markers and rewrite the
/// body; the other variants through [`Predicate::apply`] and the named
/// combinators.
#[derive(Clone, Debug)]
pub enum Formula {
    /// Predicate application.
    Pred(Predicate, Vec<Term>),
    /// Negation.
    Neg(Box<Formula>),
    /// Binary connective.
    Bin(Box<Formula>, Connective, Box<Formula>),
    /// Universal quantifier over an ordered, non-empty binder tuple.
    All(Vec<BoundTerm>, Box<Formula>),
    /// Existential quantifier over an ordered, non-empty binder tuple.
    Exists(Vec<BoundTerm>, Box<Formula>),
}

impl Formula {
    /// `self & other`
    pub fn and(self, other: Formula) -> Formula {
        Formula::Bin(Box::new(self), Connective::Conj, Box::new(other))
    }

    /// `self | other`
    pub fn or(self, other: Formula) -> Formula {
        Formula::Bin(Box::new(self), Connective::Disj, Box::new(other))
    }

    /// `self -> other`
    pub fn implies(self, other: Formula) -> Formula {
        Formula::Bin(Box::new(self), Connective::Impl, Box::new(other))
    }

    /// `!self`
    pub fn neg(self) -> Formula {
        Formula::Neg(Box::new(self))
    }

    /// Universally quantifies `body` over `vars`.
    ///
    /// Fresh markers are minted for the binders and every occurrence of a
    /// quantified variable in the body is rewritten to its marker.
    /// Variables that do not occur in the body still get a (vacuous)
    /// binder. An empty `vars` returns the body unchanged.
    pub fn forall(vars: &[FreeTerm], body: Formula) -> Formula {
        Self::quantify(vars, body, Formula::All)
    }

    /// Existentially quantifies `body` over `vars`. See [`Formula::forall`].
    pub fn exists(vars: &[FreeTerm], body: Formula) -> Formula {
        Self::quantify(vars, body, Formula::Exists)
    }

    fn quantify(
        vars: &[FreeTerm],
        body: Formula,
        make: fn(Vec<BoundTerm>, Box<Formula>) -> Formula,
    ) -> Formula {
        if vars.is_empty() {
            return body;
        }
        let markers: Vec<BoundTerm> = vars.iter().map(|_| BoundTerm::fresh()).collect();
        let mut map = TermSubst::default();
        for (var, marker) in vars.iter().zip(&markers) {
            map.insert(Term::Free(*var), Term::Bound(*marker));
        }
        make(markers, Box::new(body.replace_terms(&map)))
    }

    /// Wraps `self` in a universal quantifier over `vars`, or returns it
    /// unchanged when `vars` is empty.
    pub fn generalize(self, vars: &[FreeTerm]) -> Formula {
        Formula::forall(vars, self)
    }

    /// The terms occurring in `self` that no quantifier of `self` binds,
    /// in first-seen order.
    ///
    /// Inside a quantifier body the binder's own markers count as free;
    /// at the top of a well-formed tree only [`Term::Free`] entries remain.
    pub fn free(&self) -> OrderedSet<Term> {
        match self {
            Formula::Pred(_, args) => args.iter().copied().collect(),
            Formula::Neg(f) => f.free(),
            Formula::Bin(l, _, r) => l.free().union(&r.free()),
            Formula::All(binders, body) | Formula::Exists(binders, body) => {
                let markers: OrderedSet<Term> =
                    binders.iter().map(|b| Term::Bound(*b)).collect();
                body.free().difference(&markers)
            }
        }
    }

    /// The binder markers owned by quantifiers within `self`, in first-seen
    /// order (body markers before the owning quantifier's).
    pub fn bound(&self) -> OrderedSet<Term> {
        match self {
            Formula::Pred(_, _) => OrderedSet::new(),
            Formula::Neg(f) => f.bound(),
            Formula::Bin(l, _, r) => l.bound().union(&r.bound()),
            Formula::All(binders, body) | Formula::Exists(binders, body) => {
                let markers: OrderedSet<Term> =
                    binders.iter().map(|b| Term::Bound(*b)).collect();
                body.bound().union(&markers)
            }
        }
    }

    /// Applies a capture-checked simultaneous substitution.
    ///
    /// The map is first restricted to keys free in `self`; a value that
    /// collides with a bound marker of `self` is rejected with
    /// [`KernelError::WouldCapture`]. Each recursion level repeats the
    /// restriction and the check against its own marker set.
    pub fn substitute(&self, map: &TermSubst) -> KernelResult<Formula> {
        let free = self.free();
        let narrowed: TermSubst = map
            .iter()
            .filter(|(key, _)| free.contains(key))
            .map(|(&key, &value)| (key, value))
            .collect();
        let bound = self.bound();
        for value in narrowed.values() {
            if bound.contains(value) {
                return Err(KernelError::WouldCapture { term: *value });
            }
        }
        Ok(match self {
            Formula::Pred(p, args) => Formula::Pred(
                *p,
                args.iter()
                    .map(|t| narrowed.get(t).copied().unwrap_or(*t))
                    .collect(),
            ),
            Formula::Neg(f) => Formula::Neg(Box::new(f.substitute(&narrowed)?)),
            Formula::Bin(l, c, r) => Formula::Bin(
                Box::new(l.substitute(&narrowed)?),
                *c,
                Box::new(r.substitute(&narrowed)?),
            ),
            Formula::All(binders, body) => {
                Formula::All(binders.clone(), Box::new(body.substitute(&narrowed)?))
            }
            Formula::Exists(binders, body) => {
                Formula::Exists(binders.clone(), Box::new(body.substitute(&narrowed)?))
            }
        })
    }

    /// Unchecked leaf rewrite used for binder bookkeeping (free term to
    /// fresh marker on construction, marker to fresh marker on
    /// specialisation). Values are freshly minted, so no collision with an
    /// existing marker is possible.
    fn replace_terms(&self, map: &TermSubst) -> Formula {
        match self {
            Formula::Pred(p, args) => Formula::Pred(
                *p,
                args.iter()
                    .map(|t| map.get(t).copied().unwrap_or(*t))
                    .collect(),
            ),
            Formula::Neg(f) => Formula::Neg(Box::new(f.replace_terms(map))),
            Formula::Bin(l, c, r) => Formula::Bin(
                Box::new(l.replace_terms(map)),
                *c,
                Box::new(r.replace_terms(map)),
            ),
            Formula::All(binders, body) => {
                Formula::All(binders.clone(), Box::new(body.replace_terms(map)))
            }
            Formula::Exists(binders, body) => {
                Formula::Exists(binders.clone(), Box::new(body.replace_terms(map)))
            }
        }
    }

    /// Eliminates binder `index` of a universal quantifier by substituting
    /// `term` into the body.
    ///
    /// The remaining binders are re-bound under fresh markers; when none
    /// remain the bare body is returned. `term` must not occur among the
    /// markers of `self`.
    pub fn specialise(&self, index: usize, term: Term) -> KernelResult<Formula> {
        let Formula::All(binders, body) = self else {
            return Err(KernelError::NotUniversal);
        };
        if index >= binders.len() {
            return Err(KernelError::BinderOutOfRange {
                index,
                arity: binders.len(),
            });
        }
        if self.bound().contains(&term) {
            return Err(KernelError::WouldCapture { term });
        }
        let mut map = TermSubst::default();
        map.insert(Term::Bound(binders[index]), term);
        let new_body = body.substitute(&map)?;

        let keep: Vec<BoundTerm> = binders
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, b)| *b)
            .collect();
        if keep.is_empty() {
            return Ok(new_body);
        }
        let fresh: Vec<BoundTerm> = keep.iter().map(|_| BoundTerm::fresh()).collect();
        let mut rebind = TermSubst::default();
        for (old, new) in keep.iter().zip(&fresh) {
            rebind.insert(Term::Bound(*old), Term::Bound(*new));
        }
        Ok(Formula::All(fresh, Box::new(new_body.replace_terms(&rebind))))
    }

    /// The α-invariant canonical form of `self`.
    ///
    /// Every variable is named by its positional index: free variables in
    /// first-seen order, then markers in first-seen order. Total on all
    /// well-formed trees.
    pub fn serialize(&self) -> Canonical {
        let free = self.free();
        let bound = self.bound();
        let mut ids: FxHashMap<Term, usize> = FxHashMap::default();
        for (i, t) in free.iter().chain(bound.iter()).enumerate() {
            ids.insert(*t, i);
        }
        Canonical {
            free: free.len(),
            bound: bound.len(),
            node: self.canonical_node(&ids),
        }
    }

    fn canonical_node(&self, ids: &FxHashMap<Term, usize>) -> CanonicalNode {
        match self {
            Formula::Pred(p, args) => CanonicalNode::Pred(
                p.name(),
                args.iter().map(|t| ids[t]).collect(),
            ),
            Formula::Neg(f) => CanonicalNode::Neg(Box::new(f.canonical_node(ids))),
            Formula::Bin(l, c, r) => CanonicalNode::Bin(
                *c,
                Box::new(l.canonical_node(ids)),
                Box::new(r.canonical_node(ids)),
            ),
            Formula::All(binders, body) => CanonicalNode::All(
                binders.iter().map(|b| ids[&Term::Bound(*b)]).collect(),
                Box::new(body.canonical_node(ids)),
            ),
            Formula::Exists(binders, body) => CanonicalNode::Exists(
                binders.iter().map(|b| ids[&Term::Bound(*b)]).collect(),
                Box::new(body.canonical_node(ids)),
            ),
        }
    }
}

/// Canonical identity of a formula: variable counts plus the positional
/// tree. See [`Formula::serialize`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Canonical {
    pub free: usize,
    pub bound: usize,
    pub node: CanonicalNode,
}

/// Tree shape of a canonical form, variables replaced by positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CanonicalNode {
    Pred(&'static str, Vec<usize>),
    Neg(Box<CanonicalNode>),
    Bin(Connective, Box<CanonicalNode>, Box<CanonicalNode>),
    All(Vec<usize>, Box<CanonicalNode>),
    Exists(Vec<usize>, Box<CanonicalNode>),
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.free() == other.free() && self.serialize() == other.serialize()
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialize().hash(state);
    }
}
