//! Pretty-printing and display-name allocation.
//!
//! Formulas carry no names, only term identities; rendering assigns names
//! on demand. Bound markers draw from the alphabet `x y r s t u v w z x2
//! x3 …` per quantifier, skipping anything already in scope. Free terms go
//! through a [`NameAllocator`], which serves each newly displayed term its
//! hint if available, otherwise the smallest name previously returned to
//! the pool, otherwise the next name from the alphabet `a b c … p q a2 a3
//! …`. Closing a proof context discards its terms: generator-sourced names
//! return to the pool, hint-sourced names do not, and a discarded term can
//! never be displayed again.

use crate::error::{KernelError, KernelResult};
use crate::formula::Formula;
use crate::term::{BoundTerm, FreeTerm, Term};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tarskian_base::{Interner, Symbol};

/// Endless name supply over a single-letter alphabet, continuing with
/// `<first letter><n>` for n = 2, 3, …
#[derive(Clone, Debug)]
pub struct NameSequence {
    alphabet: &'static str,
    index: usize,
}

impl NameSequence {
    fn new(alphabet: &'static str) -> Self {
        NameSequence { alphabet, index: 0 }
    }

    /// Produces the next name. Never exhausted.
    pub fn advance(&mut self) -> String {
        let len = self.alphabet.len();
        let name = if self.index < len {
            self.alphabet[self.index..self.index + 1].to_string()
        } else {
            format!("{}{}", &self.alphabet[..1], self.index - len + 2)
        };
        self.index += 1;
        name
    }
}

impl Iterator for NameSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.advance())
    }
}

/// Names for quantifier binders: `x y r s t u v w z x2 x3 …`
pub fn bound_names() -> NameSequence {
    NameSequence::new("xyrstuvwz")
}

/// Names for free terms: `a b c … p q a2 a3 …`
pub fn free_names() -> NameSequence {
    NameSequence::new("abcdefghijklmnopq")
}

/// Where a display name came from. Generator names are recycled when their
/// term is discarded; hint names are not.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NameSource {
    Hint,
    Generator,
}

/// Allocates and recycles display names for free terms.
///
/// Owned by the proof engine and handed to [`Formula::pretty`] whenever a
/// fact is rendered. Also owns the [`Interner`] that resolves term hints,
/// so hinted terms must be minted through the allocator that will print
/// them.
#[derive(Debug)]
pub struct NameAllocator {
    interner: Interner,
    names: FxHashMap<FreeTerm, String>,
    used: FxHashMap<String, NameSource>,
    returned: BinaryHeap<Reverse<String>>,
    generator: NameSequence,
    discarded: FxHashSet<FreeTerm>,
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator {
    pub fn new() -> Self {
        NameAllocator {
            interner: Interner::new(),
            names: FxHashMap::default(),
            used: FxHashMap::default(),
            returned: BinaryHeap::new(),
            generator: free_names(),
            discarded: FxHashSet::default(),
        }
    }

    /// Interns a hint string for use with [`FreeTerm::with_hint`].
    pub fn intern_hint(&mut self, hint: &str) -> Symbol {
        self.interner.intern(hint)
    }

    /// The display name of `term`, assigning one on first use.
    ///
    /// Fails if `term` has been discarded.
    pub fn name_of(&mut self, term: FreeTerm) -> KernelResult<String> {
        if self.discarded.contains(&term) {
            return Err(KernelError::DiscardedTerm);
        }
        if let Some(name) = self.names.get(&term) {
            return Ok(name.clone());
        }
        let hinted = term.hint().map(|h| self.interner.resolve(h).to_string());
        let (name, source) = match hinted {
            Some(hint) if !self.used.contains_key(&hint) => {
                // The hint may coincide with a generator name sitting in
                // the recycle pool; claim it from there.
                self.returned.retain(|Reverse(n)| n != &hint);
                (hint, NameSource::Hint)
            }
            _ => match self.returned.pop() {
                Some(Reverse(name)) => (name, NameSource::Generator),
                None => (self.next_generated(), NameSource::Generator),
            },
        };
        self.used.insert(name.clone(), source);
        self.names.insert(term, name.clone());
        Ok(name)
    }

    fn next_generated(&mut self) -> String {
        loop {
            let candidate = self.generator.advance();
            if !self.used.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Invalidates a term whose context has closed.
    ///
    /// Its generator-sourced name (if any) returns to the pool; a second
    /// discard of the same term fails.
    pub fn discard(&mut self, term: FreeTerm) -> KernelResult<()> {
        if !self.discarded.insert(term) {
            return Err(KernelError::AlreadyDiscarded);
        }
        if let Some(name) = self.names.remove(&term) {
            if self.used.remove(&name) == Some(NameSource::Generator) {
                self.returned.push(Reverse(name));
            }
        }
        Ok(())
    }
}

/// Renders a positional template (`"{0}{1}~{2}{3}"`, bare `{}` consumes
/// the next position) against resolved argument names.
fn apply_template(template: &str, args: &[String]) -> String {
    let mut out = String::new();
    let mut chars = template.chars().peekable();
    let mut next_positional = 0;
    while let Some(c) = chars.next() {
        if c != '{' {
            out.push(c);
            continue;
        }
        let mut digits = String::new();
        while let Some(&d) = chars.peek() {
            if d == '}' {
                break;
            }
            digits.push(d);
            chars.next();
        }
        chars.next();
        let index = if digits.is_empty() {
            let i = next_positional;
            next_positional += 1;
            i
        } else {
            match digits.parse() {
                Ok(i) => i,
                Err(_) => {
                    out.push('{');
                    out.push_str(&digits);
                    out.push('}');
                    continue;
                }
            }
        };
        if let Some(arg) = args.get(index) {
            out.push_str(arg);
        }
    }
    out
}

impl Formula {
    /// Renders `self` through the given allocator.
    ///
    /// Free terms are named by the allocator (hints respected); each
    /// quantifier names its binders from the bound alphabet, skipping
    /// every name already in scope. Fails if a free term of `self` has
    /// been discarded.
    ///
    /// # Panics
    ///
    /// Panics on a malformed tree in which a bound marker occurs outside
    /// any quantifier that introduces it. Trees built through the public
    /// constructors cannot reach this state.
    pub fn pretty(&self, names: &mut NameAllocator) -> KernelResult<String> {
        let mut scope: Vec<(Term, String)> = Vec::new();
        for term in self.free().iter() {
            match term {
                Term::Free(free) => {
                    let name = names.name_of(*free)?;
                    scope.push((*term, name));
                }
                Term::Bound(_) => panic!("bound marker escaped its binder"),
            }
        }
        Ok(self.render(&scope))
    }

    fn render(&self, scope: &[(Term, String)]) -> String {
        match self {
            Formula::Pred(p, args) => {
                let names: Vec<String> = args
                    .iter()
                    .map(|t| {
                        scope
                            .iter()
                            .find(|(key, _)| key == t)
                            .map(|(_, name)| name.clone())
                            .unwrap_or_else(|| "?".to_string())
                    })
                    .collect();
                apply_template(p.template(), &names)
            }
            Formula::Neg(f) => format!("!{}", f.render(scope)),
            Formula::Bin(l, c, r) => {
                format!("({} {} {})", l.render(scope), c, r.render(scope))
            }
            Formula::All(binders, body) => {
                let (inner, picked) = extend_scope(scope, binders);
                format!("A{}: {}", picked.join(","), body.render(&inner))
            }
            Formula::Exists(binders, body) => {
                let (inner, picked) = extend_scope(scope, binders);
                format!("E{}: {}", picked.join(","), body.render(&inner))
            }
        }
    }
}

fn extend_scope(
    scope: &[(Term, String)],
    binders: &[BoundTerm],
) -> (Vec<(Term, String)>, Vec<String>) {
    let mut inner = scope.to_vec();
    let mut picked = Vec::new();
    let mut candidates = bound_names();
    for binder in binders {
        let name = loop {
            let candidate = candidates.advance();
            if !inner.iter().any(|(_, used)| used == &candidate) {
                break candidate;
            }
        };
        inner.push((Term::Bound(*binder), name.clone()));
        picked.push(name);
    }
    (inner, picked)
}
