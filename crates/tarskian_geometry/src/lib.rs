//! # tarskian-geometry
//!
//! Tarski's axiomatisation of Euclidean geometry as a client of the
//! proof engine: the predicate signature (`Equal/2`, `Congruent/4`,
//! `Between/3`), the axiom bundle, and the opening theorems of segment
//! congruence developed from it.
//!
//! # Example
//!
//! ```
//! use tarskian_geometry::{develop, Axioms};
//! use tarskian_proof::{Engine, MemorySink};
//!
//! let axioms = Axioms::new().unwrap();
//! let mut engine =
//!     Engine::with_sink(axioms.bundle(), Box::new(MemorySink::new())).unwrap();
//! let book = develop(&mut engine, &axioms).unwrap();
//! assert!(book.reflexivity.free().is_empty());
//! ```

mod axioms;
pub mod theorems;

pub use axioms::{afs, Axioms, BETWEEN, CONGRUENT};
pub use theorems::{develop, Book};
pub use tarskian_kernel::EQUAL;

use tarskian_kernel::{Formula, FreeTerm, KernelResult, Term};

/// `Equal(x, y)`
pub fn equal(x: FreeTerm, y: FreeTerm) -> KernelResult<Formula> {
    EQUAL.apply(&[Term::Free(x), Term::Free(y)])
}

/// `Congruent(a, b, c, d)`
pub fn congruent(a: FreeTerm, b: FreeTerm, c: FreeTerm, d: FreeTerm) -> KernelResult<Formula> {
    CONGRUENT.apply(&[Term::Free(a), Term::Free(b), Term::Free(c), Term::Free(d)])
}

/// `Between(x, y, z)`
pub fn between(x: FreeTerm, y: FreeTerm, z: FreeTerm) -> KernelResult<Formula> {
    BETWEEN.apply(&[Term::Free(x), Term::Free(y), Term::Free(z)])
}
