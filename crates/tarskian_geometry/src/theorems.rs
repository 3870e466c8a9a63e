//! The opening theorems of segment congruence.
//!
//! Each function runs one proof script against an engine seeded with the
//! axiom bundle, and returns the theorem it records. [`develop`] runs the
//! whole development in dependency order and collects the results into a
//! [`Book`]. Scripts reference earlier theorems by value, exactly as the
//! engine's premise checks require.

use crate::axioms::Axioms;
use crate::{congruent, equal};
use tarskian_proof::{Engine, ProofResult};
use tarskian_kernel::Formula;

/// The theorems recorded by [`develop`], in order.
pub struct Book {
    /// `Ax,y: x = y -> y = x`
    pub equality_symmetry: Formula,
    /// Theorem 2.1: `Ax,y: xy~xy`
    pub reflexivity: Formula,
    /// Theorem 2.2: `Ax,y,r,s: xy~rs -> rs~xy`
    pub symmetry: Formula,
    /// Theorem 2.3: `Ax,y,r,s,t,u: (xy~rs & rs~tu) -> xy~tu`
    pub transitivity: Formula,
    /// Theorem 2.4: `Ax,y,r,s: xy~rs -> yx~rs`
    pub left_commutation: Formula,
    /// Theorem 2.5: `Ax,y,r,s: xy~rs -> xy~sr`
    pub right_commutation: Formula,
    /// Theorem 2.8: `Ax,y: xx~yy`
    pub null_segment: Formula,
}

/// Runs the full development. The engine must hold the bundle of
/// `axioms` and have no open context.
pub fn develop(engine: &mut Engine, axioms: &Axioms) -> ProofResult<Book> {
    let equality_symmetry = equality_symmetry(engine, axioms)?;
    let reflexivity = reflexivity(engine, axioms)?;
    let symmetry = symmetry(engine, axioms, &reflexivity)?;
    let transitivity = transitivity(engine, axioms, &symmetry)?;
    let left_commutation = left_commutation(engine, axioms, &transitivity)?;
    let right_commutation = right_commutation(engine, &symmetry, &left_commutation)?;
    let null_segment = null_segment(engine, axioms)?;
    Ok(Book {
        equality_symmetry,
        reflexivity,
        symmetry,
        transitivity,
        left_commutation,
        right_commutation,
        null_segment,
    })
}

/// `Ax,y: x = y -> y = x`
pub fn equality_symmetry(engine: &mut Engine, axioms: &Axioms) -> ProofResult<Formula> {
    let vars = engine.open_context(2);
    let (x, y) = (vars[0], vars[1]);
    let assumed = engine.assume(equal(x, y)?)?;
    let reflexive = engine.specialise(&axioms.equality_reflexivity, &[x])?;
    let swapped = engine.substitute_equal(&reflexive, &equal(y, x)?, &assumed)?;
    engine.direct_proof(&swapped)
}

/// Theorem 2.1, reflexivity of congruence: `Ax,y: xy~xy`
pub fn reflexivity(engine: &mut Engine, axioms: &Axioms) -> ProofResult<Formula> {
    let vars = engine.open_context(2);
    let (x, y) = (vars[0], vars[1]);
    let transitive = engine.specialise(&axioms.congruence_transitivity, &[y, x, x, y, x, y])?;
    let symmetric = engine.specialise(&axioms.congruence_symmetry, &[y, x])?;
    engine.conjunction(&symmetric, &symmetric)?;
    let goal = engine.modus_ponens(&transitive)?;
    engine.direct_proof(&goal)
}

/// Theorem 2.2, symmetry of congruence: `Ax,y,r,s: xy~rs -> rs~xy`
pub fn symmetry(
    engine: &mut Engine,
    axioms: &Axioms,
    reflexivity: &Formula,
) -> ProofResult<Formula> {
    let vars = engine.open_context(4);
    let (x, y, r, s) = (vars[0], vars[1], vars[2], vars[3]);
    let assumed = engine.assume(congruent(x, y, r, s)?)?;
    let reflexive = engine.specialise(reflexivity, &[x, y])?;
    let transitive = engine.specialise(&axioms.congruence_transitivity, &[x, y, r, s, x, y])?;
    engine.conjunction(&assumed, &reflexive)?;
    let goal = engine.modus_ponens(&transitive)?;
    engine.direct_proof(&goal)
}

/// Theorem 2.3, transitivity of congruence:
/// `Ax,y,r,s,t,u: (xy~rs & rs~tu) -> xy~tu`
pub fn transitivity(
    engine: &mut Engine,
    axioms: &Axioms,
    symmetry: &Formula,
) -> ProofResult<Formula> {
    let vars = engine.open_context(6);
    let (a, b, c, d, e, f) = (vars[0], vars[1], vars[2], vars[3], vars[4], vars[5]);
    engine.assume(congruent(a, b, c, d)?)?;
    let second = engine.assume(congruent(c, d, e, f)?)?;
    let symmetric = engine.specialise(symmetry, &[a, b, c, d])?;
    let turned = engine.modus_ponens(&symmetric)?;
    engine.conjunction(&turned, &second)?;
    let transitive = engine.specialise(&axioms.congruence_transitivity, &[c, d, a, b, e, f])?;
    let goal = engine.modus_ponens(&transitive)?;
    engine.direct_proof(&goal)
}

/// Theorem 2.4: `Ax,y,r,s: xy~rs -> yx~rs`
pub fn left_commutation(
    engine: &mut Engine,
    axioms: &Axioms,
    transitivity: &Formula,
) -> ProofResult<Formula> {
    let vars = engine.open_context(4);
    let (a, b, c, d) = (vars[0], vars[1], vars[2], vars[3]);
    let assumed = engine.assume(congruent(a, b, c, d)?)?;
    let symmetric = engine.specialise(&axioms.congruence_symmetry, &[b, a])?;
    let chain = engine.specialise(transitivity, &[b, a, a, b, c, d])?;
    engine.conjunction(&symmetric, &assumed)?;
    let goal = engine.modus_ponens(&chain)?;
    engine.direct_proof(&goal)
}

/// Theorem 2.5: `Ax,y,r,s: xy~rs -> xy~sr`
pub fn right_commutation(
    engine: &mut Engine,
    symmetry: &Formula,
    left_commutation: &Formula,
) -> ProofResult<Formula> {
    let vars = engine.open_context(4);
    let (a, b, c, d) = (vars[0], vars[1], vars[2], vars[3]);
    engine.assume(congruent(a, b, c, d)?)?;
    let turn = engine.specialise(symmetry, &[a, b, c, d])?;
    let commute = engine.specialise(left_commutation, &[c, d, a, b])?;
    let turn_back = engine.specialise(symmetry, &[d, c, a, b])?;
    engine.modus_ponens(&turn)?;
    engine.modus_ponens(&commute)?;
    let goal = engine.modus_ponens(&turn_back)?;
    engine.direct_proof(&goal)
}

/// Theorem 2.8, null segments are congruent: `Ax,y: xx~yy`
pub fn null_segment(engine: &mut Engine, axioms: &Axioms) -> ProofResult<Formula> {
    let vars = engine.open_context(2);
    let (a, b) = (vars[0], vars[1]);
    let lay_off = engine.specialise(&axioms.segment_construction, &[b, a, b, b])?;
    let (witnesses, instance) = engine.instantiate(&lay_off, None)?;
    let c = witnesses[0];
    let laid = engine.deduce_right(&instance)?;
    let identity = engine.specialise(&axioms.congruence_identity, &[a, c, b])?;
    let collapsed = engine.modus_ponens(&identity)?;
    let goal = engine.substitute_equal(&laid, &congruent(a, a, b, b)?, &collapsed)?;
    engine.direct_proof(&goal)
}
