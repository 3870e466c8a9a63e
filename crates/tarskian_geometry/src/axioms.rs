//! Tarski's axiom system for Euclidean plane geometry.
//!
//! The signature is three predicates over points: `Equal/2`,
//! `Congruent/4` (segment congruence, displayed `xy~rs`) and `Between/3`
//! (displayed `(y in xz)`). The bundle carries the congruence axioms,
//! segment construction, the five-segment axiom, the betweenness axioms
//! and the dimension axioms, plus reflexivity of equality. The continuity
//! schema is not included.

use crate::{between, congruent, equal};
use tarskian_kernel::{Formula, FreeTerm, KernelResult, Predicate};

/// Segment congruence: `Congruent(x, y, r, s)` says xy and rs have equal
/// length.
pub const CONGRUENT: Predicate = Predicate::new("Congruent", 4, "{0}{1}~{2}{3}");

/// Betweenness: `Between(x, y, z)` says y lies on the segment xz.
pub const BETWEEN: Predicate = Predicate::new("Between", 3, "({1} in {0}{2})");

/// The outer five-segment configuration (Definition 2.10).
///
/// Two triangles abc and a2b2c2 with matching base and legs, each
/// carrying a point d resp. d2 measured from a and b.
pub fn afs(
    [a, b, c, d]: [FreeTerm; 4],
    [a2, b2, c2, d2]: [FreeTerm; 4],
) -> KernelResult<Formula> {
    Ok(between(a, b, c)?
        .and(between(a2, b2, c2)?)
        .and(congruent(a, b, a2, b2)?)
        .and(congruent(b, c, b2, c2)?)
        .and(congruent(a, d, a2, d2)?)
        .and(congruent(b, d, b2, d2)?))
}

/// The axiom bundle, each axiom a closed formula under its usual name.
pub struct Axioms {
    /// `Ax,y: xy~yx`
    pub congruence_symmetry: Formula,
    /// `Ax,y,r,s,t,u: (xy~rs & xy~tu) -> rs~tu`
    pub congruence_transitivity: Formula,
    /// `Ax,y,r: xy~rr -> x = y`
    pub congruence_identity: Formula,
    /// `Ax,y,r,s: Et: (y in xt) & yt~rs` — a segment of any given length
    /// can be laid off behind y on the ray from x.
    pub segment_construction: Formula,
    /// `A…: (!(x = y) & AFS) -> cd~c2d2`
    pub five_segment: Formula,
    /// `Ax,y: (y in xx) -> x = y`
    pub betweenness_identity: Formula,
    /// Inner form of Pasch's axiom.
    pub pasch: Formula,
    /// Three non-collinear points exist.
    pub lower_dimension: Formula,
    /// Three points equidistant from two distinct points are collinear.
    pub upper_dimension: Formula,
    /// `Ax: x = x`
    pub equality_reflexivity: Formula,
}

impl Axioms {
    pub fn new() -> KernelResult<Axioms> {
        let congruence_symmetry = {
            let (x, y) = (FreeTerm::fresh(), FreeTerm::fresh());
            Formula::forall(&[x, y], congruent(x, y, y, x)?)
        };

        let congruence_transitivity = {
            let [x, y, r, s, t, u] = fresh();
            Formula::forall(
                &[x, y, r, s, t, u],
                congruent(x, y, r, s)?
                    .and(congruent(x, y, t, u)?)
                    .implies(congruent(r, s, t, u)?),
            )
        };

        let congruence_identity = {
            let [x, y, r, _, _, _] = fresh();
            Formula::forall(
                &[x, y, r],
                congruent(x, y, r, r)?.implies(equal(x, y)?),
            )
        };

        let segment_construction = {
            let [x, y, r, s, t, _] = fresh();
            Formula::forall(
                &[x, y, r, s],
                Formula::exists(&[t], between(x, y, t)?.and(congruent(y, t, r, s)?)),
            )
        };

        let five_segment = {
            let [a, b, c, d, _, _] = fresh();
            let [a2, b2, c2, d2, _, _] = fresh();
            Formula::forall(
                &[a, b, c, d, a2, b2, c2, d2],
                equal(a, b)?
                    .neg()
                    .and(afs([a, b, c, d], [a2, b2, c2, d2])?)
                    .implies(congruent(c, d, c2, d2)?),
            )
        };

        let betweenness_identity = {
            let (x, y) = (FreeTerm::fresh(), FreeTerm::fresh());
            Formula::forall(&[x, y], between(x, y, x)?.implies(equal(x, y)?))
        };

        let pasch = {
            let [x, y, r, s, t, u] = fresh();
            Formula::forall(
                &[x, y, r, s, t],
                between(x, r, t)?.and(between(x, s, t)?).implies(Formula::exists(
                    &[u],
                    between(r, u, y)?.and(between(s, u, x)?),
                )),
            )
        };

        let lower_dimension = {
            let [r, s, t, _, _, _] = fresh();
            Formula::exists(
                &[r, s, t],
                between(r, s, t)?
                    .neg()
                    .and(between(s, t, r)?.neg())
                    .and(between(t, r, s)?.neg()),
            )
        };

        let upper_dimension = {
            let [x, y, r, s, t, _] = fresh();
            Formula::forall(
                &[x, y, r, s, t],
                congruent(r, x, r, y)?
                    .and(congruent(s, x, s, y)?)
                    .and(congruent(t, x, t, y)?)
                    .implies(
                        between(r, s, t)?
                            .or(between(s, t, r)?)
                            .or(between(t, r, s)?),
                    ),
            )
        };

        let equality_reflexivity = {
            let x = FreeTerm::fresh();
            Formula::forall(&[x], equal(x, x)?)
        };

        Ok(Axioms {
            congruence_symmetry,
            congruence_transitivity,
            congruence_identity,
            segment_construction,
            five_segment,
            betweenness_identity,
            pasch,
            lower_dimension,
            upper_dimension,
            equality_reflexivity,
        })
    }

    /// The axioms in recording order for engine construction.
    pub fn bundle(&self) -> Vec<Formula> {
        vec![
            self.congruence_symmetry.clone(),
            self.congruence_transitivity.clone(),
            self.congruence_identity.clone(),
            self.segment_construction.clone(),
            self.five_segment.clone(),
            self.betweenness_identity.clone(),
            self.pasch.clone(),
            self.lower_dimension.clone(),
            self.upper_dimension.clone(),
            self.equality_reflexivity.clone(),
        ]
    }
}

fn fresh() -> [FreeTerm; 6] {
    [
        FreeTerm::fresh(),
        FreeTerm::fresh(),
        FreeTerm::fresh(),
        FreeTerm::fresh(),
        FreeTerm::fresh(),
        FreeTerm::fresh(),
    ]
}
