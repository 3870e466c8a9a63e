//! The proof engine: nested contexts, recorded facts, inference rules.
//!
//! An [`Engine`] owns a base frame holding the axioms and a stack of open
//! frames. Each frame carries the free terms it introduced, its assumption
//! list in order, and the facts recorded in it; fact lookup walks the open
//! frames innermost-outward and ends at the base frame. Every accepted
//! rule appends exactly one numbered fact to the innermost frame and emits
//! one transcript entry; serial numbers are strictly monotone across the
//! whole session.
//!
//! Closing a frame is the job of [`Engine::direct_proof`]: it conjoins the
//! frame's assumptions into an implication to the goal, generalises over
//! the frame's free terms that remain free, pops the frame, records the
//! result one level out, and invalidates the frame's terms.
//!
//! Every precondition violation is fatal: the engine returns a
//! [`ProofError`] and performs no rollback.

use crate::error::{ProofError, ProofResult};
use crate::fact::{Fact, Justification};
use crate::transcript::{StdoutSink, TranscriptEntry, TranscriptSink};
use rustc_hash::FxHashMap;
use tarskian_kernel::{
    Connective, Formula, FreeTerm, NameAllocator, Term, TermSubst, EQUAL,
};

/// One lexical proof scope.
struct Frame {
    /// Free terms introduced here (context opening plus instantiations).
    free_terms: Vec<FreeTerm>,
    /// Assumptions in the order they were made.
    assumptions: Vec<Formula>,
    /// Facts recorded here, in serial order.
    facts: Vec<Fact>,
    index: FxHashMap<Formula, usize>,
}

impl Frame {
    fn new(free_terms: Vec<FreeTerm>) -> Self {
        Frame {
            free_terms,
            assumptions: Vec::new(),
            facts: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    fn lookup(&self, formula: &Formula) -> Option<&Fact> {
        self.index.get(formula).map(|&i| &self.facts[i])
    }
}

/// A proof session over a fixed axiom bundle.
pub struct Engine {
    base: Frame,
    open: Vec<Frame>,
    next_serial: u64,
    names: NameAllocator,
    sink: Box<dyn TranscriptSink>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("open_frames", &self.open.len())
            .field("next_serial", &self.next_serial)
            .finish()
    }
}

impl Engine {
    /// Builds an engine whose transcript goes to standard output.
    ///
    /// The axioms are recorded into the base frame, in order, with label
    /// `Axiom` and no premises. They must be closed formulas.
    pub fn new(axioms: Vec<Formula>) -> ProofResult<Engine> {
        Self::with_sink(axioms, Box::new(StdoutSink))
    }

    /// Builds an engine with an explicit transcript sink.
    pub fn with_sink(
        axioms: Vec<Formula>,
        sink: Box<dyn TranscriptSink>,
    ) -> ProofResult<Engine> {
        let mut engine = Engine {
            base: Frame::new(Vec::new()),
            open: Vec::new(),
            next_serial: 1,
            names: NameAllocator::new(),
            sink,
        };
        for axiom in axioms {
            engine.record(axiom, Justification::Axiom, &[], Vec::new())?;
        }
        Ok(engine)
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// The fact record of a visible formula, if any.
    pub fn fact(&self, formula: &Formula) -> Option<&Fact> {
        self.lookup(formula)
    }

    /// Opens a context introducing `count` fresh free terms.
    pub fn open_context(&mut self, count: usize) -> Vec<FreeTerm> {
        let vars: Vec<FreeTerm> = (0..count).map(|_| FreeTerm::fresh()).collect();
        self.open.push(Frame::new(vars.clone()));
        vars
    }

    /// Opens a context introducing one hinted free term per name.
    pub fn open_context_named(&mut self, names: &[&str]) -> Vec<FreeTerm> {
        let vars: Vec<FreeTerm> = names
            .iter()
            .map(|n| FreeTerm::with_hint(self.names.intern_hint(n)))
            .collect();
        self.open.push(Frame::new(vars.clone()));
        vars
    }

    /// Records `formula` as an assumption of the current frame.
    pub fn assume(&mut self, formula: Formula) -> ProofResult<Formula> {
        let Some(frame) = self.open.last_mut() else {
            return Err(ProofError::NoOpenContext { operation: "assume" });
        };
        frame.assumptions.push(formula.clone());
        self.record(formula, Justification::Assumption, &[], Vec::new())
    }

    /// Closes the current frame.
    ///
    /// `goal` must be recorded in the frame being closed. The result is
    /// `(A1 & … & Ak) -> goal` over the frame's assumptions in order
    /// (just `goal` with no assumptions), generalised over those of the
    /// frame's free terms that remain free in it, recorded one level out
    /// with the frame's facts as evidence. The frame's free terms are
    /// invalid afterwards.
    pub fn direct_proof(&mut self, goal: &Formula) -> ProofResult<Formula> {
        match self.open.last() {
            None => {
                return Err(ProofError::NoOpenContext {
                    operation: "direct proof",
                })
            }
            Some(top) => {
                if !top.index.contains_key(goal) {
                    return Err(ProofError::NotRecorded {
                        formula: goal.clone(),
                    });
                }
            }
        }
        let Some(frame) = self.open.pop() else {
            return Err(ProofError::NoOpenContext {
                operation: "direct proof",
            });
        };

        let mut result = goal.clone();
        if let Some((first, rest)) = frame.assumptions.split_first() {
            let mut conditions = first.clone();
            for assumption in rest {
                conditions = conditions.and(assumption.clone());
            }
            result = conditions.implies(result);
        }
        let still_free = result.free();
        let generalised: Vec<FreeTerm> = frame
            .free_terms
            .iter()
            .copied()
            .filter(|v| still_free.contains(&Term::Free(*v)))
            .collect();
        let result = result.generalize(&generalised);

        let recorded = self.record(result, Justification::DirectProof, &[], frame.facts)?;
        for var in frame.free_terms {
            self.names.discard(var)?;
        }
        Ok(recorded)
    }

    /// Eliminates the leading universal binders of a recorded fact.
    ///
    /// `terms[i]` replaces binder `i`; elimination runs right-to-left so
    /// earlier binder indices stay valid. A prefix of the binders may be
    /// left standing by passing fewer terms than the quantifier has.
    pub fn specialise(&mut self, fact: &Formula, terms: &[FreeTerm]) -> ProofResult<Formula> {
        self.require_open("specialise")?;
        let mut result = fact.clone();
        for (index, term) in terms.iter().enumerate().rev() {
            result = result.specialise(index, Term::Free(*term))?;
        }
        self.record(
            result,
            Justification::UniversalSpecialisation,
            &[fact],
            Vec::new(),
        )
    }

    /// Instantiates a recorded existential fact with fresh witnesses.
    ///
    /// One fresh free term is introduced into the current frame per
    /// binder (hinted when `hints` is given). Returns the witnesses and
    /// the recorded instance.
    pub fn instantiate(
        &mut self,
        fact: &Formula,
        hints: Option<&[&str]>,
    ) -> ProofResult<(Vec<FreeTerm>, Formula)> {
        self.require_open("instantiate")?;
        let Formula::Exists(binders, body) = fact else {
            return Err(ProofError::NotExistential {
                formula: fact.clone(),
            });
        };
        if let Some(hints) = hints {
            if hints.len() != binders.len() {
                return Err(ProofError::HintCount {
                    expected: binders.len(),
                    found: hints.len(),
                });
            }
        }
        let witnesses: Vec<FreeTerm> = match hints {
            Some(hints) => hints
                .iter()
                .map(|h| FreeTerm::with_hint(self.names.intern_hint(h)))
                .collect(),
            None => binders.iter().map(|_| FreeTerm::fresh()).collect(),
        };
        let mut map = TermSubst::default();
        for (binder, witness) in binders.iter().zip(&witnesses) {
            map.insert(Term::Bound(*binder), Term::Free(*witness));
        }
        let instance = body.substitute(&map)?;
        let Some(frame) = self.open.last_mut() else {
            return Err(ProofError::NoOpenContext {
                operation: "instantiate",
            });
        };
        frame.free_terms.extend(witnesses.iter().copied());
        let recorded = self.record(
            instance,
            Justification::ExistentialInstantiation,
            &[fact],
            Vec::new(),
        )?;
        Ok((witnesses, recorded))
    }

    /// Records `left & right` from the two facts.
    pub fn conjunction(&mut self, left: &Formula, right: &Formula) -> ProofResult<Formula> {
        self.require_open("conjunction")?;
        self.record(
            left.clone().and(right.clone()),
            Justification::Conjunction,
            &[left, right],
            Vec::new(),
        )
    }

    /// Records the left conjunct of a recorded conjunction.
    pub fn deduce_left(&mut self, fact: &Formula) -> ProofResult<Formula> {
        self.require_open("deduce_left")?;
        let Formula::Bin(left, Connective::Conj, _) = fact else {
            return Err(ProofError::NotConjunction {
                formula: fact.clone(),
            });
        };
        self.record(
            (**left).clone(),
            Justification::LeftConjunct,
            &[fact],
            Vec::new(),
        )
    }

    /// Records the right conjunct of a recorded conjunction.
    pub fn deduce_right(&mut self, fact: &Formula) -> ProofResult<Formula> {
        self.require_open("deduce_right")?;
        let Formula::Bin(_, Connective::Conj, right) = fact else {
            return Err(ProofError::NotConjunction {
                formula: fact.clone(),
            });
        };
        self.record(
            (**right).clone(),
            Justification::RightConjunct,
            &[fact],
            Vec::new(),
        )
    }

    /// Records the consequent of a recorded implication whose antecedent
    /// is also recorded.
    pub fn modus_ponens(&mut self, implication: &Formula) -> ProofResult<Formula> {
        self.require_open("modus_ponens")?;
        let Formula::Bin(antecedent, Connective::Impl, consequent) = implication else {
            return Err(ProofError::NotImplication {
                formula: implication.clone(),
            });
        };
        self.modus_ponens_pair(antecedent, consequent)
    }

    /// Modus ponens from an (antecedent, consequent) pair: both the
    /// implication `antecedent -> consequent` and the antecedent must be
    /// visible facts.
    pub fn modus_ponens_pair(
        &mut self,
        antecedent: &Formula,
        consequent: &Formula,
    ) -> ProofResult<Formula> {
        self.require_open("modus_ponens")?;
        let implication = antecedent.clone().implies(consequent.clone());
        self.record(
            consequent.clone(),
            Justification::ModusPonens,
            &[&implication, antecedent],
            Vec::new(),
        )
    }

    /// Records `!antecedent` from the facts `antecedent -> consequent`
    /// and `!consequent`.
    pub fn modus_tollens(
        &mut self,
        antecedent: &Formula,
        consequent: &Formula,
    ) -> ProofResult<Formula> {
        self.require_open("modus_tollens")?;
        let implication = antecedent.clone().implies(consequent.clone());
        let negated = consequent.clone().neg();
        self.record(
            antecedent.clone().neg(),
            Justification::ModusTollens,
            &[&implication, &negated],
            Vec::new(),
        )
    }

    /// Records `formula | !formula`, premise-free.
    pub fn tertium_non_datur(&mut self, formula: &Formula) -> ProofResult<Formula> {
        self.require_open("tertium_non_datur")?;
        self.record(
            formula.clone().or(formula.clone().neg()),
            Justification::TertiumNonDatur,
            &[],
            Vec::new(),
        )
    }

    /// Records `!(formula & !formula)`, premise-free.
    pub fn non_contradiction(&mut self, formula: &Formula) -> ProofResult<Formula> {
        self.require_open("non_contradiction")?;
        self.record(
            formula.clone().and(formula.clone().neg()).neg(),
            Justification::NonContradiction,
            &[],
            Vec::new(),
        )
    }

    /// Records `r` from the facts `p -> r`, `q -> r` and `p | q`.
    pub fn disjunction_elimination(
        &mut self,
        p: &Formula,
        q: &Formula,
        r: &Formula,
    ) -> ProofResult<Formula> {
        self.require_open("disjunction_elimination")?;
        let from_p = p.clone().implies(r.clone());
        let from_q = q.clone().implies(r.clone());
        let either = p.clone().or(q.clone());
        self.record(
            r.clone(),
            Justification::DisjunctionElimination,
            &[&from_p, &from_q, &either],
            Vec::new(),
        )
    }

    /// Records `replacement` from the fact `fact` and the equality fact
    /// `identity`.
    ///
    /// `fact` and `replacement` must become the same formula when both
    /// sides of the equality are merged into one fresh term.
    pub fn substitute_equal(
        &mut self,
        fact: &Formula,
        replacement: &Formula,
        identity: &Formula,
    ) -> ProofResult<Formula> {
        self.require_open("substitute_equal")?;
        let (x, y) = match identity {
            Formula::Pred(p, args) if *p == EQUAL && args.len() == 2 => (args[0], args[1]),
            _ => {
                return Err(ProofError::NotEquality {
                    formula: identity.clone(),
                })
            }
        };
        let merged = Term::Free(FreeTerm::fresh());
        let mut map = TermSubst::default();
        map.insert(x, merged);
        map.insert(y, merged);
        if fact.substitute(&map)? != replacement.substitute(&map)? {
            return Err(ProofError::EqualityMismatch {
                left: fact.clone(),
                right: replacement.clone(),
            });
        }
        self.record(
            replacement.clone(),
            Justification::EqualitySubstitution,
            &[fact, identity],
            Vec::new(),
        )
    }

    fn require_open(&self, operation: &'static str) -> ProofResult<()> {
        if self.open.is_empty() {
            Err(ProofError::NoOpenContext { operation })
        } else {
            Ok(())
        }
    }

    fn lookup(&self, formula: &Formula) -> Option<&Fact> {
        self.open
            .iter()
            .rev()
            .chain(std::iter::once(&self.base))
            .find_map(|frame| frame.lookup(formula))
    }

    /// Appends one fact to the innermost frame, after the soundness
    /// checks shared by every rule.
    fn record(
        &mut self,
        formula: Formula,
        justification: Justification,
        premises: &[&Formula],
        evidence: Vec<Fact>,
    ) -> ProofResult<Formula> {
        if let Some(existing) = self.lookup(&formula) {
            return Err(ProofError::DuplicateFact {
                serial: existing.serial,
                formula,
                justification,
            });
        }
        for term in formula.free().iter() {
            let live = match term {
                Term::Free(v) => self.open.iter().any(|frame| frame.free_terms.contains(v)),
                Term::Bound(_) => false,
            };
            if !live {
                return Err(ProofError::TermNotLive {
                    formula,
                    justification,
                });
            }
        }
        let mut premise_serials = Vec::with_capacity(premises.len());
        for premise in premises {
            match self.lookup(premise) {
                Some(fact) => premise_serials.push(fact.serial),
                None => {
                    return Err(ProofError::MissingPremise {
                        formula: (*premise).clone(),
                        justification,
                    })
                }
            }
        }

        let rendered = formula.pretty(&mut self.names)?;
        let serial = self.next_serial;
        self.next_serial += 1;
        let entry = TranscriptEntry {
            serial,
            depth: self.open.len(),
            formula: rendered,
            justification,
            premises: premise_serials.clone(),
        };
        self.sink.record(&entry);

        let fact = Fact {
            formula: formula.clone(),
            serial,
            justification,
            premises: premise_serials,
            evidence,
        };
        let frame = match self.open.last_mut() {
            Some(frame) => frame,
            None => &mut self.base,
        };
        frame.index.insert(formula.clone(), frame.facts.len());
        frame.facts.push(fact);
        Ok(formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::MemorySink;
    use tarskian_kernel::Predicate;

    const CONG: Predicate = Predicate::new("Congruent", 4, "{0}{1}~{2}{3}");

    fn quiet_engine(axioms: Vec<Formula>) -> Engine {
        Engine::with_sink(axioms, Box::new(MemorySink::new())).unwrap()
    }

    fn cong(a: FreeTerm, b: FreeTerm, c: FreeTerm, d: FreeTerm) -> Formula {
        CONG.apply(&[
            Term::Free(a),
            Term::Free(b),
            Term::Free(c),
            Term::Free(d),
        ])
        .unwrap()
    }

    fn reflexivity_axiom() -> Formula {
        let x = FreeTerm::fresh();
        let y = FreeTerm::fresh();
        Formula::forall(&[x, y], cong(x, y, y, x))
    }

    #[test]
    fn axioms_are_recorded_with_serials_from_one() {
        let engine = quiet_engine(vec![reflexivity_axiom()]);
        let axiom = reflexivity_axiom();
        let fact = engine.fact(&axiom).unwrap();
        assert_eq!(fact.serial, 1);
        assert_eq!(fact.justification, Justification::Axiom);
        assert!(fact.premises.is_empty());
    }

    #[test]
    fn open_axiom_is_rejected() {
        let x = FreeTerm::fresh();
        let y = FreeTerm::fresh();
        let open = cong(x, y, y, x);
        let err = Engine::with_sink(vec![open], Box::new(MemorySink::new())).unwrap_err();
        assert!(matches!(err, ProofError::TermNotLive { .. }));
    }

    #[test]
    fn duplicate_axiom_is_rejected() {
        let err = Engine::with_sink(
            vec![reflexivity_axiom(), reflexivity_axiom()],
            Box::new(MemorySink::new()),
        )
        .unwrap_err();
        assert!(matches!(err, ProofError::DuplicateFact { serial: 1, .. }));
    }

    #[test]
    fn rules_need_an_open_context() {
        let mut engine = quiet_engine(vec![reflexivity_axiom()]);
        let err = engine.tertium_non_datur(&reflexivity_axiom()).unwrap_err();
        assert_eq!(
            err,
            ProofError::NoOpenContext {
                operation: "tertium_non_datur"
            }
        );
    }

    #[test]
    fn specialise_records_the_instance() {
        let mut engine = quiet_engine(vec![reflexivity_axiom()]);
        let vars = engine.open_context(2);
        let (x, y) = (vars[0], vars[1]);
        let fact = engine.specialise(&reflexivity_axiom(), &[x, y]).unwrap();
        assert_eq!(fact, cong(x, y, y, x));
        assert_eq!(engine.fact(&fact).unwrap().serial, 2);
        assert_eq!(engine.fact(&fact).unwrap().premises, vec![1]);
    }

    #[test]
    fn partial_specialisation_keeps_a_universal() {
        let mut engine = quiet_engine(vec![reflexivity_axiom()]);
        let vars = engine.open_context(1);
        let fact = engine
            .specialise(&reflexivity_axiom(), &[vars[0]])
            .unwrap();
        assert!(matches!(fact, Formula::All(_, _)));
    }

    #[test]
    fn specialise_of_unknown_fact_is_missing_premise() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(2);
        let unknown = Formula::forall(&[vars[0]], cong(vars[0], vars[1], vars[1], vars[0]));
        let err = engine.specialise(&unknown, &[vars[0]]).unwrap_err();
        assert!(matches!(err, ProofError::MissingPremise { .. }));
    }

    #[test]
    fn assume_then_direct_proof_discharges_in_order() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let (a, b, c, d) = (vars[0], vars[1], vars[2], vars[3]);
        engine.assume(cong(a, b, c, d)).unwrap();
        let second = engine.assume(cong(c, d, a, b)).unwrap();
        let theorem = engine.direct_proof(&second).unwrap();

        let x = FreeTerm::fresh();
        let y = FreeTerm::fresh();
        let r = FreeTerm::fresh();
        let s = FreeTerm::fresh();
        let expected = Formula::forall(
            &[x, y, r, s],
            cong(x, y, r, s)
                .and(cong(r, s, x, y))
                .implies(cong(r, s, x, y)),
        );
        assert_eq!(theorem, expected);
    }

    #[test]
    fn direct_proof_without_assumptions_generalises_the_goal() {
        let mut engine = quiet_engine(vec![reflexivity_axiom()]);
        let vars = engine.open_context(2);
        // Congruent(y, x, x, y) for context variables (x, y); re-deriving
        // the axiom's own statement would be a duplicate.
        let fact = engine
            .specialise(&reflexivity_axiom(), &[vars[1], vars[0]])
            .unwrap();
        let theorem = engine.direct_proof(&fact).unwrap();

        let x = FreeTerm::fresh();
        let y = FreeTerm::fresh();
        assert_eq!(theorem, Formula::forall(&[x, y], cong(y, x, x, y)));
        assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn direct_proof_closes_exactly_one_frame() {
        let mut engine = quiet_engine(Vec::new());
        engine.open_context(0);
        let vars = engine.open_context(4);
        let assumed = engine
            .assume(cong(vars[0], vars[1], vars[2], vars[3]))
            .unwrap();
        assert_eq!(engine.depth(), 2);
        engine.direct_proof(&assumed).unwrap();
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn direct_proof_requires_goal_in_closing_frame() {
        let mut engine = quiet_engine(vec![reflexivity_axiom()]);
        engine.open_context(0);
        let err = engine.direct_proof(&reflexivity_axiom()).unwrap_err();
        assert!(matches!(err, ProofError::NotRecorded { .. }));
    }

    #[test]
    fn closed_frame_terms_are_dead() {
        let mut engine = quiet_engine(Vec::new());
        let outer = engine.open_context(4);
        let inner_fact = engine
            .assume(cong(outer[0], outer[1], outer[2], outer[3]))
            .unwrap();
        engine.direct_proof(&inner_fact).unwrap();
        // The terms of the closed frame may no longer appear in facts.
        engine.open_context(0);
        let err = engine
            .tertium_non_datur(&cong(outer[0], outer[1], outer[2], outer[3]))
            .unwrap_err();
        assert!(matches!(err, ProofError::TermNotLive { .. }));
    }

    #[test]
    fn duplicate_fact_is_rejected_across_frames() {
        let mut engine = quiet_engine(vec![reflexivity_axiom()]);
        engine.open_context(0);
        engine.tertium_non_datur(&reflexivity_axiom()).unwrap();
        let err = engine.tertium_non_datur(&reflexivity_axiom()).unwrap_err();
        assert!(matches!(err, ProofError::DuplicateFact { .. }));
    }

    #[test]
    fn conjunction_and_deductions() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let (a, b, c, d) = (vars[0], vars[1], vars[2], vars[3]);
        let left = engine.assume(cong(a, b, c, d)).unwrap();
        let right = engine.assume(cong(c, d, a, b)).unwrap();
        let both = engine.conjunction(&left, &right).unwrap();
        assert_eq!(both, left.clone().and(right.clone()));

        // The conjuncts are already recorded; re-deriving them duplicates.
        let err = engine.deduce_left(&both).unwrap_err();
        assert!(matches!(err, ProofError::DuplicateFact { .. }));
    }

    #[test]
    fn deduce_right_records_the_right_conjunct() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let (a, b, c, d) = (vars[0], vars[1], vars[2], vars[3]);
        let pair = engine
            .assume(cong(a, b, c, d).and(cong(c, d, a, b)))
            .unwrap();
        let right = engine.deduce_right(&pair).unwrap();
        assert_eq!(right, cong(c, d, a, b));
        assert_eq!(
            engine.fact(&right).unwrap().justification,
            Justification::RightConjunct
        );
    }

    #[test]
    fn deduce_left_rejects_non_conjunction() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let implication = engine
            .assume(cong(vars[0], vars[1], vars[2], vars[3]).implies(cong(
                vars[2],
                vars[3],
                vars[0],
                vars[1],
            )))
            .unwrap();
        let err = engine.deduce_left(&implication).unwrap_err();
        assert!(matches!(err, ProofError::NotConjunction { .. }));
    }

    #[test]
    fn modus_ponens_needs_both_facts() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let p = cong(vars[0], vars[1], vars[2], vars[3]);
        let q = cong(vars[2], vars[3], vars[0], vars[1]);
        engine.assume(p.clone().implies(q.clone())).unwrap();
        // antecedent not recorded
        let err = engine.modus_ponens_pair(&p, &q).unwrap_err();
        assert!(matches!(err, ProofError::MissingPremise { .. }));

        engine.assume(p.clone()).unwrap();
        let got = engine.modus_ponens_pair(&p, &q).unwrap();
        assert_eq!(got, q);
    }

    #[test]
    fn modus_ponens_single_argument_form() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let p = cong(vars[0], vars[1], vars[2], vars[3]);
        let q = cong(vars[2], vars[3], vars[0], vars[1]);
        let implication = engine.assume(p.clone().implies(q.clone())).unwrap();
        engine.assume(p).unwrap();
        let got = engine.modus_ponens(&implication).unwrap();
        assert_eq!(got, q);
        assert_eq!(engine.fact(&got).unwrap().premises, vec![1, 2]);
    }

    #[test]
    fn modus_ponens_rejects_non_implication() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let p = engine
            .assume(cong(vars[0], vars[1], vars[2], vars[3]))
            .unwrap();
        let err = engine.modus_ponens(&p).unwrap_err();
        assert!(matches!(err, ProofError::NotImplication { .. }));
    }

    #[test]
    fn modus_tollens_records_negated_antecedent() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let p = cong(vars[0], vars[1], vars[2], vars[3]);
        let q = cong(vars[2], vars[3], vars[0], vars[1]);
        engine.assume(p.clone().implies(q.clone())).unwrap();
        engine.assume(q.clone().neg()).unwrap();
        let got = engine.modus_tollens(&p, &q).unwrap();
        assert_eq!(got, p.neg());
    }

    #[test]
    fn tertium_and_non_contradiction_are_premise_free() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let p = cong(vars[0], vars[1], vars[2], vars[3]);
        let excluded = engine.tertium_non_datur(&p).unwrap();
        assert_eq!(excluded, p.clone().or(p.clone().neg()));
        let nc = engine.non_contradiction(&p).unwrap();
        assert_eq!(nc, p.clone().and(p.neg()).neg());
    }

    #[test]
    fn disjunction_elimination_needs_all_three_premises() {
        let mut engine = quiet_engine(Vec::new());
        let vars = engine.open_context(4);
        let (a, b, c, d) = (vars[0], vars[1], vars[2], vars[3]);
        let p = cong(a, b, c, d);
        let q = cong(b, a, c, d);
        let r = cong(c, d, a, b);
        engine.assume(p.clone().implies(r.clone())).unwrap();
        engine.assume(q.clone().implies(r.clone())).unwrap();
        let err = engine.disjunction_elimination(&p, &q, &r).unwrap_err();
        assert!(matches!(err, ProofError::MissingPremise { .. }));

        engine.assume(p.clone().or(q.clone())).unwrap();
        let got = engine.disjunction_elimination(&p, &q, &r).unwrap();
        assert_eq!(got, r);
    }

    #[test]
    fn serials_increase_strictly() {
        let mut engine = quiet_engine(vec![reflexivity_axiom()]);
        let vars = engine.open_context(2);
        let f1 = engine
            .specialise(&reflexivity_axiom(), &[vars[0], vars[1]])
            .unwrap();
        let f2 = engine
            .specialise(&reflexivity_axiom(), &[vars[1], vars[0]])
            .unwrap();
        let s1 = engine.fact(&f1).unwrap().serial;
        let s2 = engine.fact(&f2).unwrap().serial;
        assert!(s1 > 0);
        assert!(s2 > s1);
    }
}
