//! Recorded facts and their justifications.

use std::fmt;
use tarskian_kernel::Formula;

/// The inference rule (or axiom status) that justified a fact.
///
/// `Display` yields the exact transcript label.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Justification {
    Axiom,
    Assumption,
    DirectProof,
    UniversalSpecialisation,
    ExistentialInstantiation,
    Conjunction,
    LeftConjunct,
    RightConjunct,
    ModusPonens,
    ModusTollens,
    EqualitySubstitution,
    DisjunctionElimination,
    TertiumNonDatur,
    NonContradiction,
}

impl Justification {
    /// The transcript label of this justification.
    pub fn label(&self) -> &'static str {
        match self {
            Justification::Axiom => "Axiom",
            Justification::Assumption => "assumption",
            Justification::DirectProof => "direct proof",
            Justification::UniversalSpecialisation => "universal specialisation",
            Justification::ExistentialInstantiation => "existential instantiation",
            Justification::Conjunction => "conjunction",
            Justification::LeftConjunct => "left part of conjunction",
            Justification::RightConjunct => "right part of conjunction",
            Justification::ModusPonens => "modus ponens",
            Justification::ModusTollens => "modus tollens",
            Justification::EqualitySubstitution => "equality substitution",
            Justification::DisjunctionElimination => "disjunction elimination",
            Justification::TertiumNonDatur => "tertium non datur",
            Justification::NonContradiction => "non contradiction",
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A formula recorded in a proof context.
///
/// Never mutated after recording. `premises` holds the serials of the
/// facts the rule consumed; `evidence` is non-empty only for direct
/// proofs, where it snapshots the facts of the frame that was closed.
#[derive(Clone, Debug)]
pub struct Fact {
    pub formula: Formula,
    pub serial: u64,
    pub justification: Justification,
    pub premises: Vec<u64>,
    pub evidence: Vec<Fact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_transcript_vocabulary() {
        assert_eq!(Justification::Axiom.label(), "Axiom");
        assert_eq!(Justification::DirectProof.label(), "direct proof");
        assert_eq!(
            Justification::UniversalSpecialisation.label(),
            "universal specialisation"
        );
        assert_eq!(
            Justification::LeftConjunct.to_string(),
            "left part of conjunction"
        );
        assert_eq!(Justification::TertiumNonDatur.label(), "tertium non datur");
    }
}
