//! # tarskian-proof
//!
//! The proof engine over the `tarskian-kernel` formula algebra.
//!
//! A proof session is an [`Engine`] seeded with an axiom bundle. User
//! scripts open contexts (introducing fresh free terms), derive facts
//! through the fixed inference vocabulary, and close each context with a
//! direct proof, which discharges the context's assumptions and
//! generalises its variables into a theorem one level out.
//!
//! # Example
//!
//! ```
//! use tarskian_kernel::{Formula, Predicate, Term};
//! use tarskian_proof::{Engine, MemorySink};
//!
//! const P: Predicate = Predicate::new("P", 1, "P({0})");
//!
//! let sink = MemorySink::new();
//! let mut engine = Engine::with_sink(Vec::new(), Box::new(sink.clone())).unwrap();
//! let vars = engine.open_context(1);
//! let p = P.apply(&[Term::Free(vars[0])]).unwrap();
//! let assumed = engine.assume(p).unwrap();
//! let theorem = engine.direct_proof(&assumed).unwrap();
//! // theorem is  Ax: (P(x) -> P(x))
//! assert!(matches!(theorem, Formula::All(_, _)));
//! assert_eq!(sink.entries().len(), 2);
//! ```
//!
//! # Soundness checks
//!
//! Each rule validates its premises against the visible fact chain and
//! every recorded formula against the live variable scope; violations are
//! fatal [`ProofError`]s. See the crate's `engine` module docs for the
//! recording discipline.

mod engine;
mod error;
mod fact;
mod transcript;

pub use engine::Engine;
pub use error::{ProofError, ProofResult};
pub use fact::{Fact, Justification};
pub use transcript::{MemorySink, StdoutSink, TranscriptEntry, TranscriptSink};
