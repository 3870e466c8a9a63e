//! E2E: exact transcript output of the development.
//!
//! The transcript format is part of the engine contract: serial, two
//! spaces of indent per open frame, the rendered fact, the justification
//! label, and the premise serials in parentheses.

use tarskian_geometry::{develop, Axioms};
use tarskian_proof::{Engine, Justification, MemorySink};

fn transcript() -> (Vec<String>, MemorySink) {
    let axioms = Axioms::new().unwrap();
    let sink = MemorySink::new();
    let mut engine =
        Engine::with_sink(axioms.bundle(), Box::new(sink.clone())).unwrap();
    develop(&mut engine, &axioms).unwrap();
    (sink.lines(), sink)
}

#[test]
fn axiom_lines_render_exactly() {
    let (lines, _) = transcript();
    let expected = [
        "1 Ax,y: xy~yx Axiom",
        "2 Ax,y,r,s,t,u: ((xy~rs & xy~tu) -> rs~tu) Axiom",
        "3 Ax,y,r: (xy~rr -> x = y) Axiom",
        "4 Ax,y,r,s: Et: ((y in xt) & yt~rs) Axiom",
        "5 Ax,y,r,s,t,u,v,w: ((!x = y & ((((((y in xr) & (u in tv)) & xy~tu) & yr~uv) & xs~tw) & ys~uw)) -> rs~vw) Axiom",
        "6 Ax,y: ((y in xx) -> x = y) Axiom",
        "7 Ax,y,r,s,t: (((r in xt) & (s in xt)) -> Eu: ((u in ry) & (u in sx))) Axiom",
        "8 Ex,y,r: ((!(y in xr) & !(r in yx)) & !(x in ry)) Axiom",
        "9 Ax,y,r,s,t: (((rx~ry & sx~sy) & tx~ty) -> (((s in rt) | (t in sr)) | (r in ts))) Axiom",
        "10 Ax: x = x Axiom",
    ];
    assert_eq!(&lines[..10], &expected);
}

#[test]
fn first_proof_context_lines_render_exactly() {
    let (lines, _) = transcript();
    // symmetry of equality: assume, specialise, merge, discharge
    let expected = [
        "11   a = b assumption",
        "12   a = a universal specialisation (10)",
        "13   b = a equality substitution (12, 11)",
        "14 Ax,y: (x = y -> y = x) direct proof",
    ];
    assert_eq!(&lines[10..14], &expected);
}

#[test]
fn reflexivity_context_recycles_display_names() {
    let (lines, _) = transcript();
    // the previous context returned "a" and "b" to the pool
    let expected = [
        "15   ((ab~ba & ab~ba) -> ba~ba) universal specialisation (2)",
        "16   ab~ba universal specialisation (1)",
        "17   (ab~ba & ab~ba) conjunction (16, 16)",
        "18   ba~ba modus ponens (15, 17)",
        "19 Ax,y: xy~xy direct proof",
    ];
    assert_eq!(&lines[14..19], &expected);
}

#[test]
fn axioms_have_no_premises_and_no_indent() {
    let (_, sink) = transcript();
    for entry in sink.entries().iter().take(10) {
        assert_eq!(entry.justification, Justification::Axiom);
        assert_eq!(entry.depth, 0);
        assert!(entry.premises.is_empty());
    }
}

#[test]
fn serials_are_contiguous_from_one() {
    let (_, sink) = transcript();
    for (i, entry) in sink.entries().iter().enumerate() {
        assert_eq!(entry.serial, i as u64 + 1);
    }
}

#[test]
fn in_context_facts_are_indented() {
    let (_, sink) = transcript();
    for entry in sink.entries() {
        match entry.justification {
            Justification::Axiom | Justification::DirectProof => {
                assert_eq!(entry.depth, 0, "line: {}", entry.render());
            }
            _ => {
                assert_eq!(entry.depth, 1, "line: {}", entry.render());
            }
        }
    }
}
