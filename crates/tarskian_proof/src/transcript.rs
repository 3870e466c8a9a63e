//! The proof transcript: one line per recorded fact.
//!
//! The engine renders each fact at the moment it is recorded (names must
//! be assigned while the fact's terms are still live) and hands the entry
//! to a [`TranscriptSink`]. [`StdoutSink`] prints each line as it is
//! recorded; [`MemorySink`] accumulates entries for inspection.

use crate::fact::Justification;
use std::cell::RefCell;
use std::rc::Rc;

/// One transcript line, structured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub serial: u64,
    /// Number of frames open when the fact was recorded.
    pub depth: usize,
    /// The fact, already pretty-printed.
    pub formula: String,
    pub justification: Justification,
    /// Serials of the premises, in rule order.
    pub premises: Vec<u64>,
}

impl TranscriptEntry {
    /// `<serial> <2 spaces per open frame><formula> <label>[ (s, s, …)]`
    pub fn render(&self) -> String {
        let mut line = format!(
            "{} {}{} {}",
            self.serial,
            "  ".repeat(self.depth),
            self.formula,
            self.justification
        );
        if !self.premises.is_empty() {
            let refs: Vec<String> = self.premises.iter().map(u64::to_string).collect();
            line.push_str(&format!(" ({})", refs.join(", ")));
        }
        line
    }
}

/// Receives each recorded fact, in order.
pub trait TranscriptSink {
    fn record(&mut self, entry: &TranscriptEntry);
}

/// Prints each entry to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TranscriptSink for StdoutSink {
    fn record(&mut self, entry: &TranscriptEntry) {
        println!("{}", entry.render());
    }
}

/// Accumulates entries behind a shared handle.
///
/// Clone the sink before handing it to the engine and read the clone
/// afterwards; the engine is single-threaded, so a non-atomic shared
/// cell suffices.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<TranscriptEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far.
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.borrow().clone()
    }

    /// All entries rendered to lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries.borrow().iter().map(TranscriptEntry::render).collect()
    }
}

impl TranscriptSink for MemorySink {
    fn record(&mut self, entry: &TranscriptEntry) {
        self.entries.borrow_mut().push(entry.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_premises_has_no_reference_list() {
        let entry = TranscriptEntry {
            serial: 3,
            depth: 0,
            formula: "Ax,y: xy~yx".to_string(),
            justification: Justification::Axiom,
            premises: vec![],
        };
        assert_eq!(entry.render(), "3 Ax,y: xy~yx Axiom");
    }

    #[test]
    fn render_indents_two_spaces_per_frame() {
        let entry = TranscriptEntry {
            serial: 9,
            depth: 2,
            formula: "a = b".to_string(),
            justification: Justification::ModusPonens,
            premises: vec![4, 8],
        };
        assert_eq!(entry.render(), "9     a = b modus ponens (4, 8)");
    }

    #[test]
    fn memory_sink_shares_entries_across_clones() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();
        handle.record(&TranscriptEntry {
            serial: 1,
            depth: 0,
            formula: "f".to_string(),
            justification: Justification::Axiom,
            premises: vec![],
        });
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(sink.lines(), vec!["1 f Axiom".to_string()]);
    }
}
