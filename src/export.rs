//! DOT export — serialize namespace groups as a Graphviz digraph.
//!
//! ```text
//! NamespaceGroups → write_dot() → Sink
//!   → String buffer, or any io::Write (stdout, file) written incrementally
//! ```
//!
//! Every vertex block is written before any edge block. Graphviz scopes
//! `node [...]` / `edge [...]` defaults to the statements that follow, so
//! each group's preamble is repeated in front of its edge block.

use std::io::Write;

use crate::group::NamespaceGroups;
use crate::Result;

const HEADER: &str = "digraph Ontology {\n";
const FOOTER: &str = "}\n";
const INDENT: &str = "  ";

// ============================================================================
// Sink
// ============================================================================

/// Append-only text destination.
pub trait Sink {
    fn append(&mut self, text: &str) -> Result<()>;
}

impl Sink for String {
    fn append(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapter writing straight through to an [`io::Write`](std::io::Write).
pub struct IoSink<W: Write> {
    writer: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Write the complete digraph for `groups` to `sink`.
pub fn write_dot(groups: &NamespaceGroups, sink: &mut dyn Sink) -> Result<()> {
    sink.append(HEADER)?;
    for group in groups {
        write_block(sink, &group.preamble)?;
        write_block(sink, &group.vertices)?;
    }
    for group in groups {
        write_block(sink, &group.preamble)?;
        write_block(sink, &group.edges)?;
    }
    sink.append(FOOTER)
}

/// One indented line per entry. An empty block still yields a single
/// indented blank line.
fn write_block(sink: &mut dyn Sink, lines: &[String]) -> Result<()> {
    sink.append(INDENT)?;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            sink.append("\n")?;
            sink.append(INDENT)?;
        }
        sink.append(line)?;
    }
    sink.append("\n")
}
