//! # ontology-dot — Ontology → Graphviz DOT
//!
//! Renders ontology definitions (`Entity` and `Verb` records under
//! `http://www.purl.org/<namespace>/...` identifiers) as a directed graph
//! for Graphviz.
//!
//! ## Design Principles
//!
//! 1. **Records in, text out**: the translator sees a parsed `&[Record]` and
//!    only ever appends text to a `Sink`
//! 2. **One run, one context**: labels, child index and namespace groups
//!    live in a `TranslationRun` and are dropped after serialization
//! 3. **Deterministic**: same records + options → byte-identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use ontology_dot::TranslateOptions;
//!
//! # fn example() -> ontology_dot::Result<()> {
//! let yaml = r#"
//! - Entity: { id: "http://www.purl.org/ogit/Foo" }
//! - Entity: { id: "http://www.purl.org/ogit/Bar", parent: "http://www.purl.org/ogit/Foo" }
//! "#;
//! let dot = ontology_dot::dot_from_str(yaml, &TranslateOptions::default())?;
//! assert!(dot.contains(r#"b [label="ogit/Bar"];"#));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Output Layout
//!
//! | Section | Content |
//! |---------|---------|
//! | header | `digraph Ontology {` |
//! | vertices | per namespace: style preamble + `label [label="ns/Name"];` lines |
//! | edges | per namespace: style preamble + `a -> b [label="ns/verb"];` lines |
//! | footer | `}` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod label;
pub mod hierarchy;
pub mod group;
pub mod translate;
pub mod export;
pub mod load;

use std::io::Read;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Record, EntityRecord, VerbRecord, AllowedEdge};

// ============================================================================
// Re-exports: Translation + Export
// ============================================================================

pub use translate::{TranslateOptions, TranslationRun, translate, translate_to_string};
pub use export::{Sink, IoSink};

// ============================================================================
// Convenience entry points
// ============================================================================

/// Parse YAML ontology text and return the DOT graph as a string.
pub fn dot_from_str(yaml: &str, options: &TranslateOptions) -> Result<String> {
    let records = load::from_str(yaml)?;
    translate_to_string(&records, options)
}

/// Read YAML ontology text from `reader` and write the DOT graph to `sink`.
///
/// Nothing is written if the input fails to parse.
pub fn dot_from_reader<R: Read>(
    reader: R,
    options: &TranslateOptions,
    sink: &mut dyn Sink,
) -> Result<()> {
    let records = load::from_reader(reader)?;
    translate(&records, options, sink)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Ontology parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Input is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
