//! # Ontology Model
//!
//! Input records for the translator: entities and verbs, plus the helpers
//! that derive display names and namespaces from their identifiers.
//!
//! Design rule: pure data. No I/O, no state, no DOT formatting here.

pub mod record;
pub mod id;

pub use record::{Record, EntityRecord, VerbRecord, AllowedEdge};
pub use id::{ID_PREFIX, display_name, namespace_of};
