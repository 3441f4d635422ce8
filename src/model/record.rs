//! Ontology records — the translator's input.
//!
//! A record file is a sequence of single-key maps:
//!
//! ```yaml
//! - Entity:
//!     id: http://www.purl.org/ogit/Bar
//!     parent: http://www.purl.org/ogit/Foo
//! - Verb:
//!     id: http://www.purl.org/ogit/connects
//!     allowed:
//!       - from: http://www.purl.org/ogit/Foo
//!         to: http://www.purl.org/ogit/Bar
//! ```
//!
//! Fields other than the ones below are ignored on load.

use serde::{Deserialize, Deserializer, Serialize};

/// One input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    #[serde(rename = "Entity")]
    Entity(EntityRecord),
    #[serde(rename = "Verb")]
    Verb(VerbRecord),
}

/// A node declaration, optionally nested under a parent entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), parent: None }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// The declared parent, treating an empty string as no parent.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }
}

/// A relationship type with the entity pairs it may connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allowed: Vec<AllowedEdge>,
}

impl VerbRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), allowed: Vec::new() }
    }

    pub fn allow(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.allowed.push(AllowedEdge { from: from.into(), to: to.into() });
        self
    }
}

/// A permitted `(from, to)` pair for a verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllowedEdge {
    pub from: String,
    pub to: String,
}

/// `allowed: ~` loads the same as a missing `allowed`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<AllowedEdge>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<AllowedEdge>>::deserialize(deserializer)?.unwrap_or_default())
}
