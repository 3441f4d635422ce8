//! # Graph Translator
//!
//! Turns ontology records into namespace-grouped DOT lines.
//!
//! A [`TranslationRun`] owns every accumulator of one run (labels, child
//! index, namespace groups). Records are consumed in two passes: all
//! entities first, so the child index is complete, then all verbs.
//!
//! ```text
//! &[Record] → pass 1: entities (labels, children, vertices)
//!           → pass 2: verbs    (edges, optional hierarchy expansion)
//!           → export::write_dot() → Sink
//! ```

use serde::{Deserialize, Serialize};

use crate::export::{self, Sink};
use crate::group::NamespaceGroups;
use crate::hierarchy::ChildMap;
use crate::label::LabelMap;
use crate::model::*;
use crate::Result;

// ============================================================================
// Options
// ============================================================================

/// Translation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Repeat every verb edge for all transitive descendants of its `from`
    /// endpoint, and separately for all descendants of its `to` endpoint.
    pub expand_hierarchy: bool,
}

impl TranslateOptions {
    pub fn with_expand_hierarchy(mut self, enabled: bool) -> Self {
        self.expand_hierarchy = enabled;
        self
    }
}

// ============================================================================
// TranslationRun
// ============================================================================

/// Which endpoint of an allowed edge stays fixed while the other side is
/// replaced by its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    From,
    To,
}

/// State of a single translation.
#[derive(Debug)]
pub struct TranslationRun {
    options: TranslateOptions,
    labels: LabelMap,
    children: ChildMap,
    groups: NamespaceGroups,
}

impl TranslationRun {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            options,
            labels: LabelMap::new(),
            children: ChildMap::new(),
            groups: NamespaceGroups::new(),
        }
    }

    /// Run both passes over `records`.
    pub fn ingest(&mut self, records: &[Record]) {
        for record in records {
            if let Record::Entity(entity) = record {
                self.add_entity(entity);
            }
        }
        for record in records {
            if let Record::Verb(verb) = record {
                self.add_verb(verb);
            }
        }
        tracing::debug!(
            labels = self.labels.len(),
            namespaces = self.groups.len(),
            "translated ontology records"
        );
    }

    /// Pass 1: label the entity, index it under its parent, emit its vertex.
    pub fn add_entity(&mut self, entity: &EntityRecord) {
        let label = self.labels.label_for(&entity.id).to_owned();
        if let Some(parent) = entity.parent() {
            let parent_label = self.labels.label_for(parent);
            self.children.add_child(parent_label, &entity.id);
        }
        self.groups.add_vertex(
            namespace_of(&entity.id),
            format!("{label} [label=\"{}\"];", display_name(&entity.id)),
        );
    }

    /// Pass 2: emit one edge per allowed pair, plus expansions if enabled.
    ///
    /// Must run after every entity was added, otherwise descendants declared
    /// later are missed.
    pub fn add_verb(&mut self, verb: &VerbRecord) {
        let namespace = namespace_of(&verb.id);
        let name = display_name(&verb.id);
        for edge in &verb.allowed {
            let from = self.labels.label_for(&edge.from).to_owned();
            let to = self.labels.label_for(&edge.to).to_owned();
            self.groups.add_edge(namespace, edge_line(&from, &to, name));

            if self.options.expand_hierarchy {
                self.expand(namespace, name, &from, &to, Side::From);
                self.expand(namespace, name, &from, &to, Side::To);
            }
        }
    }

    fn expand(&mut self, namespace: &str, name: &str, from: &str, to: &str, side: Side) {
        let root = match side {
            Side::From => from,
            Side::To => to,
        };
        for descendant in self.children.descendants(root, &mut self.labels) {
            let line = match side {
                Side::From => edge_line(&descendant, to, name),
                Side::To => edge_line(from, &descendant, name),
            };
            self.groups.add_edge(namespace, line);
        }
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn children(&self) -> &ChildMap {
        &self.children
    }

    pub fn groups(&self) -> &NamespaceGroups {
        &self.groups
    }

    /// Serialize the accumulated groups and drop the run.
    pub fn finish(self, sink: &mut dyn Sink) -> Result<()> {
        export::write_dot(&self.groups, sink)
    }
}

fn edge_line(from: &str, to: &str, name: &str) -> String {
    format!("{from} -> {to} [label=\"{name}\"];")
}

// ============================================================================
// Entry points
// ============================================================================

/// Translate `records` and append the DOT text to `sink`.
pub fn translate(records: &[Record], options: &TranslateOptions, sink: &mut dyn Sink) -> Result<()> {
    let mut run = TranslationRun::new(options.clone());
    run.ingest(records);
    run.finish(sink)
}

/// Translate `records` into an owned DOT string.
pub fn translate_to_string(records: &[Record], options: &TranslateOptions) -> Result<String> {
    let mut out = String::new();
    translate(records, options, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://www.purl.org/ogit/";

    fn id(name: &str) -> String {
        format!("{NS}{name}")
    }

    fn run(records: &[Record], expand: bool) -> TranslationRun {
        let mut run = TranslationRun::new(TranslateOptions::default().with_expand_hierarchy(expand));
        run.ingest(records);
        run
    }

    #[test]
    fn test_entities_processed_before_verbs() {
        // The verb comes first in the input but entities still get the
        // first labels.
        let records = vec![
            Record::Verb(VerbRecord::new(id("links")).allow(id("Z"), id("Y"))),
            Record::Entity(EntityRecord::new(id("Y"))),
            Record::Entity(EntityRecord::new(id("Z"))),
        ];
        let run = run(&records, false);
        assert_eq!(run.labels().get(&id("Y")), Some("a"));
        assert_eq!(run.labels().get(&id("Z")), Some("b"));
        assert_eq!(run.groups().get("ogit").unwrap().edges, vec!["b -> a [label=\"ogit/links\"];"]);
    }

    #[test]
    fn test_parent_labelled_at_child_declaration() {
        let records = vec![
            Record::Entity(EntityRecord::new(id("Child")).with_parent(id("Parent"))),
            Record::Entity(EntityRecord::new(id("Parent"))),
        ];
        let run = run(&records, false);
        assert_eq!(run.labels().get(&id("Child")), Some("a"));
        assert_eq!(run.labels().get(&id("Parent")), Some("b"));
        assert_eq!(run.children().children("b"), &[id("Child")]);
    }

    #[test]
    fn test_edges_grouped_by_verb_namespace() {
        let records = vec![
            Record::Entity(EntityRecord::new(id("A"))),
            Record::Entity(EntityRecord::new(id("B"))),
            Record::Verb(
                VerbRecord::new("http://www.purl.org/arago/knows").allow(id("A"), id("B")),
            ),
        ];
        let run = run(&records, false);
        let groups = run.groups();
        assert!(groups.get("ogit").unwrap().edges.is_empty());
        assert_eq!(groups.get("arago").unwrap().edges, vec!["a -> b [label=\"arago/knows\"];"]);
        assert!(groups.get("arago").unwrap().vertices.is_empty());
    }

    #[test]
    fn test_unknown_endpoints_get_labels_lazily() {
        let records = vec![Record::Verb(VerbRecord::new(id("uses")).allow(id("X"), id("Y")))];
        let run = run(&records, true);
        assert_eq!(run.labels().len(), 2);
        assert_eq!(run.groups().get("ogit").unwrap().edges, vec!["a -> b [label=\"ogit/uses\"];"]);
    }

    #[test]
    fn test_expansion_order_from_side_then_to_side() {
        // P1 has children C1, C2. P2 has child D1. Verb P1 -> P2.
        let records = vec![
            Record::Entity(EntityRecord::new(id("P1"))),
            Record::Entity(EntityRecord::new(id("P2"))),
            Record::Entity(EntityRecord::new(id("C1")).with_parent(id("P1"))),
            Record::Entity(EntityRecord::new(id("C2")).with_parent(id("P1"))),
            Record::Entity(EntityRecord::new(id("D1")).with_parent(id("P2"))),
            Record::Verb(VerbRecord::new(id("rel")).allow(id("P1"), id("P2"))),
        ];
        let run = run(&records, true);
        assert_eq!(
            run.groups().get("ogit").unwrap().edges,
            vec![
                "a -> b [label=\"ogit/rel\"];",
                "c -> b [label=\"ogit/rel\"];",
                "d -> b [label=\"ogit/rel\"];",
                "a -> e [label=\"ogit/rel\"];",
            ]
        );
    }

    #[test]
    fn test_cyclic_hierarchy_terminates() {
        let records = vec![
            Record::Entity(EntityRecord::new(id("X")).with_parent(id("Y"))),
            Record::Entity(EntityRecord::new(id("Y")).with_parent(id("X"))),
            Record::Verb(VerbRecord::new(id("rel")).allow(id("X"), id("Z"))),
        ];
        let run = run(&records, true);
        // X -> Z, then Y (descendant of X) -> Z. Z has no children.
        assert_eq!(
            run.groups().get("ogit").unwrap().edges,
            vec!["a -> c [label=\"ogit/rel\"];", "b -> c [label=\"ogit/rel\"];"]
        );
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: TranslateOptions = serde_yaml::from_str("{}").unwrap();
        assert_eq!(opts, TranslateOptions::default());
        let opts: TranslateOptions = serde_yaml::from_str("expand_hierarchy: true").unwrap();
        assert!(opts.expand_hierarchy);
    }
}
