//! # Namespace Groups
//!
//! Output lines are bucketed per namespace so each bucket can open with its
//! own Graphviz `node`/`edge` defaults. Groups are created lazily on the
//! first vertex or edge attributed to a namespace and keep creation order.

pub mod palette;

use hashbrown::HashMap;

pub use palette::{ColorPair, Palette, COLOR_SCHEME, PALETTE_SIZE};

// ============================================================================
// NamespaceGroup
// ============================================================================

/// Accumulated output for one namespace.
#[derive(Debug, Clone)]
pub struct NamespaceGroup {
    pub name: String,
    pub colors: ColorPair,
    /// Style directives, written before the vertex block and again before
    /// the edge block. The last line is blank.
    pub preamble: Vec<String>,
    pub vertices: Vec<String>,
    pub edges: Vec<String>,
}

impl NamespaceGroup {
    fn new(name: &str, colors: ColorPair) -> Self {
        let ColorPair { fill, border } = colors;
        let preamble = vec![
            format!("// Namespace: {name}"),
            format!(
                "edge [penwidth=2, colorscheme={COLOR_SCHEME}, color={border}, fontcolor={border}];"
            ),
            format!(
                "node [penwidth=2, colorscheme={COLOR_SCHEME}, color={border}, fontcolor={border}, fillcolor={fill}, style=filled ];"
            ),
            String::new(),
        ];
        Self {
            name: name.to_owned(),
            colors,
            preamble,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

// ============================================================================
// NamespaceGroups
// ============================================================================

/// All groups of a run, in creation order.
#[derive(Debug, Default)]
pub struct NamespaceGroups {
    groups: Vec<NamespaceGroup>,
    index: HashMap<String, usize>,
    palette: Palette,
}

impl NamespaceGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, namespace: &str, line: String) {
        self.group_mut(namespace).vertices.push(line);
    }

    pub fn add_edge(&mut self, namespace: &str, line: String) {
        self.group_mut(namespace).edges.push(line);
    }

    pub fn get(&self, namespace: &str) -> Option<&NamespaceGroup> {
        self.index.get(namespace).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamespaceGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn group_mut(&mut self, namespace: &str) -> &mut NamespaceGroup {
        let idx = match self.index.get(namespace) {
            Some(&i) => i,
            None => self.create(namespace),
        };
        &mut self.groups[idx]
    }

    fn create(&mut self, namespace: &str) -> usize {
        let colors = self.palette.allocate();
        tracing::debug!(namespace, fill = colors.fill, border = colors.border, "new namespace group");
        if colors.is_exhausted() {
            tracing::warn!(
                namespace,
                color = colors.border,
                palette_size = PALETTE_SIZE,
                "not enough colors in {COLOR_SCHEME}, namespaces will share or lack colors"
            );
        }
        let idx = self.groups.len();
        self.groups.push(NamespaceGroup::new(namespace, colors));
        self.index.insert(namespace.to_owned(), idx);
        idx
    }
}

impl<'a> IntoIterator for &'a NamespaceGroups {
    type Item = &'a NamespaceGroup;
    type IntoIter = std::slice::Iter<'a, NamespaceGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
