//! Short labels for ontology identifiers.
//!
//! DOT output refers to every vertex by a compact label instead of its full
//! identifier. Labels are handed out in first-seen order from the sequence
//! `a..z, aa..az, ba..zz, aaa, ...` and never change for the rest of a run.

use hashbrown::HashMap;

use crate::model::display_name;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Identifier → label assignment for one translation run.
///
/// Keys are display names, so `http://www.purl.org/ogit/Foo` and `ogit/Foo`
/// share a label.
#[derive(Debug, Default)]
pub struct LabelMap {
    labels: HashMap<String, String>,
    next: usize,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for `id`, assigning the next free one on first sight.
    pub fn label_for(&mut self, id: &str) -> &str {
        let next = &mut self.next;
        self.labels
            .entry_ref(display_name(id))
            .or_insert_with(|| {
                let label = encode(*next);
                *next += 1;
                label
            })
            .as_str()
    }

    /// Label for `id` if one was already assigned.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(display_name(id)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The `n`th label (0-based): bijective base-26 over `a..z`.
pub fn encode(mut n: usize) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(ALPHABET[n % 26]);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}
