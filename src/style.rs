//! Style mapping and class utilities
//!
//! `StyleMap` is the immutable lookup table from classification tag-sets
//! to style-class strings. An empty mapped string means "wrap, but add no
//! style"; a missing entry is the unmapped sentinel the renderer logs
//! about. `merge_classes` composes class strings the way the rest of the
//! crate expects: deduplicated, last occurrence winning.

use std::collections::HashMap;

/// Mapping from classification tag-sets to style-class strings
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    entries: HashMap<Vec<String>, String>,
}

impl StyleMap {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the built-in mapping for the `pl-*` tag vocabulary
    pub fn builtin() -> Self {
        let mut map = Self::new();
        // keyword
        map.insert_tag("pl-k", "hl-keyword");
        // entity (functions, macros, types)
        map.insert_tag("pl-en", "hl-entity");
        map.insert_tag("pl-e", "hl-entity-name");
        // entity tag
        map.insert_tag("pl-ent", "hl-tag hl-italic");
        // constant
        map.insert_tag("pl-c1", "hl-constant");
        // comment
        map.insert_tag("pl-c", "hl-comment");
        // string
        map.insert_tag("pl-s", "hl-string");
        map.insert_tag("pl-cce", "hl-escape");
        map.insert_tag("pl-pds", "");
        // storage-modifier-import
        map.insert_tag("pl-smi", "hl-storage");
        map.insert_tag("pl-sr", "hl-regexp");
        // variable
        map.insert_tag("pl-v", "hl-variable");
        map.insert_tag("pl-pse", "hl-punctuation");
        map
    }

    /// Map a single-tag set to a style class
    pub fn insert_tag(&mut self, tag: &str, class: &str) {
        self.entries
            .insert(vec![tag.to_string()], class.to_string());
    }

    /// Look up a tag-set; None means unmapped
    pub fn class_for(&self, tags: &[String]) -> Option<&str> {
        self.entries.get(tags).map(|s| s.as_str())
    }

    /// Number of mapped tag-sets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merge whitespace-separated class lists into one deduplicated string
///
/// Later occurrences win: `"a b" + "b c"` keeps the final `b` position,
/// yielding `"a b c"`.
pub fn merge_classes(parts: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for part in parts {
        for class in part.split_whitespace() {
            // Last occurrence wins its position
            if let Some(idx) = seen.iter().position(|c| *c == class) {
                seen.remove(idx);
            }
            seen.push(class);
        }
    }
    seen.join(" ")
}
