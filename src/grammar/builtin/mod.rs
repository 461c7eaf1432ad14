//! Built-in grammars
//!
//! This module provides the grammar definitions shipped with the
//! tree engine.

mod javascript;
mod rust;
mod typescript;

use super::Grammar;

/// Get all built-in grammars
pub fn all_grammars() -> Vec<Grammar> {
    vec![
        rust::rust_grammar(),
        javascript::javascript_grammar(),
        typescript::typescript_grammar(),
    ]
}
