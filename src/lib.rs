//! hilite - dual-engine syntax highlighting to classed HTML
//!
//! Two rendering strategies sit behind one [`Engine`] interface:
//!
//! - the **tree engine**: built-in grammars parse source into a
//!   [`SyntaxNode`] tree with classification tags, which the renderer
//!   walks into styled spans resolved against a [`Theme`];
//! - the **classed engine**: a coarse auto-highlighter that guesses the
//!   language from keyword profiles and emits flat `hljs-*` markup.
//!
//! [`Highlighter`] is the entry point and applies the selection policy:
//! explicit languages always take the tree engine; automatic calls keep
//! the classed output unless the guess lands on a language the tree
//! engine renders better.
//!
//! ```
//! use hilite::Highlighter;
//!
//! let hl = Highlighter::new();
//! let html = hl.highlight("pub fn main() {}", Some("rust")).unwrap();
//! assert!(html.contains("hl-keyword"));
//! ```

mod classed;
mod detect;
mod error;
mod grammar;
mod highlighter;
mod render;
mod style;
mod theme;
mod tree;

pub use classed::{AutoHighlight, ClassedEngine};
pub use detect::{Detector, LanguageCandidate};
pub use error::{HiliteError, Result};
pub use grammar::{Scope, TreeEngine};
pub use highlighter::{Engine, Highlighter, TREE_PREFERRED};
pub use render::{escape_html, render_tree};
pub use style::{merge_classes, StyleMap};
pub use theme::Theme;
pub use tree::SyntaxNode;
