//! Grammar-driven tree engine
//!
//! The precise of the two highlighting strategies: a fixed set of
//! built-in grammars parses source text into a `SyntaxNode` tree whose
//! elements carry `pl-*` classification tags, later resolved against a
//! theme by the renderer.

mod builtin;
mod rules;

pub use rules::{scan, Segment, TagRule};

use regex::Regex;

use crate::tree::SyntaxNode;

/// Classification tag for string delimiters (quotes)
const TAG_DELIMITER: &str = "pl-pds";
/// Classification tag for escape sequences inside strings
const TAG_ESCAPE: &str = "pl-cce";

/// Identifier for a language grammar known to the tree engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope(String);

impl Scope {
    /// Create a scope from its identifier (e.g. "source.rust")
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// The scope identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named, ordered rule set for one language
pub struct Grammar {
    /// Display name (e.g. "Rust")
    pub name: String,
    /// Scope identifier for this grammar
    pub scope: Scope,
    /// Flags (aliases) resolving to this grammar, lowercase
    pub flags: Vec<String>,
    /// Classification rules, sorted by priority (highest first)
    rules: Vec<TagRule>,
    /// Escape-sequence pattern used when lexing string interiors
    escape: Regex,
}

impl Grammar {
    /// Create a new empty grammar
    pub fn new(name: &str, scope: &str, flags: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            scope: Scope::new(scope),
            flags: flags.iter().map(|f| f.to_lowercase()).collect(),
            rules: Vec::new(),
            escape: Regex::new(r"(?s)\\.").expect("escape pattern is valid"),
        }
    }

    /// Add a classification rule
    pub fn add_rule(&mut self, rule: TagRule) {
        self.rules.push(rule);
        // Keep sorted by priority (highest first)
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Parse source text into a syntax tree rooted at `Root`
    ///
    /// The input is trimmed of surrounding whitespace first. Plain runs
    /// become `Text` leaves; rule matches become single-tag `Element`s.
    /// String-literal matches get nested delimiter and escape children.
    pub fn parse(&self, code: &str) -> SyntaxNode {
        let text = code.trim();
        let mut children = Vec::new();

        for seg in scan(text, &self.rules) {
            let lexeme = &text[seg.start..seg.end];
            match seg.rule {
                None => children.push(SyntaxNode::text(lexeme)),
                Some(idx) => {
                    let rule = &self.rules[idx];
                    let inner = if rule.lex_string {
                        self.string_children(lexeme)
                    } else {
                        vec![SyntaxNode::text(lexeme)]
                    };
                    children.push(SyntaxNode::Element {
                        class: vec![rule.tag.to_string()],
                        children: inner,
                    });
                }
            }
        }

        SyntaxNode::root(children)
    }

    /// Lex a string literal into delimiter, text and escape children
    fn string_children(&self, lexeme: &str) -> Vec<SyntaxNode> {
        let mut chars = lexeme.chars();
        let open = chars.next();
        let close = chars.next_back();

        // Degenerate literal; keep it as-is
        let (open, close) = match (open, close) {
            (Some(o), Some(c)) if o == c => (o, c),
            _ => return vec![SyntaxNode::text(lexeme)],
        };

        let body = &lexeme[open.len_utf8()..lexeme.len() - close.len_utf8()];
        let mut children = vec![SyntaxNode::element(
            TAG_DELIMITER,
            vec![SyntaxNode::text(open.to_string())],
        )];

        let mut pos = 0;
        for m in self.escape.find_iter(body) {
            if m.start() > pos {
                children.push(SyntaxNode::text(&body[pos..m.start()]));
            }
            children.push(SyntaxNode::element(
                TAG_ESCAPE,
                vec![SyntaxNode::text(m.as_str())],
            ));
            pos = m.end();
        }
        if pos < body.len() {
            children.push(SyntaxNode::text(&body[pos..]));
        }

        children.push(SyntaxNode::element(
            TAG_DELIMITER,
            vec![SyntaxNode::text(close.to_string())],
        ));
        children
    }
}

/// The tree-based highlighting engine over the built-in grammars
pub struct TreeEngine {
    grammars: Vec<Grammar>,
}

impl TreeEngine {
    /// Create an engine loaded with the built-in grammars
    pub fn new() -> Self {
        Self {
            grammars: builtin::all_grammars(),
        }
    }

    /// Resolve a language flag (name or alias) to a grammar scope
    pub fn scope_for(&self, flag: &str) -> Option<Scope> {
        let flag = flag.to_lowercase();
        self.grammars
            .iter()
            .find(|g| g.flags.iter().any(|f| f == &flag))
            .map(|g| g.scope.clone())
    }

    /// Parse source text under a scope previously resolved by `scope_for`
    ///
    /// An unknown scope degrades to a bare root holding the trimmed text.
    pub fn parse(&self, code: &str, scope: &Scope) -> SyntaxNode {
        match self.grammars.iter().find(|g| &g.scope == scope) {
            Some(grammar) => grammar.parse(code),
            None => SyntaxNode::root(vec![SyntaxNode::text(code.trim())]),
        }
    }

    /// List the flags of all loaded grammars
    pub fn flags(&self) -> Vec<&str> {
        let mut flags: Vec<_> = self
            .grammars
            .iter()
            .flat_map(|g| g.flags.iter().map(|f| f.as_str()))
            .collect();
        flags.sort_unstable();
        flags
    }
}

impl Default for TreeEngine {
    fn default() -> Self {
        Self::new()
    }
}
