//! Syntax tree produced by the tree engine
//!
//! A parse yields a tree of `SyntaxNode`s: a single `Root` at the apex,
//! with `Text` leaves and classified `Element` nodes nested arbitrarily
//! below it. Trees are built fresh per parse, consumed once by the
//! renderer, and never mutated.

/// A node in a highlighted syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Top of the tree; appears exactly once
    Root { children: Vec<SyntaxNode> },
    /// A literal run of source text
    Text { value: String },
    /// A classified span of source, tagged with classification tokens
    /// (e.g. `pl-k` for a keyword) and holding its own subtree
    Element {
        class: Vec<String>,
        children: Vec<SyntaxNode>,
    },
    /// A structurally unexpected node kind delivered by an engine.
    /// Kept so the renderer can degrade visibly instead of aborting.
    Other { kind: String },
}

impl SyntaxNode {
    /// Create a root node
    pub fn root(children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Root { children }
    }

    /// Create a text leaf
    pub fn text(value: impl Into<String>) -> Self {
        SyntaxNode::Text {
            value: value.into(),
        }
    }

    /// Create an element with a single classification tag
    pub fn element(tag: &str, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Element {
            class: vec![tag.to_string()],
            children,
        }
    }

    /// Child nodes, if this variant has any
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Root { children } | SyntaxNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text content of this subtree
    pub fn text_content(&self) -> String {
        match self {
            SyntaxNode::Text { value } => value.clone(),
            SyntaxNode::Root { children } | SyntaxNode::Element { children, .. } => {
                children.iter().map(|c| c.text_content()).collect()
            }
            SyntaxNode::Other { .. } => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_recurses() {
        let node = SyntaxNode::root(vec![
            SyntaxNode::text("let "),
            SyntaxNode::element("pl-k", vec![SyntaxNode::text("mut")]),
            SyntaxNode::text(" x"),
        ]);
        assert_eq!(node.text_content(), "let mut x");
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        assert!(SyntaxNode::text("x").children().is_empty());
        let other = SyntaxNode::Other {
            kind: "comment".to_string(),
        };
        assert!(other.children().is_empty());
    }
}
