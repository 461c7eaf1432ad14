//! Highlight tree renderer
//!
//! Walks a `SyntaxNode` tree and emits classed HTML. The walk is
//! structure-preserving: output nesting and ordering mirror the input
//! tree, except elements whose tag-set is unmapped lose their wrapper
//! (their children are still emitted, and a diagnostic is logged for
//! every occurrence).

use tracing::warn;

use crate::theme::Theme;
use crate::tree::SyntaxNode;

/// An unmapped classification encountered during a render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedClass {
    /// The element's classification tag-set
    pub class: Vec<String>,
    /// Text content of the element's children, for the diagnostic
    pub children: String,
}

/// Render a syntax tree to HTML under a theme
pub fn render_tree(node: &SyntaxNode, theme: &Theme) -> String {
    render_with_diagnostics(node, theme).0
}

/// Render a syntax tree, also returning the unmapped classes encountered
pub(crate) fn render_with_diagnostics(
    node: &SyntaxNode,
    theme: &Theme,
) -> (String, Vec<UnmappedClass>) {
    let mut out = String::new();
    let mut unmapped = Vec::new();
    walk(node, theme, &mut out, &mut unmapped);
    (out, unmapped)
}

fn walk(node: &SyntaxNode, theme: &Theme, out: &mut String, unmapped: &mut Vec<UnmappedClass>) {
    match node {
        SyntaxNode::Root { children } => {
            for child in children {
                walk(child, theme, out, unmapped);
            }
        }
        SyntaxNode::Text { value } => {
            escape_into(value, out);
        }
        SyntaxNode::Element { class, children } => match theme.class_for(class) {
            Some(style) if !style.is_empty() => {
                out.push_str("<span class=\"");
                escape_into(style, out);
                out.push_str("\">");
                for child in children {
                    walk(child, theme, out, unmapped);
                }
                out.push_str("</span>");
            }
            Some(_) => {
                // Mapped to the empty string: wrap, no added style
                out.push_str("<span>");
                for child in children {
                    walk(child, theme, out, unmapped);
                }
                out.push_str("</span>");
            }
            None => {
                let diagnostic = UnmappedClass {
                    class: class.clone(),
                    children: children.iter().map(|c| c.text_content()).collect(),
                };
                // Logged on every occurrence, intentionally not deduplicated
                warn!(
                    class = ?diagnostic.class,
                    children = %diagnostic.children,
                    "unmapped highlight class"
                );
                unmapped.push(diagnostic);
                for child in children {
                    walk(child, theme, out, unmapped);
                }
            }
        },
        SyntaxNode::Other { kind } => {
            out.push_str("<span class=\"hl-unknown\">unknown node: ");
            escape_into(kind, out);
            out.push_str("</span>");
        }
    }
}

/// Escape text for safe embedding in HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
