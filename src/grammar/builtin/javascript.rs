//! JavaScript grammar definition

use crate::grammar::{Grammar, TagRule};

/// Rules shared by the JavaScript and TypeScript grammars
pub(super) fn script_rules() -> Vec<TagRule> {
    let mut rules = Vec::new();

    // Comments
    if let Some(rule) = TagRule::new("line_comment", r"//[^\n]*", "pl-c", 100) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new("block_comment", r"(?s)/\*.*?\*/", "pl-c", 99) {
        rules.push(rule);
    }

    // Strings, with delimiter and escape children
    if let Some(rule) = TagRule::string("template", r"(?s)`(?:[^`\\]|\\.)*`", "pl-s", 92) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::string("string_double", r#"(?s)"(?:[^"\\]|\\.)*""#, "pl-s", 91) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::string("string_single", r"(?s)'(?:[^'\\]|\\.)*'", "pl-s", 90) {
        rules.push(rule);
    }

    // Keywords
    let keywords = r"\b(async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|function|get|if|import|in|instanceof|let|new|of|return|set|static|super|switch|this|throw|try|typeof|var|void|while|with|yield)\b";
    if let Some(rule) = TagRule::new("keyword", keywords, "pl-k", 80) {
        rules.push(rule);
    }

    // Literal constants
    if let Some(rule) = TagRule::new(
        "literal",
        r"\b(true|false|null|undefined|NaN|Infinity)\b",
        "pl-c1",
        78,
    ) {
        rules.push(rule);
    }

    // Numbers
    if let Some(rule) = TagRule::new("hex", r"\b0x[0-9a-fA-F]+\b", "pl-c1", 65) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new(
        "number",
        r"\b\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?\b",
        "pl-c1",
        64,
    ) {
        rules.push(rule);
    }

    // Constructor / type names (capitalized identifiers)
    if let Some(rule) = TagRule::new("entity", r"\b[A-Z][A-Za-z0-9_$]*\b", "pl-en", 60) {
        rules.push(rule);
    }

    rules
}

/// Create the JavaScript grammar
pub fn javascript_grammar() -> Grammar {
    let mut lang = Grammar::new("JavaScript", "source.js", &["javascript", "js", "jsx"]);
    for rule in script_rules() {
        lang.add_rule(rule);
    }
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SyntaxNode;

    fn tags_of(root: &SyntaxNode) -> Vec<String> {
        root.children()
            .iter()
            .filter_map(|n| match n {
                SyntaxNode::Element { class, .. } => Some(class[0].clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_js_keywords_and_literals() {
        let lang = javascript_grammar();
        let root = lang.parse("export const x = async () => null;");
        let tags = tags_of(&root);
        assert_eq!(tags.iter().filter(|t| *t == "pl-k").count(), 3);
        assert!(tags.contains(&"pl-c1".to_string()));
    }

    #[test]
    fn test_js_template_literal() {
        let lang = javascript_grammar();
        let root = lang.parse("const s = `a\\n${b}`;");
        let string = root
            .children()
            .iter()
            .find(|n| {
                matches!(n, SyntaxNode::Element { class, .. } if class[0] == "pl-s")
            })
            .expect("template element");
        assert!(string
            .children()
            .iter()
            .any(|n| matches!(n, SyntaxNode::Element { class, .. } if class[0] == "pl-cce")));
    }

    #[test]
    fn test_js_constructor_entity() {
        let lang = javascript_grammar();
        let root = lang.parse("new Map()");
        let tags = tags_of(&root);
        assert_eq!(tags, vec!["pl-k", "pl-en"]);
    }
}
