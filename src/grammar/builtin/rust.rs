//! Rust grammar definition

use crate::grammar::{Grammar, TagRule};

/// Create the Rust grammar
pub fn rust_grammar() -> Grammar {
    let mut lang = Grammar::new("Rust", "source.rust", &["rust", "rs"]);

    // Comments (highest priority so they swallow everything inside)
    if let Some(rule) = TagRule::new("line_comment", r"//[^\n]*", "pl-c", 100) {
        lang.add_rule(rule);
    }
    if let Some(rule) = TagRule::new("block_comment", r"(?s)/\*.*?\*/", "pl-c", 99) {
        lang.add_rule(rule);
    }

    // Raw strings r#"..."# (simplified - no nested # levels)
    if let Some(rule) = TagRule::new("raw_string", r##"(?s)r#".*?"#"##, "pl-s", 92) {
        lang.add_rule(rule);
    }

    // Regular strings, with delimiter and escape children
    if let Some(rule) = TagRule::string("string", r#"(?s)"(?:[^"\\]|\\.)*""#, "pl-s", 90) {
        lang.add_rule(rule);
    }

    // Character literals
    if let Some(rule) = TagRule::string("char", r"'(?:[^'\\]|\\.)'", "pl-s", 85) {
        lang.add_rule(rule);
    }

    // Lifetimes (after char to avoid conflict)
    if let Some(rule) = TagRule::new("lifetime", r"'[A-Za-z_][A-Za-z0-9_]*", "pl-e", 84) {
        lang.add_rule(rule);
    }

    // Attributes
    if let Some(rule) = TagRule::new("attribute", r"#!?\[[^\]\n]*\]", "pl-c1", 83) {
        lang.add_rule(rule);
    }

    // Keywords
    let keywords = r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|true|type|union|unsafe|use|where|while)\b";
    if let Some(rule) = TagRule::new("keyword", keywords, "pl-k", 80) {
        lang.add_rule(rule);
    }

    // Macros (ending with !)
    if let Some(rule) = TagRule::new("macro", r"\b[a-z_][a-z0-9_]*!", "pl-en", 75) {
        lang.add_rule(rule);
    }

    // Primitive types
    let primitives = r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64)\b";
    if let Some(rule) = TagRule::new("primitive", primitives, "pl-smi", 72) {
        lang.add_rule(rule);
    }

    // Numbers
    if let Some(rule) = TagRule::new("hex", r"\b0x[0-9a-fA-F_]+\b", "pl-c1", 65) {
        lang.add_rule(rule);
    }
    if let Some(rule) = TagRule::new("binary", r"\b0b[01_]+\b", "pl-c1", 65) {
        lang.add_rule(rule);
    }
    if let Some(rule) = TagRule::new(
        "float",
        r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?\b",
        "pl-c1",
        64,
    ) {
        lang.add_rule(rule);
    }
    if let Some(rule) = TagRule::new(
        "integer",
        r"\b\d[\d_]*(?:u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize)?\b",
        "pl-c1",
        63,
    ) {
        lang.add_rule(rule);
    }

    // Type names (capitalized identifiers)
    if let Some(rule) = TagRule::new("type_name", r"\b[A-Z][A-Za-z0-9_]*\b", "pl-en", 60) {
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
    fn test_rust_keywords() {
        let lang = rust_grammar();
        let root = lang.parse("pub fn main() {}");
        let tags = tags_of(&root);
        assert_eq!(tags.iter().filter(|t| *t == "pl-k").count(), 2);
    }

    #[test]
    fn test_rust_comment_swallows_line() {
        let lang = rust_grammar();
        let root = lang.parse("// let x = \"str\" 42");
        assert_eq!(root.children().len(), 1);
        assert_eq!(tags_of(&root), vec!["pl-c"]);
    }

    #[test]
    fn test_rust_block_comment_spans_lines() {
        let lang = rust_grammar();
        let root = lang.parse("/* one\ntwo */ let x;");
        let tags = tags_of(&root);
        assert_eq!(tags[0], "pl-c");
        assert!(tags.contains(&"pl-k".to_string()));
    }

    #[test]
    fn test_rust_macro_and_string() {
        let lang = rust_grammar();
        let root = lang.parse(r#"println!("hi");"#);
        let tags = tags_of(&root);
        assert!(tags.contains(&"pl-en".to_string()));
        assert!(tags.contains(&"pl-s".to_string()));
    }

    #[test]
    fn test_rust_lifetime_not_char() {
        let lang = rust_grammar();
        let root = lang.parse("fn get<'a>(x: &'a str) {}");
        let tags = tags_of(&root);
        assert!(tags.contains(&"pl-e".to_string()));
        assert!(tags.contains(&"pl-smi".to_string()));
    }

    #[test]
    fn test_rust_numbers() {
        let lang = rust_grammar();
        let root = lang.parse("let x = 0xff + 1_000 + 3.14;");
        assert_eq!(tags_of(&root).iter().filter(|t| *t == "pl-c1").count(), 3);
    }
}
