//! TypeScript grammar definition
//!
//! Extends the shared script rules with TypeScript-only keywords.

use super::javascript::script_rules;
use crate::grammar::{Grammar, TagRule};

/// Create the TypeScript grammar
pub fn typescript_grammar() -> Grammar {
    let mut lang = Grammar::new("TypeScript", "source.ts", &["typescript", "ts", "tsx"]);

    for rule in script_rules() {
        lang.add_rule(rule);
    }

    // Type-level keywords, above the shared keyword rule
    let keywords = r"\b(abstract|any|as|declare|enum|implements|infer|interface|is|keyof|module|namespace|never|number|readonly|satisfies|string|type|unknown)\b";
    if let Some(rule) = TagRule::new("ts_keyword", keywords, "pl-k", 81) {
        lang.add_rule(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SyntaxNode;

    fn keyword_count(root: &SyntaxNode) -> usize {
        root.children()
            .iter()
            .filter(|n| matches!(n, SyntaxNode::Element { class, .. } if class[0] == "pl-k"))
            .count()
    }

    #[test]
    fn test_ts_type_keywords() {
        let lang = typescript_grammar();
        let root = lang.parse("interface Props { lang: string }");
        // "interface" and "string" are TypeScript keywords
        assert_eq!(keyword_count(&root), 2);
    }

    #[test]
    fn test_ts_shares_script_rules() {
        let lang = typescript_grammar();
        let root = lang.parse("export type CodeProps = { code: string };");
        assert!(keyword_count(&root) >= 3);
    }
}
