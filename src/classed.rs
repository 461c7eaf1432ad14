//! Classed auto-highlighting engine
//!
//! The coarse of the two strategies: guesses the language by keyword
//! profile scoring, then emits flat `hljs-*` classed markup in one pass.
//! Unlike the tree engine there is no syntax tree; styling is driven
//! entirely by class attributes on the emitted spans.

use regex::Regex;

use crate::grammar::{scan, TagRule};
use crate::render::escape_html;

/// Result of an automatic highlight: guessed language plus classed markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoHighlight {
    /// Guessed language name ("plaintext" when nothing matched)
    pub language: String,
    /// HTML markup with `hljs-*` classed spans
    pub value: String,
}

/// A language profile: detection signature plus tokenization rules
struct LanguageProfile {
    name: &'static str,
    signature: Regex,
    rules: Vec<TagRule>,
}

impl LanguageProfile {
    fn new(name: &'static str, signature: &str, rules: Vec<TagRule>) -> Option<Self> {
        Regex::new(signature).ok().map(|signature| Self {
            name,
            signature,
            rules,
        })
    }
}

/// The class-attribute-based highlighting engine
pub struct ClassedEngine {
    profiles: Vec<LanguageProfile>,
}

impl ClassedEngine {
    /// Create an engine loaded with the built-in language profiles
    pub fn new() -> Self {
        let mut profiles = Vec::new();

        // Profile order breaks ties: earlier entries win equal scores.
        let js_keywords = r"\b(async|await|break|case|catch|class|const|continue|default|delete|do|else|export|extends|finally|for|function|if|import|in|instanceof|let|new|of|return|static|super|switch|this|throw|try|typeof|var|void|while|yield)\b";
        if let Some(profile) = LanguageProfile::new(
            "javascript",
            r"\b(function|const|let|var|async|await|typeof|console)\b|=>",
            c_style_rules(js_keywords, r"\b(true|false|null|undefined|NaN)\b"),
        ) {
            profiles.push(profile);
        }

        let rust_keywords = r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|type|unsafe|use|where|while)\b";
        if let Some(profile) = LanguageProfile::new(
            "rust",
            r"\b(fn|impl|pub|struct|enum|match|crate|mut)\b|::|->",
            c_style_rules(rust_keywords, r"\b(true|false|Some|None|Ok|Err)\b"),
        ) {
            profiles.push(profile);
        }

        let python_keywords = r"\b(and|as|assert|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|not|or|pass|raise|return|try|while|with|yield)\b";
        if let Some(profile) = LanguageProfile::new(
            "python",
            r"\b(def|elif|lambda|self|import)\b|\bprint\(",
            hash_comment_rules(python_keywords, r"\b(True|False|None)\b"),
        ) {
            profiles.push(profile);
        }

        let go_keywords = r"\b(break|case|chan|const|continue|default|defer|else|fallthrough|for|func|go|goto|if|import|interface|map|package|range|return|select|struct|switch|type|var)\b";
        if let Some(profile) = LanguageProfile::new(
            "go",
            r"\b(func|package|defer|chan|fmt)\b|:=",
            c_style_rules(go_keywords, r"\b(true|false|nil|iota)\b"),
        ) {
            profiles.push(profile);
        }

        let shell_keywords = r"\b(case|do|done|elif|else|esac|fi|for|function|if|in|then|until|while|echo|exit|export|local|return|set)\b";
        if let Some(profile) = LanguageProfile::new(
            "shell",
            r"\b(echo|then|esac|done|export|sudo)\b|\$\{|#!/",
            hash_comment_rules(shell_keywords, r"\btrue\b|\bfalse\b"),
        ) {
            profiles.push(profile);
        }

        // Keyword-free data format; detected by its key-colon shape
        if let Some(profile) = LanguageProfile::new("json", r#""[^"\n]*"\s*:"#, json_rules()) {
            profiles.push(profile);
        }

        Self { profiles }
    }

    /// Guess the language and emit classed markup in one call
    ///
    /// A zero-score maximum falls back to "plaintext" with escaped text.
    pub fn highlight_auto(&self, code: &str) -> AutoHighlight {
        let mut best = 0;
        let mut best_profile = None;

        for profile in &self.profiles {
            let n = profile.signature.find_iter(code).count();
            if n > best {
                best = n;
                best_profile = Some(profile);
            }
        }

        match best_profile {
            Some(profile) => AutoHighlight {
                language: profile.name.to_string(),
                value: emit_classed(code, &profile.rules),
            },
            None => AutoHighlight {
                language: "plaintext".to_string(),
                value: escape_html(code),
            },
        }
    }
}

impl Default for ClassedEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenization rules for languages with `//` and `/* */` comments
fn c_style_rules(keywords: &str, literals: &str) -> Vec<TagRule> {
    let mut rules = Vec::new();
    if let Some(rule) = TagRule::new("line_comment", r"//[^\n]*", "hljs-comment", 100) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new("block_comment", r"(?s)/\*.*?\*/", "hljs-comment", 99) {
        rules.push(rule);
    }
    rules.extend(shared_rules(keywords, literals));
    rules
}

/// Tokenization rules for languages with `#` comments
fn hash_comment_rules(keywords: &str, literals: &str) -> Vec<TagRule> {
    let mut rules = Vec::new();
    if let Some(rule) = TagRule::new("hash_comment", r"#[^\n]*", "hljs-comment", 100) {
        rules.push(rule);
    }
    rules.extend(shared_rules(keywords, literals));
    rules
}

fn shared_rules(keywords: &str, literals: &str) -> Vec<TagRule> {
    let mut rules = Vec::new();
    if let Some(rule) = TagRule::new(
        "string_double",
        r#"(?s)"(?:[^"\\]|\\.)*""#,
        "hljs-string",
        90,
    ) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new("string_single", r"(?s)'(?:[^'\\]|\\.)*'", "hljs-string", 89) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new("keyword", keywords, "hljs-keyword", 80) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new("literal", literals, "hljs-literal", 78) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new(
        "number",
        r"\b0x[0-9a-fA-F_]+\b|\b\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?\b",
        "hljs-number",
        65,
    ) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new("title", r"\b[A-Z][A-Za-z0-9_]*\b", "hljs-title", 60) {
        rules.push(rule);
    }
    rules
}

/// Tokenization rules for json: strings, numbers and the three literals
fn json_rules() -> Vec<TagRule> {
    let mut rules = Vec::new();
    if let Some(rule) = TagRule::new("string", r#"(?s)"(?:[^"\\]|\\.)*""#, "hljs-string", 90) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new("literal", r"\b(true|false|null)\b", "hljs-literal", 78) {
        rules.push(rule);
    }
    if let Some(rule) = TagRule::new(
        "number",
        r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b",
        "hljs-number",
        65,
    ) {
        rules.push(rule);
    }
    rules
}

/// Emit flat classed markup for the given rules
///
/// The rule builders above keep their lists in priority order, which is
/// what `scan` expects.
fn emit_classed(code: &str, rules: &[TagRule]) -> String {
    let mut out = String::new();
    for seg in scan(code, rules) {
        let lexeme = &code[seg.start..seg.end];
        match seg.rule {
            Some(idx) => {
                out.push_str("<span class=\"");
                out.push_str(rules[idx].tag);
                out.push_str("\">");
                out.push_str(&escape_html(lexeme));
                out.push_str("</span>");
            }
            None => out.push_str(&escape_html(lexeme)),
        }
    }
    out
}
