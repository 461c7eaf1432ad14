//! Highlighter facade and engine selection
//!
//! Both rendering strategies sit behind the `Engine` trait; the facade
//! picks one per call. Explicit language requests always take the tree
//! engine (an unknown language is fatal for that call). Automatic
//! requests ask the classed engine for a guess first: guesses on the
//! allow-list are rerouted to the tree engine, whose output for those
//! languages is better, and everything else keeps the classed markup.

use tracing::debug;

use crate::classed::ClassedEngine;
use crate::detect::Detector;
use crate::error::{HiliteError, Result};
use crate::grammar::TreeEngine;
use crate::render::{escape_html, render_tree};
use crate::style::merge_classes;
use crate::theme::Theme;

/// Languages whose tree-engine output is preferred over classed markup
/// when the automatic guess lands on them
pub const TREE_PREFERRED: &[&str] = &["javascript", "rust"];

/// A highlighting strategy producing inner HTML for a code block
pub trait Engine {
    /// Engine name, for diagnostics
    fn name(&self) -> &'static str;

    /// Highlight code for a language, returning inner HTML
    fn highlight(&self, code: &str, lang: &str, theme: &Theme) -> Result<String>;
}

impl Engine for TreeEngine {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn highlight(&self, code: &str, lang: &str, theme: &Theme) -> Result<String> {
        let scope = self
            .scope_for(lang)
            .ok_or_else(|| HiliteError::UnknownLanguage(lang.to_string()))?;
        let root = self.parse(code, &scope);
        Ok(render_tree(&root, theme))
    }
}

impl Engine for ClassedEngine {
    fn name(&self) -> &'static str {
        "classed"
    }

    /// The coarse engine ignores the language hint; its own guess drives
    /// the tokenization.
    fn highlight(&self, code: &str, _lang: &str, _theme: &Theme) -> Result<String> {
        Ok(self.highlight_auto(code).value)
    }
}

/// The top-level highlighter
///
/// Engines and the detector are built once and treated read-only for the
/// rest of the process lifetime.
pub struct Highlighter {
    tree: TreeEngine,
    classed: ClassedEngine,
    detector: Detector,
    theme: Theme,
}

impl Highlighter {
    /// Create a highlighter with the default theme
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Create a highlighter with a custom theme
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            tree: TreeEngine::new(),
            classed: ClassedEngine::new(),
            detector: Detector::new(),
            theme,
        }
    }

    /// Highlight a code block to a `<pre><code>` HTML fragment
    ///
    /// With an explicit language the tree engine is used and an unknown
    /// language is an error. Without one, the classed engine guesses and
    /// the allow-list decides which engine's output is kept.
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String> {
        if let Some(lang) = lang {
            return self.highlight_tree(code, Some(lang));
        }

        let guess = self.classed.highlight_auto(code).language;
        let preferred = TREE_PREFERRED.contains(&guess.as_str());
        // On the tree path, content detection refines the coarse guess;
        // tsx input would otherwise render under the javascript grammar.
        let lang = if preferred {
            self.detector
                .detect(code)
                .map(str::to_string)
                .unwrap_or(guess)
        } else {
            guess
        };
        let engine: &dyn Engine = if preferred { &self.tree } else { &self.classed };
        debug!(language = %lang, engine = engine.name(), "automatic highlight");

        let inner = engine.highlight(code, &lang, &self.theme)?;
        let code_class = if preferred {
            self.theme.code_class.clone()
        } else {
            merge_classes(&[&self.theme.code_class, "hl-auto"])
        };
        Ok(wrap(&lang, &code_class, &inner))
    }

    /// Highlight via the tree engine only
    ///
    /// When no language is given, content detection picks one, falling
    /// back to JavaScript.
    pub fn highlight_tree(&self, code: &str, lang: Option<&str>) -> Result<String> {
        let lang = match lang {
            Some(lang) => lang.to_string(),
            None => self
                .detector
                .detect(code)
                .unwrap_or("javascript")
                .to_string(),
        };
        let inner = self.tree.highlight(code, &lang, &self.theme)?;
        Ok(wrap(&lang, &self.theme.code_class, &inner))
    }

    /// The theme this highlighter renders with
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap inner markup in the `<pre data-language><code class>` shell
fn wrap(lang: &str, code_class: &str, inner: &str) -> String {
    format!(
        "<pre data-language=\"{}\"><code class=\"{}\">{}</code></pre>",
        escape_html(lang),
        escape_html(code_class),
        inner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_language_uses_tree_engine() {
        let hl = Highlighter::new();
        let html = hl.highlight("pub fn main() {}", Some("rust")).unwrap();
        assert!(html.starts_with("<pre data-language=\"rust\">"));
        assert!(html.contains("<span class=\"hl-keyword\">pub</span>"));
        assert!(!html.contains("hljs-"));
    }

    #[test]
    fn test_explicit_unknown_language_is_fatal() {
        let hl = Highlighter::new();
        let err = hl.highlight("code", Some("cobol")).unwrap_err();
        assert!(matches!(err, HiliteError::UnknownLanguage(_)));
    }

    #[test]
    fn test_auto_reroutes_allow_listed_guess_to_tree() {
        let hl = Highlighter::new();
        let html = hl
            .highlight("pub struct Optic { rankings: Vec<RankingCoeff> }", None)
            .unwrap();
        assert!(html.starts_with("<pre data-language=\"rust\">"));
        assert!(html.contains("hl-keyword"));
        assert!(!html.contains("hljs-"));
    }

    #[test]
    fn test_auto_refines_script_guess_to_typescript() {
        // The coarse engine only guesses "javascript"; the `/>` signatures
        // push content detection to the typescript grammar instead.
        let hl = Highlighter::new();
        let html = hl
            .highlight("export const App = () => <Div />;\nvar x = 1;\n", None)
            .unwrap();
        assert!(html.starts_with("<pre data-language=\"typescript\">"));
        assert!(html.contains("hl-keyword"));
        assert!(!html.contains("hljs-"));
    }

    #[test]
    fn test_auto_keeps_classed_markup_otherwise() {
        let hl = Highlighter::new();
        let html = hl
            .highlight("def main():\n    print('hi')\n", None)
            .unwrap();
        assert!(html.starts_with("<pre data-language=\"python\">"));
        assert!(html.contains("hl-auto"));
        assert!(html.contains("hljs-keyword"));
    }

    #[test]
    fn test_auto_plaintext_passthrough() {
        let hl = Highlighter::new();
        let html = hl.highlight("just some plain words", None).unwrap();
        assert!(html.starts_with("<pre data-language=\"plaintext\">"));
        assert!(!html.contains("hljs-"));
        assert!(html.contains("just some plain words"));
    }

    #[test]
    fn test_tree_path_detects_when_unspecified() {
        let hl = Highlighter::new();
        let html = hl.highlight_tree("var x = 1;", None).unwrap();
        assert!(html.starts_with("<pre data-language=\"javascript\">"));
    }

    #[test]
    fn test_tree_path_defaults_to_javascript() {
        let hl = Highlighter::new();
        let html = hl.highlight_tree("no signatures here", None).unwrap();
        assert!(html.starts_with("<pre data-language=\"javascript\">"));
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let hl = Highlighter::new();
        let code = "pub fn run() { println!(\"ok\"); }";
        let first = hl.highlight(code, Some("rust")).unwrap();
        let second = hl.highlight(code, Some("rust")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_theme_flows_through() {
        let theme = Theme::from_toml("[classes]\npl-k = \"kw\"\n").unwrap();
        let hl = Highlighter::with_theme(theme);
        let html = hl.highlight("pub fn main() {}", Some("rust")).unwrap();
        assert!(html.contains("<span class=\"kw\">pub</span>"));
    }
}
