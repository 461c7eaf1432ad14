//! Content-based language detection
//!
//! Guesses the most likely language for a source string by counting
//! non-overlapping matches of each candidate's signature pattern.
//! Candidates are tried in registration order; only a strictly higher
//! match count displaces the current best, so ties keep the earliest
//! registered candidate. A zero-match maximum means no detection.

use regex::Regex;

/// A (name, signature pattern) pair in the detection registry
pub struct LanguageCandidate {
    /// Language name reported on detection (e.g. "rust")
    pub name: &'static str,
    /// Compiled signature pattern
    pub pattern: Regex,
}

impl LanguageCandidate {
    /// Create a candidate; returns None if the pattern does not compile
    pub fn new(name: &'static str, pattern: &str) -> Option<Self> {
        Regex::new(pattern).ok().map(|pattern| Self { name, pattern })
    }
}

/// Pattern-frequency language detector over a fixed candidate registry
pub struct Detector {
    candidates: Vec<LanguageCandidate>,
}

impl Detector {
    /// Create a detector with the built-in candidate registry
    pub fn new() -> Self {
        let mut detector = Self {
            candidates: Vec::new(),
        };

        // Registration order matters: earlier candidates win ties.
        detector.add(
            "javascript",
            r"(export\s+(const|function|let))|\b(var|async)\b",
        );
        detector.add(
            "typescript",
            r"(export\s+(const|function|let))|\b(var|async)\b|(/>)",
        );
        detector.add("rust", r"pub (async )?(struct|enum|fn)");

        detector
    }

    /// Add a candidate to the registry
    fn add(&mut self, name: &'static str, pattern: &str) {
        if let Some(candidate) = LanguageCandidate::new(name, pattern) {
            self.candidates.push(candidate);
        }
    }

    /// Detect the most likely language for a source string
    ///
    /// Returns None when no candidate pattern matches at all.
    pub fn detect(&self, code: &str) -> Option<&'static str> {
        let mut best = 0;
        let mut best_lang = None;

        for candidate in &self.candidates {
            let n = candidate.pattern.find_iter(code).count();
            if n > best {
                best = n;
                best_lang = Some(candidate.name);
            }
        }

        best_lang
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_rust() {
        let detector = Detector::new();
        let code = "pub struct Optic { rankings: Vec<RankingCoeff> }";
        assert_eq!(detector.detect(code), Some("rust"));
    }

    #[test]
    fn test_detect_javascript() {
        let detector = Detector::new();
        let code = "export const app = async () => { await run() }";
        assert_eq!(detector.detect(code), Some("javascript"));
    }

    #[test]
    fn test_detect_none_on_no_matches() {
        let detector = Detector::new();
        assert_eq!(detector.detect("plain prose with no signatures"), None);
        assert_eq!(detector.detect(""), None);
    }

    #[test]
    fn test_tie_keeps_earlier_candidate() {
        // "var x" matches both the javascript and typescript patterns
        // exactly once; the earlier registration must win.
        let detector = Detector::new();
        assert_eq!(detector.detect("var x = 1"), Some("javascript"));
    }

    #[test]
    fn test_strictly_higher_count_displaces() {
        // Two tsx-only signatures (/>) on top of one shared signature
        // push typescript past javascript.
        let detector = Detector::new();
        let code = "var x = 1; <Tag /> <Other />";
        assert_eq!(detector.detect(code), Some("typescript"));
    }

    #[test]
    fn test_rust_sample_beats_script_candidates() {
        let detector = Detector::new();
        let code = "pub async fn fetch() {}\npub enum Kind {}\nlet x = 1;";
        assert_eq!(detector.detect(code), Some("rust"));
    }
}
