//! Classification rules for grammar-driven highlighting
//!
//! A grammar is an ordered list of `TagRule`s, each mapping a regex to a
//! classification tag. The scanner walks the whole source once: at each
//! position the highest-priority rule matching exactly there wins;
//! otherwise the scan skips ahead to the earliest upcoming match, leaving
//! the gap as plain text. Multi-line constructs (block comments, template
//! literals) are ordinary `(?s)` patterns since the scan is not line-based.

use regex::Regex;

/// A single classification rule
///
/// Matches a regex pattern and assigns a classification tag to the match.
/// Rules are tried in priority order (highest first).
pub struct TagRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Classification tag to assign to matches (e.g. "pl-k")
    pub tag: &'static str,
    /// Priority (higher = matched first)
    pub priority: i32,
    /// Whether matches are string literals whose delimiters and escape
    /// sequences should become nested child elements
    pub lex_string: bool,
}

impl TagRule {
    /// Create a new classification rule
    pub fn new(name: &str, pattern: &str, tag: &'static str, priority: i32) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            tag,
            priority,
            lex_string: false,
        })
    }

    /// Create a string-literal rule whose matches get nested delimiter
    /// and escape children
    pub fn string(name: &str, pattern: &str, tag: &'static str, priority: i32) -> Option<Self> {
        let mut rule = Self::new(name, pattern, tag, priority)?;
        rule.lex_string = true;
        Some(rule)
    }

    /// Find the first match in text starting at position
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.pattern
            .find(&text[start..])
            .map(|m| (start + m.start(), start + m.end()))
    }
}

/// A classified segment of source text
///
/// `rule` indexes into the grammar's rule list; None means plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Byte offset where this segment starts (inclusive)
    pub start: usize,
    /// Byte offset where this segment ends (exclusive)
    pub end: usize,
    /// Index of the matching rule, or None for plain text
    pub rule: Option<usize>,
}

/// Scan text into an ordered, non-overlapping segment list
///
/// Rules must be sorted by priority (highest first). Every byte of the
/// input lands in exactly one segment.
pub fn scan(text: &str, rules: &[TagRule]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pos = 0;
    let mut plain_start = 0;

    while pos < text.len() {
        // Find the best match: a rule matching at the current position
        // (first in priority order wins), else the earliest match ahead.
        let mut best: Option<(usize, usize, usize)> = None;
        for (idx, rule) in rules.iter().enumerate() {
            if let Some((start, end)) = rule.find_at(text, pos) {
                if start == pos {
                    best = Some((start, end, idx));
                    break;
                }
                if best.map_or(true, |(s, _, _)| start < s) {
                    best = Some((start, end, idx));
                }
            }
        }

        match best {
            Some((start, end, _)) if start == pos && end == start => {
                // Zero-width match; step one char so the scan always advances
                pos += 1;
                while pos < text.len() && !text.is_char_boundary(pos) {
                    pos += 1;
                }
            }
            Some((start, end, idx)) if start == pos => {
                if plain_start < start {
                    segments.push(Segment {
                        start: plain_start,
                        end: start,
                        rule: None,
                    });
                }
                segments.push(Segment {
                    start,
                    end,
                    rule: Some(idx),
                });
                pos = end;
                plain_start = end;
            }
            Some((start, _, _)) => {
                // Nothing matches here; jump to the next match start
                pos = start;
            }
            None => {
                // No rule matches anywhere in the rest of the text
                pos = text.len();
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment {
            start: plain_start,
            end: text.len(),
            rule: None,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rules() -> Vec<TagRule> {
        vec![
            TagRule::new("comment", r"//[^\n]*", "pl-c", 100).unwrap(),
            TagRule::new("keyword", r"\b(let|fn|mut)\b", "pl-k", 80).unwrap(),
            TagRule::new("number", r"\b\d+\b", "pl-c1", 60).unwrap(),
        ]
    }

    #[test]
    fn test_tag_rule_find_at() {
        let rule = TagRule::new("number", r"\d+", "pl-c1", 50).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at("no numbers", 0), None);
    }

    #[test]
    fn test_scan_covers_all_bytes() {
        let text = "let x = 42; // done";
        let segments = scan(text, &test_rules());

        let mut pos = 0;
        for seg in &segments {
            assert_eq!(seg.start, pos);
            pos = seg.end;
        }
        assert_eq!(pos, text.len());
    }

    #[test]
    fn test_scan_classifies_tokens() {
        let text = "let x = 42;";
        let segments = scan(text, &test_rules());

        // "let" is rule 1 (keyword), "42" is rule 2 (number)
        assert_eq!(segments[0].rule, Some(1));
        assert_eq!(&text[segments[0].start..segments[0].end], "let");
        assert!(segments
            .iter()
            .any(|s| s.rule == Some(2) && &text[s.start..s.end] == "42"));
    }

    #[test]
    fn test_scan_priority_at_position() {
        // "//" also contains no digits/keywords, but the comment rule must
        // swallow trailing numbers inside it.
        let text = "// has 42 inside";
        let segments = scan(text, &test_rules());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].rule, Some(0));
    }

    #[test]
    fn test_scan_plain_only() {
        let segments = scan("just words here", &test_rules());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].rule, None);
    }

    #[test]
    fn test_scan_empty_input() {
        assert!(scan("", &test_rules()).is_empty());
    }
}
