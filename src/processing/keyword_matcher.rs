//! Whole-word keyword matching with sentence context

use crate::error::Result;
use crate::processing::text_processor::TextProcessor;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Occurrences of one vocabulary term in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub count: usize,
    /// Trimmed sentences mentioning the keyword, in order of appearance
    pub context: Vec<String>,
}

/// Matcher with one compiled pattern per keyword.
///
/// Counting uses a case-insensitive whole-word pattern, while context
/// collection is a plain substring test on the lower-cased sentence, so a
/// sentence can be listed as context for a keyword that only appears inside
/// a longer word there.
pub struct KeywordMatcher {
    patterns: Vec<KeywordPattern>,
    text_processor: TextProcessor,
}

struct KeywordPattern {
    keyword: String,
    needle: String,
    regex: Regex,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let patterns = keywords
            .iter()
            .map(|k| -> Result<KeywordPattern> {
                let keyword = k.as_ref();
                Ok(KeywordPattern {
                    keyword: keyword.to_string(),
                    needle: keyword.to_lowercase(),
                    regex: keyword_regex(keyword)?,
                })
            })
            .collect::<Result<Vec<KeywordPattern>>>()?;

        Ok(Self {
            patterns,
            text_processor: TextProcessor::new(),
        })
    }

    /// Find every keyword that occurs at least once, in keyword order
    pub fn find_matches(&self, text: &str) -> Vec<KeywordMatch> {
        if text.is_empty() || self.patterns.is_empty() {
            return Vec::new();
        }

        let sentences = self.text_processor.split_sentences(text);
        let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();

        self.patterns
            .iter()
            .filter_map(|pattern| {
                let count = pattern.regex.find_iter(text).count();
                if count == 0 {
                    return None;
                }

                let context = sentences
                    .iter()
                    .zip(&lowered)
                    .filter(|(_, lower)| lower.contains(&pattern.needle))
                    .map(|(sentence, _)| sentence.trim().to_string())
                    .collect();

                Some(KeywordMatch {
                    keyword: pattern.keyword.clone(),
                    count,
                    context,
                })
            })
            .collect()
    }
}

/// Case-insensitive whole-word pattern for a literal keyword
pub fn keyword_regex(keyword: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))?)
}

/// One-shot matching of `keywords` against `text`
pub fn find_keyword_matches<S: AsRef<str>>(text: &str, keywords: &[S]) -> Result<Vec<KeywordMatch>> {
    Ok(KeywordMatcher::new(keywords)?.find_matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_context() {
        let matches = find_keyword_matches(
            "I know Python. I also know Java and Python.",
            &["python", "java"],
        )
        .unwrap();

        assert_eq!(
            matches,
            vec![
                KeywordMatch {
                    keyword: "python".to_string(),
                    count: 2,
                    context: vec![
                        "I know Python".to_string(),
                        "I also know Java and Python".to_string(),
                    ],
                },
                KeywordMatch {
                    keyword: "java".to_string(),
                    count: 1,
                    context: vec!["I also know Java and Python".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(find_keyword_matches("", &["python"]).unwrap().is_empty());
        let none: [&str; 0] = [];
        assert!(find_keyword_matches("Python everywhere", &none).unwrap().is_empty());
    }

    #[test]
    fn test_whole_word_counting() {
        // "javascript" must not count as "java"
        let matches = find_keyword_matches("Wrote JavaScript daily.", &["java", "javascript"]).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].keyword, "javascript");
        assert_eq!(matches[0].count, 1);
    }

    #[test]
    fn test_context_is_substring_based() {
        let matches = find_keyword_matches(
            "Java backend. JavaScript frontend",
            &["java"],
        )
        .unwrap();
        assert_eq!(matches[0].count, 1);
        assert_eq!(
            matches[0].context,
            vec!["Java backend".to_string(), "JavaScript frontend".to_string()]
        );
    }

    #[test]
    fn test_special_characters_are_literal() {
        let matches = find_keyword_matches("Built CI/CD on Node.js", &["node.js", "ci/cd"]).unwrap();
        assert_eq!(matches.len(), 2);

        let matches = find_keyword_matches("Built on nodexjs", &["node.js"]).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_multi_word_phrases() {
        let matches = find_keyword_matches(
            "Strong problem solving. Problem  solving is not counted twice",
            &["problem solving"],
        )
        .unwrap();
        assert_eq!(matches[0].count, 1);
        assert_eq!(matches[0].context, vec!["Strong problem solving".to_string()]);
    }

    #[test]
    fn test_never_returns_zero_counts() {
        let matcher = KeywordMatcher::new(&["rust", "go", "python"]).unwrap();
        let matches = matcher.find_matches("Rust and Python. More Rust!");
        assert!(matches.iter().all(|m| m.count > 0));
        assert_eq!(matches.iter().map(|m| m.keyword.as_str()).collect::<Vec<_>>(), vec!["rust", "python"]);
        assert!(keyword_regex("rust").unwrap().is_match("RUST!"));
        assert!(!keyword_regex("rust").unwrap().is_match("rusty"));
    }
}
