//! Text statistics and surface-level pattern checks

use regex::Regex;

pub struct TextProcessor {
    sentence_regex: Regex,
    word_regex: Regex,
    shouting_regex: Regex,
    whitespace_run_regex: Regex,
    section_label_regex: Regex,
    year_regex: Regex,
    month_regex: Regex,
}

/// Counts derived from a block of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub character_count: usize,
}

impl TextStats {
    pub fn avg_words_per_sentence(&self) -> f64 {
        if self.sentence_count == 0 {
            0.0
        } else {
            self.word_count as f64 / self.sentence_count as f64
        }
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let sentence_regex = Regex::new(r"[.!?]+").expect("Invalid sentence regex");
        let word_regex = Regex::new(r"[A-Za-z0-9_]+").expect("Invalid word regex");
        let shouting_regex = Regex::new(r"[A-Z]{4,}").expect("Invalid uppercase regex");
        let whitespace_run_regex =
            Regex::new(r"[^\S\r\n]{2,}").expect("Invalid whitespace regex");
        let section_label_regex =
            Regex::new(r"(?m)^[\w\s-]+:").expect("Invalid section label regex");
        let year_regex = Regex::new(r"[0-9]{4}").expect("Invalid year regex");
        let month_regex = Regex::new(r"(?i)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)")
            .expect("Invalid month regex");

        Self {
            sentence_regex,
            word_regex,
            shouting_regex,
            whitespace_run_regex,
            section_label_regex,
            year_regex,
            month_regex,
        }
    }

    /// Split on runs of `.`, `!` or `?`.
    ///
    /// Empty segments (leading, trailing, or between delimiters separated by
    /// whitespace only) are kept, so the result always has at least one entry.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sentence_regex.split(text).collect()
    }

    pub fn stats(&self, text: &str) -> TextStats {
        TextStats {
            word_count: text.split_whitespace().count(),
            sentence_count: self.split_sentences(text).len(),
            character_count: text.chars().count(),
        }
    }

    /// Lower-cased word tokens in order of appearance
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.word_regex
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }

    pub fn has_double_space(&self, text: &str) -> bool {
        text.contains("  ")
    }

    /// Four or more consecutive capitals, typical of ALL-CAPS headers
    pub fn has_shouting(&self, text: &str) -> bool {
        self.shouting_regex.is_match(text)
    }

    /// Two or more consecutive non-newline whitespace characters
    pub fn has_whitespace_run(&self, text: &str) -> bool {
        self.whitespace_run_regex.is_match(text)
    }

    /// A line starting with a `Label:` style header
    pub fn has_section_labels(&self, text: &str) -> bool {
        self.section_label_regex.is_match(text)
    }

    pub fn has_non_ascii(&self, text: &str) -> bool {
        !text.is_ascii()
    }

    pub fn has_year(&self, text: &str) -> bool {
        self.year_regex.is_match(text)
    }

    /// Substring match, so "summary" counts because of "mar"
    pub fn has_month(&self, text: &str) -> bool {
        self.month_regex.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_split_keeps_empty_segments() {
        let processor = TextProcessor::new();
        let sentences = processor.split_sentences("I know Python. I also know Java and Python.");
        assert_eq!(sentences, vec!["I know Python", " I also know Java and Python", ""]);

        let sentences = processor.split_sentences("Wait!!! Really?");
        assert_eq!(sentences, vec!["Wait", " Really", ""]);

        assert_eq!(processor.split_sentences(""), vec![""]);
    }

    #[test]
    fn test_stats() {
        let processor = TextProcessor::new();
        let stats = processor.stats("  One two three. Four five!\nSix");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.sentence_count, 3);
        assert!((stats.avg_words_per_sentence() - 2.0).abs() < f64::EPSILON);

        let empty = processor.stats("");
        assert_eq!(empty.word_count, 0);
        assert_eq!(empty.sentence_count, 1);
        assert_eq!(empty.avg_words_per_sentence(), 0.0);
    }

    #[test]
    fn test_tokenize() {
        let processor = TextProcessor::new();
        let tokens = processor.tokenize("Senior Node.js developer, 5+ years (CI/CD).");
        assert_eq!(
            tokens,
            vec!["senior", "node", "js", "developer", "5", "years", "ci", "cd"]
        );
    }

    #[test]
    fn test_format_signals() {
        let processor = TextProcessor::new();
        assert!(processor.has_double_space("a  b"));
        assert!(!processor.has_double_space("a b"));
        assert!(processor.has_whitespace_run("a\t b"));
        assert!(!processor.has_whitespace_run("a\n\nb"));
        assert!(processor.has_shouting("SKILLS"));
        assert!(!processor.has_shouting("AWS and GCP"));
        assert!(processor.has_section_labels("John Doe\nExperience:\nAcme"));
        assert!(!processor.has_section_labels("John Doe\nSee example.com"));
        assert!(processor.has_section_labels("John Doe\nSee https://example.com"));
        assert!(processor.has_non_ascii("Café"));
        assert!(!processor.has_non_ascii("Cafe"));
    }

    #[test]
    fn test_date_signals() {
        let processor = TextProcessor::new();
        assert!(processor.has_year("Joined in 2019"));
        assert!(!processor.has_year("Joined in '19"));
        assert!(processor.has_month("JAN 2020"));
        assert!(processor.has_month("Professional summary"));
        assert!(!processor.has_month("Python developer"));
    }
}
