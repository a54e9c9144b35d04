//! Job description analysis: requirements, keywords and match scoring

use crate::processing::keyword_matcher::keyword_regex;
use crate::processing::resume_parser::Priority;
use crate::processing::text_processor::TextProcessor;
use crate::processing::vocabulary::Vocabulary;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Required,
    Preferred,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    /// Lower-cased, trimmed source line
    pub text: String,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordPresence {
    pub keyword: String,
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchAnalysis {
    pub match_score: u8,
    pub keyword_matches: Vec<KeywordPresence>,
    pub requirements: Vec<JobRequirement>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

/// Decides whether a job keyword is covered by the candidate
pub trait KeywordLookup {
    fn lookup(&mut self, keyword: &str) -> KeywordPresence;
}

/// Whole-word, case-insensitive search of the resume text.
/// Context is the first resume sentence mentioning the keyword.
pub struct ResumeTextLookup<'a> {
    resume_text: &'a str,
    /// Non-empty trimmed sentences paired with their lower-cased form
    sentences: Vec<(&'a str, String)>,
}

impl<'a> ResumeTextLookup<'a> {
    pub fn new(resume_text: &'a str) -> Self {
        let sentences = TextProcessor::new()
            .split_sentences(resume_text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| (s, s.to_lowercase()))
            .collect();

        Self {
            resume_text,
            sentences,
        }
    }
}

impl KeywordLookup for ResumeTextLookup<'_> {
    fn lookup(&mut self, keyword: &str) -> KeywordPresence {
        let found = match keyword_regex(keyword) {
            Ok(regex) => regex.is_match(self.resume_text),
            Err(e) => {
                warn!("Skipping keyword '{}': {}", keyword, e);
                false
            }
        };

        let context = if found {
            let needle = keyword.to_lowercase();
            self.sentences
                .iter()
                .find(|(_, lower)| lower.contains(&needle))
                .map(|(sentence, _)| sentence.to_string())
        } else {
            None
        };

        KeywordPresence {
            keyword: keyword.to_string(),
            found,
            context,
        }
    }
}

pub const SIMULATED_CONTEXT: &str = "Found in experience section";

/// Stand-in used when no resume is available: a keyword counts as found
/// with probability 0.7 and carries a placeholder context half of the time.
pub struct SimulatedLookup<R: Rng = StdRng> {
    rng: R,
}

impl SimulatedLookup<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SimulatedLookup<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> KeywordLookup for SimulatedLookup<R> {
    fn lookup(&mut self, keyword: &str) -> KeywordPresence {
        let found = self.rng.gen::<f64>() > 0.3;
        let context = if self.rng.gen::<f64>() > 0.5 {
            Some(SIMULATED_CONTEXT.to_string())
        } else {
            None
        };

        KeywordPresence {
            keyword: keyword.to_string(),
            found,
            context,
        }
    }
}

const REQUIRED_MARKERS: &[&str] = &["required", "must have", "essential"];
const PREFERRED_MARKERS: &[&str] = &["preferred", "nice to have", "desirable"];
const MIN_TECHNICAL_WORD_LEN: usize = 5;
const LOW_MATCH_THRESHOLD: u8 = 60;
const MISSING_KEYWORD_LIMIT: usize = 5;

pub struct JobMatchAnalyzer {
    vocabulary: Vocabulary,
    text_processor: TextProcessor,
}

impl JobMatchAnalyzer {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            vocabulary: vocabulary.clone(),
            text_processor: TextProcessor::new(),
        }
    }

    pub fn analyze(&self, job_text: &str, lookup: &mut dyn KeywordLookup) -> JobMatchAnalysis {
        let keywords = self.extract_keywords(job_text);
        let requirements = Self::extract_requirements(job_text);

        let keyword_matches: Vec<KeywordPresence> =
            keywords.iter().map(|k| lookup.lookup(k)).collect();

        let missing_keywords: Vec<String> = keyword_matches
            .iter()
            .filter(|m| !m.found)
            .map(|m| m.keyword.clone())
            .collect();

        let found = keyword_matches.len() - missing_keywords.len();
        let match_score = Self::match_score(found, keyword_matches.len());

        let suggestions = Self::suggestions(match_score, &missing_keywords, &requirements);

        debug!(
            "Job match: {}/{} keywords found, {} requirements, score {}",
            found,
            keyword_matches.len(),
            requirements.len(),
            match_score
        );

        JobMatchAnalysis {
            match_score,
            keyword_matches,
            requirements,
            missing_keywords,
            suggestions,
        }
    }

    /// Classify lines mentioning required or preferred qualifications
    pub fn extract_requirements(job_text: &str) -> Vec<JobRequirement> {
        job_text
            .lines()
            .filter_map(|line| {
                let line = line.trim().to_lowercase();
                let kind = if REQUIRED_MARKERS.iter().any(|m| line.contains(m)) {
                    RequirementKind::Required
                } else if PREFERRED_MARKERS.iter().any(|m| line.contains(m)) {
                    RequirementKind::Preferred
                } else {
                    return None;
                };

                Some(JobRequirement {
                    kind,
                    text: line,
                    matched: false,
                })
            })
            .collect()
    }

    /// Vocabulary words plus any word longer than five characters,
    /// deduplicated in first-occurrence order
    pub fn extract_keywords(&self, job_text: &str) -> Vec<String> {
        let mut seen = HashSet::new();

        self.text_processor
            .tokenize(job_text)
            .into_iter()
            .filter(|word| {
                self.vocabulary.is_job_keyword(word) || word.chars().count() > MIN_TECHNICAL_WORD_LEN
            })
            .filter(|word| seen.insert(word.clone()))
            .collect()
    }

    /// An empty keyword set counts as fully matched
    fn match_score(found: usize, total: usize) -> u8 {
        if total == 0 {
            return 100;
        }
        ((found as f64 / total as f64) * 100.0).round() as u8
    }

    fn suggestions(
        match_score: u8,
        missing_keywords: &[String],
        requirements: &[JobRequirement],
    ) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if match_score < LOW_MATCH_THRESHOLD {
            suggestions.push(Suggestion {
                text: "Your resume needs significant alignment with the job requirements".to_string(),
                priority: Priority::High,
            });
        }

        if missing_keywords.len() > MISSING_KEYWORD_LIMIT {
            suggestions.push(Suggestion {
                text: format!(
                    "Add these missing keywords: {}",
                    missing_keywords[..MISSING_KEYWORD_LIMIT].join(", ")
                ),
                priority: Priority::High,
            });
        }

        let unmet_required = requirements
            .iter()
            .any(|r| r.kind == RequirementKind::Required && !r.matched);
        if unmet_required {
            suggestions.push(Suggestion {
                text: "Address these unmet requirements in your resume".to_string(),
                priority: Priority::High,
            });
        }

        suggestions
    }
}

/// Analyze a job description with the default vocabulary.
///
/// With a resume, keywords are checked against its text; without one the
/// simulated lookup is used.
pub fn analyze_job_match(job_text: &str, resume_text: Option<&str>) -> JobMatchAnalysis {
    let analyzer = JobMatchAnalyzer::new(&Vocabulary::default());
    match resume_text {
        Some(resume) => analyzer.analyze(job_text, &mut ResumeTextLookup::new(resume)),
        None => analyzer.analyze(job_text, &mut SimulatedLookup::from_entropy()),
    }
}
