//! ATS-style analysis of resume plain text

use crate::error::Result;
use crate::processing::estimator::{MatchEstimator, RandomizedEstimator};
use crate::processing::keyword_matcher::{KeywordMatch, KeywordMatcher};
use crate::processing::text_processor::TextProcessor;
use crate::processing::vocabulary::Vocabulary;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Format,
    Content,
    Keywords,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub priority: Priority,
    pub category: RecommendationCategory,
}

impl Recommendation {
    fn new(text: &str, priority: Priority, category: RecommendationCategory) -> Self {
        Self {
            text: text.to_string(),
            priority,
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    /// Technical matches followed by soft-skill matches
    pub keyword_matches: Vec<KeywordMatch>,
    pub format_score: u8,
    pub content_score: u8,
    pub readability_score: u8,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience_years: u32,
    pub education_level: String,
    pub job_title_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub overall_compatibility: u8,
    pub recommendations: Vec<Recommendation>,
}

const MAX_RESUME_CHARS: usize = 5000;
const MIN_TECHNICAL_SKILLS: usize = 5;
const MIN_SOFT_SKILLS: usize = 3;
const RECOMMENDATION_THRESHOLD: u8 = 70;

/// Scores resume text for format, content and readability
pub struct ResumeTextAnalyzer {
    technical_matcher: KeywordMatcher,
    soft_matcher: KeywordMatcher,
    text_processor: TextProcessor,
}

impl ResumeTextAnalyzer {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            technical_matcher: KeywordMatcher::new(&vocabulary.technical_skills)?,
            soft_matcher: KeywordMatcher::new(&vocabulary.soft_skills)?,
            text_processor: TextProcessor::new(),
        })
    }

    pub fn parse(&self, text: &str, estimator: &mut dyn MatchEstimator) -> ParsedResume {
        let technical_matches = self.technical_matcher.find_matches(text);
        let soft_matches = self.soft_matcher.find_matches(text);

        let technical_skills: Vec<String> =
            technical_matches.iter().map(|m| m.keyword.clone()).collect();
        let soft_skills: Vec<String> = soft_matches.iter().map(|m| m.keyword.clone()).collect();

        let format_score = self.format_score(text);
        let readability_score = self.readability_score(text);
        let content_score = self.content_score(text, technical_skills.len(), soft_skills.len());

        let overall_compatibility = ((format_score as f64
            + content_score as f64
            + readability_score as f64)
            / 3.0)
            .round() as u8;

        let recommendations = Self::recommendations(
            format_score,
            readability_score,
            technical_skills.len(),
            soft_skills.len(),
        );

        let estimates = estimator.estimate(text);

        debug!(
            "Parsed resume: format={} content={} readability={} overall={} ({} technical, {} soft skills)",
            format_score,
            content_score,
            readability_score,
            overall_compatibility,
            technical_skills.len(),
            soft_skills.len()
        );

        let mut keyword_matches = technical_matches;
        keyword_matches.extend(soft_matches);

        ParsedResume {
            keyword_matches,
            format_score,
            content_score,
            readability_score,
            technical_skills,
            soft_skills,
            experience_years: estimates.experience_years,
            education_level: estimates.education_level,
            job_title_match: estimates.job_title_match.min(100),
            experience_match: estimates.experience_match.min(100),
            education_match: estimates.education_match.min(100),
            overall_compatibility,
            recommendations,
        }
    }

    /// Deductions are independent. A run of two spaces trips both the
    /// double-space and the whitespace-run checks, costing 10 points.
    pub fn format_score(&self, text: &str) -> u8 {
        let tp = &self.text_processor;
        let mut score: i32 = 100;

        if tp.has_double_space(text) {
            score -= 5;
        }
        if tp.has_shouting(text) {
            score -= 5;
        }
        if tp.has_whitespace_run(text) {
            score -= 5;
        }
        if !tp.has_section_labels(text) {
            score -= 10;
        }
        if tp.stats(text).character_count > MAX_RESUME_CHARS {
            score -= 10;
        }
        if tp.has_non_ascii(text) {
            score -= 5;
        }

        clamp_score(score)
    }

    pub fn readability_score(&self, text: &str) -> u8 {
        let stats = self.text_processor.stats(text);
        let avg = stats.avg_words_per_sentence();
        let mut score: i32 = 100;

        if avg > 25.0 {
            score -= 20;
        }
        if avg < 5.0 {
            score -= 10;
        }
        if stats.word_count < 100 {
            score -= 20;
        }
        if stats.sentence_count < 5 {
            score -= 15;
        }

        clamp_score(score)
    }

    pub fn content_score(&self, text: &str, technical_count: usize, soft_count: usize) -> u8 {
        let mut score: i32 = 100;

        if technical_count < MIN_TECHNICAL_SKILLS {
            score -= 20;
        }
        if soft_count < MIN_SOFT_SKILLS {
            score -= 15;
        }
        if !self.text_processor.has_year(text) {
            score -= 10;
        }
        if !self.text_processor.has_month(text) {
            score -= 10;
        }

        clamp_score(score)
    }

    fn recommendations(
        format_score: u8,
        readability_score: u8,
        technical_count: usize,
        soft_count: usize,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if format_score < RECOMMENDATION_THRESHOLD {
            recommendations.push(Recommendation::new(
                "Improve resume formatting for better ATS readability",
                Priority::High,
                RecommendationCategory::Format,
            ));
        }
        if technical_count < MIN_TECHNICAL_SKILLS {
            recommendations.push(Recommendation::new(
                "Add more relevant technical skills",
                Priority::High,
                RecommendationCategory::Keywords,
            ));
        }
        if soft_count < MIN_SOFT_SKILLS {
            recommendations.push(Recommendation::new(
                "Include more soft skills to show well-roundedness",
                Priority::Medium,
                RecommendationCategory::Content,
            ));
        }
        if readability_score < RECOMMENDATION_THRESHOLD {
            recommendations.push(Recommendation::new(
                "Optimize sentence structure and length",
                Priority::Medium,
                RecommendationCategory::Content,
            ));
        }

        recommendations
    }
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Analyze resume text with the default vocabulary and randomized match figures
pub fn parse_resume(text: &str) -> Result<ParsedResume> {
    let analyzer = ResumeTextAnalyzer::new(&Vocabulary::default())?;
    Ok(analyzer.parse(text, &mut RandomizedEstimator::from_entropy()))
}
