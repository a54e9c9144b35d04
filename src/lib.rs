//! Resume ATS-compatibility scoring library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod processing;
pub mod output;

pub use error::{Result, ResumeAtsError};
pub use config::Config;
pub use models::Resume;
pub use processing::completeness::{
    max_possible_score, score_resume, total_score, CompletenessReport, ScoreCategory,
};
pub use processing::job_matcher::{analyze_job_match, JobMatchAnalysis, JobMatchAnalyzer};
pub use processing::keyword_matcher::{find_keyword_matches, KeywordMatch, KeywordMatcher};
pub use processing::resume_parser::{parse_resume, ParsedResume, ResumeTextAnalyzer};
pub use processing::vocabulary::Vocabulary;
