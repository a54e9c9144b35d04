//! Estimators for the resume fields that are not derived from text analysis

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Match percentages and profile fields produced by a [`MatchEstimator`]
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEstimates {
    pub job_title_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub experience_years: u32,
    pub education_level: String,
}

/// Source of the job-title, experience and education match figures.
///
/// No real comparison is defined for these yet. Implementations receive the
/// resume text so a content-based estimator can replace the placeholders
/// without touching the analyzer.
pub trait MatchEstimator {
    fn estimate(&mut self, resume_text: &str) -> MatchEstimates;
}

pub const UNKNOWN_EDUCATION_LEVEL: &str = "Unknown";

/// Draws each percentage uniformly from a fixed band:
/// job title 80-100, experience 75-95, education 70-90.
pub struct RandomizedEstimator<R: Rng = StdRng> {
    rng: R,
}

impl RandomizedEstimator<StdRng> {
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

impl<R: Rng> RandomizedEstimator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn banded(&mut self, floor: f64) -> u8 {
        (self.rng.gen::<f64>() * 20.0 + floor).round() as u8
    }
}

impl<R: Rng> MatchEstimator for RandomizedEstimator<R> {
    fn estimate(&mut self, _resume_text: &str) -> MatchEstimates {
        MatchEstimates {
            job_title_match: self.banded(80.0),
            experience_match: self.banded(75.0),
            education_match: self.banded(70.0),
            experience_years: 0,
            education_level: UNKNOWN_EDUCATION_LEVEL.to_string(),
        }
    }
}

/// Returns the same figures for every resume
#[derive(Debug, Clone, PartialEq)]
pub struct FixedEstimator {
    pub job_title_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
}

impl FixedEstimator {
    pub fn new(job_title_match: u8, experience_match: u8, education_match: u8) -> Self {
        Self {
            job_title_match: job_title_match.min(100),
            experience_match: experience_match.min(100),
            education_match: education_match.min(100),
        }
    }
}

impl MatchEstimator for FixedEstimator {
    fn estimate(&mut self, _resume_text: &str) -> MatchEstimates {
        MatchEstimates {
            job_title_match: self.job_title_match,
            experience_match: self.experience_match,
            education_match: self.education_match,
            experience_years: 0,
            education_level: UNKNOWN_EDUCATION_LEVEL.to_string(),
        }
    }
}
