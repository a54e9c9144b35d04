//! Keyword vocabularies used by the analyzers

use serde::{Deserialize, Serialize};

/// Fixed term lists injected into the analyzers.
///
/// The defaults mirror the vocabularies the browser front end ships with.
/// Any list can be replaced from the `[vocabulary]` table of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub job_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            technical_skills: Self::default_technical_skills(),
            soft_skills: Self::default_soft_skills(),
            job_keywords: Self::default_job_keywords(),
        }
    }
}

impl Vocabulary {
    pub fn new(
        technical_skills: Vec<String>,
        soft_skills: Vec<String>,
        job_keywords: Vec<String>,
    ) -> Self {
        Self {
            technical_skills,
            soft_skills,
            job_keywords,
        }
    }

    /// Languages, frameworks and cloud/devops terms
    pub fn default_technical_skills() -> Vec<String> {
        [
            "javascript", "python", "java", "react", "angular", "vue", "node.js",
            "aws", "docker", "kubernetes", "sql", "nosql", "mongodb", "typescript",
            "git", "ci/cd", "agile", "scrum", "rest api", "graphql", "html", "css",
            "devops", "cloud", "microservices", "testing", "security",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    pub fn default_soft_skills() -> Vec<String> {
        [
            "leadership", "communication", "teamwork", "problem solving",
            "analytical", "project management", "time management", "collaboration",
            "adaptability", "creativity", "critical thinking", "attention to detail",
            "organization", "interpersonal", "decision making",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Words that are kept from a job description regardless of their length
    pub fn default_job_keywords() -> Vec<String> {
        [
            "experience", "degree", "bachelor", "master", "phd",
            "years", "skills", "knowledge", "proficient", "expert",
            "team", "leadership", "management", "communication",
            "development", "design", "analysis", "testing",
            "agile", "scrum", "project", "deadline", "budget",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    pub fn is_job_keyword(&self, word: &str) -> bool {
        self.job_keywords.iter().any(|k| k == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.technical_skills.len(), 27);
        assert_eq!(vocab.soft_skills.len(), 15);
        assert_eq!(vocab.job_keywords.len(), 23);
    }

    #[test]
    fn test_job_keyword_lookup() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_job_keyword("agile"));
        assert!(!vocab.is_job_keyword("Agile"));
        assert!(!vocab.is_job_keyword("kubernetes"));
    }
}
