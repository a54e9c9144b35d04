//! Rubric scoring of a structured resume record

use crate::models::resume::{is_present, Resume};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCategory {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub feedback: Vec<String>,
}

impl ScoreCategory {
    fn new(name: &str, max_score: u32) -> Self {
        Self {
            name: name.to_string(),
            score: 0,
            max_score,
            feedback: Vec::new(),
        }
    }

    /// Add points, capping at `max_score` after every step
    fn accumulate(&mut self, points: u32) {
        self.score = (self.score + points).min(self.max_score);
    }

    fn feedback(&mut self, text: &str) {
        self.feedback.push(text.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub categories: Vec<ScoreCategory>,
    pub total_score: u32,
    pub max_score: u32,
}

impl CompletenessReport {
    pub fn from_resume(resume: &Resume) -> Self {
        let categories = score_resume(resume);
        Self {
            total_score: total_score(&categories),
            max_score: max_possible_score(&categories),
            categories,
        }
    }

    pub fn percentage(&self) -> u8 {
        if self.max_score == 0 {
            return 0;
        }
        ((self.total_score as f64 / self.max_score as f64) * 100.0).round() as u8
    }
}

const SUMMARY_DETAIL_CHARS: usize = 100;
const EXPERIENCE_DETAIL_CHARS: usize = 50;
const RECOMMENDED_SKILLS: usize = 5;

/// Score the six rubric categories. Maximums: personal information 10,
/// experience 30, education 15, skills 15, projects 15, overall impact 15.
pub fn score_resume(resume: &Resume) -> Vec<ScoreCategory> {
    vec![
        score_personal_info(resume),
        score_experience(resume),
        score_education(resume),
        score_skills(resume),
        score_projects(resume),
        score_overall_impact(resume),
    ]
}

pub fn total_score(categories: &[ScoreCategory]) -> u32 {
    categories.iter().map(|c| c.score).sum()
}

pub fn max_possible_score(categories: &[ScoreCategory]) -> u32 {
    categories.iter().map(|c| c.max_score).sum()
}

fn score_personal_info(resume: &Resume) -> ScoreCategory {
    let info = &resume.personal_info;
    let mut category = ScoreCategory::new("Personal Information", 10);

    for field in [&info.full_name, &info.email, &info.phone] {
        if !field.is_empty() {
            category.accumulate(2);
        }
    }

    if info.summary.is_empty() {
        category.feedback("Add a professional summary to highlight your key strengths");
    } else if info.summary.chars().count() > SUMMARY_DETAIL_CHARS {
        category.accumulate(4);
    } else {
        category.accumulate(2);
    }

    category
}

fn score_experience(resume: &Resume) -> ScoreCategory {
    let mut category = ScoreCategory::new("Experience", 30);

    for exp in &resume.experience {
        let mut points = 0;
        if !exp.company.is_empty() && !exp.position.is_empty() {
            points += 3;
        }
        if exp.description.chars().count() > EXPERIENCE_DETAIL_CHARS {
            points += 3;
        }
        if !exp.start_date.is_empty() && !exp.end_date.is_empty() {
            points += 2;
        }
        category.accumulate(points);
    }

    if resume.experience.is_empty() {
        category.feedback("Add relevant work experience to strengthen your resume");
    }

    category
}

fn score_education(resume: &Resume) -> ScoreCategory {
    let mut category = ScoreCategory::new("Education", 15);

    for edu in &resume.education {
        let mut points = 0;
        if !edu.school.is_empty() && !edu.degree.is_empty() {
            points += 3;
        }
        if !edu.field_of_study.is_empty() {
            points += 2;
        }
        if !edu.start_date.is_empty() && !edu.end_date.is_empty() {
            points += 1;
        }
        category.accumulate(points);
    }

    category
}

fn score_skills(resume: &Resume) -> ScoreCategory {
    let mut category = ScoreCategory::new("Skills", 15);
    let count = resume.skills.len() as u32;

    category.accumulate(count.saturating_mul(3));
    if resume.skills.len() < RECOMMENDED_SKILLS {
        category.feedback("Add more relevant skills to showcase your expertise");
    }

    category
}

fn score_projects(resume: &Resume) -> ScoreCategory {
    let mut category = ScoreCategory::new("Projects", 15);

    for project in &resume.projects {
        let mut points = 0;
        if !project.title.is_empty() && !project.description.is_empty() {
            points += 2;
        }
        if !project.technologies.is_empty() {
            points += 2;
        }
        if is_present(&project.url) {
            points += 1;
        }
        category.accumulate(points);
    }

    category
}

fn score_overall_impact(resume: &Resume) -> ScoreCategory {
    let mut category = ScoreCategory::new("Overall Impact", 15);
    let has_links = resume.personal_info.has_professional_links();

    if has_links {
        category.accumulate(5);
    }
    if !resume.certifications.is_empty() {
        category.accumulate(5);
    }
    if !resume.achievements.is_empty() {
        category.accumulate(5);
    }

    if !has_links {
        category.feedback(
            "Add professional profile links (LinkedIn, GitHub) to increase visibility",
        );
    }

    category
}
