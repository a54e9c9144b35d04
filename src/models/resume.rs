//! Structured resume record as produced by the resume builder front end

use crate::error::{Result, ResumeAtsError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub research: Vec<Research>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeforces: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hackerrank: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Research {
    pub title: String,
    pub institution: String,
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
}

impl Resume {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ResumeAtsError::InvalidInput(format!("Malformed resume JSON: {}", e)))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PersonalInfo {
    /// LinkedIn or GitHub profile present
    pub fn has_professional_links(&self) -> bool {
        is_present(&self.linkedin) || is_present(&self.github)
    }
}

/// An optional field counts only when it holds a non-empty string
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_end_json() {
        let json = r#"{
            "personalInfo": {
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "phone": "555-0100",
                "location": "Remote",
                "summary": "Engineer",
                "github": "https://github.com/jane"
            },
            "skills": [{ "name": "Rust", "level": "Expert" }],
            "projects": [{
                "title": "ripgrep clone",
                "description": "Fast search",
                "technologies": ["Rust"],
                "startDate": "2022-01",
                "endDate": "2022-06"
            }]
        }"#;

        let resume = Resume::from_json(json).unwrap();
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert_eq!(resume.skills[0].level, SkillLevel::Expert);
        assert_eq!(resume.projects[0].technologies, vec!["Rust"]);
        assert!(resume.projects[0].url.is_none());
        assert!(resume.experience.is_empty());
        assert!(resume.personal_info.has_professional_links());
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let err = Resume::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ResumeAtsError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_links_are_absent() {
        let info = PersonalInfo {
            linkedin: Some(String::new()),
            ..Default::default()
        };
        assert!(!info.has_professional_links());
    }

    #[test]
    fn test_json_round_trip() {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.certifications.push(Certification {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2023".to_string(),
            credential_id: Some("LF-123".to_string()),
            ..Default::default()
        });

        let json = resume.to_json().unwrap();
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"credentialId\""));
        assert_eq!(Resume::from_json(&json).unwrap(), resume);
    }
}
