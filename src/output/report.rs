//! Report structures wrapping analysis results for output

use crate::processing::completeness::CompletenessReport;
use crate::processing::job_matcher::JobMatchAnalysis;
use crate::processing::resume_parser::ParsedResume;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysis result plus generation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub metadata: ReportMetadata,
    pub body: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "result", rename_all = "camelCase")]
pub enum ReportBody {
    ResumeAnalysis(ParsedResume),
    JobMatch(JobMatchAnalysis),
    Completeness(CompletenessReport),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    /// Input files the report was produced from
    pub sources: Vec<String>,
    /// Seed used for simulated figures, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// True when some figures come from a simulated strategy
    pub simulated: bool,
}

impl ReportMetadata {
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            sources,
            seed: None,
            simulated: false,
        }
    }

    pub fn with_simulation(mut self, seed: Option<u64>) -> Self {
        self.simulated = true;
        self.seed = seed;
        self
    }
}

impl Report {
    pub fn new(body: ReportBody, metadata: ReportMetadata) -> Self {
        Self { metadata, body }
    }

    pub fn title(&self) -> &'static str {
        match self.body {
            ReportBody::ResumeAnalysis(_) => "RESUME ATS ANALYSIS",
            ReportBody::JobMatch(_) => "JOB MATCH ANALYSIS",
            ReportBody::Completeness(_) => "RESUME COMPLETENESS",
        }
    }

    /// Headline score on a 0-100 scale
    pub fn headline_score(&self) -> u8 {
        match &self.body {
            ReportBody::ResumeAnalysis(parsed) => parsed.overall_compatibility,
            ReportBody::JobMatch(analysis) => analysis.match_score,
            ReportBody::Completeness(report) => report.percentage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resume;

    #[test]
    fn test_report_json_shape() {
        let body = ReportBody::Completeness(CompletenessReport::from_resume(&Resume::default()));
        let report = Report::new(body, ReportMetadata::new(vec!["resume.json".to_string()]));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["body"]["kind"], "completeness");
        assert_eq!(json["body"]["result"]["totalScore"], 0);
        assert_eq!(json["metadata"]["sources"][0], "resume.json");
        assert!(json["metadata"].get("seed").is_none());

        let back: Report = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_headline_and_title() {
        let body = ReportBody::Completeness(CompletenessReport::from_resume(&Resume::default()));
        let report = Report::new(body, ReportMetadata::new(Vec::new()).with_simulation(Some(3)));
        assert_eq!(report.headline_score(), 0);
        assert_eq!(report.title(), "RESUME COMPLETENESS");
        assert!(report.metadata.simulated);
        assert_eq!(report.metadata.seed, Some(3));
    }
}
