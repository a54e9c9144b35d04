//! Output formatting for console, JSON and markdown reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{Report, ReportBody};
use crate::processing::completeness::CompletenessReport;
use crate::processing::job_matcher::{JobMatchAnalysis, RequirementKind};
use crate::processing::resume_parser::{ParsedResume, Priority, RecommendationCategory};
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> String {
        if self.use_colors {
            let icon = match priority {
                Priority::High => "⚠️",
                Priority::Medium => "📋",
                Priority::Low => "💡",
            };
            format!("{} ", icon)
        } else {
            let text_icon = match priority {
                Priority::High => "[*]",
                Priority::Medium => "[-]",
                Priority::Low => "[+]",
            };
            format!("{} ", text_icon)
        }
    }

    fn format_score_line(&self, label: &str, score: u8) -> String {
        format!("  {:<22} {:>3}% {}\n", label, score, self.format_score_badge(score))
    }

    fn format_resume_analysis(&self, parsed: &ParsedResume, output: &mut String) {
        output.push_str(&self.format_header("Scores", 2));
        output.push_str(&self.format_score_line("Overall compatibility", parsed.overall_compatibility));
        output.push_str(&self.format_score_line("Format", parsed.format_score));
        output.push_str(&self.format_score_line("Content", parsed.content_score));
        output.push_str(&self.format_score_line("Readability", parsed.readability_score));

        output.push_str(&self.format_header("Match Estimates", 2));
        output.push_str(&format!("  Job title: {}%\n", parsed.job_title_match));
        output.push_str(&format!("  Experience: {}%\n", parsed.experience_match));
        output.push_str(&format!("  Education: {}%\n", parsed.education_match));

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&format!(
            "  Technical ({}): {}\n",
            parsed.technical_skills.len(),
            join_or_none(&parsed.technical_skills)
        ));
        output.push_str(&format!(
            "  Soft ({}): {}\n",
            parsed.soft_skills.len(),
            join_or_none(&parsed.soft_skills)
        ));

        if self.detailed && !parsed.keyword_matches.is_empty() {
            output.push_str(&self.format_header("Keyword Matches", 3));
            for m in &parsed.keyword_matches {
                output.push_str(&format!("  • {} (found {} times)\n", m.keyword, m.count));
                for sentence in m.context.iter().take(2) {
                    output.push_str(&format!("      \"{}\"\n", truncate_text(sentence, 100)));
                }
            }
        }

        if !parsed.recommendations.is_empty() {
            output.push_str(&self.format_header("Recommendations", 2));
            for (i, rec) in parsed.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {}{} ({})\n",
                    i + 1,
                    self.format_priority_icon(rec.priority),
                    rec.text,
                    category_label(rec.category)
                ));
            }
        }
    }

    fn format_job_match(&self, analysis: &JobMatchAnalysis, output: &mut String) {
        let found = analysis.keyword_matches.len() - analysis.missing_keywords.len();

        output.push_str(&self.format_header("Match", 2));
        output.push_str(&self.format_score_line("Match score", analysis.match_score));
        output.push_str(&format!(
            "  Keywords found: {}/{}\n",
            found,
            analysis.keyword_matches.len()
        ));

        if !analysis.requirements.is_empty() {
            output.push_str(&self.format_header("Requirements", 2));
            for req in &analysis.requirements {
                let (label, color) = match req.kind {
                    RequirementKind::Required => ("required ", Color::Red),
                    RequirementKind::Preferred => ("preferred", Color::Yellow),
                };
                let mark = if req.matched { "✓" } else { "✗" };
                output.push_str(&format!(
                    "  {} {} {}\n",
                    mark,
                    self.colorize(label, color),
                    truncate_text(&req.text, 90)
                ));
            }
        }

        if self.detailed && !analysis.keyword_matches.is_empty() {
            output.push_str(&self.format_header("Keywords", 3));
            for m in &analysis.keyword_matches {
                let mark = if m.found {
                    self.colorize("✓", Color::Green)
                } else {
                    self.colorize("✗", Color::Red)
                };
                match &m.context {
                    Some(context) => output.push_str(&format!(
                        "  {} {} - {}\n",
                        mark,
                        m.keyword,
                        truncate_text(context, 80)
                    )),
                    None => output.push_str(&format!("  {} {}\n", mark, m.keyword)),
                }
            }
        }

        if !analysis.missing_keywords.is_empty() {
            output.push_str(&self.format_header("Missing Keywords", 2));
            let shown = if self.detailed { analysis.missing_keywords.len() } else { 10 };
            output.push_str(&format!(
                "  {}\n",
                analysis.missing_keywords.iter().take(shown).cloned().collect::<Vec<_>>().join(", ")
            ));
            if analysis.missing_keywords.len() > shown {
                output.push_str(&format!(
                    "  ... and {} more\n",
                    analysis.missing_keywords.len() - shown
                ));
            }
        }

        if !analysis.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 2));
            for (i, suggestion) in analysis.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {}{}\n",
                    i + 1,
                    self.format_priority_icon(suggestion.priority),
                    suggestion.text
                ));
            }
        }
    }

    fn format_completeness(&self, report: &CompletenessReport, output: &mut String) {
        output.push_str(&self.format_header("Total", 2));
        output.push_str(&format!(
            "  {}/{} points {}\n",
            report.total_score,
            report.max_score,
            self.format_score_badge(report.percentage())
        ));

        output.push_str(&self.format_header("Categories", 2));
        for category in &report.categories {
            output.push_str(&format!(
                "  {:<22} {:>2}/{:<2} {}\n",
                category.name,
                category.score,
                category.max_score,
                score_bar(category.score, category.max_score, 20)
            ));
            for feedback in &category.feedback {
                output.push_str(&format!("      {}{}\n", self.format_priority_icon(Priority::Medium), feedback));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(report.title(), 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        if !report.metadata.sources.is_empty() {
            output.push_str(&format!("Sources: {}\n", report.metadata.sources.join(", ")));
        }
        if report.metadata.simulated {
            let note = match report.metadata.seed {
                Some(seed) => format!("Note: some figures are simulated (seed {})\n", seed),
                None => "Note: some figures are simulated\n".to_string(),
            };
            output.push_str(&self.colorize(&note, Color::BrightBlack));
        }

        match &report.body {
            ReportBody::ResumeAnalysis(parsed) => self.format_resume_analysis(parsed, &mut output),
            ReportBody::JobMatch(analysis) => self.format_job_match(analysis, &mut output),
            ReportBody::Completeness(completeness) => self.format_completeness(completeness, &mut output),
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟢 Very Good",
            70..=79 => "🟡 Good",
            60..=69 => "🟡 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn priority_label(priority: Priority) -> &'static str {
        match priority {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    fn resume_analysis(parsed: &ParsedResume, md: &mut String) {
        md.push_str("## Scores\n\n| Metric | Score | Rating |\n|---|---|---|\n");
        for (label, score) in [
            ("Overall compatibility", parsed.overall_compatibility),
            ("Format", parsed.format_score),
            ("Content", parsed.content_score),
            ("Readability", parsed.readability_score),
            ("Job title match", parsed.job_title_match),
            ("Experience match", parsed.experience_match),
            ("Education match", parsed.education_match),
        ] {
            md.push_str(&format!("| {} | {}% | {} |\n", table_cell(label), score, Self::markdown_score_badge(score)));
        }

        md.push_str("\n## Skills\n\n");
        md.push_str(&format!("- **Technical:** {}\n", join_or_none(&parsed.technical_skills)));
        md.push_str(&format!("- **Soft:** {}\n", join_or_none(&parsed.soft_skills)));

        if !parsed.keyword_matches.is_empty() {
            md.push_str("\n## Keyword Matches\n\n| Keyword | Count |\n|---|---|\n");
            for m in &parsed.keyword_matches {
                md.push_str(&format!("| {} | {} |\n", table_cell(&m.keyword), m.count));
            }
        }

        if !parsed.recommendations.is_empty() {
            md.push_str("\n## Recommendations\n\n");
            for rec in &parsed.recommendations {
                md.push_str(&format!(
                    "- **{}** ({}): {}\n",
                    Self::priority_label(rec.priority),
                    category_label(rec.category),
                    rec.text
                ));
            }
        }
    }

    fn job_match(analysis: &JobMatchAnalysis, md: &mut String) {
        md.push_str(&format!(
            "## Match Score: {}% ({})\n\n",
            analysis.match_score,
            Self::markdown_score_badge(analysis.match_score)
        ));

        if !analysis.requirements.is_empty() {
            md.push_str("## Requirements\n\n");
            for req in &analysis.requirements {
                let kind = match req.kind {
                    RequirementKind::Required => "Required",
                    RequirementKind::Preferred => "Preferred",
                };
                let checkbox = if req.matched { "x" } else { " " };
                md.push_str(&format!("- [{}] **{}:** {}\n", checkbox, kind, req.text));
            }
            md.push('\n');
        }

        if !analysis.keyword_matches.is_empty() {
            md.push_str("## Keywords\n\n| Keyword | Found | Context |\n|---|---|---|\n");
            for m in &analysis.keyword_matches {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    table_cell(&m.keyword),
                    if m.found { "✅" } else { "❌" },
                    table_cell(m.context.as_deref().unwrap_or(""))
                ));
            }
            md.push('\n');
        }

        if !analysis.suggestions.is_empty() {
            md.push_str("## Suggestions\n\n");
            for suggestion in &analysis.suggestions {
                md.push_str(&format!(
                    "- **{}:** {}\n",
                    Self::priority_label(suggestion.priority),
                    suggestion.text
                ));
            }
        }
    }

    fn completeness(report: &CompletenessReport, md: &mut String) {
        md.push_str(&format!(
            "## Total: {}/{} ({})\n\n| Category | Score | Max |\n|---|---|---|\n",
            report.total_score,
            report.max_score,
            Self::markdown_score_badge(report.percentage())
        ));
        for category in &report.categories {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                table_cell(&category.name),
                category.score,
                category.max_score
            ));
        }

        let feedback: Vec<&String> = report.categories.iter().flat_map(|c| &c.feedback).collect();
        if !feedback.is_empty() {
            md.push_str("\n## Feedback\n\n");
            for item in feedback {
                md.push_str(&format!("- {}\n", item));
            }
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", title_case(report.title())));

        if self.include_metadata {
            md.push_str(&format!(
                "*Generated {} by resume-ats {}*\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
                report.metadata.tool_version
            ));
            if !report.metadata.sources.is_empty() {
                md.push_str(&format!("**Sources:** {}\n\n", report.metadata.sources.join(", ")));
            }
            if report.metadata.simulated {
                md.push_str("> Some figures in this report are simulated.\n\n");
            }
        }

        match &report.body {
            ReportBody::ResumeAnalysis(parsed) => Self::resume_analysis(parsed, &mut md),
            ReportBody::JobMatch(analysis) => Self::job_match(analysis, &mut md),
            ReportBody::Completeness(completeness) => Self::completeness(completeness, &mut md),
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn category_label(category: RecommendationCategory) -> &'static str {
    match category {
        RecommendationCategory::Format => "format",
        RecommendationCategory::Content => "content",
        RecommendationCategory::Keywords => "keywords",
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none found".to_string()
    } else {
        items.join(", ")
    }
}

/// Keep a value inside one markdown table cell
fn table_cell(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

fn score_bar(score: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((score as f64 / max as f64) * width as f64).round() as usize
    };
    format!("{}{}", "■".repeat(filled.min(width)), "□".repeat(width - filled.min(width)))
}

fn title_case(upper: &str) -> String {
    upper
        .split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    // Avoid cutting words
    match truncated.rfind(' ') {
        Some(last_space) if last_space > 0 => format!("{}...", &truncated[..last_space]),
        _ => format!("{}...", truncated),
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, source_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(source_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resume;
    use crate::output::report::ReportMetadata;
    use crate::processing::estimator::FixedEstimator;
    use crate::processing::job_matcher::{JobMatchAnalyzer, ResumeTextLookup};
    use crate::processing::resume_parser::ResumeTextAnalyzer;
    use crate::processing::vocabulary::Vocabulary;

    fn resume_report() -> Report {
        let analyzer = ResumeTextAnalyzer::new(&Vocabulary::default()).unwrap();
        let parsed = analyzer.parse(
            "Skills:\nPython and Docker. Strong communication.",
            &mut FixedEstimator::new(90, 80, 70),
        );
        Report::new(
            ReportBody::ResumeAnalysis(parsed),
            ReportMetadata::new(vec!["cv.txt".to_string()]),
        )
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&resume_report())
            .unwrap();
        assert!(output.contains("█ RESUME ATS ANALYSIS"));
        assert!(output.contains("Technical (2): python, docker"));
        assert!(output.contains("python (found 1 times)"));
        assert!(output.contains("[*] Add more relevant technical skills (keywords)"));
        assert!(output.contains("Sources: cv.txt"));
    }

    #[test]
    fn test_console_job_match() {
        let analysis = JobMatchAnalyzer::new(&Vocabulary::default())
            .analyze("Docker required\nKubernetes preferred", &mut ResumeTextLookup::new("Docker"));
        let report = Report::new(ReportBody::JobMatch(analysis), ReportMetadata::new(Vec::new()));
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();

        assert!(output.contains("Keywords found: 1/4"));
        assert!(output.contains("✗ required  docker required"));
        assert!(output.contains("kubernetes"));
    }

    #[test]
    fn test_json_output_parses() {
        let json = JsonFormatter::new(false).format_report(&resume_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["body"]["kind"], "resumeAnalysis");
        assert_eq!(value["body"]["result"]["jobTitleMatch"], 90);
    }

    #[test]
    fn test_markdown_completeness() {
        let report = Report::new(
            ReportBody::Completeness(CompletenessReport::from_resume(&Resume::default())),
            ReportMetadata::new(Vec::new()),
        );
        let md = MarkdownFormatter::new(false).format_report(&report).unwrap();
        assert!(md.starts_with("# Resume Completeness\n"));
        assert!(md.contains("| Experience | 0 | 30 |"));
        assert!(md.contains("- Add relevant work experience to strengthen your resume"));
    }

    #[test]
    fn test_markdown_table_cells_escape_pipes() {
        let resume = "Acme | Kubernetes | 2019\nplatform team. Other work";
        let analysis = JobMatchAnalyzer::new(&Vocabulary::default())
            .analyze("Kubernetes required", &mut ResumeTextLookup::new(resume));
        let report = Report::new(ReportBody::JobMatch(analysis), ReportMetadata::new(Vec::new()));
        let md = MarkdownFormatter::new(false).format_report(&report).unwrap();

        let row = md
            .lines()
            .find(|line| line.starts_with("| kubernetes |"))
            .unwrap();
        assert_eq!(row, "| kubernetes | ✅ | Acme \\| Kubernetes \\| 2019 platform team |");
        let unescaped = row.matches('|').count() - row.matches("\\|").count();
        assert_eq!(unescaped, 4);
    }

    #[test]
    fn test_table_cell() {
        assert_eq!(table_cell("a | b"), "a \\| b");
        assert_eq!(table_cell("line one\r\n  line two\n"), "line one line two");
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, true);
        let report = resume_report();
        assert!(generator.generate_report(&report, &OutputFormat::Json).unwrap().starts_with('{'));
        assert!(generator.generate_report(&report, &OutputFormat::Markdown).unwrap().starts_with("# "));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello brave new world", 12), "hello brave...");
        assert_eq!(truncate_text("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(15, 30, 4), "■■□□");
        assert_eq!(score_bar(0, 0, 3), "□□□");
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "docs/cv.pdf", false), "cv_ats.json");
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "job.txt", false), "job_ats.md");
    }

    #[test]
    fn test_save_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("cv_ats.md");
        save_report_to_file("# Report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report");
    }
}
