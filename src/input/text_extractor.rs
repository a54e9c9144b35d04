//! Text extraction from various file formats

use crate::error::{Result, ResumeAtsError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAtsError::ExtractionFailed(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;

        if text.trim().is_empty() {
            return Err(ResumeAtsError::ExtractionFailed(format!(
                "No text found in PDF '{}' (scanned image?)",
                path.display()
            )));
        }
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        read_utf8(path).await
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = read_utf8(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

async fn read_utf8(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => ResumeAtsError::InvalidInput(format!(
            "'{}' is not valid UTF-8 text",
            path.display()
        )),
        _ => ResumeAtsError::Io(e),
    })
}

/// Flatten markdown to plain text lines.
///
/// Headings, paragraphs and list items each end their own line, so
/// `## Skills` comes out as `Skills` and list entries stay one per line.
/// Raw HTML is dropped; everything else is kept as written.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak | Event::Rule => text.push('\n'),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
            _ => {}
        }
    }

    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
