//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{html, Parser};
use regex::{Captures, Regex};
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

/// Part of a `.docx` archive holding the document body
const DOCX_BODY_PART: &str = "word/document.xml";

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

static DOCX_BREAK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</w:p>|<w:br\s*/>|<w:cr\s*/>").expect("docx break pattern is a valid regex")
});

static DOCX_TAB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:tab\s*/>").expect("docx tab pattern is a valid regex"));

static NUMERIC_ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").expect("numeric entity pattern is a valid regex")
});

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(html_to_text(&html_output))
    }
}

/// Raw text of a Word (`.docx`) document, one line per paragraph
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let xml = docx_body_xml(bytes).map_err(|e| {
            ResumeAnalyzerError::DocxExtraction(format!(
                "Failed to read Word document '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(docx_xml_to_text(&xml))
    }
}

fn docx_body_xml(bytes: Vec<u8>) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive.by_name(DOCX_BODY_PART)?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// `&#NNN;` / `&#xHH;` to the character; invalid code points are left as written
fn decode_numeric_entities(text: &str) -> String {
    NUMERIC_ENTITY_PATTERN
        .replace_all(text, |captures: &Captures| {
            let code = match (captures.get(1), captures.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (None, Some(decimal)) => decimal.as_str().parse::<u32>().ok(),
                (None, None) => None,
            };
            code.and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| captures[0].to_string())
        })
        .into_owned()
}

fn decode_entities(text: &str) -> String {
    let named = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");
    // `&amp;` last so escaped entity text stays literal
    decode_numeric_entities(&named).replace("&amp;", "&")
}

/// Trimmed, non-empty lines joined with `\n`
fn tidy_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n");

    let clean_text = TAG_PATTERN.replace_all(&text, "");
    tidy_lines(&decode_entities(&clean_text))
}

pub fn docx_xml_to_text(xml: &str) -> String {
    let text = DOCX_BREAK_PATTERN.replace_all(xml, "\n");
    let text = DOCX_TAB_PATTERN.replace_all(&text, "\t");
    let clean_text = TAG_PATTERN.replace_all(&text, "");
    tidy_lines(&decode_entities(&clean_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_strips_tags_and_entities() {
        let html = "<h1>Jane &amp; Co</h1>\n<p>Rust &lt;expert&gt;</p><ul><li>One</li><li>Two</li></ul>";
        assert_eq!(html_to_text(html), "Jane & Co\nRust <expert>\nOne\nTwo");
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Go</w:t><w:tab/><w:t>Rust</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(docx_xml_to_text(xml), "Jane Doe\nSenior Engineer\nGo\tRust");
    }

    #[test]
    fn test_numeric_entities_are_decoded() {
        let xml = "<w:p><w:t>Jane&#8217;s role &#x2013; lead &#39;ops&#39;</w:t></w:p>";
        assert_eq!(docx_xml_to_text(xml), "Jane\u{2019}s role \u{2013} lead 'ops'");
        assert_eq!(decode_entities("&amp;#8217; &#xD800; &#99999999999;"), "&#8217; &#xD800; &#99999999999;");
    }

    #[test]
    fn test_invalid_archive_is_an_error() {
        let err = docx_body_xml(b"not a zip archive".to_vec()).unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::DocxExtraction(_)));
    }
}
