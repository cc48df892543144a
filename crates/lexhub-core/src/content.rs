//! Long-form article content split on `## ` heading lines.
//!
//! Only second-level headings start a section. Deeper headings (`### `)
//! stay inside the body of the section that contains them.

const HEADING_MARKER: &str = "## ";

/// One section of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// `None` for text that precedes the first heading.
    pub heading: Option<&'a str>,
    pub body: String,
}

fn heading_of(line: &str) -> Option<&str> {
    line.strip_prefix(HEADING_MARKER).map(str::trim)
}

/// Table of contents: every `## ` heading, in order.
pub fn headings(content: &str) -> Vec<&str> {
    content.lines().filter_map(heading_of).collect()
}

/// Split content into sections. A heading-less preamble is kept only if it
/// contains non-whitespace text.
pub fn sections(content: &str) -> Vec<Section<'_>> {
    let mut out: Vec<Section<'_>> = Vec::new();
    let mut current = Section {
        heading: None,
        body: String::new(),
    };

    for line in content.lines() {
        if let Some(heading) = heading_of(line) {
            push_section(&mut out, current);
            current = Section {
                heading: Some(heading),
                body: String::new(),
            };
        } else {
            if !current.body.is_empty() {
                current.body.push('\n');
            }
            current.body.push_str(line);
        }
    }
    push_section(&mut out, current);
    out
}

fn push_section<'a>(out: &mut Vec<Section<'a>>, mut section: Section<'a>) {
    let trimmed_len = section.body.trim_end().len();
    section.body.truncate(trimmed_len);
    if section.heading.is_none() && section.body.trim().is_empty() {
        return;
    }
    out.push(section);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn toc_from_builtin_guide() {
        let corpus = Corpus::builtin();
        let content = corpus.get("labor-sg-1").unwrap().content.as_deref().unwrap();
        assert_eq!(
            headings(content),
            [
                "1. Executive Summary",
                "2. Key Legal Amendments",
                "3. Employer Obligations",
                "4. Risks and Compliance",
                "5. Implementation Roadmap",
            ]
        );
    }

    #[test]
    fn subheadings_stay_in_body() {
        let content = "## Scope\nIntro\n### 2.1 Detail\n- item";
        let parsed = sections(content);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].heading, Some("Scope"));
        assert_eq!(parsed[0].body, "Intro\n### 2.1 Detail\n- item");
    }

    #[test]
    fn preamble_kept_when_non_empty() {
        let parsed = sections("Lead paragraph.\n\n## One\nBody one\n\n## Two\nBody two\n");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].heading, None);
        assert_eq!(parsed[0].body, "Lead paragraph.");
        assert_eq!(parsed[1].heading, Some("One"));
        assert_eq!(parsed[1].body, "Body one");
        assert_eq!(parsed[2].body, "Body two");
    }

    #[test]
    fn blank_preamble_dropped() {
        let parsed = sections("\n\n## Only\ntext");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].heading, Some("Only"));
    }

    #[test]
    fn content_without_headings_is_one_preamble() {
        let parsed = sections("Just text.");
        assert_eq!(
            parsed,
            [Section {
                heading: None,
                body: "Just text.".into()
            }]
        );
        assert!(headings("Just text.").is_empty());
    }

    #[test]
    fn empty_content_has_no_sections() {
        assert!(sections("").is_empty());
    }
}
