//! Terminal rendering for the overview, jurisdiction and topic views.

use std::io::{self, Write};

use lexhub_core::{
    AttachmentKind, Category, Density, FilterCriteria, GenerationResult, Jurisdiction,
    JurisdictionFilter, KnowledgeEntry, MATRIX, STATS, Selection, Tone, headings, sections,
};

const RULE: &str = "────────────────────────────────────────────────────────────";

// ── Overview ──

pub fn print_overview(
    out: &mut impl Write,
    criteria: &FilterCriteria,
    results: &[&KnowledgeEntry],
) -> io::Result<()> {
    writeln!(out, "=== Knowledge Hub ===")?;
    writeln!(
        out,
        "Search for advice by topic, country, area or contributor."
    )?;
    writeln!(out)?;

    let search = if criteria.search.trim().is_empty() {
        "(any)"
    } else {
        criteria.search.as_str()
    };
    writeln!(
        out,
        "  search: {search}   country: {}   area: {}",
        label_or(&criteria.jurisdiction, "All Countries"),
        label_or(&criteria.category, "All Areas"),
    )?;
    writeln!(out)?;

    print_stats(out)?;
    print_matrix(out)?;

    writeln!(out, "Search Results")?;
    writeln!(out, "{RULE}")?;
    if results.is_empty() {
        writeln!(out, "  No results found matching your filters.")?;
    }
    for (i, entry) in results.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {} • {}",
            i + 1,
            entry.jurisdiction,
            entry.category
        )?;
        writeln!(out, "      {}", entry.title)?;
        writeln!(out, "      {} · {}  [{}]", entry.author, entry.timestamp, entry.id)?;
    }
    writeln!(out)
}

fn label_or<T: std::fmt::Display>(selection: &Selection<T>, all: &str) -> String {
    match selection {
        Selection::All => all.to_string(),
        Selection::Only(v) => v.to_string(),
    }
}

fn print_stats(out: &mut impl Write) -> io::Result<()> {
    for stat in &STATS {
        let marker = match stat.tone {
            Tone::Positive => "▲",
            Tone::Neutral => "·",
            Tone::Attention => "!",
        };
        writeln!(
            out,
            "  {:<22} {:>6}  {marker} {}",
            stat.label, stat.value, stat.trend
        )?;
    }
    writeln!(out)
}

fn density_marker(density: Density) -> &'static str {
    match density {
        Density::High => "●●●",
        Density::Medium => "●●○",
        Density::Low => "●○○",
        Density::Sparse => "○○○",
    }
}

fn print_matrix(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Jurisdiction Matrix")?;
    write!(out, "  {:<26}", "Practice Area")?;
    for j in Jurisdiction::ALL {
        write!(out, " {:>8}", j.code())?;
    }
    writeln!(out)?;
    for row in &MATRIX {
        write!(out, "  {:<26}", row.area)?;
        for j in Jurisdiction::ALL {
            let count = row.count(j);
            write!(out, " {:>4} {}", count, density_marker(Density::of(count)))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

// ── Jurisdiction detail ──

pub fn print_jurisdiction(
    out: &mut impl Write,
    filter: &JurisdictionFilter,
    docs: &[&KnowledgeEntry],
) -> io::Result<()> {
    let j = filter.jurisdiction;
    writeln!(out, "=== {} {} ===", j.flag(), j)?;
    writeln!(out)?;

    // Filter chips: the active one is bracketed.
    let mut chips = vec![chip("All", filter.category == Selection::All)];
    chips.extend(
        Category::ALL
            .iter()
            .map(|c| chip(c.as_str(), filter.category == Selection::Only(*c))),
    );
    writeln!(out, "  {}", chips.join(" "))?;
    writeln!(out)?;

    writeln!(out, "Knowledge Assets ({})", docs.len())?;
    writeln!(out, "{RULE}")?;
    if docs.is_empty() {
        writeln!(out, "  No knowledge assets in this category yet.")?;
    }
    for (i, doc) in docs.iter().enumerate() {
        write!(out, "  {:>2}. [{}] {}", i + 1, doc.category, doc.timestamp)?;
        if let Some(read_time) = &doc.read_time {
            write!(out, " • {read_time}")?;
        }
        writeln!(out)?;
        writeln!(out, "      {}", doc.title)?;
        if let Some(summary) = &doc.summary {
            writeln!(out, "      {summary}")?;
        }
        writeln!(
            out,
            "      {} ({})  [{}]",
            doc.author, doc.author_role, doc.id
        )?;
    }
    writeln!(out)
}

fn chip(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}

// ── Topic detail ──

/// Print an article as a card: breadcrumb, contents, sections, references
/// and community Q&A.
pub fn print_topic(
    out: &mut impl Write,
    entry: &KnowledgeEntry,
    origin: Option<Jurisdiction>,
) -> io::Result<()> {
    let trail = match origin {
        Some(j) => format!("Overview › {j} › {}", entry.category),
        None => format!("Overview › {}", entry.category),
    };
    writeln!(out, "{trail}")?;
    writeln!(out)?;
    writeln!(out, "=== {} ===", entry.title)?;
    writeln!(out, "{} • {}", entry.category, entry.jurisdiction)?;
    write!(
        out,
        "{} ({}) · {}",
        entry.author, entry.author_role, entry.timestamp
    )?;
    if let Some(read_time) = &entry.read_time {
        write!(out, " · {read_time}")?;
    }
    writeln!(out)?;
    writeln!(out)?;

    match entry.content.as_deref() {
        Some(content) => {
            let toc = headings(content);
            if !toc.is_empty() {
                writeln!(out, "Contents")?;
                for heading in &toc {
                    writeln!(out, "  - {heading}")?;
                }
                writeln!(out, "  - Expert Q&A")?;
                writeln!(out)?;
            }
            for section in sections(content) {
                if let Some(heading) = section.heading {
                    writeln!(out, "{heading}")?;
                    writeln!(out, "{}", "─".repeat(heading.chars().count()))?;
                }
                for line in section.body.lines() {
                    writeln!(out, "  {line}")?;
                }
                writeln!(out)?;
            }
        }
        None => {
            if let Some(summary) = &entry.summary {
                writeln!(out, "{summary}")?;
                writeln!(out)?;
            }
        }
    }

    if !entry.citations.is_empty() {
        writeln!(out, "Citations")?;
        for citation in &entry.citations {
            writeln!(out, "  • {citation}")?;
        }
        writeln!(out)?;
    }

    if !entry.attachments.is_empty() {
        writeln!(out, "Attachments")?;
        for file in &entry.attachments {
            let kind = match file.kind {
                AttachmentKind::Pdf => "PDF",
                AttachmentKind::Doc => "DOC",
                AttachmentKind::Link => "LINK",
            };
            writeln!(out, "  {kind:<5} {}  ({})", file.name, file.size)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Regional Q&A")?;
    if entry.community_qa.is_empty() {
        writeln!(out, "  No questions yet.")?;
    }
    for qa in &entry.community_qa {
        writeln!(out, "  {} · {}", qa.user, qa.timestamp)?;
        writeln!(out, "    \"{}\"", qa.question)?;
        if let Some(answer) = &qa.answer {
            writeln!(out, "    → {answer}")?;
        }
    }
    writeln!(out)
}

// ── Draft assistant ──

pub fn print_draft(out: &mut impl Write, draft: &GenerationResult) -> io::Result<()> {
    writeln!(out, "=== AI Legal Draft ===")?;
    writeln!(out, "{}", draft.title)?;
    writeln!(out)?;
    writeln!(out, "{}", draft.summary)?;
    writeln!(out)?;
    if !draft.tags.is_empty() {
        let tags: Vec<String> = draft.tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(out, "{}", tags.join("  "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexhub_core::{Corpus, filter_entries};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn overview_shows_no_results_message() {
        let criteria = FilterCriteria::new("nothing matches this", Selection::All, Selection::All);
        let text = render(|out| print_overview(out, &criteria, &[]));
        assert!(text.contains("No results found matching your filters."));
        assert!(text.contains("Jurisdiction Matrix"));
    }

    #[test]
    fn overview_lists_results_with_ids() {
        let corpus = Corpus::builtin();
        let criteria = FilterCriteria::new("", Selection::Only(Jurisdiction::Singapore), Selection::All);
        let results = filter_entries(corpus.entries(), &criteria);
        let text = render(|out| print_overview(out, &criteria, &results));
        assert!(text.contains("[labor-sg-1]"));
        assert!(text.contains("[labor-sg-2]"));
        assert!(!text.contains("[labor-vn-1]"));
        assert!(text.contains("country: Singapore"));
        assert!(!text.contains("No results"));
    }

    #[test]
    fn jurisdiction_marks_active_chip_and_counts() {
        let corpus = Corpus::builtin();
        let mut filter = JurisdictionFilter::new(Jurisdiction::Vietnam);
        filter.category = Selection::Only(Category::Corporate);
        let docs = filter.apply(corpus.entries());
        let text = render(|out| print_jurisdiction(out, &filter, &docs));
        assert!(text.contains("[Corporate]"));
        assert!(text.contains(" All "));
        assert!(text.contains("Knowledge Assets (1)"));
    }

    #[test]
    fn empty_jurisdiction_category_has_message() {
        let mut filter = JurisdictionFilter::new(Jurisdiction::Thailand);
        filter.category = Selection::Only(Category::Tax);
        let text = render(|out| print_jurisdiction(out, &filter, &[]));
        assert!(text.contains("Knowledge Assets (0)"));
        assert!(text.contains("No knowledge assets in this category yet."));
    }

    #[test]
    fn topic_card_has_toc_and_references() {
        let corpus = Corpus::builtin();
        let entry = corpus.get("labor-sg-1").unwrap();
        let text = render(|out| print_topic(out, entry, Some(Jurisdiction::Singapore)));
        assert!(text.starts_with("Overview › Singapore › Labor"));
        assert!(text.contains("  - 3. Employer Obligations"));
        assert!(text.contains("  ### 2.1 Scope of Application"));
        assert!(text.contains("  • MOM Advisory 2024/09"));
        assert!(text.contains("PDF   MOM_FWA_Handbook_2024.pdf  (2.4 MB)"));
        assert!(text.contains("\"Does this apply to part-time contract workers?\""));
    }

    #[test]
    fn topic_without_content_falls_back_to_summary() {
        let corpus = Corpus::builtin();
        let entry = corpus.get("corp-vn-1").unwrap();
        let text = render(|out| print_topic(out, entry, None));
        assert!(text.starts_with("Overview › Corporate"));
        assert!(!text.contains("Contents"));
        assert!(text.contains("MPI circulars"));
        assert!(text.contains("No questions yet."));
    }

    #[test]
    fn draft_lists_tags() {
        let draft = GenerationResult {
            title: "T".into(),
            summary: "S".into(),
            tags: vec!["Labor".into(), "Vietnam".into()],
        };
        let text = render(|out| print_draft(out, &draft));
        assert!(text.contains("#Labor  #Vietnam"));
    }
}
