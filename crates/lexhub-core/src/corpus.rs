//! The knowledge corpus: an ordered, id-unique list of entries.
//!
//! The built-in corpus is the static dataset shipped with the binary. A
//! corpus can also be loaded from a JSON array of entries; either way it is
//! never mutated after construction.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::entry::{Attachment, AttachmentKind, Category, Jurisdiction, KnowledgeEntry, QaEntry};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("corpus file not readable: {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<KnowledgeEntry>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate identifiers.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CorpusError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a JSON corpus file from disk.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_json(&json)?;
        info!(path = %path.display(), count = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// The static dataset shipped with LexHub.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

// ── Built-in dataset ──

const FWA_GUIDE: &str = "\
## 1. Executive Summary
The Singapore Ministry of Manpower (MOM) has issued a Tripartite Standard that shifts flexible work from a \"nice-to-have\" benefit to a structured corporate right. Starting Dec 1, 2024, all employers must have a formal process to evaluate FWA requests.

## 2. Key Legal Amendments
Under the new framework, the Employment Act is supplemented by the Tripartite Guidelines on Flexible Work Arrangement Requests (TG-FWAR).

### 2.1 Scope of Application
The guidelines apply to all employees who have completed their probation period (typically 3-6 months). It covers:
- Flexi-place (Telecommuting)
- Flexi-time (Staggered hours)
- Flexi-load (Job sharing or part-time)

## 3. Employer Obligations
Employers cannot simply reject a request with a blanket \"no\". They must provide a written rejection citing specific \"reasonable business grounds\" such as:
- Cost increase that is unsustainable
- Significant decrease in productivity
- Difficulty in organizing work within the team

## 4. Risks and Compliance
Non-compliance won't lead to immediate criminal charges but may result in MOM investigations and administrative penalties. More importantly, it impacts the employer's ability to hire foreign talent as their \"Work Pass\" privileges may be suspended.

## 5. Implementation Roadmap
Companies should begin auditing their HR manuals now. We recommend a phased rollout:
- Phase 1: Policy Draft (Oct 2024)
- Phase 2: Manager Training (Nov 2024)
- Phase 3: Live Implementation (Dec 2024)";

const VN_REMOTE_WORK: &str = "\
## 1. Current Framework
Unlike Singapore, Vietnam does not yet have a specific \"Right to Request\" FWA. However, Article 34 of the Labor Code allows for flexible arrangements upon mutual agreement.

## 2. Remote Work Clauses
Decree 145/2020/ND-CP provides the most detailed guidance. If employees work from home, the employer is still responsible for occupational health and safety (OHS) standards, which creates a significant liability gap.";

fn entry(
    id: &str,
    jurisdiction: Jurisdiction,
    category: Category,
    title: &str,
    (author, author_role): (&str, &str),
    timestamp: &str,
) -> KnowledgeEntry {
    let handle = author
        .split_whitespace()
        .next()
        .unwrap_or(author)
        .trim_end_matches('.')
        .to_lowercase();
    KnowledgeEntry {
        id: id.to_string(),
        jurisdiction,
        category,
        title: title.to_string(),
        author: author.to_string(),
        author_role: author_role.to_string(),
        timestamp: timestamp.to_string(),
        avatar_url: Some(format!("https://i.pravatar.cc/150?u={handle}")),
        summary: None,
        read_time: None,
        content: None,
        citations: Vec::new(),
        attachments: Vec::new(),
        community_qa: Vec::new(),
    }
}

fn attachment(name: &str, size: &str, kind: AttachmentKind) -> Attachment {
    Attachment {
        name: name.to_string(),
        size: size.to_string(),
        kind,
    }
}

fn qa(user: &str, question: &str, answer: &str, timestamp: &str) -> QaEntry {
    QaEntry {
        user: user.to_string(),
        question: question.to_string(),
        answer: Some(answer.to_string()),
        timestamp: timestamp.to_string(),
    }
}

fn builtin_entries() -> Vec<KnowledgeEntry> {
    use Category::*;
    use Jurisdiction::*;

    let michael = ("Michael Chen", "Regional Partner");

    vec![
        KnowledgeEntry {
            summary: Some(
                "A deep dive into the mandatory guidelines for employers regarding FWA requests in Singapore starting December 2024.".into(),
            ),
            read_time: Some("12 min read".into()),
            content: Some(FWA_GUIDE.into()),
            citations: vec![
                "Employment Act 1968".into(),
                "Tripartite Guidelines on FWA 2024".into(),
                "MOM Advisory 2024/09".into(),
            ],
            attachments: vec![
                attachment("MOM_FWA_Handbook_2024.pdf", "2.4 MB", AttachmentKind::Pdf),
                attachment(
                    "Internal_FWA_Policy_Template.docx",
                    "120 KB",
                    AttachmentKind::Doc,
                ),
            ],
            community_qa: vec![
                qa(
                    "Jessica Tan",
                    "Does this apply to part-time contract workers?",
                    "Yes, if they meet the 6-month minimum service requirement.",
                    "1 day ago",
                ),
                qa(
                    "Kevin Lee",
                    "What constitutes a \"reasonable\" cost increase?",
                    "MOM defines this as a direct, quantifiable expense that significantly exceeds standard operational budgets, e.g., needing to rent a satellite office for one person.",
                    "2 days ago",
                ),
            ],
            ..entry(
                "labor-sg-1",
                Singapore,
                Labor,
                "Comprehensive Guide to 2024 Flexible Work Arrangement (FWA) Mandates",
                michael,
                "Oct 24, 2024",
            )
        },
        KnowledgeEntry {
            summary: Some(
                "Comparing Vietnam's \"Working From Home\" regulations under Decree 145 with Singapore's new FWA mandates.".into(),
            ),
            read_time: Some("8 min read".into()),
            content: Some(VN_REMOTE_WORK.into()),
            attachments: vec![attachment(
                "Vietnam_Labor_Code_EN.pdf",
                "1.8 MB",
                AttachmentKind::Pdf,
            )],
            ..entry(
                "labor-vn-1",
                Vietnam,
                Labor,
                "Cross-Border Comparison: Flexible Work Trends in Vietnam Labor Code 2019",
                ("Linh Nguyen", "Senior Associate"),
                "Oct 20, 2024",
            )
        },
        KnowledgeEntry {
            summary: Some(
                "Analyzing the 2023 amendment to the Labor Protection Act regarding remote work agreements.".into(),
            ),
            read_time: Some("7 min read".into()),
            ..entry(
                "labor-th-1",
                Thailand,
                Labor,
                "Thailand Work From Home Bill: Impact on Labor Protection Act",
                ("Somchai P.", "Managing Director"),
                "Oct 15, 2024",
            )
        },
        KnowledgeEntry {
            summary: Some(
                "A detailed look at Part IV of the Employment Act and salary caps for overtime eligibility.".into(),
            ),
            ..entry(
                "labor-sg-2",
                Singapore,
                Labor,
                "Calculating Overtime Pay for Senior Management in Singapore",
                michael,
                "Sep 12, 2024",
            )
        },
        KnowledgeEntry {
            summary: Some(
                "Analysis of recent MPI circulars on market access for foreign investors in manufacturing.".into(),
            ),
            avatar_url: Some("https://i.pravatar.cc/150?u=nam".into()),
            ..entry(
                "corp-vn-1",
                Vietnam,
                Corporate,
                "M&A Due Diligence: New FDI Restrictions in Conditional Sectors",
                ("Hoang Nam", "Partner"),
                "Oct 05, 2024",
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_five_unique_entries() {
        let corpus = Corpus::builtin();
        assert_eq!(corpus.len(), 5);
        // Re-validating the built-in dataset must succeed.
        assert!(Corpus::new(corpus.entries().to_vec()).is_ok());
    }

    #[test]
    fn builtin_order_is_stable() {
        let corpus = Corpus::builtin();
        let ids: Vec<&str> = corpus.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            ["labor-sg-1", "labor-vn-1", "labor-th-1", "labor-sg-2", "corp-vn-1"]
        );
    }

    #[test]
    fn get_by_id() {
        let corpus = Corpus::builtin();
        let entry = corpus.get("labor-vn-1").unwrap();
        assert_eq!(entry.author, "Linh Nguyen");
        assert_eq!(entry.jurisdiction, Jurisdiction::Vietnam);
        assert!(corpus.get("missing").is_none());
    }

    #[test]
    fn avatar_derived_from_first_name() {
        let corpus = Corpus::builtin();
        assert_eq!(
            corpus.get("labor-th-1").unwrap().avatar_url.as_deref(),
            Some("https://i.pravatar.cc/150?u=somchai")
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let first = Corpus::builtin().entries()[0].clone();
        let err = Corpus::new(vec![first.clone(), first]).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateId(id) if id == "labor-sg-1"));
    }

    #[test]
    fn from_json_roundtrips_builtin() {
        let json = serde_json::to_string(Corpus::builtin().entries()).unwrap();
        let corpus = Corpus::from_json(&json).unwrap();
        assert_eq!(corpus.entries(), Corpus::builtin().entries());
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(matches!(
            Corpus::from_json("{not json"),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Corpus::load(Path::new("/nonexistent/lexhub.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lexhub.json"));
    }
}
