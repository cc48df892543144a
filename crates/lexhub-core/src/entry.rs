//! Knowledge entry types shared by the corpus, filters and front ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label that did not match any variant of an enumerated set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// Legal/regulatory region the corpus is organised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    Vietnam,
    Singapore,
    Thailand,
}

impl Jurisdiction {
    /// Every jurisdiction, in navigation order.
    pub const ALL: [Jurisdiction; 3] = [Self::Vietnam, Self::Singapore, Self::Thailand];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vietnam => "Vietnam",
            Self::Singapore => "Singapore",
            Self::Thailand => "Thailand",
        }
    }

    /// Two-letter column code used in the jurisdiction matrix.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vietnam => "VN",
            Self::Singapore => "SG",
            Self::Thailand => "TH",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Self::Vietnam => "🇻🇳",
            Self::Singapore => "🇸🇬",
            Self::Thailand => "🇹🇭",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = ParseLabelError;

    /// Accepts the full name or the matrix code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|j| j.as_str().eq_ignore_ascii_case(s) || j.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLabelError {
                kind: "jurisdiction",
                value: s.to_string(),
            })
    }
}

/// Practice-area tag. The "All" filter sentinel lives in
/// [`Selection`](crate::filter::Selection), never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Labor,
    Corporate,
    #[serde(rename = "IP")]
    Ip,
    Tax,
    Compliance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Labor,
        Self::Corporate,
        Self::Ip,
        Self::Tax,
        Self::Compliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Labor => "Labor",
            Self::Corporate => "Corporate",
            Self::Ip => "IP",
            Self::Tax => "Tax",
            Self::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLabelError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Pdf,
    Doc,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    /// Display label, e.g. "2.4 MB".
    pub size: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
}

/// One community question, optionally answered by the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub user: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub timestamp: String,
}

/// One article in the corpus.
///
/// `content` is long-form text sectioned by `## ` heading lines; see
/// [`sections`](crate::content::sections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: String,
    pub jurisdiction: Jurisdiction,
    pub category: Category,
    pub title: String,
    pub author: String,
    pub author_role: String,
    /// Display string, not a parsed date.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, rename = "communityQA", skip_serializing_if = "Vec::is_empty")]
    pub community_qa: Vec<QaEntry>,
}
