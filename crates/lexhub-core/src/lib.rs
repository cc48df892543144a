pub mod content;
pub mod corpus;
pub mod dashboard;
pub mod draft;
pub mod entry;
pub mod filter;
pub mod view;

pub use content::{Section, headings, sections};
pub use corpus::{Corpus, CorpusError};
pub use dashboard::{Density, MATRIX, MatrixRow, STATS, StatItem, Tone};
pub use draft::{DraftNotes, GenerationResult};
pub use entry::{
    Attachment, AttachmentKind, Category, Jurisdiction, KnowledgeEntry, ParseLabelError, QaEntry,
};
pub use filter::{FilterCriteria, FilterMemo, JurisdictionFilter, Selection, filter_entries};
pub use view::{Navigator, ViewState};
