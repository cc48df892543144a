//! View navigation: overview, jurisdiction detail, topic detail.

use tracing::debug;

use crate::entry::{Jurisdiction, KnowledgeEntry};

/// The active view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState<'c> {
    #[default]
    Overview,
    JurisdictionDetail(Jurisdiction),
    TopicDetail {
        entry: &'c KnowledgeEntry,
        /// Jurisdiction view the topic was opened from, if any.
        origin: Option<Jurisdiction>,
    },
}

impl<'c> ViewState<'c> {
    /// The jurisdiction currently selected, either viewed directly or
    /// remembered underneath an open topic.
    pub fn selected_jurisdiction(&self) -> Option<Jurisdiction> {
        match self {
            Self::Overview => None,
            Self::JurisdictionDetail(j) => Some(*j),
            Self::TopicDetail { origin, .. } => *origin,
        }
    }

    pub fn selected_topic(&self) -> Option<&'c KnowledgeEntry> {
        match self {
            Self::TopicDetail { entry, .. } => Some(*entry),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::JurisdictionDetail(_) => "jurisdiction",
            Self::TopicDetail { .. } => "topic",
        }
    }
}

/// Owns the current [`ViewState`] and applies transitions to it.
///
/// Every transition is total: there is no state from which a transition is
/// refused.
#[derive(Debug, Default)]
pub struct Navigator<'c> {
    state: ViewState<'c>,
}

impl<'c> Navigator<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState<'c> {
        self.state
    }

    /// Go to the overview, clearing jurisdiction and topic selection.
    pub fn select_overview(&mut self) -> ViewState<'c> {
        self.go(ViewState::Overview)
    }

    /// Open a jurisdiction's detail view, clearing topic selection.
    pub fn select_jurisdiction(&mut self, jurisdiction: Jurisdiction) -> ViewState<'c> {
        self.go(ViewState::JurisdictionDetail(jurisdiction))
    }

    /// Open a topic, keeping the selected jurisdiction so [`back`](Self::back)
    /// can return to it.
    pub fn select_topic(&mut self, entry: &'c KnowledgeEntry) -> ViewState<'c> {
        let origin = self.state.selected_jurisdiction();
        self.go(ViewState::TopicDetail { entry, origin })
    }

    /// Leave a topic: back to its originating jurisdiction, else the overview.
    /// Outside a topic this does nothing.
    pub fn back(&mut self) -> ViewState<'c> {
        match self.state {
            ViewState::TopicDetail {
                origin: Some(j), ..
            } => self.go(ViewState::JurisdictionDetail(j)),
            ViewState::TopicDetail { origin: None, .. } => self.go(ViewState::Overview),
            state => state,
        }
    }

    fn go(&mut self, next: ViewState<'c>) -> ViewState<'c> {
        debug!(from = self.state.name(), to = next.name(), "view transition");
        self.state = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn starts_at_overview() {
        let nav = Navigator::new();
        assert_eq!(nav.state(), ViewState::Overview);
        assert!(nav.state().selected_jurisdiction().is_none());
    }

    #[test]
    fn jurisdiction_clears_topic() {
        let corpus = Corpus::builtin();
        let mut nav = Navigator::new();
        nav.select_topic(&corpus.entries()[0]);
        let state = nav.select_jurisdiction(Jurisdiction::Thailand);
        assert_eq!(state, ViewState::JurisdictionDetail(Jurisdiction::Thailand));
        assert!(state.selected_topic().is_none());
    }

    #[test]
    fn back_from_topic_returns_to_originating_jurisdiction() {
        let corpus = Corpus::builtin();
        let entry = corpus.get("labor-vn-1").unwrap();
        let mut nav = Navigator::new();

        nav.select_jurisdiction(Jurisdiction::Vietnam);
        let state = nav.select_topic(entry);
        assert_eq!(state.selected_topic().map(|e| e.id.as_str()), Some("labor-vn-1"));
        assert_eq!(state.selected_jurisdiction(), Some(Jurisdiction::Vietnam));

        assert_eq!(
            nav.back(),
            ViewState::JurisdictionDetail(Jurisdiction::Vietnam)
        );
    }

    #[test]
    fn back_from_topic_opened_on_overview_returns_to_overview() {
        let corpus = Corpus::builtin();
        let mut nav = Navigator::new();
        nav.select_topic(&corpus.entries()[2]);
        assert_eq!(nav.back(), ViewState::Overview);
    }

    #[test]
    fn topic_to_topic_keeps_origin() {
        let corpus = Corpus::builtin();
        let mut nav = Navigator::new();
        nav.select_jurisdiction(Jurisdiction::Singapore);
        nav.select_topic(corpus.get("labor-sg-1").unwrap());
        nav.select_topic(corpus.get("labor-sg-2").unwrap());
        assert_eq!(
            nav.back(),
            ViewState::JurisdictionDetail(Jurisdiction::Singapore)
        );
    }

    #[test]
    fn overview_clears_everything() {
        let corpus = Corpus::builtin();
        let mut nav = Navigator::new();
        nav.select_jurisdiction(Jurisdiction::Singapore);
        nav.select_topic(&corpus.entries()[0]);
        assert_eq!(nav.select_overview(), ViewState::Overview);
        // A topic opened after returning to the overview has no origin.
        nav.select_topic(&corpus.entries()[0]);
        assert_eq!(nav.back(), ViewState::Overview);
    }

    #[test]
    fn back_outside_topic_is_identity() {
        let mut nav = Navigator::new();
        assert_eq!(nav.back(), ViewState::Overview);
        nav.select_jurisdiction(Jurisdiction::Thailand);
        assert_eq!(
            nav.back(),
            ViewState::JurisdictionDetail(Jurisdiction::Thailand)
        );
    }
}
