//! Interactive browse session: one command per line, view re-rendered after
//! every navigation or filter change.

use std::io::{BufRead, Write};

use anyhow::Context;
use lexhub_ai::{DiscardSink, DraftGenerator, DraftSession, SubmitError, SubmitRejected};
use lexhub_core::{
    Corpus, FilterCriteria, FilterMemo, JurisdictionFilter, KnowledgeEntry, Navigator,
    Selection, ViewState,
};
use tracing::debug;

use crate::display;

const HELP: &str = "\
Commands:
  overview                 show the knowledge hub overview
  jurisdiction <name>      open a jurisdiction (Vietnam, Singapore, Thailand)
  open <n|id>              open an article by list number or id
  back                     leave the current article
  search [text]            set the overview search text (empty clears)
  country <name|All>       overview jurisdiction filter
  area <category|All>      category filter for the current view
  draft <notes>            draft a new article with the AI assistant
  edit                     discard the draft and keep the notes
  save                     save the draft to the knowledge hub
  close                    close the draft assistant
  help                     show this help
  quit                     leave";

pub const GENERATION_FAILED: &str = "Failed to generate draft. Please try again.";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Browser<'c> {
    corpus: &'c Corpus,
    nav: Navigator<'c>,
    criteria: FilterCriteria,
    memo: FilterMemo<'c>,
    detail: Option<JurisdictionFilter>,
    /// Entries of the last rendered list, for `open <n>`.
    listing: Vec<&'c KnowledgeEntry>,
    draft: DraftSession,
    generator: Option<&'c dyn DraftGenerator>,
}

impl<'c> Browser<'c> {
    pub fn new(corpus: &'c Corpus, generator: Option<&'c dyn DraftGenerator>) -> Self {
        Self {
            corpus,
            nav: Navigator::new(),
            criteria: FilterCriteria::default(),
            memo: FilterMemo::new(corpus.entries()),
            detail: None,
            listing: Vec::new(),
            draft: DraftSession::new(),
            generator,
        }
    }

    pub fn view(&self) -> ViewState<'c> {
        self.nav.state()
    }

    /// Read commands until `quit` or end of input.
    pub async fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "LexHub knowledge browser. Type `help` for commands.")?;
        writeln!(out)?;
        self.render(out)?;
        for line in input.lines() {
            let line = line.context("reading command")?;
            if self.handle(&line, out).await? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub async fn handle(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((c, rest)) => (c, rest.trim()),
            None => (line, ""),
        };
        debug!(command, arg, "browse command");

        match command.to_ascii_lowercase().as_str() {
            "" => return Ok(Flow::Continue),
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            "help" | "?" => writeln!(out, "{HELP}")?,
            "overview" | "home" => {
                self.nav.select_overview();
                self.detail = None;
                self.render(out)?;
            }
            "jurisdiction" | "j" => match arg.parse() {
                Ok(j) => {
                    self.nav.select_jurisdiction(j);
                    self.detail = Some(JurisdictionFilter::new(j));
                    self.render(out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "open" | "o" => match self.lookup(arg) {
                Some(entry) => {
                    self.nav.select_topic(entry);
                    self.render(out)?;
                }
                None => writeln!(out, "no article {arg:?}")?,
            },
            "back" | "b" => {
                if let ViewState::JurisdictionDetail(j) = self.nav.back() {
                    // Keep the category chip when returning to the same jurisdiction.
                    if self.detail.map(|d| d.jurisdiction) != Some(j) {
                        self.detail = Some(JurisdictionFilter::new(j));
                    }
                }
                self.render(out)?;
            }
            "search" | "s" => {
                self.criteria.search = arg.to_string();
                self.show_overview(out)?;
            }
            "country" => match arg.parse::<Selection<_>>() {
                Ok(selection) => {
                    self.criteria.jurisdiction = selection;
                    self.show_overview(out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "area" => match arg.parse::<Selection<_>>() {
                Ok(selection) => {
                    match (self.nav.state(), self.detail.as_mut()) {
                        (ViewState::JurisdictionDetail(_), Some(detail)) => {
                            detail.category = selection;
                        }
                        _ => {
                            self.criteria.category = selection;
                            self.nav.select_overview();
                        }
                    }
                    self.render(out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "draft" => self.draft(arg, out).await?,
            "edit" => {
                self.draft.edit_input();
                writeln!(out, "Draft discarded. Notes: {}", self.draft.input())?;
            }
            "save" => {
                if self.draft.save(&DiscardSink) {
                    writeln!(out, "Draft closed.")?;
                } else {
                    writeln!(out, "No draft to save.")?;
                }
            }
            "close" => {
                self.draft.dismiss();
                writeln!(out, "Draft assistant closed.")?;
            }
            other => writeln!(out, "unknown command {other:?}; type `help`")?,
        }
        Ok(Flow::Continue)
    }

    /// Filter changes from a topic or jurisdiction view jump to the overview
    /// results, like editing the search box does.
    fn show_overview(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.nav.state() != ViewState::Overview {
            self.nav.select_overview();
            self.detail = None;
        }
        self.render(out)
    }

    fn lookup(&self, arg: &str) -> Option<&'c KnowledgeEntry> {
        if let Ok(n) = arg.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.listing.get(i)).copied();
        }
        self.corpus.get(arg)
    }

    async fn draft(&mut self, notes: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let Some(generator) = self.generator else {
            writeln!(out, "Draft assistant unavailable: set GEMINI_API_KEY.")?;
            return Ok(());
        };
        if !notes.is_empty() {
            // New notes replace the previous draft.
            self.draft.edit_input();
            self.draft.set_input(notes);
        }
        writeln!(out, "Generating draft...")?;
        match self.draft.submit(generator).await {
            Ok(result) => {
                display::print_draft(out, result)?;
                writeln!(out)?;
                writeln!(out, "`save` to keep it, `edit` to change the notes.")?;
            }
            Err(SubmitError::Failed(_)) => writeln!(out, "{GENERATION_FAILED}")?,
            Err(SubmitError::Rejected(SubmitRejected::EmptyInput)) => {
                writeln!(out, "Enter some notes first: draft <notes>")?
            }
            Err(SubmitError::Rejected(reason)) => writeln!(out, "{reason}")?,
        }
        Ok(())
    }

    fn render(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        match self.nav.state() {
            ViewState::Overview => {
                let results = self.memo.get(&self.criteria);
                display::print_overview(out, &self.criteria, results)?;
                self.listing = results.to_vec();
            }
            ViewState::JurisdictionDetail(j) => {
                let filter = *self.detail.get_or_insert_with(|| JurisdictionFilter::new(j));
                let docs = filter.apply(self.corpus.entries());
                display::print_jurisdiction(out, &filter, &docs)?;
                self.listing = docs;
            }
            ViewState::TopicDetail { entry, origin } => {
                display::print_topic(out, entry, origin)?;
            }
        }
        Ok(())
    }
}
