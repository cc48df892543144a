mod browse;
mod display;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use lexhub_ai::{DiscardSink, DraftSession, GeminiClient, GeminiConfig, SubmitError};
use lexhub_core::{
    Category, Corpus, FilterCriteria, Jurisdiction, JurisdictionFilter, Selection,
    filter_entries,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lexhub", version, about = "Browse the legal knowledge hub and draft new articles")]
struct Cli {
    /// Load entries from a JSON file instead of the built-in corpus.
    #[arg(long, global = true, env = "LEXHUB_CORPUS")]
    corpus: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stats, jurisdiction matrix and filtered search results.
    Overview {
        /// Case-insensitive match on title or author.
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long, default_value = "All")]
        jurisdiction: Selection<Jurisdiction>,
        #[arg(short, long, default_value = "All")]
        category: Selection<Category>,
    },
    /// Knowledge assets for one jurisdiction.
    Jurisdiction {
        name: Jurisdiction,
        #[arg(short, long, default_value = "All")]
        category: Selection<Category>,
    },
    /// Show a single article.
    Topic { id: String },
    /// Draft an article summary from free-text notes.
    Draft {
        #[command(flatten)]
        gemini: GeminiArgs,
        /// Print the draft as JSON.
        #[arg(long)]
        json: bool,
        /// Hand the draft to the knowledge store after printing it.
        #[arg(long)]
        save: bool,
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,
    },
    /// Interactive session reading commands from stdin.
    Browse {
        #[command(flatten)]
        gemini: GeminiArgs,
    },
}

#[derive(Args)]
struct GeminiArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "LEXHUB_MODEL", default_value = GeminiConfig::DEFAULT_MODEL)]
    model: String,
    #[arg(long, env = "LEXHUB_ENDPOINT", default_value = GeminiConfig::DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

impl GeminiArgs {
    /// Build a client, or `None` when no API key is configured.
    fn client(self) -> anyhow::Result<Option<GeminiClient>> {
        let Some(api_key) = self.api_key.filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };
        let config = GeminiConfig {
            api_key,
            model: self.model,
            endpoint: self.endpoint,
            timeout: Duration::from_secs(self.timeout),
        };
        let client = GeminiClient::new(config).context("building HTTP client")?;
        Ok(Some(client))
    }
}

fn load_corpus(path: Option<&PathBuf>) -> anyhow::Result<Corpus> {
    match path {
        Some(path) => Corpus::load(path).context("loading corpus"),
        None => Ok(Corpus::builtin()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    tracing::debug!("lexhub v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let corpus = load_corpus(cli.corpus.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Overview {
            search,
            jurisdiction,
            category,
        } => {
            let criteria = FilterCriteria::new(search, jurisdiction, category);
            let results = filter_entries(corpus.entries(), &criteria);
            display::print_overview(&mut out, &criteria, &results)?;
        }
        Command::Jurisdiction { name, category } => {
            let filter = JurisdictionFilter {
                jurisdiction: name,
                category,
            };
            let docs = filter.apply(corpus.entries());
            display::print_jurisdiction(&mut out, &filter, &docs)?;
        }
        Command::Topic { id } => {
            let Some(entry) = corpus.get(&id) else {
                bail!("no article with id {id:?}");
            };
            display::print_topic(&mut out, entry, None)?;
        }
        Command::Draft {
            gemini,
            json,
            save,
            notes,
        } => {
            let Some(client) = gemini.client()? else {
                bail!("GEMINI_API_KEY is not set");
            };
            let mut session = DraftSession::new();
            session.set_input(notes.join(" "));
            match session.submit(&client).await {
                Ok(draft) if json => {
                    serde_json::to_writer_pretty(&mut out, draft)?;
                    writeln!(out)?;
                }
                Ok(draft) => display::print_draft(&mut out, draft)?,
                Err(SubmitError::Failed(_)) => bail!(browse::GENERATION_FAILED),
                Err(SubmitError::Rejected(reason)) => bail!(reason),
            }
            if save {
                session.save(&DiscardSink);
            }
        }
        Command::Browse { gemini } => {
            let client = gemini.client()?;
            let generator = client
                .as_ref()
                .map(|c| c as &dyn lexhub_ai::DraftGenerator);
            let mut browser = browse::Browser::new(&corpus, generator);
            browser.run(io::stdin().lock(), &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_overview_filters() {
        let cli = Cli::try_parse_from([
            "lexhub", "overview", "-s", "chen", "-j", "SG", "-c", "Labor",
        ])
        .unwrap();
        match cli.command {
            Command::Overview {
                search,
                jurisdiction,
                category,
            } => {
                assert_eq!(search, "chen");
                assert_eq!(jurisdiction, Selection::Only(Jurisdiction::Singapore));
                assert_eq!(category, Selection::Only(Category::Labor));
            }
            _ => panic!("expected overview"),
        }
    }

    #[test]
    fn cli_overview_defaults_to_all() {
        let cli = Cli::try_parse_from(["lexhub", "overview"]).unwrap();
        match cli.command {
            Command::Overview {
                search,
                jurisdiction,
                category,
            } => {
                assert!(search.is_empty());
                assert_eq!(jurisdiction, Selection::All);
                assert_eq!(category, Selection::All);
            }
            _ => panic!("expected overview"),
        }
    }

    #[test]
    fn cli_rejects_unknown_jurisdiction() {
        assert!(Cli::try_parse_from(["lexhub", "jurisdiction", "Atlantis"]).is_err());
    }

    #[test]
    fn cli_draft_requires_notes() {
        assert!(Cli::try_parse_from(["lexhub", "draft"]).is_err());
    }

    #[test]
    fn blank_api_key_means_no_client() {
        let args = GeminiArgs {
            api_key: Some("  ".into()),
            model: GeminiConfig::DEFAULT_MODEL.into(),
            endpoint: GeminiConfig::DEFAULT_ENDPOINT.into(),
            timeout: 60,
        };
        assert!(args.client().unwrap().is_none());
    }
}
