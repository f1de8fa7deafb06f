//! Niihau - Main entrypoint.
//!
//! Loads configuration and a word list, then answers autocomplete queries
//! either one-shot from the command line or as a JSON-lines session on
//! stdin/stdout.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use niihau_lib::config::{self, ConfigLoader, LogConfig, NiihauConfig};
use niihau_lib::error::{report_error, set_error_reporter, ErrorContext, NiihauError, TracingErrorReporter};
use niihau_lib::protocol::TrieHandler;
use niihau_lib::word_list::FileWordSource;
use niihau_lib::PrefixTrie;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Niihau.
#[derive(Parser, Debug)]
#[clap(name = "niihau", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, one word per line (overrides `words.path`)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the words matching a prefix and the possible next characters
    Prefix {
        /// Prefix typed so far
        prefix: String,
    },

    /// Print whether a word is registered
    Exists {
        /// Word to look up
        word: String,

        /// Require the exact original spelling
        #[clap(long)]
        case_sensitive: bool,
    },

    /// Answer JSON requests read line by line from stdin
    Session,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr so stdout stays parseable.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.map_err(|e| anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Builds the trie from the command line or configured word list.
fn build_trie(args_words: Option<PathBuf>, config: &NiihauConfig) -> anyhow::Result<PrefixTrie> {
    match args_words.or_else(|| config.words.path.clone()) {
        Some(path) => {
            let source = FileWordSource::new(&path);
            PrefixTrie::from_source(&source)
                .with_context(|| format!("Failed to load word list {}", path.display()))
        }
        None => {
            warn!("No word list configured, starting with an empty trie");
            Ok(PrefixTrie::new())
        }
    }
}

/// Runs the JSON-lines session until stdin closes.
fn run_session(handler: &mut TrieHandler) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handler.handle_line(&line);
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
        out.flush()?;
    }

    info!("Session closed");
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();

    // Logging comes up even when the configuration is broken, so the failure is visible.
    let log = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Validate => {
            info!("Validating configuration");
            loaded.context("Configuration validation failed")?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = toml::to_string_pretty(&NiihauConfig::default())
                .context("Failed to serialize config")?;
            std::fs::write(&output, toml)?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Prefix { prefix } => {
            let config = loaded.context("Configuration error")?;
            let trie = build_trie(args.words, &config)?;
            println!("{}", serde_json::to_string_pretty(&trie.from_prefix(&prefix))?);
            Ok(())
        }
        Command::Exists {
            word,
            case_sensitive,
        } => {
            let config = loaded.context("Configuration error")?;
            let trie = build_trie(args.words, &config)?;
            let ignore_case = config.query.ignore_case && !case_sensitive;
            println!("{}", trie.word_exists_with_case(&word, ignore_case));
            Ok(())
        }
        Command::Session => {
            let config = loaded.context("Configuration error")?;
            let trie = build_trie(args.words, &config)?;
            info!(words = trie.len(), "{}", trie);
            let mut handler =
                TrieHandler::new(trie).with_default_ignore_case(config.query.ignore_case);
            run_session(&mut handler)
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        report_error(ErrorContext::new(NiihauError::Custom(format!("{err:#}")), "niihau"));
        process::exit(1);
    }
}
