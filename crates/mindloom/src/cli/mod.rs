pub mod generate;
pub mod keywords;
pub mod topic;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use mindloom_core::{Note, NoteSource};

#[derive(Parser)]
#[command(
    name = "mloom",
    about = "Turn free-form notes into labeled mind maps",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a mind map from a note and render it
    Generate {
        /// Note file to read (stdin if omitted)
        input: Option<PathBuf>,
        /// Upper bound on leaf nodes (the extractor itself keeps at most 10)
        #[arg(long = "max-nodes", default_value_t = 10)]
        max_nodes: usize,
        /// Replace the detected main topic
        #[arg(long)]
        topic: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "dot")]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Print the cleaned text to stderr
        #[arg(long)]
        show_text: bool,
    },
    /// List the ranked key phrases for a note
    Keywords {
        /// Note file to read (stdin if omitted)
        input: Option<PathBuf>,
        /// Upper bound on listed phrases
        #[arg(long = "max-nodes", default_value_t = 10)]
        max_nodes: usize,
        /// Include occurrence counts
        #[arg(long)]
        counts: bool,
    },
    /// Print the detected main topic for a note
    Topic {
        /// Note file to read (stdin if omitted)
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Dot,
    Html,
    Json,
}

/// Read a note from a file or stdin; blank input is refused here so every
/// command reports "no text available" before any extraction work.
pub(crate) fn read_note(input: Option<&Path>) -> anyhow::Result<Note> {
    match input {
        Some(path) => {
            let body = std::fs::read_to_string(path)?;
            let note = Note::new(NoteSource::File, body)?;
            let title = path.file_stem().and_then(|s| s.to_str());
            Ok(match title {
                Some(title) => note.with_title(title),
                None => note,
            })
        }
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(Note::typed(body)?)
        }
    }
}
