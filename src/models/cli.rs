use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Download web comics from the reader site, one chapter at a time.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Settings file, any extension `config` understands. Optional.
    #[arg(short, long, default_value = "grabber")]
    pub config_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Download every chapter of a comic
    Comic {
        comic: String,
        /// Directory to create for the comic instead of `<output_directory>/<comic>`
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Print a comic's chapter ids and names
    Chapters { comic: String },
    /// Download one chapter into a new directory
    Chapter {
        comic: String,
        chapter: String,
        #[arg(short, long)]
        out_dir: PathBuf,
    },
    /// Download a single page into an existing directory
    Page {
        comic: String,
        chapter: String,
        page: String,
        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
