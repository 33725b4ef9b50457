//! the args for running eggc

use clap::{value_parser, ArgAction, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Prints the tokens of egg source files")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// How each token is printed
    #[clap(long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,
    /// Hide the statement terminators inserted at newlines
    #[clap(long)]
    pub skip_synthetic: bool,
    /// Source files to tokenize. Reads standard input if none are given, or for `-`
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    files: Vec<PathBuf>,
}

impl Args {
    /// The sources to read, where `None` is standard input
    pub fn sources(&self) -> Vec<Option<&Path>> {
        if self.files.is_empty() {
            return vec![None];
        }
        self.files
            .iter()
            .map(|file| (file.as_os_str() != "-").then_some(file.as_path()))
            .collect()
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

/// How tokens are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `KIND 'text'`, one per line
    Plain,
    /// The debug form of each token, including its span
    Debug,
}

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used,
    pub fn log_level_filter(&self) -> LevelFilter {
        match self.verbose as i8 - self.quiet as i8 {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2..=i8::MAX => LevelFilter::TRACE,
        }
    }
}
