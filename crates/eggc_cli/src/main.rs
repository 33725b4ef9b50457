use crate::args::Args;
use crate::render::{Renderer, Source};
use clap::Parser;
use egg_lexer::Lexer;
use owo_colors::{OwoColorize, Stream};
use std::io::{self, stderr, stdout, Stderr, StderrLock, Stdout, StdoutLock, Write};
use std::process::ExitCode;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace, Level, Metadata};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{format, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;
mod render;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting eggc with args: {args:?}");
    debug!("eggc version: {}", env!("CARGO_PKG_VERSION"));

    let renderer = Renderer::new(args.format, args.skip_synthetic);
    let mut lexer = Lexer::new();
    let mut out = stdout().lock();
    let mut failed = false;

    for path in args.sources() {
        let source = Source::read(path)?;
        debug!(source = %source.name, chars = source.text.chars().count(), "lexing");
        for result in lexer.lex(&source.text) {
            match result {
                Ok(token) => {
                    if let Some(line) = renderer.render(&token) {
                        writeln!(out, "{line}")?;
                    }
                }
                Err(error) => {
                    out.flush()?;
                    eprintln!(
                        "{}: {}: {}",
                        "error".if_supports_color(Stream::Stderr, |text| text.red()),
                        source.locate(&error),
                        error
                    );
                    failed = true;
                }
            }
        }
        lexer.reset();
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Sends warnings and errors to stderr, and everything else to stdout
struct StdioWriter {
    stdout: Stdout,
    stderr: Stderr,
}

enum StdioLock<'a> {
    Stdout(StdoutLock<'a>),
    Stderr(StderrLock<'a>),
}

impl<'a> io::Write for StdioLock<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write(buf),
            StdioLock::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.flush(),
            StdioLock::Stderr(stderr) => stderr.flush(),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write_all(buf),
            StdioLock::Stderr(stderr) => stderr.write_all(buf),
        }
    }
}

impl<'a> MakeWriter<'a> for StdioWriter {
    type Writer = StdioLock<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        StdioLock::Stdout(self.stdout.lock())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if meta.level() <= &Level::WARN {
            StdioLock::Stderr(self.stderr.lock())
        } else {
            StdioLock::Stdout(self.stdout.lock())
        }
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(StdioWriter {
                    stdout: stdout(),
                    stderr: stderr(),
                })
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
