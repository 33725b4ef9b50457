//! Turns tokens and lexer errors into printable lines

use crate::args::Format;
use egg_lexer::LexerError;
use egg_tokens::{Spanned, Token};
use eyre::WrapErr;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// A source read from a file or standard input
#[derive(Debug)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    /// Reads a source from a file, or from standard input if `path` is `None`
    pub fn read(path: Option<&Path>) -> eyre::Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .wrap_err_with(|| format!("could not read {}", path.display()))?;
                Ok(Self {
                    name: path.display().to_string(),
                    text,
                })
            }
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .wrap_err("could not read standard input")?;
                Ok(Self {
                    name: "<stdin>".to_string(),
                    text,
                })
            }
        }
    }

    /// Describes where in this source a lexer error occurred
    pub fn locate(&self, error: &LexerError) -> String {
        let (line, col) = error.span().line_col(&self.text);
        format!("{}:{}:{}", self.name, line, col)
    }
}

/// Prints tokens in a given format
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: Format,
    skip_synthetic: bool,
}

impl Renderer {
    pub fn new(format: Format, skip_synthetic: bool) -> Self {
        Self {
            format,
            skip_synthetic,
        }
    }

    /// The line to print for `token`, if it should be printed at all
    pub fn render(&self, token: &Token) -> Option<String> {
        if self.skip_synthetic && token.is_synthetic() {
            return None;
        }
        Some(match self.format {
            Format::Plain => format!("{} '{}'", token.kind(), token.text()),
            Format::Debug => format!("{:?} @ {}", token, token.span()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egg_lexer::tokenize;
    use std::io::Write;

    fn render_all(renderer: Renderer, src: &str) -> Vec<String> {
        tokenize(src)
            .unwrap()
            .iter()
            .filter_map(|token| renderer.render(token))
            .collect()
    }

    #[test]
    fn test_plain() {
        let lines = render_all(Renderer::new(Format::Plain, false), "x := 1\n");
        assert_eq!(
            lines,
            ["NAME 'x'", "DECLARE ':='", "INTEGER '1'", "SEMICOLON ''"]
        );
    }

    #[test]
    fn test_skip_synthetic() {
        let lines = render_all(Renderer::new(Format::Plain, true), "x := 1;\n");
        assert_eq!(
            lines,
            ["NAME 'x'", "DECLARE ':='", "INTEGER '1'", "SEMICOLON ';'"]
        );
    }

    #[test]
    fn test_debug_includes_span() {
        let lines = render_all(Renderer::new(Format::Debug, false), "  @abc ");
        assert_eq!(lines, ["<NAME: \"abc\"> @ 3..6"]);
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "ls -la\n# hi").unwrap();
        let source = Source::read(Some(file.path())).unwrap();
        assert_eq!(source.text, "ls -la\n# hi");
        assert_eq!(source.name, file.path().display().to_string());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.egg");
        let error = Source::read(Some(&path)).unwrap_err();
        assert!(error.to_string().starts_with("could not read"));
    }

    #[test]
    fn test_locate_error() {
        let source = Source {
            name: "script.egg".to_string(),
            text: "x := 1\ny := ^".to_string(),
        };
        let error = tokenize(&source.text).unwrap_err();
        assert_eq!(source.locate(&error), "script.egg:2:5");
    }
}
