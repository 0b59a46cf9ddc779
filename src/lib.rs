pub mod cli;
mod scan;
mod span;

pub use scan::{Diagnostic, DiagnosticKind, Scanner, Token, TokenKind};
pub use span::{Position, Span};

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

/// Reads a source file, decoding bytes that are not UTF-8 lossily.
pub fn load(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("script `{}`", path.display()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scans a whole file, prints its tokens to stdout and reports diagnostics
/// on stderr.
///
/// Returns `false` if any diagnostic was reported.
pub fn run(path: &Path, source: &str, comments: bool) -> io::Result<bool> {
    let (tokens, errors) = Scanner::new(source).into_parts();

    dump(&mut io::stdout().lock(), &tokens, comments)?;

    let path = path.to_string_lossy();
    let path: &str = path.as_ref();
    for e in &errors {
        report(path, source, e)?;
    }

    Ok(errors.is_empty())
}

/// Writes one `line:begin-end<TAB>kind<TAB>value` row per token.
pub fn dump<W: Write>(out: &mut W, tokens: &[Token], comments: bool) -> io::Result<()> {
    for token in tokens
        .iter()
        .filter(|t| comments || t.kind() != TokenKind::Comment)
    {
        writeln!(
            out,
            "{}:{}-{}\t{}\t{:?}",
            token.line(),
            token.begin(),
            token.end(),
            token.kind(),
            token.value()
        )?;
    }

    Ok(())
}

pub fn report(id: &str, source: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    let at = diagnostic.offset()..diagnostic.offset();

    Report::build(ReportKind::Error, (id, at.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(format!(
            "{} at {}:{}",
            diagnostic,
            diagnostic.line() + 1,
            diagnostic.begin() + 1
        ))
        .with_label(
            Label::new((id, at))
                .with_message(diagnostic.message())
                .with_color(Color::Red),
        )
        .finish()
        .eprint((id, Source::from(source)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dump_rows() {
        let (tokens, _) = Scanner::new("int 1 // one\n").into_parts();

        let mut out = vec![];
        dump(&mut out, &tokens, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0:0-3\tValue\t\"int\"\n\
             0:4-5\tValue\t\"1\"\n\
             0:6-12\tComment\t\" one\"\n\
             0:12-13\tEOL\t\"\\n\"\n"
        );
    }

    #[test]
    fn load_accepts_invalid_utf8() {
        let path = std::env::temp_dir().join(format!("tealex-load-{}.teal", std::process::id()));
        fs::write(&path, b"byte \xff\n").unwrap();

        let code = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let (tokens, errors) = Scanner::new(&code).into_parts();
        assert!(errors.is_empty());
        let values: Vec<_> = tokens.iter().map(Token::value).collect();
        assert_eq!(values, vec!["byte", "\u{fffd}", "\n"]);
    }

    #[test]
    fn load_missing_file_names_it() {
        let err = load(Path::new("/nonexistent/tealex.teal")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/tealex.teal"));
    }

    #[test]
    fn dump_without_comments() {
        let (tokens, _) = Scanner::new("pop // x").into_parts();

        let mut out = vec![];
        dump(&mut out, &tokens, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0:0-3\tValue\t\"pop\"\n");
    }
}
