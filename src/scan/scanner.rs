use std::borrow::Cow;
use std::ops::Range;

use smol_str::{format_smolstr, SmolStr};
use tracing::{debug, trace};

use super::history::History;
use super::{Diagnostic, DiagnosticKind, Token, TokenKind};
use crate::span::{Position, Span};

/// Pull-based scanner over a complete source buffer.
///
/// Every delimiter is ASCII and ASCII bytes never occur inside a multi-byte
/// UTF-8 sequence, so the scanner walks bytes rather than decoded chars.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a [u8],
    /// Where the next token begins.
    start: Position,
    /// End of consumed input.
    head: Position,
    history: History,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    pub fn new<S>(source: &'a S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self {
            source: source.as_ref(),
            start: Position::default(),
            head: Position::default(),
            history: History::default(),
            diagnostics: vec![],
        }
    }

    /// Moves to the next token, scanning the source only when every token
    /// produced so far has already been handed out.
    ///
    /// Returns `false` once the source is exhausted.
    pub fn scan(&mut self) -> bool {
        if self.history.is_drained() {
            self.read();
        } else {
            trace!("replaying token");
        }

        self.history.advance()
    }

    /// Steps back one token so the next [`Scanner::scan`] hands it out again.
    ///
    /// Returns `false` if nothing has been handed out yet.
    pub fn back(&mut self) -> bool {
        let moved = self.history.retreat();
        if moved {
            debug!("stepped back one token");
        }

        moved
    }

    /// The token handed out by the last [`Scanner::scan`], if any.
    pub fn curr(&self) -> Option<&Token> {
        self.history.current()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Every token produced so far, in source order.
    pub fn tokens(&self) -> &[Token] {
        self.history.tokens()
    }

    /// Scans to the end of the source.
    pub fn into_parts(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while self.scan() {}

        (self.history.into_tokens(), self.diagnostics)
    }
}

impl<'a> Scanner<'a> {
    fn read(&mut self) {
        self.skip_whitespace();

        let Some(c) = self.peek() else {
            return;
        };

        let token = match (c, self.peek_next()) {
            (b'/', Some(b'/')) => self.comment(),
            (b'\r' | b'\n' | b';', _) => self.separator(),
            _ => self.value(),
        };

        if let Some(token) = token {
            self.history.push(token);
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.bump();
        }

        self.start = self.head;
    }

    pub(super) fn comment(&mut self) -> Option<Token> {
        loop {
            let opener = self.head.offset - self.start.offset < 2;

            let Some(c) = self.peek() else {
                if opener {
                    self.fail(DiagnosticKind::IncompleteComment);
                    return None;
                }

                return Some(self.comment_token());
            };

            if opener {
                if c != b'/' {
                    self.fail(DiagnosticKind::IncompleteComment);
                    return None;
                }
            } else if matches!(c, b'\r' | b'\n') {
                return Some(self.comment_token());
            }

            self.bump();
        }
    }

    fn comment_token(&mut self) -> Token {
        let text = SmolStr::new(self.text(self.start.offset + 2..self.head.offset));
        self.token(TokenKind::Comment, text)
    }

    pub(super) fn separator(&mut self) -> Option<Token> {
        loop {
            let Some(c) = self.peek() else {
                return Some(self.lexeme(TokenKind::Eol));
            };

            self.bump();

            match c {
                b'\r' => {
                    if self.peek() == Some(b'\n') {
                        self.bump();
                    }
                    return Some(self.lexeme(TokenKind::Eol));
                }
                b'\n' => return Some(self.lexeme(TokenKind::Eol)),
                b';' => return Some(self.lexeme(TokenKind::Semicolon)),
                _ => (),
            }
        }
    }

    fn value(&mut self) -> Option<Token> {
        if self.peek() == Some(b'"') {
            return self.string();
        }

        while self.peek().is_some_and(|c| !is_terminating(c)) {
            self.bump();
        }

        Some(self.lexeme(TokenKind::Value))
    }

    fn string(&mut self) -> Option<Token> {
        self.bump();

        let mut prev = b'"';
        loop {
            let Some(c) = self.peek() else {
                self.fail(DiagnosticKind::IncompleteString);
                return None;
            };

            self.bump();

            if c == b'"' && prev != b'\\' {
                break;
            }

            prev = c;
        }

        // only `\"` is unescaped, the surrounding quotes are kept
        let body = self.text(self.start.offset + 1..self.head.offset - 1);
        let value = format_smolstr!("\"{}\"", body.replace("\\\"", "\""));

        Some(self.token(TokenKind::Value, value))
    }

    /// Token whose value is exactly the consumed span.
    fn lexeme(&mut self, kind: TokenKind) -> Token {
        let text = SmolStr::new(self.text(self.start.offset..self.head.offset));
        self.token(kind, text)
    }

    fn token(&mut self, kind: TokenKind, value: SmolStr) -> Token {
        let token = Token::new(kind, value, Span::between(self.start, self.head));
        trace!(
            %kind,
            line = token.line(),
            begin = token.begin(),
            end = token.end(),
            "token"
        );

        if kind == TokenKind::Eol {
            self.head = self.head.newline();
        }
        self.start = self.head;

        token
    }

    fn fail(&mut self, kind: DiagnosticKind) {
        debug!(%kind, line = self.head.line, column = self.head.column(), "diagnostic");
        self.diagnostics.push(Diagnostic::new(kind, self.head));
    }

    fn text(&self, range: Range<usize>) -> Cow<'a, str> {
        let source: &'a [u8] = self.source;
        String::from_utf8_lossy(&source[range])
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.head.offset).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.get(self.head.offset + 1).copied()
    }

    fn bump(&mut self) {
        self.head = self.head.advance(1);
    }
}

const fn is_terminating(c: u8) -> bool {
    matches!(c, b'\r' | b'\n' | b' ' | b'\t' | b';')
}
