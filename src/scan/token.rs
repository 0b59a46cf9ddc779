use std::fmt;

use smol_str::SmolStr;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) value: SmolStr,
    pub(crate) span: Span,
}

impl Token {
    pub const fn new(kind: TokenKind, value: SmolStr, span: Span) -> Self {
        Self { kind, value, span }
    }

    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Token text. Quoted values keep their quotes, with `\"` unescaped.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn span(&self) -> &Span {
        &self.span
    }

    pub const fn line(&self) -> usize {
        self.span.line
    }

    pub const fn begin(&self) -> usize {
        self.span.columns.start
    }

    pub const fn end(&self) -> usize {
        self.span.columns.end
    }

    /// Whether the token ends a statement.
    pub const fn is_separator(&self) -> bool {
        self.kind.is_separator()
    }

    pub const fn start_line(&self) -> usize {
        self.span.line
    }

    pub const fn start_character(&self) -> usize {
        self.span.columns.start
    }

    pub const fn end_line(&self) -> usize {
        self.span.line
    }

    pub const fn end_character(&self) -> usize {
        self.span.columns.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// ```text
/// EOL        -> "\r\n" | "\r" | "\n" ;
/// SEMICOLON  -> ";" ;
/// COMMENT    -> "//" <any byte except "\r" "\n">* ;
/// VALUE      -> '"' ( '\"' | <any byte except '"'> )* '"'
///             | <any byte except " " "\t" "\r" "\n" ";">+ ;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// line break
    Eol,
    /// `;`
    Semicolon,
    /// bare or quoted value
    Value,
    /// `// ...`
    Comment,
}

impl TokenKind {
    pub const fn is_separator(self) -> bool {
        matches!(self, TokenKind::Eol | TokenKind::Semicolon)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Eol => "EOL",
            TokenKind::Semicolon => ";",
            TokenKind::Value => "Value",
            TokenKind::Comment => "Comment",
        };

        f.write_str(s)
    }
}
