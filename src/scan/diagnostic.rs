use thiserror::Error;

use crate::span::Position;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    #[error("incomplete string")]
    IncompleteString,
    #[error("incomplete comment")]
    IncompleteComment,
}

/// A lexical problem at a single point of the source.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{kind}")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    position: Position,
}

impl Diagnostic {
    pub const fn new(kind: DiagnosticKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub const fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn line(&self) -> usize {
        self.position.line
    }

    pub const fn begin(&self) -> usize {
        self.position.column()
    }

    /// Same as [`Diagnostic::begin`]; diagnostics are points.
    pub const fn end(&self) -> usize {
        self.position.column()
    }

    pub const fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
