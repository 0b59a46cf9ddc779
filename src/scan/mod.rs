mod diagnostic;
mod history;
mod scanner;
mod token;


pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
