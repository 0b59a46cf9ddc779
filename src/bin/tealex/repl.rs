use std::io;

use tealex::{dump, report, Scanner};

#[derive(Debug)]
pub struct Repl {
    comments: bool,
}

impl Repl {
    pub const fn new(comments: bool) -> Self {
        Self { comments }
    }

    /// Each input line is scanned on its own.
    pub fn rep(&mut self, input: &str) -> io::Result<()> {
        let (tokens, errors) = Scanner::new(input).into_parts();

        dump(&mut io::stdout().lock(), &tokens, self.comments)?;
        for e in &errors {
            report("<stdin>", input, e)?;
        }

        Ok(())
    }
}
