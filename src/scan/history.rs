use super::Token;

/// Tokens produced so far plus a replay cursor over them.
///
/// `consumed` counts the tokens handed out by [`History::advance`]; the
/// current token is the last one handed out, and it never drops below the
/// first token once that has been handed out. `overrun` is set when the
/// caller asked for a token past the end, which empties the current token
/// until the next successful advance or a retreat.
#[derive(Debug, Default)]
pub(crate) struct History {
    tokens: Vec<Token>,
    consumed: usize,
    overrun: bool,
}

impl History {
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Whether every produced token has already been handed out.
    pub fn is_drained(&self) -> bool {
        self.consumed == self.tokens.len()
    }

    /// Hands out the next token if one has been produced.
    pub fn advance(&mut self) -> bool {
        if self.is_drained() {
            self.overrun = true;
            return false;
        }

        self.consumed += 1;
        self.overrun = false;
        true
    }

    /// Steps back one token. The first token cannot be stepped past, but
    /// after an overrun the last token becomes current again.
    pub fn retreat(&mut self) -> bool {
        if self.overrun && self.consumed > 0 {
            self.overrun = false;
            return true;
        }

        if self.consumed <= 1 {
            return false;
        }

        self.consumed -= 1;
        true
    }

    pub fn current(&self) -> Option<&Token> {
        if self.overrun {
            return None;
        }

        self.consumed
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
    }
}

#[cfg(test)]
mod tests {
    use smol_str::SmolStr;

    use super::*;
    use crate::scan::TokenKind;
    use crate::span::Span;

    fn value(s: &str) -> Token {
        Token::new(TokenKind::Value, SmolStr::new(s), Span::default())
    }

    fn filled(values: &[&str]) -> History {
        let mut history = History::default();
        for v in values {
            history.push(value(v));
        }
        history
    }

    #[test]
    fn empty_history_has_no_current() {
        let mut history = History::default();

        assert!(history.current().is_none());
        assert!(!history.advance());
        assert!(history.current().is_none());
    }

    #[test]
    fn advance_walks_forward() {
        let mut history = filled(&["a", "b"]);

        assert!(history.advance());
        assert_eq!(history.current().map(Token::value), Some("a"));
        assert!(history.advance());
        assert_eq!(history.current().map(Token::value), Some("b"));
        assert!(history.is_drained());
        assert!(!history.advance());
        assert!(history.current().is_none());
    }

    #[test]
    fn retreat_saturates_at_start() {
        let mut history = filled(&["a"]);

        assert!(!history.retreat());
        assert!(history.advance());
        assert!(!history.retreat());
        assert_eq!(history.current().map(Token::value), Some("a"));
        assert!(!history.advance());
        assert!(history.retreat());
        assert_eq!(history.current().map(Token::value), Some("a"));
        assert!(!history.retreat());
    }

    #[test]
    fn retreat_after_running_off_the_end() {
        let mut history = filled(&["a", "b"]);

        while history.advance() {}
        assert!(history.current().is_none());

        assert!(history.retreat());
        assert_eq!(history.current().map(Token::value), Some("b"));
        assert!(history.retreat());
        assert_eq!(history.current().map(Token::value), Some("a"));
    }

    #[test]
    fn push_after_overrun_is_reachable() {
        let mut history = filled(&["a"]);

        assert!(history.advance());
        assert!(history.is_drained());
        assert!(!history.advance());
        history.push(value("b"));
        assert!(!history.is_drained());
        assert!(history.advance());
        assert_eq!(history.current().map(Token::value), Some("b"));
    }
}
