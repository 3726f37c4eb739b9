use crate::{
    error::SyntaxError,
    interpreter::token::{Tag, Token, TokenKind, TokenSource},
};

/// The token tags that may begin a factor.
const FACTOR_STARTS: &[Tag] = &[Tag::LParen, Tag::Minus, Tag::Number];

/// A streaming parser-evaluator for arithmetic statement programs.
///
/// The evaluator pulls tokens one at a time from its token source and
/// recognizes the grammar below, computing each statement's value as a side
/// effect of recognition. No syntax tree is built: every grammar rule
/// returns the numeric value of the text it recognized, and the only state
/// is the token source and a single lookahead token.
///
/// Grammar:
/// ```text
///     program := expression ";" { expression ";" }
///     expression := term { ("+" | "-") term }
///     term := factor { ("*" | "/") factor }
///     factor := "(" expression ")"
///             | "-" factor
///             | NUMBER
/// ```
///
/// The binary operators associate to the left and unary minus binds tighter
/// than any of them. Division follows IEEE 754 semantics, so dividing by
/// zero yields an infinity or NaN rather than an error.
pub struct Evaluator<S> {
    source:    S,
    lookahead: Token,
}

impl<S: TokenSource> Evaluator<S> {
    /// Binds the token source and primes the lookahead with its first
    /// token.
    ///
    /// # Errors
    /// Fails if the source rejects its input before a single token is
    /// produced.
    pub fn new(mut source: S) -> Result<Self, SyntaxError> {
        let lookahead = source.next_token()?;
        Ok(Self { source, lookahead })
    }

    /// Evaluates the whole program, reporting one value per statement.
    ///
    /// Statements are evaluated in input order. Each value is handed to
    /// `report` as soon as its expression has been recognized, before the
    /// statement terminator is checked, so every completed expression is
    /// reported even if the program fails right afterwards. At least one
    /// statement is required, and every statement must be terminated, the
    /// last one included.
    ///
    /// # Errors
    /// Returns the first syntax error encountered. Parsing does not resume
    /// after a failure; the whole run aborts.
    pub fn run(&mut self, mut report: impl FnMut(f64)) -> Result<(), SyntaxError> {
        loop {
            let value = self.expression()?;
            report(value);
            self.expect(Tag::Semicolon)?;
            if self.lookahead.kind == TokenKind::Eof {
                return Ok(());
            }
        }
    }

    /// Parses and evaluates an expression.
    ///
    /// Grammar: `expression := term { ("+" | "-") term }`
    ///
    /// The loop makes `+` and `-` left-associative: each operator combines
    /// the running value with the next term, so `8 - 3 - 2` evaluates as
    /// `(8 - 3) - 2`.
    fn expression(&mut self) -> Result<f64, SyntaxError> {
        let mut value = self.term()?;
        loop {
            match self.lookahead.kind {
                TokenKind::Plus => {
                    self.advance()?;
                    value += self.term()?;
                },
                TokenKind::Minus => {
                    self.advance()?;
                    value -= self.term()?;
                },
                _ => return Ok(value),
            }
        }
    }

    /// Parses and evaluates a term.
    ///
    /// Grammar: `term := factor { ("*" | "/") factor }`
    fn term(&mut self) -> Result<f64, SyntaxError> {
        let mut value = self.factor()?;
        loop {
            match self.lookahead.kind {
                TokenKind::Star => {
                    self.advance()?;
                    value *= self.factor()?;
                },
                TokenKind::Slash => {
                    self.advance()?;
                    value /= self.factor()?;
                },
                _ => return Ok(value),
            }
        }
    }

    /// Parses and evaluates a factor.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "(" expression ")"
    ///             | "-" factor
    ///             | NUMBER
    /// ```
    ///
    /// Unary minus is right-recursive, so `- - 5` is a valid factor.
    fn factor(&mut self) -> Result<f64, SyntaxError> {
        match self.lookahead.kind {
            TokenKind::LParen => {
                self.advance()?;
                let value = self.expression()?;
                self.expect(Tag::RParen)?;
                Ok(value)
            },
            TokenKind::Minus => {
                self.advance()?;
                Ok(-self.factor()?)
            },
            TokenKind::Number(value) => {
                self.advance()?;
                Ok(value)
            },
            _ => Err(SyntaxError::ExpectedOneOf { expected: FACTOR_STARTS,
                                                  found:    self.lookahead.kind.tag(),
                                                  line:     self.lookahead.line,
                                                  column:   self.lookahead.column, }),
        }
    }

    /// Consumes the lookahead if it carries the expected tag, advancing to
    /// the next token from the source.
    ///
    /// On a mismatch a syntax error naming the expectation and the
    /// offending token's position is returned and the lookahead is left
    /// untouched.
    fn expect(&mut self, expected: Tag) -> Result<(), SyntaxError> {
        if self.lookahead.kind.tag() == expected {
            self.advance()
        } else {
            Err(SyntaxError::UnexpectedToken { expected,
                                               found: self.lookahead.kind.tag(),
                                               line: self.lookahead.line,
                                               column: self.lookahead.column, })
        }
    }

    /// Replaces the lookahead with the next token from the source.
    fn advance(&mut self) -> Result<(), SyntaxError> {
        self.lookahead = self.source.next_token()?;
        Ok(())
    }
}
