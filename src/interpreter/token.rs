use crate::error::SyntaxError;

/// A single token of the input stream.
///
/// Tokens are immutable and consumed exactly once, in input order. The
/// position fields are 1-based and point at the first character of the
/// token, so error messages can send the user straight to the offending
/// spot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// The grammar category of the token, carrying the numeric payload for
    /// number literals.
    pub kind:   TokenKind,
    /// The source line the token starts on.
    pub line:   usize,
    /// The source column the token starts on.
    pub column: usize,
}

impl Token {
    /// Creates a token at the given source position.
    #[must_use]
    pub const fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

/// The closed set of token categories the evaluator recognizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A numeric literal and its parsed value.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`, the statement terminator.
    Semicolon,
    /// The end of the input stream.
    Eof,
}

impl TokenKind {
    /// Returns the payload-free tag of this token kind.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::token::{Tag, TokenKind};
    ///
    /// assert_eq!(TokenKind::Number(1.5).tag(), Tag::Number);
    /// assert_eq!(TokenKind::Semicolon.tag(), Tag::Semicolon);
    /// ```
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Number(_) => Tag::Number,
            Self::Plus => Tag::Plus,
            Self::Minus => Tag::Minus,
            Self::Star => Tag::Star,
            Self::Slash => Tag::Slash,
            Self::LParen => Tag::LParen,
            Self::RParen => Tag::RParen,
            Self::Semicolon => Tag::Semicolon,
            Self::Eof => Tag::Eof,
        }
    }
}

/// The discriminant of a token kind.
///
/// Tags describe grammar expectations in error values without dragging
/// payloads along: a rule that wants "any number literal" names
/// `Tag::Number`, never a particular value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// A numeric literal.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// End of input.
    Eof,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Number => "a number",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Semicolon => "';'",
            Self::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// The contract between the evaluator and its token producer.
///
/// A source hands out one token per call, in input order. Once the input is
/// exhausted it reports a token with [`TokenKind::Eof`] on this and every
/// further call, positioned just past the last piece of input it produced.
pub trait TokenSource {
    /// Produces the next token of the input.
    ///
    /// # Errors
    /// Fails when the underlying input cannot be turned into a token, for
    /// example on an unrecognized character.
    fn next_token(&mut self) -> Result<Token, SyntaxError>;
}

/// A token source over an already tokenized program.
///
/// Useful when tokens come from somewhere other than the streaming lexer,
/// for example a fixture replaying a fixed token sequence.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: std::vec::IntoIter<Token>,
    line:   usize,
    column: usize,
}

impl TokenBuffer {
    /// Wraps a token sequence in a source.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens: tokens.into_iter(),
               line: 1,
               column: 1 }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        match self.tokens.next() {
            Some(token) => {
                self.line = token.line;
                self.column = token.column;
                Ok(token)
            },
            None => Ok(Token::new(TokenKind::Eof, self.line, self.column)),
        }
    }
}
