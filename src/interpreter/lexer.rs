use logos::Logos;

use crate::{
    error::SyntaxError,
    interpreter::token::{Token, TokenKind, TokenSource},
};

/// The raw lexeme table of the language.
///
/// Logos drives this enum over the source text. It stays private: the rest
/// of the crate works with [`TokenKind`], whose end-of-input member a
/// derived lexer cannot produce on its own.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    /// Numeric literal lexemes, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Line breaks; skipped, but tracked so positions stay accurate.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Lexeme {
    /// Maps a produced lexeme onto the public token vocabulary.
    fn kind(self) -> TokenKind {
        match self {
            Self::Number(value) => TokenKind::Number(value),
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Comment | Self::NewLine | Self::Ignored => {
                unreachable!("skipped lexemes are never produced")
            },
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks where the current line starts so every token can be stamped with
/// a 1-based line and column for diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// The byte offset at which the current line starts.
    pub line_start: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid literal.
/// - `None`: If the token slice does not parse as a number.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A streaming lexer over a source string.
///
/// Implements [`TokenSource`] by pulling one lexeme at a time from the
/// Logos machinery and stamping it with its line and column. Once the
/// source is exhausted, every further call yields an end-of-input token
/// positioned just past the last character.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Lexeme>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Lexeme::lexer_with_extras(source,
                                                LexerExtras { line:       1,
                                                              line_start: 0, }) }
    }

    /// The 1-based line and column of the most recent lexeme (or of the end
    /// of the input once the source is exhausted).
    fn position(&self) -> (usize, usize) {
        let start = self.inner.span().start;
        (self.inner.extras.line, start - self.inner.extras.line_start + 1)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        let Some(result) = self.inner.next() else {
            let (line, column) = self.position();
            return Ok(Token::new(TokenKind::Eof, line, column));
        };
        let (line, column) = self.position();
        match result {
            Ok(lexeme) => Ok(Token::new(lexeme.kind(), line, column)),
            Err(()) => Err(SyntaxError::UnrecognizedCharacter { text: self.inner
                                                                          .slice()
                                                                          .to_string(),
                                                                line,
                                                                column }),
        }
    }
}

/// Tokenizes an entire source string up front.
///
/// Stops at the end of the input; the end-of-input token itself is not part
/// of the result. Fails on the first unrecognized character.
///
/// # Errors
/// Returns a [`SyntaxError`] if the source contains a character sequence
/// that starts no token.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::tokenize, token::Tag};
///
/// let tokens = tokenize("1 + 2;").unwrap();
/// let tags: Vec<Tag> = tokens.iter().map(|t| t.kind.tag()).collect();
/// assert_eq!(tags, vec![Tag::Number, Tag::Plus, Tag::Number, Tag::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}
