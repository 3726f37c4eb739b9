use crate::interpreter::token::Tag;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// The lookahead token did not match the tag the grammar requires here.
    UnexpectedToken {
        /// The tag the grammar expected.
        expected: Tag,
        /// The tag that was actually seen.
        found:    Tag,
        /// The source line of the offending token.
        line:     usize,
        /// The source column of the offending token.
        column:   usize,
    },
    /// The lookahead token matched none of the alternatives allowed here.
    ExpectedOneOf {
        /// Every tag the grammar would have accepted.
        expected: &'static [Tag],
        /// The tag that was actually seen.
        found:    Tag,
        /// The source line of the offending token.
        line:     usize,
        /// The source column of the offending token.
        column:   usize,
    },
    /// The lexer hit a character sequence that starts no token.
    UnrecognizedCharacter {
        /// The rejected piece of input.
        text:   String,
        /// The source line of the rejected input.
        line:   usize,
        /// The source column of the rejected input.
        column: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => {
                write!(f,
                       "Error on line {line}, column {column}: expected {expected} but found {found}.")
            },

            Self::ExpectedOneOf { expected,
                                  found,
                                  line,
                                  column, } => {
                write!(f, "Error on line {line}, column {column}: expected one of ")?;
                for (i, tag) in expected.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{tag}")?;
                }
                write!(f, " but found {found}.")
            },

            Self::UnrecognizedCharacter { text, line, column } => {
                write!(f,
                       "Error on line {line}, column {column}: unrecognized character sequence '{text}'.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
