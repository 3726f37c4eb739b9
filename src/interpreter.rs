/// The evaluator module parses token streams and computes results.
///
/// The evaluator is the core engine: it recognizes the statement grammar by
/// recursive descent and evaluates every expression while parsing it, one
/// token of lookahead at a time. There is no intermediate representation;
/// recognition and computation are the same pass.
///
/// # Responsibilities
/// - Drives the token source, one token per grammar decision.
/// - Computes each statement's value during recognition.
/// - Reports syntax errors with the expected tags and source position.
pub mod evaluator;
/// The lexer module tokenizes source code for evaluation.
///
/// The lexer reads raw source text and produces the token stream the
/// evaluator consumes: numeric literals, operators, parentheses, and the
/// statement terminator, each stamped with its source position. Comments
/// and whitespace are skipped here.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Tracks lines and columns across the whole source.
/// - Rejects characters that start no token, with location info.
pub mod lexer;
/// The token module defines the token vocabulary and the source contract.
///
/// This module declares the `Token` type and its kind/tag vocabulary, and
/// the `TokenSource` trait through which the evaluator pulls its input. Any
/// producer of tokens can drive the evaluator: the streaming lexer, or a
/// buffer of pre-tokenized input.
///
/// # Responsibilities
/// - Defines `Token`, `TokenKind`, and the payload-free `Tag` discriminant.
/// - Specifies the pull-based `TokenSource` contract, end-of-input included.
/// - Provides `TokenBuffer` for replaying fixed token sequences.
pub mod token;
