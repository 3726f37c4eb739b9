/// Configuration errors.
///
/// Defines the failures that prevent an evaluation run from being set up at
/// all, such as an input file that cannot be read. These are raised before
/// any token is consumed.
pub mod config_error;
/// Syntax errors.
///
/// Defines all error types that can occur while tokenizing and parsing a
/// program. Every syntax error carries the grammar-level expectation and the
/// source position of the offending token, so the caller can locate the
/// malformed input.
pub mod syntax_error;

pub use config_error::ConfigError;
pub use syntax_error::SyntaxError;
