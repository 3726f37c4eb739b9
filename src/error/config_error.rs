#[derive(Debug)]
/// Represents all errors that can occur while setting up an evaluation run.
pub enum ConfigError {
    /// The input file could not be read.
    UnreadableInput {
        /// The path that was supplied.
        path: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreadableInput { path } => write!(f,
                                                     "Failed to read the input file '{path}'. Perhaps this file does not exist?"),
        }
    }
}

impl std::error::Error for ConfigError {}
