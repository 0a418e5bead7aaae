use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Faults detected while assembling the virtual filesystem tree.
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum FsError {
    #[error("duplicate entry `{name}` in directory `{directory}`")]
    #[diagnostic(code(folioshell::fs::duplicate_entry))]
    DuplicateEntry { directory: String, name: String },

    #[error("invalid entry name `{0}`")]
    #[diagnostic(
        code(folioshell::fs::invalid_name),
        help("names must be non-empty, must not be `.` or `..` and must not contain `/`")
    )]
    InvalidName(String),

    #[error("the root node must be a directory named `/`, found `{0}`")]
    #[diagnostic(code(folioshell::fs::invalid_root))]
    InvalidRoot(String),
}

/// A line of shell input that could not be split into words.
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum InputError {
    #[error("unterminated quote, {expected}")]
    #[diagnostic(
        code(folioshell::input::unterminated_quote),
        help("close the quote or remove it")
    )]
    UnterminatedQuote {
        #[source_code]
        input: String,

        /// From the opening quote to the end of the line.
        #[label("quote opened here")]
        span: SourceSpan,

        expected: String,
    },
}
