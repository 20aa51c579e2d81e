use thiserror::Error;

#[derive(Debug, Error)]
pub enum SrtEditError {
    #[error("Invalid edit '{0}', expected ID=TEXT")]
    InvalidEdit(String),
    #[error("Found {0} problem(s) in the subtitle file")]
    LintFailed(usize),
    #[error("Refusing to overwrite the input file '{0}', use --output to replace it")]
    WouldOverwriteInput(String),
}
