use thiserror::Error;

/// Errors raised by the resume core.
///
/// All three are local, recoverable conditions. Rendering, escaping and
/// summarizing never produce one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeError {
    /// Well-typed input whose shape does not match the data model
    /// (e.g. `experience` is not a sequence, a bullet is not text).
    #[error("Structure error: {0}")]
    Structure(String),

    /// Bytes that are not well-formed structured text.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entry removal at a position the section does not have.
    #[error("Index {index} out of range for {section} (len {len})")]
    Index {
        section: &'static str,
        index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, ResumeError>;
