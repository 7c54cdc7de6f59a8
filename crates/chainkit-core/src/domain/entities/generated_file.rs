use std::path::PathBuf;

/// A file to materialise, relative to the project root.
///
/// Templates produce these; the writers and the assembler hand them to the
/// filesystem port. The struct carries no business logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
