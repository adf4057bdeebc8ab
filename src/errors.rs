use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtSeqError {
    #[error("File '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("FASTA format error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("Unknown amino acid '{residue}' at position {position}")]
    UnknownResidue { residue: char, position: usize },

    #[error("Sequence '{identifier}': {source}")]
    Sequence {
        identifier: String,
        #[source]
        source: Box<ProtSeqError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid motif pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ProtSeqError>;

impl ProtSeqError {
    /// Data-quality problems with the input, as opposed to operational ones
    /// (missing files, failed writes).
    pub fn is_data_error(&self) -> bool {
        match self {
            ProtSeqError::Parse { .. } | ProtSeqError::UnknownResidue { .. } => true,
            ProtSeqError::Sequence { source, .. } => source.is_data_error(),
            _ => false,
        }
    }

    /// Attributes an error to the sequence it came from.
    pub fn for_sequence(self, identifier: &str) -> Self {
        ProtSeqError::Sequence {
            identifier: identifier.to_string(),
            source: Box::new(self),
        }
    }

    /// The identifier of the sequence this error belongs to, if any.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            ProtSeqError::Sequence { identifier, .. } => Some(identifier),
            _ => None,
        }
    }
}
