use std::path::PathBuf;

/// Error reported by the binary: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// A required field is missing or has the wrong shape.
///
/// Raised by the encoders; `path` names the offending field inside the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed field `{path}`: {reason}")]
pub struct EncodeError {
    pub path: String,
    pub reason: String,
}

impl EncodeError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Destination capability that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationOp {
    List,
    Delete,
    Write,
}

impl std::fmt::Display for DestinationOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DestinationOp::List => "list",
            DestinationOp::Delete => "delete",
            DestinationOp::Write => "write",
        };
        f.write_str(name)
    }
}

/// Batch-fatal generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Input unreadable, not JSON, or missing the expected top-level shape.
    #[error("failed to load '{path}': {reason}")]
    InputLoad { path: PathBuf, reason: String },

    /// A required field of an otherwise-present record is missing or malformed.
    #[error("record '{id}': {source}")]
    MalformedInput {
        id: String,
        #[source]
        source: EncodeError,
    },

    /// The record's id has no entry in the reference table.
    #[error("record '{id}': no entry in the reference table")]
    MissingReference { id: String },

    /// Purge, write, or listing of the destination failed.
    #[error("destination {op} failed for '{target}': {source}")]
    DestinationIo {
        op: DestinationOp,
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Purge finished but the destination still lists files.
    #[error("destination still holds {remaining} file(s) after purge")]
    PurgeIncomplete { remaining: usize },
}

impl GenerateError {
    pub fn input_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InputLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(id: impl Into<String>, source: EncodeError) -> Self {
        Self::MalformedInput {
            id: id.into(),
            source,
        }
    }

    pub fn destination(op: DestinationOp, target: impl Into<String>, source: std::io::Error) -> Self {
        Self::DestinationIo {
            op,
            target: target.into(),
            source,
        }
    }

    /// Exit code used by the binary for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::InputLoad { .. } => 2,
            GenerateError::MalformedInput { .. } | GenerateError::MissingReference { .. } => 3,
            GenerateError::DestinationIo { .. } | GenerateError::PurgeIncomplete { .. } => 4,
        }
    }
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_names_record_and_field() {
        let err = GenerateError::malformed("j1", EncodeError::new("i18n.title.fontColor", "required field is missing"));
        assert_eq!(
            err.to_string(),
            "record 'j1': malformed field `i18n.title.fontColor`: required field is missing"
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn destination_errors_map_to_exit_code_four() {
        let io = std::io::Error::other("disk full");
        let app: AppError = GenerateError::destination(DestinationOp::Write, "j1.json", io).into();
        assert_eq!(app.exit_code(), 4);
        assert_eq!(app.to_string(), "destination write failed for 'j1.json': disk full");
    }
}
