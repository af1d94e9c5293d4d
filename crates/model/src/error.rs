use std::fmt;
use thiserror::Error;

/// Stable, machine-readable classification shared by every error raised
/// while reading or compiling a condition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The tree itself is malformed (e.g. the AND group is empty).
    Structural,
    /// A leaf names a value type outside `numeric`, `string`, `bool`.
    Type,
    /// A leaf names an operator that does not exist.
    Operator,
    /// A known operator was used against a value type it does not support.
    Compatibility,
    /// A value the operator needs is absent or empty.
    MissingValue,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Structural => write!(f, "structural"),
            ErrorKind::Type => write!(f, "type"),
            ErrorKind::Operator => write!(f, "operator"),
            ErrorKind::Compatibility => write!(f, "compatibility"),
            ErrorKind::MissingValue => write!(f, "missing_value"),
        }
    }
}

/// Errors raised when untrusted tags are turned into the closed model enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid data type '{0}'")]
    InvalidDataType(String),

    #[error("invalid operator '{0}'")]
    InvalidOperator(String),

    /// Same as the variants above, scoped to the column being read.
    #[error("[{col}] {source}")]
    Column {
        col: String,
        #[source]
        source: Box<ModelError>,
    },
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::InvalidDataType(_) => ErrorKind::Type,
            ModelError::InvalidOperator(_) => ErrorKind::Operator,
            ModelError::Column { source, .. } => source.kind(),
        }
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            ModelError::Column { col, .. } => Some(col),
            _ => None,
        }
    }

    pub(crate) fn in_column(self, col: &str) -> Self {
        ModelError::Column {
            col: col.to_string(),
            source: Box::new(self),
        }
    }
}
