use model::{
    core::{operator::Operator, value_type::ValueType},
    error::ErrorKind,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An empty AND group would leave the statement without a required filter.
    #[error("missing required condition: the AND group is empty")]
    MissingRequired,

    #[error("[{col}] operator {oper} cannot be used with {value_type} values")]
    Incompatible {
        col: String,
        oper: Operator,
        value_type: ValueType,
    },

    #[error("[{col}] operator {oper} requires a value")]
    MissingValue { col: String, oper: Operator },

    #[error("[{col}] operator {oper} requires a non-empty value")]
    EmptyValue { col: String, oper: Operator },

    #[error("[{col}] operator {oper} requires two non-empty bounds")]
    MissingBounds { col: String, oper: Operator },
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::MissingRequired => ErrorKind::Structural,
            CompileError::Incompatible { .. } => ErrorKind::Compatibility,
            CompileError::MissingValue { .. }
            | CompileError::EmptyValue { .. }
            | CompileError::MissingBounds { .. } => ErrorKind::MissingValue,
        }
    }

    /// The offending column, for every error scoped to a leaf.
    pub fn column(&self) -> Option<&str> {
        match self {
            CompileError::MissingRequired => None,
            CompileError::Incompatible { col, .. }
            | CompileError::MissingValue { col, .. }
            | CompileError::EmptyValue { col, .. }
            | CompileError::MissingBounds { col, .. } => Some(col),
        }
    }
}
