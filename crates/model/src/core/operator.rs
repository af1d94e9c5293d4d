use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Comparison applied by a single leaf condition.
///
/// The wire tags are the short upper-case names callers send in requests
/// (`EQ`, `NBETWEEN`, `NNULL`, ...). Greater-or-equal is historically tagged
/// `GET`; `GTE` is accepted as an alias when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Between,
    NotBetween,
    Like,
    NotLike,
    IsNull,
    IsNotNull,
    In,
    NotIn,
}

impl Operator {
    pub const ALL: [Operator; 14] = [
        Operator::Eq,
        Operator::NotEq,
        Operator::Gt,
        Operator::GtEq,
        Operator::Lt,
        Operator::LtEq,
        Operator::Between,
        Operator::NotBetween,
        Operator::Like,
        Operator::NotLike,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::In,
        Operator::NotIn,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Operator::Eq => "EQ",
            Operator::NotEq => "NEQ",
            Operator::Gt => "GT",
            Operator::GtEq => "GET",
            Operator::Lt => "LT",
            Operator::LtEq => "LTE",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NBETWEEN",
            Operator::Like => "LIKE",
            Operator::NotLike => "NLIKE",
            Operator::IsNull => "NULL",
            Operator::IsNotNull => "NNULL",
            Operator::In => "IN",
            Operator::NotIn => "NIN",
        }
    }

    /// Number of leading values the operator reads. `None` means the whole
    /// list (set membership).
    pub fn arity(&self) -> Option<usize> {
        match self {
            Operator::IsNull | Operator::IsNotNull => Some(0),
            Operator::Between | Operator::NotBetween => Some(2),
            Operator::In | Operator::NotIn => None,
            _ => Some(1),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "EQ" => Operator::Eq,
            "NEQ" => Operator::NotEq,
            "GT" => Operator::Gt,
            "GET" | "GTE" => Operator::GtEq,
            "LT" => Operator::Lt,
            "LTE" => Operator::LtEq,
            "BETWEEN" => Operator::Between,
            "NBETWEEN" => Operator::NotBetween,
            "LIKE" => Operator::Like,
            "NLIKE" => Operator::NotLike,
            "NULL" => Operator::IsNull,
            "NNULL" => Operator::IsNotNull,
            "IN" => Operator::In,
            "NIN" => Operator::NotIn,
            other => return Err(ModelError::InvalidOperator(other.to_string())),
        };
        Ok(op)
    }
}

impl TryFrom<String> for Operator {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for String {
    fn from(value: Operator) -> Self {
        value.tag().to_string()
    }
}
