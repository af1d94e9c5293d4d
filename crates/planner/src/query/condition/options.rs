use crate::query::dialect::{Dialect, MySql, Postgres};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Knobs for [`Compiler`](super::Compiler). The defaults reproduce the
/// historical output byte for byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    pub dialect: DialectKind,
    pub not_in: NotInKeyword,
    pub or_join: OrJoin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialectKind {
    #[default]
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "postgres", alias = "pg")]
    Postgres,
}

impl DialectKind {
    pub fn dialect(&self) -> Box<dyn Dialect> {
        match self {
            DialectKind::MySql => Box::new(MySql),
            DialectKind::Postgres => Box::new(Postgres),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialectKind::MySql => write!(f, "mysql"),
            DialectKind::Postgres => write!(f, "postgres"),
        }
    }
}

impl FromStr for DialectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(DialectKind::MySql),
            "postgres" | "postgresql" | "pg" => Ok(DialectKind::Postgres),
            other => Err(format!("unknown dialect '{other}' (expected mysql or postgres)")),
        }
    }
}

/// Keyword emitted for the negated set-membership operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotInKeyword {
    /// `NIN`, which no SQL engine accepts. Kept as the default so existing
    /// callers see unchanged output.
    #[default]
    Nin,
    NotIn,
}

impl NotInKeyword {
    pub fn keyword(&self) -> &'static str {
        match self {
            NotInKeyword::Nin => "NIN",
            NotInKeyword::NotIn => "NOT IN",
        }
    }
}

impl fmt::Display for NotInKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotInKeyword::Nin => write!(f, "nin"),
            NotInKeyword::NotIn => write!(f, "not-in"),
        }
    }
}

impl FromStr for NotInKeyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nin" => Ok(NotInKeyword::Nin),
            "not-in" | "not_in" | "not in" => Ok(NotInKeyword::NotIn),
            other => Err(format!("unknown not-in keyword '{other}' (expected nin or not-in)")),
        }
    }
}

/// Separator placed between the fragments of the OR group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrJoin {
    /// Joins the OR group with ` AND `, exactly like the AND group.
    #[default]
    And,
    Or,
}

impl OrJoin {
    pub fn separator(&self) -> &'static str {
        match self {
            OrJoin::And => " AND ",
            OrJoin::Or => " OR ",
        }
    }
}

impl fmt::Display for OrJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrJoin::And => write!(f, "and"),
            OrJoin::Or => write!(f, "or"),
        }
    }
}

impl FromStr for OrJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(OrJoin::And),
            "or" => Ok(OrJoin::Or),
            other => Err(format!("unknown or-group join '{other}' (expected and or or)")),
        }
    }
}
