//! Defines the AST for a single validated filter condition.

use serde::{Deserialize, Serialize};

/// A validated leaf condition, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `col = v`, `col > v`, ...
    Compare {
        col: Ident,
        op: BinaryOperator,
        value: Literal,
    },

    /// `col [NOT] BETWEEN low AND high`
    Between {
        col: Ident,
        negated: bool,
        low: Literal,
        high: Literal,
    },

    /// `col [NOT] LIKE '%needle%'`
    Like {
        col: Ident,
        negated: bool,
        needle: String,
    },

    /// `col IN (...)` and its negation.
    InList {
        col: Ident,
        negated: bool,
        values: Vec<Literal>,
    },

    /// `col IS [NOT] NULL`
    IsNull { col: Ident, negated: bool },
}

/// A column name. Trusted: it is quoted but never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
}

impl BinaryOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
        }
    }
}

/// A value spliced into a fragment, or bound as a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    /// A base-10 number, kept in its textual form.
    Number(String),
    Bool(bool),
    Text(String),
}

impl Literal {
    /// SQL text for inline rendering. Text is single-quoted with embedded
    /// quotes doubled; numbers and booleans are bare.
    pub fn to_sql(&self) -> String {
        match self {
            Literal::Number(n) => n.clone(),
            Literal::Bool(b) => b.to_string(),
            Literal::Text(s) => format!("'{}'", model::core::utils::escape_sql_string(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_to_sql() {
        assert_eq!(Literal::Number("18".into()).to_sql(), "18");
        assert_eq!(Literal::Bool(false).to_sql(), "false");
        assert_eq!(Literal::Text("bob".into()).to_sql(), "'bob'");
        assert_eq!(Literal::Text("it's".into()).to_sql(), "'it''s'");
    }

    #[test]
    fn test_literal_serialization() {
        let json = serde_json::to_string(&Literal::Number("1.5".into())).unwrap();
        assert_eq!(json, r#"{"number":"1.5"}"#);
        let json = serde_json::to_string(&Literal::Bool(true)).unwrap();
        assert_eq!(json, r#"{"bool":true}"#);
    }
}
