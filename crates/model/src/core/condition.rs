use crate::{
    core::{operator::Operator, value_type::ValueType},
    error::ModelError,
};
use serde::{Deserialize, Serialize};

/// A single `column <op> value(s)` test.
///
/// `values` holds one entry for unary comparisons, two for the between
/// operators, any number for set membership and none for null checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColumn")]
pub struct Column {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub col: String,
    pub oper: Operator,
    pub values: Vec<String>,
}

impl Column {
    pub fn new<I, S>(value_type: ValueType, col: &str, oper: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value_type,
            col: col.to_string(),
            oper,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numeric<I, S>(col: &str, oper: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ValueType::Numeric, col, oper, values)
    }

    pub fn string<I, S>(col: &str, oper: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ValueType::String, col, oper, values)
    }

    pub fn boolean<I, S>(col: &str, oper: Operator, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ValueType::Bool, col, oper, values)
    }

    /// Returns the value at `index`, or `None` when the list is too short.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

/// Wire form of a [`Column`], with the type and operator still untyped so
/// that a bad tag can be reported against its column.
#[derive(Debug, Deserialize)]
struct RawColumn {
    #[serde(rename = "type", alias = "Type")]
    value_type: String,
    #[serde(alias = "Col")]
    col: String,
    #[serde(alias = "Oper")]
    oper: String,
    #[serde(default, alias = "Values")]
    values: Vec<String>,
}

impl TryFrom<RawColumn> for Column {
    type Error = ModelError;

    fn try_from(raw: RawColumn) -> Result<Self, Self::Error> {
        let value_type = raw
            .value_type
            .parse::<ValueType>()
            .map_err(|e| e.in_column(&raw.col))?;
        let oper = raw
            .oper
            .parse::<Operator>()
            .map_err(|e| e.in_column(&raw.col))?;

        Ok(Column {
            value_type,
            col: raw.col,
            oper,
            values: raw.values,
        })
    }
}

/// A full filter: every `and` leaf must hold; the `or` leaves form the
/// alternative group the caller combines with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cond {
    #[serde(default, alias = "And")]
    pub and: Vec<Column>,
    #[serde(default, alias = "Or")]
    pub or: Vec<Column>,
}

impl Cond {
    pub fn new(and: Vec<Column>) -> Self {
        Self {
            and,
            or: Vec::new(),
        }
    }

    pub fn with_or(mut self, or: Vec<Column>) -> Self {
        self.or = or;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_deserialize_column() {
        let column: Column = serde_json::from_value(json!({
            "type": "numeric",
            "col": "age",
            "oper": "GT",
            "values": ["18"]
        }))
        .unwrap();

        assert_eq!(column, Column::numeric("age", Operator::Gt, ["18"]));
    }

    #[test]
    fn test_deserialize_accepts_capitalized_fields() {
        let cond: Cond = serde_json::from_value(json!({
            "And": [{ "Type": "string", "Col": "name", "Oper": "LIKE", "Values": ["bob"] }],
            "Or": [{ "Type": "bool", "Col": "active", "Oper": "NNULL" }]
        }))
        .unwrap();

        assert_eq!(cond.and.len(), 1);
        assert_eq!(cond.or[0].oper, Operator::IsNotNull);
        assert!(cond.or[0].values.is_empty());
    }

    #[test]
    fn test_invalid_operator_is_scoped_to_column() {
        let err = serde_json::from_value::<Column>(json!({
            "type": "numeric",
            "col": "age",
            "oper": "ABOUT",
            "values": ["18"]
        }))
        .unwrap_err();

        assert!(err.to_string().contains("[age] invalid operator 'ABOUT'"));
    }

    #[test]
    fn test_invalid_type_is_scoped_to_column() {
        let raw = RawColumn {
            value_type: "date".into(),
            col: "created".into(),
            oper: "EQ".into(),
            values: vec![],
        };
        let err = Column::try_from(raw).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.column(), Some("created"));
    }

    #[test]
    fn test_cond_defaults_to_empty_groups() {
        let cond: Cond = serde_json::from_value(json!({})).unwrap();
        assert!(cond.and.is_empty());
        assert!(cond.or.is_empty());
    }

    #[test]
    fn test_value_lookup() {
        let column = Column::numeric("id", Operator::Between, ["1", "9"]);
        assert_eq!(column.value(1), Some("9"));
        assert_eq!(column.value(2), None);
    }
}
