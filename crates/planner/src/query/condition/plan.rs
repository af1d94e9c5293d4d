//! Turns a leaf [`Column`] into a validated [`Predicate`], enforcing which
//! operators accept which value types and which values must be present.

use crate::query::{
    ast::predicate::{BinaryOperator, Predicate},
    condition::{error::CompileError, normalize::normalize},
    ident, literal,
};
use model::core::{condition::Column, operator::Operator, value_type::ValueType};

pub fn plan_leaf(column: &Column) -> Result<Predicate, CompileError> {
    let column = normalize(column);
    let vt = column.value_type;
    let col = ident(&column.col);

    let predicate = match column.oper {
        Operator::Eq => compare(&column, BinaryOperator::Eq, present(&column, 0)?),
        Operator::NotEq => compare(&column, BinaryOperator::NotEq, present(&column, 0)?),
        Operator::Gt => {
            reject(&column, &[ValueType::Bool])?;
            compare(&column, BinaryOperator::Gt, non_empty(&column, 0)?)
        }
        Operator::GtEq => {
            reject(&column, &[ValueType::String, ValueType::Bool])?;
            compare(&column, BinaryOperator::GtEq, non_empty(&column, 0)?)
        }
        Operator::Lt => {
            reject(&column, &[ValueType::String, ValueType::Bool])?;
            compare(&column, BinaryOperator::Lt, non_empty(&column, 0)?)
        }
        Operator::LtEq => {
            reject(&column, &[ValueType::String, ValueType::Bool])?;
            compare(&column, BinaryOperator::LtEq, non_empty(&column, 0)?)
        }
        Operator::Between | Operator::NotBetween => {
            reject(&column, &[ValueType::String, ValueType::Bool])?;
            let (low, high) = match (column.value(0), column.value(1)) {
                (Some(low), Some(high)) if !low.is_empty() && !high.is_empty() => (low, high),
                _ => {
                    return Err(CompileError::MissingBounds {
                        col: column.col.clone(),
                        oper: column.oper,
                    });
                }
            };
            Predicate::Between {
                col,
                negated: column.oper == Operator::NotBetween,
                low: literal(vt, low),
                high: literal(vt, high),
            }
        }
        Operator::Like | Operator::NotLike => {
            reject(&column, &[ValueType::Numeric, ValueType::Bool])?;
            let needle = non_empty(&column, 0)?;
            Predicate::Like {
                col,
                negated: column.oper == Operator::NotLike,
                needle: needle.to_string(),
            }
        }
        Operator::In | Operator::NotIn => {
            reject(&column, &[ValueType::Bool])?;
            Predicate::InList {
                col,
                negated: column.oper == Operator::NotIn,
                values: column.values.iter().map(|v| literal(vt, v)).collect(),
            }
        }
        Operator::IsNull | Operator::IsNotNull => Predicate::IsNull {
            col,
            negated: column.oper == Operator::IsNotNull,
        },
    };

    Ok(predicate)
}

fn compare(column: &Column, op: BinaryOperator, value: &str) -> Predicate {
    Predicate::Compare {
        col: ident(&column.col),
        op,
        value: literal(column.value_type, value),
    }
}

fn reject(column: &Column, illegal: &[ValueType]) -> Result<(), CompileError> {
    if illegal.contains(&column.value_type) {
        return Err(CompileError::Incompatible {
            col: column.col.clone(),
            oper: column.oper,
            value_type: column.value_type,
        });
    }
    Ok(())
}

/// The value must exist; an empty string is accepted as-is.
fn present(column: &Column, index: usize) -> Result<&str, CompileError> {
    column.value(index).ok_or_else(|| CompileError::MissingValue {
        col: column.col.clone(),
        oper: column.oper,
    })
}

fn non_empty(column: &Column, index: usize) -> Result<&str, CompileError> {
    match present(column, index)? {
        "" => Err(CompileError::EmptyValue {
            col: column.col.clone(),
            oper: column.oper,
        }),
        value => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::predicate::Literal;

    #[test]
    fn test_gt_rejects_bool_but_accepts_string() {
        let err = plan_leaf(&Column::boolean("flag", Operator::Gt, ["true"])).unwrap_err();
        assert!(matches!(err, CompileError::Incompatible { .. }));

        let predicate = plan_leaf(&Column::string("name", Operator::Gt, ["m"])).unwrap();
        assert_eq!(
            predicate,
            Predicate::Compare {
                col: ident("name"),
                op: BinaryOperator::Gt,
                value: Literal::Text("m".into()),
            }
        );
    }

    #[test]
    fn test_compatibility_is_checked_before_values() {
        let err = plan_leaf(&Column::string("name", Operator::Lt, Vec::<String>::new())).unwrap_err();
        assert!(matches!(err, CompileError::Incompatible { .. }));
    }

    #[test]
    fn test_eq_accepts_empty_string_but_not_missing_value() {
        let predicate = plan_leaf(&Column::string("name", Operator::Eq, [""])).unwrap();
        assert!(matches!(
            predicate,
            Predicate::Compare { value: Literal::Text(ref s), .. } if s.is_empty()
        ));

        let err = plan_leaf(&Column::string("name", Operator::Eq, Vec::<String>::new()))
            .unwrap_err();
        assert_eq!(
            err,
            CompileError::MissingValue {
                col: "name".into(),
                oper: Operator::Eq,
            }
        );
    }

    #[test]
    fn test_each_comparison_keeps_its_operator() {
        let cases = [
            (Operator::Eq, BinaryOperator::Eq),
            (Operator::NotEq, BinaryOperator::NotEq),
            (Operator::Gt, BinaryOperator::Gt),
            (Operator::GtEq, BinaryOperator::GtEq),
            (Operator::Lt, BinaryOperator::Lt),
            (Operator::LtEq, BinaryOperator::LtEq),
        ];
        for (oper, expected) in cases {
            let predicate = plan_leaf(&Column::numeric("age", oper, ["18"])).unwrap();
            assert_eq!(
                predicate,
                Predicate::Compare {
                    col: ident("age"),
                    op: expected,
                    value: Literal::Number("18".into()),
                },
                "{oper}"
            );
        }
    }

    #[test]
    fn test_absent_and_empty_values_are_told_apart() {
        let err = plan_leaf(&Column::string("name", Operator::Like, Vec::<String>::new()))
            .unwrap_err();
        assert_eq!(err.to_string(), "[name] operator LIKE requires a value");

        let err = plan_leaf(&Column::string("name", Operator::Like, [""])).unwrap_err();
        assert_eq!(
            err,
            CompileError::EmptyValue {
                col: "name".into(),
                oper: Operator::Like,
            }
        );
        assert_eq!(err.to_string(), "[name] operator LIKE requires a non-empty value");
    }

    #[test]
    fn test_numeric_empty_value_defaults_to_zero() {
        let predicate = plan_leaf(&Column::numeric("age", Operator::Gt, [""])).unwrap();
        assert!(matches!(
            predicate,
            Predicate::Compare { value: Literal::Number(ref n), .. } if n == "0"
        ));
    }

    #[test]
    fn test_between_needs_two_bounds() {
        let err = plan_leaf(&Column::numeric("price", Operator::Between, ["1"])).unwrap_err();
        assert!(matches!(err, CompileError::MissingBounds { .. }));

        let predicate = plan_leaf(&Column::numeric("price", Operator::NotBetween, ["1", "x"]))
            .unwrap();
        assert_eq!(
            predicate,
            Predicate::Between {
                col: ident("price"),
                negated: true,
                low: Literal::Number("1".into()),
                high: Literal::Number("0".into()),
            }
        );
    }

    #[test]
    fn test_bool_values_become_literals() {
        let predicate = plan_leaf(&Column::boolean("active", Operator::NotEq, ["yes"])).unwrap();
        assert_eq!(
            predicate,
            Predicate::Compare {
                col: ident("active"),
                op: BinaryOperator::NotEq,
                value: Literal::Bool(false),
            }
        );
    }

    #[test]
    fn test_null_checks_ignore_values() {
        let predicate =
            plan_leaf(&Column::boolean("deleted", Operator::IsNotNull, ["whatever"])).unwrap();
        assert_eq!(
            predicate,
            Predicate::IsNull {
                col: ident("deleted"),
                negated: true,
            }
        );
    }
}
