use crate::query::ast::predicate::{Ident, Literal};
use model::core::value_type::ValueType;

pub mod ast;
pub mod condition;
pub mod dialect;
pub mod renderer;

pub fn ident(name: &str) -> Ident {
    Ident {
        name: name.to_string(),
    }
}

/// Builds the literal for an already normalized value of `value_type`.
pub fn literal(value_type: ValueType, value: &str) -> Literal {
    match value_type {
        ValueType::Numeric => Literal::Number(value.to_string()),
        ValueType::String => Literal::Text(value.to_string()),
        ValueType::Bool => Literal::Bool(value == "true"),
    }
}
