use model::{
    check::{is_decimal, trim_value},
    core::{condition::Column, value_type::ValueType},
};
use tracing::debug;

/// Returns a copy of `column` with every value replaced by a safe token for
/// its type. The input is left untouched.
///
/// - numeric: empty or non-decimal values become `0`; decimals are trimmed
/// - bool: anything but `true` becomes `false`
/// - string: unchanged
pub fn normalize(column: &Column) -> Column {
    let values = column
        .values
        .iter()
        .map(|value| {
            let normalized = normalize_value(column.value_type, value);
            if normalized != *value {
                debug!(
                    col = %column.col,
                    original = %value,
                    normalized = %normalized,
                    "substituted condition value"
                );
            }
            normalized
        })
        .collect();

    Column {
        value_type: column.value_type,
        col: column.col.clone(),
        oper: column.oper,
        values,
    }
}

pub fn normalize_value(value_type: ValueType, value: &str) -> String {
    match value_type {
        ValueType::Numeric => {
            if is_decimal(value) {
                trim_value(value).to_string()
            } else {
                "0".to_string()
            }
        }
        ValueType::Bool => {
            if value == "true" {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        ValueType::String => value.to_string(),
    }
}
