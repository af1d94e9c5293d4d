use crate::error::CliError;
use model::check::{is_decimal, is_numeric};
use planner::{Fragments, ParamFragments};
use serde_json::json;

pub fn format_fragments(fragments: &Fragments, as_json: bool) -> Result<String, CliError> {
    if as_json {
        let value = json!({
            "and": fragments.and,
            "or": fragments.or,
            "where": fragments.where_clause(),
        });
        return serde_json::to_string_pretty(&value).map_err(CliError::JsonSerialize);
    }

    Ok(format!(
        "{:<7}{}\n{:<7}{}\n{:<7}{}",
        "and:",
        fragments.and,
        "or:",
        fragments.or,
        "where:",
        fragments.where_clause()
    ))
}

pub fn format_params(fragments: &ParamFragments, as_json: bool) -> Result<String, CliError> {
    if as_json {
        let value = json!({
            "and": fragments.and,
            "or": fragments.or,
            "where": fragments.where_clause(),
            "params": fragments.params,
        });
        return serde_json::to_string_pretty(&value).map_err(CliError::JsonSerialize);
    }

    let mut out = format!(
        "{:<7}{}\n{:<7}{}\n{:<7}{}\nparams:",
        "and:",
        fragments.and,
        "or:",
        fragments.or,
        "where:",
        fragments.where_clause()
    );
    for (i, param) in fragments.params.iter().enumerate() {
        out.push_str(&format!("\n  {:>3}  {}", i + 1, param.to_sql()));
    }
    Ok(out)
}

pub fn format_checks(values: &[String], as_json: bool) -> Result<String, CliError> {
    if as_json {
        let rows: Vec<_> = values
            .iter()
            .map(|v| json!({ "value": v, "numeric": is_numeric(v), "decimal": is_decimal(v) }))
            .collect();
        return serde_json::to_string_pretty(&rows).map_err(CliError::JsonSerialize);
    }

    let width = values.iter().map(|v| v.len()).max().unwrap_or(0).max(5);
    let mut out = format!("{:<width$}  {:<8} {}", "value", "numeric", "decimal");
    for value in values {
        out.push_str(&format!(
            "\n{:<width$}  {:<8} {}",
            value,
            is_numeric(value),
            is_decimal(value)
        ));
    }
    Ok(out)
}

pub async fn emit(text: String, output: Option<String>) -> Result<(), CliError> {
    match output {
        Some(path) => tokio::fs::write(path, format!("{text}\n")).await?,
        None => println!("{text}"),
    }
    Ok(())
}
