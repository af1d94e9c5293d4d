use crate::error::CliError;
use model::core::condition::Cond;
use planner::query::condition::{CompilerOptions, DialectKind, NotInKeyword, OrJoin};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Flags given on the command line; each one overrides the options file.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionOverrides {
    pub dialect: Option<DialectKind>,
    pub not_in: Option<NotInKeyword>,
    pub or_join: Option<OrJoin>,
}

impl OptionOverrides {
    pub fn apply(self, mut options: CompilerOptions) -> CompilerOptions {
        if let Some(dialect) = self.dialect {
            options.dialect = dialect;
        }
        if let Some(not_in) = self.not_in {
            options.not_in = not_in;
        }
        if let Some(or_join) = self.or_join {
            options.or_join = or_join;
        }
        options
    }
}

/// Loads compiler options from `path`, falling back to the defaults when no
/// file is given, then applies the command-line overrides.
pub async fn resolve_options(
    path: Option<&str>,
    overrides: OptionOverrides,
) -> Result<CompilerOptions, CliError> {
    let base = match path {
        Some(path) => load_options(path).await?,
        None => CompilerOptions::default(),
    };
    let options = overrides.apply(base);
    debug!(?options, "resolved compiler options");
    Ok(options)
}

pub async fn load_options<P: AsRef<Path>>(path: P) -> Result<CompilerOptions, CliError> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(CliError::OptionsParse)
}

/// Reads the condition tree from a file, or from stdin when `input` is `-`.
pub async fn load_condition(input: &str) -> Result<Cond, CliError> {
    let source = if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(input).await?
    };

    serde_json::from_str(&source).map_err(CliError::ConditionParse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::operator::Operator;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_overrides_win() {
        let base = CompilerOptions {
            dialect: DialectKind::Postgres,
            not_in: NotInKeyword::NotIn,
            or_join: OrJoin::Or,
        };
        let overrides = OptionOverrides {
            dialect: Some(DialectKind::MySql),
            ..Default::default()
        };

        let options = overrides.apply(base);
        assert_eq!(options.dialect, DialectKind::MySql);
        assert_eq!(options.not_in, NotInKeyword::NotIn);
        assert_eq!(options.or_join, OrJoin::Or);
    }

    #[tokio::test]
    async fn test_resolve_options_from_file() {
        let file = temp_file(r#"{ "dialect": "postgres", "or_join": "or" }"#);
        let path = file.path().to_str().unwrap();

        let options = resolve_options(
            Some(path),
            OptionOverrides {
                not_in: Some(NotInKeyword::NotIn),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(
            options,
            CompilerOptions {
                dialect: DialectKind::Postgres,
                not_in: NotInKeyword::NotIn,
                or_join: OrJoin::Or,
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_options_defaults() {
        let options = resolve_options(None, OptionOverrides::default()).await.unwrap();
        assert_eq!(options, CompilerOptions::default());
    }

    #[tokio::test]
    async fn test_bad_options_file() {
        let file = temp_file(r#"{ "dialect": "oracle" }"#);
        let err = load_options(file.path()).await.unwrap_err();
        assert!(matches!(err, CliError::OptionsParse(_)));
    }

    #[tokio::test]
    async fn test_load_condition_from_file() {
        let file = temp_file(
            r#"{ "and": [{ "type": "numeric", "col": "age", "oper": "GT", "values": ["18"] }] }"#,
        );
        let cond = load_condition(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(cond.and[0].oper, Operator::Gt);
        assert!(cond.or.is_empty());
    }

    #[tokio::test]
    async fn test_load_condition_reports_bad_operator() {
        let file = temp_file(
            r#"{ "and": [{ "type": "numeric", "col": "age", "oper": "HUGE", "values": ["18"] }] }"#,
        );
        let err = load_condition(file.path().to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, CliError::ConditionParse(_)));
        assert!(err.to_string().contains("[age] invalid operator 'HUGE'"));
    }
}
