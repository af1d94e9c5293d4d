use planner::CompileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse the condition tree as JSON: {0}")]
    ConditionParse(#[source] serde_json::Error),

    #[error("Failed to parse the compiler options file: {0}")]
    OptionsParse(#[source] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    #[error("Failed to compile the condition tree: {0}")]
    Compile(#[from] CompileError),
}
