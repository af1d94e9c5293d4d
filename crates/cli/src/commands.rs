use clap::Subcommand;
use planner::query::condition::{DialectKind, NotInKeyword, OrJoin};

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a JSON condition tree into WHERE fragments
    Compile {
        #[arg(
            long,
            default_value = "-",
            help = "Condition tree JSON file path, or '-' for stdin"
        )]
        input: String,

        #[arg(long, help = "JSON file with compiler options")]
        options: Option<String>,

        #[arg(
            long,
            env = "SQLCOND_DIALECT",
            help = "Identifier quoting and placeholder style: mysql or postgres"
        )]
        dialect: Option<DialectKind>,

        #[arg(long, help = "Keyword for the negated set operator: nin or not-in")]
        not_in: Option<NotInKeyword>,

        #[arg(long, help = "Separator between OR group leaves: and or or")]
        or_join: Option<OrJoin>,

        #[arg(
            long,
            help = "Render placeholders instead of inline values and print the bind parameters"
        )]
        params: bool,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,

        #[arg(
            long,
            help = "If specified, writes the result to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Classify values as numeric / decimal
    Check {
        /// Values to classify
        #[arg(required = true)]
        values: Vec<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
}
