use crate::{
    config::{OptionOverrides, load_condition, resolve_options},
    error::CliError,
};
use clap::Parser;
use commands::Commands;
use planner::Compiler;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "sqlcond",
    version = "0.1.0",
    about = "Typed SQL condition compiler"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level used when RUST_LOG is not set"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logger
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compile {
            input,
            options,
            dialect,
            not_in,
            or_join,
            params,
            json,
            output,
        } => {
            let overrides = OptionOverrides {
                dialect,
                not_in,
                or_join,
            };
            let text = compile_request(&input, options.as_deref(), overrides, params, json).await?;
            output::emit(text, output).await?;
        }
        Commands::Check { values, json } => {
            let text = output::format_checks(&values, json)?;
            output::emit(text, None).await?;
        }
    }

    Ok(())
}

/// Resolves options, loads the condition tree and renders it for output.
async fn compile_request(
    input: &str,
    options: Option<&str>,
    overrides: OptionOverrides,
    params: bool,
    json: bool,
) -> Result<String, CliError> {
    let options = resolve_options(options, overrides).await?;
    let cond = load_condition(input).await?;

    info!(
        and = cond.and.len(),
        or = cond.or.len(),
        dialect = %options.dialect,
        params,
        "compiling condition tree"
    );

    let compiler = Compiler::new(options);
    if params {
        output::format_params(&compiler.compile_params(&cond)?, json)
    } else {
        output::format_fragments(&compiler.compile(&cond)?, json)
    }
}
