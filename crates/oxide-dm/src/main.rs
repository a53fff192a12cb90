//! oxide-dm CLI
//!
//! Command-line tool for inspecting what the DM dialect produces.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_dm::{raw, DmConfig, DmDialect};
use oxide_dm_core::{Dialect, Field, Schema, SqlValue};

/// DM dialect tooling: SQL rewriting, type mapping and DDL preview.
#[derive(Parser)]
#[command(name = "oxide-dm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file for the dialect.
    #[arg(short, long, env = "OXIDE_DM_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite backtick identifiers in SQL text.
    Rewrite {
        /// SQL file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Print the DM column type of each field.
    Types {
        /// JSON file holding an array of fields.
        file: PathBuf,
    },

    /// Print CREATE TABLE for a list of fields.
    Ddl {
        /// JSON file holding an array of fields.
        file: PathBuf,

        /// Table name.
        #[arg(short, long)]
        table: String,
    },

    /// Show SQL with its values inlined.
    Explain {
        /// SQL text with `?` placeholders.
        sql: String,

        /// Values, as JSON (`1`, `true`, `null`, `"text"`) or bare text.
        values: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = load_dialect(cli.config.as_deref())?;

    match cli.command {
        Commands::Rewrite { file } => {
            let sql = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut sql = String::new();
                    std::io::stdin().read_to_string(&mut sql)?;
                    sql
                }
            };
            println!("{}", raw::rewrite_backticks(sql.trim_end()));
        }

        Commands::Types { file } => {
            for field in read_fields(&file)? {
                println!("{} {}", field.name, dialect.data_type_of(&field));
            }
        }

        Commands::Ddl { file, table } => {
            let schema = Schema::new(table, read_fields(&file)?);
            info!("Generating DDL for {} fields", schema.fields.len());
            println!("{};", dialect.create_table(&schema));
        }

        Commands::Explain { sql, values } => {
            let values: Vec<SqlValue> = values.iter().map(String::as_str).map(parse_value).collect();
            println!("{}", dialect.explain(&sql, &values));
        }
    }

    Ok(())
}

fn load_dialect(path: Option<&Path>) -> anyhow::Result<DmDialect> {
    let Some(path) = path else {
        return Ok(DmDialect::default());
    };
    debug!("Loading configuration from {}", path.display());
    let config = DmConfig::from_json_file(path)?;
    Ok(DmDialect::new(config)?)
}

fn read_fields(path: &Path) -> anyhow::Result<Vec<Field>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn parse_value(input: &str) -> SqlValue {
    serde_json::from_str(input).unwrap_or_else(|_| SqlValue::Text(input.to_string()))
}
