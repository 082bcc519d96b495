use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use condition_datalog::{
    config,
    host::{Host, StaticCatalog},
    Condition, ToDatalog, Translator,
};

/// Condition Datalog - translate query-builder conditions into Datalog clauses
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file (defaults to CONDITION_DATALOG_* environment variables)
    #[arg(long, global = true)]
    config: Option<String>,

    /// YAML file with known page titles and user display names
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate one condition into clauses
    Translate {
        /// Logic variable the condition constrains
        #[arg(long)]
        source: String,

        /// Relation text, e.g. "has child"
        #[arg(long)]
        relation: String,

        /// Target variable or literal
        #[arg(long, default_value = "")]
        target: String,

        /// Negate the condition
        #[arg(long)]
        negate: bool,

        /// Identifier of the condition row
        #[arg(long, default_value = "")]
        uid: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List relation labels, longest first
    Labels,
    /// List suggested targets for a relation
    Options {
        #[arg(long)]
        source: String,

        #[arg(long)]
        relation: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Datalog,
}

impl From<&Cli> for config::CliConfig {
    fn from(cli: &Cli) -> Self {
        config::CliConfig {
            config_file: cli.config.clone(),
            catalog_file: cli.catalog.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logger - defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = config::TranslatorConfig::from_cli((&cli).into())
        .context("Configuration error")?;

    let catalog = match &config.catalog_file {
        Some(path) => StaticCatalog::from_yaml_file(path)?,
        None => StaticCatalog::default(),
    };
    let translator = Translator::from_config(&config, Host::with_catalog(catalog));

    match cli.command {
        Command::Translate {
            source,
            relation,
            target,
            negate,
            uid,
            format,
        } => {
            let condition = Condition {
                source,
                relation,
                target,
                negate,
                uid,
            };
            let clauses = translator.condition_to_datalog(&condition)?;
            if clauses.is_empty() {
                log::info!("Relation '{}' produced no clauses", condition.relation);
            }
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&clauses)?),
                Format::Datalog => println!("{}", clauses.to_datalog()),
            }
        }
        Command::Labels => {
            for label in translator.labels() {
                println!("{}", label);
            }
        }
        Command::Options { source, relation } => {
            for option in translator.target_options(&source, &relation)? {
                println!("{}", option);
            }
        }
    }

    Ok(())
}
