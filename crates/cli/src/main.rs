mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use frontlint_core::config::{ConfigLoader, ReportFormat, default_config_path};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "frontlint", version, about = "Check markdown frontmatter against the article schema")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the frontmatter of one or more markdown files
    Check(CheckArgs),

    /// Print the frontmatter schema
    Schema,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Markdown files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (defaults to the config's lint.format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Files contain bare frontmatter YAML, already split from the body
    #[arg(long)]
    pub pre_split: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per error
    Text,
    /// JSON array of per-file reports
    Json,
    /// Only the paths of failing files
    Quiet,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => Self::Text,
            ReportFormat::Json => Self::Json,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let rc = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            if cli.config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(2);
        }
    };

    logging::init(&rc.logging)?;
    tracing::debug!(path = %rc.path.display(), from_file = rc.from_file, "resolved config");

    match cli.command {
        Commands::Check(args) => {
            let code = cmd::check::run(&rc, args)?;
            logging::shutdown();
            std::process::exit(code);
        }
        Commands::Schema => cmd::schema::run(),
    }

    Ok(())
}
