mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use commands::init::InitOptions;
use commands::show::Format;
use logging::LogLevel;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Site configuration for a personal website", long_about = None)]
struct Cli {
    /// Log verbosity (falls back to FOLIO_LOG, then "warn")
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create a starter site.toml
    Init {
        /// Existing directory to write site.toml into
        path: PathBuf,

        /// Site title
        #[arg(long)]
        title: Option<String>,

        /// Author display name
        #[arg(long)]
        author: Option<String>,

        /// Author contact email
        #[arg(long)]
        email: Option<String>,

        /// Supported locale; repeat for several, the first is the default
        #[arg(long = "locale")]
        locales: Vec<String>,
    },

    /// Validate site configuration
    Validate {
        /// Site directory or path to a site.toml
        path: PathBuf,
    },

    /// Print the normalized configuration
    Show {
        /// Site directory or path to a site.toml
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    match cli.command {
        Command::Init {
            path,
            title,
            author,
            email,
            locales,
        } => {
            let options = InitOptions {
                title,
                author,
                email,
                locales,
            };
            commands::init::run(path, options).await
        }
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Show { path, format } => commands::show::run(path, format).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}
