//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::render::RenderOptions;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Preview tooling for a personal website's catalog, cards and content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries
    List {
        /// Type of entry to list (articles, projects)
        #[arg(default_value = "articles")]
        r#type: String,

        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a content file to HTML
    Convert {
        /// Content file, or `-` for stdin
        file: PathBuf,
    },

    /// Render a page on an in-memory surface and print it
    #[command(alias = "r")]
    Render {
        /// Page kind (home, blog, projects, article, project)
        page: String,

        /// Id of the article or project for detail pages
        #[arg(short, long)]
        id: Option<String>,

        /// Simulate the window scrolled to this position
        #[arg(short, long)]
        scroll: Option<f64>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List { r#type, json } => {
            let folio = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&folio, &r#type, json)?;
        }

        Commands::Convert { file } => {
            let path = if file.is_absolute() || file == PathBuf::from("-") {
                file
            } else {
                base_dir.join(file)
            };
            folio::commands::convert::run(&path)?;
        }

        Commands::Render { page, id, scroll } => {
            let folio = folio::Folio::new(&base_dir)?;
            tracing::debug!("Rendering {} page", page);
            let options = RenderOptions { id, scroll };
            folio::commands::render::run(&folio, &page, &options).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
