//! CLI entry point for post-layout

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "post-layout")]
#[command(version)]
#[command(about = "Render blog post pages with SEO, social card and JSON-LD metadata", long_about = None)]
struct Cli {
    /// Set the blog directory (defaults to current directory)
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
    /// Render a single post file
    #[command(alias = "r")]
    Render {
        /// Markdown post with front-matter
        file: PathBuf,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render every post into the public directory
    #[command(alias = "b")]
    Build,

    /// List site content
    List {
        /// Type of content to list (posts, authors, tags)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Remove the public directory
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "post_layout=debug,info"
    } else {
        "post_layout=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine blog directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let blog = post_layout::Blog::new(&base_dir)?;

    match cli.command {
        Commands::Render { file, output } => {
            tracing::info!("Rendering {:?}", file);
            post_layout::commands::render::run(&blog, &file, output.as_deref())?;
        }

        Commands::Build => {
            tracing::info!("Building posts in {:?}", blog.content_dir);
            let summary = blog.build()?;
            println!("Generated {} posts", summary.written.len());
        }

        Commands::List { r#type } => {
            post_layout::commands::list::run(&blog, &r#type)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
