//! typst-mdbook — turn the JSON documentation model of the typst docs into an
//! mdBook.
//!
//! `typst-mdbook <assets> <docs.json> <out>` scaffolds `<out>/book.toml`,
//! copies `<assets>` to `<out>/src/assets`, writes one `README.md` per page
//! under `<out>/src`, and a `SUMMARY.md` listing them.

mod book;
mod config;
mod convert;
mod error;
mod model;
mod page;
mod render;
mod summary;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "typst-mdbook",
    about = "Generate an mdBook of the typst docs from the output of the typst-docs package"
)]
struct Cli {
    /// Directory of static assets copied to src/assets
    asset_source_dir: PathBuf,

    /// JSON documentation tree
    json_source_file: PathBuf,

    /// Output directory for the book
    output_directory: PathBuf,

    /// Worker threads for page generation (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 0)]
    jobs: usize,

    /// Deepest heading level to emit (1-6)
    #[arg(long, default_value_t = config::MARKDOWN_MAX_HEADING)]
    max_heading_level: u8,

    /// What to do with headings nested past --max-heading-level: clamp, error
    #[arg(long, default_value = "clamp")]
    heading_overflow: config::HeadingOverflow,

    /// HTML to markdown converter: pandoc (default), raw
    #[arg(long, default_value = "pandoc")]
    converter: String,

    /// Path to the pandoc executable
    #[arg(long, default_value = "pandoc")]
    pandoc: String,

    /// Book title written to book.toml
    #[arg(long, default_value = "Typst MdBook Docs")]
    title: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    if !(1..=config::MARKDOWN_MAX_HEADING).contains(&cli.max_heading_level) {
        bail!(
            "--max-heading-level must be between 1 and {}",
            config::MARKDOWN_MAX_HEADING
        );
    }
    let headings = config::HeadingConfig {
        max_level: cli.max_heading_level,
        overflow: cli.heading_overflow,
    };
    let build = config::BuildConfig { jobs: cli.jobs };
    let converter = convert::create_converter(&cli.converter, &cli.pandoc)?;

    let src_dir = book::create_book(&cli.output_directory, &cli.title).with_context(|| {
        format!(
            "failed to scaffold book in {}",
            cli.output_directory.display()
        )
    })?;

    let copied = book::copy_assets(&cli.asset_source_dir, &src_dir.join(book::ASSETS_DIR))
        .with_context(|| {
            format!(
                "failed to copy assets from {}",
                cli.asset_source_dir.display()
            )
        })?;
    info!(files = copied, "copied assets");

    let nodes = model::load_nodes(&cli.json_source_file).with_context(|| {
        format!(
            "failed to load documentation from {}",
            cli.json_source_file.display()
        )
    })?;

    let renderer = render::BodyRenderer::new(converter.as_ref(), headings);
    let pages = page::generate(&nodes, &src_dir, &renderer, &build)
        .context("failed to generate markdown pages")?;
    info!(
        pages = pages.iter().map(page::Page::count).sum::<usize>(),
        "book written to {}",
        cli.output_directory.display()
    );

    Ok(())
}
