//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - convert: Convert command arguments
//! - authors: Authors command arguments
//! - fix: Fix command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod authors;
pub mod completions;
pub mod convert;
pub mod fix;

pub use authors::{AuthorsArgs, AuthorsFormat};
pub use completions::CompletionsArgs;
pub use convert::ConvertArgs;
pub use fix::FixArgs;

/// Blogshift - Jekyll to Docusaurus blog migration
///
/// Convert posts and authors from a Jekyll site into a Docusaurus blog, and
/// normalize an existing Docusaurus blog in place.
#[derive(Parser, Debug)]
#[command(
    name = "blogshift",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Migrate a Jekyll blog to Docusaurus",
    long_about = "Blogshift converts Jekyll posts and author listings into a Docusaurus blog: \
                  frontmatter fields are mapped and normalized, images are copied into the \
                  asset directory and links are retargeted to blog routes.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  blogshift authors                       \x1b[90m# Write blog/authors.yml\x1b[0m\n   \
                  blogshift convert -s ../site -t ../docs  \x1b[90m# Convert all posts\x1b[0m\n   \
                  blogshift fix --dry-run                  \x1b[90m# Show what fix would change\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./blogshift.yaml when present)
    #[arg(long, short = 'c', global = true, env = "BLOGSHIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Jekyll site root (overrides source_root)
    #[arg(long, short = 's', global = true, env = "BLOGSHIFT_SOURCE")]
    pub source: Option<PathBuf>,

    /// Docusaurus site root (overrides target_root)
    #[arg(long, short = 't', global = true, env = "BLOGSHIFT_TARGET")]
    pub target: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Run everything but write and copy nothing
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert Jekyll posts into Docusaurus blog posts
    Convert(ConvertArgs),

    /// Convert the Jekyll author listing into Docusaurus authors
    Authors(AuthorsArgs),

    /// Normalize Docusaurus blog posts in place
    Fix(FixArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
