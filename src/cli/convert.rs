use clap::Parser;
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Convert every post under <source>/_posts:\n    blogshift convert\n\n\
                  Convert posts from another directory:\n    blogshift convert --posts drafts\n\n\
                  Preview without writing:\n    blogshift convert --dry-run -v")]
pub struct ConvertArgs {
    /// Posts directory (defaults to <source>/<posts_dir>)
    #[arg(long)]
    pub posts: Option<PathBuf>,
}
