use clap::Parser;
use std::path::PathBuf;

/// Arguments for the fix command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Normalize every post in <target>/blog:\n    blogshift fix\n\n\
                  Normalize another directory:\n    blogshift fix site/news")]
pub struct FixArgs {
    /// Blog directory to normalize (defaults to <target>/<blog_dir>)
    pub dir: Option<PathBuf>,
}
