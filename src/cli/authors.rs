use clap::{Parser, ValueEnum};

/// Output layout for converted authors
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthorsFormat {
    /// One `<id>.json` per author plus `index.js`
    Files,
    /// A single `authors.yml` with socials
    #[default]
    Registry,
}

/// Arguments for the authors command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write blog/authors.yml:\n    blogshift authors\n\n\
                  Write per-author JSON files and index.js:\n    blogshift authors --format files")]
pub struct AuthorsArgs {
    /// Output layout
    #[arg(long, value_enum, default_value_t = AuthorsFormat::Registry)]
    pub format: AuthorsFormat,
}
