//! Authors command implementation
//!
//! Converts the Jekyll author listing into Docusaurus author records.

use console::Style;

use crate::authors::{Registry, build_registry, load_listing, output};
use crate::cli::{AuthorsArgs, AuthorsFormat};
use crate::config::MigrationConfig;
use crate::error::Result;

use super::RunOptions;

/// Run authors command
pub fn run(config: &MigrationConfig, options: RunOptions, args: AuthorsArgs) -> Result<()> {
    let listing = load_listing(&config.source_authors_path())?;
    let registry = build_registry(&listing);

    if registry.is_empty() {
        println!("No authors found in {}.", config.source_authors_path().display());
        return Ok(());
    }

    let destination = match args.format {
        AuthorsFormat::Files => {
            let dir = config.authors_dir_path();
            output::write_records(&registry, &dir, options.dry_run)?;
            if !options.dry_run {
                output::write_index_js(&dir)?;
            }
            dir
        }
        AuthorsFormat::Registry => {
            let path = config.authors_registry_path();
            output::write_registry(&registry, &path, options.dry_run)?;
            path
        }
    };

    print_registry(&registry);
    let verb = if options.dry_run { "Would write" } else { "Wrote" };
    println!(
        "{verb} {} authors to {}",
        registry.len(),
        Style::new().bold().apply_to(destination.display())
    );
    Ok(())
}

fn print_registry(registry: &Registry) {
    for record in registry.records() {
        println!(
            "  {} {}",
            Style::new().cyan().bold().apply_to(&record.id),
            record.name
        );
    }
}
