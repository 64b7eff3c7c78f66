//! Batch driver: discover documents and run one operation over each.
//!
//! A failure in one file never stops the batch. Each file ends up in exactly
//! one [`FileOutcome`]; the [`BatchReport`] aggregates them and decides the
//! exit status.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{MigrateError, Result, fs};
use crate::operations::DocumentOperation;
use crate::ui::ProgressReporter;

/// What happened to one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// New content was written (or would be, on a dry run)
    Written {
        target: PathBuf,
        warnings: Vec<MigrateError>,
    },
    /// Output matched what was already on disk
    Unchanged {
        target: PathBuf,
        warnings: Vec<MigrateError>,
    },
    /// The file has no frontmatter block and was left alone
    Skipped(MigrateError),
    Failed(MigrateError),
}

impl FileOutcome {
    fn from_result(result: Result<crate::operations::Processed>) -> Self {
        match result {
            Ok(processed) if processed.changed => FileOutcome::Written {
                target: processed.target,
                warnings: processed.warnings,
            },
            Ok(processed) => FileOutcome::Unchanged {
                target: processed.target,
                warnings: processed.warnings,
            },
            Err(e @ MigrateError::NoFrontmatter { .. }) => FileOutcome::Skipped(e),
            Err(e) => FileOutcome::Failed(e),
        }
    }

    pub fn warnings(&self) -> &[MigrateError] {
        match self {
            FileOutcome::Written { warnings, .. } | FileOutcome::Unchanged { warnings, .. } => {
                warnings
            }
            FileOutcome::Skipped(_) | FileOutcome::Failed(_) => &[],
        }
    }
}

/// Outcomes of a whole batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Written { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    /// Every warning with the file it belongs to.
    pub fn warnings(&self) -> impl Iterator<Item = (&Path, &MigrateError)> {
        self.outcomes
            .iter()
            .flat_map(|(path, o)| o.warnings().iter().map(move |w| (path.as_path(), w)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &MigrateError)> {
        self.outcomes.iter().filter_map(|(path, o)| match o {
            FileOutcome::Failed(e) => Some((path.as_path(), e)),
            _ => None,
        })
    }

    /// `Err(BatchIncomplete)` when any file failed.
    pub fn into_result(self) -> Result<Self> {
        let failed = self.failed();
        if failed > 0 {
            return Err(MigrateError::BatchIncomplete {
                failed,
                total: self.total(),
            });
        }
        Ok(self)
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

/// Files found under a root, plus the entries the walk could not read.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<(PathBuf, MigrateError)>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.unreadable.is_empty()
    }
}

fn walk_failure(root: &Path, err: &walkdir::Error) -> (PathBuf, MigrateError) {
    let path = err.path().unwrap_or(root).to_path_buf();
    let error = match err.io_error() {
        Some(io) => fs::read_failed(&path, io),
        None => fs::io_error(err.to_string()),
    };
    (path, error)
}

/// All files under `root` with one of `extensions`, sorted by path.
///
/// Only a missing root is fatal. Entries the walk cannot read are logged and
/// returned in [`Discovery::unreadable`] so the batch still reports them.
pub fn discover(root: &Path, extensions: &[String]) -> Result<Discovery> {
    if !root.is_dir() {
        return Err(fs::io_error(format!("Directory not found: {}", root.display())));
    }

    let mut discovery = Discovery::default();
    for entry in WalkDir::new(root).follow_links(false) {
        match entry {
            Ok(entry) if entry.file_type().is_file() && has_extension(entry.path(), extensions) => {
                discovery.files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("Cannot read {}: {e}", e.path().unwrap_or(root).display());
                discovery.unreadable.push(walk_failure(root, &e));
            }
        }
    }
    discovery.files.sort();
    log::debug!(
        "Discovered {} files under {}",
        discovery.files.len(),
        root.display()
    );
    Ok(discovery)
}

/// Run `operation` over every discovered file, isolating failures per file.
/// Unreadable entries are reported as failed.
pub fn run(
    discovery: Discovery,
    operation: &dyn DocumentOperation,
    progress: &mut dyn ProgressReporter,
) -> BatchReport {
    let Discovery { files, unreadable } = discovery;
    let mut report = BatchReport {
        outcomes: unreadable
            .into_iter()
            .map(|(path, e)| (path, FileOutcome::Failed(e)))
            .collect(),
    };
    progress.start(u64::try_from(files.len()).unwrap_or(u64::MAX), operation.name());

    for path in &files {
        progress.update_file(&path.display().to_string());
        let outcome = FileOutcome::from_result(operation.process(path));
        match &outcome {
            FileOutcome::Skipped(e) => log::warn!("Skipping {}: {e}", path.display()),
            FileOutcome::Failed(e) => log::error!("Error processing {}: {e}", path.display()),
            FileOutcome::Written { target, .. } => log::debug!("Wrote {}", target.display()),
            FileOutcome::Unchanged { target, .. } => {
                log::debug!("Unchanged {}", target.display());
            }
        }
        progress.inc_file();
        report.outcomes.push((path.clone(), outcome));
    }

    progress.finish();
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::Processed;
    use crate::ui::SilentProgressReporter;
    use tempfile::TempDir;

    /// Fails on files whose name contains "bad", skips "plain".
    struct ScriptedOperation;

    impl DocumentOperation for ScriptedOperation {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn process(&self, path: &Path) -> Result<Processed> {
            let name = path.file_name().unwrap().to_string_lossy();
            if name.contains("bad") {
                return Err(crate::error::frontmatter::malformed(name, "broken"));
            }
            if name.contains("plain") {
                return Err(crate::error::frontmatter::missing(name));
            }
            Ok(Processed {
                target: path.to_path_buf(),
                changed: !name.contains("same"),
                warnings: vec![MigrateError::MissingAsset {
                    path: "x.png".to_string(),
                }],
            })
        }
    }

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn discover_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.md");
        touch(temp.path(), "a.MARKDOWN");
        touch(temp.path(), "nested/c.md");
        touch(temp.path(), "notes.txt");
        touch(temp.path(), "image.png");

        let discovery = discover(temp.path(), &exts(&["md", "markdown"])).unwrap();
        assert!(discovery.unreadable.is_empty());
        let names: Vec<_> = discovery
            .files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            [
                PathBuf::from("a.MARKDOWN"),
                PathBuf::from("b.md"),
                PathBuf::from("nested/c.md"),
            ]
        );
    }

    #[test]
    fn discover_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        assert!(discover(&temp.path().join("nope"), &exts(&["md"])).is_err());
    }

    fn discovered(names: &[&str]) -> Discovery {
        Discovery {
            files: names.iter().map(PathBuf::from).collect(),
            unreadable: Vec::new(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn discover_continues_past_unreadable_directory() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.md");
        touch(temp.path(), "locked/b.md");
        touch(temp.path(), "z.md");
        let locked = temp.path().join("locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        let readable_anyway = std::fs::read_dir(&locked).is_ok();

        let result = discover(temp.path(), &exts(&["md"]));
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        // Permission bits do not apply to root.
        if readable_anyway {
            return;
        }

        let discovery = result.unwrap();
        assert_eq!(
            discovery.files,
            [temp.path().join("a.md"), temp.path().join("z.md")]
        );
        assert_eq!(discovery.unreadable.len(), 1);
        assert_eq!(discovery.unreadable[0].0, locked);
    }

    #[test]
    fn unreadable_entries_fail_the_batch() {
        let discovery = Discovery {
            files: vec![PathBuf::from("ok.md")],
            unreadable: vec![(PathBuf::from("locked"), fs::io_error("permission denied"))],
        };
        let report = run(discovery, &ScriptedOperation, &mut SilentProgressReporter);

        assert_eq!(report.total(), 2);
        assert_eq!(report.written(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(
            report.failures().map(|(p, _)| p.to_path_buf()).collect::<Vec<_>>(),
            [PathBuf::from("locked")]
        );
        assert!(report.into_result().is_err());
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let files = discovered(&["a-bad.md", "b-good.md", "c-plain.md", "d-same.md"]);
        let report = run(files, &ScriptedOperation, &mut SilentProgressReporter);

        assert_eq!(report.total(), 4);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.written(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.warnings().count(), 2);
        assert_eq!(
            report.failures().map(|(p, _)| p.to_path_buf()).collect::<Vec<_>>(),
            [PathBuf::from("a-bad.md")]
        );

        let err = report.into_result().unwrap_err();
        assert!(matches!(err, MigrateError::BatchIncomplete { failed: 1, total: 4 }));
    }

    #[test]
    fn skipped_files_do_not_fail_the_batch() {
        let files = discovered(&["plain.md", "ok.md"]);
        let report = run(files, &ScriptedOperation, &mut SilentProgressReporter);
        assert!(report.into_result().is_ok());
    }
}
