//! Common file system operations with unified error handling

use std::io::Write;
use std::path::Path;

use crate::error::{Result, fs};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(parent, &e))?;
    }
    Ok(())
}

/// Read a whole UTF-8 file
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| fs::read_failed(path, &e))
}

/// Replace `path` with `content` atomically.
///
/// The content goes to a temp file in the destination directory which is then
/// renamed over `path`, so readers (and a crash mid-write) see either the old
/// file or the new one, never a truncated one. An existing file keeps its
/// permissions; a new one gets the same mode `File::create` would give it.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| fs::write_failed(dir, &e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| fs::write_failed(tmp.path(), &e))?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| fs::write_failed(path, &e))?;
    }
    tmp.persist(path)
        .map_err(|e| fs::write_failed(path, &e.error))?;
    Ok(())
}

/// Copy `source` to `target`, creating the target directory and overwriting
/// any existing file.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    std::fs::copy(source, target)
        .map(|_| ())
        .map_err(|e| fs::write_failed(target, &e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_creates_parents_and_replaces() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog/nested/post.md");

        write_atomic(&path, "first").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        write_atomic(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("post.md");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, "new").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_new_file_gets_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let reference = temp.path().join("reference.md");
        std::fs::File::create(&reference).unwrap();
        let path = temp.path().join("post.md");

        write_atomic(&path, "new").unwrap();
        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[test]
    fn copy_file_keeps_source() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src.png");
        let target = temp.path().join("static/img/blog/src.png");
        std::fs::write(&source, b"png").unwrap();

        copy_file(&source, &target).unwrap();
        assert!(source.exists());
        assert_eq!(std::fs::read(&target).unwrap(), b"png");
    }

    #[test]
    fn read_missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let err = read_to_string(&temp.path().join("missing.md")).unwrap_err();
        assert!(err.to_string().contains("missing.md"));
    }
}
