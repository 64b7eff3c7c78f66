//! Common test utilities for Blogshift integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a Jekyll source site and a Docusaurus target
#[allow(dead_code)]
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with the fixture Jekyll site copied to `jekyll/`
    pub fn with_jekyll_fixture() -> Self {
        let workspace = Self::new();
        let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("jekyll-site");
        copy_dir_recursive(&fixture, &workspace.source_root())
            .expect("Failed to copy fixture site");
        workspace
    }

    pub fn source_root(&self) -> PathBuf {
        self.path.join("jekyll")
    }

    pub fn target_root(&self) -> PathBuf {
        self.path.join("docusaurus")
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted file names directly inside `dir` (relative to the workspace)
    pub fn list_dir(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(dir))
            .expect("Failed to read directory")
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Command for the blogshift binary, rooted at `workspace` with the fixture
/// roots passed explicitly and no environment overrides leaking in.
#[allow(deprecated)]
pub fn blogshift_cmd(workspace: &TestWorkspace) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("blogshift").expect("binary is built");
    cmd.current_dir(&workspace.path)
        .env_remove("BLOGSHIFT_CONFIG")
        .env_remove("BLOGSHIFT_SOURCE")
        .env_remove("BLOGSHIFT_TARGET")
        .env_remove("RUST_LOG")
        .arg("--source")
        .arg(workspace.source_root())
        .arg("--target")
        .arg(workspace.target_root());
    cmd
}

#[allow(dead_code)]
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}
