//! Filesystem-existence capability used by path validation rules.
//!
//! Input rules never touch the operating system directly; they go through
//! [`FileExistence`] so tests can substitute an in-memory fake.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Read-only existence oracle injected into option resolution.
pub trait FileExistence {
    /// True if `path` names an existing regular file.
    fn file_exists(&self, path: &Path) -> bool;

    /// True if `path` names an existing directory.
    fn dir_exists(&self, path: &Path) -> bool;
}

/// Oracle backed by the real operating system filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileExistence for OsFileSystem {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// In-memory oracle for tests: only paths registered up front exist.
#[derive(Debug, Default, Clone)]
pub struct FakeFileSystem {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl FakeFileSystem {
    /// Empty fake filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Register an existing directory.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl FileExistence for FakeFileSystem {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_filesystem_only_knows_registered_paths() {
        let fs = FakeFileSystem::new()
            .with_file("/repo/Cargo.toml")
            .with_dir("/repo");

        assert!(fs.file_exists(Path::new("/repo/Cargo.toml")));
        assert!(fs.dir_exists(Path::new("/repo")));
        assert!(!fs.file_exists(Path::new("/repo/other.toml")));
        assert!(!fs.dir_exists(Path::new("/repo/Cargo.toml")));
    }

    #[test]
    fn os_filesystem_reports_real_paths() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let file = dir.path().join("probe.txt");
        std::fs::write(&file, b"x").expect("write should succeed");

        let fs = OsFileSystem;
        assert!(fs.dir_exists(dir.path()));
        assert!(fs.file_exists(&file));
        assert!(!fs.file_exists(&dir.path().join("absent.txt")));
        assert!(!fs.dir_exists(&file));
    }
}
