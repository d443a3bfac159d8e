//! Directory management for a scaffolded project
//!
//! Responsibilities:
//! - Resolving a user path into a `Project` handle
//! - "Create if absent, error if non-empty" semantics
//! - Scoped working-directory changes
//! - Recursive removal for deletion and rollback

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::path::ProjectPath;

/// A project directory on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    // basename of abs_path, so "." shows up as the current directory's name
    friendly_name: String,
    abs_path: PathBuf,
    pwd: PathBuf,
}

impl Project {
    /// Resolve `path` into a project directory, creating it if needed
    ///
    /// A missing path is created along with any missing parents. An existing
    /// path must be an empty directory.
    pub fn resolve_or_create(path: &str) -> Result<Self> {
        let project = Self::from_user_input(path)?;

        match fs::metadata(&project.abs_path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                fs::create_dir_all(&project.abs_path)
                    .map_err(|e| Error::filesystem("create", &project.abs_path, e))?;
                info!("Created project directory: {}", project.abs_path.display());
            }
            Err(err) => return Err(Error::filesystem("stat", &project.abs_path, err)),
            Ok(metadata) => {
                if !metadata.is_dir() {
                    return Err(Error::NotADirectory { path: project.abs_path });
                }
                project.ensure_empty()?;
                debug!("Using existing empty directory: {}", project.abs_path.display());
            }
        }

        Ok(project)
    }

    /// Open an existing project directory without modifying it
    pub fn open_existing(path: &str) -> Result<Self> {
        let project = Self::from_user_input(path)?;

        let metadata = fs::metadata(&project.abs_path)
            .map_err(|e| Error::filesystem("open", &project.abs_path, e))?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory { path: project.abs_path });
        }

        Ok(project)
    }

    fn from_user_input(path: &str) -> Result<Self> {
        let pwd = env::current_dir()
            .map_err(|e| Error::filesystem("read current directory", ".", e))?;
        let resolved = ProjectPath::from_user_input(path, &pwd)?;

        Ok(Self {
            name: path.to_string(),
            friendly_name: resolved.friendly_name(),
            abs_path: resolved.absolute().to_path_buf(),
            pwd,
        })
    }

    fn ensure_empty(&self) -> Result<()> {
        let mut entries = fs::read_dir(&self.abs_path)
            .map_err(|e| Error::filesystem("read", &self.abs_path, e))?;

        if entries.next().is_some() {
            return Err(Error::NotEmpty {
                path: self.abs_path.clone(),
            });
        }
        Ok(())
    }

    /// Name as given by the caller
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    pub fn abs_path(&self) -> &Path {
        &self.abs_path
    }

    /// Working directory of the caller when the project was resolved
    pub fn pwd(&self) -> &Path {
        &self.pwd
    }

    /// Change the process working directory into the project
    ///
    /// The returned guard restores `pwd` on `leave()` or when dropped.
    pub fn enter(&self) -> Result<WorkingDirGuard> {
        env::set_current_dir(&self.abs_path)
            .map_err(|e| Error::filesystem("enter", &self.abs_path, e))?;
        debug!("Entered {}", self.abs_path.display());

        Ok(WorkingDirGuard {
            restore_to: self.pwd.clone(),
            active: true,
        })
    }

    /// Recursively delete the project directory
    ///
    /// A directory that is already gone is not an error. Names ending in `.`
    /// or `..`, and directories holding the caller's working directory, are
    /// refused with `UnsafeRemoval`.
    pub fn remove(&self) -> Result<()> {
        if ends_in_dot_segment(&self.name) || self.pwd.starts_with(&self.abs_path) {
            return Err(Error::UnsafeRemoval {
                path: self.abs_path.clone(),
            });
        }

        match fs::remove_dir_all(&self.abs_path) {
            Ok(()) => {
                info!("Removed {}", self.abs_path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::filesystem("remove", &self.abs_path, err)),
        }
    }
}

// Checked on the raw input: Path::components() drops trailing `.` segments
fn ends_in_dot_segment(name: &str) -> bool {
    let trimmed = name.trim_end_matches(std::path::is_separator);
    if trimmed.is_empty() {
        return !name.is_empty();
    }

    let last = trimmed
        .rsplit(std::path::is_separator)
        .next()
        .unwrap_or(trimmed);
    last == "." || last == ".."
}

/// Restores the working directory a `Project::enter` call left
#[must_use = "dropping the guard immediately restores the previous working directory"]
#[derive(Debug)]
pub struct WorkingDirGuard {
    restore_to: PathBuf,
    active: bool,
}

impl WorkingDirGuard {
    /// Restore the previous working directory, reporting failure
    pub fn leave(mut self) -> Result<()> {
        self.active = false;
        env::set_current_dir(&self.restore_to)
            .map_err(|e| Error::filesystem("return to", &self.restore_to, e))?;
        debug!("Returned to {}", self.restore_to.display());
        Ok(())
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Err(e) = env::set_current_dir(&self.restore_to) {
            warn!("Failed to return to {}: {}", self.restore_to.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::cwd_lock;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory_with_parents() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested/demo");

        let project = Project::resolve_or_create(target.to_str().unwrap()).unwrap();

        assert!(target.is_dir());
        assert_eq!(project.abs_path(), target.as_path());
        assert_eq!(project.friendly_name(), "demo");
        assert!(project.abs_path().is_absolute());
    }

    #[test]
    fn test_relative_path_resolves_against_cwd() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let original = env::current_dir().unwrap();
        env::set_current_dir(temp.path()).unwrap();

        let result = Project::resolve_or_create("rel//demo/");
        let cwd = env::current_dir().unwrap();
        env::set_current_dir(&original).unwrap();

        let project = result.unwrap();
        assert_eq!(project.abs_path(), cwd.join("rel/demo").as_path());
        assert_eq!(project.name(), "rel//demo/");
        assert_eq!(project.pwd(), cwd.as_path());
    }

    #[test]
    fn test_existing_empty_directory_is_accepted() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("empty");
        fs::create_dir(&target).unwrap();

        let project = Project::resolve_or_create(target.to_str().unwrap()).unwrap();

        assert_eq!(project.friendly_name(), "empty");
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn test_non_empty_directory_is_rejected_untouched() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("busy");
        fs::create_dir(&target).unwrap();
        fs::write(target.join(".hidden"), "keep").unwrap();

        let err = Project::resolve_or_create(target.to_str().unwrap()).unwrap_err();

        assert!(matches!(err, Error::NotEmpty { .. }));
        assert_eq!(fs::read_to_string(target.join(".hidden")).unwrap(), "keep");
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("file.txt");
        fs::write(&target, "x").unwrap();

        let err = Project::resolve_or_create(target.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));

        let err = Project::open_existing(target.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_dot_uses_current_directory_name() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("my-app");
        fs::create_dir(&target).unwrap();
        let original = env::current_dir().unwrap();
        env::set_current_dir(&target).unwrap();

        let result = Project::resolve_or_create(".");
        env::set_current_dir(&original).unwrap();

        let project = result.unwrap();
        assert_eq!(project.friendly_name(), "my-app");
        assert_eq!(project.name(), ".");
    }

    #[test]
    fn test_empty_name_is_missing_argument() {
        let _lock = cwd_lock();
        let err = Project::resolve_or_create("").unwrap_err();
        assert!(matches!(err, Error::MissingArgument { .. }));
    }

    #[test]
    fn test_open_existing_missing_path_fails() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("absent");

        let err = Project::open_existing(target.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_remove_deletes_tree_and_tolerates_absence() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("doomed");
        let project = Project::resolve_or_create(target.to_str().unwrap()).unwrap();
        fs::create_dir_all(target.join("a/b")).unwrap();
        fs::write(target.join("a/b/file"), "x").unwrap();

        project.remove().unwrap();
        assert!(!target.exists());

        project.remove().unwrap();
    }

    #[test]
    fn test_remove_refuses_dot_segments_and_cwd_ancestors() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join("keep.txt"), "keep").unwrap();
        let original = env::current_dir().unwrap();
        env::set_current_dir(&child).unwrap();

        let results: Vec<_> = [".", "..", "./", "../", "../child/.."]
            .iter()
            .map(|name| Project::open_existing(name).and_then(|p| p.remove()))
            .collect();
        env::set_current_dir(&original).unwrap();

        for result in results {
            assert!(matches!(result, Err(Error::UnsafeRemoval { .. })));
        }
        assert!(child.is_dir());
        assert_eq!(fs::read_to_string(parent.join("keep.txt")).unwrap(), "keep");
    }

    #[test]
    fn test_remove_refuses_directory_holding_cwd() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let outer = temp.path().join("outer");
        let inner = outer.join("inner");
        fs::create_dir_all(&inner).unwrap();
        let original = env::current_dir().unwrap();
        env::set_current_dir(&inner).unwrap();

        let cwd = env::current_dir().unwrap();
        let outer_abs = cwd.parent().unwrap().to_path_buf();
        let result = Project::open_existing(outer_abs.to_str().unwrap()).and_then(|p| p.remove());
        env::set_current_dir(&original).unwrap();

        assert!(matches!(result, Err(Error::UnsafeRemoval { .. })));
        assert!(inner.is_dir());
    }

    #[test]
    fn test_dot_segment_detection() {
        assert!(ends_in_dot_segment("."));
        assert!(ends_in_dot_segment(".."));
        assert!(ends_in_dot_segment("foo/.."));
        assert!(ends_in_dot_segment("foo/./"));
        assert!(ends_in_dot_segment("/"));
        assert!(!ends_in_dot_segment("demo"));
        assert!(!ends_in_dot_segment("../demo"));
        assert!(!ends_in_dot_segment(".hidden"));
        assert!(!ends_in_dot_segment("demo.."));
    }

    #[test]
    fn test_removed_path_can_be_resolved_again() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("again");
        let project = Project::resolve_or_create(target.to_str().unwrap()).unwrap();
        fs::write(target.join("README.md"), "# again\n").unwrap();

        project.remove().unwrap();

        assert!(Project::resolve_or_create(target.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_enter_and_leave_restore_cwd() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let project = Project::resolve_or_create(temp.path().join("inside").to_str().unwrap()).unwrap();
        let original = env::current_dir().unwrap();

        let guard = project.enter().unwrap();
        assert_eq!(
            env::current_dir().unwrap().canonicalize().unwrap(),
            project.abs_path().canonicalize().unwrap()
        );
        guard.leave().unwrap();

        assert_eq!(env::current_dir().unwrap(), original);
    }

    #[test]
    fn test_dropped_guard_restores_cwd_after_failure() {
        let _lock = cwd_lock();
        let temp = TempDir::new().unwrap();
        let project = Project::resolve_or_create(temp.path().join("inside").to_str().unwrap()).unwrap();
        let original = env::current_dir().unwrap();

        let failing = || -> Result<()> {
            let _guard = project.enter()?;
            Err(Error::missing_argument("anything"))
        };

        assert!(failing().is_err());
        assert_eq!(env::current_dir().unwrap(), original);
    }
}
