//! Lexical path handling for project names
//!
//! Provides:
//! - Cleaning (redundant separators, `.` segments, foldable `..`)
//! - Absolutizing against a base directory without touching the filesystem
//! - Friendly names for display (`.` becomes the name of the current directory)
//!
//! Symlinks are never resolved: the path is used as given.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// User-supplied project path, cleaned and absolutized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    absolute: PathBuf,
}

impl ProjectPath {
    /// Create a ProjectPath from user input, absolutized against `base`
    ///
    /// # Examples
    /// ```
    /// use kickoff::path::ProjectPath;
    /// use std::path::Path;
    ///
    /// let path = ProjectPath::from_user_input("./demo//src/", Path::new("/work")).unwrap();
    /// assert_eq!(path.absolute(), Path::new("/work/demo/src"));
    /// assert_eq!(path.friendly_name(), "src");
    /// ```
    pub fn from_user_input(input: &str, base: &Path) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::missing_argument("project name"));
        }

        Ok(Self {
            absolute: absolute(&clean(Path::new(input)), base),
        })
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// Name used when talking to the user about this path
    pub fn friendly_name(&self) -> String {
        friendly_name(&self.absolute)
    }
}

/// Lexically clean a path
///
/// `.` segments and duplicate separators are dropped, `..` folds into a
/// preceding normal segment, and `..` directly under the root is discarded.
/// An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut rooted = false;
    let mut prefix: Option<OsString> = None;
    let mut parts: Vec<OsString> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = Some(p.as_os_str().to_os_string()),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(OsString::from("..")),
            },
            Component::Normal(name) => parts.push(name.to_os_string()),
        }
    }

    let mut cleaned = PathBuf::new();
    if let Some(prefix) = prefix {
        cleaned.push(prefix);
    }
    if rooted {
        cleaned.push(Component::RootDir.as_os_str());
    }
    for part in parts {
        cleaned.push(part);
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Absolute, cleaned form of `path`, relative paths joined onto `base`
pub fn absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        clean(path)
    } else {
        clean(&base.join(path))
    }
}

/// Last segment of an absolute path, or the whole path for a root
pub fn friendly_name(absolute: &Path) -> String {
    match absolute.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => absolute.display().to_string(),
    }
}
