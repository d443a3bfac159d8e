pub mod git;
pub mod github;

use crate::config::{Config, GitConfig, HostingConfig};
use crate::error::Result;

pub use github::Visibility;

/// Local and remote repository setup
///
/// All operations act on the process working directory, so callers run them
/// inside a `Project::enter` scope.
pub trait Provisioner {
    /// Initialize a repository with a README as the first commit
    fn init_local(&self, name: &str) -> Result<()>;

    /// Create the remote repository from the current directory and push to it
    fn push_remote(&self, name: &str, visibility: Visibility) -> Result<()>;

    /// Delete the remote repository without prompting
    fn delete_remote(&self, name: &str) -> Result<()>;
}

/// Provisioner backed by the git and gh command-line tools
#[derive(Debug, Clone, Default)]
pub struct CliProvisioner {
    git: GitConfig,
    hosting: HostingConfig,
}

impl CliProvisioner {
    pub fn new(config: &Config) -> Self {
        Self {
            git: config.git.clone(),
            hosting: config.hosting.clone(),
        }
    }
}

impl Provisioner for CliProvisioner {
    fn init_local(&self, name: &str) -> Result<()> {
        git::init_local(&self.git, name)
    }

    fn push_remote(&self, name: &str, visibility: Visibility) -> Result<()> {
        github::push_remote(&self.hosting, name, visibility)
    }

    fn delete_remote(&self, name: &str) -> Result<()> {
        github::delete_remote(&self.hosting, name)
    }
}
