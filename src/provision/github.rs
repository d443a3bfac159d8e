use tracing::info;

use crate::config::HostingConfig;
use crate::error::{Error, Result};
use crate::exec::{self, CommandBuilder};

/// Remote repository visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn from_private(private: bool) -> Self {
        if private {
            Self::Private
        } else {
            Self::Public
        }
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

/// Create the remote repository from the current directory and push it
pub fn push_remote(config: &HostingConfig, name: &str, visibility: Visibility) -> Result<()> {
    let gh = exec::locate(&config.program, "push repository to github")?;

    info!("Creating {:?} remote repository {}", visibility, name);
    create_command(config, &gh, name, visibility).run_streaming()?;
    Ok(())
}

/// Delete the remote repository without a confirmation prompt
pub fn delete_remote(config: &HostingConfig, name: &str) -> Result<()> {
    let gh = exec::locate(&config.program, "delete repository from github")?;

    info!("Deleting remote repository {}", name);
    delete_command(&gh, name)
        .run_streaming()
        .map_err(|e| Error::remote_deletion(name, e))?;
    Ok(())
}

fn create_command(
    config: &HostingConfig,
    gh: &std::path::Path,
    name: &str,
    visibility: Visibility,
) -> CommandBuilder {
    CommandBuilder::new(gh)
        .args(["repo", "create", name, "--source=."])
        .arg(format!("--remote={}", config.remote_name))
        .arg("--push")
        .arg(visibility.as_flag())
}

fn delete_command(gh: &std::path::Path, name: &str) -> CommandBuilder {
    CommandBuilder::new(gh).args(["repo", "delete", name, "--yes"])
}
