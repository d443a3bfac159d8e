use std::fs;
use tracing::info;

use crate::config::GitConfig;
use crate::error::{Error, Result};
use crate::exec::{self, CommandBuilder};

/// Initialize a git repository in the current directory
///
/// Runs `git init`, writes a README holding `# <name>`, stages it and commits
/// it. The first failing step aborts the rest.
pub fn init_local(config: &GitConfig, name: &str) -> Result<()> {
    let git = exec::locate(&config.program, "initialize the local repository")?;

    info!("Initializing git repository for {}", name);
    command(config, &git).arg("init").run_streaming()?;

    fs::write(&config.readme, readme_contents(name))
        .map_err(|e| Error::filesystem("write", &config.readme, e))?;

    command(config, &git).arg("add").arg(&config.readme).run()?;
    command(config, &git)
        .arg("commit")
        .arg("-m")
        .arg(&config.commit_message)
        .run()?;

    info!("Initial commit created");
    Ok(())
}

/// README body for a fresh project
pub fn readme_contents(name: &str) -> String {
    format!("# {}\n", name)
}

fn command(config: &GitConfig, git: &std::path::Path) -> CommandBuilder {
    let mut cmd = CommandBuilder::new(git);

    if let Some(author) = &config.author_name {
        cmd = cmd
            .env("GIT_AUTHOR_NAME", author)
            .env("GIT_COMMITTER_NAME", author);
    }
    if let Some(email) = &config.author_email {
        cmd = cmd
            .env("GIT_AUTHOR_EMAIL", email)
            .env("GIT_COMMITTER_EMAIL", email);
    }

    cmd
}
