use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::fs::Project;
use crate::provision::{Provisioner, Visibility};

/// Arguments for `create`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArgs {
    pub project_name: String,
    pub push_to_github: bool,
    pub private_repo: bool,
}

/// Arguments for `delete`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteArgs {
    pub project_name: String,
    /// Also delete the remote repository
    pub remote: bool,
    /// Delete only the remote repository
    pub remote_only: bool,
}

/// Create a project directory with an initialized repository
///
/// Any failure after the directory is resolved removes it again and returns
/// that failure. A directory that holds the working directory is left in place.
pub fn create(args: &CreateArgs, provisioner: &impl Provisioner) -> Result<Project> {
    if args.project_name.is_empty() {
        return Err(Error::missing_argument("project name"));
    }

    let project = Project::resolve_or_create(&args.project_name)?;
    provision_inside(&project, args, provisioner)?;

    info!("Project {} ready at {}", project.friendly_name(), project.abs_path().display());
    Ok(project)
}

// Runs provisioning with the project as cwd; any failure up to and including
// provisioning removes the directory again
fn provision_inside(project: &Project, args: &CreateArgs, provisioner: &impl Provisioner) -> Result<()> {
    let guard = match project.enter() {
        Ok(guard) => guard,
        Err(err) => {
            rollback(project);
            return Err(err);
        }
    };
    let provisioned = provision(project, args, provisioner);
    let left = guard.leave();

    if let Err(err) = provisioned {
        rollback(project);
        return Err(err);
    }
    left
}

fn provision(project: &Project, args: &CreateArgs, provisioner: &impl Provisioner) -> Result<()> {
    // Basename rather than the raw -p value: "." and "work/demo" would make
    // a useless README heading and an invalid repository name
    provisioner.init_local(project.friendly_name())?;

    if args.push_to_github {
        let visibility = Visibility::from_private(args.private_repo);
        provisioner.push_remote(project.friendly_name(), visibility)?;
    }

    Ok(())
}

fn rollback(project: &Project) {
    if let Err(e) = project.remove() {
        warn!("failed to clean {} directory. {}", project.friendly_name(), e);
    }
}

/// Delete a project directory and/or its remote repository
///
/// Returns the deleted project when the local directory was removed, `None`
/// for remote-only deletion.
pub fn delete(args: &DeleteArgs, provisioner: &impl Provisioner) -> Result<Option<Project>> {
    if args.project_name.is_empty() {
        return Err(Error::missing_argument("project name"));
    }

    let mut deleted = None;

    if !args.remote_only {
        let project = Project::open_existing(&args.project_name)?;
        project.remove()?;
        deleted = Some(project);
    }

    if args.remote || args.remote_only {
        provisioner.delete_remote(&args.project_name)?;
    }

    Ok(deleted)
}
