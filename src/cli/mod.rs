use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::Config;
use crate::projects::{self, CreateArgs, DeleteArgs};
use crate::provision::CliProvisioner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project directory with an initialized git repository
    Create {
        /// Project name or path
        #[arg(short = 'p', long = "project", value_name = "NAME", default_value = "")]
        project: String,

        /// Create a GitHub repository and push to it using the GitHub CLI
        #[arg(long)]
        gpush: bool,

        /// Make the new GitHub repository private
        #[arg(long)]
        gprivate: bool,
    },

    /// Delete a project directory and/or its GitHub repository
    Delete {
        /// Project name or path
        #[arg(short = 'p', long = "project", value_name = "NAME", default_value = "")]
        project: String,

        /// Also delete the GitHub repository
        #[arg(long)]
        remote: bool,

        /// Delete only the GitHub repository
        #[arg(long = "remote-only", alias = "remoteOnly")]
        remote_only: bool,
    },
}

impl Commands {
    fn into_action(self) -> Action {
        match self {
            Commands::Create {
                project,
                gpush,
                gprivate,
            } => Action::Create(CreateArgs {
                project_name: project,
                push_to_github: gpush,
                private_repo: gprivate,
            }),
            Commands::Delete {
                project,
                remote,
                remote_only,
            } => Action::Delete(DeleteArgs {
                project_name: project,
                remote,
                remote_only,
            }),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Create(CreateArgs),
    Delete(DeleteArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let provisioner = CliProvisioner::new(&config);

    match cli.command.into_action() {
        Action::Create(args) => {
            let project = projects::create(&args, &provisioner)?;
            println!(
                "Your {:?} project is ready at {}",
                project.friendly_name(),
                project.abs_path().display()
            );
        }
        Action::Delete(args) => {
            let deleted = projects::delete(&args, &provisioner)?;
            let name = deleted
                .as_ref()
                .map(|p| p.friendly_name())
                .unwrap_or(args.project_name.as_str());
            println!("Your {:?} project has been deleted", name);
        }
    }

    Ok(())
}
