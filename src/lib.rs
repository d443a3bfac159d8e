pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod fs;
pub mod log;
pub mod path;
pub mod projects;
pub mod provision;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use fs::Project;
pub use projects::{CreateArgs, DeleteArgs};
pub use provision::{CliProvisioner, Provisioner, Visibility};
