use serde::{Deserialize, Serialize};

/// Global kickoff configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub git: GitConfig,
    pub hosting: HostingConfig,
}

/// Local repository setup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GitConfig {
    /// Version-control program, looked up on PATH
    pub program: String,
    pub readme: String,
    pub commit_message: String,
    /// Exported as GIT_AUTHOR_NAME and GIT_COMMITTER_NAME when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Exported as GIT_AUTHOR_EMAIL and GIT_COMMITTER_EMAIL when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
}

/// Remote repository hosting CLI
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HostingConfig {
    pub program: String,
    pub remote_name: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            readme: "README.md".to_string(),
            commit_message: "init project".to_string(),
            author_name: None,
            author_email: None,
        }
    }
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            program: "gh".to_string(),
            remote_name: "upstream".to_string(),
        }
    }
}
