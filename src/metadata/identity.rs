//! Author and source repository identity.
//!
//! The identity is queried through the [`VersionControl`] capability so the
//! packaging flow can run against a fake in tests instead of a real `git`.

use crate::error::{PackagerError, Result};

/// Who built the package and where its sources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    user_name: String,
    repository_url: Option<String>,
}

impl RepositoryIdentity {
    /// Creates an identity from already-resolved values.
    pub fn new(user_name: impl Into<String>, repository_url: Option<String>) -> Self {
        Self {
            user_name: user_name.into(),
            repository_url,
        }
    }

    /// Display name of the current version-control user.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// URL of the first configured remote, if any.
    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }
}

/// Queries the packager needs from a version-control system.
#[allow(async_fn_in_trait)]
pub trait VersionControl {
    /// Configured display name of the current user.
    async fn user_name(&self) -> Result<String>;

    /// Remote names in the tool's listing order; empty when none are configured.
    async fn list_remotes(&self) -> Result<Vec<String>>;

    /// URL of the named remote.
    async fn remote_url(&self, remote: &str) -> Result<String>;
}

/// Resolves the repository identity.
///
/// Only the first listed remote is looked up; there is no preference for a
/// remote called `origin`.
///
/// # Errors
///
/// Returns [`PackagerError::ExternalTool`] when a query fails or the user name
/// is blank.
pub async fn resolve<V: VersionControl>(vcs: &V) -> Result<RepositoryIdentity> {
    let user_name = vcs.user_name().await?.trim().to_string();
    if user_name.is_empty() {
        return Err(PackagerError::ExternalTool {
            command: "git config user.name".to_string(),
            reason: "user name is empty".to_string(),
        });
    }

    let remotes = vcs.list_remotes().await?;
    let first_remote = remotes.first().map(|r| r.trim()).filter(|r| !r.is_empty());

    let repository_url = match first_remote {
        Some(remote) => {
            if remotes.len() > 1 {
                log::debug!(
                    "{} remotes configured, using the first one: {}",
                    remotes.len(),
                    remote
                );
            }
            Some(vcs.remote_url(remote).await?.trim().to_string())
        }
        None => {
            log::info!("No remote configured, repository metadata will be omitted");
            None
        }
    };

    log::info!("Resolved author: {}", user_name);
    if let Some(url) = &repository_url {
        log::info!("Resolved repository: {}", url);
    }

    Ok(RepositoryIdentity {
        user_name,
        repository_url,
    })
}
