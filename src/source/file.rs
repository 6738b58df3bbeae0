use super::*;
use anyhow::Context as _;
use futures::prelude::*;
use std::path::PathBuf;

/// Reads the user list from a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_users(&self) -> anyhow::Result<Vec<User>> {
        log::debug!("reading users from {}", self.path.display());

        let data = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("cannot read `{}`", self.path.display()))?;
        let users: Vec<User> = serde_json::from_slice(&data)
            .with_context(|| format!("cannot decode users from `{}`", self.path.display()))?;

        log::info!("read {} user(s) from {}", users.len(), self.path.display());
        Ok(users)
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> UsersFut<'_> {
        self.read_users().boxed()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
