use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::domain::Member;
use tracing::debug;

use crate::{parse_json_roster, parse_toml_roster, RosterError, RosterProvider};

/// Reads a roster from a `.json` or `.toml` file on every fetch.
#[derive(Debug, Clone)]
pub struct FileRosterProvider {
    path: PathBuf,
}

impl FileRosterProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RosterProvider for FileRosterProvider {
    async fn fetch(&self) -> Result<Vec<Member>, RosterError> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Vec<Member>, RosterError> = match extension.as_deref() {
            Some("json") => parse_json_roster,
            Some("toml") => parse_toml_roster,
            _ => return Err(RosterError::UnsupportedFormat(self.path.clone())),
        };

        let raw = std::fs::read_to_string(&self.path).map_err(|source| RosterError::Io {
            path: self.path.clone(),
            source,
        })?;
        let members = parse(&raw)?;
        debug!(path = %self.path.display(), members = members.len(), "loaded roster file");
        Ok(members)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
