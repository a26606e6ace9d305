//! Roster providers: where the list of members comes from.

use std::{collections::HashSet, path::PathBuf, time::Duration};

use async_trait::async_trait;
use serde::Deserialize;
use shared::domain::{Member, MemberId};
use thiserror::Error;
use tracing::warn;
use url::Url;

mod file;
mod http;

pub use file::FileRosterProvider;
pub use http::HttpRosterProvider;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported roster file extension for '{}'; expected .json or .toml", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("malformed roster: {0}")]
    Malformed(String),
    #[error("roster request failed")]
    Transport(#[from] reqwest::Error),
    #[error("roster server at {url} answered {status}")]
    Status { url: Url, status: u16 },
    #[error("invalid roster source '{0}'")]
    InvalidSource(String),
}

#[async_trait]
pub trait RosterProvider: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Member>, RosterError>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    File(PathBuf),
    Http(Url),
}

impl RosterSource {
    /// `http://` and `https://` strings are fetched over HTTP; anything else is
    /// a file path.
    pub fn parse(raw: &str) -> Result<Self, RosterError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(RosterError::InvalidSource(raw.to_string()));
        }
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(raw).map_err(|_| RosterError::InvalidSource(raw.to_string()))?;
            return Ok(Self::Http(url));
        }
        Ok(Self::File(PathBuf::from(raw)))
    }

    pub fn into_provider(self, timeout: Duration) -> Result<Box<dyn RosterProvider>, RosterError> {
        let provider: Box<dyn RosterProvider> = match self {
            Self::File(path) => Box::new(FileRosterProvider::new(path)),
            Self::Http(url) => Box::new(HttpRosterProvider::new(url, timeout)?),
        };
        Ok(provider)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct RawMember {
    id: RawId,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    List(Vec<RawMember>),
    Wrapped { members: Vec<RawMember> },
}

impl RosterDocument {
    fn into_members(self) -> Vec<Member> {
        let raw = match self {
            Self::List(members) | Self::Wrapped { members } => members,
        };
        raw.into_iter()
            .map(|m| {
                let id = match m.id {
                    RawId::Text(id) => id,
                    RawId::Number(id) => id.to_string(),
                };
                Member::new(id, m.name)
            })
            .collect()
    }
}

pub fn parse_json_roster(raw: &str) -> Result<Vec<Member>, RosterError> {
    let doc: RosterDocument =
        serde_json::from_str(raw).map_err(|err| RosterError::Malformed(err.to_string()))?;
    Ok(normalize_roster(doc.into_members()))
}

pub fn parse_toml_roster(raw: &str) -> Result<Vec<Member>, RosterError> {
    #[derive(Deserialize)]
    struct TomlRoster {
        #[serde(default)]
        members: Vec<RawMember>,
    }

    let doc: TomlRoster =
        toml::from_str(raw).map_err(|err| RosterError::Malformed(err.to_string()))?;
    Ok(normalize_roster(
        RosterDocument::Wrapped {
            members: doc.members,
        }
        .into_members(),
    ))
}

/// Keeps the first entry for each id and trims names. Blank ids are dropped.
pub fn normalize_roster(members: Vec<Member>) -> Vec<Member> {
    let mut seen: HashSet<MemberId> = HashSet::with_capacity(members.len());
    let mut out = Vec::with_capacity(members.len());
    for mut member in members {
        if member.id.as_str().trim().is_empty() {
            warn!(name = %member.name, "dropping roster entry with blank id");
            continue;
        }
        if !seen.insert(member.id.clone()) {
            warn!(member_id = %member.id, "dropping duplicate roster id");
            continue;
        }
        member.name = member.name.trim().to_string();
        out.push(member);
    }
    out
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
