use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::Member;
use tracing::{debug, error};
use url::Url;

use crate::{parse_json_roster, RosterError, RosterProvider};

/// Fetches a JSON roster (a bare array or `{"members": [...]}`) with GET.
#[derive(Debug, Clone)]
pub struct HttpRosterProvider {
    http: Client,
    url: Url,
}

impl HttpRosterProvider {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, RosterError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RosterProvider for HttpRosterProvider {
    async fn fetch(&self) -> Result<Vec<Member>, RosterError> {
        let response = self.http.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!(url = %self.url, status = status.as_u16(), "roster request rejected");
            return Err(RosterError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let members = parse_json_roster(&body)?;
        debug!(url = %self.url, members = members.len(), "fetched roster");
        Ok(members)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
