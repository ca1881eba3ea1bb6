// This file contains the implementation of the NexusClient struct, which
// handles communication with the Nexus component REST API: paginated
// component search and per-component deletion.

use reqwest::{Client, StatusCode};

use crate::config::AuthConfig;
use crate::error::{AuditError, Result};
use crate::registry::component::{ImageComponent, RawComponent, SearchResponse};

/// Path of the component REST API below the base Nexus URL.
const SERVICE_PATH: &str = "/service/siesta/rest/beta";

/// Join the user-supplied Nexus URL with the REST service path. A trailing
/// slash on the base URL is tolerated.
pub fn api_base(nexus_url: &str) -> String {
    format!("{}{}", nexus_url.trim_end_matches('/'), SERVICE_PATH)
}

pub struct NexusClientBuilder {
    nexus_url: String,
    auth: Option<AuthConfig>,
}

impl NexusClientBuilder {
    pub fn new(nexus_url: impl Into<String>) -> Self {
        Self {
            nexus_url: nexus_url.into(),
            auth: None,
        }
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn build(self) -> Result<NexusClient> {
        let auth = self
            .auth
            .ok_or_else(|| AuditError::Config("Credentials are required".to_string()))?;
        auth.validate()?;

        Ok(NexusClient {
            client: Client::new(),
            base_url: api_base(&self.nexus_url),
            auth,
        })
    }
}

/// Client for the Nexus component REST API. One underlying HTTP client is
/// reused for every call; all calls are issued sequentially.
pub struct NexusClient {
    client: Client,
    base_url: String,
    auth: AuthConfig,
}

impl NexusClient {
    pub fn builder(nexus_url: impl Into<String>) -> NexusClientBuilder {
        NexusClientBuilder::new(nexus_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every component record in `repo`, following continuation
    /// tokens until the API stops returning one. Items are accumulated in
    /// fetch order.
    pub async fn search_components(&self, repo: &str) -> Result<Vec<RawComponent>> {
        let search_url = format!("{}/search?repository={}", self.base_url, repo);

        let mut items: Vec<RawComponent> = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let url = match &token {
                Some(tok) => format!("{}&continuationToken={}", search_url, tok),
                None => search_url.clone(),
            };

            let page = self.fetch_page(&url).await?;
            let next = page.next_token().map(|tok| tok.to_string());
            items.extend(page.items);

            match next {
                Some(tok) => token = Some(tok),
                None => break,
            }
        }

        Ok(items)
    }

    async fn fetch_page(&self, url: &str) -> Result<SearchResponse> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.auth.username, Some(&self.auth.password))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuditError::Search {
                url: url.to_string(),
                detail: describe_response(response).await,
            });
        }

        response.json::<SearchResponse>().await.map_err(|e| AuditError::Search {
            url: url.to_string(),
            detail: format!("undecodable response body: {}", e),
        })
    }

    /// Delete one component. Anything but 204 No Content is fatal and
    /// carries the offending URL.
    pub async fn delete_component(&self, component: &ImageComponent) -> Result<()> {
        let url = format!("{}/components/{}", self.base_url, component.id);

        let response = self
            .client
            .delete(&url)
            .basic_auth(&self.auth.username, Some(&self.auth.password))
            .send()
            .await?;

        if response.status() != StatusCode::NO_CONTENT {
            return Err(AuditError::Delete {
                url,
                status: response.status(),
            });
        }

        Ok(())
    }
}

/// Status line plus a bounded slice of the body, for error reporting.
async fn describe_response(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => {
            let mut body = body.trim().to_string();
            if body.len() > 200 {
                body.truncate(200);
                body.push_str("...");
            }
            format!("{} ({})", status, body)
        }
        _ => status.to_string(),
    }
}
