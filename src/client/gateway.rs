use serde::{de::DeserializeOwned, Deserialize};

use crate::entities::{
    contact::NewContactMessage,
    project::{Project, ProjectFilters},
    site_config::SiteConfig,
};

/// The `{success, data?, message?, count?}` envelope every API endpoint
/// wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub count: Option<usize>,
}

/// Outcome of a contact submission as seen by a view: never an error,
/// always a flag plus a user-presentable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

/// Front-end facing API client. Every operation is fail-soft: transport and
/// decoding failures are logged and converted to empty values, never
/// propagated to the caller.
#[derive(Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiGateway {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_config(&self) -> Option<SiteConfig> {
        self.get_data("/config", None).await
    }

    pub async fn fetch_projects(&self, filters: &ProjectFilters) -> Vec<Project> {
        self.get_data("/projects", Some(filters))
            .await
            .unwrap_or_default()
    }

    pub async fn fetch_project(&self, id: &str) -> Option<Project> {
        self.get_data(&format!("/projects/{}", id), None).await
    }

    pub async fn submit_contact(&self, form: &NewContactMessage) -> SubmitOutcome {
        let url = format!("{}/contact", self.base_url);

        let response = match self.http.post(&url).json(form).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error submitting contact: {}", e);
                return SubmitOutcome {
                    success: false,
                    message: "Failed to send message".to_string(),
                };
            }
        };

        match response.json::<Envelope<serde_json::Value>>().await {
            Ok(envelope) => SubmitOutcome {
                success: envelope.success,
                message: envelope
                    .message
                    .unwrap_or_else(|| "Failed to send message".to_string()),
            },
            Err(e) => {
                tracing::error!("Error decoding contact response: {}", e);
                SubmitOutcome {
                    success: false,
                    message: "Failed to send message".to_string(),
                }
            }
        }
    }

    /// Shared GET path: returns the envelope's `data`, or `None` on any
    /// transport, status or decoding failure.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&ProjectFilters>,
    ) -> Option<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url);
        if let Some(filters) = query {
            request = request.query(filters);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error fetching {}: {}", path, e);
                return None;
            }
        };

        match response.json::<Envelope<T>>().await {
            Ok(envelope) => envelope.data,
            Err(e) => {
                tracing::error!("Error decoding {}: {}", path, e);
                None
            }
        }
    }
}
