use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Langflow deployment the astrology flow runs on.
const DEFAULT_BASE_URL: &str = "https://api.langflow.astra.datastax.com";
const LANGFLOW_ID: &str = "df620f54-5c1a-42a9-8fa4-e7b3d95f46cf";
const FLOW_ENDPOINT: &str = "astrology";

/// Environment variable holding the bearer credential.
pub const TOKEN_VAR: &str = "APPLICATION_TOKEN";

/// Where and how to reach the flow. Read from the environment once at
/// startup; nothing in here is consulted implicitly later.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub base_url: String,
    pub flow_id: String,
    pub endpoint: String,
    pub application_token: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            flow_id: LANGFLOW_ID.to_string(),
            endpoint: FLOW_ENDPOINT.to_string(),
            application_token: String::new(),
        }
    }
}

impl FlowConfig {
    /// Production endpoints plus the token from `APPLICATION_TOKEN`. A
    /// missing token is tolerated; the request goes out with an empty
    /// credential and the service rejects it in its reply.
    pub fn from_env() -> Self {
        let application_token = std::env::var(TOKEN_VAR).unwrap_or_default();
        if application_token.trim().is_empty() {
            warn!("{TOKEN_VAR} is not set; flow requests will be unauthenticated");
        }
        Self {
            application_token,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.application_token = token.into();
        self
    }
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("flow request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("flow reply was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// JSON body of one flow run call.
#[derive(Serialize)]
struct RunPayload<'a> {
    input_value: &'a str,
    output_type: &'a str,
    input_type: &'a str,
}

pub struct FlowClient {
    config: FlowConfig,
    http: Client,
}

impl FlowClient {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn run_url(&self) -> String {
        format!(
            "{}/lf/{}/api/v1/run/{}",
            self.config.base_url, self.config.flow_id, self.config.endpoint
        )
    }

    /// Sends one prompt through the flow and returns the raw JSON reply.
    /// Replies that carry an `error` field come back as-is; the caller
    /// decides how to surface them.
    pub fn run_flow(&self, input: &str) -> Result<Value, FlowError> {
        let payload = RunPayload {
            input_value: input,
            output_type: "chat",
            input_type: "chat",
        };

        let body = self
            .http
            .post(self.run_url())
            .bearer_auth(&self.config.application_token)
            .json(&payload)
            .send()?
            .text()?;

        Ok(serde_json::from_str(&body)?)
    }
}
