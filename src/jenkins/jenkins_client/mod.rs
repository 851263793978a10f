use crate::constant::log::*;
use crate::jenkins::client_config::{ClientConfig, Credentials};
use crate::jenkins::endpoint::Endpoint;
use crate::jenkins::jenkins_url::build_request_url;
use crate::jenkins_error::JenkinsError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use std::fmt::{Debug, Formatter};

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Asynchronous Jenkins API client authentic by api token.
///
/// Holds an immutable config and a single http transport reused for every call.
/// Concurrent calls are as safe as [`reqwest::Client`] is, the client itself keeps no mutable state.
#[derive(Clone)]
pub struct JenkinsClient {
    config: ClientConfig,
    auth_header: String,
    client: Client,
}

impl Debug for JenkinsClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JenkinsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JenkinsClient {
    /// Creates a new asynchronous Jenkins API client.
    ///
    /// No request is made and the url is not validated until the first call.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Username and api token for authentication.
    /// * `base_url` - Base URL of the Jenkins server.
    pub fn new(credentials: Credentials, base_url: &str) -> Self {
        Self::from_config(ClientConfig::new(base_url, credentials))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Use a prepared transport, e.g. one with proxy or tls settings.
    pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
        Self {
            auth_header: config.credentials.basic_auth_header(),
            config,
            client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// # query
    ///
    /// Run one endpoint through the request pipeline.
    ///
    /// ### Returns
    ///
    /// `Ok(None)` if the endpoint has no response target, the body is then left unread.
    pub async fn query<E: Endpoint>(&self, endpoint: &E) -> Result<Option<E::Output>, JenkinsError> {
        let method = endpoint.method();
        let url = build_request_url(
            &self.config.base_url,
            &endpoint.path(),
            endpoint.api_suffix(),
            &endpoint.params(),
        )?;

        tracing::debug!(%method, %url, "{}", LOG_SEND_REQUEST);

        let mut req = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(USER_AGENT, CLIENT_USER_AGENT);

        if let Some(body) = endpoint.body()? {
            req = req.header(CONTENT_TYPE, body.content_type).body(body.bytes);
        }

        let resp = req.send().await?;

        let status = resp.status();
        if let Some(expected) = endpoint.expected_status() {
            if status != expected {
                tracing::warn!(%method, %status, "{}", LOG_UNEXPECTED_STATUS);
                return Err(JenkinsError::Request { method, status });
            }
        }

        let Some(codec) = endpoint.response_codec() else {
            tracing::trace!(%method, %status, "{}", LOG_SKIP_DECODE);
            drop(resp);
            return Ok(None);
        };

        let body = resp.bytes().await?;
        Ok(Some(codec.decode(&body)?))
    }
}
