use crate::constant::util::{mask_sensitive, SensitiveMode};
use crate::jenkins_error::JenkinsError;
use base64::Engine;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// Username and api token sent as http basic auth on every request.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,

    /// get it at `<jenkins>/user/<username>/configure`.
    pub api_token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_token: api_token.into(),
        }
    }

    /// Value of the `Authorization` header.
    pub fn basic_auth_header(&self) -> String {
        format!(
            "Basic {}",
            base64::prelude::BASE64_STANDARD
                .encode(format!("{}:{}", self.username, self.api_token).as_bytes())
        )
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field(
                "api_token",
                &mask_sensitive(&self.api_token, SensitiveMode::Normal(4)),
            )
            .finish()
    }
}

/// # Client Config
///
/// Everything a [`JenkinsClient`](crate::JenkinsClient) needs, fixed at construction.
///
/// The base url is kept as given and only parsed when a request is built.
///
/// ```toml
/// base_url = "https://jenkins.example.com"
///
/// [credentials]
/// username = "somebody@email.com"
/// api_token = "11aa22bb33cc"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Parse a config from a toml snippet owned by the embedding application.
    pub fn from_toml_str(content: &str) -> Result<Self, JenkinsError> {
        Ok(toml::from_str(content)?)
    }
}
