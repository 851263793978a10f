use crate::jenkins::endpoint::{Codec, Endpoint};
use reqwest::{Method, StatusCode};
use serde::de::IgnoredAny;

/// ping Jenkins.
pub struct Ping;

impl Endpoint for Ping {
    type Output = IgnoredAny;

    /// HTTP method used (GET).
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        String::new()
    }

    /// Ask for nothing but the `ping` tree to keep the answer tiny.
    fn params(&self) -> Vec<(&str, &str)> {
        vec![("tree", "ping")]
    }

    fn response_codec(&self) -> Option<Codec> {
        None
    }

    fn expected_status(&self) -> Option<StatusCode> {
        Some(StatusCode::OK)
    }
}
