use crate::jenkins_error::{DecodeError, JenkinsError};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// Suffix jenkins expects after any path to get the remote api in json.
pub const API_JSON_SUFFIX: &str = "/api/json";

pub const CONTENT_TYPE_XML: &str = "application/xml";

/// How a response body is decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    Json,
    Xml,
}

impl Codec {
    /// json for reads, xml for writes.
    pub fn for_method(method: &Method) -> Self {
        if *method == Method::GET {
            Codec::Json
        } else {
            Codec::Xml
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, DecodeError> {
        match self {
            Codec::Json => Ok(serde_json::from_slice(body)?),
            Codec::Xml => Ok(quick_xml::de::from_reader(body)?),
        }
    }
}

/// Body attached to an outgoing request.
#[derive(Debug, Clone)]
pub struct RequestBody {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl RequestBody {
    pub fn xml(content: String) -> Self {
        Self {
            content_type: CONTENT_TYPE_XML,
            bytes: content.into_bytes(),
        }
    }
}

/// # Endpoint
///
/// One remote api call, described for the request pipeline of
/// [`JenkinsClient`](crate::JenkinsClient).
pub trait Endpoint {
    /// Shape the response body is decoded into.
    type Output: DeserializeOwned;

    fn method(&self) -> Method;

    /// Path appended to the base url, with a leading slash or empty.
    fn path(&self) -> String;

    /// Appended after [`Endpoint::path`]. GET requests go to the json api by default.
    fn api_suffix(&self) -> Option<&'static str> {
        (self.method() == Method::GET).then_some(API_JSON_SUFFIX)
    }

    /// Query parameters. Empty means no query string at all.
    fn params(&self) -> Vec<(&str, &str)> {
        Vec::new()
    }

    fn body(&self) -> Result<Option<RequestBody>, JenkinsError> {
        Ok(None)
    }

    /// `None` means there is no target: the body is never read.
    fn response_codec(&self) -> Option<Codec> {
        Some(Codec::for_method(&self.method()))
    }

    /// Any other status is turned into [`JenkinsError::Request`]. `None` accepts all.
    fn expected_status(&self) -> Option<StatusCode> {
        None
    }
}
