use crate::constant::log::*;
use quick_xml::de::DeError;
use quick_xml::se::SeError;
use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Every way a call against jenkins can fail.
#[derive(Error, Debug)]
pub enum JenkinsError {
    /// The configured base url could not be parsed.
    #[error("{msg}: {0}", msg = ERR_INVALID_BASE_URL)]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not complete: dns, refused connection, broken body stream.
    #[error("{msg}: {0}", msg = ERR_TRANSPORT)]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Jenkins answered with a status the endpoint does not accept.
    #[error("error: HTTP {method} returned status code: {}", .status.as_u16())]
    Request { method: Method, status: StatusCode },

    /// The request document could not be serialized.
    #[error("{msg}: {0}", msg = ERR_ENCODE_XML)]
    Encode(#[from] SeError),

    #[error("{msg}: {0}", msg = ERR_INVALID_CONFIG)]
    Config(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{msg}: {0}", msg = ERR_DECODE_JSON)]
    Json(#[from] serde_json::Error),

    #[error("{msg}: {0}", msg = ERR_DECODE_XML)]
    Xml(#[from] DeError),
}

impl JenkinsError {
    /// Status code carried by a [`JenkinsError::Request`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            JenkinsError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_message_carries_status_code() {
        let err = JenkinsError::Request {
            method: Method::POST,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };

        assert_eq!(
            err.to_string(),
            "error: HTTP POST returned status code: 500"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn decode_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = JenkinsError::from(DecodeError::from(json_err));

        assert!(err.to_string().starts_with(ERR_DECODE_JSON));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn invalid_url_error_mentions_url() {
        let err = JenkinsError::from(url::Url::parse("not a url").unwrap_err());

        assert!(err.to_string().starts_with(ERR_INVALID_BASE_URL));
    }
}
