use crate::jenkins::endpoint::{Codec, Endpoint, RequestBody};
use crate::jenkins::jenkins_model::project_descriptor::ProjectDescriptor;
use crate::jenkins_error::JenkinsError;
use reqwest::{Method, StatusCode};
use serde::de::IgnoredAny;

/// Endpoint for creating a new job from a project descriptor.
pub struct CreateItem<'a> {
    pub job_name: &'a str,

    pub project: &'a ProjectDescriptor,
}

impl Endpoint for CreateItem<'_> {
    type Output = IgnoredAny;

    /// HTTP method used (POST).
    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/createItem".to_string()
    }

    fn params(&self) -> Vec<(&str, &str)> {
        vec![("name", self.job_name)]
    }

    fn body(&self) -> Result<Option<RequestBody>, JenkinsError> {
        Ok(Some(RequestBody::xml(self.project.to_xml()?)))
    }

    /// jenkins answers with nothing worth reading.
    fn response_codec(&self) -> Option<Codec> {
        None
    }

    fn expected_status(&self) -> Option<StatusCode> {
        Some(StatusCode::OK)
    }
}
