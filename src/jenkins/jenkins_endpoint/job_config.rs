use crate::jenkins::endpoint::{Codec, Endpoint};
use crate::jenkins::jenkins_model::project_descriptor::ProjectDescriptor;
use reqwest::Method;

/// Endpoint for get config.xml about Jenkins job.
pub struct JobConfig<'a> {
    /// Name of the Jenkins job.
    pub job_name: &'a str,
}

impl Endpoint for JobConfig<'_> {
    type Output = ProjectDescriptor;

    /// HTTP method used (GET).
    fn method(&self) -> Method {
        Method::GET
    }

    /// API path for get job config.
    fn path(&self) -> String {
        format!("/job/{}/config.xml", self.job_name)
    }

    /// config.xml is served as is, not through the json api.
    fn api_suffix(&self) -> Option<&'static str> {
        None
    }

    fn response_codec(&self) -> Option<Codec> {
        Some(Codec::Xml)
    }
}
