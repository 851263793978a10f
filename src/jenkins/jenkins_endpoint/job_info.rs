use crate::jenkins::endpoint::Endpoint;
use crate::jenkins::jenkins_model::job_detail::JobDetail;
use reqwest::Method;

/// Endpoint for retrieving information about Jenkins job.
pub struct JobInfo<'a> {
    /// Name of the Jenkins job.
    pub job_name: &'a str,
}

impl Endpoint for JobInfo<'_> {
    type Output = JobDetail;

    /// HTTP method used (GET).
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/job/{}", self.job_name)
    }
}
