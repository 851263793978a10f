use crate::jenkins::endpoint::Endpoint;
use crate::jenkins::jenkins_model::job_list::JobList;
use reqwest::Method;

/// Endpoint for listing every job at the jenkins root.
pub struct ListJobs;

impl Endpoint for ListJobs {
    type Output = JobList;

    /// HTTP method used (GET).
    fn method(&self) -> Method {
        Method::GET
    }

    /// The root itself, resolves to `<jenkins>/api/json`.
    fn path(&self) -> String {
        String::new()
    }
}
