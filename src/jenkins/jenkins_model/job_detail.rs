use crate::jenkins::jenkins_model::job_status::JobStatus;
use serde::Deserialize;

/// Body of `GET <jenkins>/job/<name>/api/json`, reduced to what is commonly needed.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub name: String,

    pub url: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub buildable: bool,
}

impl JobDetail {
    pub fn status(&self) -> JobStatus {
        JobStatus::from_color(&self.color)
    }
}
