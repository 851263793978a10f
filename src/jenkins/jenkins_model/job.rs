use crate::jenkins::jenkins_model::job_status::JobStatus;
use serde::Deserialize;

/// A job as listed by jenkins. Reflects the server at the moment of the call.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,

    pub url: String,

    /// raw ball color, like "blue" or "red_anime".
    #[serde(default)]
    pub color: String,
}

impl Job {
    /// Last build status decoded from [`Job::color`].
    pub fn status(&self) -> JobStatus {
        JobStatus::from_color(&self.color)
    }

    /// Whether a build is running right now.
    pub fn is_building(&self) -> bool {
        JobStatus::is_animated(&self.color)
    }
}
