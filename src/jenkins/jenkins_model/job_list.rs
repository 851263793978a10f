use crate::jenkins::jenkins_model::job::Job;
use serde::Deserialize;
use std::slice::Iter;

/// Body of `GET <jenkins>/api/json`.
#[derive(Deserialize, Debug, Default)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl<'a> IntoIterator for &'a JobList {
    type Item = &'a Job;
    type IntoIter = Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

impl IntoIterator for JobList {
    type Item = Job;
    type IntoIter = std::vec::IntoIter<Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.into_iter()
    }
}
