use crate::constant::log::*;
use crate::jenkins::jenkins_client::JenkinsClient;
use crate::jenkins::jenkins_endpoint::create_item::CreateItem;
use crate::jenkins::jenkins_endpoint::job_config::JobConfig;
use crate::jenkins::jenkins_endpoint::job_info::JobInfo;
use crate::jenkins::jenkins_endpoint::list_jobs::ListJobs;
use crate::jenkins::jenkins_endpoint::ping::Ping;
use crate::jenkins::jenkins_model::job::Job;
use crate::jenkins::jenkins_model::job_detail::JobDetail;
use crate::jenkins::jenkins_model::project_descriptor::ProjectDescriptor;
use crate::jenkins_error::{DecodeError, JenkinsError};
use quick_xml::de::DeError;
use serde::de::Error as _;

impl JenkinsClient {
    /// Hand the client back only if jenkins accepts its url and credentials.
    pub async fn verified(self) -> Result<Self, JenkinsError> {
        self.ping().await?;
        Ok(self)
    }

    /// ping Jenkins. Fails with [`JenkinsError::Request`] unless it answers 200.
    pub async fn ping(&self) -> Result<(), JenkinsError> {
        self.query(&Ping).await.map(|_| ())
    }

    /// # list jobs
    ///
    /// All jobs at the jenkins root, in the order the server lists them.
    /// No pagination: whatever the single response holds is returned.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, JenkinsError> {
        let list = self.query(&ListJobs).await?.unwrap_or_default();
        Ok(list.jobs)
    }

    pub async fn get_job(&self, job_name: &str) -> Result<JobDetail, JenkinsError> {
        self.query(&JobInfo { job_name }).await?.ok_or_else(|| {
            DecodeError::Json(serde_json::Error::custom("no job in response")).into()
        })
    }

    /// The description part of a job's config.xml.
    pub async fn get_job_config(&self, job_name: &str) -> Result<ProjectDescriptor, JenkinsError> {
        self.query(&JobConfig { job_name }).await?.ok_or_else(|| {
            DecodeError::Xml(DeError::Custom("no project in response".to_string())).into()
        })
    }

    /// # create job
    ///
    /// POST the descriptor as xml to `createItem`. Only HTTP 200 counts as success.
    ///
    /// ### Arguments
    ///
    /// * `project`: descriptor of the new job.
    /// * `job_name`: name of the new job, sent as the `name` query parameter.
    pub async fn create_job(
        &self,
        project: &ProjectDescriptor,
        job_name: &str,
    ) -> Result<(), JenkinsError> {
        self.query(&CreateItem { job_name, project }).await?;
        tracing::info!(job_name, "{}", LOG_JOB_CREATED);
        Ok(())
    }
}
