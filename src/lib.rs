//! # jenkins-lite
//!
//! A small async client for the Jenkins remote access api.
//!
//! Every call is one authenticated request against the server, answered by one response:
//! - list the jobs at the jenkins root
//! - read a single job or its config.xml
//! - create a job from a [`ProjectDescriptor`]
//!
//! ```no_run
//! use jenkins_lite::{Credentials, JenkinsClient, ProjectDescriptor};
//!
//! # async fn demo() -> Result<(), jenkins_lite::JenkinsError> {
//! let client = JenkinsClient::new(
//!     Credentials::new("somebody@email.com", "11aa22bb33cc"),
//!     "https://jenkins.example.com",
//! );
//!
//! for job in client.list_jobs().await? {
//!     println!("{} {:?}", job.name, job.status());
//! }
//!
//! client
//!     .create_job(&ProjectDescriptor::new("nightly packaging"), "nightly")
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod constant;
pub mod jenkins;
mod jenkins_error;

pub use jenkins::client_config::{ClientConfig, Credentials};
pub use jenkins::endpoint::{Codec, Endpoint, RequestBody};
pub use jenkins::jenkins_client::JenkinsClient;
pub use jenkins::jenkins_model::job::Job;
pub use jenkins::jenkins_model::job_detail::JobDetail;
pub use jenkins::jenkins_model::job_status::JobStatus;
pub use jenkins::jenkins_model::project_descriptor::ProjectDescriptor;
pub use jenkins_error::{DecodeError, JenkinsError};
