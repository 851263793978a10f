pub mod client_config;
pub mod endpoint;
pub mod jenkins_client;
pub mod jenkins_endpoint;
mod jenkins_url;
pub mod jenkins_model;
mod query;
