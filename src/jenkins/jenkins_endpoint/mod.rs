pub mod create_item;
pub mod job_config;
pub mod job_info;
pub mod list_jobs;
pub mod ping;
