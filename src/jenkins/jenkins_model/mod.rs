pub mod job;
pub mod job_detail;
pub mod job_list;
pub mod job_status;
pub mod project_descriptor;
