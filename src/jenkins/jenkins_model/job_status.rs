const ANIME_SUFFIX: &str = "_anime";

/// Last build status encoded in a job's ball color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum JobStatus {
    Success,
    Unstable,
    Failure,
    Aborted,
    NotBuilt,
    Disabled,
    #[default]
    Unknown,
}

impl JobStatus {
    pub fn from_color(color: &str) -> Self {
        match color.strip_suffix(ANIME_SUFFIX).unwrap_or(color) {
            "blue" => JobStatus::Success,
            "yellow" => JobStatus::Unstable,
            "red" => JobStatus::Failure,
            "aborted" => JobStatus::Aborted,
            "notbuilt" | "grey" => JobStatus::NotBuilt,
            "disabled" => JobStatus::Disabled,
            _ => JobStatus::Unknown,
        }
    }

    /// jenkins animates the ball while a build is running.
    pub fn is_animated(color: &str) -> bool {
        color.ends_with(ANIME_SUFFIX)
    }
}
