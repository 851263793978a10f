use serde::{Deserialize, Serialize};

/// # Project Descriptor
///
/// The xml document jenkins uses to define a freestyle job.
///
/// Serialized as `<project><description>...</description></project>`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename = "project")]
pub struct ProjectDescriptor {
    #[serde(default)]
    pub description: String,
}

impl ProjectDescriptor {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn to_xml(&self) -> Result<String, quick_xml::se::SeError> {
        quick_xml::se::to_string(self)
    }
}
