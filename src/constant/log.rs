pub const ERR_INVALID_BASE_URL: &str = "Invalid jenkins url";
pub const ERR_TRANSPORT: &str = "Cannot connect to jenkins";
pub const ERR_DECODE_JSON: &str = "Failed to decode jenkins json response";
pub const ERR_DECODE_XML: &str = "Failed to decode jenkins xml response";
pub const ERR_ENCODE_XML: &str = "Failed to encode project descriptor as xml";
pub const ERR_INVALID_CONFIG: &str = "Invalid jenkins client config";

pub const LOG_SEND_REQUEST: &str = "sending jenkins request";
pub const LOG_UNEXPECTED_STATUS: &str = "jenkins returned unexpected status";
pub const LOG_SKIP_DECODE: &str = "no response target, body left unread";
pub const LOG_JOB_CREATED: &str = "jenkins job created";
