// General
pub const CONTACTS_BASE_PATH: &str = "/contacts";
pub const DELETED_MESSAGE: &str = "Deleted";

// Validation
pub const MAX_JSON_BODY_BYTES: u64 = 64 * 1024;
