//! Application-wide constants

pub const MAX_NAME_LENGTH: u64 = 255;
pub const MAX_TITLE_LENGTH: u64 = 255;
pub const ROOT_DEPTH: i32 = 0;
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;
pub const ENV_PREFIX: &str = "MENU";
