//! Constants used throughout the eGP core crate.
//!
//! This module contains all filename and media-type constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Filename used for exported profile JSON files.
pub const EXPORT_FILE_NAME: &str = "userProfile.json";

/// The only media type accepted by profile import.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Media type reported for `.txt` files offered to import.
pub const PLAIN_TEXT_MEDIA_TYPE: &str = "text/plain";

/// Media type reported for files with no recognised extension.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Default export directory when no explicit directory is configured.
pub const DEFAULT_EXPORT_DIR: &str = ".";
