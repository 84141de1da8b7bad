//! Constants used throughout the application
//!
//! This module centralizes user-facing alert text and other constant values
//! to keep screens consistent.

// Alert Titles
pub const ALERT_MISSING_INFO: &str = "Missing Info";
pub const ALERT_ERROR: &str = "Error";
pub const ALERT_PLEASE_WAIT: &str = "Please Wait";

// Error Messages
pub const ERROR_FETCH_USERS_FAILED: &str = "Failed to load users. Please try again.";
pub const ERROR_UPDATE_USER_FAILED: &str = "Failed to update user. Please try again.";
pub const ERROR_DELETE_USER_FAILED: &str = "Failed to delete user. Please try again.";
pub const ERROR_UPLOAD_FAILED: &str = "Failed to upload document. Please try again.";
pub const ERROR_REQUEST_IN_FLIGHT: &str = "A request is already in progress.";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const ERROR_NO_API_TOKEN: &str = "Error: API token environment variable not set";

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TOKEN_ENV: &str = "REALTY_CRM_API_TOKEN";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
/// Upper bound accepted for `api.timeout_seconds`
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
