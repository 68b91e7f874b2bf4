//! Branding and application identity.
//!
//! Names and paths that show up in the UI, the CLI and on disk live here so
//! they stay consistent.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "PocketDesk";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "pocketdesk";

/// The directory name for application data (config and logs).
///
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "PocketDesk";

/// Default log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "pocketdesk.log";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "A terminal desk of small interactive widgets";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));
        assert!(LOG_FILE_NAME.starts_with(APP_BINARY_NAME));
    }
}
