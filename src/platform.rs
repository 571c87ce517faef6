//! Platform-specific configuration

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password visibility toggle display
pub const REVEAL_SHORTCUT: &str = "Ctrl+T";

/// Copy key inside the submitted-values dialog
/// Plain `c`, since Ctrl+C quits on every platform
pub const COPY_KEY: char = 'c';
