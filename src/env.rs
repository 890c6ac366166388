//! Environment variable names read by [`Options::from_env`].
//!
//! Every variable is optional; unset variables keep the value from
//! [`Options::default`].
//!
//! [`Options::from_env`]: crate::config::Options::from_env
//! [`Options::default`]: crate::config::Options::default

/// Backend name: `tracing` or `log`.
pub const PRETTYLINE_BACKEND_ENV: &str = "PRETTYLINE_BACKEND";

/// `true`/`false` (also `1`/`0`, `yes`/`no`, `on`/`off`).
pub const PRETTYLINE_COLOR_ENV: &str = "PRETTYLINE_COLOR";

/// Minimum level, e.g. `info`.
pub const PRETTYLINE_LEVEL_ENV: &str = "PRETTYLINE_LEVEL";

/// `stdout`, `stderr` or `filesystem`.
pub const PRETTYLINE_OUTPUT_ENV: &str = "PRETTYLINE_OUTPUT";

/// Whether to render `[module:line]` after the level.
pub const PRETTYLINE_REPORT_CALLER_ENV: &str = "PRETTYLINE_REPORT_CALLER";

/// `rfc3339`, `standard`, `simple` or `time`.
pub const PRETTYLINE_TIMESTAMP_ENV: &str = "PRETTYLINE_TIMESTAMP";

/// Render timestamps in UTC instead of the local zone.
pub const PRETTYLINE_UTC_ENV: &str = "PRETTYLINE_UTC";

pub const PRETTYLINE_PAD_LEVEL_ENV: &str = "PRETTYLINE_PAD_LEVEL";

pub const PRETTYLINE_PAD_WIDTH_ENV: &str = "PRETTYLINE_PAD_WIDTH";

/// `left` or `right`.
pub const PRETTYLINE_PAD_SIDE_ENV: &str = "PRETTYLINE_PAD_SIDE";

/// Text placed between the message and the attributes.
pub const PRETTYLINE_SEPARATOR_ENV: &str = "PRETTYLINE_SEPARATOR";

/// Parse a boolean flag value.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
