use crate::colors::Colors;
use crate::env::*;
use crate::error::SetupError;
use crate::format::{FormatConfig, TimestampFormat};
use crate::level::{Level, PadSide, Padding};
use crate::output::{parse_output, OutputTarget};
use serde::Deserialize;
use std::str::FromStr;

/// Logging backend that receives the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `tracing` events through a `tracing_subscriber` layer.
    #[default]
    Tracing,
    /// `log` records through a `log::Log` implementation.
    Log,
}

impl FromStr for Backend {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" => Ok(Backend::Tracing),
            "log" => Ok(Backend::Log),
            _ => Err(SetupError::UnsupportedBackend(s.to_string())),
        }
    }
}

/// Setup options.
///
/// **Fields**
/// - `backend`: which logging facade to install.
/// - `color_enabled`: global color switch; `false` wins over every
///   per-element color.
/// - `level`: minimum level name (`trace` .. `panic`), enforced by the
///   backend.
/// - `output`: `stdout`, `stderr` or `filesystem` (not implemented yet).
/// - `report_caller`: render `[module:line]` after the level.
/// - `timestamp_format`: see [`TimestampFormat`].
/// - `utc_timestamps`: render timestamps in UTC instead of local time.
/// - `pad_level`, `pad_width`, `pad_side`: level tag alignment.
/// - `attribute_separator`: text between the message and the attributes.
/// - `colors`: per-element color overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub backend: Backend,
    pub color_enabled: bool,
    pub level: String,
    pub output: String,
    pub report_caller: bool,
    pub timestamp_format: TimestampFormat,
    pub utc_timestamps: bool,
    pub pad_level: bool,
    pub pad_width: usize,
    pub pad_side: PadSide,
    pub attribute_separator: String,
    pub colors: Colors,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            backend: Backend::Tracing,
            color_enabled: true,
            level: "trace".to_string(),
            output: "stdout".to_string(),
            report_caller: true,
            timestamp_format: TimestampFormat::Simple,
            utc_timestamps: false,
            pad_level: true,
            pad_width: 5,
            pad_side: PadSide::Left,
            attribute_separator: crate::format::DEFAULT_SEPARATOR.to_string(),
            colors: Colors::default(),
        }
    }
}

impl Options {
    /// Defaults with caller reporting turned off.
    pub fn no_caller() -> Self {
        Options { report_caller: false, ..Options::default() }
    }

    /// Parse options from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overlaid with the `PRETTYLINE_*` environment variables.
    pub fn from_env() -> Result<Self, SetupError> {
        Options::default().overlay_env(|key| std::env::var(key).ok())
    }

    /// Overlay values returned by `lookup` for the variables in
    /// [`crate::env`]. Values are validated here so a typo surfaces at
    /// startup instead of being silently ignored.
    pub fn overlay_env<F>(mut self, lookup: F) -> Result<Self, SetupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &'static str, value: String| {
            parse_flag(&value).ok_or(SetupError::InvalidEnv { key, value })
        };

        if let Some(value) = lookup(PRETTYLINE_BACKEND_ENV) {
            self.backend = value.parse()?;
        }
        if let Some(value) = lookup(PRETTYLINE_COLOR_ENV) {
            self.color_enabled = flag(PRETTYLINE_COLOR_ENV, value)?;
        }
        if let Some(value) = lookup(PRETTYLINE_LEVEL_ENV) {
            value.parse::<Level>()?;
            self.level = value;
        }
        if let Some(value) = lookup(PRETTYLINE_OUTPUT_ENV) {
            parse_output(&value)?;
            self.output = value;
        }
        if let Some(value) = lookup(PRETTYLINE_REPORT_CALLER_ENV) {
            self.report_caller = flag(PRETTYLINE_REPORT_CALLER_ENV, value)?;
        }
        if let Some(value) = lookup(PRETTYLINE_TIMESTAMP_ENV) {
            self.timestamp_format = value.parse().map_err(|_| SetupError::InvalidEnv {
                key: PRETTYLINE_TIMESTAMP_ENV,
                value,
            })?;
        }
        if let Some(value) = lookup(PRETTYLINE_UTC_ENV) {
            self.utc_timestamps = flag(PRETTYLINE_UTC_ENV, value)?;
        }
        if let Some(value) = lookup(PRETTYLINE_PAD_LEVEL_ENV) {
            self.pad_level = flag(PRETTYLINE_PAD_LEVEL_ENV, value)?;
        }
        if let Some(value) = lookup(PRETTYLINE_PAD_WIDTH_ENV) {
            self.pad_width = value.trim().parse().map_err(|_| SetupError::InvalidEnv {
                key: PRETTYLINE_PAD_WIDTH_ENV,
                value,
            })?;
        }
        if let Some(value) = lookup(PRETTYLINE_PAD_SIDE_ENV) {
            self.pad_side = PadSide::from(value);
        }
        if let Some(value) = lookup(PRETTYLINE_SEPARATOR_ENV) {
            self.attribute_separator = value;
        }
        Ok(self)
    }

    /// Parsed minimum level.
    pub fn parsed_level(&self) -> Result<Level, SetupError> {
        Ok(self.level.parse::<Level>()?)
    }

    pub fn output_target(&self) -> Result<OutputTarget, SetupError> {
        parse_output(&self.output)
    }

    /// Immutable formatter configuration derived from these options.
    pub fn format_config(&self) -> FormatConfig {
        let padding = if self.pad_level {
            Padding::new(self.pad_width, self.pad_side)
        } else {
            Padding::DISABLED
        };
        FormatConfig {
            timestamp_format: self.timestamp_format,
            utc: self.utc_timestamps,
            padding,
            separator: self.attribute_separator.clone(),
            color_enabled: self.color_enabled,
            colors: self.colors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorSpec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.backend, Backend::Tracing);
        assert!(opts.color_enabled);
        assert!(opts.report_caller);
        assert_eq!(opts.parsed_level().unwrap(), Level::Trace);
        assert_eq!(opts.output_target().unwrap(), OutputTarget::Stdout);

        let config = opts.format_config();
        assert_eq!(config.timestamp_format, TimestampFormat::Simple);
        assert!(!config.utc);
        assert_eq!(config.padding, Padding::new(5, PadSide::Left));
        assert_eq!(config.separator, ": ");
    }

    #[test]
    fn no_caller_only_changes_caller() {
        let opts = Options::no_caller();
        assert!(!opts.report_caller);
        assert_eq!(Options { report_caller: true, ..opts }, Options::default());
    }

    #[test]
    fn pad_disabled_yields_no_padding() {
        let opts = Options { pad_level: false, ..Options::default() };
        assert_eq!(opts.format_config().padding, Padding::DISABLED);
    }

    #[test]
    fn json_overrides_selected_fields() {
        let opts = Options::from_json(
            r#"{
                "backend": "log",
                "color_enabled": false,
                "level": "warn",
                "timestamp_format": "rfc3339",
                "pad_side": "right",
                "attribute_separator": " || ",
                "colors": { "timestamp": { "fg": null, "bg": null } }
            }"#,
        )
        .unwrap();
        assert_eq!(opts.backend, Backend::Log);
        assert!(!opts.color_enabled);
        assert_eq!(opts.parsed_level().unwrap(), Level::Warn);
        assert_eq!(opts.timestamp_format, TimestampFormat::Rfc3339);
        assert_eq!(opts.pad_side, PadSide::Right);
        assert_eq!(opts.attribute_separator, " || ");
        assert_eq!(opts.colors.timestamp, Some(ColorSpec::RESET));
        assert!(opts.report_caller);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(Options::from_json("{"), Err(SetupError::Json(_))));
    }

    #[test]
    fn invalid_level_is_reported_at_setup() {
        let opts = Options { level: "loud".to_string(), ..Options::default() };
        let err = opts.parsed_level().unwrap_err();
        assert!(err.to_string().starts_with("could not set configured log level"));
    }

    #[test]
    fn env_overlay() {
        let opts = Options::default()
            .overlay_env(lookup(&[
                (PRETTYLINE_BACKEND_ENV, "log"),
                (PRETTYLINE_COLOR_ENV, "0"),
                (PRETTYLINE_LEVEL_ENV, "error"),
                (PRETTYLINE_OUTPUT_ENV, "stderr"),
                (PRETTYLINE_REPORT_CALLER_ENV, "no"),
                (PRETTYLINE_TIMESTAMP_ENV, "time"),
                (PRETTYLINE_UTC_ENV, "true"),
                (PRETTYLINE_PAD_LEVEL_ENV, "yes"),
                (PRETTYLINE_PAD_WIDTH_ENV, "7"),
                (PRETTYLINE_PAD_SIDE_ENV, "right"),
                (PRETTYLINE_SEPARATOR_ENV, " | "),
            ]))
            .unwrap();
        assert_eq!(opts.backend, Backend::Log);
        assert!(!opts.color_enabled);
        assert_eq!(opts.level, "error");
        assert_eq!(opts.output_target().unwrap(), OutputTarget::Stderr);
        assert!(!opts.report_caller);
        assert_eq!(opts.timestamp_format, TimestampFormat::TimeOnly);
        assert!(opts.format_config().utc);
        assert_eq!(opts.format_config().padding, Padding::new(7, PadSide::Right));
        assert_eq!(opts.attribute_separator, " | ");
    }

    #[test]
    fn env_overlay_keeps_unset_values() {
        let opts = Options::default().overlay_env(lookup(&[])).unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn env_overlay_rejects_bad_values() {
        let err = Options::default()
            .overlay_env(lookup(&[(PRETTYLINE_PAD_WIDTH_ENV, "wide")]))
            .unwrap_err();
        assert!(matches!(err, SetupError::InvalidEnv { key: PRETTYLINE_PAD_WIDTH_ENV, .. }));

        let err = Options::default()
            .overlay_env(lookup(&[(PRETTYLINE_OUTPUT_ENV, "syslog")]))
            .unwrap_err();
        assert!(matches!(err, SetupError::UnsupportedOutput(_)));

        let err = Options::default()
            .overlay_env(lookup(&[(PRETTYLINE_BACKEND_ENV, "slog")]))
            .unwrap_err();
        assert!(matches!(err, SetupError::UnsupportedBackend(_)));
    }
}
