use crate::colors::{Colors, Element};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Severity of a log record, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }

    /// Upper-case tag as it appears in a formatted line.
    pub fn as_upper_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// Filter for the `tracing` backend. It has no fatal or panic levels,
    /// so both clamp to `ERROR`.
    pub fn tracing_filter(&self) -> LevelFilter {
        match self {
            Level::Trace => LevelFilter::TRACE,
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warn => LevelFilter::WARN,
            Level::Error | Level::Fatal | Level::Panic => LevelFilter::ERROR,
        }
    }

    #[cfg(feature = "log")]
    pub fn log_filter(&self) -> log::LevelFilter {
        match self {
            Level::Trace => log::LevelFilter::Trace,
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error | Level::Fatal | Level::Panic => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level::Trace,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

#[cfg(feature = "log")]
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

/// Which side of the level tag receives the fill characters.
///
/// `Left` fills on the left and so right-aligns the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PadSide {
    #[default]
    Left,
    Right,
}

impl From<&str> for PadSide {
    /// Only `left` selects left padding; any other name pads on the right.
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("left") {
            PadSide::Left
        } else {
            PadSide::Right
        }
    }
}

impl From<String> for PadSide {
    fn from(s: String) -> Self {
        PadSide::from(s.as_str())
    }
}

/// Level tag padding instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub enabled: bool,
    pub width: usize,
    pub side: PadSide,
}

impl Padding {
    pub const DISABLED: Padding = Padding { enabled: false, width: 0, side: PadSide::Left };

    pub fn new(width: usize, side: PadSide) -> Self {
        Padding { enabled: true, width, side }
    }

    fn apply(&self, text: &str) -> String {
        if !self.enabled || self.width == 0 {
            return text.to_string();
        }
        let width = self.width;
        match self.side {
            PadSide::Left => format!("{text:>width$}"),
            PadSide::Right => format!("{text:<width$}"),
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::DISABLED
    }
}

fn level_element(text: &str) -> Option<Element> {
    const TABLE: [(&str, Element); 8] = [
        ("TRACE", Element::LevelTrace),
        ("DEBUG", Element::LevelDebug),
        ("INFO", Element::LevelInfo),
        ("WARN", Element::LevelWarn),
        ("WARNING", Element::LevelWarning),
        ("ERROR", Element::LevelError),
        ("FATAL", Element::LevelFatal),
        ("PANIC", Element::LevelPanic),
    ];
    TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
        .map(|(_, element)| *element)
}

/// Render the level tag: pad it, then color it by the trimmed level name.
///
/// Unknown names come back padded but uncolored.
pub fn colorize_level(level_text: &str, padding: &Padding, colors: &Colors, enabled: bool) -> String {
    let trimmed = level_text.trim();
    let padded = padding.apply(trimmed);
    match level_element(trimmed) {
        Some(element) => colors.paint(element, enabled, &padded),
        None => padded,
    }
}
