use crate::colors::{Colors, Element};
use crate::level::{colorize_level, Padding};
use crate::record::LogRecord;
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::Deserialize;
use std::fmt::Write as _;
use std::str::FromStr;

/// Glyph placed between the level/caller block and the message.
pub const ARROW: &str = " ▶ ";

/// Separator written between the message and the attribute trailer.
pub const DEFAULT_SEPARATOR: &str = ": ";

/// How the record timestamp is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `2025-11-07T14:30:45-04:00`
    #[serde(alias = "RFC3339")]
    Rfc3339,
    /// `2025-11-07 14:30:45`
    Standard,
    /// `20251107.143045`
    #[default]
    Simple,
    /// `14:30:45`
    #[serde(alias = "time", alias = "timeonly")]
    TimeOnly,
}

impl TimestampFormat {
    /// Render `timestamp` in whatever zone it carries. RFC3339 includes
    /// that zone's offset (`Z` for UTC).
    pub fn render<Tz>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339 => timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Standard => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Simple => timestamp.format("%Y%m%d.%H%M%S").to_string(),
            TimestampFormat::TimeOnly => timestamp.format("%H:%M:%S").to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown timestamp format: {0:?}")]
pub struct ParseTimestampFormatError(pub String);

impl FromStr for TimestampFormat {
    type Err = ParseTimestampFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rfc3339" => Ok(TimestampFormat::Rfc3339),
            "standard" => Ok(TimestampFormat::Standard),
            "simple" => Ok(TimestampFormat::Simple),
            "time" | "time_only" | "timeonly" => Ok(TimestampFormat::TimeOnly),
            _ => Err(ParseTimestampFormatError(s.to_string())),
        }
    }
}

/// Immutable formatting configuration shared by every formatting call.
///
/// To change settings at runtime build a new value; nothing here is
/// mutated once a layer or logger holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub timestamp_format: TimestampFormat,
    /// Render timestamps in UTC instead of the local zone.
    pub utc: bool,
    pub padding: Padding,
    pub separator: String,
    pub color_enabled: bool,
    pub colors: Colors,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            timestamp_format: TimestampFormat::Simple,
            utc: false,
            padding: Padding::DISABLED,
            separator: DEFAULT_SEPARATOR.to_string(),
            color_enabled: true,
            colors: Colors::default(),
        }
    }
}

impl FormatConfig {
    /// Timestamp text for `timestamp`, in the local zone unless `utc` is set.
    pub fn render_timestamp(&self, timestamp: &DateTime<Utc>) -> String {
        if self.utc {
            self.timestamp_format.render(timestamp)
        } else {
            self.timestamp_format.render(&timestamp.with_timezone(&Local))
        }
    }

    fn paint(&self, element: Element, text: &str) -> String {
        self.colors.paint(element, self.color_enabled, text)
    }
}

/// Render `record` as one line of text terminated by `\n`.
///
/// Layout: timestamp, level tag, optional `[caller:line]`, optional arrow
/// and message, optional attribute trailer.
pub fn format_line(record: &LogRecord, config: &FormatConfig) -> String {
    let mut line = String::with_capacity(64 + record.message.len());

    line.push_str(&config.paint(Element::Timestamp, &config.render_timestamp(&record.timestamp)));
    line.push(' ');
    line.push_str(&colorize_level(
        record.level.as_upper_str(),
        &config.padding,
        &config.colors,
        config.color_enabled,
    ));

    if let Some(caller) = &record.caller {
        // Writing to a String cannot fail.
        let _ = write!(
            line,
            " [{}:{}]",
            config.paint(Element::CallerFunction, &caller.function),
            config.paint(Element::CallerLine, &caller.line.to_string()),
        );
    }

    if !record.message.is_empty() {
        line.push_str(&config.paint(Element::Arrow, ARROW));
        line.push_str(&config.paint(Element::Message, &record.message));
    }

    if !record.attributes.is_empty() {
        line.push_str(&config.separator);
        for (i, (key, value)) in record.attributes.iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            let _ = write!(
                line,
                "{}={{{}}}",
                config.paint(Element::AttrKey, key),
                config.paint(Element::AttrValue, value),
            );
        }
    }

    line.push('\n');
    line
}

/// Byte form of [`format_line`], ready for a sink.
pub fn format(record: &LogRecord, config: &FormatConfig) -> Vec<u8> {
    format_line(record, config).into_bytes()
}
