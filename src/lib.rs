pub mod colors;
pub mod level;
pub mod record;
pub mod format;

pub mod sink;
pub mod output;
pub mod layer;

#[cfg(feature = "log")]
pub mod log_backend;

pub mod config;
pub mod env;
pub mod error;
pub mod init;

pub use colors::{ColorSpec, Colors, Element};
pub use config::{Backend, Options};
pub use error::SetupError;
pub use format::{format, format_line, FormatConfig, TimestampFormat};
pub use level::{colorize_level, Level, PadSide, Padding};
pub use record::{Caller, LogRecord};
