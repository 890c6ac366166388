use std::sync::Arc;

use crate::error::SetupError;
use crate::sink::{LineSink, StderrSink, StdoutSink};

/// Output destinations that can be selected by name in [`Options`].
///
/// [`Options`]: crate::config::Options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    Stderr,
    Filesystem,
}

/// Parse an output name.
///
/// Recognized names: `stdout`, `stderr`, `filesystem` (case-insensitive).
pub fn parse_output(name: &str) -> Result<OutputTarget, SetupError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "stdout" => Ok(OutputTarget::Stdout),
        "stderr" => Ok(OutputTarget::Stderr),
        "filesystem" => Ok(OutputTarget::Filesystem),
        _ => Err(SetupError::UnsupportedOutput(name.to_string())),
    }
}

/// Create the [`LineSink`] for an output target.
pub fn make_sink(target: OutputTarget) -> Result<Arc<dyn LineSink>, SetupError> {
    match target {
        OutputTarget::Stdout => Ok(Arc::new(StdoutSink) as Arc<dyn LineSink>),
        OutputTarget::Stderr => Ok(Arc::new(StderrSink) as Arc<dyn LineSink>),
        OutputTarget::Filesystem => Err(SetupError::NotImplemented("filesystem log output")),
    }
}
