use crate::level::ParseLevelError;

/// Errors raised while turning [`Options`] into an installed logger.
///
/// Formatting itself never fails; every failure mode lives here, at setup
/// time.
///
/// [`Options`]: crate::config::Options
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("could not set configured log level: {0}")]
    Level(#[from] ParseLevelError),

    #[error("unsupported log output: {0}")]
    UnsupportedOutput(String),

    #[error("not yet implemented: {0}")]
    NotImplemented(&'static str),

    #[error("unsupported backend: {0}")]
    UnsupportedBackend(String),

    #[error("{0} feature is not enabled")]
    FeatureDisabled(&'static str),

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("global tracing subscriber already set: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[cfg(feature = "log")]
    #[error("global logger already set: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
