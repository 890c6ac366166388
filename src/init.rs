use crate::config::{Backend, Options};
use crate::error::SetupError;
use crate::layer::PrettyLineLayer;
use crate::output::make_sink;
use crate::sink::LineSink;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Build the subscriber that [`init_tracing`] installs, writing to `sink`.
///
/// **Parameters**
/// - `sink`: destination for formatted lines.
/// - `opts`: [`Options`]; `level`, `report_caller` and the formatting
///   fields are used, `output` and `backend` are ignored.
///
/// **Returns**
/// - A `Registry` stacked with a level filter and [`PrettyLineLayer`].
/// - `Err(SetupError::Level)` if `opts.level` is not a known level.
pub fn tracing_subscriber_with_sink(
    sink: Arc<dyn LineSink>,
    opts: &Options,
) -> Result<impl tracing::Subscriber + Send + Sync, SetupError> {
    let filter = opts.parsed_level()?.tracing_filter();
    let layer = PrettyLineLayer::new(sink, opts.format_config()).with_caller(opts.report_caller);
    Ok(Registry::default().with(filter).with(layer))
}

/// Install the formatter as the global `tracing` subscriber.
///
/// **Effects**
///
/// Validates the options, sets the global default subscriber and emits
/// a "logging initialized" event through it.
pub fn init_tracing(opts: &Options) -> Result<(), SetupError> {
    let sink = make_sink(opts.output_target()?)?;
    let subscriber = tracing_subscriber_with_sink(sink, opts)?;
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::info!("logging initialized");
    Ok(())
}

/// Install the formatter as the global `log` logger.
///
/// Fatal and panic thresholds clamp to `log`'s error level.
#[cfg(feature = "log")]
pub fn init_log(opts: &Options) -> Result<(), SetupError> {
    use crate::log_backend::PrettyLineLogger;

    let level = opts.parsed_level()?;
    let sink = make_sink(opts.output_target()?)?;
    let logger = PrettyLineLogger::new(sink, opts.format_config(), level.log_filter())
        .with_caller(opts.report_caller);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level.log_filter());
    log::info!("logging initialized");
    Ok(())
}

/// Install the backend selected by `opts.backend`.
pub fn setup_logging(opts: &Options) -> Result<(), SetupError> {
    match opts.backend {
        Backend::Tracing => init_tracing(opts),
        Backend::Log => {
            #[cfg(feature = "log")]
            {
                init_log(opts)
            }

            #[cfg(not(feature = "log"))]
            {
                Err(SetupError::FeatureDisabled("log"))
            }
        }
    }
}

/// Install the `tracing` backend with [`Options::default`].
pub fn init() -> Result<(), SetupError> {
    init_tracing(&Options::default())
}
