use log::{debug, error, info, trace, warn};
use tracing_prettyline::config::{Backend, Options};
use tracing_prettyline::format::TimestampFormat;
use tracing_prettyline::init::setup_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        backend: Backend::Log,
        timestamp_format: TimestampFormat::TimeOnly,
        pad_width: 7,
        ..Options::default()
    };
    setup_logging(&opts)?;

    trace!("This is trace");
    debug!("This is debug");
    info!(user = "ann", attempts = 3; "key-values keep their order");
    warn!("This is warn");
    error!(path = "/tmp"; "disk full");

    Ok(())
}
