use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, info_span, trace, warn};
use tracing_prettyline::format::format_line;
use tracing_prettyline::init::{init_tracing, tracing_subscriber_with_sink};
use tracing_prettyline::sink::StdoutSink;
use tracing_prettyline::{Level, LogRecord, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("tracing-prettyline version: {}", env!("CARGO_PKG_VERSION"));

    let opts = Options::default();
    init_tracing(&opts)?;

    trace!("This is trace");
    debug!("This is debug");
    info!("This is info");
    warn!("This is warn");
    error!(user_id = 42, reason = "invalid password", "This is error");

    let span = info_span!("request", id = 7);
    span.in_scope(|| info!(elapsed_ms = 12, "fields from enclosing spans come first"));

    info!("Fatal and panic have no tracing macro; they can still be formatted directly:");
    for level in [Level::Fatal, Level::Panic] {
        let record = LogRecord::new(level, "formatted without a backend")
            .with_caller("demo::main", line!())
            .with_attr("at", Utc::now().to_rfc3339());
        print!("{}", format_line(&record, &opts.format_config()));
    }

    info!("When not debugging, you'll want to turn off caller reporting:");
    let no_caller = tracing_subscriber_with_sink(Arc::new(StdoutSink), &Options::no_caller())?;
    tracing::subscriber::with_default(no_caller, || {
        trace!("This is trace");
        debug!("This is debug");
        info!("This is info");
        warn!("This is warn");
        error!("This is error");
    });

    Ok(())
}
