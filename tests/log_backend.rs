#![cfg(feature = "log")]

use std::sync::Arc;

use log::{Level, LevelFilter, Log, Record};
use tracing_prettyline::format::FormatConfig;
use tracing_prettyline::log_backend::PrettyLineLogger;
use tracing_prettyline::sink::MemorySink;

fn plain_logger(sink: &MemorySink, filter: LevelFilter) -> PrettyLineLogger {
    PrettyLineLogger::new(
        Arc::new(sink.clone()),
        FormatConfig { color_enabled: false, ..FormatConfig::default() },
        filter,
    )
}

fn after_timestamp(line: &str) -> &str {
    line.split_once(' ').map(|(_, rest)| rest).unwrap_or(line)
}

#[test]
fn record_with_key_values() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, LevelFilter::Trace);
    let kvs: &[(&str, &str)] = &[("path", "/tmp"), ("mode", "rw")];

    logger.log(
        &Record::builder()
            .args(format_args!("disk full"))
            .level(Level::Error)
            .target("svc")
            .module_path(Some("svc::writer"))
            .line(Some(88))
            .key_values(&kvs)
            .build(),
    );

    assert_eq!(
        after_timestamp(&sink.lines()[0]),
        "ERROR [svc::writer:88] ▶ disk full: path={/tmp}, mode={rw}"
    );
}

#[test]
fn target_stands_in_for_missing_module_path() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, LevelFilter::Trace);

    logger.log(
        &Record::builder()
            .args(format_args!("hi"))
            .level(Level::Info)
            .target("app")
            .line(Some(3))
            .build(),
    );

    assert_eq!(after_timestamp(&sink.lines()[0]), "INFO [app:3] ▶ hi");
}

#[test]
fn caller_can_be_disabled() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, LevelFilter::Trace).with_caller(false);

    logger.log(
        &Record::builder()
            .args(format_args!("quiet"))
            .level(Level::Debug)
            .module_path(Some("app"))
            .line(Some(10))
            .build(),
    );

    assert_eq!(after_timestamp(&sink.lines()[0]), "DEBUG ▶ quiet");
}

#[test]
fn records_below_filter_are_dropped() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, LevelFilter::Warn);

    logger.log(&Record::builder().args(format_args!("no")).level(Level::Info).build());
    logger.log(&Record::builder().args(format_args!("yes")).level(Level::Warn).build());

    assert_eq!(sink.lines().len(), 1);
    assert_eq!(after_timestamp(&sink.lines()[0]), "WARN ▶ yes");
    assert!(!logger.enabled(&log::Metadata::builder().level(Level::Debug).build()));
    assert_eq!(logger.filter(), LevelFilter::Warn);
}

#[test]
fn conversion_keeps_fields() {
    let sink = MemorySink::new();
    let logger = plain_logger(&sink, LevelFilter::Trace);
    let kvs: &[(&str, i32)] = &[("b", 2), ("a", 1)];

    let record = logger.to_log_record(
        &Record::builder()
            .args(format_args!("m"))
            .level(Level::Trace)
            .key_values(&kvs)
            .build(),
    );

    assert_eq!(record.level, tracing_prettyline::Level::Trace);
    assert_eq!(record.message, "m");
    assert_eq!(record.caller, None);
    assert_eq!(
        record.attributes,
        vec![("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
    );
}
