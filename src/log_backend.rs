use crate::format::{format, FormatConfig};
use crate::level::Level;
use crate::record::{Caller, LogRecord};
use crate::sink::LineSink;
use chrono::Utc;
use log::kv::{self, VisitSource};
use log::{LevelFilter, Metadata, Record};
use std::sync::Arc;

/// [`log::Log`] implementation that formats records with the same line
/// layout as [`PrettyLineLayer`](crate::layer::PrettyLineLayer).
///
/// Structured key-values (`log`'s `kv` feature) become attributes in the
/// order the call site listed them.
pub struct PrettyLineLogger {
    sink: Arc<dyn LineSink>,
    config: Arc<FormatConfig>,
    filter: LevelFilter,
    report_caller: bool,
}

impl PrettyLineLogger {
    pub fn new(sink: Arc<dyn LineSink>, config: FormatConfig, filter: LevelFilter) -> Self {
        Self {
            sink,
            config: Arc::new(config),
            filter,
            report_caller: true,
        }
    }

    pub fn with_caller(mut self, report_caller: bool) -> Self {
        self.report_caller = report_caller;
        self
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    /// Convert a `log` record into the backend-neutral form.
    pub fn to_log_record(&self, record: &Record<'_>) -> LogRecord {
        let mut collector = KeyValues::default();
        // The collector never fails; a failing source just truncates the list.
        let _ = record.key_values().visit(&mut collector);

        let caller = if self.report_caller {
            record.line().map(|line| Caller {
                function: record.module_path().unwrap_or_else(|| record.target()).to_string(),
                line,
            })
        } else {
            None
        };

        LogRecord {
            timestamp: Utc::now(),
            level: Level::from(record.level()),
            message: record.args().to_string(),
            caller,
            attributes: collector.0,
        }
    }
}

impl log::Log for PrettyLineLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format(&self.to_log_record(record), &self.config);
        if let Err(e) = self.sink.write_line(&line) {
            eprintln!("error writing log line: {}", e);
        }
    }

    fn flush(&self) {
        if let Err(e) = self.sink.flush() {
            eprintln!("error flushing log sink: {}", e);
        }
    }
}

#[derive(Default)]
struct KeyValues(Vec<(String, String)>);

impl<'kvs> VisitSource<'kvs> for KeyValues {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
