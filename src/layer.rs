use crate::format::{format, FormatConfig};
use crate::level::Level;
use crate::record::{Caller, LogRecord};
use crate::sink::LineSink;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that renders every event it sees as one
/// formatted line and writes it to a [`LineSink`].
///
/// Level filtering is left to the subscriber stack (for example a
/// `LevelFilter` layer); this layer formats whatever reaches it. Fields
/// recorded on enclosing spans are emitted before the event's own fields,
/// outermost span first.
pub struct PrettyLineLayer {
    sink: Arc<dyn LineSink>,
    config: Arc<FormatConfig>,
    report_caller: bool,
    span_fields: bool,
}

impl PrettyLineLayer {
    pub fn new(sink: Arc<dyn LineSink>, config: FormatConfig) -> Self {
        Self {
            sink,
            config: Arc::new(config),
            report_caller: true,
            span_fields: true,
        }
    }

    /// Render `[module:line]` for each event.
    pub fn with_caller(mut self, report_caller: bool) -> Self {
        self.report_caller = report_caller;
        self
    }

    /// Include fields of enclosing spans in the attribute trailer.
    pub fn with_span_fields(mut self, span_fields: bool) -> Self {
        self.span_fields = span_fields;
        self
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    fn write(&self, record: &LogRecord) {
        let line = format(record, &self.config);
        if let Err(e) = self.sink.write_line(&line) {
            eprintln!("error writing log line: {}", e);
        }
    }
}

/// Fields captured from a span, stored in its registry extensions.
#[derive(Default)]
struct SpanFields(Vec<(String, String)>);

impl<S> Layer<S> for PrettyLineLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        if !self.span_fields {
            return;
        }
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::for_span();
        attrs.record(&mut visitor);
        span.extensions_mut().insert(SpanFields(visitor.attributes));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        if !self.span_fields {
            return;
        }
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::for_span();
        values.record(&mut visitor);
        let mut extensions = span.extensions_mut();
        match extensions.get_mut::<SpanFields>() {
            Some(fields) => fields.0.append(&mut visitor.attributes),
            None => extensions.insert(SpanFields(visitor.attributes)),
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let meta = event.metadata();

        let mut attributes = Vec::new();
        if self.span_fields {
            if let Some(scope) = ctx.event_scope(event) {
                for span in scope.from_root() {
                    if let Some(fields) = span.extensions().get::<SpanFields>() {
                        attributes.extend(fields.0.iter().cloned());
                    }
                }
            }
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        attributes.append(&mut visitor.attributes);

        let caller = if self.report_caller {
            meta.line().map(|line| Caller {
                function: meta.module_path().unwrap_or_else(|| meta.target()).to_string(),
                line,
            })
        } else {
            None
        };

        let record = LogRecord {
            timestamp: Utc::now(),
            level: Level::from(*meta.level()),
            message: visitor.message.unwrap_or_default(),
            caller,
            attributes,
        };

        self.write(&record);
    }
}

/// Collects the `message` field and the remaining fields, in the order
/// they were recorded.
#[derive(Default)]
pub struct FieldVisitor {
    pub attributes: Vec<(String, String)>,
    pub message: Option<String>,
    keep_message: bool,
}

impl FieldVisitor {
    /// Visitor for span fields: `message` stays an ordinary attribute in
    /// its recorded position.
    pub fn for_span() -> Self {
        FieldVisitor { keep_message: true, ..FieldVisitor::default() }
    }

    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" && !self.keep_message {
            self.message = Some(value);
        } else {
            self.attributes.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}
