use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for formatted lines.
///
/// Implementations receive one complete line per call, newline included,
/// and should write it atomically with respect to other lines.
pub trait LineSink: Send + Sync {
    /// Write a single formatted line.
    ///
    /// **Returns**
    /// - `Ok(())` once the bytes were handed to the underlying stream.
    /// - `Err(..)` on I/O failure. Adapters report the failure on stderr
    ///   and carry on; a failed write never aborts the logging call.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    /// Flush buffered output. Default implementation is a no-op.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes lines to the process stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Writes lines to the process stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}

/// In-memory sink. Clones share the same buffer, so a test can keep one
/// handle and give the other to a layer or logger.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Written lines without their trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buf.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.buf
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(line);
        Ok(())
    }
}
