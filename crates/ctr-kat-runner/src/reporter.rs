//! First-occurrence diagnostics per adaptor class
//!
//! Mismatches are counted for the whole run. Only the first report of each
//! [`AdaptorClass`] is written to the diagnostic sink; the sink is the only
//! place the message text goes. Every report is logged at `debug` level.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Which stream wrapper produced a mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptorClass {
    /// Single-use adaptor (`MicroUrng`)
    SingleUse,
    /// Stateful engine (`Engine`)
    Engine,
}

impl AdaptorClass {
    /// Label used in log events
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleUse => "single_use",
            Self::Engine => "engine",
        }
    }
}

/// Run-wide report counters and the sink first occurrences are written to
pub struct ErrorReporter {
    single_use: AtomicU64,
    engine: AtomicU64,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorReporter")
            .field("single_use", &self.count(AdaptorClass::SingleUse))
            .field("engine", &self.count(AdaptorClass::Engine))
            .finish_non_exhaustive()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl ErrorReporter {
    /// Reporter writing to standard error
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_sink(Box::new(io::stderr()))
    }

    /// Reporter writing to `sink`
    #[must_use]
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            single_use: AtomicU64::new(0),
            engine: AtomicU64::new(0),
            sink: Mutex::new(sink),
        }
    }

    /// Reporter writing into a shared in-memory buffer
    #[must_use]
    pub fn buffered() -> (Self, DiagnosticBuffer) {
        let buffer = DiagnosticBuffer::default();
        (Self::with_sink(Box::new(buffer.clone())), buffer)
    }

    /// Count a mismatch of `class`; emit `message` only if it is the first.
    ///
    /// Returns `true` when the message was emitted.
    pub fn report(&self, class: AdaptorClass, message: impl FnOnce() -> String) -> bool {
        let previous = self.counter(class).fetch_add(1, Ordering::AcqRel);
        tracing::debug!(class = class.as_str(), count = previous + 1, "mismatch counted");
        if previous != 0 {
            return false;
        }

        let message = message();
        tracing::debug!(class = class.as_str(), "first mismatch written to sink");
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(sink, "{message}").and_then(|()| sink.flush()) {
            tracing::error!(error = %e, "failed to write diagnostic");
        }
        true
    }

    /// Mismatches of `class` counted so far
    #[must_use]
    pub fn count(&self, class: AdaptorClass) -> u64 {
        self.counter(class).load(Ordering::Acquire)
    }

    fn counter(&self, class: AdaptorClass) -> &AtomicU64 {
        match class {
            AdaptorClass::SingleUse => &self.single_use,
            AdaptorClass::Engine => &self.engine,
        }
    }
}

/// Cloneable in-memory diagnostic sink
#[derive(Debug, Clone, Default)]
pub struct DiagnosticBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl DiagnosticBuffer {
    /// Everything written so far
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Written lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for DiagnosticBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
