use std::fmt;
use std::sync::Arc;

use chrono::Local;

type Sink = Arc<dyn Fn(&str) + Send + Sync>;

/// Where a [`Session`](crate::Session) sends its diagnostic lines.
///
/// Each session owns its logger, so tests can capture or silence output
/// without touching process-wide state.
#[derive(Clone)]
pub struct Logger {
    sink: Option<Sink>,
    enabled: bool,
}

impl Logger {
    /// Forwards lines to the `log` facade at debug level, target `clockify`.
    pub fn facade() -> Self {
        Self::from_fn(|line| log::debug!(target: "clockify", "{line}"))
    }

    /// Writes `[clockify] YYYY/MM/DD HH:MM:SS line` straight to stderr.
    pub fn stderr() -> Self {
        Self::from_fn(|line| {
            eprintln!(
                "[clockify] {} {line}",
                Local::now().format("%Y/%m/%d %H:%M:%S")
            )
        })
    }

    pub fn from_fn<F>(sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            sink: Some(Arc::new(sink)),
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            sink: None,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled && self.sink.is_some()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn log(&self, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }
        if let Some(sink) = &self.sink {
            sink(&args.to_string());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::facade()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_sink", &self.sink.is_some())
            .field("enabled", &self.enabled)
            .finish()
    }
}
