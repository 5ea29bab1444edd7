//! Hooks for watching range ingestion from the outside.
//!
//! [`ingest_from_path`](super::ingest_from_path) reports every attempt to an optional
//! [`IngestionObserver`]. Observers that only need a line of text per attempt implement
//! [`EventSink`] instead and get the observer callbacks for free; [`LogObserver`],
//! [`StdErrObserver`] and [`FileObserver`] all render the same [`IngestionEvent`] line.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::FrameError;

use super::unified::SourceFormat;

/// How bad a failed ingestion is. Ordered, so thresholds compare with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    Info,
    Warning,
    /// The range or source could not be read as asked.
    Error,
    /// The file itself could not be read.
    Critical,
}

/// What was being ingested.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    pub path: PathBuf,
    pub format: SourceFormat,
    /// `None` means the first sheet.
    pub sheet: Option<String>,
    /// Requested range as A1 references, e.g. `A5:C5`.
    pub range: String,
}

impl fmt::Display for IngestionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format={:?} path={} sheet={} range={}",
            self.format,
            self.path.display(),
            self.sheet.as_deref().unwrap_or("<first>"),
            self.range
        )
    }
}

/// Shape of a successfully ingested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Data rows below the header.
    pub rows: usize,
    pub columns: usize,
}

/// Receives the outcome of each ingestion attempt.
pub trait IngestionObserver: Send + Sync {
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &FrameError) {}

    /// Called after [`Self::on_failure`] when `severity` reaches the alert threshold.
    ///
    /// Defaults to a second `on_failure` call.
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &FrameError) {
        self.on_failure(ctx, severity, error)
    }
}

/// A single observer callback.
///
/// `Display` renders the one-line form shared by the text observers, without a timestamp:
///
/// ```text
/// ok format=Csv path=ledger.csv sheet=<first> range=A3:C3 rows=4 columns=3
/// fail severity=Error format=Csv path=ledger.csv sheet=<first> range=C3:A3 err=...
/// ALERT severity=Critical format=Csv path=missing.csv sheet=<first> range=A1:B1 err=...
/// ```
#[derive(Debug, Clone, Copy)]
pub enum IngestionEvent<'a> {
    Success {
        ctx: &'a IngestionContext,
        stats: IngestionStats,
    },
    Failure {
        ctx: &'a IngestionContext,
        severity: IngestionSeverity,
        error: &'a FrameError,
        alert: bool,
    },
}

impl IngestionEvent<'_> {
    /// Alerts are always [`log::Level::Error`]; plain failures below `Error` severity are warnings.
    pub fn log_level(&self) -> log::Level {
        match *self {
            Self::Success { .. } => log::Level::Info,
            Self::Failure { alert: true, .. } => log::Level::Error,
            Self::Failure { severity, .. } if severity >= IngestionSeverity::Error => log::Level::Error,
            Self::Failure { .. } => log::Level::Warn,
        }
    }
}

impl fmt::Display for IngestionEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { ctx, stats } => {
                write!(f, "ok {ctx} rows={} columns={}", stats.rows, stats.columns)
            }
            Self::Failure {
                ctx,
                severity,
                error,
                alert,
            } => {
                let tag = if *alert { "ALERT" } else { "fail" };
                write!(f, "{tag} severity={severity:?} {ctx} err={error}")
            }
        }
    }
}

/// An observer that only wants each event as a whole.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &IngestionEvent<'_>);
}

impl<S: EventSink> IngestionObserver for S {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.emit(&IngestionEvent::Success { ctx, stats });
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &FrameError) {
        self.emit(&IngestionEvent::Failure {
            ctx,
            severity,
            error,
            alert: false,
        });
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &FrameError) {
        self.emit(&IngestionEvent::Failure {
            ctx,
            severity,
            error,
            alert: true,
        });
    }
}

/// Forwards every callback to each inner observer, in order.
#[derive(Default, Clone)]
pub struct CompositeObserver(Vec<Arc<dyn IngestionObserver>>);

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self(observers)
    }

    pub fn push(&mut self, observer: Arc<dyn IngestionObserver>) {
        self.0.push(observer);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Arc<dyn IngestionObserver>> for CompositeObserver {
    fn from_iter<I: IntoIterator<Item = Arc<dyn IngestionObserver>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositeObserver").field(&self.0.len()).finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.0.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &FrameError) {
        self.0.iter().for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &FrameError) {
        self.0.iter().for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Routes events to the `log` facade at [`IngestionEvent::log_level`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl EventSink for LogObserver {
    fn emit(&self, event: &IngestionEvent<'_>) {
        log::log!(event.log_level(), "ingest {event}");
    }
}

/// Prints events to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdErrObserver;

impl EventSink for StdErrObserver {
    fn emit(&self, event: &IngestionEvent<'_>) {
        eprintln!("[ingest] {event}");
    }
}

/// Appends timestamped events to a file.
///
/// The file is opened on the first event and kept open. Open and write errors are dropped so a
/// broken log never fails an ingestion.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for FileObserver {
    fn emit(&self, event: &IngestionEvent<'_>) {
        let Ok(mut slot) = self.file.lock() else {
            return;
        };
        if slot.is_none() {
            *slot = OpenOptions::new().create(true).append(true).open(&self.path).ok();
        }
        if let Some(file) = slot.as_mut() {
            let ts = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            let _ = writeln!(file, "{ts} {event}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use super::{EventSink, IngestionContext, IngestionEvent, IngestionObserver, IngestionSeverity, IngestionStats};
    use crate::error::FrameError;
    use crate::ingestion::unified::SourceFormat;

    #[derive(Default)]
    struct Lines(Mutex<Vec<(log::Level, String)>>);

    impl EventSink for Lines {
        fn emit(&self, event: &IngestionEvent<'_>) {
            self.0.lock().unwrap().push((event.log_level(), event.to_string()));
        }
    }

    fn ctx() -> IngestionContext {
        IngestionContext {
            path: PathBuf::from("ledger.csv"),
            format: SourceFormat::Csv,
            sheet: None,
            range: "A3:C3".to_string(),
        }
    }

    #[test]
    fn sink_receives_rendered_callbacks() {
        let sink = Lines::default();
        let err = FrameError::MalformedRange {
            message: "bad".to_string(),
        };

        sink.on_success(&ctx(), IngestionStats { rows: 4, columns: 3 });
        sink.on_failure(&ctx(), IngestionSeverity::Warning, &err);
        sink.on_alert(&ctx(), IngestionSeverity::Error, &err);

        let lines = sink.0.into_inner().unwrap();
        assert_eq!(
            lines[0],
            (
                log::Level::Info,
                "ok format=Csv path=ledger.csv sheet=<first> range=A3:C3 rows=4 columns=3".to_string()
            )
        );
        assert_eq!(lines[1].0, log::Level::Warn);
        assert!(lines[1].1.starts_with("fail severity=Warning "));
        assert_eq!(lines[2].0, log::Level::Error);
        assert!(lines[2].1.starts_with("ALERT severity=Error "));
        assert!(lines[2].1.ends_with("err=malformed range: bad"));
    }

    #[test]
    fn severities_are_ordered() {
        assert!(IngestionSeverity::Info < IngestionSeverity::Warning);
        assert!(IngestionSeverity::Error < IngestionSeverity::Critical);
    }
}
