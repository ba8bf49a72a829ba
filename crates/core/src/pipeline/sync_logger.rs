use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for synchronization pipeline events.
///
/// Decouples use cases from specific output mechanisms (stdout, log crate,
/// embedding applications) so each caller can observe pipeline behavior
/// without changing the orchestration code.
pub trait SyncLogger: Send {
    /// Report line-level alignment progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named pipeline stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-pipeline summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests and by embedders
/// with their own progress reporting.
pub struct NullSyncLogger;

impl SyncLogger for NullSyncLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tracks per-stage timing and provides a summary
/// report at pipeline completion.
pub struct StdoutSyncLogger {
    timings: HashMap<String, f64>,
    start_time: Instant,
    total_lines: usize,
    messages: Vec<String>,
}

impl StdoutSyncLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            start_time: Instant::now(),
            total_lines: 0,
            messages: Vec::new(),
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = Vec::new();

        lines.push(format!(
            "Sync summary ({} lines, {:.1}s total):",
            self.total_lines,
            elapsed_ms / 1000.0
        ));

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let total_ms = self.timings[stage];
            let pct = if elapsed_ms > 0.0 {
                total_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!("  {stage:12}: {total_ms:7.0}ms  ({pct:4.1}%)"));
        }

        Some(lines.join("\n"))
    }

    /// Returns the recorded total duration for a stage.
    pub fn timing_for(&self, stage: &str) -> Option<f64> {
        self.timings.get(stage).copied()
    }
}

impl Default for StdoutSyncLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncLogger for StdoutSyncLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_lines = total;
        if total > 0 {
            log::debug!("Aligned line {current}/{total}");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        *self.timings.entry(stage.to_string()).or_default() += duration_ms;
    }

    fn info(&mut self, message: &str) {
        self.messages.push(message.to_string());
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullSyncLogger;
        logger.progress(1, 10);
        logger.timing("transcribe", 5.0);
        logger.info("hello");
        logger.summary();
        // No panics = success
    }

    #[test]
    fn test_timing_accumulates_per_stage() {
        let mut logger = StdoutSyncLogger::new();
        logger.timing("transcribe", 20.0);
        logger.timing("transcribe", 30.0);
        logger.timing("align", 5.0);

        assert_eq!(logger.timing_for("transcribe"), Some(50.0));
        assert_eq!(logger.timing_for("align"), Some(5.0));
        assert_eq!(logger.timing_for("download"), None);
    }

    #[test]
    fn test_summary_includes_stages_and_line_count() {
        let mut logger = StdoutSyncLogger::new();
        logger.progress(3, 3);
        logger.timing("transcribe", 20.0);
        logger.timing("align", 5.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Sync summary (3 lines"));
        assert!(summary.contains("transcribe"));
        assert!(summary.contains("align"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutSyncLogger::new();
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_info_stores_messages() {
        let mut logger = StdoutSyncLogger::new();
        logger.info("hello world");
        assert_eq!(logger.messages.len(), 1);
        assert_eq!(logger.messages[0], "hello world");
    }
}
